use std::time::Duration;

use leptos::prelude::*;
use leptos_router::components::A;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use scrollfeed_components::card::RecipeCard;
use scrollfeed_components::infinite_scroll::{ContainerElement, InfiniteScroll};
use scrollfeed_utils::constants::{CONTAINER_ROUTE, REVERSE_ROUTE, SITE_ROOT};

pub const INITIAL_ITEMS: [usize; 2] = [0, 1];
pub const MAX_LOAD_DELAY_MS: u64 = 1500;

/// Scrolling setup demonstrated by a page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum DemoMode {
    #[default]
    Window,
    Container,
    Reverse,
}

impl DemoMode {
    pub fn path(self) -> String {
        match self {
            DemoMode::Window => String::from(SITE_ROOT),
            DemoMode::Container => format!("{SITE_ROOT}{CONTAINER_ROUTE}"),
            DemoMode::Reverse => format!("{SITE_ROOT}{REVERSE_ROUTE}"),
        }
    }

    pub fn use_window(self) -> bool {
        self == DemoMode::Window
    }

    pub fn is_reverse(self) -> bool {
        self == DemoMode::Reverse
    }
}

/// Adds the next item, at the start of the list in reverse mode.
pub fn add_item(items: &mut Vec<usize>, mode: DemoMode) {
    let next_item = items.len();
    match mode.is_reverse() {
        true => items.insert(0, next_item),
        false => items.push(next_item),
    }
}

/// Links to every demo page
#[component]
pub fn DemoNavigation() -> impl IntoView {
    view! {
        <div class="flex-none flex justify-center gap-2 w-full p-2 bg-blue-500">
        {
            DemoMode::iter().map(|mode| view! {
                <A href=mode.path() attr:class="button-ghost">{<&'static str>::from(mode)}</A>
            }).collect_view()
        }
        </div>
    }
}

/// Endless list of recipe cards, a new card is added after a random delay whenever more content is requested.
#[component]
pub fn DemoFeed(
    mode: DemoMode,
) -> impl IntoView {
    let items = RwSignal::new(Vec::from(INITIAL_ITEMS));
    let content_key = Signal::derive(move || items.read().len());
    let load_more = Callback::new(move |page: i32| {
        let delay = Duration::from_millis(rand::random_range(1..=MAX_LOAD_DELAY_MS));
        log::debug!("Load page {page} of {mode:?} demo in {delay:?}");
        set_timeout(move || items.update(|items| add_item(items, mode)), delay);
    });
    let feed_class = match mode.use_window() {
        true => "flex flex-col items-center w-full",
        false => "flex flex-col items-center w-full h-[70vh] overflow-y-auto",
    };

    view! {
        <div class=feed_class>
            <InfiniteScroll
                load_more
                has_more=true
                use_window=mode.use_window()
                is_reverse=mode.is_reverse()
                content_key
                element=ContainerElement::Section
                loader=|| view! { <RecipeCard loading=true/> }
                class="flex flex-col items-center"
            >
                <For
                    each=move || items.get()
                    key=|item| *item
                    let:_item
                >
                    <RecipeCard/>
                </For>
            </InfiniteScroll>
        </div>
    }
}
