use leptos::html;
use leptos::prelude::*;
use strum_macros::{EnumIter, IntoStaticStr};
use web_sys::HtmlElement;

use scrollfeed_core::hook::{use_infinite_scroll, UseInfiniteScrollOptions};
use scrollfeed_utils::constants::{DEFAULT_PAGE_START, DEFAULT_THRESHOLD, LOADER_TEXT};

/// Tag of the container rendered by [`InfiniteScroll`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ContainerElement {
    #[default]
    Div,
    Ul,
    Section,
}

/// Side of the children where the loader is rendered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoaderPosition {
    Before,
    After,
}

/// Where to render the loader, or `None` when no more content is expected.
pub fn loader_position(has_more: bool, is_reverse: bool) -> Option<LoaderPosition> {
    match (has_more, is_reverse) {
        (false, _) => None,
        (true, true) => Some(LoaderPosition::Before),
        (true, false) => Some(LoaderPosition::After),
    }
}

/// Container calling `load_more` with the next page number when the user scrolls close to its end (or to its start
/// when `is_reverse` is set).
///
/// `content_key` must change whenever new children are rendered, so that listeners can be attached again once a load
/// completes. Attributes set with `attr:` are forwarded to the container.
#[component]
pub fn InfiniteScroll(
    #[prop(optional, into)]
    load_more: Option<Callback<i32>>,
    #[prop(into, default = Signal::stored(false))]
    has_more: Signal<bool>,
    #[prop(default = true)]
    initial_load: bool,
    #[prop(default = DEFAULT_PAGE_START)]
    page_start: i32,
    #[prop(into, default = Signal::stored(DEFAULT_THRESHOLD))]
    threshold: Signal<f64>,
    #[prop(default = true)]
    use_window: bool,
    #[prop(into, default = Signal::stored(false))]
    is_reverse: Signal<bool>,
    #[prop(optional)]
    use_capture: bool,
    #[prop(optional, into)]
    get_scroll_parent: Option<Callback<(), Option<HtmlElement>>>,
    #[prop(into, default = Signal::stored(0))]
    content_key: Signal<usize>,
    #[prop(optional)]
    element: ContainerElement,
    #[prop(optional, into)]
    loader: Option<ViewFn>,
    #[prop(optional)]
    class: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let options = UseInfiniteScrollOptions {
        load_more,
        has_more,
        initial_load,
        page_start,
        threshold,
        use_window,
        is_reverse,
        use_capture,
        get_scroll_parent,
        content_key,
    };
    let loader = StoredValue::new(loader.unwrap_or_else(|| ViewFn::from(|| view! { <div>{LOADER_TEXT}</div> })));
    let loader_view = move |position: LoaderPosition| move || {
        (loader_position(has_more.get(), is_reverse.get()) == Some(position)).then(|| loader.with_value(|loader| loader.run()))
    };
    log::debug!("Render infinite scroll container as <{}>", <&'static str>::from(element));

    match element {
        ContainerElement::Div => {
            let region_ref = use_infinite_scroll::<html::Div>(options);
            view! {
                <div node_ref=region_ref class=class>
                    {loader_view(LoaderPosition::Before)}
                    {children()}
                    {loader_view(LoaderPosition::After)}
                </div>
            }.into_any()
        },
        ContainerElement::Ul => {
            let region_ref = use_infinite_scroll::<html::Ul>(options);
            view! {
                <ul node_ref=region_ref class=class>
                    {loader_view(LoaderPosition::Before)}
                    {children()}
                    {loader_view(LoaderPosition::After)}
                </ul>
            }.into_any()
        },
        ContainerElement::Section => {
            let region_ref = use_infinite_scroll::<html::Section>(options);
            view! {
                <section node_ref=region_ref class=class>
                    {loader_view(LoaderPosition::Before)}
                    {children()}
                    {loader_view(LoaderPosition::After)}
                </section>
            }.into_any()
        },
    }
}
