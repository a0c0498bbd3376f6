use std::rc::Rc;

use leptos::html::ElementType;
use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use scrollfeed_utils::constants::{DEFAULT_PAGE_START, DEFAULT_THRESHOLD};

use crate::config::{ScrollConfig, ScrollParentFn};

/// Options of [`use_infinite_scroll`], signals are tracked and trigger an update pass of the engine when they change.
#[derive(Clone)]
pub struct UseInfiniteScrollOptions {
    /// called with the number of the next page to load
    pub load_more: Option<Callback<i32>>,
    pub has_more: Signal<bool>,
    pub initial_load: bool,
    pub page_start: i32,
    pub threshold: Signal<f64>,
    pub use_window: bool,
    pub is_reverse: Signal<bool>,
    pub use_capture: bool,
    pub get_scroll_parent: Option<Callback<(), Option<HtmlElement>>>,
    /// changes whenever the caller renders new content
    pub content_key: Signal<usize>,
}

impl Default for UseInfiniteScrollOptions {
    fn default() -> Self {
        Self {
            load_more: None,
            has_more: Signal::stored(false),
            initial_load: true,
            page_start: DEFAULT_PAGE_START,
            threshold: Signal::stored(DEFAULT_THRESHOLD),
            use_window: true,
            is_reverse: Signal::stored(false),
            use_capture: false,
            get_scroll_parent: None,
            content_key: Signal::stored(0),
        }
    }
}

impl UseInfiniteScrollOptions {
    /// Engine configuration with the current value of every signal.
    pub fn engine_config(&self) -> ScrollConfig<HtmlElement> {
        let load_more = self.load_more;
        let get_scroll_parent = self.get_scroll_parent.map(|get_scroll_parent| {
            Rc::new(move || get_scroll_parent.run(())) as ScrollParentFn<HtmlElement>
        });
        ScrollConfig {
            load_more: Rc::new(move |page: i32| {
                if let Some(load_more) = load_more {
                    load_more.run(page);
                }
            }),
            has_more: self.has_more.get(),
            initial_load: self.initial_load,
            page_start: self.page_start,
            threshold: self.threshold.get(),
            use_window: self.use_window,
            is_reverse: self.is_reverse.get(),
            use_capture: self.use_capture,
            get_scroll_parent,
        }
    }
}

/// Loads more content as the user scrolls.
///
/// Returns the reference to bind to the element whose distance to the edge of the viewport (or of its scroll parent)
/// is monitored. `load_more` is called with the next page number whenever that distance drops below the threshold.
pub fn use_infinite_scroll<E>(options: UseInfiniteScrollOptions) -> NodeRef<E>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    let region_ref = NodeRef::<E>::new();
    #[cfg(feature = "hydrate")]
    {
        // only enable with "hydrate" to avoid server side "Dropped SendWrapper" error
        bind_scroll_engine(region_ref, options);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = options;
    region_ref
}

#[cfg(feature = "hydrate")]
fn bind_scroll_engine<E>(region_ref: NodeRef<E>, options: UseInfiniteScrollOptions)
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    use std::cell::RefCell;
    use std::rc::Weak;
    use send_wrapper::SendWrapper;
    use crate::dom::DomHost;
    use crate::engine::{dispatch_scroll, InfiniteScrollEngine};

    type DomEngine = InfiniteScrollEngine<DomHost>;

    let engine = Rc::new_cyclic(|engine_ref: &Weak<RefCell<DomEngine>>| {
        let engine_ref = engine_ref.clone();
        let host = DomHost::new(move || {
            dispatch_scroll(&engine_ref);
        });
        RefCell::new(InfiniteScrollEngine::new(host, ScrollConfig::default()))
    });

    Effect::new({
        let engine = engine.clone();
        move |_| {
            let config = options.engine_config();
            options.content_key.track();
            let region = region_ref.get().and_then(|element| element.dyn_into::<HtmlElement>().ok());
            match engine.try_borrow_mut() {
                Ok(mut engine) => {
                    engine.set_region(region);
                    engine.on_external_state_change(config);
                },
                Err(_) => log::warn!("Scroll engine busy, skip update pass."),
            }
        }
    });

    let engine = SendWrapper::new(engine);
    on_cleanup(move || match engine.try_borrow_mut() {
        Ok(mut engine) => engine.on_detach(),
        Err(_) => log::warn!("Scroll engine busy, cannot detach its listeners."),
    });
}
