use std::fmt;
use std::rc::Rc;

use scrollfeed_utils::constants::{DEFAULT_PAGE_START, DEFAULT_THRESHOLD};

pub type LoadMoreFn = Rc<dyn Fn(i32)>;
pub type ScrollParentFn<E> = Rc<dyn Fn() -> Option<E>>;

/// Configuration of an infinite scroll engine, supplied by the caller on every update.
pub struct ScrollConfig<E> {
    /// called with the number of the next page to load
    pub load_more: LoadMoreFn,
    /// whether more content may exist, listening is only active when true
    pub has_more: bool,
    /// run a trigger check as soon as listeners are attached
    pub initial_load: bool,
    pub page_start: i32,
    /// distance from the edge of the region, in pixels, below which a load is triggered
    pub threshold: f64,
    /// listen on the window instead of the parent of the region
    pub use_window: bool,
    /// content is loaded at the top of the region
    pub is_reverse: bool,
    pub use_capture: bool,
    /// custom scroll container, takes precedence over the parent of the region when it returns an element
    pub get_scroll_parent: Option<ScrollParentFn<E>>,
}

impl<E> Default for ScrollConfig<E> {
    fn default() -> Self {
        Self {
            load_more: Rc::new(|_: i32| ()),
            has_more: false,
            initial_load: true,
            page_start: DEFAULT_PAGE_START,
            threshold: DEFAULT_THRESHOLD,
            use_window: true,
            is_reverse: false,
            use_capture: false,
            get_scroll_parent: None,
        }
    }
}

impl<E> Clone for ScrollConfig<E> {
    fn clone(&self) -> Self {
        Self {
            load_more: self.load_more.clone(),
            has_more: self.has_more,
            initial_load: self.initial_load,
            page_start: self.page_start,
            threshold: self.threshold,
            use_window: self.use_window,
            is_reverse: self.is_reverse,
            use_capture: self.use_capture,
            get_scroll_parent: self.get_scroll_parent.clone(),
        }
    }
}

impl<E> fmt::Debug for ScrollConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollConfig")
            .field("has_more", &self.has_more)
            .field("initial_load", &self.initial_load)
            .field("page_start", &self.page_start)
            .field("threshold", &self.threshold)
            .field("use_window", &self.use_window)
            .field("is_reverse", &self.is_reverse)
            .field("use_capture", &self.use_capture)
            .field("get_scroll_parent", &self.get_scroll_parent.is_some())
            .finish_non_exhaustive()
    }
}

/// Flags used for every attach and detach of the scroll listeners
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerOptions {
    pub capture: bool,
    pub passive: bool,
}

impl ListenerOptions {
    pub fn resolve(use_capture: bool, passive_supported: bool) -> Self {
        match passive_supported {
            true => ListenerOptions { capture: use_capture, passive: true },
            false => ListenerOptions { capture: false, passive: false },
        }
    }
}

/// Object the scroll listeners are attached to
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollSource<E> {
    Window,
    Element(E),
}

#[cfg(test)]
mod tests {
    use crate::config::{ListenerOptions, ScrollConfig};

    #[test]
    fn test_scroll_config_default() {
        let config = ScrollConfig::<()>::default();
        assert!(!config.has_more);
        assert!(config.initial_load);
        assert_eq!(config.page_start, 0);
        assert_eq!(config.threshold, 250.0);
        assert!(config.use_window);
        assert!(!config.is_reverse);
        assert!(!config.use_capture);
        assert!(config.get_scroll_parent.is_none());
        (config.load_more)(1);
    }

    #[test]
    fn test_listener_options_resolve() {
        assert_eq!(ListenerOptions::resolve(false, true), ListenerOptions { capture: false, passive: true });
        assert_eq!(ListenerOptions::resolve(true, true), ListenerOptions { capture: true, passive: true });
        assert_eq!(ListenerOptions::resolve(true, false), ListenerOptions { capture: false, passive: false });
        assert_eq!(ListenerOptions::resolve(false, false), ListenerOptions { capture: false, passive: false });
    }
}
