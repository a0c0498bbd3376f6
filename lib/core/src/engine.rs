use std::cell::RefCell;
use std::rc::Weak;

use scrollfeed_utils::errors::ScrollError;
use scrollfeed_utils::geometry::{distance_to_threshold, is_visible, LayoutElement};

use crate::config::{ListenerOptions, ScrollConfig, ScrollSource};

/// Environment of an [`InfiniteScrollEngine`]: viewport geometry and the subscription to scroll signals.
///
/// A host delivers `scroll` and `resize` events of an attached source to [`InfiniteScrollEngine::handle_scroll`].
pub trait ScrollHost {
    type Element: LayoutElement + Clone;

    fn window_scroll_top(&self) -> f64;
    fn viewport_height(&self) -> f64;
    fn supports_passive_listeners(&self) -> bool;
    /// Subscribes to the `scroll`, `resize` and `mousewheel` events of `source`.
    fn add_listeners(
        &self,
        source: &ScrollSource<Self::Element>,
        options: ListenerOptions,
    ) -> Result<(), ScrollError>;
    fn remove_listeners(&self, source: &ScrollSource<Self::Element>, options: ListenerOptions);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EngineState {
    pub page_loaded: i32,
    pub listener_options: ListenerOptions,
    pub mounted: bool,
    pub pending_reverse_adjustment: bool,
    pub before_scroll_height: f64,
    pub before_scroll_top: f64,
}

#[derive(Clone, Debug, PartialEq)]
struct AttachedListeners<E> {
    source: ScrollSource<E>,
    options: ListenerOptions,
}

/// Decides when to call `load_more` based on the scroll position of a region.
///
/// The engine is either attached (listening for scroll events of its source) or detached. It detaches as soon as a
/// load is triggered and attaches again on the next update pass if the caller still has more content.
pub struct InfiniteScrollEngine<H: ScrollHost> {
    host: H,
    config: ScrollConfig<H::Element>,
    region: Option<H::Element>,
    state: EngineState,
    listeners: Option<AttachedListeners<H::Element>>,
}

impl<H: ScrollHost> InfiniteScrollEngine<H> {
    pub fn new(host: H, config: ScrollConfig<H::Element>) -> Self {
        let state = EngineState {
            page_loaded: config.page_start,
            ..Default::default()
        };
        Self {
            host,
            config,
            region: None,
            state,
            listeners: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &ScrollConfig<H::Element> {
        &self.config
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn page_loaded(&self) -> i32 {
        self.state.page_loaded
    }

    pub fn is_attached(&self) -> bool {
        self.listeners.is_some()
    }

    pub fn attached_source(&self) -> Option<&ScrollSource<H::Element>> {
        self.listeners.as_ref().map(|listeners| &listeners.source)
    }

    pub fn region(&self) -> Option<&H::Element> {
        self.region.as_ref()
    }

    /// Binds the engine to the element it observes.
    pub fn set_region(&mut self, region: Option<H::Element>) {
        self.region = region;
    }

    /// Mounts the engine: initializes the page counter, resolves listener options and attaches if there is more content.
    pub fn on_attach(&mut self) {
        if self.state.mounted {
            log::debug!("Infinite scroll engine already mounted.");
            return;
        }
        self.state.page_loaded = self.config.page_start;
        self.state.listener_options = ListenerOptions::resolve(
            self.config.use_capture,
            self.host.supports_passive_listeners(),
        );
        self.state.mounted = true;
        log::debug!("Mount infinite scroll engine with listener options {:?}", self.state.listener_options);
        self.attach_listeners();
    }

    /// Update pass with a new configuration.
    pub fn on_external_state_change(&mut self, config: ScrollConfig<H::Element>) {
        self.config = config;
        self.on_content_change();
    }

    /// Update pass with the current configuration, to run once new content has been rendered.
    pub fn on_content_change(&mut self) {
        if !self.state.mounted {
            self.on_attach();
            return;
        }

        if self.state.pending_reverse_adjustment {
            match self.resolve_scroll_parent() {
                Some(parent) => parent.set_scroll_top(
                    parent.scroll_height() - self.state.before_scroll_height + self.state.before_scroll_top
                ),
                None => log::debug!("Skip reverse scroll adjustment: {}", ScrollError::ScrollParentUnavailable),
            }
            self.state.pending_reverse_adjustment = false;
        }

        match self.config.has_more {
            true => self.attach_listeners(),
            false => self.detach_listeners(),
        }
    }

    /// Unmounts the engine, can be called any number of times.
    pub fn on_detach(&mut self) {
        self.detach_listeners();
    }

    /// Trigger check, returns whether `load_more` was called.
    pub fn handle_scroll(&mut self) -> bool {
        if !self.config.has_more || self.listeners.is_none() {
            return false;
        }
        let Some(offset) = self.offset_to_threshold() else {
            log::trace!("No offset to threshold, scroll parent is not available.");
            return false;
        };
        log::trace!("Offset to threshold: {offset}, threshold: {}", self.config.threshold);

        // a NaN offset or threshold never triggers
        if !(offset < self.config.threshold && is_visible(self.region.as_ref())) {
            return false;
        }

        // detach first so that a synchronous load_more cannot trigger twice
        self.detach_listeners();
        if let Some(parent) = self.resolve_scroll_parent() {
            self.state.before_scroll_height = parent.scroll_height();
            self.state.before_scroll_top = parent.scroll_top();
        }
        self.state.page_loaded = self.state.page_loaded.saturating_add(1);
        log::debug!("Load page {}", self.state.page_loaded);
        (self.config.load_more)(self.state.page_loaded);
        self.state.pending_reverse_adjustment = self.config.is_reverse;
        true
    }

    fn offset_to_threshold(&self) -> Option<f64> {
        match (self.config.use_window, self.config.is_reverse) {
            (true, true) => Some(self.host.window_scroll_top()),
            (true, false) => Some(distance_to_threshold(
                self.region.as_ref(),
                self.host.window_scroll_top(),
                self.host.viewport_height(),
            )),
            (false, true) => self.resolve_scroll_parent().map(|parent| parent.scroll_top()),
            (false, false) => {
                let region = self.region.as_ref()?;
                let parent = self.resolve_scroll_parent()?;
                Some(region.scroll_height() - parent.scroll_top() - parent.client_height())
            },
        }
    }

    fn resolve_scroll_parent(&self) -> Option<H::Element> {
        if let Some(scroll_parent) = self.config.get_scroll_parent.as_ref().and_then(|get_scroll_parent| get_scroll_parent()) {
            return Some(scroll_parent);
        }
        self.region.as_ref().and_then(|region| region.parent_element())
    }

    fn attach_listeners(&mut self) {
        if !self.config.has_more || self.listeners.is_some() {
            return;
        }
        let Some(parent) = self.resolve_scroll_parent() else {
            log::debug!("Skip attaching scroll listeners: {}", ScrollError::ScrollParentUnavailable);
            return;
        };
        let source = match self.config.use_window {
            true => ScrollSource::Window,
            false => ScrollSource::Element(parent),
        };
        let options = self.state.listener_options;

        if let Err(e) = self.host.add_listeners(&source, options) {
            log::warn!("Failed to attach scroll listeners: {e}");
            return;
        }
        log::debug!("Attached scroll listeners, use window: {}", self.config.use_window);
        self.listeners = Some(AttachedListeners { source, options });

        if self.config.initial_load {
            self.handle_scroll();
        }
    }

    fn detach_listeners(&mut self) {
        if let Some(AttachedListeners { source, options }) = self.listeners.take() {
            self.host.remove_listeners(&source, options);
            log::debug!("Detached scroll listeners");
        }
    }
}

/// Runs the trigger check of a shared engine and returns whether `load_more` was called.
///
/// The event is dropped when the engine no longer exists or is already borrowed, e.g. by an update pass or by a
/// `load_more` callback dispatching events synchronously.
pub fn dispatch_scroll<H: ScrollHost>(engine: &Weak<RefCell<InfiniteScrollEngine<H>>>) -> bool {
    let Some(engine) = engine.upgrade() else {
        return false;
    };
    let triggered = match engine.try_borrow_mut() {
        Ok(mut engine) => engine.handle_scroll(),
        Err(_) => {
            log::trace!("Scroll engine busy, ignore scroll event.");
            false
        },
    };
    triggered
}

/// Whether a wheel event must have its default prevented, works around scroll stalls of browsers without passive
/// listeners.
pub fn should_suppress_wheel(delta_y: f64, passive_supported: bool) -> bool {
    !passive_supported && delta_y == 1.0
}

#[cfg(test)]
mod tests {
    use crate::engine::should_suppress_wheel;

    #[test]
    fn test_should_suppress_wheel() {
        assert!(should_suppress_wheel(1.0, false));
        assert!(!should_suppress_wheel(1.0, true));
        assert!(!should_suppress_wheel(-1.0, false));
        assert!(!should_suppress_wheel(0.0, false));
        assert!(!should_suppress_wheel(100.0, false));
    }
}
