use leptos::wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget, HtmlElement, WheelEvent};

use scrollfeed_utils::constants::{MOUSEWHEEL_EVENT, RESIZE_EVENT, SCROLL_EVENT};
use scrollfeed_utils::errors::ScrollError;
use scrollfeed_utils::geometry::{supports_passive_listeners, viewport_height, window_scroll_top};

use crate::config::{ListenerOptions, ScrollSource};
use crate::engine::{should_suppress_wheel, ScrollHost};

/// [`ScrollHost`] backed by the browser's DOM.
///
/// The listener closures live as long as the host, so that every detach removes exactly the functions that were
/// attached.
pub struct DomHost {
    scroll_listener: Closure<dyn FnMut(Event)>,
    wheel_listener: Closure<dyn FnMut(WheelEvent)>,
    passive_supported: bool,
}

impl DomHost {
    /// Creates a host calling `on_scroll` for every `scroll` or `resize` event of an attached source.
    pub fn new<F: FnMut() + 'static>(mut on_scroll: F) -> Self {
        let passive_supported = supports_passive_listeners();
        let scroll_listener = Closure::<dyn FnMut(Event)>::new(move |_: Event| on_scroll());
        let wheel_listener = Closure::<dyn FnMut(WheelEvent)>::new(move |event: WheelEvent| {
            if should_suppress_wheel(event.delta_y(), passive_supported) {
                event.prevent_default();
            }
        });
        Self {
            scroll_listener,
            wheel_listener,
            passive_supported,
        }
    }

    fn event_target(source: &ScrollSource<HtmlElement>) -> Result<EventTarget, ScrollError> {
        match source {
            ScrollSource::Window => web_sys::window()
                .map(EventTarget::from)
                .ok_or(ScrollError::WindowUnavailable),
            ScrollSource::Element(element) => Ok(EventTarget::from(element.clone())),
        }
    }

    fn listeners(&self) -> [(&'static str, &js_sys::Function); 3] {
        [
            (MOUSEWHEEL_EVENT, self.wheel_listener.as_ref().unchecked_ref()),
            (SCROLL_EVENT, self.scroll_listener.as_ref().unchecked_ref()),
            (RESIZE_EVENT, self.scroll_listener.as_ref().unchecked_ref()),
        ]
    }
}

impl ScrollHost for DomHost {
    type Element = HtmlElement;

    fn window_scroll_top(&self) -> f64 {
        window_scroll_top().unwrap_or_else(|e| {
            log::debug!("Cannot read window scroll top: {e}");
            0.0
        })
    }

    fn viewport_height(&self) -> f64 {
        viewport_height().unwrap_or_else(|e| {
            log::debug!("Cannot read viewport height: {e}");
            0.0
        })
    }

    fn supports_passive_listeners(&self) -> bool {
        self.passive_supported
    }

    fn add_listeners(
        &self,
        source: &ScrollSource<HtmlElement>,
        options: ListenerOptions,
    ) -> Result<(), ScrollError> {
        let target = Self::event_target(source)?;
        let listener_options = AddEventListenerOptions::new();
        listener_options.set_capture(options.capture);
        listener_options.set_passive(options.passive);

        for (event, listener) in self.listeners() {
            if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(event, listener, &listener_options) {
                self.remove_listeners(source, options);
                return Err(ScrollError::ListenerRegistration(format!("{event}: {e:?}")));
            }
        }
        Ok(())
    }

    fn remove_listeners(&self, source: &ScrollSource<HtmlElement>, options: ListenerOptions) {
        let target = match Self::event_target(source) {
            Ok(target) => target,
            Err(e) => {
                log::debug!("Cannot remove scroll listeners: {e}");
                return;
            }
        };
        for (event, listener) in self.listeners() {
            if let Err(e) = target.remove_event_listener_with_callback_and_bool(event, listener, options.capture) {
                log::debug!("Failed to remove {event} listener: {e:?}");
            }
        }
    }
}
