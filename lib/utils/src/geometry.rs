use std::cell::Cell;
use std::rc::Rc;

use leptos::wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{AddEventListenerOptions, Element, HtmlElement, Node};

use crate::constants::{MAX_OFFSET_PARENT_DEPTH, PASSIVE_PROBE_EVENT};
use crate::errors::ScrollError;

/// Layout and scroll geometry of an element, in pixels.
///
/// Implemented for [`HtmlElement`] in the browser, and by in-memory nodes in tests.
pub trait LayoutElement: Sized {
    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;
    /// Nearest positioned ancestor, `None` when the element or one of its ancestors is hidden.
    fn offset_parent(&self) -> Option<Self>;
    fn parent_element(&self) -> Option<Self>;
    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&self, scroll_top: f64);
    fn scroll_height(&self) -> f64;
    fn client_height(&self) -> f64;
}

impl LayoutElement for HtmlElement {
    fn offset_top(&self) -> f64 {
        f64::from(HtmlElement::offset_top(self))
    }

    fn offset_height(&self) -> f64 {
        f64::from(HtmlElement::offset_height(self))
    }

    fn offset_parent(&self) -> Option<Self> {
        HtmlElement::offset_parent(self).and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
    }

    fn parent_element(&self) -> Option<Self> {
        Node::parent_element(self).and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
    }

    fn scroll_top(&self) -> f64 {
        f64::from(Element::scroll_top(self))
    }

    fn set_scroll_top(&self, scroll_top: f64) {
        Element::set_scroll_top(self, scroll_top.round() as i32)
    }

    fn scroll_height(&self) -> f64 {
        f64::from(Element::scroll_height(self))
    }

    fn client_height(&self) -> f64 {
        f64::from(Element::client_height(self))
    }
}

/// Distance between the top of the document and the top of `el`, summed over its chain of offset parents.
pub fn top_offset<E: LayoutElement>(el: Option<&E>) -> f64 {
    let Some(el) = el else {
        return 0.0;
    };
    let mut offset = el.offset_top();
    let mut current = el.offset_parent();
    let mut depth = 1;
    while let Some(parent) = current {
        if depth >= MAX_OFFSET_PARENT_DEPTH {
            log::warn!("Offset parent chain exceeds {MAX_OFFSET_PARENT_DEPTH} elements, stop walking it.");
            break;
        }
        offset += parent.offset_top();
        current = parent.offset_parent();
        depth += 1;
    }
    offset
}

/// Remaining distance to scroll before the bottom edge of `el` reaches the bottom edge of the viewport.
pub fn distance_to_threshold<E: LayoutElement>(
    el: Option<&E>,
    scroll_top: f64,
    viewport_height: f64,
) -> f64 {
    match el {
        Some(el) => top_offset(Some(el)) + el.offset_height() - scroll_top - viewport_height,
        None => 0.0,
    }
}

/// Whether `el` is rendered, i.e. neither it nor one of its ancestors has `display: none`.
pub fn is_visible<E: LayoutElement>(el: Option<&E>) -> bool {
    el.is_some_and(|el| el.offset_parent().is_some())
}

/// Probes whether the browser reads the `passive` member of event listener options.
pub fn supports_passive_listeners() -> bool {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return false;
    };

    let is_passive_read = Rc::new(Cell::new(false));
    let passive_getter = {
        let is_passive_read = is_passive_read.clone();
        Closure::<dyn Fn() -> JsValue>::new(move || {
            is_passive_read.set(true);
            JsValue::TRUE
        })
    };
    let descriptor = js_sys::Object::new();
    if js_sys::Reflect::set(&descriptor, &JsValue::from_str("get"), passive_getter.as_ref()).is_err() {
        return false;
    }
    let options = js_sys::Object::new();
    js_sys::Object::define_property(&options, &JsValue::from_str("passive"), &descriptor);

    let probe = Closure::<dyn Fn()>::new(|| ());
    let probe_fn = probe.as_ref().unchecked_ref();
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        PASSIVE_PROBE_EVENT,
        probe_fn,
        options.unchecked_ref::<AddEventListenerOptions>(),
    );
    let _ = document.remove_event_listener_with_callback(PASSIVE_PROBE_EVENT, probe_fn);

    is_passive_read.get()
}

/// Vertical scroll position of the window.
pub fn window_scroll_top() -> Result<f64, ScrollError> {
    let window = web_sys::window().ok_or(ScrollError::WindowUnavailable)?;
    match window.page_y_offset() {
        Ok(scroll_top) => Ok(scroll_top),
        Err(_) => Ok(window
            .document()
            .and_then(|document| document.document_element())
            .map(|element| f64::from(element.scroll_top()))
            .unwrap_or_default()),
    }
}

/// Inner height of the window.
pub fn viewport_height() -> Result<f64, ScrollError> {
    let window = web_sys::window().ok_or(ScrollError::WindowUnavailable)?;
    Ok(window.inner_height().ok().and_then(|height| height.as_f64()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use float_cmp::approx_eq;

    use crate::constants::MAX_OFFSET_PARENT_DEPTH;
    use crate::geometry::{distance_to_threshold, is_visible, top_offset, LayoutElement};

    #[derive(Default)]
    struct NodeData {
        offset_top: f64,
        offset_height: f64,
        offset_parent: Option<TestNode>,
    }

    #[derive(Clone, Default)]
    struct TestNode(Rc<RefCell<NodeData>>);

    impl TestNode {
        fn new(offset_top: f64, offset_height: f64, offset_parent: Option<&TestNode>) -> Self {
            TestNode(Rc::new(RefCell::new(NodeData {
                offset_top,
                offset_height,
                offset_parent: offset_parent.cloned(),
            })))
        }
    }

    impl LayoutElement for TestNode {
        fn offset_top(&self) -> f64 {
            self.0.borrow().offset_top
        }

        fn offset_height(&self) -> f64 {
            self.0.borrow().offset_height
        }

        fn offset_parent(&self) -> Option<Self> {
            self.0.borrow().offset_parent.clone()
        }

        fn parent_element(&self) -> Option<Self> {
            self.offset_parent()
        }

        fn scroll_top(&self) -> f64 {
            0.0
        }

        fn set_scroll_top(&self, _scroll_top: f64) {}

        fn scroll_height(&self) -> f64 {
            self.offset_height()
        }

        fn client_height(&self) -> f64 {
            self.offset_height()
        }
    }

    #[test]
    fn test_top_offset() {
        assert!(approx_eq!(f64, top_offset::<TestNode>(None), 0.0));

        let body = TestNode::new(0.0, 2000.0, None);
        let section = TestNode::new(120.0, 1500.0, Some(&body));
        let list = TestNode::new(30.5, 900.0, Some(&section));
        assert!(approx_eq!(f64, top_offset(Some(&body)), 0.0));
        assert!(approx_eq!(f64, top_offset(Some(&section)), 120.0));
        assert!(approx_eq!(f64, top_offset(Some(&list)), 150.5));
    }

    #[test]
    fn test_top_offset_cyclic_chain() {
        let node = TestNode::new(2.0, 10.0, None);
        node.0.borrow_mut().offset_parent = Some(node.clone());
        assert!(approx_eq!(f64, top_offset(Some(&node)), 2.0 * MAX_OFFSET_PARENT_DEPTH as f64));
        node.0.borrow_mut().offset_parent = None;
    }

    #[test]
    fn test_distance_to_threshold() {
        assert!(approx_eq!(f64, distance_to_threshold::<TestNode>(None, 100.0, 800.0), 0.0));

        let body = TestNode::new(0.0, 3000.0, None);
        let list = TestNode::new(100.0, 1500.0, Some(&body));
        // bottom of the list at 1600, bottom of the viewport at 800
        assert!(approx_eq!(f64, distance_to_threshold(Some(&list), 0.0, 800.0), 800.0));
        assert!(approx_eq!(f64, distance_to_threshold(Some(&list), 600.0, 800.0), 200.0));
        assert!(approx_eq!(f64, distance_to_threshold(Some(&list), 1000.0, 800.0), -200.0));
    }

    #[test]
    fn test_is_visible() {
        let body = TestNode::new(0.0, 1000.0, None);
        let hidden = TestNode::new(0.0, 0.0, None);
        let visible = TestNode::new(10.0, 100.0, Some(&body));
        assert!(!is_visible::<TestNode>(None));
        assert!(!is_visible(Some(&hidden)));
        assert!(is_visible(Some(&visible)));
    }
}
