use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use scrollfeed_core::config::{ListenerOptions, ScrollConfig, ScrollSource};
use scrollfeed_core::engine::{InfiniteScrollEngine, ScrollHost};
use scrollfeed_utils::errors::ScrollError;
use scrollfeed_utils::geometry::LayoutElement;

#[derive(Default)]
pub struct ElementData {
    pub name: &'static str,
    pub offset_top: f64,
    pub offset_height: f64,
    pub offset_parent: Option<TestElement>,
    pub parent: Option<TestElement>,
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

/// In-memory element sharing its geometry between clones.
#[derive(Clone, Default)]
pub struct TestElement(Rc<RefCell<ElementData>>);

impl TestElement {
    pub fn new(name: &'static str) -> Self {
        TestElement(Rc::new(RefCell::new(ElementData { name, ..Default::default() })))
    }

    pub fn with_parent(name: &'static str, parent: &TestElement) -> Self {
        let element = TestElement::new(name);
        element.update(|data| {
            data.parent = Some(parent.clone());
            data.offset_parent = Some(parent.clone());
        });
        element
    }

    pub fn update(&self, f: impl FnOnce(&mut ElementData)) {
        f(&mut self.0.borrow_mut())
    }

    pub fn hide(&self) {
        self.update(|data| data.offset_parent = None);
    }
}

impl PartialEq for TestElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for TestElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestElement({})", self.0.borrow().name)
    }
}

impl LayoutElement for TestElement {
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
        self.0.borrow().parent.clone()
    }

    fn scroll_top(&self) -> f64 {
        self.0.borrow().scroll_top
    }

    fn set_scroll_top(&self, scroll_top: f64) {
        self.0.borrow_mut().scroll_top = scroll_top;
    }

    fn scroll_height(&self) -> f64 {
        self.0.borrow().scroll_height
    }

    fn client_height(&self) -> f64 {
        self.0.borrow().client_height
    }
}

#[derive(Default)]
pub struct HostState {
    pub window_scroll_top: Cell<f64>,
    pub viewport_height: Cell<f64>,
    pub passive_supported: Cell<bool>,
    pub fail_attach: Cell<bool>,
    pub active_listeners: RefCell<Vec<(ScrollSource<TestElement>, ListenerOptions)>>,
    pub attach_count: Cell<usize>,
    pub detach_count: Cell<usize>,
}

/// Host recording the listeners attached by the engine.
#[derive(Clone, Default)]
pub struct TestHost(pub Rc<HostState>);

impl TestHost {
    pub fn active_listener_count(&self) -> usize {
        self.0.active_listeners.borrow().len()
    }

    pub fn active_source(&self) -> Option<ScrollSource<TestElement>> {
        self.0.active_listeners.borrow().first().map(|(source, _)| source.clone())
    }
}

impl ScrollHost for TestHost {
    type Element = TestElement;

    fn window_scroll_top(&self) -> f64 {
        self.0.window_scroll_top.get()
    }

    fn viewport_height(&self) -> f64 {
        self.0.viewport_height.get()
    }

    fn supports_passive_listeners(&self) -> bool {
        self.0.passive_supported.get()
    }

    fn add_listeners(
        &self,
        source: &ScrollSource<TestElement>,
        options: ListenerOptions,
    ) -> Result<(), ScrollError> {
        if self.0.fail_attach.get() {
            return Err(ScrollError::ListenerRegistration(String::from("test failure")));
        }
        self.0.active_listeners.borrow_mut().push((source.clone(), options));
        self.0.attach_count.set(self.0.attach_count.get() + 1);
        Ok(())
    }

    fn remove_listeners(&self, source: &ScrollSource<TestElement>, options: ListenerOptions) {
        self.0.active_listeners.borrow_mut().retain(|(active_source, active_options)| {
            active_source != source || *active_options != options
        });
        self.0.detach_count.set(self.0.detach_count.get() + 1);
    }
}

/// Elements of a page scrolled by the window: body > container > region.
pub struct TestLayout {
    pub body: TestElement,
    pub container: TestElement,
    pub region: TestElement,
}

impl TestLayout {
    /// Region starting at the top of the page, its bottom edge is `distance` pixels below the bottom of an 800px
    /// viewport when the window is not scrolled.
    pub fn window(distance: f64) -> Self {
        let body = TestElement::new("body");
        let container = TestElement::with_parent("container", &body);
        let region = TestElement::with_parent("region", &container);
        region.update(|data| {
            data.offset_parent = Some(body.clone());
            data.offset_height = 800.0 + distance;
            data.scroll_height = 800.0 + distance;
        });
        TestLayout { body, container, region }
    }

    /// Region inside a 200px high scroll container, with `distance` pixels of content left below the visible part.
    pub fn container(distance: f64) -> Self {
        let layout = TestLayout::window(0.0);
        layout.container.update(|data| {
            data.client_height = 200.0;
            data.scroll_top = 600.0;
            data.scroll_height = 800.0 + distance;
        });
        layout.region.update(|data| data.scroll_height = 800.0 + distance);
        layout
    }
}

pub type TestEngine = InfiniteScrollEngine<TestHost>;

/// Pages passed to `load_more`, in call order.
#[derive(Clone, Default)]
pub struct LoadRecorder(pub Rc<RefCell<Vec<i32>>>);

impl LoadRecorder {
    pub fn config(&self) -> ScrollConfig<TestElement> {
        let loaded_pages = self.0.clone();
        ScrollConfig {
            load_more: Rc::new(move |page: i32| loaded_pages.borrow_mut().push(page)),
            has_more: true,
            ..Default::default()
        }
    }

    pub fn pages(&self) -> Vec<i32> {
        self.0.borrow().clone()
    }
}

pub fn create_engine(
    layout: &TestLayout,
    config: ScrollConfig<TestElement>,
) -> (TestEngine, TestHost) {
    let host = TestHost::default();
    host.0.viewport_height.set(800.0);
    let mut engine = InfiniteScrollEngine::new(host.clone(), config);
    engine.set_region(Some(layout.region.clone()));
    (engine, host)
}
