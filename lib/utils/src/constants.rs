pub const DEFAULT_THRESHOLD: f64 = 250.0;
pub const DEFAULT_PAGE_START: i32 = 0;
pub const MAX_OFFSET_PARENT_DEPTH: usize = 1024;

pub const SCROLL_EVENT: &str = "scroll";
pub const RESIZE_EVENT: &str = "resize";
pub const MOUSEWHEEL_EVENT: &str = "mousewheel";
pub const PASSIVE_PROBE_EVENT: &str = "test";

pub const LOADER_TEXT: &str = "Loading";

pub const SITE_ROOT: &str = "/";
pub const CONTAINER_ROUTE: &str = "container";
pub const REVERSE_ROUTE: &str = "reverse";
