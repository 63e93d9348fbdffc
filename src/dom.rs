//! The slice of the document the page script touches.
//!
//! Controllers only talk to [`Dom`], so they run unchanged against the
//! browser binding in `web` and against the in-memory fake used by tests.

/// What a click handler wants done with the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Default,
    Prevented,
}

pub type ClickHandler = Box<dyn FnMut() -> ClickOutcome>;
pub type Callback = Box<dyn FnOnce()>;

pub trait Dom {
    type Element: Clone;

    /// The document element (`<html>`).
    fn root(&self) -> Self::Element;
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    /// First match, or `None` when nothing matches or the selector is invalid.
    fn query(&self, selector: &str) -> Option<Self::Element>;
    /// All matches in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn attribute(&self, el: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&self, el: &Self::Element, name: &str, value: &str);
    fn text(&self, el: &Self::Element) -> String;
    fn set_text(&self, el: &Self::Element, text: &str);
    fn set_style(&self, el: &Self::Element, property: &str, value: &str);

    /// Top edge of the element relative to the viewport.
    fn viewport_top(&self, el: &Self::Element) -> f64;
    fn scroll_y(&self) -> f64;
    fn smooth_scroll_to(&self, top: f64);

    fn on_click(&self, el: &Self::Element, handler: ClickHandler);
    /// Runs once after the page and all its subresources have loaded.
    fn on_load(&self, callback: Callback);
    /// Runs once on the next animation frame.
    fn next_frame(&self, callback: Callback);
}
