use std::rc::Rc;

use log::debug;

use crate::app::Page;
use crate::dom::{ClickOutcome, Dom};

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_target(viewport_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    viewport_top + scroll_y - header_offset
}

/// Handles a click on an in-page link pointing at `href`.
///
/// Bare `#` and unmatched targets fall through to the browser.
pub fn follow<D: Dom>(page: &Page<D>, href: Option<&str>) -> ClickOutcome {
    let href = match href {
        Some(href) if !href.is_empty() && href != "#" => href,
        _ => return ClickOutcome::Default,
    };
    let dom = &page.dom;
    let Some(target) = dom.query(href) else {
        return ClickOutcome::Default;
    };

    let top = scroll_target(dom.viewport_top(&target), dom.scroll_y(), page.config.header_offset);
    debug!("Smooth scrolling to {href} at {top}");
    dom.smooth_scroll_to(top);
    ClickOutcome::Prevented
}

/// Attaches [`follow`] to every `#` link present right now.
pub fn bind<D: Dom + 'static>(page: &Rc<Page<D>>) {
    for anchor in page.dom.query_all(page.config.anchor_selector) {
        let handler_page = Rc::clone(page);
        let link = anchor.clone();
        page.dom.on_click(
            &anchor,
            Box::new(move || {
                let href = handler_page.dom.attribute(&link, "href");
                follow(&handler_page, href.as_deref())
            }),
        );
    }
}
