use std::rc::Rc;

use log::debug;

use crate::app::Page;
use crate::config::AnimationConfig;
use crate::dom::Dom;

/// Seconds element `index` waits before its transition starts.
pub fn stagger_delay(config: &AnimationConfig, index: usize) -> f64 {
    config.stagger_secs * index as f64
}

/// Inline `transition` value for the element at `index`.
pub fn transition(config: &AnimationConfig, index: usize) -> String {
    let delay = stagger_delay(config, index);
    format!(
        "transform {}s {} {delay}s, opacity {}s ease {delay}s",
        config.transform_secs, config.transform_easing, config.opacity_secs
    )
}

/// Concatenation of the animation groups, in group order.
pub fn targets<D: Dom>(dom: &D, config: &AnimationConfig) -> Vec<D::Element> {
    config
        .groups
        .iter()
        .flat_map(|selector| dom.query_all(selector))
        .collect()
}

/// Hides each target, attaches its staggered transition, and reveals it on
/// the next frame so the browser animates towards the visible state.
pub fn animate_in<D: Dom + 'static>(page: &Rc<Page<D>>) {
    let config = &page.config.animation;
    let dom = &page.dom;
    let els = targets(dom, config);
    debug!("Animating {} elements in", els.len());

    for (i, el) in els.into_iter().enumerate() {
        dom.set_style(&el, "opacity", "0");
        dom.set_style(&el, "transform", &format!("translateY({}px)", config.offset_px));
        dom.set_style(&el, "transition", &transition(config, i));

        let frame_page = Rc::clone(page);
        dom.next_frame(Box::new(move || {
            frame_page.dom.set_style(&el, "opacity", "1");
            frame_page.dom.set_style(&el, "transform", "translateY(0)");
        }));
    }
}

/// Runs [`animate_in`] once, after the page load event.
pub fn schedule<D: Dom + 'static>(page: &Rc<Page<D>>) {
    let load_page = Rc::clone(page);
    page.dom.on_load(Box::new(move || animate_in(&load_page)));
}
