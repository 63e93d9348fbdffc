//! In-memory document used by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use crate::app::Page;
use crate::config::LandingConfig;
use crate::dom::{Callback, ClickHandler, ClickOutcome, Dom};
use crate::state::MemoryStore;
use crate::translations::TranslationTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    attrs: BTreeMap<String, String>,
    text: String,
    styles: BTreeMap<String, String>,
    top: f64,
}

impl Node {
    fn has_class(&self, class: &str) -> bool {
        self.attrs
            .get("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }
}

#[derive(Default)]
pub struct FakeDom {
    nodes: RefCell<Vec<Node>>,
    clicks: RefCell<HashMap<NodeId, Vec<ClickHandler>>>,
    loads: RefCell<Vec<Callback>>,
    frames: RefCell<Vec<Callback>>,
    scroll_y: Cell<f64>,
    scrolls: RefCell<Vec<f64>>,
}

pub struct NodeBuilder<'a> {
    dom: &'a FakeDom,
    id: NodeId,
}

impl NodeBuilder<'_> {
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.dom.nodes.borrow_mut()[self.id.0]
            .attrs
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    pub fn text(self, text: &str) -> Self {
        self.dom.nodes.borrow_mut()[self.id.0].text = text.to_string();
        self
    }

    pub fn top(self, top: f64) -> Self {
        self.dom.nodes.borrow_mut()[self.id.0].top = top;
        self
    }

    pub fn node(&self) -> NodeId {
        self.id
    }
}

impl FakeDom {
    pub fn new() -> Self {
        let dom = Self::default();
        dom.nodes.borrow_mut().push(Node {
            tag: "html".to_string(),
            ..Node::default()
        });
        dom
    }

    /// Appends an element under the root.
    pub fn add(&self, tag: &str) -> NodeBuilder<'_> {
        self.add_under(NodeId(0), tag)
    }

    pub fn add_under(&self, parent: NodeId, tag: &str) -> NodeBuilder<'_> {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_string(),
            parent: Some(parent),
            ..Node::default()
        });
        NodeBuilder {
            dom: self,
            id: NodeId(nodes.len() - 1),
        }
    }

    pub fn style(&self, el: &NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[el.0].styles.get(property).cloned()
    }

    pub fn set_scroll_y(&self, y: f64) {
        self.scroll_y.set(y);
    }

    pub fn scroll_requests(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }

    /// Dispatches a click, returning each handler's outcome.
    pub fn click(&self, el: &NodeId) -> Vec<ClickOutcome> {
        let mut handlers = self.clicks.borrow_mut().remove(el).unwrap_or_default();
        let outcomes: Vec<ClickOutcome> = handlers.iter_mut().map(|handler| handler()).collect();
        let mut clicks = self.clicks.borrow_mut();
        let slot = clicks.entry(*el).or_default();
        handlers.append(slot);
        *slot = handlers;
        outcomes
    }

    pub fn fire_load(&self) {
        let callbacks = std::mem::take(&mut *self.loads.borrow_mut());
        for callback in callbacks {
            callback();
        }
    }

    pub fn run_frame(&self) {
        let callbacks = std::mem::take(&mut *self.frames.borrow_mut());
        for callback in callbacks {
            callback();
        }
    }

    fn matches(&self, node: &Node, selector: &str) -> bool {
        if let Some(parent_class) = selector
            .strip_prefix('.')
            .and_then(|rest| rest.strip_suffix(" > *"))
        {
            let nodes = self.nodes.borrow();
            return node
                .parent
                .is_some_and(|p| nodes[p.0].has_class(parent_class));
        }
        if selector == "a[href^=\"#\"]" {
            return node.tag == "a"
                && node.attrs.get("href").is_some_and(|h| h.starts_with('#'));
        }
        if let Some(id) = selector.strip_prefix('#') {
            return node.attrs.get("id").is_some_and(|v| v == id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return node.has_class(class);
        }
        if let Some(attr) = selector
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            return node.attrs.contains_key(attr);
        }
        false
    }
}

impl Dom for FakeDom {
    type Element = NodeId;

    fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .position(|n| n.attrs.get("id").is_some_and(|v| v == id))
            .map(NodeId)
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        (1..nodes.len())
            .filter(|&i| self.matches(&nodes[i], selector))
            .map(NodeId)
            .collect()
    }

    fn attribute(&self, el: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[el.0].attrs.get(name).cloned()
    }

    fn set_attribute(&self, el: &NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[el.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn text(&self, el: &NodeId) -> String {
        self.nodes.borrow()[el.0].text.clone()
    }

    fn set_text(&self, el: &NodeId, text: &str) {
        self.nodes.borrow_mut()[el.0].text = text.to_string();
    }

    fn set_style(&self, el: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[el.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn viewport_top(&self, el: &NodeId) -> f64 {
        self.nodes.borrow()[el.0].top
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.scrolls.borrow_mut().push(top);
    }

    fn on_click(&self, el: &NodeId, handler: ClickHandler) {
        self.clicks.borrow_mut().entry(*el).or_default().push(handler);
    }

    fn on_load(&self, callback: Callback) {
        self.loads.borrow_mut().push(callback);
    }

    fn next_frame(&self, callback: Callback) {
        self.frames.borrow_mut().push(callback);
    }
}

/// A landing page shaped like the production markup.
pub fn landing_page() -> FakeDom {
    let dom = FakeDom::new();
    dom.add("button").id("theme-toggle");
    dom.add("button").id("lang-toggle");
    dom.add("span")
        .id("nav-download")
        .attr("data-translate", "nav_download")
        .text("Download");

    let hero = dom.add("div").class("hero-inner").node();
    dom.add_under(hero, "h1")
        .id("hero-title")
        .attr("data-translate", "hero_title")
        .text("Launcher");
    dom.add_under(hero, "p")
        .id("hero-sub")
        .attr("data-translate", "hero_sub")
        .text("Play");
    let cta = dom.add("div").class("hero-cta").node();
    dom.add_under(cta, "button")
        .id("cta")
        .attr("data-translate", "cta_primary")
        .text("Get it");

    dom.add("h2")
        .id("features-title")
        .class("section-title")
        .attr("data-translate", "features_title")
        .text("Features");
    for (i, text) in ["Fast downloads", "Cloud saves", "Achievements"].iter().enumerate() {
        dom.add("div")
            .id(&format!("feat-{}", i + 1))
            .class("card")
            .attr("data-translate", &format!("feat_{}", i + 1))
            .text(text);
    }

    let download = dom.add("section").id("download").top(900.0).node();
    dom.add_under(download, "div")
        .id("download-card")
        .class("download-card");
    dom.add_under(download, "h2")
        .id("download-title")
        .attr("data-translate", "download_title")
        .text("Get");
    dom.add_under(download, "p")
        .id("download-sub")
        .attr("data-translate", "download_sub")
        .text("Install");
    dom.add("span").id("stat-1").class("num").text("10k");
    dom.add("span").id("stat-2").class("num").text("4.9");

    dom.add("footer")
        .id("footer")
        .attr("data-translate", "footer_text")
        .text("Hydra");
    dom.add("span")
        .id("unknown-key")
        .attr("data-translate", "mystery")
        .text("Static");
    dom.add("span")
        .id("blank-key")
        .attr("data-translate", "")
        .text("Blank");

    dom.add("a").id("link-download").attr("href", "#download");
    dom.add("a").id("link-missing").attr("href", "#missing");
    dom.add("a").id("link-top").attr("href", "#");
    dom
}

pub fn test_page() -> Page<FakeDom> {
    Page::new(
        landing_page(),
        Box::new(MemoryStore::new()),
        LandingConfig::default(),
        TranslationTable::builtin().expect("builtin translations"),
    )
    .expect("fixture page is invalid")
}
