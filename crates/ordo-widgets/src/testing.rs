#![forbid(unsafe_code)]

//! Test doubles.
//!
//! [`Label`] is a minimal leaf component and [`ScriptedConnection`] a
//! connection that builds components from descriptions keyed by their `id`.
//! Enabled for this crate's tests and, through the `test-helpers` feature,
//! for other crates.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use ordo_core::LayoutConfig;
use ordo_dom::{NodeId, StructuralTree};

use crate::uidl::Uidl;
use crate::{ComponentRef, Connection, Error, OrderedLayout, Paintable, Result};

/// Tag of label descriptions.
pub const LABEL_TAG: &str = "label";
/// Tag of ordered layout descriptions.
pub const LAYOUT_TAG: &str = "orderedlayout";

/// A text leaf that counts the calls it receives.
#[derive(Debug)]
pub struct Label {
    element: NodeId,
    /// Number of updates applied (cached updates excluded).
    pub updates: usize,
    /// Number of `on_attach` calls.
    pub attached: usize,
    /// Number of `on_detach` calls.
    pub detached: usize,
    /// Number of layout passes received.
    pub layouts: usize,
}

impl Label {
    /// Create a label element showing `text`.
    pub fn new(tree: &mut dyn StructuralTree, text: &str) -> Self {
        let element = tree.create_element("div");
        tree.add_class(element, "label");
        tree.set_text(element, text);
        Self {
            element,
            updates: 0,
            attached: 0,
            detached: 0,
            layouts: 0,
        }
    }
}

impl Paintable for Label {
    fn element(&self) -> NodeId {
        self.element
    }

    fn update_from_uidl(
        &mut self,
        uidl: &Uidl,
        tree: &mut dyn StructuralTree,
        client: &mut dyn Connection,
    ) -> Result<()> {
        if client.update_component(self.element, uidl, true)? {
            return Ok(());
        }
        self.updates += 1;
        if let Some(text) = uidl.string_attribute("text")? {
            tree.set_text(self.element, text);
        }
        Ok(())
    }

    fn on_attach(&mut self, _tree: &mut dyn StructuralTree) {
        self.attached += 1;
    }

    fn on_detach(&mut self, _tree: &mut dyn StructuralTree) {
        self.detached += 1;
    }

    fn layout(&mut self, _tree: &mut dyn StructuralTree) {
        self.layouts += 1;
    }
}

/// A connection resolving descriptions by `id`.
///
/// Unknown ids are built from the description's tag ([`LABEL_TAG`] or
/// [`LAYOUT_TAG`]) and registered; known ids resolve to the registered
/// component. Typed handles stay available for inspection.
#[derive(Debug, Default)]
pub struct ScriptedConnection {
    config: LayoutConfig,
    components: HashMap<String, ComponentRef>,
    labels: HashMap<String, Rc<RefCell<Label>>>,
    layouts: HashMap<String, Rc<RefCell<OrderedLayout>>>,
    unregistered: Vec<String>,
    resolutions: usize,
    gates: Vec<(NodeId, bool)>,
}

impl ScriptedConnection {
    /// Connection building layouts with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connection building layouts with `config`.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Register a label under `id` ahead of any description.
    pub fn register_label(
        &mut self,
        tree: &mut dyn StructuralTree,
        id: &str,
        text: &str,
    ) -> ComponentRef {
        let shared = Rc::new(RefCell::new(Label::new(tree, text)));
        let component = ComponentRef::from_shared(Rc::clone(&shared));
        self.labels.insert(id.to_owned(), shared);
        self.components.insert(id.to_owned(), component.clone());
        component
    }

    /// Register a layout under `id` ahead of any description.
    pub fn register_layout(&mut self, tree: &mut dyn StructuralTree, id: &str) -> ComponentRef {
        let shared = Rc::new(RefCell::new(OrderedLayout::with_config(
            tree,
            self.config.clone(),
        )));
        let component = ComponentRef::from_shared(Rc::clone(&shared));
        self.layouts.insert(id.to_owned(), shared);
        self.components.insert(id.to_owned(), component.clone());
        component
    }

    /// Component registered under `id`.
    pub fn component(&self, id: &str) -> Option<ComponentRef> {
        self.components.get(id).cloned()
    }

    /// Label registered under `id`.
    pub fn label(&self, id: &str) -> Option<Rc<RefCell<Label>>> {
        self.labels.get(id).cloned()
    }

    /// Layout registered under `id`.
    pub fn layout(&self, id: &str) -> Option<Rc<RefCell<OrderedLayout>>> {
        self.layouts.get(id).cloned()
    }

    /// Ids unregistered so far, in order.
    pub fn unregistered(&self) -> &[String] {
        &self.unregistered
    }

    /// Number of `paintable` calls so far.
    pub fn resolutions(&self) -> usize {
        self.resolutions
    }

    /// `update_component` calls so far, as `(element, manage_caption)`.
    pub fn gate_calls(&self) -> &[(NodeId, bool)] {
        &self.gates
    }
}

impl Connection for ScriptedConnection {
    fn paintable(&mut self, uidl: &Uidl, tree: &mut dyn StructuralTree) -> Result<ComponentRef> {
        self.resolutions += 1;
        let id = uidl
            .id()
            .ok_or_else(|| Error::Component(format!("<{}> description without id", uidl.tag())))?;
        if let Some(component) = self.components.get(id) {
            return Ok(component.clone());
        }
        match uidl.tag() {
            LABEL_TAG => Ok(self.register_label(tree, id, "")),
            LAYOUT_TAG => Ok(self.register_layout(tree, id)),
            other => Err(Error::Component(format!("no component for <{other}>"))),
        }
    }

    fn unregister_paintable(&mut self, component: &ComponentRef) {
        let Some(id) = self
            .components
            .iter()
            .find_map(|(id, c)| (c == component).then(|| id.clone()))
        else {
            return;
        };
        self.components.remove(&id);
        self.labels.remove(&id);
        self.layouts.remove(&id);
        self.unregistered.push(id);
    }

    fn update_component(
        &mut self,
        element: NodeId,
        uidl: &Uidl,
        manage_caption: bool,
    ) -> Result<bool> {
        self.gates.push((element, manage_caption));
        Ok(uidl.bool_attribute("cached")?.unwrap_or(false))
    }
}

/// Description of a label `id` whose text is its id.
pub fn label_uidl(id: &str) -> Uidl {
    Uidl::new(LABEL_TAG).with_attr("id", id).with_attr("text", id)
}

/// Description of a layout `id` with `children`.
pub fn layout_uidl(id: &str, children: impl IntoIterator<Item = Uidl>) -> Uidl {
    Uidl::new(LAYOUT_TAG)
        .with_attr("id", id)
        .with_children(children)
}
