#![forbid(unsafe_code)]

//! Structural tree capability.
//!
//! Layout code never talks to a rendering surface directly. Everything it
//! needs (create an element, insert or remove a child at an index, read and
//! write styles, attributes and classes, ask for a resolved size) goes
//! through the object-safe [`StructuralTree`] trait. [`MemoryTree`] is an
//! arena-backed implementation used by tests and headless hosts.

pub mod memory;
pub mod node;

pub use memory::MemoryTree;
pub use node::NodeId;

use ordo_core::Size;

/// A mutable element tree.
///
/// Handles that no longer refer to a live element are tolerated by every
/// method: queries return `None`/empty, mutations do nothing.
pub trait StructuralTree {
    /// Create a detached element with the given tag name.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Detach `node` from its parent and free it together with its subtree.
    fn destroy(&mut self, node: NodeId);

    /// Whether `node` refers to a live element.
    fn is_alive(&self, node: NodeId) -> bool;

    /// Tag name of `node`.
    fn tag(&self, node: NodeId) -> Option<&str>;

    /// Parent of `node`, if attached.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Number of children of `node`.
    fn child_count(&self, node: NodeId) -> usize;

    /// Child of `node` at `index`.
    fn child_at(&self, node: NodeId, index: usize) -> Option<NodeId>;

    /// Position of `child` among the children of `parent`.
    fn child_index(&self, parent: NodeId, child: NodeId) -> Option<usize>;

    /// Insert `child` into `parent` at `index`.
    ///
    /// `child` is detached from its current parent first; `index` is then
    /// clamped to the resulting child count.
    fn insert_child(&mut self, parent: NodeId, child: NodeId, index: usize);

    /// Remove `child` from `parent`. Returns `false` if it was not a child.
    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool;

    /// Set an inline style property. An empty value removes the property.
    fn set_style(&mut self, node: NodeId, name: &str, value: &str);

    /// Inline style property of `node`.
    fn style(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Set an attribute.
    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Attribute of `node`.
    fn attribute(&self, node: NodeId, name: &str) -> Option<&str>;

    /// Remove an attribute.
    fn remove_attribute(&mut self, node: NodeId, name: &str);

    /// Add a style class (no-op if present).
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Remove a style class (no-op if absent).
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Style classes of `node`, in insertion order.
    fn classes(&self, node: NodeId) -> &[String];

    /// Replace the text content of `node`.
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Text content of `node`.
    fn text(&self, node: NodeId) -> Option<&str>;

    /// Resolved (laid out) size of `node`.
    fn offset_size(&self, node: NodeId) -> Size;

    /// Append `child` as the last child of `parent`.
    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let end = self.child_count(parent);
        self.insert_child(parent, child, end);
    }

    /// First child of `node`.
    fn first_child(&self, node: NodeId) -> Option<NodeId> {
        self.child_at(node, 0)
    }

    /// Whether `class` is set on `node`.
    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes(node).iter().any(|c| c == class)
    }

    /// Add or remove `class` depending on `enabled`.
    fn set_class_enabled(&mut self, node: NodeId, class: &str, enabled: bool) {
        if enabled {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    /// Whether `node` is `ancestor` or lies inside its subtree.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// Detach every child of `node`, returning them in order.
    fn take_children(&mut self, node: NodeId) -> Vec<NodeId> {
        let mut taken = Vec::with_capacity(self.child_count(node));
        while let Some(child) = self.first_child(node) {
            self.remove_child(node, child);
            taken.push(child);
        }
        taken
    }
}
