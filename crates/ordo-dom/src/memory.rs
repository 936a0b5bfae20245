#![forbid(unsafe_code)]

//! Arena-backed in-memory element tree.
//!
//! Elements live in a slot vector addressed by generational [`NodeId`]s.
//! Destroyed slots go on a free list and are reused with a bumped
//! generation. The tree counts every effective mutation so callers can
//! assert that an operation did (or did not) touch the structure.

use ordo_core::Size;

use crate::StructuralTree;
use crate::node::{Element, NodeId, get_property, set_property};

struct Slot {
    generation: u32,
    element: Option<Element>,
}

/// In-memory [`StructuralTree`].
///
/// Resolved sizes are not computed; hosts and tests inject them with
/// [`set_offset_size`](Self::set_offset_size).
#[derive(Default)]
pub struct MemoryTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
    structural_mutations: u64,
    property_mutations: u64,
}

impl MemoryTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Count of effective insertions, removals, creations and destructions.
    pub fn structural_mutations(&self) -> u64 {
        self.structural_mutations
    }

    /// Count of effective style, attribute, class and text changes.
    pub fn property_mutations(&self) -> u64 {
        self.property_mutations
    }

    /// Inject the resolved size reported by [`StructuralTree::offset_size`].
    pub fn set_offset_size(&mut self, node: NodeId, size: Size) {
        if let Some(element) = self.get_mut(node) {
            element.offset = size;
        }
    }

    /// Children of `node`.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map_or(&[], |e| e.children.as_slice())
    }

    /// Inline styles of `node`, in insertion order.
    pub fn styles(&self, node: NodeId) -> &[(String, String)] {
        self.get(node).map_or(&[], |e| e.styles.as_slice())
    }

    /// Attributes of `node`, in insertion order.
    pub fn attributes(&self, node: NodeId) -> &[(String, String)] {
        self.get(node).map_or(&[], |e| e.attrs.as_slice())
    }

    fn get(&self, node: NodeId) -> Option<&Element> {
        self.slots
            .get(node.index as usize)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_ref())
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.slots
            .get_mut(node.index as usize)
            .filter(|slot| slot.generation == node.generation)
            .and_then(|slot| slot.element.as_mut())
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.get(child).and_then(|e| e.parent) else {
            return;
        };
        if let Some(parent_element) = self.get_mut(parent) {
            parent_element.children.retain(|c| *c != child);
        }
        if let Some(element) = self.get_mut(child) {
            element.parent = None;
        }
        self.structural_mutations += 1;
    }

    fn free(&mut self, node: NodeId) {
        let Some(slot) = self.slots.get_mut(node.index as usize) else {
            return;
        };
        if slot.generation != node.generation {
            return;
        }
        if let Some(element) = slot.element.take() {
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(node.index);
            self.live -= 1;
            for child in element.children {
                self.free(child);
            }
        }
    }
}

impl StructuralTree for MemoryTree {
    fn create_element(&mut self, tag: &str) -> NodeId {
        self.live += 1;
        self.structural_mutations += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.element = Some(Element::new(tag));
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        let index = u32::try_from(self.slots.len()).unwrap_or(u32::MAX);
        self.slots.push(Slot {
            generation: 0,
            element: Some(Element::new(tag)),
        });
        NodeId {
            index,
            generation: 0,
        }
    }

    fn destroy(&mut self, node: NodeId) {
        if !self.is_alive(node) {
            return;
        }
        self.detach(node);
        self.free(node);
        self.structural_mutations += 1;
    }

    fn is_alive(&self, node: NodeId) -> bool {
        self.get(node).is_some()
    }

    fn tag(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|e| e.tag.as_str())
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|e| e.parent)
    }

    fn child_count(&self, node: NodeId) -> usize {
        self.get(node).map_or(0, |e| e.children.len())
    }

    fn child_at(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.get(node).and_then(|e| e.children.get(index).copied())
    }

    fn child_index(&self, parent: NodeId, child: NodeId) -> Option<usize> {
        self.get(parent)
            .and_then(|e| e.children.iter().position(|c| *c == child))
    }

    fn insert_child(&mut self, parent: NodeId, child: NodeId, index: usize) {
        if parent == child || !self.is_alive(parent) || !self.is_alive(child) {
            return;
        }
        // Refuse to create a cycle.
        if self.contains(child, parent) {
            ordo_core::warn!(%parent, %child, "insert_child would create a cycle");
            return;
        }
        self.detach(child);
        if let Some(parent_element) = self.get_mut(parent) {
            let at = index.min(parent_element.children.len());
            parent_element.children.insert(at, child);
        }
        if let Some(element) = self.get_mut(child) {
            element.parent = Some(parent);
        }
        self.structural_mutations += 1;
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if self.parent(child) != Some(parent) {
            return false;
        }
        self.detach(child);
        true
    }

    fn set_style(&mut self, node: NodeId, name: &str, value: &str) {
        let changed = self
            .get_mut(node)
            .is_some_and(|e| set_property(&mut e.styles, name, value));
        if changed {
            self.property_mutations += 1;
        }
    }

    fn style(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node).and_then(|e| get_property(&e.styles, name))
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        let changed = self.get_mut(node).is_some_and(|e| {
            match e.attrs.iter().position(|(k, _)| k == name) {
                Some(i) if e.attrs[i].1 == value => false,
                Some(i) => {
                    e.attrs[i].1 = value.to_owned();
                    true
                }
                None => {
                    e.attrs.push((name.to_owned(), value.to_owned()));
                    true
                }
            }
        });
        if changed {
            self.property_mutations += 1;
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.get(node).and_then(|e| get_property(&e.attrs, name))
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        let changed = self.get_mut(node).is_some_and(|e| {
            let before = e.attrs.len();
            e.attrs.retain(|(k, _)| k != name);
            e.attrs.len() != before
        });
        if changed {
            self.property_mutations += 1;
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        let changed = self.get_mut(node).is_some_and(|e| {
            if class.is_empty() || e.classes.iter().any(|c| c == class) {
                false
            } else {
                e.classes.push(class.to_owned());
                true
            }
        });
        if changed {
            self.property_mutations += 1;
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        let changed = self.get_mut(node).is_some_and(|e| {
            let before = e.classes.len();
            e.classes.retain(|c| c != class);
            e.classes.len() != before
        });
        if changed {
            self.property_mutations += 1;
        }
    }

    fn classes(&self, node: NodeId) -> &[String] {
        self.get(node).map_or(&[], |e| e.classes.as_slice())
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        let changed = self.get_mut(node).is_some_and(|e| {
            let next = (!text.is_empty()).then(|| text.to_owned());
            if e.text == next {
                false
            } else {
                e.text = next;
                true
            }
        });
        if changed {
            self.property_mutations += 1;
        }
    }

    fn text(&self, node: NodeId) -> Option<&str> {
        self.get(node).and_then(|e| e.text.as_deref())
    }

    fn offset_size(&self, node: NodeId) -> Size {
        self.get(node).map_or(Size::ZERO, |e| e.offset)
    }
}

impl std::fmt::Debug for MemoryTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryTree")
            .field("live", &self.live)
            .field("slots", &self.slots.len())
            .field("structural_mutations", &self.structural_mutations)
            .field("property_mutations", &self.property_mutations)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tree_with_children(n: usize) -> (MemoryTree, NodeId, Vec<NodeId>) {
        let mut tree = MemoryTree::new();
        let root = tree.create_element("div");
        let kids: Vec<NodeId> = (0..n)
            .map(|_| {
                let kid = tree.create_element("span");
                tree.append_child(root, kid);
                kid
            })
            .collect();
        (tree, root, kids)
    }

    #[test]
    fn append_keeps_order() {
        let (tree, root, kids) = tree_with_children(3);
        assert_eq!(tree.children(root), kids.as_slice());
        assert_eq!(tree.child_index(root, kids[2]), Some(2));
        assert_eq!(tree.parent(kids[1]), Some(root));
    }

    #[test]
    fn insert_detaches_from_previous_parent() {
        let (mut tree, root, kids) = tree_with_children(2);
        let other = tree.create_element("div");
        tree.insert_child(other, kids[0], 0);
        assert_eq!(tree.children(root), &[kids[1]]);
        assert_eq!(tree.parent(kids[0]), Some(other));
    }

    #[test]
    fn insert_clamps_index() {
        let (mut tree, root, kids) = tree_with_children(2);
        let extra = tree.create_element("i");
        tree.insert_child(root, extra, 99);
        assert_eq!(tree.children(root), &[kids[0], kids[1], extra]);
    }

    #[test]
    fn reinserting_moves_within_parent() {
        let (mut tree, root, kids) = tree_with_children(3);
        tree.insert_child(root, kids[2], 0);
        assert_eq!(tree.children(root), &[kids[2], kids[0], kids[1]]);
    }

    #[test]
    fn remove_child_requires_membership() {
        let (mut tree, root, kids) = tree_with_children(1);
        let stranger = tree.create_element("p");
        assert!(!tree.remove_child(root, stranger));
        assert!(tree.remove_child(root, kids[0]));
        assert_eq!(tree.parent(kids[0]), None);
        assert_eq!(tree.child_count(root), 0);
    }

    #[test]
    fn destroy_frees_whole_subtree() {
        let (mut tree, root, kids) = tree_with_children(3);
        let grandchild = tree.create_element("b");
        tree.append_child(kids[0], grandchild);
        assert_eq!(tree.len(), 5);
        tree.destroy(root);
        assert!(tree.is_empty());
        assert!(!tree.is_alive(grandchild));
    }

    #[test]
    fn stale_handles_do_not_alias_reused_slots() {
        let mut tree = MemoryTree::new();
        let first = tree.create_element("div");
        tree.destroy(first);
        let second = tree.create_element("td");
        assert_eq!(first.index(), second.index());
        assert_ne!(first, second);
        assert_eq!(tree.tag(first), None);
        assert_eq!(tree.tag(second), Some("td"));
    }

    #[test]
    fn cycles_are_refused() {
        let (mut tree, root, kids) = tree_with_children(1);
        tree.append_child(kids[0], root);
        assert_eq!(tree.parent(root), None);
        assert_eq!(tree.parent(kids[0]), Some(root));
    }

    #[test]
    fn property_changes_are_counted_once() {
        let mut tree = MemoryTree::new();
        let node = tree.create_element("div");
        let before = tree.property_mutations();
        tree.set_style(node, "overflow", "hidden");
        tree.set_style(node, "overflow", "hidden");
        tree.add_class(node, "w");
        tree.add_class(node, "w");
        tree.set_attribute(node, "align", "center");
        tree.set_attribute(node, "align", "center");
        assert_eq!(tree.property_mutations() - before, 3);
        assert_eq!(tree.classes(node), &["w".to_owned()]);
    }

    #[test]
    fn take_children_detaches_in_order() {
        let (mut tree, root, kids) = tree_with_children(3);
        let taken = tree.take_children(root);
        assert_eq!(taken, kids);
        assert_eq!(tree.child_count(root), 0);
        assert!(taken.iter().all(|k| tree.parent(*k).is_none()));
    }

    #[test]
    fn contains_walks_ancestors() {
        let (mut tree, root, kids) = tree_with_children(2);
        let leaf = tree.create_element("em");
        tree.append_child(kids[1], leaf);
        assert!(tree.contains(root, leaf));
        assert!(tree.contains(kids[1], leaf));
        assert!(!tree.contains(kids[0], leaf));
    }

    #[test]
    fn offset_size_is_injected() {
        let mut tree = MemoryTree::new();
        let node = tree.create_element("div");
        assert_eq!(tree.offset_size(node), Size::ZERO);
        tree.set_offset_size(node, Size::new(300, 40));
        assert_eq!(tree.offset_size(node), Size::new(300, 40));
    }
}
