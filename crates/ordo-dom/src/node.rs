#![forbid(unsafe_code)]

//! Element handles and storage.

use ordo_core::Size;

/// A generational handle to an element.
///
/// A handle outlives the element it names: once the element is destroyed its
/// slot may be reused, but the generation no longer matches, so stale
/// handles are detected instead of aliasing a new element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Slot index inside the owning tree.
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued.
    #[inline]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

/// An element stored in a [`MemoryTree`](crate::MemoryTree).
#[derive(Debug, Clone, Default)]
pub(crate) struct Element {
    pub(crate) tag: String,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) attrs: Vec<(String, String)>,
    pub(crate) styles: Vec<(String, String)>,
    pub(crate) classes: Vec<String>,
    pub(crate) text: Option<String>,
    pub(crate) offset: Size,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            ..Self::default()
        }
    }
}

/// Set `name` to `value` in an ordered property list, removing it when
/// `value` is empty. Returns whether the list changed.
pub(crate) fn set_property(list: &mut Vec<(String, String)>, name: &str, value: &str) -> bool {
    let pos = list.iter().position(|(k, _)| k == name);
    match (pos, value.is_empty()) {
        (Some(i), true) => {
            list.remove(i);
            true
        }
        (Some(i), false) => {
            if list[i].1 == value {
                false
            } else {
                list[i].1 = value.to_owned();
                true
            }
        }
        (None, true) => false,
        (None, false) => {
            list.push((name.to_owned(), value.to_owned()));
            true
        }
    }
}

pub(crate) fn get_property<'a>(list: &'a [(String, String)], name: &str) -> Option<&'a str> {
    list.iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}
