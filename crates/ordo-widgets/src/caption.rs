#![forbid(unsafe_code)]

//! Component captions.
//!
//! A caption shows a component's label text, its icon, a required-field
//! marker and an error indicator. Containers own the caption of each child
//! and decide where to put it: before the component when it carries text or
//! an icon, after the component when it only carries indicators (a checkbox
//! with a required marker, say).

use ordo_dom::{NodeId, StructuralTree};

use crate::Result;
use crate::uidl::Uidl;

/// Class of the caption element.
pub const CLASSNAME: &str = "i-caption";
/// Class of the icon element.
pub const ICON_CLASSNAME: &str = "i-icon";
/// Class of the required-field marker.
pub const REQUIRED_CLASSNAME: &str = "i-required-field-indicator";
/// Class of the error indicator.
pub const ERROR_CLASSNAME: &str = "i-errorindicator";

/// Parts of a caption, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Icon,
    Text,
    Required,
    Error,
}

impl Part {
    const ALL: [Part; 4] = [Part::Icon, Part::Text, Part::Required, Part::Error];

    const fn tag(self) -> &'static str {
        match self {
            Part::Icon => "img",
            Part::Text => "span",
            Part::Required => "span",
            Part::Error => "div",
        }
    }

    const fn class(self) -> &'static str {
        match self {
            Part::Icon => ICON_CLASSNAME,
            Part::Text => "i-captiontext",
            Part::Required => REQUIRED_CLASSNAME,
            Part::Error => ERROR_CLASSNAME,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

/// A component caption.
#[derive(Debug)]
pub struct Caption {
    element: NodeId,
    parts: [Option<NodeId>; 4],
    placed_after: bool,
}

impl Caption {
    /// Whether `uidl` asks for a caption at all.
    pub fn is_needed(uidl: &Uidl) -> bool {
        ["caption", "icon", "error", "required"]
            .iter()
            .any(|name| uidl.has_attribute(name))
    }

    /// Create an empty caption element.
    pub fn new(tree: &mut dyn StructuralTree) -> Self {
        let element = tree.create_element("div");
        tree.add_class(element, CLASSNAME);
        Self {
            element,
            parts: [None; 4],
            placed_after: true,
        }
    }

    /// Caption element.
    #[inline]
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Whether the caption belongs after the component.
    #[inline]
    pub fn placed_after(&self) -> bool {
        self.placed_after
    }

    /// Bring the caption content in line with `uidl`.
    pub fn update(&mut self, tree: &mut dyn StructuralTree, uidl: &Uidl) -> Result<()> {
        let icon = uidl.string_attribute("icon")?;
        let text = uidl.string_attribute("caption")?;
        let required = uidl.bool_attribute("required")?.unwrap_or(false);
        let error = uidl.has_attribute("error");

        self.placed_after = icon.is_none() && text.is_none();

        match icon {
            Some(src) => {
                let node = self.ensure(tree, Part::Icon);
                tree.set_attribute(node, "src", src);
            }
            None => self.drop_part(tree, Part::Icon),
        }
        match text {
            Some(text) => {
                let node = self.ensure(tree, Part::Text);
                tree.set_text(node, text);
            }
            None => self.drop_part(tree, Part::Text),
        }
        if required {
            let node = self.ensure(tree, Part::Required);
            tree.set_text(node, "*");
        } else {
            self.drop_part(tree, Part::Required);
        }
        if error {
            self.ensure(tree, Part::Error);
        } else {
            self.drop_part(tree, Part::Error);
        }
        Ok(())
    }

    /// Free the caption element and its parts.
    pub fn destroy(self, tree: &mut dyn StructuralTree) {
        tree.destroy(self.element);
    }

    fn ensure(&mut self, tree: &mut dyn StructuralTree, part: Part) -> NodeId {
        if let Some(node) = self.parts[part.slot()] {
            return node;
        }
        let node = tree.create_element(part.tag());
        tree.add_class(node, part.class());
        let position = Part::ALL[..part.slot()]
            .iter()
            .filter(|p| self.parts[p.slot()].is_some())
            .count();
        tree.insert_child(self.element, node, position);
        self.parts[part.slot()] = Some(node);
        node
    }

    fn drop_part(&mut self, tree: &mut dyn StructuralTree, part: Part) {
        if let Some(node) = self.parts[part.slot()].take() {
            tree.destroy(node);
        }
    }
}
