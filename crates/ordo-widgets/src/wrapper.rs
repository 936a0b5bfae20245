#![forbid(unsafe_code)]

//! Per-child presentational envelope.
//!
//! Every child of an [`OrderedLayout`](crate::OrderedLayout) sits in its own
//! wrapper element. The wrapper carries the spacing class, the vertical
//! alignment style, the caption and, for horizontal alignments other than
//! left, a one-cell table that positions the content:
//!
//! ```text
//! wrapper
//! └── table (width 100%)
//!     └── tbody > tr > td [align]      <- alignment cell
//!         └── table
//!             └── tbody > tr > td      <- content holder
//!                 ├── caption
//!                 └── component
//! ```
//!
//! Without the table the wrapper element itself holds the content.

use ordo_core::LayoutConfig;
use ordo_dom::{NodeId, StructuralTree};
use ordo_layout::{HorizontalAlignment, Orientation, VerticalAlignment};

use crate::Result;
use crate::caption::Caption;
use crate::uidl::Uidl;

/// Elements of the one-cell alignment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AlignTable {
    table: NodeId,
    cell: NodeId,
    inner: NodeId,
}

/// Envelope of one child.
#[derive(Debug)]
pub struct Wrapper {
    element: NodeId,
    align: Option<AlignTable>,
    caption: Option<Caption>,
    vertical: VerticalAlignment,
    horizontal: HorizontalAlignment,
    spacing_class: Option<String>,
}

impl Wrapper {
    /// Create a detached wrapper suited to `orientation`: a block for
    /// vertical layouts, a table cell for horizontal ones.
    pub fn new(tree: &mut dyn StructuralTree, orientation: Orientation) -> Self {
        let tag = match orientation {
            Orientation::Vertical => "div",
            Orientation::Horizontal => "td",
        };
        Self {
            element: tree.create_element(tag),
            align: None,
            caption: None,
            vertical: VerticalAlignment::default(),
            horizontal: HorizontalAlignment::default(),
            spacing_class: None,
        }
    }

    /// Wrapper element, the one placed in the layout's holder.
    #[inline]
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Element the component and its caption live in.
    #[inline]
    pub fn content_holder(&self) -> NodeId {
        self.align.map_or(self.element, |a| a.inner)
    }

    /// Current caption, if one is shown.
    #[inline]
    pub fn caption(&self) -> Option<&Caption> {
        self.caption.as_ref()
    }

    /// Current vertical alignment.
    #[inline]
    pub fn vertical(&self) -> VerticalAlignment {
        self.vertical
    }

    /// Current horizontal alignment.
    #[inline]
    pub fn horizontal(&self) -> HorizontalAlignment {
        self.horizontal
    }

    /// Whether the content sits in an alignment table.
    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.align.is_some()
    }

    /// Whether a spacing class is applied.
    #[inline]
    pub fn has_spacing(&self) -> bool {
        self.spacing_class.is_some()
    }

    /// Create, move or drop the caption of `widget` according to `uidl`.
    ///
    /// A new caption goes first in the content holder, or last when it only
    /// carries indicators. An existing caption is moved only when its
    /// placement flips.
    pub fn update_caption(
        &mut self,
        tree: &mut dyn StructuralTree,
        uidl: &Uidl,
        widget: NodeId,
        config: &LayoutConfig,
    ) -> Result<()> {
        let holder = self.content_holder();

        if !Caption::is_needed(uidl) {
            if let Some(caption) = self.caption.take() {
                self.set_after_classes(tree, caption.element(), widget, false, config);
                caption.destroy(tree);
            }
            return Ok(());
        }

        let just_added = self.caption.is_none();
        let mut caption = match self.caption.take() {
            Some(caption) => caption,
            None => Caption::new(tree),
        };
        if let Err(err) = caption.update(tree, uidl) {
            if just_added {
                caption.destroy(tree);
            } else {
                self.caption = Some(caption);
            }
            return Err(err);
        }

        let after = caption.placed_after();
        let element = caption.element();
        if just_added {
            let index = if after { tree.child_count(holder) } else { 0 };
            tree.insert_child(holder, element, index);
            self.set_after_classes(tree, element, widget, after, config);
        } else {
            let caption_at = tree.child_index(holder, element);
            let widget_at = tree.child_index(holder, widget);
            let currently_after = caption_at > widget_at;
            if currently_after != after {
                let index = if after { tree.child_count(holder) } else { 0 };
                tree.insert_child(holder, element, index);
                self.set_after_classes(tree, element, widget, after, config);
            }
        }
        self.caption = Some(caption);
        Ok(())
    }

    /// Apply alignment. Horizontal alignments other than left wrap the
    /// content in a one-cell table; going back to left unwraps it.
    pub fn set_alignment(
        &mut self,
        tree: &mut dyn StructuralTree,
        vertical: VerticalAlignment,
        horizontal: HorizontalAlignment,
    ) {
        tree.set_style(self.element, "vertical-align", vertical.as_css());
        self.vertical = vertical;

        if horizontal.is_default() {
            if let Some(align) = self.align.take() {
                self.unwrap_content(tree, align);
            }
        } else {
            let align = match self.align {
                Some(align) => align,
                None => self.wrap_content(tree),
            };
            tree.set_attribute(align.cell, "align", horizontal.as_css());
        }
        self.horizontal = horizontal;
    }

    /// Toggle the orientation-specific spacing class.
    ///
    /// A class left over from the other orientation is replaced.
    pub fn set_spacing(
        &mut self,
        tree: &mut dyn StructuralTree,
        enabled: bool,
        orientation: Orientation,
        config: &LayoutConfig,
    ) {
        let wanted = enabled.then(|| config.style_name(orientation.spacing_suffix()));
        if self.spacing_class == wanted {
            return;
        }
        if let Some(old) = self.spacing_class.take() {
            tree.remove_class(self.element, &old);
        }
        if let Some(class) = &wanted {
            tree.add_class(self.element, class);
        }
        self.spacing_class = wanted;
    }

    /// Pin the wrapper to `px` pixels along `orientation`'s axis.
    pub fn set_fixed_size(
        &self,
        tree: &mut dyn StructuralTree,
        orientation: Orientation,
        px: u32,
        clip: bool,
    ) {
        tree.set_style(self.element, orientation.axis_property(), &format!("{px}px"));
        if clip {
            tree.set_style(self.element, "overflow", "hidden");
        }
    }

    /// Undo [`set_fixed_size`](Self::set_fixed_size).
    pub fn clear_fixed_size(&self, tree: &mut dyn StructuralTree, orientation: Orientation) {
        tree.set_style(self.element, orientation.axis_property(), "");
        tree.set_style(self.element, "overflow", "");
    }

    /// Free the wrapper.
    ///
    /// `widget` is detached first when it still lives inside the wrapper,
    /// so the component's own element survives.
    pub fn destroy(self, tree: &mut dyn StructuralTree, widget: NodeId, config: &LayoutConfig) {
        if tree.contains(self.element, widget) {
            if let Some(parent) = tree.parent(widget) {
                tree.remove_child(parent, widget);
            }
            tree.remove_class(widget, &config.style_name("w-e"));
        }
        tree.destroy(self.element);
    }

    fn set_after_classes(
        &self,
        tree: &mut dyn StructuralTree,
        caption: NodeId,
        widget: NodeId,
        after: bool,
        config: &LayoutConfig,
    ) {
        tree.set_class_enabled(self.element, &config.style_name("w"), after);
        tree.set_class_enabled(caption, &config.style_name("c"), after);
        tree.set_class_enabled(widget, &config.style_name("w-e"), after);
    }

    fn wrap_content(&mut self, tree: &mut dyn StructuralTree) -> AlignTable {
        let content = tree.take_children(self.element);

        let table = tree.create_element("table");
        tree.set_attribute(table, "cellpadding", "0");
        tree.set_attribute(table, "cellspacing", "0");
        tree.set_attribute(table, "width", "100%");
        let cell = single_cell(tree, table);

        let inner_table = tree.create_element("table");
        tree.set_attribute(inner_table, "cellpadding", "0");
        tree.set_attribute(inner_table, "cellspacing", "0");
        let inner = single_cell(tree, inner_table);
        tree.set_attribute(inner, "align", "left");
        tree.append_child(cell, inner_table);

        for node in content {
            tree.append_child(inner, node);
        }
        tree.append_child(self.element, table);

        let align = AlignTable { table, cell, inner };
        self.align = Some(align);
        align
    }

    fn unwrap_content(&mut self, tree: &mut dyn StructuralTree, align: AlignTable) {
        for node in tree.take_children(align.inner) {
            tree.append_child(self.element, node);
        }
        tree.destroy(align.table);
    }
}

/// Build `tbody > tr > td` under `table` and return the cell.
fn single_cell(tree: &mut dyn StructuralTree, table: NodeId) -> NodeId {
    let tbody = tree.create_element("tbody");
    let row = tree.create_element("tr");
    let cell = tree.create_element("td");
    tree.append_child(table, tbody);
    tree.append_child(tbody, row);
    tree.append_child(row, cell);
    cell
}
