#![forbid(unsafe_code)]

//! The ordered layout container.
//!
//! # Structure
//!
//! ```text
//! vertical:    root div.<class> > margin div (overflow hidden) > wrapper div*
//! horizontal:  root div.<class> > margin div > table > tbody > tr > wrapper td*
//! ```
//!
//! The element holding the wrappers (the margin element itself, or the
//! table row) is the *holder*. It is rebuilt whenever the orientation
//! changes; wrappers survive and are re-inserted in order.
//!
//! # Ownership
//!
//! A component has at most one holding container. Adding a component held
//! by another container first asks that container to release it, so the
//! previous holder forgets the child and drops its wrapper. The layout state
//! sits behind a shared cell for this reason: the previous holder is reached
//! through the weak link the component keeps, not through its owner.
//!
//! # Invariants
//!
//! - `children` and `wrappers` have the same length and are index-aligned.
//! - A component appears at most once in `children`.
//! - Wrapper elements are the last `children.len()` children of the holder,
//!   in child order.

use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use ordo_core::LayoutConfig;
use ordo_dom::{NodeId, StructuralTree};
use ordo_layout::{AlignmentInfo, FixedSizeState, MarginInfo, Orientation};

use crate::reconcile::{Step, plan};
use crate::uidl::Uidl;
use crate::wrapper::Wrapper;
use crate::{
    ChildHolder, ComponentRef, Connection, Container, Error, Paintable, ParentHandle, Result,
};

/// A container stacking child components along one axis.
pub struct OrderedLayout {
    root: NodeId,
    margin: NodeId,
    state: Rc<RefCell<LayoutState>>,
}

struct LayoutState {
    this: Weak<RefCell<LayoutState>>,
    config: LayoutConfig,
    orientation: Orientation,
    root: NodeId,
    margin: NodeId,
    holder: NodeId,
    table: Option<NodeId>,
    children: Vec<ComponentRef>,
    wrappers: Vec<Wrapper>,
    margins: MarginInfo,
    spacing: bool,
    fixed: FixedSizeState,
    width: Option<String>,
    height: Option<String>,
}

impl OrderedLayout {
    /// Create an empty vertical layout with the default configuration.
    pub fn new(tree: &mut dyn StructuralTree) -> Self {
        Self::with_config(tree, LayoutConfig::new())
    }

    /// Create an empty vertical layout.
    pub fn with_config(tree: &mut dyn StructuralTree, config: LayoutConfig) -> Self {
        let root = tree.create_element("div");
        tree.add_class(root, config.prefix());
        let margin = tree.create_element("div");
        tree.set_style(margin, "overflow", "hidden");
        tree.append_child(root, margin);

        let state = Rc::new_cyclic(|this| {
            RefCell::new(LayoutState {
                this: this.clone(),
                config,
                orientation: Orientation::Vertical,
                root,
                margin,
                holder: margin,
                table: None,
                children: Vec::new(),
                wrappers: Vec::new(),
                margins: MarginInfo::empty(),
                spacing: false,
                fixed: FixedSizeState::new(),
                width: None,
                height: None,
            })
        });
        Self {
            root,
            margin,
            state,
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Configuration in use.
    pub fn config(&self) -> LayoutConfig {
        self.state.borrow().config.clone()
    }

    /// Current orientation.
    pub fn orientation(&self) -> Orientation {
        self.state.borrow().orientation
    }

    /// Outermost element.
    pub fn root_element(&self) -> NodeId {
        self.root
    }

    /// Element carrying the margin classes. Its resolved size drives
    /// fixed-size distribution.
    pub fn margin_element(&self) -> NodeId {
        self.margin
    }

    /// Element the wrappers are inserted into.
    pub fn holder_element(&self) -> NodeId {
        self.state.borrow().holder
    }

    /// Number of children.
    pub fn child_count(&self) -> usize {
        self.state.borrow().children.len()
    }

    /// Number of wrappers. Always equal to [`child_count`](Self::child_count).
    pub fn wrapper_count(&self) -> usize {
        self.state.borrow().wrappers.len()
    }

    /// Wrapper of the child at `index`.
    ///
    /// The returned guard borrows the layout; drop it before mutating.
    pub fn wrapper(&self, index: usize) -> Option<Ref<'_, Wrapper>> {
        Ref::filter_map(self.state.borrow(), |s| s.wrappers.get(index)).ok()
    }

    /// Position of `component` among the children.
    pub fn index_of(&self, component: &ComponentRef) -> Option<usize> {
        self.state.borrow().index_of(component)
    }

    /// Whether `component` is a child.
    pub fn has_child_component(&self, component: &ComponentRef) -> bool {
        self.index_of(component).is_some()
    }

    /// Current margins.
    pub fn margins(&self) -> MarginInfo {
        self.state.borrow().margins
    }

    /// Whether spacing between children is on.
    pub fn is_spacing_enabled(&self) -> bool {
        self.state.borrow().spacing
    }

    /// Fixed-size mode state.
    pub fn fixed_state(&self) -> FixedSizeState {
        self.state.borrow().fixed
    }

    /// Children in order, as of the call.
    pub fn iter(&self) -> std::vec::IntoIter<ComponentRef> {
        self.state.borrow().children.clone().into_iter()
    }

    /// Weak handle children record as their holder.
    pub fn handle(&self) -> ParentHandle {
        self.state.borrow().handle()
    }

    // ---------------------------------------------------------------------
    // Operations
    // ---------------------------------------------------------------------

    /// Switch orientation, rebuilding the holder.
    ///
    /// Wrappers are re-inserted in their current order and a layout pass is
    /// run on the children. No-op when the orientation is unchanged.
    pub fn set_orientation(&mut self, tree: &mut dyn StructuralTree, orientation: Orientation) {
        self.state.borrow_mut().set_orientation(tree, orientation);
    }

    /// Bring the layout in line with `uidl`.
    ///
    /// Every attribute is validated before anything is touched; an
    /// alignment list shorter than the child list fails with
    /// [`Error::AlignmentMismatch`]. The orientation is applied before the
    /// connection is consulted, so a cached description still switches it.
    pub fn apply_update(
        &mut self,
        tree: &mut dyn StructuralTree,
        client: &mut dyn Connection,
        uidl: &Uidl,
    ) -> Result<()> {
        self.state.borrow_mut().apply_update(tree, client, uidl)
    }

    /// Insert `child` at `at_index`, or move it there if it is already a
    /// child.
    ///
    /// Indices past the end are ignored. A new child is released by the
    /// container holding it, if any, then wrapped and notified through
    /// [`Paintable::on_attach`].
    pub fn add(&mut self, tree: &mut dyn StructuralTree, child: ComponentRef, at_index: usize) {
        self.state.borrow_mut().add(tree, child, at_index);
    }

    /// Append `child` at the end.
    pub fn push(&mut self, tree: &mut dyn StructuralTree, child: ComponentRef) {
        let end = self.child_count();
        self.add(tree, child, end);
    }

    /// Remove `child`. Returns `false` if it is not a child.
    ///
    /// The child is notified through [`Paintable::on_detach`] while still
    /// placed, unless its element has been moved elsewhere since. The
    /// component itself is not discarded.
    pub fn remove(&mut self, tree: &mut dyn StructuralTree, child: &ComponentRef) -> bool {
        self.state.borrow_mut().remove(tree, child)
    }

    /// Swap `old` for `new` at the same position, unregistering `old`.
    /// No-op when `old` is not a child.
    pub fn replace_child_component(
        &mut self,
        tree: &mut dyn StructuralTree,
        client: &mut dyn Connection,
        old: &ComponentRef,
        new: ComponentRef,
    ) {
        self.state
            .borrow_mut()
            .replace_child_component(tree, client, old, new);
    }

    /// Refresh the caption shown for `component`. No-op if it is not a child.
    pub fn update_caption(
        &mut self,
        tree: &mut dyn StructuralTree,
        component: &ComponentRef,
        uidl: &Uidl,
    ) -> Result<()> {
        self.state.borrow_mut().update_caption(tree, component, uidl)
    }

    /// Orphan every child and free all elements of the layout.
    ///
    /// Child elements are detached and survive. The layout is left empty
    /// and must not be used afterwards.
    pub fn teardown(&mut self, tree: &mut dyn StructuralTree) {
        self.state.borrow_mut().teardown(tree);
    }

    /// Set an explicit width, or clear it with `None` or `""`.
    ///
    /// In a horizontal layout an explicit width turns fixed-size mode on.
    pub fn set_width(&mut self, tree: &mut dyn StructuralTree, width: Option<&str>) {
        self.state.borrow_mut().set_width(tree, width);
    }

    /// Set an explicit height, or clear it with `None` or `""`.
    ///
    /// In a vertical layout an explicit height turns fixed-size mode on.
    pub fn set_height(&mut self, tree: &mut dyn StructuralTree, height: Option<&str>) {
        self.state.borrow_mut().set_height(tree, height);
    }

    /// Recompute fixed sizes and run a layout pass on the children.
    pub fn refresh_layout(&mut self, tree: &mut dyn StructuralTree) {
        self.state.borrow_mut().refresh_layout(tree);
    }
}

impl LayoutState {
    fn handle(&self) -> ParentHandle {
        self.this.clone()
    }

    fn index_of(&self, component: &ComponentRef) -> Option<usize> {
        self.children.iter().position(|c| c == component)
    }

    // ---------------------------------------------------------------------
    // Orientation
    // ---------------------------------------------------------------------

    fn set_orientation(&mut self, tree: &mut dyn StructuralTree, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "ordered_layout.set_orientation",
            from = %self.orientation,
            to = %orientation,
            children = self.children.len()
        )
        .entered();

        // Fixed sizes belong to the old axis.
        self.clear_fixed_sizes(tree);

        for wrapper in &self.wrappers {
            tree.remove_child(self.holder, wrapper.element());
        }
        if let Some(table) = self.table.take() {
            tree.destroy(table);
        }

        self.orientation = orientation;
        match orientation {
            Orientation::Vertical => self.holder = self.margin,
            Orientation::Horizontal => {
                let table = tree.create_element("table");
                tree.set_attribute(table, "cellspacing", "0");
                tree.set_attribute(table, "cellpadding", "0");
                let tbody = tree.create_element("tbody");
                let row = tree.create_element("tr");
                tree.append_child(table, tbody);
                tree.append_child(tbody, row);
                tree.append_child(self.margin, table);
                self.table = Some(table);
                self.holder = row;
            }
        }

        for wrapper in &self.wrappers {
            tree.append_child(self.holder, wrapper.element());
        }
        self.apply_spacing(tree);
        self.sync_fixed_mode(tree);
        ordo_core::debug!(orientation = %orientation, "holder rebuilt");

        self.run_descendants_layout(tree);
    }

    // ---------------------------------------------------------------------
    // Update
    // ---------------------------------------------------------------------

    fn apply_update(
        &mut self,
        tree: &mut dyn StructuralTree,
        client: &mut dyn Connection,
        uidl: &Uidl,
    ) -> Result<()> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "ordered_layout.apply_update",
            element = %self.root,
            described = uidl.children().len()
        )
        .entered();

        let orientation = Orientation::from_attribute(uidl.string_attribute("orientation")?);
        let margins = MarginInfo::from_code(uidl.int_attribute("margins")?.unwrap_or(0));
        let spacing = uidl.bool_attribute("spacing")?.unwrap_or(false);
        let width = uidl.string_attribute("width")?;
        let height = uidl.string_attribute("height")?;
        let alignments = uidl.int_array_attribute("alignments")?;
        if let Some(alignments) = alignments {
            if alignments.len() < uidl.children().len() {
                return Err(Error::AlignmentMismatch {
                    children: uidl.children().len(),
                    alignments: alignments.len(),
                });
            }
        }

        self.set_orientation(tree, orientation);

        // The enclosing container owns this layout's caption.
        if client.update_component(self.root, uidl, false)? {
            ordo_core::trace!(element = %self.root, "update skipped by connection");
            return Ok(());
        }

        let resolved = uidl
            .children()
            .iter()
            .map(|child| client.paintable(child, tree))
            .collect::<Result<Vec<_>>>()?;

        self.set_width(tree, width);
        self.set_height(tree, height);
        self.set_margins(tree, margins);
        self.spacing = spacing;

        self.reconcile(tree, client, uidl, &resolved)?;

        for (index, wrapper) in self.wrappers.iter_mut().enumerate() {
            let info = alignments
                .and_then(|a| a.get(index))
                .map_or_else(AlignmentInfo::empty, |&code| AlignmentInfo::from_code(code));
            wrapper.set_alignment(tree, info.vertical(), info.horizontal());
        }
        self.apply_spacing(tree);

        if self.update_fixed_sizes(tree) {
            self.run_descendants_layout(tree);
        }
        Ok(())
    }

    fn reconcile(
        &mut self,
        tree: &mut dyn StructuralTree,
        client: &mut dyn Connection,
        uidl: &Uidl,
        resolved: &[ComponentRef],
    ) -> Result<()> {
        let steps = plan(&self.children, resolved);
        ordo_core::trace!(steps = steps.len(), "reconciliation planned");

        for step in steps {
            let index = match step {
                Step::Remove(child) => {
                    // Dropped from this layout only; the component may be
                    // adopted by another container in the same update.
                    self.remove(tree, &child);
                    continue;
                }
                Step::Matched { index } => index,
                Step::MoveBefore { index, anchor } => {
                    let child = &resolved[index];
                    if let (Some(from), Some(before)) = (self.index_of(child), self.index_of(&anchor)) {
                        let to = if from < before { before - 1 } else { before };
                        self.add(tree, child.clone(), to);
                    }
                    index
                }
                Step::InsertBefore { index, anchor } => {
                    let at = self.index_of(&anchor).unwrap_or(self.children.len());
                    self.add(tree, resolved[index].clone(), at);
                    index
                }
                Step::Append { index } => {
                    let end = self.children.len();
                    self.add(tree, resolved[index].clone(), end);
                    index
                }
            };

            let child = &resolved[index];
            let child_uidl = &uidl.children()[index];
            child.with_mut(|p| p.update_from_uidl(child_uidl, tree, client))??;
            if !child_uidl.bool_attribute("cached")?.unwrap_or(false) {
                self.update_caption(tree, child, child_uidl)?;
            }
        }
        Ok(())
    }

    fn set_margins(&mut self, tree: &mut dyn StructuralTree, margins: MarginInfo) {
        if self.margins == margins {
            return;
        }
        for (suffix, enabled) in margins.sides() {
            tree.set_class_enabled(self.margin, &self.config.style_name(suffix), enabled);
        }
        self.margins = margins;
    }

    fn apply_spacing(&mut self, tree: &mut dyn StructuralTree) {
        for (index, wrapper) in self.wrappers.iter_mut().enumerate() {
            wrapper.set_spacing(tree, index > 0 && self.spacing, self.orientation, &self.config);
        }
    }

    // ---------------------------------------------------------------------
    // Children
    // ---------------------------------------------------------------------

    fn add(&mut self, tree: &mut dyn StructuralTree, child: ComponentRef, at_index: usize) {
        let len = self.children.len();
        if at_index > len {
            ordo_core::trace!(at_index, len, "add past the end ignored");
            return;
        }
        let non_child = tree.child_count(self.holder).saturating_sub(len);

        if let Some(from) = self.index_of(&child) {
            let to = at_index.min(len - 1);
            if from == to {
                return;
            }
            let wrapper = self.wrappers.remove(from);
            let child = self.children.remove(from);
            tree.insert_child(self.holder, wrapper.element(), to + non_child);
            self.wrappers.insert(to, wrapper);
            self.children.insert(to, child);
            self.fixed.invalidate();
            ordo_core::trace!(from, to, "child moved");
            return;
        }

        let handle = self.handle();
        if !child.is_held_by(&handle) {
            child.remove_from_parent(tree);
        }
        let element = child.element();
        if let Some(parent) = tree.parent(element) {
            // Holder busy or not a layout: take the element over directly.
            tree.remove_child(parent, element);
            tree.remove_class(element, &self.config.style_name("w-e"));
        }
        let wrapper = Wrapper::new(tree, self.orientation);
        tree.insert_child(self.holder, wrapper.element(), at_index + non_child);
        tree.append_child(wrapper.content_holder(), element);
        self.wrappers.insert(at_index, wrapper);
        self.children.insert(at_index, child.clone());
        child.set_parent(Some(handle));
        self.fixed.invalidate();
        ordo_core::trace!(at_index, element = %element, "child added");

        child.notify(|p| p.on_attach(tree));
    }

    fn remove(&mut self, tree: &mut dyn StructuralTree, child: &ComponentRef) -> bool {
        let Some(index) = self.index_of(child) else {
            return false;
        };
        if self.owns(tree, child) {
            child.notify(|p| p.on_detach(tree));
        } else {
            ordo_core::warn!(element = %child.element(), "removing a child adopted elsewhere");
        }
        let wrapper = self.wrappers.remove(index);
        wrapper.destroy(tree, child.element(), &self.config);
        self.children.remove(index);
        self.forget_parent(child);
        self.fixed.invalidate();
        ordo_core::trace!(index, "child removed");
        true
    }

    fn replace_child_component(
        &mut self,
        tree: &mut dyn StructuralTree,
        client: &mut dyn Connection,
        old: &ComponentRef,
        new: ComponentRef,
    ) {
        let Some(index) = self.index_of(old) else {
            return;
        };
        client.unregister_paintable(old);
        self.remove(tree, old);
        let index = index.min(self.children.len());
        self.add(tree, new, index);
    }

    fn update_caption(
        &mut self,
        tree: &mut dyn StructuralTree,
        component: &ComponentRef,
        uidl: &Uidl,
    ) -> Result<()> {
        match self.index_of(component) {
            Some(index) => self.wrappers[index].update_caption(
                tree,
                uidl,
                component.element(),
                &self.config,
            ),
            None => Ok(()),
        }
    }

    fn teardown(&mut self, tree: &mut dyn StructuralTree) {
        let children = std::mem::take(&mut self.children);
        let wrappers = std::mem::take(&mut self.wrappers);
        for (child, wrapper) in children.into_iter().zip(wrappers) {
            if tree.contains(wrapper.element(), child.element()) {
                child.notify(|p| p.on_detach(tree));
            }
            wrapper.destroy(tree, child.element(), &self.config);
            self.forget_parent(&child);
        }
        tree.destroy(self.root);
        self.table = None;
        self.fixed = FixedSizeState::new();
        ordo_core::debug!(element = %self.root, "layout torn down");
    }

    fn owns(&self, tree: &dyn StructuralTree, child: &ComponentRef) -> bool {
        self.index_of(child)
            .is_some_and(|i| tree.contains(self.wrappers[i].element(), child.element()))
    }

    /// Clear the holder link of `child` unless another container took it.
    fn forget_parent(&self, child: &ComponentRef) {
        if child.is_held_by(&self.handle()) {
            child.set_parent(None);
        }
    }

    // ---------------------------------------------------------------------
    // Sizing
    // ---------------------------------------------------------------------

    fn set_width(&mut self, tree: &mut dyn StructuralTree, width: Option<&str>) {
        let width = width.filter(|w| !w.is_empty());
        tree.set_style(self.root, "width", width.unwrap_or(""));
        self.width = width.map(str::to_owned);
        self.sync_axis(tree, Orientation::Horizontal);
    }

    fn set_height(&mut self, tree: &mut dyn StructuralTree, height: Option<&str>) {
        let height = height.filter(|h| !h.is_empty());
        tree.set_style(self.root, "height", height.unwrap_or(""));
        self.height = height.map(str::to_owned);
        self.sync_axis(tree, Orientation::Vertical);
    }

    fn refresh_layout(&mut self, tree: &mut dyn StructuralTree) {
        self.update_fixed_sizes(tree);
        self.run_descendants_layout(tree);
    }

    fn extent(&self, axis: Orientation) -> Option<&str> {
        match axis {
            Orientation::Horizontal => self.width.as_deref(),
            Orientation::Vertical => self.height.as_deref(),
        }
    }

    /// Mirror the explicit extent along `axis` onto the margin element and
    /// update fixed-size mode if `axis` is the layout axis.
    fn sync_axis(&mut self, tree: &mut dyn StructuralTree, axis: Orientation) {
        let explicit = self.extent(axis).is_some();
        tree.set_style(
            self.margin,
            axis.axis_property(),
            if explicit { "100%" } else { "" },
        );
        if axis != self.orientation {
            return;
        }
        if explicit {
            self.fixed.enable();
        } else {
            self.clear_fixed_sizes(tree);
        }
    }

    fn sync_fixed_mode(&mut self, tree: &mut dyn StructuralTree) {
        self.sync_axis(tree, Orientation::Horizontal);
        self.sync_axis(tree, Orientation::Vertical);
    }

    fn clear_fixed_sizes(&mut self, tree: &mut dyn StructuralTree) {
        if !self.fixed.disable() {
            return;
        }
        for wrapper in &self.wrappers {
            wrapper.clear_fixed_size(tree, self.orientation);
        }
        if self.extent(self.orientation).is_none() {
            tree.set_style(self.margin, self.orientation.axis_property(), "");
        }
        if let Some(table) = self.table {
            tree.set_style(table, "table-layout", "auto");
            tree.set_style(table, "width", "");
        }
        ordo_core::debug!(orientation = %self.orientation, "fixed sizes cleared");
    }

    /// One fixed-size pass. Returns whether sizes were (re)applied.
    fn update_fixed_sizes(&mut self, tree: &mut dyn StructuralTree) -> bool {
        if !self.fixed.is_enabled() {
            return false;
        }
        let axis = self.orientation.axis_property();
        tree.set_style(self.margin, axis, "100%");
        let resolved = self.orientation.along(tree.offset_size(self.margin));

        if let Some(table) = self.table {
            tree.set_style(table, "table-layout", "fixed");
            tree.set_style(table, "width", &format!("{resolved}px"));
        }

        let spacing = self.spacing.then(|| self.config.spacing());
        let Some(plan) = self.fixed.plan(resolved, self.wrappers.len(), spacing) else {
            return false;
        };
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "ordered_layout.fixed_sizes",
            resolved,
            distributable = plan.distributable,
            first_time = plan.first_time
        )
        .entered();

        for (wrapper, size) in self.wrappers.iter().zip(&plan.sizes) {
            wrapper.set_fixed_size(tree, self.orientation, *size, plan.first_time);
        }
        true
    }

    fn run_descendants_layout(&self, tree: &mut dyn StructuralTree) {
        for child in &self.children {
            child.notify(|p| p.layout(tree));
        }
    }
}

impl ChildHolder for LayoutState {
    fn release_child(&mut self, tree: &mut dyn StructuralTree, child: &ComponentRef) -> bool {
        self.remove(tree, child)
    }
}

impl<'a> IntoIterator for &'a OrderedLayout {
    type Item = ComponentRef;
    type IntoIter = std::vec::IntoIter<ComponentRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for OrderedLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Ok(state) = self.state.try_borrow() else {
            return f
                .debug_struct("OrderedLayout")
                .field("root", &self.root)
                .finish_non_exhaustive();
        };
        f.debug_struct("OrderedLayout")
            .field("orientation", &state.orientation)
            .field("root", &self.root)
            .field("holder", &state.holder)
            .field("children", &state.children.len())
            .field("margins", &state.margins)
            .field("spacing", &state.spacing)
            .field("fixed", &state.fixed)
            .finish()
    }
}

impl Paintable for OrderedLayout {
    fn element(&self) -> NodeId {
        self.root
    }

    fn update_from_uidl(
        &mut self,
        uidl: &Uidl,
        tree: &mut dyn StructuralTree,
        client: &mut dyn Connection,
    ) -> Result<()> {
        self.apply_update(tree, client, uidl)
    }

    fn layout(&mut self, tree: &mut dyn StructuralTree) {
        self.refresh_layout(tree);
    }
}

impl Container for OrderedLayout {
    fn has_child_component(&self, component: &ComponentRef) -> bool {
        OrderedLayout::has_child_component(self, component)
    }

    fn replace_child_component(
        &mut self,
        tree: &mut dyn StructuralTree,
        client: &mut dyn Connection,
        old: &ComponentRef,
        new: ComponentRef,
    ) {
        OrderedLayout::replace_child_component(self, tree, client, old, new);
    }

    fn update_caption(
        &mut self,
        tree: &mut dyn StructuralTree,
        component: &ComponentRef,
        uidl: &Uidl,
    ) -> Result<()> {
        OrderedLayout::update_caption(self, tree, component, uidl)
    }
}
