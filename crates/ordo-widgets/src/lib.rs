#![forbid(unsafe_code)]

//! Ordered layout widgets.
//!
//! An [`OrderedLayout`] stacks child components vertically or horizontally
//! inside a [`StructuralTree`], and reconciles its children against each
//! incoming update description ([`Uidl`]) with as few structural changes as
//! possible.
//!
//! Children are external components. The layout only needs the
//! [`Paintable`] capability from them (an element to place, a way to push an
//! update description into them, attach/detach/layout notifications) and a
//! [`Connection`] that resolves descriptions to components.

pub mod caption;
pub mod ordered_layout;
pub mod reconcile;
#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;
pub mod uidl;
pub mod wrapper;

pub use caption::Caption;
pub use ordered_layout::OrderedLayout;
pub use reconcile::{Step, plan};
pub use uidl::{AttrValue, Uidl, UidlError};
pub use wrapper::Wrapper;

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

use ordo_core::Size;
use ordo_dom::{NodeId, StructuralTree};

/// Errors raised while applying an update description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An attribute of the description had an unexpected type.
    Uidl(UidlError),
    /// The description carries fewer alignment entries than children.
    AlignmentMismatch {
        /// Number of children described.
        children: usize,
        /// Number of alignment entries.
        alignments: usize,
    },
    /// A component was asked to update while it was already being updated.
    Reentrant,
    /// A component or connection reported a failure.
    Component(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uidl(err) => write!(f, "invalid update description: {err}"),
            Self::AlignmentMismatch {
                children,
                alignments,
            } => write!(
                f,
                "{alignments} alignment entries for {children} children"
            ),
            Self::Reentrant => write!(f, "component is already being updated"),
            Self::Component(msg) => write!(f, "component error: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Uidl(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UidlError> for Error {
    fn from(err: UidlError) -> Self {
        Self::Uidl(err)
    }
}

/// Result type for widget operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A component that renders into a [`StructuralTree`] and accepts updates.
///
/// The element returned by [`element`](Self::element) must stay the same for
/// the lifetime of the component; containers cache it.
pub trait Paintable {
    /// Root element of the component.
    fn element(&self) -> NodeId;

    /// Apply an update description.
    fn update_from_uidl(
        &mut self,
        uidl: &Uidl,
        tree: &mut dyn StructuralTree,
        client: &mut dyn Connection,
    ) -> Result<()>;

    /// Resolved size of the component.
    fn size(&self, tree: &dyn StructuralTree) -> Size {
        tree.offset_size(self.element())
    }

    /// Called after the component has been placed inside a container.
    fn on_attach(&mut self, _tree: &mut dyn StructuralTree) {}

    /// Called while the component is still placed, just before removal.
    fn on_detach(&mut self, _tree: &mut dyn StructuralTree) {}

    /// Called when the enclosing container changed size or structure.
    fn layout(&mut self, _tree: &mut dyn StructuralTree) {}
}

/// A component that manages children.
pub trait Container {
    /// Whether `component` is a direct child.
    fn has_child_component(&self, component: &ComponentRef) -> bool;

    /// Swap `old` for `new` at the same position. No-op if `old` is absent.
    fn replace_child_component(
        &mut self,
        tree: &mut dyn StructuralTree,
        client: &mut dyn Connection,
        old: &ComponentRef,
        new: ComponentRef,
    );

    /// Refresh the caption shown for `component`. No-op if it is absent.
    fn update_caption(
        &mut self,
        tree: &mut dyn StructuralTree,
        component: &ComponentRef,
        uidl: &Uidl,
    ) -> Result<()>;
}

/// A container that can give up a child so another container can adopt it.
pub trait ChildHolder {
    /// Remove `child` without discarding it. Returns `false` if `child` is
    /// not held.
    fn release_child(&mut self, tree: &mut dyn StructuralTree, child: &ComponentRef) -> bool;
}

/// Weak link from a component to the container holding it.
pub type ParentHandle = Weak<RefCell<dyn ChildHolder>>;

/// The collaborator that owns components and resolves descriptions.
pub trait Connection {
    /// Resolve a child description to its component, creating it if needed.
    fn paintable(&mut self, uidl: &Uidl, tree: &mut dyn StructuralTree) -> Result<ComponentRef>;

    /// Forget a component that is being discarded.
    fn unregister_paintable(&mut self, component: &ComponentRef);

    /// Generic component bookkeeping done before a component applies its own
    /// update. Returning `true` means the component must skip the rest of
    /// the update.
    fn update_component(
        &mut self,
        _element: NodeId,
        uidl: &Uidl,
        _manage_caption: bool,
    ) -> Result<bool> {
        Ok(uidl.bool_attribute("cached")?.unwrap_or(false))
    }
}

/// Shared handle to an external component.
///
/// Equality and hashing use the identity of the component, never its
/// contents: two handles are equal only if they point at the same instance.
///
/// Clones share the link to the holding container, so build one handle per
/// component and clone it rather than wrapping the same component twice.
#[derive(Clone)]
pub struct ComponentRef {
    inner: Rc<RefCell<dyn Paintable>>,
    parent: Rc<RefCell<Option<ParentHandle>>>,
    element: NodeId,
}

impl ComponentRef {
    /// Wrap a freshly built component.
    pub fn new<P: Paintable + 'static>(paintable: P) -> Self {
        Self::from_shared(Rc::new(RefCell::new(paintable)))
    }

    /// Wrap a component the caller keeps a typed handle to.
    pub fn from_shared<P: Paintable + 'static>(shared: Rc<RefCell<P>>) -> Self {
        let element = shared.borrow().element();
        Self {
            inner: shared,
            parent: Rc::new(RefCell::new(None)),
            element,
        }
    }

    /// Root element of the component.
    #[inline]
    pub fn element(&self) -> NodeId {
        self.element
    }

    /// Whether both handles name the same component.
    #[inline]
    pub fn same(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }

    /// Run `f` with exclusive access to the component.
    ///
    /// Fails with [`Error::Reentrant`] if the component is already borrowed,
    /// e.g. a layout reached itself through its own children.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut dyn Paintable) -> R) -> Result<R> {
        let mut guard = self.inner.try_borrow_mut().map_err(|_| Error::Reentrant)?;
        Ok(f(&mut *guard))
    }

    /// Container currently holding the component, if it is still alive.
    pub fn parent(&self) -> Option<Rc<RefCell<dyn ChildHolder>>> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    /// Whether `holder` is the container recorded as holding the component.
    pub fn is_held_by(&self, holder: &ParentHandle) -> bool {
        self.parent
            .borrow()
            .as_ref()
            .is_some_and(|p| Weak::ptr_eq(p, holder))
    }

    pub(crate) fn set_parent(&self, parent: Option<ParentHandle>) {
        *self.parent.borrow_mut() = parent;
    }

    /// Ask the holding container to let go of the component.
    ///
    /// Returns whether a container released it. A holder that is in the
    /// middle of its own update keeps its entry; that update drops it once
    /// the description no longer lists the component.
    pub fn remove_from_parent(&self, tree: &mut dyn StructuralTree) -> bool {
        let Some(holder) = self.parent() else {
            return false;
        };
        if let Ok(mut holder) = holder.try_borrow_mut() {
            return holder.release_child(tree, self);
        }
        ordo_core::trace!(element = %self.element, "holder busy, release deferred");
        false
    }

    /// Deliver a notification, skipping components that are busy.
    ///
    /// Returns whether the notification was delivered.
    pub(crate) fn notify(&self, f: impl FnOnce(&mut dyn Paintable)) -> bool {
        match self.inner.try_borrow_mut() {
            Ok(mut guard) => {
                f(&mut *guard);
                true
            }
            Err(_) => {
                ordo_core::warn!(element = %self.element, "skipping notification of busy component");
                false
            }
        }
    }

    fn addr(&self) -> *const () {
        Rc::as_ptr(&self.inner) as *const ()
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for ComponentRef {}

impl Hash for ComponentRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRef")
            .field("element", &self.element)
            .field("addr", &self.addr())
            .finish()
    }
}
