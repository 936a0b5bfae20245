#![forbid(unsafe_code)]

//! Ordo public facade crate.
//!
//! Re-exports the types needed to host ordered layouts: the structural tree
//! capability, the layout primitives, the update description and the
//! container itself, plus a prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use ordo_core::{LayoutConfig, Size};

// --- Tree re-exports -------------------------------------------------------

pub use ordo_dom::{MemoryTree, NodeId, StructuralTree};

// --- Layout re-exports -----------------------------------------------------

pub use ordo_layout::{
    AlignmentInfo, FixedSizeState, HorizontalAlignment, MarginInfo, Orientation,
    VerticalAlignment,
};

// --- Widget re-exports -----------------------------------------------------

pub use ordo_widgets::{
    AttrValue, Caption, ChildHolder, ComponentRef, Connection, Container, OrderedLayout,
    Paintable, ParentHandle, Uidl, UidlError, Wrapper,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for ordo hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Applying an update description failed.
    Layout(ordo_widgets::Error),
    /// Host-side failure with message.
    Host(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "{err}"),
            Self::Host(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Host(_) => None,
        }
    }
}

impl From<ordo_widgets::Error> for Error {
    fn from(err: ordo_widgets::Error) -> Self {
        Self::Layout(err)
    }
}

impl From<UidlError> for Error {
    fn from(err: UidlError) -> Self {
        Self::Layout(err.into())
    }
}

/// Standard result type for ordo APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ComponentRef, Connection, Container, Error, LayoutConfig, MemoryTree, Orientation,
        OrderedLayout, Paintable, Result, StructuralTree, Uidl,
    };

    pub use crate::{core, dom, layout, widgets};
}

pub use ordo_core as core;
pub use ordo_dom as dom;
pub use ordo_layout as layout;
pub use ordo_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn widget_errors_convert_and_chain() {
        let err: Error = ordo_widgets::Error::Reentrant.into();
        assert_eq!(err.to_string(), "component is already being updated");
        assert!(err.source().is_some());

        let host = Error::Host("no surface".into());
        assert_eq!(host.to_string(), "no surface");
        assert!(host.source().is_none());
    }

    #[test]
    fn prelude_is_enough_to_build_a_layout() {
        use crate::prelude::*;

        fn build() -> Result<usize> {
            let mut tree = MemoryTree::new();
            let layout = OrderedLayout::with_config(&mut tree, LayoutConfig::new());
            Ok(tree.child_count(layout.root_element()))
        }
        assert_eq!(build(), Ok(1));
    }
}
