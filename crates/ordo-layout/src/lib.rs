#![forbid(unsafe_code)]

//! Layout primitives for ordered layouts.
//!
//! - [`Orientation`] - the axis children are stacked along
//! - [`AlignmentInfo`] - per-child alignment decoded from a bitmask
//! - [`MarginInfo`] - container margins decoded from a bitmask
//! - [`fixed`] - splitting an explicit container size across children

pub mod alignment;
pub mod fixed;
pub mod margin;

pub use alignment::{AlignmentInfo, HorizontalAlignment, VerticalAlignment};
pub use fixed::{FixedSizePlan, FixedSizeState, distributable_size, distribute};
pub use margin::MarginInfo;
pub use ordo_core::Size;

/// The direction children are stacked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Top to bottom, one block per child.
    #[default]
    Vertical,
    /// Left to right, one table cell per child.
    Horizontal,
}

impl Orientation {
    /// Decode the `orientation` attribute of an update description.
    ///
    /// Only `"horizontal"` selects [`Orientation::Horizontal`]; anything else,
    /// including a missing attribute, means vertical.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some("horizontal") => Self::Horizontal,
            _ => Self::Vertical,
        }
    }

    /// The other orientation.
    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Vertical => Self::Horizontal,
            Self::Horizontal => Self::Vertical,
        }
    }

    /// CSS property sized along this axis.
    #[inline]
    pub const fn axis_property(self) -> &'static str {
        match self {
            Self::Vertical => "height",
            Self::Horizontal => "width",
        }
    }

    /// Class suffix for spacing between children along this axis.
    #[inline]
    pub const fn spacing_suffix(self) -> &'static str {
        match self {
            Self::Vertical => "vspacing",
            Self::Horizontal => "hspacing",
        }
    }

    /// Component of `size` along this axis.
    #[inline]
    pub const fn along(self, size: Size) -> u32 {
        match self {
            Self::Vertical => size.height,
            Self::Horizontal => size.width,
        }
    }

    /// Stable lowercase name, as used by the `orientation` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
