#![forbid(unsafe_code)]

//! Per-child alignment descriptors.
//!
//! Alignments arrive as small integers with one bit per edge or center line.
//! Decoding favours the far edge over the center: a value with both
//! `BOTTOM` and `VERTICAL_CENTER` set aligns to the bottom.

use bitflags::bitflags;

bitflags! {
    /// Bit-encoded alignment of one child.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AlignmentInfo: u8 {
        /// Align to the left edge.
        const LEFT              = 0b0000_0001;
        /// Align to the right edge.
        const RIGHT             = 0b0000_0010;
        /// Align to the top edge.
        const TOP               = 0b0000_0100;
        /// Align to the bottom edge.
        const BOTTOM            = 0b0000_1000;
        /// Center horizontally.
        const HORIZONTAL_CENTER = 0b0001_0000;
        /// Center vertically.
        const VERTICAL_CENTER   = 0b0010_0000;
    }
}

impl AlignmentInfo {
    /// Decode an alignment integer, ignoring unknown bits.
    #[inline]
    pub const fn from_code(code: i64) -> Self {
        Self::from_bits_truncate((code & 0xFF) as u8)
    }

    /// Vertical component.
    pub const fn vertical(self) -> VerticalAlignment {
        if self.contains(Self::BOTTOM) {
            VerticalAlignment::Bottom
        } else if self.contains(Self::VERTICAL_CENTER) {
            VerticalAlignment::Middle
        } else {
            VerticalAlignment::Top
        }
    }

    /// Horizontal component.
    pub const fn horizontal(self) -> HorizontalAlignment {
        if self.contains(Self::RIGHT) {
            HorizontalAlignment::Right
        } else if self.contains(Self::HORIZONTAL_CENTER) {
            HorizontalAlignment::Center
        } else {
            HorizontalAlignment::Left
        }
    }
}

/// Vertical alignment of a child inside its wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    /// Align content to the top (default).
    #[default]
    Top,
    /// Center content vertically.
    Middle,
    /// Align content to the bottom.
    Bottom,
}

impl VerticalAlignment {
    /// CSS `vertical-align` keyword.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// Horizontal alignment of a child inside its wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Align content to the left (default).
    #[default]
    Left,
    /// Center content horizontally.
    Center,
    /// Align content to the right.
    Right,
}

impl HorizontalAlignment {
    /// HTML `align` keyword.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Whether this is the default placement that needs no extra structure.
    #[inline]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Left)
    }
}
