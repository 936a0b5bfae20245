#![forbid(unsafe_code)]

//! Container margin descriptor.

use bitflags::bitflags;

bitflags! {
    /// Which sides of a layout carry a margin.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MarginInfo: u8 {
        /// Margin above the first child.
        const TOP    = 0b0001;
        /// Margin right of the content.
        const RIGHT  = 0b0010;
        /// Margin below the last child.
        const BOTTOM = 0b0100;
        /// Margin left of the content.
        const LEFT   = 0b1000;
    }
}

impl MarginInfo {
    /// Decode a margin bitmask, ignoring unknown bits.
    #[inline]
    pub const fn from_code(code: i64) -> Self {
        Self::from_bits_truncate((code & 0x0F) as u8)
    }

    /// Each side with the class suffix it maps to, in top/right/bottom/left
    /// order.
    pub fn sides(self) -> [(&'static str, bool); 4] {
        [
            ("margin-top", self.contains(Self::TOP)),
            ("margin-right", self.contains(Self::RIGHT)),
            ("margin-bottom", self.contains(Self::BOTTOM)),
            ("margin-left", self.contains(Self::LEFT)),
        ]
    }
}
