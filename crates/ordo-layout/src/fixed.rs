#![forbid(unsafe_code)]

//! Fixed-size distribution.
//!
//! When a layout has an explicit size along its axis, that size is split
//! across the children instead of letting each child size itself. The split
//! walks the children in order and gives each one
//! `round(remaining / remaining_children)`, so rounding never accumulates:
//! the last child absorbs whatever is left and the sizes always sum to the
//! distributable total.
//!
//! # Example
//!
//! ```
//! use ordo_layout::{distributable_size, distribute};
//!
//! // 300px wide, 3 children, 8px spacing between them.
//! let total = distributable_size(300, 3, Some(8));
//! assert_eq!(total, 284);
//! assert_eq!(distribute(total, 3), vec![95, 95, 94]);
//! ```

/// Size left for children once spacing gaps are taken out.
///
/// `spacing` is the gap between two neighbours when spacing is enabled.
/// Saturates at zero when the gaps alone exceed `resolved`.
pub fn distributable_size(resolved: u32, children: usize, spacing: Option<u32>) -> u32 {
    let gaps = u32::try_from(children.saturating_sub(1)).unwrap_or(u32::MAX);
    match spacing {
        Some(unit) => resolved.saturating_sub(unit.saturating_mul(gaps)),
        None => resolved,
    }
}

/// Split `total` across `count` children.
///
/// Each child receives the remaining size divided by the remaining child
/// count, rounded half up; both are then decremented. The result sums to
/// `total` exactly and no two entries differ by more than one.
pub fn distribute(total: u32, count: usize) -> Vec<u32> {
    let mut sizes = Vec::with_capacity(count);
    let mut remaining = u64::from(total);
    let mut left = count as u64;
    while left > 0 {
        // round(remaining / left) with halves rounding up, in integers.
        let share = (2 * remaining + left) / (2 * left);
        sizes.push(share as u32);
        remaining -= share;
        left -= 1;
    }
    sizes
}

/// Sizes to apply on one fixed-size pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSizePlan {
    /// Total size split across the children.
    pub distributable: u32,
    /// Per-child sizes, in child order.
    pub sizes: Vec<u32>,
    /// Whether this is the first application since fixed mode was entered.
    pub first_time: bool,
}

/// Fixed-size mode state of one layout.
///
/// Tracks whether fixed mode is on and which distributable size was applied
/// last. A pass whose distributable size equals the last applied one is
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedSizeState {
    enabled: bool,
    applied: Option<u32>,
}

impl FixedSizeState {
    /// Fixed mode off, nothing applied.
    pub const fn new() -> Self {
        Self {
            enabled: false,
            applied: None,
        }
    }

    /// Whether fixed mode is on.
    #[inline]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Distributable size of the last applied pass.
    #[inline]
    pub const fn applied(&self) -> Option<u32> {
        self.applied
    }

    /// Turn fixed mode on. The next pass is computed.
    pub fn enable(&mut self) {
        self.enabled = true;
    }

    /// Turn fixed mode off and forget the applied size.
    ///
    /// Returns whether fixed mode was on, i.e. whether applied sizes need
    /// clearing.
    pub fn disable(&mut self) -> bool {
        let was_enabled = self.enabled;
        self.enabled = false;
        self.applied = None;
        was_enabled
    }

    /// Forget the applied size so the next pass recomputes from scratch.
    pub fn invalidate(&mut self) {
        self.applied = None;
    }

    /// Compute the next pass, or `None` when fixed mode is off or the
    /// distributable size did not change.
    pub fn plan(
        &mut self,
        resolved: u32,
        children: usize,
        spacing: Option<u32>,
    ) -> Option<FixedSizePlan> {
        if !self.enabled {
            return None;
        }
        let distributable = distributable_size(resolved, children, spacing);
        if self.applied == Some(distributable) {
            return None;
        }
        let first_time = self.applied.is_none();
        self.applied = Some(distributable);
        Some(FixedSizePlan {
            distributable,
            sizes: distribute(distributable, children),
            first_time,
        })
    }
}
