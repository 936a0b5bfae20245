#![forbid(unsafe_code)]

//! Child reconciliation.
//!
//! [`plan`] compares the current child sequence with the desired one and
//! yields the steps that turn the first into the second. It walks the new
//! sequence with a cursor into the old one:
//!
//! - when no old child is pending, the cursor skips old children that were
//!   already handled and stops at the first one still wanted; unwanted ones
//!   seen on the way are scheduled for removal
//! - old sequence exhausted: the new child is appended
//! - new child equals the pending old child: matched in place
//! - new child is elsewhere in the old sequence: moved before the pending one
//! - otherwise: inserted before the pending one
//!
//! Removals come last, so every placement step refers to children that are
//! still present. Matching is by identity (`Eq`), never by contents.

use std::collections::HashSet;
use std::hash::Hash;

/// One reconciliation step.
///
/// `index` is the position of the child in the new sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<K> {
    /// The child is already in place.
    Matched { index: usize },
    /// Move an existing child to just before `anchor`.
    MoveBefore { index: usize, anchor: K },
    /// Insert a new child just before `anchor`.
    InsertBefore { index: usize, anchor: K },
    /// Append a new child at the end.
    Append { index: usize },
    /// Remove a child that is no longer wanted.
    Remove(K),
}

impl<K> Step<K> {
    /// Position in the new sequence, `None` for removals.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Matched { index }
            | Self::MoveBefore { index, .. }
            | Self::InsertBefore { index, .. }
            | Self::Append { index } => Some(*index),
            Self::Remove(_) => None,
        }
    }
}

/// Plan the steps that turn `old` into `new`.
///
/// Both sequences are expected to hold distinct children. A child repeated
/// in `new` gets a step for its first occurrence only.
pub fn plan<K>(old: &[K], new: &[K]) -> Vec<Step<K>>
where
    K: Eq + Hash + Clone,
{
    let wanted: HashSet<&K> = new.iter().collect();
    let present: HashSet<&K> = old.iter().collect();
    let mut handled: HashSet<&K> = HashSet::with_capacity(new.len());
    let mut removals = Vec::new();
    let mut steps = Vec::with_capacity(new.len());

    let mut cursor = old.iter();
    let mut pending: Option<&K> = None;

    for (index, child) in new.iter().enumerate() {
        if handled.contains(child) {
            continue;
        }
        if pending.is_none() {
            for candidate in cursor.by_ref() {
                if handled.contains(candidate) {
                    continue;
                }
                if wanted.contains(candidate) {
                    pending = Some(candidate);
                    break;
                }
                removals.push(candidate.clone());
            }
        }

        let step = match pending {
            None => Step::Append { index },
            Some(old_child) if old_child == child => {
                pending = None;
                Step::Matched { index }
            }
            Some(old_child) if present.contains(child) => Step::MoveBefore {
                index,
                anchor: old_child.clone(),
            },
            Some(old_child) => Step::InsertBefore {
                index,
                anchor: old_child.clone(),
            },
        };
        steps.push(step);
        handled.insert(child);
    }

    removals.extend(
        cursor
            .filter(|c| !handled.contains(c) && !wanted.contains(c))
            .cloned(),
    );
    steps.extend(removals.into_iter().map(Step::Remove));
    steps
}
