//! History reconciliation: how far do two histories agree, and what should
//! the engine do about the rest?
//!
//! The comparison walks lines from the start. A line is common when its
//! point sequence is the same allocation as the other side's, or when both
//! hold the same coordinates and the same number of points. The first line
//! that differs stops the walk; within it, the cursor records how many
//! leading points still match. Later lines are never considered, even if
//! they happen to coincide again.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use std::rc::Rc;

use crate::stroke::{History, Stroke};

/// Position in a history where two histories stop agreeing.
///
/// `line_index` counts fully common lines. When both histories still have
/// a line at `line_index`, those lines share exactly `point_index` leading
/// points; otherwise `point_index` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line_index: usize,
    pub point_index: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(line_index: usize, point_index: usize) -> Self {
        Self { line_index, point_index }
    }
}

/// What the render loop should do to bring the screen in line with a new
/// history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// The new history is empty: wipe the line layer.
    Clear,
    /// Redraw the new history from scratch, no animation.
    Instant,
    /// Keep the common prefix and animate the rest from the cursor.
    Animate(Cursor),
}

/// Longest common prefix of `old` and `new`, at line then point granularity.
#[must_use]
pub fn common_prefix(old: &History, new: &History) -> Cursor {
    let mut cursor = Cursor::default();

    for (a, b) in old.lines().iter().zip(new.lines()) {
        let shared = shared_points(a, b);
        if shared == a.len() && shared == b.len() {
            cursor.line_index += 1;
            continue;
        }
        cursor.point_index = shared;
        break;
    }

    cursor
}

/// Number of leading points two strokes have in common.
fn shared_points(a: &Stroke, b: &Stroke) -> usize {
    if Rc::ptr_eq(&a.points, &b.points) {
        return a.len();
    }
    a.points
        .iter()
        .zip(b.points.iter())
        .take_while(|(pa, pb)| pa == pb)
        .count()
}

/// Decide how to move from `old` to `new`.
///
/// Empty targets clear, targets already covered by the common prefix (pure
/// undo) and `immediate` requests redraw instantly, and everything else
/// animates forward from the divergence point.
#[must_use]
pub fn plan(old: &History, new: &History, immediate: bool) -> Plan {
    if new.is_empty() {
        return Plan::Clear;
    }
    let cursor = common_prefix(old, new);
    if cursor.line_index >= new.len() || immediate {
        Plan::Instant
    } else {
        Plan::Animate(cursor)
    }
}
