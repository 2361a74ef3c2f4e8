//! Strokes and stroke histories.
//!
//! A [`Stroke`] is one committed freehand gesture. A [`History`] is the
//! ordered list of strokes that makes up a drawing; insertion order is draw
//! order, so later strokes paint over earlier ones.
//!
//! Histories are compared by revision rather than by content. Every
//! constructor mints a fresh revision from a process-wide counter while
//! `Clone` keeps it, so "the same history" means "a clone of the value the
//! host handed over", which is what the render loop's dirty check needs.

#[cfg(test)]
#[path = "stroke_test.rs"]
mod stroke_test;

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::point::Point;

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// One committed freehand gesture.
///
/// The point sequence is shared so clones are cheap and the reconciler can
/// recognise untouched lines by pointer identity before comparing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub points: Rc<[Point]>,
    pub brush_color: String,
    pub brush_radius: f64,
}

impl Stroke {
    #[must_use]
    pub fn new(points: impl Into<Rc<[Point]>>, brush_color: impl Into<String>, brush_radius: f64) -> Self {
        Self { points: points.into(), brush_color: brush_color.into(), brush_radius }
    }

    /// A copy of this stroke holding only its first `len` points.
    #[must_use]
    pub fn truncated(&self, len: usize) -> Self {
        let len = len.min(self.points.len());
        Self {
            points: self.points[..len].into(),
            brush_color: self.brush_color.clone(),
            brush_radius: self.brush_radius,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// An ordered, immutable sequence of strokes tagged with a revision.
#[derive(Debug, Clone)]
pub struct History {
    revision: u64,
    lines: Rc<[Stroke]>,
}

impl Default for History {
    fn default() -> Self {
        Self::empty()
    }
}

impl History {
    #[must_use]
    pub fn new(lines: impl Into<Rc<[Stroke]>>) -> Self {
        Self { revision: next_revision(), lines: lines.into() }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// A new history with `stroke` appended on top.
    #[must_use]
    pub fn with_stroke(&self, stroke: Stroke) -> Self {
        let mut lines = self.lines.to_vec();
        lines.push(stroke);
        Self::new(lines)
    }

    /// The first `line_count` lines of `source`, followed by the first
    /// `point_count` points of the next line when `point_count > 0`.
    #[must_use]
    pub fn prefix_of(source: &History, line_count: usize, point_count: usize) -> Self {
        let line_count = line_count.min(source.len());
        let mut lines = source.lines[..line_count].to_vec();
        if point_count > 0 {
            if let Some(partial) = source.lines.get(line_count) {
                lines.push(partial.truncated(point_count));
            }
        }
        Self::new(lines)
    }

    /// Revision tag; equal only for clones of the same constructed value.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Identity comparison: true when both are clones of one value.
    #[must_use]
    pub fn is_same(&self, other: &History) -> bool {
        self.revision == other.revision
    }

    #[must_use]
    pub fn lines(&self) -> &[Stroke] {
        &self.lines
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Stroke> {
        self.lines.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of points across all lines.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.lines.iter().map(Stroke::len).sum()
    }

    /// Reject histories containing a line with no points.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyLine`] naming the first offending line.
    pub fn validate(&self) -> Result<(), EngineError> {
        match self.lines.iter().position(Stroke::is_empty) {
            Some(index) => Err(EngineError::EmptyLine { index }),
            None => Ok(()),
        }
    }
}

impl From<Vec<Stroke>> for History {
    fn from(lines: Vec<Stroke>) -> Self {
        Self::new(lines)
    }
}
