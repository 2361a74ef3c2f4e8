//! Input model: pointer kinds, the drawing gesture state machine, and the
//! buffer of samples collected for the stroke in progress.
//!
//! A gesture moves `Idle -> Pressing` on pointer-down and `Pressing ->
//! Drawing` on the first pointer update handled while pressed (the
//! pointer-down itself counts). Release or cancellation returns to `Idle`.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::point::Point;

/// Where a pointer event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    /// Touch input snaps the brush to the finger on touch-start, since
    /// there is no hovering pointer to trail behind.
    Touch,
}

/// Drawing gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No button or finger down.
    #[default]
    Idle,
    /// Pointer is down but no sample has been taken yet.
    Pressing,
    /// Samples are being collected into the active stroke.
    Drawing,
}

/// Pure transform applied to every sample before it is buffered, e.g. to
/// snap to a grid.
pub type PointerAdjust = Box<dyn Fn(Point) -> Point>;

/// Samples of the stroke currently being drawn.
#[derive(Debug, Clone, Default)]
pub struct ActiveStroke {
    points: Vec<Point>,
}

impl ActiveStroke {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample unless it repeats the previous one.
    ///
    /// Returns `true` if the sample was kept.
    pub fn push(&mut self, point: Point) -> bool {
        if self.points.last() == Some(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drain the buffer, leaving it empty.
    pub fn take(&mut self) -> Vec<Point> {
        std::mem::take(&mut self.points)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
