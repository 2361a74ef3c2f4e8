//! Animated reveal of a history, a bounded number of points per frame.
//!
//! An [`AnimationState`] chases a target history from a [`Cursor`]. Every
//! frame converts the time since the previous frame into a whole number of
//! points (`floor(elapsed * speed)`), drops the fractional remainder, and
//! spends that budget revealing points. Finished lines are painted onto the
//! line layer; an unfinished line is shown as a prefix on the points layer.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

use tracing::{debug, trace};

use crate::consts::ANIMATION_PRIME_FACTOR;
use crate::curve::{render_all, render_stroke};
use crate::reconcile::Cursor;
use crate::stroke::History;
use crate::surface::{Layer, Layers};

#[derive(Debug, Clone)]
pub struct AnimationState {
    target: History,
    cursor: Cursor,
    last_tick: f64,
}

impl AnimationState {
    /// Begin revealing `target` from `cursor` at time `now` (milliseconds).
    ///
    /// The clock is primed slightly more than one point into the past so
    /// the first frame always reveals something.
    #[must_use]
    pub fn start(target: History, cursor: Cursor, now: f64, speed: f64) -> Self {
        let last_tick = if speed > 0.0 { now - ANIMATION_PRIME_FACTOR / speed } else { now };
        debug!(
            revision = target.revision(),
            line_index = cursor.line_index,
            point_index = cursor.point_index,
            lines = target.len(),
            "animation started"
        );
        Self { target, cursor, last_tick }
    }

    #[must_use]
    pub fn target(&self) -> &History {
        &self.target
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Time of the last processed frame.
    #[must_use]
    pub fn last_tick(&self) -> f64 {
        self.last_tick
    }

    /// Advance one frame. Returns `None` once the whole target is on the
    /// line layer.
    #[must_use]
    pub fn step<L: Layers + ?Sized>(mut self, layers: &mut L, now: f64, speed: f64) -> Option<Self> {
        if self.cursor.line_index >= self.target.len() {
            return None;
        }

        let mut budget = points_for(now - self.last_tick, speed);
        self.last_tick = now;

        while budget > 0 {
            layers.clear(Layer::Points);

            let Some(line) = self.target.get(self.cursor.line_index) else {
                return None;
            };
            let revealed = self.cursor.point_index + budget;

            if revealed >= line.len() {
                render_stroke(layers, Layer::Lines, line, None);
                budget = revealed - line.len();
                self.cursor = Cursor::new(self.cursor.line_index + 1, 0);

                if self.cursor.line_index >= self.target.len() {
                    debug!(revision = self.target.revision(), "animation finished");
                    return None;
                }
                continue;
            }

            render_stroke(layers, Layer::Points, line, Some(revealed));
            self.cursor.point_index = revealed;
            budget = 0;
        }

        trace!(
            line_index = self.cursor.line_index,
            point_index = self.cursor.point_index,
            "animation frame"
        );
        Some(self)
    }

    /// Paint everything revealed so far onto freshly cleared line and
    /// points layers, e.g. after a resize wiped them.
    pub fn repaint<L: Layers + ?Sized>(&self, layers: &mut L) {
        let finished = self.cursor.line_index.min(self.target.len());
        layers.clear(Layer::Lines);
        render_all(layers, Layer::Lines, &self.target.lines()[..finished]);

        layers.clear(Layer::Points);
        if let Some(line) = self.target.get(self.cursor.line_index) {
            render_stroke(layers, Layer::Points, line, Some(self.cursor.point_index));
        }
    }

    /// The history exactly as drawn so far: every finished line plus the
    /// revealed prefix of the current one.
    #[must_use]
    pub fn revealed_history(&self) -> History {
        History::prefix_of(&self.target, self.cursor.line_index, self.cursor.point_index)
    }
}

/// Whole points to reveal for `elapsed` milliseconds; fractions are dropped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn points_for(elapsed: f64, speed: f64) -> usize {
    let budget = (elapsed * speed).floor();
    if budget.is_finite() && budget > 0.0 { budget as usize } else { 0 }
}
