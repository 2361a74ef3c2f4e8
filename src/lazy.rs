//! Lazy pointer: a brush point that trails the raw pointer on an elastic
//! leash of fixed length.
//!
//! The pointer jumps straight to every raw input position. The brush only
//! moves once the pointer gets further away than `radius`, and then only by
//! the excess, which smooths out jitter in the sampled stroke.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

use crate::point::Point;

/// Options for [`LazyPointer::update`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOptions {
    /// Move the brush together with the pointer instead of trailing it.
    pub both: bool,
}

impl UpdateOptions {
    /// Snap both pointer and brush to the new position.
    #[must_use]
    pub fn both() -> Self {
        Self { both: true }
    }
}

#[derive(Debug, Clone)]
pub struct LazyPointer {
    pointer: Point,
    brush: Point,
    radius: f64,
    enabled: bool,
    has_moved: bool,
}

impl LazyPointer {
    /// A lazy pointer at `initial`, following with the given radius.
    #[must_use]
    pub fn new(radius: f64, initial: Point) -> Self {
        Self { pointer: initial, brush: initial, radius, enabled: true, has_moved: false }
    }

    /// Move the pointer to `point` and drag the brush along if needed.
    ///
    /// Returns `true` if anything changed.
    pub fn update(&mut self, point: Point, options: UpdateOptions) -> bool {
        self.has_moved = false;
        if self.pointer == point && !options.both {
            return false;
        }

        self.pointer = point;

        if options.both {
            self.has_moved = self.brush != point;
            self.brush = point;
            return true;
        }

        if self.enabled {
            let distance = self.pointer.distance_to(self.brush);
            if distance > self.radius {
                let angle = self.brush.angle_to(self.pointer);
                self.brush = self.brush.move_by_angle(angle, distance - self.radius);
                self.has_moved = true;
            }
        } else {
            self.brush = point;
            self.has_moved = true;
        }

        true
    }

    /// Whether the brush trails the pointer. When disabled the brush
    /// coincides with the pointer after every update.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn enable(&mut self) {
        self.enabled = true;
    }

    pub fn disable(&mut self) {
        self.enabled = false;
    }

    /// Change the follow radius without moving either point.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn pointer_coordinates(&self) -> Point {
        self.pointer
    }

    #[must_use]
    pub fn brush_coordinates(&self) -> Point {
        self.brush
    }

    /// Current distance between pointer and brush.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.pointer.distance_to(self.brush)
    }

    /// Whether the brush moved during the last update.
    #[must_use]
    pub fn brush_has_moved(&self) -> bool {
        self.has_moved
    }
}
