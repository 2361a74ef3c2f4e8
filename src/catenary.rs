//! Catenary connector between the brush and the pointer.
//!
//! The brush hangs off the pointer on a chain of fixed length. While the
//! chain is slack it sags as a catenary; once it is pulled taut (or the two
//! ends are almost vertically aligned) it is drawn as a straight segment.
//!
//! With canvas coordinates (y grows downward) the hanging curve is
//! `y = q - a * cosh((x - p) / a)`. For a horizontal span `h`, vertical
//! offset `v` and chain length `L`, the shape parameter satisfies
//! `sinh(u) / u = sqrt(L² - v²) / h` with `u = h / (2a)`, which is solved by
//! bisection.

#[cfg(test)]
#[path = "catenary_test.rs"]
mod catenary_test;

use crate::consts::CATENARY_SEGMENTS;
use crate::point::Point;
use crate::surface::Path;

/// Horizontal spans below this are treated as vertical.
const MIN_SPAN: f64 = 1e-6;

const BISECTION_STEPS: usize = 100;

/// Path of a chain of `chain_length` hanging between `from` and `to`.
#[must_use]
pub fn catenary_path(from: Point, to: Point, chain_length: f64) -> Path {
    let mut path = Path::new();
    path.move_to(from);

    let (left, right) = if from.x <= to.x { (from, to) } else { (to, from) };
    let span = right.x - left.x;
    let drop = right.y - left.y;

    if span < MIN_SPAN || from.distance_to(to) >= chain_length {
        path.line_to(to);
        return path;
    }

    let ratio = (chain_length * chain_length - drop * drop).sqrt() / span;
    let u = solve_sinh_ratio(ratio);
    let a = span / (2.0 * u);
    let p = (left.x + right.x) / 2.0 + a * (drop / (2.0 * a * u.sinh())).asinh();
    let q = left.y + a * ((left.x - p) / a).cosh();

    #[allow(clippy::cast_precision_loss)]
    for i in 1..CATENARY_SEGMENTS {
        let t = i as f64 / CATENARY_SEGMENTS as f64;
        let x = from.x + (to.x - from.x) * t;
        path.line_to(Point::new(x, q - a * ((x - p) / a).cosh()));
    }
    path.line_to(to);
    path
}

/// Solve `sinh(u) / u = ratio` for `u > 0`, given `ratio > 1`.
fn solve_sinh_ratio(ratio: f64) -> f64 {
    let f = |u: f64| u.sinh() / u - ratio;

    let mut lo = MIN_SPAN;
    let mut hi = 1.0;
    while f(hi) < 0.0 {
        hi *= 2.0;
    }
    for _ in 0..BISECTION_STEPS {
        let mid = (lo + hi) / 2.0;
        if f(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}
