//! Curve renderer: turns sampled stroke points into a smooth path.
//!
//! Each consecutive pair of points contributes a quadratic segment whose
//! control point is the earlier sample and whose end point is the pair's
//! midpoint. The path then finishes with a straight segment to the newest
//! sample, because no later point exists yet to place another midpoint.
//! The result only depends on points already received, so a live stroke
//! never changes shape behind the pen.

#[cfg(test)]
#[path = "curve_test.rs"]
mod curve_test;

use crate::point::Point;
use crate::stroke::Stroke;
use crate::surface::{Layer, Layers, Path, StrokeStyle};

/// Build the smoothed path through `points`.
///
/// `up_to` limits the path to the first `min(up_to, points.len())` points.
/// Returns `None` when fewer than two points remain after the limit; a
/// single point strokes nothing.
#[must_use]
pub fn stroke_path(points: &[Point], up_to: Option<usize>) -> Option<Path> {
    let len = up_to.map_or(points.len(), |n| n.min(points.len()));
    if len < 2 {
        return None;
    }
    let visible = &points[..len];
    let (&first, &last) = (visible.first()?, visible.last()?);

    let mut path = Path::new();
    path.move_to(first);
    for pair in visible.windows(2) {
        path.quad_to(pair[0], pair[0].midpoint(pair[1]));
    }
    path.line_to(last);
    Some(path)
}

/// Paint style for a committed stroke: round caps, width twice the radius.
#[must_use]
pub fn stroke_style(stroke: &Stroke) -> StrokeStyle {
    StrokeStyle::solid(stroke.brush_color.clone(), stroke.brush_radius * 2.0)
}

/// Draw `stroke` onto `layer`, optionally only its first `up_to` points.
///
/// Draws nothing for strokes with fewer than two points.
pub fn render_stroke<L: Layers + ?Sized>(layers: &mut L, layer: Layer, stroke: &Stroke, up_to: Option<usize>) {
    render_points(layers, layer, &stroke.points, &stroke_style(stroke), up_to);
}

/// Draw the smoothed path through raw `points` with an explicit style.
pub fn render_points<L: Layers + ?Sized>(
    layers: &mut L,
    layer: Layer,
    points: &[Point],
    style: &StrokeStyle,
    up_to: Option<usize>,
) {
    if let Some(path) = stroke_path(points, up_to) {
        layers.stroke_path(layer, &path, style);
    }
}

/// Draw every stroke of `lines` onto `layer` in order.
pub fn render_all<L: Layers + ?Sized>(layers: &mut L, layer: Layer, lines: &[Stroke]) {
    for stroke in lines {
        render_stroke(layers, layer, stroke, None);
    }
}
