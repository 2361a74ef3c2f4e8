//! Drawing of the interface layer (brush preview, pointer dot, catenary)
//! and of the background grid.

#[cfg(test)]
#[path = "interface_test.rs"]
mod interface_test;

use crate::catenary::catenary_path;
use crate::config::EngineConfig;
use crate::consts::{BRUSH_DOT_RADIUS, CATENARY_DASH, CATENARY_WIDTH, GRID_LINE_WIDTH, GRID_SIZE, POINTER_DOT_RADIUS};
use crate::lazy::LazyPointer;
use crate::point::Point;
use crate::surface::{Layer, Layers, Path, StrokeStyle};

/// Redraw the interface layer from the lazy pointer's current state.
///
/// The layer is always cleared; nothing else is drawn when `hidden`.
pub fn draw_interface<L: Layers + ?Sized>(layers: &mut L, lazy: &LazyPointer, config: &EngineConfig, hidden: bool) {
    layers.clear(Layer::Interface);
    if hidden {
        return;
    }

    let pointer = lazy.pointer_coordinates();
    let brush = lazy.brush_coordinates();

    layers.fill_circle(Layer::Interface, brush, config.brush_radius, &config.brush_color);
    layers.fill_circle(Layer::Interface, pointer, POINTER_DOT_RADIUS, &config.catenary_color);

    if lazy.is_enabled() && lazy.distance() > 0.0 {
        let path = catenary_path(brush, pointer, config.chain_length());
        let style = StrokeStyle::dashed(config.catenary_color.clone(), CATENARY_WIDTH, CATENARY_DASH);
        layers.stroke_path(Layer::Interface, &path, &style);
    }

    layers.fill_circle(Layer::Interface, brush, BRUSH_DOT_RADIUS, &config.catenary_color);
}

/// Redraw the background grid, unless the grid is hidden.
pub fn draw_grid<L: Layers + ?Sized>(layers: &mut L, config: &EngineConfig) {
    if config.hide_grid {
        return;
    }
    let (width, height) = layers.size();
    layers.clear(Layer::Grid);

    let style = StrokeStyle::solid(config.grid_color.clone(), GRID_LINE_WIDTH);

    let mut vertical = Path::new();
    let mut x = 0.0;
    while x < width {
        x += GRID_SIZE;
        vertical.move_to(Point::new(x, 0.0));
        vertical.line_to(Point::new(x, height));
    }
    layers.stroke_path(Layer::Grid, &vertical, &style);

    let mut horizontal = Path::new();
    let mut y = 0.0;
    while y < height {
        y += GRID_SIZE;
        horizontal.move_to(Point::new(0.0, y));
        horizontal.line_to(Point::new(width, y));
    }
    layers.stroke_path(Layer::Grid, &horizontal, &style);
}
