//! Named drawable layers.
//!
//! The engine paints onto four stacked raster layers and never touches a
//! concrete drawing API. Anything that implements [`Layers`] can host it:
//! [`crate::web::WebLayers`] in the browser, [`crate::recording::RecordingLayers`]
//! in tests and headless runs.

use crate::point::Point;

/// The stacked layers, listed bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Background grid (and any host-drawn background image).
    Grid,
    /// Committed strokes.
    Lines,
    /// The in-progress stroke, or the partially revealed line while animating.
    Points,
    /// Brush preview, pointer dot and catenary connector.
    Interface,
}

impl Layer {
    /// All layers in z-order, bottom first.
    pub const ALL: [Layer; 4] = [Layer::Grid, Layer::Lines, Layer::Points, Layer::Interface];

    /// Stacking index; higher draws on top.
    #[must_use]
    pub fn z_index(self) -> u8 {
        match self {
            Self::Grid => 10,
            Self::Lines => 11,
            Self::Points => 12,
            Self::Interface => 15,
        }
    }
}

/// One path-building command, mirroring the 2D canvas path API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { ctrl: Point, to: Point },
}

/// A sequence of path commands to be stroked as one path.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub cmds: Vec<PathCmd>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::MoveTo(p));
    }

    pub fn line_to(&mut self, p: Point) {
        self.cmds.push(PathCmd::LineTo(p));
    }

    pub fn quad_to(&mut self, ctrl: Point, to: Point) {
        self.cmds.push(PathCmd::QuadTo { ctrl, to });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// End point of the last command, if any.
    #[must_use]
    pub fn end(&self) -> Option<Point> {
        self.cmds.last().map(|cmd| match *cmd {
            PathCmd::MoveTo(p) | PathCmd::LineTo(p) | PathCmd::QuadTo { to: p, .. } => p,
        })
    }
}

/// Stroke paint settings. Caps and joins are always round.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    /// Dash pattern as (on, off) lengths; `None` for a solid line.
    pub dash: Option<[f64; 2]>,
}

impl StrokeStyle {
    #[must_use]
    pub fn solid(color: impl Into<String>, width: f64) -> Self {
        Self { color: color.into(), width, dash: None }
    }

    #[must_use]
    pub fn dashed(color: impl Into<String>, width: f64, dash: [f64; 2]) -> Self {
        Self { color: color.into(), width, dash: Some(dash) }
    }
}

/// A stack of named raster layers sharing one size.
pub trait Layers {
    /// Erase every pixel of `layer`.
    fn clear(&mut self, layer: Layer);

    /// Stroke `path` onto `layer`.
    fn stroke_path(&mut self, layer: Layer, path: &Path, style: &StrokeStyle);

    /// Fill a circle onto `layer`.
    fn fill_circle(&mut self, layer: Layer, center: Point, radius: f64, color: &str);

    /// Paint the current contents of `from` over `onto`.
    fn composite(&mut self, from: Layer, onto: Layer);

    /// Resize every layer. Raster layers lose their contents.
    fn resize(&mut self, width: f64, height: f64);

    /// Current (width, height) in pixels.
    fn size(&self) -> (f64, f64);
}
