//! Browser binding: four stacked `<canvas>` elements behind [`Layers`], and
//! the [`Engine`] that owns them.
//!
//! This module is the only place that touches
//! [`web_sys::CanvasRenderingContext2d`]. Canvas calls that can fail are
//! propagated as `Result<(), JsValue>` internally and reported through
//! `tracing` at the [`Layers`] boundary, since a failed paint must not stop
//! the frame loop.

use std::f64::consts::TAU;

use js_sys::Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::EngineConfig;
use crate::engine::{Action, EngineCore};
use crate::error::EngineError;
use crate::input::{PointerAdjust, PointerKind};
use crate::point::Point;
use crate::stroke::{History, Stroke};
use crate::surface::{Layer, Layers, Path, PathCmd, StrokeStyle};

struct CanvasLayer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasLayer {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }
}

/// The grid, lines, points and interface canvases, bottom to top.
pub struct WebLayers {
    grid: CanvasLayer,
    lines: CanvasLayer,
    points: CanvasLayer,
    interface: CanvasLayer,
}

impl WebLayers {
    /// Bind to four canvases of equal size and stack them by
    /// [`Layer::z_index`]. The host positions them over each other.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any canvas cannot provide a 2D context or reject
    /// its style.
    pub fn new(
        grid: HtmlCanvasElement,
        lines: HtmlCanvasElement,
        points: HtmlCanvasElement,
        interface: HtmlCanvasElement,
    ) -> Result<Self, JsValue> {
        let layers = Self {
            grid: CanvasLayer::new(grid)?,
            lines: CanvasLayer::new(lines)?,
            points: CanvasLayer::new(points)?,
            interface: CanvasLayer::new(interface)?,
        };
        for layer in Layer::ALL {
            layers.canvas(layer).style().set_property("z-index", &layer.z_index().to_string())?;
        }
        Ok(layers)
    }

    fn layer(&self, layer: Layer) -> &CanvasLayer {
        match layer {
            Layer::Grid => &self.grid,
            Layer::Lines => &self.lines,
            Layer::Points => &self.points,
            Layer::Interface => &self.interface,
        }
    }

    /// The canvas element backing `layer`, e.g. for exporting the drawing.
    #[must_use]
    pub fn canvas(&self, layer: Layer) -> &HtmlCanvasElement {
        &self.layer(layer).canvas
    }
}

fn report(op: &str, layer: Layer, result: Result<(), JsValue>) {
    if let Err(err) = result {
        tracing::warn!(?layer, op, error = ?err, "canvas call failed");
    }
}

fn trace_path(ctx: &CanvasRenderingContext2d, path: &Path) {
    ctx.begin_path();
    for cmd in &path.cmds {
        match *cmd {
            PathCmd::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathCmd::LineTo(p) => ctx.line_to(p.x, p.y),
            PathCmd::QuadTo { ctrl, to } => ctx.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y),
        }
    }
}

fn stroke_on(ctx: &CanvasRenderingContext2d, path: &Path, style: &StrokeStyle) -> Result<(), JsValue> {
    ctx.set_line_join("round");
    ctx.set_line_cap("round");
    ctx.set_stroke_style_str(&style.color);
    ctx.set_line_width(style.width);

    let dash = Array::new();
    if let Some([on, off]) = style.dash {
        dash.push(&JsValue::from_f64(on));
        dash.push(&JsValue::from_f64(off));
    }
    ctx.set_line_dash(&dash)?;

    trace_path(ctx, path);
    ctx.stroke();
    Ok(())
}

fn fill_circle_on(ctx: &CanvasRenderingContext2d, center: Point, radius: f64, color: &str) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.set_fill_style_str(color);
    ctx.arc(center.x, center.y, radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

impl Layers for WebLayers {
    fn clear(&mut self, layer: Layer) {
        let target = self.layer(layer);
        let (w, h) = (f64::from(target.canvas.width()), f64::from(target.canvas.height()));
        target.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn stroke_path(&mut self, layer: Layer, path: &Path, style: &StrokeStyle) {
        report("stroke", layer, stroke_on(&self.layer(layer).ctx, path, style));
    }

    fn fill_circle(&mut self, layer: Layer, center: Point, radius: f64, color: &str) {
        report("fill_circle", layer, fill_circle_on(&self.layer(layer).ctx, center, radius, color));
    }

    fn composite(&mut self, from: Layer, onto: Layer) {
        let source = &self.layer(from).canvas;
        let (w, h) = (f64::from(source.width()), f64::from(source.height()));
        let result = self
            .layer(onto)
            .ctx
            .draw_image_with_html_canvas_element_and_dw_and_dh(source, 0.0, 0.0, w, h);
        report("composite", onto, result);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn resize(&mut self, width: f64, height: f64) {
        let (w, h) = (width.max(0.0).round() as u32, height.max(0.0).round() as u32);
        for layer in Layer::ALL {
            let canvas = &self.layer(layer).canvas;
            canvas.set_width(w);
            canvas.set_height(h);
        }
    }

    fn size(&self) -> (f64, f64) {
        (f64::from(self.interface.canvas.width()), f64::from(self.interface.canvas.height()))
    }
}

/// The full drawing surface: [`EngineCore`] bound to browser canvases.
///
/// Frame timestamps come from `Date.now()`; the host calls [`Engine::frame`]
/// from its `requestAnimationFrame` callback.
pub struct Engine {
    pub core: EngineCore<WebLayers>,
}

impl Engine {
    #[must_use]
    pub fn new(layers: WebLayers, config: EngineConfig) -> Self {
        Self { core: EngineCore::new(layers, config) }
    }

    /// Build from bound canvases and a JSON props object.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] for malformed props.
    pub fn from_json(layers: WebLayers, props: &str) -> Result<Self, EngineError> {
        let config = EngineConfig::from_json(props)?;
        Ok(Self::new(layers, config))
    }

    // --- Delegated host inputs ---

    pub fn set_config(&mut self, config: EngineConfig) {
        self.core.set_config(config);
    }

    /// Replace the history.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyLine`] if a line has no points.
    pub fn set_history(&mut self, history: History) -> Result<(), EngineError> {
        self.core.set_history(history)
    }

    /// Replace the history from the host's JSON line list.
    ///
    /// Parsing always yields a new history identity, so the line layer is
    /// redrawn even when the content matches. Hosts echoing a commit should
    /// pass the [`History`] from [`Action::HistoryChanged`] to
    /// [`Engine::set_history`] instead.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] for malformed JSON and
    /// [`EngineError::EmptyLine`] for a line without points.
    pub fn set_history_json(&mut self, json: &str) -> Result<(), EngineError> {
        let lines: Vec<Stroke> = serde_json::from_str(json)?;
        self.core.set_history(History::new(lines))
    }

    pub fn set_pointer_adjust(&mut self, adjust: Option<PointerAdjust>) {
        self.core.set_pointer_adjust(adjust);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.core.resize(width, height, js_sys::Date::now());
    }

    // --- Delegated pointer input ---

    pub fn on_draw_start(&mut self, point: Point, kind: PointerKind) -> Vec<Action> {
        self.core.on_draw_start(point, kind)
    }

    pub fn on_draw_move(&mut self, point: Point) -> Vec<Action> {
        self.core.on_draw_move(point)
    }

    pub fn on_draw_end(&mut self, point: Point) -> Vec<Action> {
        self.core.on_draw_end(point)
    }

    pub fn on_draw_cancel(&mut self) -> Vec<Action> {
        self.core.on_draw_cancel()
    }

    pub fn on_pointer_enter(&mut self) {
        self.core.on_pointer_enter();
    }

    pub fn on_pointer_leave(&mut self, point: Point) -> Vec<Action> {
        self.core.on_pointer_leave(point)
    }

    // --- Frames ---

    /// Run one frame stamped with the current time.
    pub fn frame(&mut self) {
        self.core.tick(js_sys::Date::now());
    }

    /// Repaint everything now.
    pub fn redraw(&mut self) {
        self.core.redraw(js_sys::Date::now());
    }

    // --- Queries ---

    #[must_use]
    pub fn history(&self) -> &History {
        self.core.history()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.core.is_animating()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.core.is_drawing()
    }

    /// Serialize a history for the host's change callback.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] if serialization fails.
    pub fn history_json(history: &History) -> Result<String, EngineError> {
        Ok(serde_json::to_string(history.lines())?)
    }
}
