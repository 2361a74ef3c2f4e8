//! The drawing engine: pointer handling, stroke commits, and the per-frame
//! render loop that keeps the layers in sync with the host's history.
//!
//! [`EngineCore`] holds all state and logic and is generic over [`Layers`],
//! so it runs headless against [`crate::recording::RecordingLayers`] in
//! tests. [`crate::web::Engine`] wraps it around real canvases.
//!
//! The host drives the engine with two kinds of calls, always from one
//! thread: pointer handlers (`on_draw_*`, `on_pointer_*`) and frame ticks
//! ([`EngineCore::tick`]). Each tick:
//!
//! 1. redraws the interface layer if the pointer moved or settings changed;
//! 2. if an animation is running, advances it (or, if the host replaced
//!    the history it was chasing, stops it where it is) and ends the frame;
//!    a forced frame first repaints everything revealed so far;
//! 3. otherwise redraws the stroke in progress and reconciles the host's
//!    history against the committed one if its revision changed.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;

use crate::animation::AnimationState;
use crate::config::EngineConfig;
use crate::curve::{render_all, render_points, render_stroke};
use crate::error::EngineError;
use crate::input::{ActiveStroke, Gesture, PointerAdjust, PointerKind};
use crate::interface::{draw_grid, draw_interface};
use crate::lazy::{LazyPointer, UpdateOptions};
use crate::point::Point;
use crate::reconcile::{Plan, plan};
use crate::stroke::{History, Stroke};
use crate::surface::{Layer, Layers, StrokeStyle};

/// Notifications returned from input handlers for the host to process.
#[derive(Debug, Clone)]
pub enum Action {
    /// A stroke was committed; carries the full updated history. Handing
    /// this value back to [`EngineCore::set_history`] keeps its identity, so
    /// the echo costs no redraw.
    HistoryChanged(History),
}

/// Core engine state; everything except the concrete drawing surfaces.
pub struct EngineCore<L: Layers> {
    layers: L,
    config: EngineConfig,
    lazy: LazyPointer,
    gesture: Gesture,
    active: ActiveStroke,
    /// What the line layer shows (or, while animating, is converging to).
    history: History,
    /// Last history supplied by the host; `None` until the host takes control.
    external: Option<History>,
    animation: Option<AnimationState>,
    adjust: Option<PointerAdjust>,
    pointer_moved: bool,
    values_changed: bool,
    pointer_outside: bool,
}

impl<L: Layers> EngineCore<L> {
    /// Create an engine on `layers`, with the lazy pointer resting at the
    /// centre of the surface and the grid drawn.
    #[must_use]
    pub fn new(mut layers: L, config: EngineConfig) -> Self {
        let (width, height) = layers.size();
        let center = Point::new(width / 2.0, height / 2.0);
        let chain = config.chain_length();

        let mut lazy = LazyPointer::new(chain, center);
        set_follow(&mut lazy, chain);
        lazy.update(Point::new(center.x - chain / 4.0, center.y), UpdateOptions::both());
        lazy.update(Point::new(center.x + chain / 4.0, center.y), UpdateOptions::default());

        draw_grid(&mut layers, &config);

        Self {
            layers,
            config,
            lazy,
            gesture: Gesture::Idle,
            active: ActiveStroke::new(),
            history: History::empty(),
            external: None,
            animation: None,
            adjust: None,
            pointer_moved: true,
            values_changed: true,
            pointer_outside: false,
        }
    }

    // --- Host inputs ---

    /// Replace the configuration. Strokes already committed keep their style.
    pub fn set_config(&mut self, config: EngineConfig) {
        if config == self.config {
            return;
        }
        if config.chain_length() != self.config.chain_length() {
            self.lazy.set_radius(config.chain_length());
            set_follow(&mut self.lazy, config.chain_length());
        }
        let grid_changed = config.hide_grid != self.config.hide_grid || config.grid_color != self.config.grid_color;
        self.config = config;

        if grid_changed {
            self.layers.clear(Layer::Grid);
            draw_grid(&mut self.layers, &self.config);
        }
        self.values_changed = true;
    }

    /// Supply the authoritative history. Takes effect on the next tick.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyLine`] if any line has no points; the
    /// history is not adopted in that case.
    pub fn set_history(&mut self, history: History) -> Result<(), EngineError> {
        if self.external.as_ref().is_some_and(|current| current.is_same(&history)) {
            return Ok(());
        }
        history.validate()?;
        self.external = Some(history);
        Ok(())
    }

    /// Install (or remove) a transform applied to every sampled point.
    pub fn set_pointer_adjust(&mut self, adjust: Option<PointerAdjust>) {
        self.adjust = adjust;
    }

    /// Resize every layer and redraw synchronously.
    pub fn resize(&mut self, width: f64, height: f64, now: f64) {
        self.layers.resize(width, height);
        draw_grid(&mut self.layers, &self.config);
        self.frame(now, true);
    }

    // --- Pointer input ---

    /// Pointer (or finger) went down at `point`.
    pub fn on_draw_start(&mut self, point: Point, kind: PointerKind) -> Vec<Action> {
        if self.config.disabled || self.animation.is_some() {
            return Vec::new();
        }
        self.gesture = Gesture::Pressing;
        if kind == PointerKind::Touch {
            self.lazy.update(point, UpdateOptions::both());
        }
        self.handle_pointer_move(point);
        Vec::new()
    }

    /// Pointer moved to `point`, pressed or not.
    pub fn on_draw_move(&mut self, point: Point) -> Vec<Action> {
        self.handle_pointer_move(point);
        Vec::new()
    }

    /// Pointer was released at `point`: commit the stroke if it has at
    /// least two samples.
    pub fn on_draw_end(&mut self, point: Point) -> Vec<Action> {
        if self.animation.is_some() {
            return Vec::new();
        }
        self.handle_pointer_move(point);
        self.finish_stroke()
    }

    /// The gesture was cut short (e.g. touch cancel): commit what was drawn
    /// so far, as a release would.
    pub fn on_draw_cancel(&mut self) -> Vec<Action> {
        if self.animation.is_some() {
            return Vec::new();
        }
        self.finish_stroke()
    }

    /// Pointer entered the surface: show the interface again.
    pub fn on_pointer_enter(&mut self) {
        self.pointer_outside = false;
        self.values_changed = true;
    }

    /// Pointer left the surface at `point`: hide the interface and, if a
    /// stroke is in progress, end it there.
    pub fn on_pointer_leave(&mut self, point: Point) -> Vec<Action> {
        self.pointer_outside = true;
        self.values_changed = true;
        if self.gesture == Gesture::Idle {
            return Vec::new();
        }
        self.on_draw_end(point)
    }

    fn finish_stroke(&mut self) -> Vec<Action> {
        if self.gesture == Gesture::Idle {
            return Vec::new();
        }
        self.gesture = Gesture::Idle;

        let points = self.active.take();
        if points.len() < 2 {
            debug!(samples = points.len(), "gesture too short; discarded");
            self.layers.clear(Layer::Points);
            return Vec::new();
        }

        let stroke = Stroke::new(points, self.config.brush_color.clone(), self.config.brush_radius);

        self.layers.clear(Layer::Points);
        render_stroke(&mut self.layers, Layer::Points, &stroke, None);
        self.layers.composite(Layer::Points, Layer::Lines);
        self.layers.clear(Layer::Points);

        self.history = self.history.with_stroke(stroke);
        debug!(lines = self.history.len(), revision = self.history.revision(), "stroke committed");
        vec![Action::HistoryChanged(self.history.clone())]
    }

    fn handle_pointer_move(&mut self, point: Point) {
        if self.config.disabled || self.animation.is_some() {
            return;
        }

        self.lazy.update(point, UpdateOptions::default());

        match self.gesture {
            Gesture::Idle => {}
            Gesture::Pressing => {
                self.gesture = Gesture::Drawing;
                self.sample();
            }
            Gesture::Drawing => {
                if self.lazy.brush_has_moved() {
                    self.sample();
                }
            }
        }

        self.pointer_moved = true;
    }

    fn sample(&mut self) {
        let brush = self.lazy.brush_coordinates();
        let point = match &self.adjust {
            Some(adjust) => adjust(brush),
            None => brush,
        };
        self.active.push(point);
    }

    // --- Frames ---

    /// Run one frame at time `now` (milliseconds, any monotonic origin).
    pub fn tick(&mut self, now: f64) {
        self.frame(now, false);
    }

    /// Run a frame that repaints every layer regardless of dirty state.
    pub fn redraw(&mut self, now: f64) {
        self.frame(now, true);
    }

    fn frame(&mut self, now: f64, force: bool) {
        if force || self.pointer_moved || self.values_changed {
            let hidden = self.config.hide_interface || self.pointer_outside;
            draw_interface(&mut self.layers, &self.lazy, &self.config, hidden);
            self.pointer_moved = false;
            self.values_changed = false;
        }

        if let Some(animation) = self.animation.take() {
            if force {
                animation.repaint(&mut self.layers);
            }
            self.advance_animation(animation, now);
            return;
        }

        if force || self.gesture == Gesture::Drawing {
            self.layers.clear(Layer::Points);
            let style = StrokeStyle::solid(self.config.brush_color.clone(), self.config.brush_radius * 2.0);
            render_points(&mut self.layers, Layer::Points, self.active.points(), &style, None);
        }

        let changed = self.external.as_ref().filter(|h| !h.is_same(&self.history)).cloned();
        let redrawn = changed.is_some();
        if let Some(external) = changed {
            self.reconcile(external, now);
        }

        if force && !redrawn {
            self.layers.clear(Layer::Lines);
            render_all(&mut self.layers, Layer::Lines, self.history.lines());
        }
    }

    fn advance_animation(&mut self, animation: AnimationState, now: f64) {
        let superseded = self.external.as_ref().is_some_and(|h| !h.is_same(animation.target()));
        if superseded {
            // Keep exactly what has been revealed; the partial line on the
            // points layer becomes part of the committed drawing.
            self.layers.composite(Layer::Points, Layer::Lines);
            self.layers.clear(Layer::Points);
            self.history = animation.revealed_history();
            let cursor = animation.cursor();
            debug!(
                line_index = cursor.line_index,
                point_index = cursor.point_index,
                "animation preempted by new history"
            );
            return;
        }
        self.animation = animation.step(&mut self.layers, now, self.config.animation_speed);
    }

    fn reconcile(&mut self, target: History, now: f64) {
        match plan(&self.history, &target, self.config.immediate_draw) {
            Plan::Clear => {
                debug!(revision = target.revision(), "history cleared");
                self.layers.clear(Layer::Lines);
            }
            Plan::Instant => {
                debug!(
                    revision = target.revision(),
                    lines = target.len(),
                    points = target.point_count(),
                    "history redrawn"
                );
                self.layers.clear(Layer::Lines);
                render_all(&mut self.layers, Layer::Lines, target.lines());
            }
            Plan::Animate(cursor) => {
                self.gesture = Gesture::Idle;
                self.active.clear();
                self.layers.clear(Layer::Points);

                // Only the common prefix may stay on the line layer.
                if self.history.len() > cursor.line_index {
                    self.layers.clear(Layer::Lines);
                    render_all(&mut self.layers, Layer::Lines, &target.lines()[..cursor.line_index]);
                }

                let animation = AnimationState::start(target.clone(), cursor, now, self.config.animation_speed);
                self.animation = animation.step(&mut self.layers, now, self.config.animation_speed);
            }
        }
        self.history = target;
    }

    // --- Queries ---

    /// The committed history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn animation(&self) -> Option<&AnimationState> {
        self.animation.as_ref()
    }

    #[must_use]
    pub fn is_drawing(&self) -> bool {
        self.gesture == Gesture::Drawing
    }

    /// Samples of the stroke in progress.
    #[must_use]
    pub fn active_points(&self) -> &[Point] {
        self.active.points()
    }

    #[must_use]
    pub fn lazy(&self) -> &LazyPointer {
        &self.lazy
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn layers(&self) -> &L {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut L {
        &mut self.layers
    }
}

/// A leash without length has no slack to trail or draw.
fn set_follow(lazy: &mut LazyPointer, chain: f64) {
    if chain > 0.0 {
        lazy.enable();
    } else {
        lazy.disable();
    }
}
