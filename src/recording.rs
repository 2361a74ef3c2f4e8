//! In-memory [`Layers`] implementation that records draw calls.
//!
//! Each layer keeps the list of operations painted onto it since its last
//! clear, which is what a raster layer would show. Compositing copies the
//! source's operations onto the destination. A per-layer mutation counter
//! lets tests assert that an idle frame touched nothing.

#[cfg(test)]
#[path = "recording_test.rs"]
mod recording_test;

use std::collections::HashMap;

use crate::point::Point;
use crate::surface::{Layer, Layers, Path, StrokeStyle};

/// A recorded paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Stroke { path: Path, style: StrokeStyle },
    FillCircle { center: Point, radius: f64, color: String },
}

#[derive(Debug, Default)]
struct LayerRecord {
    ops: Vec<DrawOp>,
    mutations: u64,
}

#[derive(Debug)]
pub struct RecordingLayers {
    width: f64,
    height: f64,
    layers: HashMap<Layer, LayerRecord>,
}

impl RecordingLayers {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let layers = Layer::ALL.into_iter().map(|l| (l, LayerRecord::default())).collect();
        Self { width, height, layers }
    }

    /// Operations currently visible on `layer`.
    #[must_use]
    pub fn ops(&self, layer: Layer) -> &[DrawOp] {
        self.layers.get(&layer).map(|r| r.ops.as_slice()).unwrap_or_default()
    }

    /// Stroked paths currently visible on `layer`, bottom first.
    #[must_use]
    pub fn strokes(&self, layer: Layer) -> Vec<&Path> {
        self.ops(layer)
            .iter()
            .filter_map(|op| match op {
                DrawOp::Stroke { path, .. } => Some(path),
                DrawOp::FillCircle { .. } => None,
            })
            .collect()
    }

    /// Number of clears, strokes, fills and composites applied to `layer`.
    #[must_use]
    pub fn mutations(&self, layer: Layer) -> u64 {
        self.layers.get(&layer).map_or(0, |r| r.mutations)
    }

    /// Sum of [`Self::mutations`] over every layer.
    #[must_use]
    pub fn total_mutations(&self) -> u64 {
        self.layers.values().map(|r| r.mutations).sum()
    }

    fn record(&mut self, layer: Layer) -> &mut LayerRecord {
        let record = self.layers.entry(layer).or_default();
        record.mutations += 1;
        record
    }
}

impl Layers for RecordingLayers {
    fn clear(&mut self, layer: Layer) {
        self.record(layer).ops.clear();
    }

    fn stroke_path(&mut self, layer: Layer, path: &Path, style: &StrokeStyle) {
        self.record(layer).ops.push(DrawOp::Stroke { path: path.clone(), style: style.clone() });
    }

    fn fill_circle(&mut self, layer: Layer, center: Point, radius: f64, color: &str) {
        self.record(layer).ops.push(DrawOp::FillCircle { center, radius, color: color.to_owned() });
    }

    fn composite(&mut self, from: Layer, onto: Layer) {
        let copied = self.ops(from).to_vec();
        self.record(onto).ops.extend(copied);
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for layer in Layer::ALL {
            self.record(layer).ops.clear();
        }
    }

    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
}
