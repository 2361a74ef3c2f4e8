#![allow(clippy::float_cmp)]

use super::*;

fn seg(a: (f64, f64), b: (f64, f64)) -> Path {
    let mut path = Path::new();
    path.move_to(Point::new(a.0, a.1));
    path.line_to(Point::new(b.0, b.1));
    path
}

#[test]
fn new_layers_are_empty() {
    let layers = RecordingLayers::new(100.0, 50.0);
    for layer in Layer::ALL {
        assert!(layers.ops(layer).is_empty());
        assert_eq!(layers.mutations(layer), 0);
    }
    assert_eq!(layers.size(), (100.0, 50.0));
}

#[test]
fn stroke_records_on_target_layer_only() {
    let mut layers = RecordingLayers::new(10.0, 10.0);
    layers.stroke_path(Layer::Lines, &seg((0.0, 0.0), (1.0, 1.0)), &StrokeStyle::solid("#000", 2.0));
    assert_eq!(layers.strokes(Layer::Lines).len(), 1);
    assert!(layers.ops(Layer::Points).is_empty());
}

#[test]
fn clear_empties_layer_and_counts_mutation() {
    let mut layers = RecordingLayers::new(10.0, 10.0);
    layers.fill_circle(Layer::Interface, Point::new(1.0, 1.0), 2.0, "#fff");
    layers.clear(Layer::Interface);
    assert!(layers.ops(Layer::Interface).is_empty());
    assert_eq!(layers.mutations(Layer::Interface), 2);
}

#[test]
fn composite_copies_source_on_top() {
    let mut layers = RecordingLayers::new(10.0, 10.0);
    let style = StrokeStyle::solid("#000", 2.0);
    layers.stroke_path(Layer::Lines, &seg((0.0, 0.0), (1.0, 0.0)), &style);
    layers.stroke_path(Layer::Points, &seg((5.0, 5.0), (6.0, 6.0)), &style);
    layers.composite(Layer::Points, Layer::Lines);

    let lines = layers.strokes(Layer::Lines);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].end(), Some(Point::new(6.0, 6.0)));
    assert_eq!(layers.strokes(Layer::Points).len(), 1);
}

#[test]
fn resize_wipes_every_layer() {
    let mut layers = RecordingLayers::new(10.0, 10.0);
    layers.fill_circle(Layer::Grid, Point::new(1.0, 1.0), 2.0, "#fff");
    layers.resize(20.0, 30.0);
    assert!(layers.ops(Layer::Grid).is_empty());
    assert_eq!(layers.size(), (20.0, 30.0));
}
