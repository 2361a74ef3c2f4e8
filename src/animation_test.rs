use super::*;
use crate::point::Point;
use crate::recording::RecordingLayers;
use crate::stroke::Stroke;

fn ramp(n: usize, y: f64) -> Stroke {
    #[allow(clippy::cast_precision_loss)]
    let points: Vec<Point> = (0..n).map(|i| Point::new(i as f64, y)).collect();
    Stroke::new(points, "#000", 5.0)
}

fn layers() -> RecordingLayers {
    RecordingLayers::new(100.0, 100.0)
}

/// Run frames one millisecond apart until the animation ends.
fn run_to_end(mut anim: AnimationState, layers: &mut RecordingLayers, speed: f64) -> usize {
    let mut now = 0.0;
    let mut frames = 0;
    loop {
        frames += 1;
        match anim.step(layers, now, speed) {
            Some(next) => anim = next,
            None => return frames,
        }
        now += 1.0;
        assert!(frames < 10_000, "animation never finished");
    }
}

// --- points_for ---

#[test]
fn budget_drops_fraction() {
    assert_eq!(points_for(1.9, 1.0), 1);
    assert_eq!(points_for(0.4, 2.0), 0);
    assert_eq!(points_for(3.0, 2.0), 6);
}

#[test]
fn negative_elapsed_reveals_nothing() {
    assert_eq!(points_for(-5.0, 2.0), 0);
}

// --- start ---

#[test]
fn start_primes_clock_for_one_point() {
    let anim = AnimationState::start(History::new(vec![ramp(3, 0.0)]), Cursor::default(), 100.0, 2.0);
    assert_eq!(points_for(100.0 - anim.last_tick(), 2.0), 1);
}

// --- step ---

#[test]
fn first_frame_reveals_one_point_without_painting() {
    let mut layers = layers();
    let target = History::new(vec![ramp(3, 0.0)]);
    let anim = AnimationState::start(target, Cursor::default(), 0.0, 2.0);
    let anim = anim.step(&mut layers, 0.0, 2.0).unwrap();

    // A single revealed point has no segment to stroke.
    assert_eq!(anim.cursor(), Cursor::new(0, 1));
    assert!(layers.strokes(Layer::Points).is_empty());
    assert!(layers.strokes(Layer::Lines).is_empty());
}

#[test]
fn second_point_paints_prefix_on_points_layer() {
    let mut layers = layers();
    let target = History::new(vec![ramp(4, 0.0)]);
    let anim = AnimationState::start(target, Cursor::default(), 0.0, 1.0);
    let anim = anim.step(&mut layers, 0.0, 1.0).unwrap();
    let anim = anim.step(&mut layers, 1.0, 1.0).unwrap();

    assert_eq!(anim.cursor(), Cursor::new(0, 2));
    let preview = layers.strokes(Layer::Points);
    assert_eq!(preview.len(), 1);
    assert_eq!(preview[0].end(), Some(Point::new(1.0, 0.0)));
}

#[test]
fn finishing_line_moves_it_to_lines_layer() {
    let mut layers = layers();
    let target = History::new(vec![ramp(3, 0.0)]);
    let anim = AnimationState::start(target, Cursor::default(), 0.0, 2.0);
    let anim = anim.step(&mut layers, 0.0, 2.0).unwrap();
    assert!(anim.step(&mut layers, 1.0, 2.0).is_none());

    assert_eq!(layers.strokes(Layer::Lines).len(), 1);
    assert!(layers.ops(Layer::Points).is_empty());
}

#[test]
fn surplus_budget_carries_to_next_line() {
    let mut layers = layers();
    let target = History::new(vec![ramp(2, 0.0), ramp(10, 5.0)]);
    let anim = AnimationState::start(target, Cursor::default(), 0.0, 1.0);
    let anim = anim.step(&mut layers, 5.0, 1.0).unwrap();

    // 6 points: 2 finish line 0, 4 go into line 1.
    assert_eq!(anim.cursor(), Cursor::new(1, 4));
    assert_eq!(layers.strokes(Layer::Lines).len(), 1);
    assert_eq!(layers.strokes(Layer::Points).len(), 1);
}

#[test]
fn starting_mid_line_counts_from_point_index() {
    let mut layers = layers();
    let target = History::new(vec![ramp(10, 0.0)]);
    let anim = AnimationState::start(target, Cursor::new(0, 6), 0.0, 1.0);
    let anim = anim.step(&mut layers, 2.0, 1.0).unwrap();
    assert_eq!(anim.cursor(), Cursor::new(0, 9));
    let preview = layers.strokes(Layer::Points);
    assert_eq!(preview[0].end(), Some(Point::new(8.0, 0.0)));
}

#[test]
fn idle_frame_without_budget_changes_nothing() {
    let mut layers = layers();
    let target = History::new(vec![ramp(10, 0.0)]);
    let anim = AnimationState::start(target, Cursor::default(), 0.0, 0.5);
    let anim = anim.step(&mut layers, 0.0, 0.5).unwrap();
    let before = layers.total_mutations();
    let anim = anim.step(&mut layers, 1.0, 0.5).unwrap();
    assert_eq!(layers.total_mutations(), before);
    assert_eq!(anim.cursor(), Cursor::new(0, 1));
}

#[test]
fn fractional_time_is_dropped_not_accumulated() {
    let mut layers = layers();
    let target = History::new(vec![ramp(100, 0.0)]);
    let mut anim = AnimationState::start(target, Cursor::default(), 0.0, 1.0);
    anim = anim.step(&mut layers, 0.0, 1.0).unwrap();
    for i in 1..=4 {
        anim = anim.step(&mut layers, f64::from(i) * 1.5, 1.0).unwrap();
    }
    // Four frames of 1.5ms at 1 point/ms reveal one point each.
    assert_eq!(anim.cursor(), Cursor::new(0, 5));
}

#[test]
fn converges_to_full_target() {
    let mut layers = layers();
    let target = History::new(vec![ramp(7, 0.0), ramp(1, 3.0), ramp(12, 6.0)]);
    let anim = AnimationState::start(target.clone(), Cursor::default(), 0.0, 2.0);
    run_to_end(anim, &mut layers, 2.0);

    // The single-point line draws nothing.
    assert_eq!(layers.strokes(Layer::Lines).len(), 2);
    assert!(layers.ops(Layer::Points).is_empty());
}

#[test]
fn frames_needed_track_speed() {
    let target = History::new(vec![ramp(40, 0.0)]);
    let slow = run_to_end(AnimationState::start(target.clone(), Cursor::default(), 0.0, 1.0), &mut layers(), 1.0);
    let fast = run_to_end(AnimationState::start(target, Cursor::default(), 0.0, 4.0), &mut layers(), 4.0);
    assert!(fast < slow, "fast {fast} slow {slow}");
}

// --- revealed_history ---

#[test]
fn revealed_history_truncates_current_line() {
    let mut layers = layers();
    let target = History::new(vec![ramp(3, 0.0), ramp(10, 5.0)]);
    let anim = AnimationState::start(target.clone(), Cursor::default(), 0.0, 1.0);
    let anim = anim.step(&mut layers, 5.0, 1.0).unwrap();

    let revealed = anim.revealed_history();
    assert_eq!(revealed.len(), 2);
    assert_eq!(revealed.lines()[0], target.lines()[0]);
    assert_eq!(revealed.lines()[1].len(), 3);
    assert!(!revealed.is_same(&target));
}

#[test]
fn revealed_history_at_line_boundary_has_no_partial() {
    let mut layers = layers();
    let target = History::new(vec![ramp(3, 0.0), ramp(10, 5.0)]);
    let anim = AnimationState::start(target, Cursor::default(), 0.0, 1.0);
    let anim = anim.step(&mut layers, 2.0, 1.0).unwrap();
    assert_eq!(anim.cursor(), Cursor::new(1, 0));
    assert_eq!(anim.revealed_history().len(), 1);
}
