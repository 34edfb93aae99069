mod support;

use epicycles::{
    EngineConfig, EpicycleEngine, EpicycleError, RunMode,
    float_types::Real,
    frequency::{FrequencyOrder, frequency_at},
    term::{Coefficient, EpicycleTerm},
    viewport::{Bounds, Viewport, compute_scale},
};
use nalgebra::Point2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use support::{approx_eq, approx_point, curve, surfaces, unit_engine};

#[test]
fn centered_frequency_order() {
    let seq: Vec<i64> = FrequencyOrder::new().take(7).collect();
    assert_eq!(seq, vec![0, 1, -1, 2, -2, 3, -3]);
    let lookup: Vec<i64> = (0..7).map(frequency_at).collect();
    assert_eq!(lookup, seq);
}

#[test]
fn rotation_preserves_magnitude() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let c = Coefficient::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        let n = rng.gen_range(-100..=100);
        let term = EpicycleTerm::new(c, n);
        for _ in 0..20 {
            let t: Real = rng.gen_range(-10.0..10.0);
            let len = term.evaluate(t).norm();
            assert!(
                approx_eq(len, term.magnitude(), 1e-9 * term.magnitude().max(1.0)),
                "n={n} t={t} |v|={len} magnitude={}",
                term.magnitude()
            );
        }
    }
}

#[test]
fn scale_for_wide_drawing() {
    let bounds = Bounds::new([0.0, 100.0], [0.0, 50.0]);
    let scale = compute_scale(&bounds, 900.0, 900.0, 0.9).unwrap();
    assert!(approx_eq(scale, 8.1, 1e-9));
}

#[test]
fn single_constant_term_end_to_end() {
    let mut engine = unit_engine(vec![curve(&[[1.0, 0.0]])]);
    assert_eq!(engine.scale_factor(), 100.0);
    assert_eq!(engine.terms(0).unwrap()[0].frequency(), 0);

    let (mut overlay, mut path) = surfaces();
    engine.render_frame_at(0.0, &mut overlay, &mut path);

    // circle around the cartesian origin, which is the bottom-left corner on screen
    let circles: Vec<_> = overlay.circles().collect();
    assert_eq!(circles, vec![(Point2::new(0.0, 100.0), 100.0)]);
    assert_eq!(engine.trace_tip(0), Some(Point2::new(100.0, 100.0)));
    assert!(path.is_blank());

    // a constant term never moves the tip, so later segments have zero length
    engine.render_frame_at(0.37, &mut overlay, &mut path);
    let segments: Vec<_> = path.lines().collect();
    assert_eq!(segments.len(), 1);
    assert!(approx_point(segments[0].0, segments[0].1, 1e-9));
}

#[test]
fn zero_terms_collapse_to_origin() {
    let mut engine = unit_engine(vec![curve(&[[0.3, 0.3], [0.1, 0.0], [0.0, 0.1]])]);
    let (mut overlay, mut path) = surfaces();
    engine.render_frame(&mut overlay, &mut path);
    let before = engine.trace_tip(0).unwrap();

    engine.set_term_count(0);
    overlay = Default::default();
    engine.render_frame(&mut overlay, &mut path);

    assert!(overlay.is_blank());
    let segments: Vec<_> = path.lines().collect();
    assert_eq!(segments, vec![(before, Point2::new(0.0, 100.0))]);
}

#[test]
fn term_count_saturates() {
    let coeffs = vec![Coefficient::new(0.01, 0.0); 200];
    let mut engine = unit_engine(vec![coeffs]);
    engine.set_term_count(-5);
    assert_eq!(engine.term_count(), 0);
    engine.set_term_count(10_000);
    assert_eq!(engine.term_count(), 200);
    engine.increment_term_count();
    assert_eq!(engine.term_count(), 200);
    engine.set_term_count(i64::MIN);
    engine.decrement_term_count();
    assert_eq!(engine.term_count(), 0);
}

#[test]
fn clear_trace_restarts_stitching() {
    let mut engine = unit_engine(vec![curve(&[[0.5, 0.5], [0.2, 0.0]]), curve(&[[0.2, 0.2], [0.0, 0.1]])]);
    let (mut overlay, mut path) = surfaces();
    engine.start().unwrap();
    for _ in 0..5 {
        engine.tick(&mut overlay, &mut path);
    }
    assert_eq!(path.lines().count(), 8);
    let t = engine.time();

    engine.clear_trace(&mut path);
    assert!(path.is_blank());
    assert!(engine.trace().is_clear());
    assert_eq!(engine.time(), t);
    assert_eq!(engine.curve_count(), 2);

    engine.tick(&mut overlay, &mut path);
    assert!(path.is_blank());
    assert!(engine.trace_tip(0).is_some());
    assert!(engine.trace_tip(1).is_some());

    engine.tick(&mut overlay, &mut path);
    assert_eq!(path.lines().count(), 2);
}

#[test]
fn trace_segments_join_up() {
    let mut engine = unit_engine(vec![curve(&[[0.5, 0.5], [0.2, 0.1], [0.05, -0.1]])]);
    let (mut overlay, mut path) = surfaces();
    engine.start().unwrap();
    for _ in 0..50 {
        engine.tick(&mut overlay, &mut path);
    }
    let segments: Vec<_> = path.lines().collect();
    assert_eq!(segments.len(), 49);
    for pair in segments.windows(2) {
        assert_eq!(pair[0].1, pair[1].0);
    }
    let last = segments.last().unwrap().1;
    assert_eq!(engine.trace_tip(0), Some(last));
    // the tip is the partial sum at the last rendered time
    let t = engine.time() - engine.time_step();
    assert!(approx_point(engine.tip_at(0, t).unwrap(), last, 1e-9));
}

#[test]
fn overlay_is_redrawn_each_tick() {
    let mut engine = unit_engine(vec![curve(&[[0.5, 0.5], [0.2, 0.1], [0.05, -0.1]])]);
    let (mut overlay, mut path) = surfaces();
    engine.start().unwrap();
    for _ in 0..10 {
        engine.tick(&mut overlay, &mut path);
    }
    assert_eq!(overlay.clear_count(), 10);
    assert_eq!(overlay.circles().count(), 3);
    assert_eq!(overlay.lines().count(), 3);

    // vectors chain head to tail
    let vectors: Vec<_> = overlay.lines().collect();
    assert_eq!(vectors[0].0, Point2::new(0.0, 100.0));
    for pair in vectors.windows(2) {
        assert_eq!(pair[0].1, pair[1].0);
    }
}

#[test]
fn truncation_keeps_low_frequencies() {
    let coeffs = curve(&[[0.5, 0.5], [0.2, 0.0], [0.1, 0.0], [0.05, 0.0], [0.02, 0.0]]);
    let mut engine = unit_engine(vec![coeffs]);
    engine.set_term_count(3);
    let (mut overlay, mut path) = surfaces();
    engine.render_frame_at(0.1, &mut overlay, &mut path);
    let radii: Vec<Real> = overlay.circles().map(|(_, r)| r).collect();
    assert_eq!(radii.len(), 3);
    assert!(approx_eq(radii[0], 100.0 * (0.5 as Real).hypot(0.5), 1e-9));
    assert!(approx_eq(radii[1], 20.0, 1e-9));
    assert!(approx_eq(radii[2], 10.0, 1e-9));
}

#[test]
fn live_changes_keep_the_clock() {
    let mut engine = unit_engine(vec![curve(&[[0.5, 0.5], [0.2, 0.1]])]);
    let (mut overlay, mut path) = surfaces();
    engine.start().unwrap();
    for _ in 0..3 {
        engine.tick(&mut overlay, &mut path);
    }
    let t = engine.time();
    engine.set_term_count(1);
    engine.set_visibility(Some(false), None);
    engine.set_speed(11);
    assert_eq!(engine.time(), t);

    engine.tick(&mut overlay, &mut path);
    assert!(approx_eq(engine.time(), t + engine.time_step(), 1e-12));
    assert_eq!(overlay.circles().count(), 0);
    assert_eq!(overlay.lines().count(), 1);
}

#[test]
fn curves_use_their_own_frequencies() {
    let engine = unit_engine(vec![curve(&[[0.1, 0.0]; 3]), curve(&[[0.1, 0.0]; 5])]);
    let freqs = |c: usize| -> Vec<i64> { engine.terms(c).unwrap().iter().map(|t| t.frequency()).collect() };
    assert_eq!(freqs(0), vec![0, 1, -1]);
    assert_eq!(freqs(1), vec![0, 1, -1, 2, -2]);
    assert_eq!(engine.max_terms(), 3);
}

#[test]
fn initialize_errors_leave_nothing_behind() {
    let viewport = Viewport::new(100.0, 100.0);
    let cases = [
        (vec![], Bounds::new([0.0, 1.0], [0.0, 1.0]), EpicycleError::EmptyInput),
        (
            vec![curve(&[[1.0, 0.0]])],
            Bounds::new([0.0, -1.0], [0.0, 1.0]),
            EpicycleError::InvalidBounds { x_max: -1.0, y_max: 1.0 },
        ),
        (vec![curve(&[[1.0, 0.0]]), vec![]], Bounds::new([0.0, 1.0], [0.0, 1.0]), EpicycleError::EmptyCurve {
            curve: 1,
        }),
    ];
    for (curves, bounds, expected) in cases {
        let result = EpicycleEngine::initialize(curves, bounds, viewport, EngineConfig::default());
        assert_eq!(result.unwrap_err(), expected);
    }
}

#[test]
fn exited_session_is_terminal() {
    let mut engine = unit_engine(vec![curve(&[[1.0, 0.0]])]);
    let (mut overlay, mut path) = surfaces();
    engine.start().unwrap();
    engine.quit().unwrap();
    assert_eq!(engine.mode(), RunMode::Exited);
    assert!(!engine.tick(&mut overlay, &mut path));
    assert_eq!(engine.toggle(), Err(EpicycleError::SessionExited));
}
