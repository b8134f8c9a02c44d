use super::*;
use crate::foundation::core::Point;
use crate::wave::generate::generate_points;
use crate::wave::params::WaveParams;

fn silhouette(seed: i64, shape: Shape) -> Vec<WavePoint> {
    generate_points(&WaveParams {
        width: 1440.0,
        height: 320.0,
        intensity: 0.6,
        base_height: 160.0,
        seed,
        position: Position::Bottom,
        shape,
    })
}

fn engine(points: Vec<WavePoint>) -> MorphEngine<&'static str> {
    MorphEngine::new(1440.0, 320.0, points, Position::Bottom, Shape::Smooth)
}

fn bits(points: &[WavePoint]) -> Vec<(u64, u64)> {
    points
        .iter()
        .map(|p| (p.x.to_bits(), p.y.to_bits()))
        .collect()
}

#[test]
fn interpolation_blends_linearly() {
    let from = [Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
    let to = [Point::new(0.0, 20.0), Point::new(10.0, 30.0)];
    let mid = interpolate_points(&from, &to, 0.5);
    assert_eq!(mid, vec![Point::new(0.0, 10.0), Point::new(10.0, 20.0)]);
}

#[test]
fn interpolation_reuses_last_point_of_shorter_side() {
    let from = [Point::new(0.0, 0.0)];
    let to = [
        Point::new(0.0, 10.0),
        Point::new(5.0, 10.0),
        Point::new(10.0, 10.0),
    ];
    let out = interpolate_points(&from, &to, 1.0);
    assert_eq!(out, to.to_vec());

    let back = interpolate_points(&to, &from, 0.0);
    assert_eq!(back.len(), 3);
    assert_eq!(back[2], Point::new(10.0, 10.0));

    let back = interpolate_points(&to, &from, 1.0);
    assert!(back.iter().all(|p| *p == Point::new(0.0, 0.0)));
}

#[test]
fn interpolation_with_empty_side_yields_target() {
    let to = [Point::new(1.0, 1.0)];
    assert_eq!(interpolate_points(&[], &to, 0.3), to.to_vec());
    assert!(interpolate_points(&to, &[], 0.3).is_empty());
}

#[test]
fn idle_engine_renders_nothing_new() {
    let mut e = engine(silhouette(1, Shape::Smooth));
    let before = e.current_path().to_owned();
    assert_eq!(e.tick(100.0), MorphTick::Idle);
    assert_eq!(e.current_path(), before);
    assert!(!e.is_morphing());
}

#[test]
fn first_tick_starts_the_clock() {
    let from = silhouette(1, Shape::Smooth);
    let mut e = engine(from.clone());
    e.start(silhouette(2, Shape::Smooth), Position::Bottom, Shape::Smooth, "s2");
    assert_eq!(e.session().unwrap().start_ms(), None);

    assert_eq!(e.tick(1000.0), MorphTick::Frame { progress: 0.0 });
    assert_eq!(e.session().unwrap().start_ms(), Some(1000.0));
    assert_eq!(bits(e.displayed_points()), bits(&from));
}

#[test]
fn midway_frame_uses_eased_fraction() {
    let from = silhouette(1, Shape::Smooth);
    let to = silhouette(2, Shape::Smooth);
    let mut e = engine(from.clone());
    e.start(to.clone(), Position::Bottom, Shape::Smooth, "s2");
    e.tick(0.0);

    assert_eq!(e.tick(130.0), MorphTick::Frame { progress: 0.25 });
    let expected = interpolate_points(&from, &to, 0.125);
    assert_eq!(e.displayed_points(), expected.as_slice());
}

#[test]
fn completion_lands_exactly_on_target() {
    let to = silhouette(2, Shape::Peaks);
    let mut e = engine(silhouette(1, Shape::Smooth));
    e.start(to.clone(), Position::Top, Shape::Peaks, "peaks");
    e.tick(0.0);
    e.tick(200.0);
    assert_eq!(e.tick(520.0), MorphTick::Completed { commit: "peaks" });

    assert_eq!(bits(e.displayed_points()), bits(&to));
    assert_eq!(e.position(), Position::Top);
    assert_eq!(e.shape(), Shape::Peaks);
    assert_eq!(
        e.current_path(),
        build_path(&to, PathFrame::new(1440.0, 320.0, Position::Top), Shape::Peaks)
    );
    assert!(!e.is_morphing());
    assert_eq!(e.tick(900.0), MorphTick::Idle);
}

#[test]
fn late_ticks_complete_immediately() {
    let to = silhouette(3, Shape::Smooth);
    let mut e = engine(silhouette(1, Shape::Smooth));
    e.start(to.clone(), Position::Bottom, Shape::Smooth, "late");
    e.tick(0.0);
    assert_eq!(e.tick(10_000.0), MorphTick::Completed { commit: "late" });
    assert_eq!(bits(e.displayed_points()), bits(&to));
}

#[test]
fn new_morph_supersedes_and_starts_from_last_render() {
    let original = silhouette(1, Shape::Smooth);
    let mut e = engine(original.clone());

    let first = e.start(silhouette(2, Shape::Smooth), Position::Bottom, Shape::Smooth, "a");
    e.tick(0.0);
    e.tick(150.0);
    let rendered = e.displayed_points().to_vec();
    assert_ne!(bits(&rendered), bits(&original));

    let second = e.start(silhouette(3, Shape::Smooth), Position::Bottom, Shape::Smooth, "b");
    assert_ne!(first, second);

    let session = e.session().unwrap();
    assert_eq!(session.id(), second);
    assert_eq!(*session.commit(), "b");
    assert_eq!(bits(session.from_points()), bits(&rendered));
    assert_eq!(session.start_ms(), None);

    e.tick(1000.0);
    assert_eq!(e.tick(1520.0), MorphTick::Completed { commit: "b" });
}

#[test]
fn frames_render_against_target_anchor() {
    let mut e = engine(silhouette(1, Shape::Smooth));
    e.start(silhouette(1, Shape::Smooth), Position::Top, Shape::Smooth, "top");
    e.tick(0.0);
    assert_eq!(e.position(), Position::Top);
    assert!(e.current_path().starts_with("M0,0"));
}

#[test]
fn smooth_to_peaks_keeps_longer_sample_count_mid_flight() {
    let mut e = engine(silhouette(1, Shape::Smooth));
    e.start(silhouette(1, Shape::Peaks), Position::Bottom, Shape::Peaks, "p");
    e.tick(0.0);
    e.tick(260.0);
    assert_eq!(e.displayed_points().len(), 65);
    e.tick(520.0);
    assert_eq!(e.displayed_points().len(), 9);
}

#[test]
fn cancel_keeps_last_frame() {
    let mut e = engine(silhouette(1, Shape::Smooth));
    e.start(silhouette(2, Shape::Smooth), Position::Bottom, Shape::Smooth, "x");
    e.tick(0.0);
    e.tick(100.0);
    let shown = e.displayed_points().to_vec();
    assert_eq!(e.cancel(), Some("x"));
    assert_eq!(e.cancel(), None);
    assert_eq!(e.displayed_points(), shown.as_slice());
}

#[test]
fn zero_duration_completes_on_first_tick() {
    let mut e = engine(silhouette(1, Shape::Smooth)).with_timing(0.0, Ease::Linear);
    e.start(silhouette(2, Shape::Smooth), Position::Bottom, Shape::Smooth, "now");
    assert_eq!(e.tick(5.0), MorphTick::Completed { commit: "now" });
}
