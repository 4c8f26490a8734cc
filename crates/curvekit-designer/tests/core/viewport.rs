use curvekit_designer::{snap_to_grid, Point, Viewport};
use curvekit_settings::EditorSettings;
use proptest::prelude::*;

fn device() -> impl Strategy<Value = Point> {
    (-2000.0f64..2000.0, -2000.0f64..2000.0).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn device_world_round_trip(zoom in 0.1f64..10.0, pan in device(), p in device()) {
        let mut vp = Viewport::new();
        vp.set_zoom(zoom);
        vp.set_pan(pan);
        let back = vp.device_to_world(vp.world_to_device(p));
        prop_assert!(back.distance_to(&p) < 1e-9);
    }

    #[test]
    fn wheel_keeps_world_point_under_cursor(
        cursor in device(),
        pan in device(),
        ticks in proptest::collection::vec(prop_oneof![Just(-1.0f64), Just(1.0f64)], 1..20),
    ) {
        let mut vp = Viewport::new();
        vp.set_pan(pan);
        let anchor = vp.device_to_world(cursor);
        for delta in ticks {
            vp.wheel(cursor, delta);
            prop_assert!(vp.device_to_world(cursor).distance_to(&anchor) < 1e-6);
            prop_assert!(vp.zoom() >= 0.1 && vp.zoom() <= 10.0);
        }
    }
}

#[test]
fn test_default_viewport() {
    let vp = Viewport::default();
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan(), Point::ZERO);
    assert_eq!(vp.device_to_world(Point::new(12.0, 34.0)), Point::new(12.0, 34.0));
}

#[test]
fn test_zoom_step_from_settings() {
    let settings = EditorSettings {
        zoom_step: 2.0,
        max_zoom: 4.0,
        ..EditorSettings::default()
    };
    let mut vp = Viewport::with_settings(&settings);
    vp.wheel(Point::ZERO, -1.0);
    assert_eq!(vp.zoom(), 2.0);
    vp.wheel(Point::ZERO, -1.0);
    vp.wheel(Point::ZERO, -1.0);
    assert_eq!(vp.zoom(), 4.0);
}

#[test]
fn test_pan_then_reset() {
    let mut vp = Viewport::new();
    vp.pan_by(Point::new(30.0, 40.0));
    vp.zoom_at(Point::new(100.0, 100.0), 1.1);
    vp.reset();
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan(), Point::ZERO);
}

#[test]
fn test_hit_radius_shrinks_with_zoom() {
    let mut vp = Viewport::new();
    vp.set_zoom(4.0);
    assert_eq!(vp.device_length_to_world(10.0), 2.5);
}

#[test]
fn test_snap_rounds_to_nearest_multiple() {
    assert_eq!(snap_to_grid(Point::new(9.9, 10.1), 20.0), Point::new(0.0, 20.0));
    assert_eq!(snap_to_grid(Point::new(-29.0, 50.0), 20.0), Point::new(-20.0, 60.0));
}
