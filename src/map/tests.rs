use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn surface_with_bounds(width: f64, height: f64) -> MapSurface {
    let mut surface = MapSurface::new(Coordinate::default());
    surface.set_bounds(width, height).unwrap();
    surface
}

#[test]
fn top_left_corner_selects_north_west_extreme() {
    let mut surface = surface_with_bounds(640.0, 320.0);
    let coordinate = surface.pointer_select(0.0, 0.0).unwrap();
    assert_eq!(coordinate.latitude(), 90.0);
    assert_eq!(coordinate.longitude(), -180.0);
    assert_eq!(coordinate.normalized_latitude(), 1.0);
    assert_eq!(coordinate.normalized_longitude(), 0.0);
}

#[test]
fn bottom_right_corner_selects_south_east_extreme() {
    let mut surface = surface_with_bounds(640.0, 320.0);
    let coordinate = surface.pointer_select(640.0, 320.0).unwrap();
    assert_eq!(coordinate.latitude(), -90.0);
    assert_eq!(coordinate.longitude(), 180.0);
}

#[test]
fn top_center_selects_north_pole_on_prime_meridian() {
    let mut surface = surface_with_bounds(800.0, 400.0);
    let coordinate = surface.pointer_select(400.0, 0.0).unwrap();
    assert_eq!(coordinate.latitude(), 90.0);
    assert_eq!(coordinate.longitude(), 0.0);
}

#[test]
fn select_outside_surface_is_a_validation_error() {
    let mut surface = surface_with_bounds(100.0, 100.0);
    assert!(matches!(
        surface.pointer_select(101.0, 50.0),
        Err(MapError::Coordinate(_))
    ));
    assert!(matches!(
        surface.pointer_select(50.0, -1.0),
        Err(MapError::Coordinate(_))
    ));
    // Failed selection leaves the displayed coordinate untouched
    assert_eq!(surface.coordinate(), Coordinate::default());
}

#[test]
fn select_before_layout_fails_fast() {
    let mut surface = MapSurface::new(Coordinate::default());
    assert!(matches!(
        surface.pointer_select(10.0, 10.0),
        Err(MapError::BoundsUnknown)
    ));
}

#[test]
fn zero_area_bounds_are_rejected() {
    let mut surface = MapSurface::new(Coordinate::default());
    assert!(matches!(
        surface.set_bounds(0.0, 100.0),
        Err(MapError::DegenerateBounds { .. })
    ));
    assert!(matches!(
        surface.set_bounds(100.0, 0.0),
        Err(MapError::DegenerateBounds { .. })
    ));
    assert!(surface.bounds().is_none());
}

#[test]
fn pointer_select_notifies_subscriber() {
    let seen: Rc<RefCell<Vec<Coordinate>>> = Rc::new(RefCell::new(Vec::new()));
    let mut surface = surface_with_bounds(200.0, 100.0);
    surface.set_on_select({
        let seen = Rc::clone(&seen);
        move |coordinate| seen.borrow_mut().push(coordinate)
    });

    let selected = surface.pointer_select(50.0, 25.0).unwrap();
    assert_eq!(seen.borrow().as_slice(), &[selected]);
}

#[test]
fn programmatic_set_does_not_notify() {
    let seen: Rc<RefCell<Vec<Coordinate>>> = Rc::new(RefCell::new(Vec::new()));
    let mut surface = surface_with_bounds(200.0, 100.0);
    surface.set_on_select({
        let seen = Rc::clone(&seen);
        move |coordinate| seen.borrow_mut().push(coordinate)
    });

    let tokyo = Coordinate::new(35.6762, 139.6503).unwrap();
    surface.set_coordinate(tokyo);
    assert_eq!(surface.coordinate(), tokyo);
    assert!(seen.borrow().is_empty());
}

#[test]
fn marker_position_flips_vertical_axis() {
    let mut surface = surface_with_bounds(100.0, 50.0);
    surface.set_coordinate(Coordinate::new(90.0, -180.0).unwrap());
    let marker = surface.marker_position().unwrap();
    assert_eq!(marker.x, 0.0);
    assert_eq!(marker.y, 0.0);

    surface.set_coordinate(Coordinate::new(-90.0, 180.0).unwrap());
    let marker = surface.marker_position().unwrap();
    assert_eq!(marker.x, 100.0);
    assert_eq!(marker.y, 50.0);

    surface.set_coordinate(Coordinate::default());
    let marker = surface.marker_position().unwrap();
    assert_eq!(marker.x, 50.0);
    assert_eq!(marker.y, 25.0);
}

#[test]
fn marker_position_unknown_before_layout() {
    let surface = MapSurface::new(Coordinate::default());
    assert!(surface.marker_position().is_none());
    assert!(surface.marker_cell().is_none());
}

#[test]
fn marker_cell_clamps_to_grid_edges() {
    let mut surface = surface_with_bounds(64.0, 16.0);
    surface.set_coordinate(Coordinate::new(-90.0, 180.0).unwrap());
    assert_eq!(surface.marker_cell(), Some((63, 15)));

    surface.set_coordinate(Coordinate::new(90.0, -180.0).unwrap());
    assert_eq!(surface.marker_cell(), Some((0, 0)));
}

#[test]
fn pointer_select_round_trips_through_marker() {
    let mut surface = surface_with_bounds(640.0, 320.0);
    surface.pointer_select(160.0, 240.0).unwrap();
    let marker = surface.marker_position().unwrap();
    assert!((marker.x - 160.0).abs() < 1e-9);
    assert!((marker.y - 240.0).abs() < 1e-9);
}
