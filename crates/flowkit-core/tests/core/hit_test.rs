use flowkit_core::{point_in_rect, point_in_vertices, Point, Rect};

fn square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ]
}

#[test]
fn test_point_in_rect_without_rect() {
    assert_eq!(point_in_rect(&Point::new(1.0, 1.0), None), None);
}

#[test]
fn test_point_in_rect_excludes_boundary() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    assert_eq!(point_in_rect(&Point::new(50.0, 50.0), Some(&rect)), Some(true));
    assert_eq!(point_in_rect(&Point::new(0.0, 50.0), Some(&rect)), Some(false));
    assert_eq!(point_in_rect(&Point::new(100.0, 100.0), Some(&rect)), Some(false));
    assert_eq!(point_in_rect(&Point::new(150.0, 50.0), Some(&rect)), Some(false));
}

#[test]
fn test_point_in_rotated_rect() {
    // 100x20 bar rotated upright around its center (50, 10)
    let rect = Rect::new(0.0, 0.0, 100.0, 20.0).with_rotation(90.0);
    assert_eq!(point_in_rect(&Point::new(50.0, 10.0), Some(&rect)), Some(true));
    assert_eq!(point_in_rect(&Point::new(50.0, 50.0), Some(&rect)), Some(true));
    // Inside the unrotated bar, outside the upright one
    assert_eq!(point_in_rect(&Point::new(5.0, 10.0), Some(&rect)), Some(false));
}

#[test]
fn test_point_in_rotated_rect_uses_cached_center() {
    let mut rect = Rect::new(0.0, 0.0, 100.0, 20.0).with_rotation(90.0);
    rect.center = Some(Point::new(0.0, 0.0));
    // Rotated around the origin the bar covers x in (-20, 0), y in (0, 100)
    assert_eq!(point_in_rect(&Point::new(-10.0, 50.0), Some(&rect)), Some(true));
    assert_eq!(point_in_rect(&Point::new(50.0, 10.0), Some(&rect)), Some(false));
}

#[test]
fn test_thin_rotated_rect_ignores_rotation() {
    let rect = Rect::new(0.0, 0.0, 100.0, 10.0).with_rotation(45.0);
    assert_eq!(point_in_rect(&Point::new(95.0, 5.0), Some(&rect)), Some(true));
}

#[test]
fn test_point_in_vertices_square() {
    let poly = square();
    assert!(point_in_vertices(&Point::new(5.0, 5.0), &poly));
    assert!(!point_in_vertices(&Point::new(15.0, 5.0), &poly));
    assert!(!point_in_vertices(&Point::new(0.0, 5.0), &poly));
}

#[test]
fn test_point_in_vertices_triangle() {
    let tri = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(0.0, 10.0),
    ];
    assert!(point_in_vertices(&Point::new(2.0, 2.0), &tri));
    assert!(!point_in_vertices(&Point::new(8.0, 8.0), &tri));
}
