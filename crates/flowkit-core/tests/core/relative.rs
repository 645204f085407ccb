use flowkit_core::{
    calc_relative_point, calc_relative_rect, calc_world_point, calc_world_rect, Point,
    PrevNextType, Rect,
};

#[test]
fn test_relative_rect_fractions() {
    let world = Rect::new(100.0, 200.0, 400.0, 100.0);
    let child = Rect::new(200.0, 225.0, 100.0, 50.0);
    let rel = calc_relative_rect(&child, &world);
    assert_eq!((rel.x, rel.y, rel.width, rel.height), (0.25, 0.25, 0.25, 0.5));
    assert_eq!((rel.ex, rel.ey), (0.5, 0.75));
}

#[test]
fn test_relative_rect_follows_parent_resize() {
    let world = Rect::new(100.0, 200.0, 400.0, 100.0);
    let child = Rect::new(200.0, 225.0, 100.0, 50.0);
    let rel = calc_relative_rect(&child, &world);

    let grown = Rect::new(0.0, 0.0, 800.0, 200.0);
    let placed = calc_world_rect(&rel, &grown);
    assert_eq!((placed.x, placed.y, placed.width, placed.height), (200.0, 50.0, 200.0, 100.0));
}

#[test]
fn test_relative_point_zero_width() {
    let world = Rect::new(10.0, 10.0, 0.0, 20.0);
    let rel = calc_relative_point(&Point::new(50.0, 20.0), &world);
    assert_eq!(rel.x, 0.0);
    assert_eq!(rel.y, 0.5);
}

#[test]
fn test_relative_point_keeps_metadata() {
    let world = Rect::new(0.0, 0.0, 100.0, 100.0);
    let pt = Point {
        id: Some("p1".to_string()),
        pen_id: Some("line-1".to_string()),
        connect_to: Some("box-2".to_string()),
        anchor_id: Some("a3".to_string()),
        prev_next_type: Some(PrevNextType::Bilateral),
        prev: Some(Box::new(Point::new(10.0, 20.0))),
        next: Some(Box::new(Point::new(30.0, 40.0))),
        ..Point::new(20.0, 30.0)
    };

    let rel = calc_relative_point(&pt, &world);
    assert_eq!((rel.x, rel.y), (0.2, 0.3));
    assert_eq!(rel.id.as_deref(), Some("p1"));
    assert_eq!(rel.anchor_id.as_deref(), Some("a3"));
    assert_eq!(rel.prev_next_type, Some(PrevNextType::Bilateral));

    let prev = rel.prev.as_deref().cloned().unwrap_or_default();
    assert_eq!((prev.x, prev.y), (0.1, 0.2));
    assert_eq!(prev.pen_id.as_deref(), Some("line-1"));
    assert_eq!(prev.connect_to.as_deref(), Some("box-2"));
    assert!(prev.id.is_none());

    let next = rel.next.as_deref().cloned().unwrap_or_default();
    assert_eq!((next.x, next.y), (0.3, 0.4));
}

#[test]
fn test_world_point_round_trip() {
    let world = Rect::new(-50.0, 25.0, 200.0, 80.0);
    let pt = Point {
        next: Some(Box::new(Point::new(10.0, 45.0))),
        ..Point::new(30.0, 65.0)
    };
    let back = calc_world_point(&calc_relative_point(&pt, &world), &world);
    assert!((back.x - 30.0).abs() < 1e-9);
    assert!((back.y - 65.0).abs() < 1e-9);
    let next = back.next.as_deref().cloned().unwrap_or_default();
    assert!((next.x - 10.0).abs() < 1e-9);
    assert!((next.y - 45.0).abs() < 1e-9);
}
