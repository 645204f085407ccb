use flowkit_core::{get_rect, get_rect_of_points, rect_in_rect, PenData, Point, Rect};

#[test]
fn test_get_rect_of_points() {
    let pts = [
        Point::new(1.0, 1.0),
        Point::new(5.0, 5.0),
        Point::new(-2.0, 3.0),
    ];
    let rect = get_rect_of_points(&pts);
    assert_eq!(rect.x, -2.0);
    assert_eq!(rect.y, 1.0);
    assert_eq!(rect.ex, 5.0);
    assert_eq!(rect.ey, 5.0);
    assert_eq!(rect.width, 7.0);
    assert_eq!(rect.height, 4.0);
}

#[test]
fn test_get_rect_of_no_points_is_infinite() {
    let empty: [Point; 0] = [];
    let rect = get_rect_of_points(&empty);
    assert_eq!(rect.x, f64::INFINITY);
    assert_eq!(rect.ex, f64::NEG_INFINITY);
}

#[test]
fn test_get_rect_unions_pens() {
    let pens = vec![
        PenData::new("a", "rectangle", Rect::new(0.0, 0.0, 10.0, 10.0)),
        PenData::new("b", "rectangle", Rect::new(20.0, 5.0, 10.0, 20.0)),
        PenData {
            id: "c".to_string(),
            name: "line".to_string(),
            world_rect: None,
        },
    ];
    let rect = get_rect(&pens);
    assert_eq!((rect.x, rect.y, rect.ex, rect.ey), (0.0, 0.0, 30.0, 25.0));
    assert_eq!((rect.width, rect.height), (30.0, 25.0));
    assert_eq!(rect.center, Some(Point::new(15.0, 12.5)));
}

#[test]
fn test_get_rect_includes_rotation() {
    let rects = [Rect::new(0.0, 0.0, 40.0, 20.0).with_rotation(90.0)];
    let rect = get_rect(&rects);
    // Center (20, 10): the upright box spans x 10..30, y -10..30
    assert!((rect.x - 10.0).abs() < 1e-9);
    assert!((rect.y + 10.0).abs() < 1e-9);
    assert!((rect.ex - 30.0).abs() < 1e-9);
    assert!((rect.ey - 30.0).abs() < 1e-9);
}

#[test]
fn test_rect_in_rect_overlap() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
    let apart = Rect::new(11.0, 0.0, 10.0, 10.0);
    assert!(rect_in_rect(&a, &touching, false));
    assert!(rect_in_rect(&touching, &a, false));
    assert!(!rect_in_rect(&a, &apart, false));
}

#[test]
fn test_rect_in_rect_all_in() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(10.0, 10.0, 20.0, 20.0);
    let flush = Rect::new(0.0, 10.0, 20.0, 20.0);
    assert!(rect_in_rect(&inner, &outer, true));
    assert!(!rect_in_rect(&outer, &inner, true));
    assert!(!rect_in_rect(&flush, &outer, true));
}
