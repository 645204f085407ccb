use flowkit::{inspect, Config, PenData, Rect};

fn pens() -> Vec<PenData> {
    vec![
        PenData::new("end", "activityFinal", Rect::new(0.0, 0.0, 40.0, 20.0)),
        PenData::new("box", "rectangle", Rect::new(100.0, 50.0, 10.0, 10.0)),
        PenData {
            id: "floating".to_string(),
            name: "activityFinal".to_string(),
            world_rect: None,
        },
    ]
}

#[test]
fn test_report_bounds_cover_laid_out_pens() {
    let report = inspect(&pens(), &Config::default());
    assert_eq!(report.pen_count, 3);

    let bounds = report.bounds.expect("two pens have rects");
    assert_eq!((bounds.x, bounds.y), (0.0, 0.0));
    assert_eq!((bounds.ex, bounds.ey), (110.0, 60.0));
    assert_eq!((bounds.width, bounds.height), (110.0, 60.0));
}

#[test]
fn test_report_outlines_only_registered_shapes() {
    let report = inspect(&pens(), &Config::default());
    assert_eq!(report.outlines.len(), 1);

    let outline = &report.outlines[0];
    assert_eq!(outline.id, "end");
    assert_eq!(outline.name, "activityFinal");
    assert_eq!(outline.path.matches('M').count(), 2);
    assert!(outline.path.ends_with('Z'));
}

#[test]
fn test_report_without_rects_has_no_bounds() {
    let pens = vec![PenData {
        id: "a".to_string(),
        name: "activityFinal".to_string(),
        world_rect: None,
    }];
    let report = inspect(&pens, &Config::default());
    assert!(report.bounds.is_none());
    assert!(report.outlines.is_empty());
}

#[test]
fn test_report_serializes_camel_case() {
    let report = inspect(&pens(), &Config::default());
    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["penCount"], 3);
    assert!(json["bounds"]["ex"].is_number());
    assert_eq!(json["outlines"][0]["id"], "end");
}
