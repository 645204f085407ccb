//! SVG path data export for built outlines.

use lyon::path::{Event, Path};

/// Serializes `path` as SVG path data (`M`, `L`, `Q`, `C`, `Z` commands).
pub fn path_to_svg(path: &Path) -> String {
    let mut svg = String::new();
    for event in path.iter() {
        match event {
            Event::Begin { at } => svg.push_str(&format!("M {} {} ", at.x, at.y)),
            Event::Line { to, .. } => svg.push_str(&format!("L {} {} ", to.x, to.y)),
            Event::Quadratic { ctrl, to, .. } => {
                svg.push_str(&format!("Q {} {} {} {} ", ctrl.x, ctrl.y, to.x, to.y))
            }
            Event::Cubic {
                ctrl1, ctrl2, to, ..
            } => svg.push_str(&format!(
                "C {} {} {} {} {} {} ",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            )),
            Event::End { close, .. } => {
                if close {
                    svg.push_str("Z ");
                }
            }
        }
    }
    svg.trim_end().to_string()
}
