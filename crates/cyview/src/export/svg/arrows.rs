use indexmap::IndexSet;
use svg::node::element::{Definitions, Marker, Path};

use cyview_core::{color::Color, draw::Line};

/// Arrowhead markers, one per stroke color, in first-use order.
pub fn create_marker_definitions<'a, I>(lines: I) -> Option<Definitions>
where
    I: Iterator<Item = &'a Line>,
{
    let colors: IndexSet<Color> = lines
        .filter(|line| line.has_arrow())
        .map(|line| line.stroke().color())
        .collect();
    if colors.is_empty() {
        return None;
    }

    let defs = colors.iter().fold(Definitions::new(), |defs, color| {
        let marker = Marker::new()
            .set("id", marker_id(color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color),
            );
        defs.add(marker)
    });
    Some(defs)
}

fn marker_id(color: &Color) -> String {
    format!("arrow-{}", color.to_id_safe_string())
}

/// `marker-end` reference of the arrow marker for `color`.
pub fn marker_url(color: &Color) -> String {
    format!("url(#{})", marker_id(color))
}
