//! Drawable primitives.
//!
//! A [`Primitive`] is one item on a drawing surface. Primitives know their
//! bounding box and can answer whether a point hits them, which is all a
//! retained surface needs for z-ordered hit testing.

use crate::{
    color::Color,
    draw::StrokeDefinition,
    geometry::{Bounds, Point},
};

/// Estimated advance of one label character, in pixels.
const CHAR_WIDTH: f32 = 7.0;
/// Estimated height of one label line, in pixels.
const LINE_HEIGHT: f32 = 14.0;

/// A polyline or smoothed curve, optionally ending in an arrowhead.
///
/// When `smooth` is set the points are control points of a quadratic spline
/// that starts at the first point, ends at the last one, and passes through
/// the midpoints of the interior segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    points: Vec<Point>,
    stroke: StrokeDefinition,
    smooth: bool,
    arrow: bool,
}

impl Line {
    pub fn new(points: Vec<Point>, stroke: StrokeDefinition) -> Self {
        Self {
            points,
            stroke,
            smooth: false,
            arrow: false,
        }
    }

    pub fn smoothed(mut self) -> Self {
        self.smooth = true;
        self
    }

    /// Draws an arrowhead at the last point.
    pub fn with_arrow(mut self) -> Self {
        self.arrow = true;
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    pub fn has_arrow(&self) -> bool {
        self.arrow
    }
}

/// Text centered on a position. Embedded newlines start new lines.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    position: Point,
    text: String,
    color: Color,
}

impl TextLabel {
    pub fn new(position: Point, text: impl Into<String>, color: Color) -> Self {
        Self {
            position,
            text: text.into(),
            color,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Lines of the label, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Estimated extent of the rendered text.
    pub fn bounding_box(&self) -> Bounds {
        let line_count = self.lines().count() as f32;
        let widest = self
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as f32;
        self.position.to_bounds(crate::geometry::Size::new(
            widest * CHAR_WIDTH,
            line_count * LINE_HEIGHT,
        ))
    }
}

/// One item on a drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Oval {
        bounds: Bounds,
        fill: Option<Color>,
        stroke: StrokeDefinition,
    },
    Polygon {
        points: Vec<Point>,
        fill: Option<Color>,
        stroke: StrokeDefinition,
    },
    Rectangle {
        bounds: Bounds,
        stroke: StrokeDefinition,
    },
    Line(Line),
    Text(TextLabel),
}

impl Primitive {
    /// Short name of the primitive kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Oval { .. } => "oval",
            Self::Polygon { .. } => "polygon",
            Self::Rectangle { .. } => "rectangle",
            Self::Line(_) => "line",
            Self::Text(_) => "text",
        }
    }

    /// Bounding box of the primitive, ignoring stroke width.
    pub fn bounding_box(&self) -> Bounds {
        match self {
            Self::Oval { bounds, .. } | Self::Rectangle { bounds, .. } => *bounds,
            Self::Polygon { points, .. } => Bounds::from_points(points).unwrap_or_default(),
            Self::Line(line) => Bounds::from_points(line.points()).unwrap_or_default(),
            Self::Text(label) => label.bounding_box(),
        }
    }

    /// Returns true if `point` hits the primitive.
    ///
    /// Ovals and polygons hit on their whole interior, lines within half
    /// their stroke width plus `tolerance`, rectangles only near their
    /// outline, and text within its estimated extent.
    pub fn hit(&self, point: Point, tolerance: f32) -> bool {
        match self {
            Self::Oval { bounds, stroke, .. } => {
                let reach = stroke.width() / 2.0 + tolerance;
                let rx = bounds.width() / 2.0 + reach;
                let ry = bounds.height() / 2.0 + reach;
                if rx <= 0.0 || ry <= 0.0 {
                    return false;
                }
                let d = point.sub_point(bounds.center());
                (d.x() / rx).powi(2) + (d.y() / ry).powi(2) <= 1.0
            }
            Self::Polygon { points, stroke, .. } => {
                polygon_contains(points, point)
                    || near_polyline(points, true, point, stroke.width() / 2.0 + tolerance)
            }
            Self::Rectangle { bounds, stroke } => {
                let reach = stroke.width() / 2.0 + tolerance;
                bounds.inset(-reach).contains(point) && !bounds.inset(reach).contains(point)
            }
            Self::Line(line) => near_polyline(
                line.points(),
                false,
                point,
                line.stroke().width() / 2.0 + tolerance,
            ),
            Self::Text(label) => label.bounding_box().inset(-tolerance).contains(point),
        }
    }
}

/// Even-odd ray casting test.
fn polygon_contains(points: &[Point], p: Point) -> bool {
    let mut inside = false;
    let n = points.len();
    for i in 0..n {
        let a = points[i];
        let b = points[(i + n - 1) % n];
        if (a.y() > p.y()) != (b.y() > p.y()) {
            let x_cross = (b.x() - a.x()) * (p.y() - a.y()) / (b.y() - a.y()) + a.x();
            if p.x() < x_cross {
                inside = !inside;
            }
        }
    }
    inside
}

fn near_polyline(points: &[Point], closed: bool, p: Point, reach: f32) -> bool {
    if let [only] = points {
        return p.distance(*only) <= reach;
    }
    let open = points
        .windows(2)
        .any(|w| p.distance_to_segment(w[0], w[1]) <= reach);
    let closing = closed
        && match (points.first(), points.last()) {
            (Some(first), Some(last)) => p.distance_to_segment(*last, *first) <= reach,
            _ => false,
        };
    open || closing
}
