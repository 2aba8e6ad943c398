//! SVG export of rendered scenes.

mod arrows;

use std::{fs::File, io::Write, path::Path};

use log::{debug, error, info};
use svg::{
    Document,
    node::element::{self as svg_element, Ellipse, Polygon, Rectangle},
};

use cyview_core::{
    apply_stroke,
    color::Color,
    draw::{Line, Primitive, TextLabel},
    geometry::Point,
    surface::{Scene, Surface},
};

use crate::{config::AppConfig, error::CanvasError};

/// Space added around the drawing, in pixels.
const DEFAULT_MARGIN: f32 = 20.0;
/// Vertical distance between label lines.
const LINE_HEIGHT: f32 = 14.0;
const FONT_SIZE: f32 = 12.0;

/// Writes a [`Scene`] as an SVG document.
///
/// # Examples
///
/// ```
/// use cyview::export::svg::SvgExporter;
/// use cyview_core::{
///     draw::{Line, Primitive, StrokeDefinition},
///     geometry::Point,
///     surface::{Scene, Surface},
/// };
///
/// let mut scene = Scene::new();
/// let line = Line::new(
///     vec![Point::new(0.0, 0.0), Point::new(40.0, 10.0)],
///     StrokeDefinition::default(),
/// )
/// .with_arrow();
/// scene.draw(Primitive::Line(line), vec![]);
///
/// let svg = SvgExporter::new().to_document(&scene).to_string();
/// assert!(svg.contains("marker-end"));
/// ```
#[derive(Debug, Clone)]
pub struct SvgExporter {
    margin: f32,
    background: Option<Color>,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self {
            margin: DEFAULT_MARGIN,
            background: None,
        }
    }
}

impl SvgExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exporter using the background color of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] if the background color is invalid.
    pub fn from_config(config: &AppConfig) -> Result<Self, CanvasError> {
        Ok(Self::new().with_background(config.style().background_color()?))
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    /// Builds the document for `scene`, items in z-order.
    pub fn to_document(&self, scene: &Scene) -> Document {
        let bounds = scene.bounds().unwrap_or_default().inset(-self.margin);
        debug!(
            items = scene.len(),
            width = bounds.width(),
            height = bounds.height();
            "Building SVG document"
        );

        let mut doc = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    bounds.min_x(),
                    bounds.min_y(),
                    bounds.width(),
                    bounds.height()
                ),
            )
            .set("width", bounds.width())
            .set("height", bounds.height());

        if let Some(background) = &self.background {
            doc = doc.add(
                Rectangle::new()
                    .set("x", bounds.min_x())
                    .set("y", bounds.min_y())
                    .set("width", bounds.width())
                    .set("height", bounds.height())
                    .set("fill", background),
            );
        }

        let lines = scene.items().iter().filter_map(|item| match item.primitive() {
            Primitive::Line(line) => Some(line),
            _ => None,
        });
        if let Some(defs) = arrows::create_marker_definitions(lines) {
            doc = doc.add(defs);
        }

        for item in scene.items() {
            doc = match item.primitive() {
                Primitive::Oval {
                    bounds,
                    fill,
                    stroke,
                } => {
                    let center = bounds.center();
                    let ellipse = Ellipse::new()
                        .set("cx", center.x())
                        .set("cy", center.y())
                        .set("rx", bounds.width() / 2.0)
                        .set("ry", bounds.height() / 2.0)
                        .set("fill", fill_value(fill.as_ref()));
                    doc.add(apply_stroke!(ellipse, stroke))
                }
                Primitive::Polygon {
                    points,
                    fill,
                    stroke,
                } => {
                    let polygon = Polygon::new()
                        .set("points", polygon_points(points))
                        .set("fill", fill_value(fill.as_ref()));
                    doc.add(apply_stroke!(polygon, stroke))
                }
                Primitive::Rectangle { bounds, stroke } => {
                    let rectangle = Rectangle::new()
                        .set("x", bounds.min_x())
                        .set("y", bounds.min_y())
                        .set("width", bounds.width())
                        .set("height", bounds.height())
                        .set("fill", "none");
                    doc.add(apply_stroke!(rectangle, stroke))
                }
                Primitive::Line(line) => doc.add(render_line(line)),
                Primitive::Text(label) => render_text(label)
                    .into_iter()
                    .fold(doc, |doc, text| doc.add(text)),
            };
        }
        doc
    }

    /// Writes `scene` as an SVG file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Io`] if the file cannot be created or written.
    pub fn write_to(&self, scene: &Scene, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        let path = path.as_ref();
        let doc = self.to_document(scene);
        info!(path = path.display().to_string(); "Creating SVG file");

        let mut file = File::create(path).inspect_err(|err| {
            error!(path = path.display().to_string(), err = err.to_string(); "Failed to create SVG file");
        })?;
        write!(file, "{doc}").inspect_err(|err| {
            error!(path = path.display().to_string(), err = err.to_string(); "Failed to write SVG content");
        })?;
        Ok(())
    }
}

fn fill_value(fill: Option<&Color>) -> String {
    fill.map_or_else(|| "none".to_string(), Color::to_string)
}

fn polygon_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x(), p.y()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Path data for a line.
///
/// Smoothed lines become a quadratic spline: straight to the midpoint of the
/// first segment, then one `Q` segment per interior control point ending at
/// the midpoint of the next segment, then straight to the last point.
fn path_data(line: &Line) -> String {
    let points = line.points();
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    let mut d = format!("M {} {}", first.x(), first.y());

    if !line.is_smooth() || points.len() < 3 {
        for p in rest {
            d.push_str(&format!(" L {} {}", p.x(), p.y()));
        }
        return d;
    }

    let start = points[0].midpoint(points[1]);
    d.push_str(&format!(" L {} {}", start.x(), start.y()));
    for pair in points[1..].windows(2) {
        let (control, next) = (pair[0], pair[1]);
        let end = control.midpoint(next);
        d.push_str(&format!(
            " Q {} {} {} {}",
            control.x(),
            control.y(),
            end.x(),
            end.y()
        ));
    }
    let last = points[points.len() - 1];
    d.push_str(&format!(" L {} {}", last.x(), last.y()));
    d
}

fn render_line(line: &Line) -> svg_element::Path {
    let mut path = svg_element::Path::new()
        .set("d", path_data(line))
        .set("fill", "none");
    if line.has_arrow() {
        path = path.set("marker-end", arrows::marker_url(&line.stroke().color()));
    }
    apply_stroke!(path, line.stroke())
}

fn render_text(label: &TextLabel) -> Vec<svg_element::Text> {
    let position = label.position();
    let count = label.lines().count() as f32;
    let top = position.y() - (count - 1.0) * LINE_HEIGHT / 2.0;

    label
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| {
            svg_element::Text::new(line)
                .set("x", position.x())
                .set("y", top + index as f32 * LINE_HEIGHT)
                .set("text-anchor", "middle")
                .set("dominant-baseline", "central")
                .set("font-size", FONT_SIZE)
                .set("fill", &label.color())
        })
        .collect()
}
