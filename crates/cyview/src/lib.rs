//! cyview - Interactive projection of laid-out graphs.
//!
//! A layout engine positions the nodes and edges of a graph; cyview draws the
//! result on an interactive surface and keeps track of which drawn items
//! belong to which logical object, so clicks can be answered with
//! context-menu actions.
//!
//! - [`element`] - Laid-out elements and their JSON loader.
//! - [`canvas`] - The projector: rendering, id maps, edge highlighting and
//!   click resolution.
//! - [`router`] - Turning clicks into menu actions.
//! - [`policy`] - Style and action policies supplied by the embedding
//!   application.
//! - [`menu`] - Actions, popup menus and the menu host seam.
//! - [`export`] - SVG export of rendered scenes.
//!
//! # Examples
//!
//! ```
//! use cyview::{canvas::Canvas, config::AppConfig, element::ElementSet};
//! use cyview_core::surface::Scene;
//!
//! let json = r#"[
//!   {"group": "nodes", "data": {"id": "n0", "obj": "s0", "label": "s0",
//!    "shape": "ellipse", "width": 54, "height": 36},
//!    "position": {"x": 27, "y": 18}},
//!   {"group": "nodes", "data": {"id": "n1", "obj": "s1", "label": "s1",
//!    "shape": "ellipse", "width": 54, "height": 36},
//!    "position": {"x": 127, "y": 18}},
//!   {"group": "edges", "data": {"id": "e0", "obj": "s0->s1", "label": "go",
//!    "bspline": [{"x": 54, "y": 18}, {"x": 70, "y": 18}, {"x": 85, "y": 18}, {"x": 96, "y": 18}],
//!    "arrowend": {"x": 100, "y": 18}, "lp": {"x": 77, "y": 10}}}
//! ]"#;
//! let set = ElementSet::<String, String>::from_json(json).unwrap();
//!
//! let mut canvas = Canvas::new(Scene::new(), &AppConfig::default()).unwrap();
//! canvas.render(&set).unwrap();
//!
//! let edge = canvas.edge_id(&"s0->s1".to_string()).unwrap();
//! assert!(canvas.highlight(edge, true));
//!
//! let svg = cyview::render_svg(&set, &AppConfig::default()).unwrap();
//! assert!(svg.contains("<ellipse"));
//! ```

pub mod canvas;
pub mod config;
pub mod element;
pub mod export;
pub mod label;
pub mod menu;
pub mod policy;
pub mod router;

mod error;

pub use cyview_core::{color, draw, geometry, identifier, surface};

pub use error::CanvasError;

use std::hash::Hash;

use log::info;

use canvas::Canvas;
use config::AppConfig;
use cyview_core::surface::Scene;
use element::ElementSet;
use export::svg::SvgExporter;

/// Renders `set` on a fresh [`Scene`] and returns it as an SVG document.
///
/// # Errors
///
/// Returns any error [`Canvas::render`] reports, or [`CanvasError::Config`]
/// if `config` holds an invalid color.
pub fn render_svg<N, E>(set: &ElementSet<N, E>, config: &AppConfig) -> Result<String, CanvasError>
where
    N: Clone + Eq + Hash + 'static,
    E: Clone + Eq + Hash + 'static,
{
    let mut canvas = Canvas::new(Scene::new(), config)?;
    canvas.render(set)?;
    let doc = SvgExporter::from_config(config)?.to_document(canvas.surface());
    info!(elements = set.len(); "SVG rendered");
    Ok(doc.to_string())
}
