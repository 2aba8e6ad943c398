//! Configuration types for canvas rendering.
//!
//! All types implement [`serde::Deserialize`] and every field has a default,
//! so a configuration file only needs the keys it wants to change.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`StyleConfig`] - Colors and widths used by [`ConfiguredStyle`](crate::policy::ConfiguredStyle).
//! - [`HighlightConfig`] - Look of edge highlight overlays.
//! - [`Transform`] - Layout-to-surface coordinate mapping.
//!
//! # Example
//!
//! ```
//! # use cyview::config::AppConfig;
//! let config = AppConfig::from_toml_str(r#"
//!     [style]
//!     node_fill = "lightyellow"
//!
//!     [highlight]
//!     width = 8.0
//! "#).unwrap();
//! assert_eq!(config.highlight().width(), 8.0);
//! assert!(config.style().background_color().unwrap().is_none());
//! ```

use std::{fs, path::Path, str::FromStr};

use log::info;
use serde::Deserialize;

use cyview_core::{color::Color, draw::StrokeStyle, geometry::Transform};

use crate::error::CanvasError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    highlight: HighlightConfig,

    #[serde(default)]
    transform: Transform,
}

impl AppConfig {
    pub fn new(style: StyleConfig, highlight: HighlightConfig, transform: Transform) -> Self {
        Self {
            style,
            highlight,
            transform,
        }
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] if the document is not valid TOML or
    /// does not match the configuration schema.
    pub fn from_toml_str(content: &str) -> Result<Self, CanvasError> {
        toml::from_str(content).map_err(|err| CanvasError::Config(err.to_string()))
    }

    /// Loads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Io`] if the file cannot be read and
    /// [`CanvasError::Config`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CanvasError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn highlight(&self) -> &HighlightConfig {
        &self.highlight
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }
}

fn parse_color(value: &str, key: &str) -> Result<Color, CanvasError> {
    Color::new(value).map_err(|err| CanvasError::Config(format!("invalid `{key}`: {err}")))
}

/// Colors and widths of nodes and edges.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Node interior color; unfilled when absent.
    node_fill: Option<String>,
    node_outline: String,
    node_line_width: f32,
    /// Inset of the second outline drawn for double-bordered nodes.
    double_border_gap: f32,
    /// Node classes that get a double border.
    double_border_classes: Vec<String>,
    edge_color: String,
    edge_line_width: f32,
    /// `solid`, `dashed`, `dotted` or a dash pattern such as `"6,2"`.
    edge_style: String,
    text_color: String,
    background_color: Option<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            node_fill: None,
            node_outline: "black".to_string(),
            node_line_width: 1.0,
            double_border_gap: 4.0,
            double_border_classes: vec!["initial".to_string(), "accepting".to_string()],
            edge_color: "black".to_string(),
            edge_line_width: 1.0,
            edge_style: "solid".to_string(),
            text_color: "black".to_string(),
            background_color: None,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed node fill color, if one is configured.
    pub fn node_fill(&self) -> Result<Option<Color>, CanvasError> {
        self.node_fill
            .as_deref()
            .map(|fill| parse_color(fill, "node_fill"))
            .transpose()
    }

    pub fn node_outline(&self) -> Result<Color, CanvasError> {
        parse_color(&self.node_outline, "node_outline")
    }

    pub fn node_line_width(&self) -> f32 {
        self.node_line_width
    }

    pub fn double_border_gap(&self) -> f32 {
        self.double_border_gap
    }

    pub fn double_border_classes(&self) -> &[String] {
        &self.double_border_classes
    }

    pub fn edge_color(&self) -> Result<Color, CanvasError> {
        parse_color(&self.edge_color, "edge_color")
    }

    pub fn edge_line_width(&self) -> f32 {
        self.edge_line_width
    }

    /// Returns the parsed edge line pattern.
    pub fn edge_style(&self) -> Result<StrokeStyle, CanvasError> {
        StrokeStyle::from_str(&self.edge_style)
            .map_err(|err| CanvasError::Config(format!("invalid `edge_style`: {err}")))
    }

    pub fn text_color(&self) -> Result<Color, CanvasError> {
        parse_color(&self.text_color, "text_color")
    }

    /// Returns the parsed background color, or `None` if none is configured.
    pub fn background_color(&self) -> Result<Option<Color>, CanvasError> {
        self.background_color
            .as_deref()
            .map(|color| parse_color(color, "background_color"))
            .transpose()
    }
}

/// Look of the overlay drawn under highlighted edges.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    color: String,
    width: f32,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            color: "gray".to_string(),
            width: 6.0,
        }
    }
}

impl HighlightConfig {
    pub fn color(&self) -> Result<Color, CanvasError> {
        parse_color(&self.color, "highlight.color")
    }

    pub fn width(&self) -> f32 {
        self.width
    }
}
