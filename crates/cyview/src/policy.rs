//! Collaborator seams of the canvas.
//!
//! The canvas does not know what the logical objects behind nodes and edges
//! mean. Two policies supply that knowledge:
//!
//! - [`StylePolicy`] decides how each node and edge looks.
//! - [`ActionPolicy`] decides which menu actions a click on a node or edge
//!   offers.

use std::fmt;

use cyview_core::{
    color::Color,
    draw::{EdgeStyle, NodeStyle, StrokeDefinition},
};

use crate::{
    config::StyleConfig,
    element::{EdgeElement, NodeElement},
    error::CanvasError,
    menu::Action,
};

/// Mouse button that triggered a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Decides the visual style of nodes and edges.
pub trait StylePolicy<N, E> {
    fn node_style(&self, node: &NodeElement<N>) -> NodeStyle;

    fn edge_style(&self, edge: &EdgeElement<E>) -> EdgeStyle;
}

/// Supplies the menu actions offered for a clicked node or edge.
///
/// An empty list means the click does nothing. A list holding exactly one
/// action built with [`Action::default_command`] runs that action directly
/// without showing a menu.
pub trait ActionPolicy {
    type Node;
    type Edge;

    fn node_actions(&self, node: &Self::Node, button: MouseButton) -> Vec<Action<Self::Node>>;

    fn edge_actions(&self, edge: &Self::Edge, button: MouseButton) -> Vec<Action<Self::Edge>>;
}

/// Style policy driven by [`StyleConfig`].
///
/// Every node gets the same outline and fill; nodes carrying one of the
/// configured double-border classes get a second, inset outline.
#[derive(Debug, Clone)]
pub struct ConfiguredStyle {
    node_fill: Option<Color>,
    node_stroke: StrokeDefinition,
    edge_stroke: StrokeDefinition,
    text_color: Color,
    double_border_gap: f32,
    double_border_classes: Vec<String>,
}

impl ConfiguredStyle {
    /// Builds the policy, validating every configured color.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::Config`] if a color cannot be parsed.
    pub fn from_config(config: &StyleConfig) -> Result<Self, CanvasError> {
        Ok(Self {
            node_fill: config.node_fill()?,
            node_stroke: StrokeDefinition::solid(config.node_outline()?, config.node_line_width()),
            edge_stroke: StrokeDefinition::new(config.edge_color()?, config.edge_line_width())
                .with_style(config.edge_style()?),
            text_color: config.text_color()?,
            double_border_gap: config.double_border_gap(),
            double_border_classes: config.double_border_classes().to_vec(),
        })
    }

    fn has_double_border<N>(&self, node: &NodeElement<N>) -> bool {
        self.double_border_classes
            .iter()
            .any(|class| node.has_class(class))
    }
}

impl<N, E> StylePolicy<N, E> for ConfiguredStyle {
    fn node_style(&self, node: &NodeElement<N>) -> NodeStyle {
        let double_border = self
            .has_double_border(node)
            .then_some(self.double_border_gap);
        NodeStyle::new(self.node_stroke.clone())
            .with_fill(self.node_fill)
            .with_double_border(double_border)
            .with_text_color(self.text_color)
    }

    fn edge_style(&self, _edge: &EdgeElement<E>) -> EdgeStyle {
        EdgeStyle::new(self.edge_stroke.clone()).with_text_color(self.text_color)
    }
}

#[cfg(test)]
mod tests {
    use cyview_core::{
        draw::StrokeStyle,
        geometry::{Point, Size},
        identifier::ElementId,
    };

    use super::*;
    use crate::config::AppConfig;

    fn node(classes: &str) -> NodeElement<()> {
        NodeElement::new(
            ElementId::new("n0"),
            "ellipse",
            Point::default(),
            Size::new(40.0, 20.0),
            (),
        )
        .with_classes(classes)
    }

    #[test]
    fn test_double_border_for_configured_classes() {
        let style = ConfiguredStyle::from_config(AppConfig::default().style()).unwrap();

        let plain = StylePolicy::<(), ()>::node_style(&style, &node(""));
        let initial = StylePolicy::<(), ()>::node_style(&style, &node("initial"));
        let both = StylePolicy::<(), ()>::node_style(&style, &node("accepting initial"));

        assert_eq!(plain.double_border(), None);
        assert_eq!(initial.double_border(), Some(4.0));
        assert_eq!(both.double_border(), Some(4.0));
    }

    #[test]
    fn test_configured_colors_are_used() {
        let config = AppConfig::from_toml_str(
            r#"
            [style]
            node_fill = "lightyellow"
            edge_color = "red"
            edge_line_width = 2.0
            "#,
        )
        .unwrap();
        let style = ConfiguredStyle::from_config(config.style()).unwrap();

        let node_style = StylePolicy::<(), ()>::node_style(&style, &node(""));
        assert!(node_style.fill().is_some());

        let edge = EdgeElement::new(
            ElementId::new("e0"),
            vec![Point::default(), Point::new(1.0, 1.0)],
            crate::element::ArrowTip::End(Point::new(2.0, 2.0)),
            (),
        )
        .unwrap();
        let edge_style = StylePolicy::<(), ()>::edge_style(&style, &edge);
        assert_eq!(edge_style.stroke().width(), 2.0);
        assert_eq!(edge_style.stroke().color(), Color::new("red").unwrap());
        assert_eq!(*edge_style.stroke().style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_configured_edge_style() {
        let config = AppConfig::from_toml_str("[style]\nedge_style = \"dashed\"").unwrap();
        let style = ConfiguredStyle::from_config(config.style()).unwrap();

        let edge = EdgeElement::new(
            ElementId::new("e0"),
            vec![Point::default(), Point::new(1.0, 1.0)],
            crate::element::ArrowTip::End(Point::new(2.0, 2.0)),
            (),
        )
        .unwrap();
        let edge_style = StylePolicy::<(), ()>::edge_style(&style, &edge);
        assert_eq!(*edge_style.stroke().style(), StrokeStyle::Dashed);

        let config = AppConfig::from_toml_str("[style]\nedge_style = \"zigzag\"").unwrap();
        let err = ConfiguredStyle::from_config(config.style()).unwrap_err();
        assert!(err.to_string().contains("edge_style"));
    }

    #[test]
    fn test_invalid_color_fails_construction() {
        let config = AppConfig::from_toml_str("[style]\ntext_color = \"nope\"").unwrap();
        assert!(ConfiguredStyle::from_config(config.style()).is_err());
    }

    #[test]
    fn test_mouse_button_display() {
        assert_eq!(MouseButton::Left.to_string(), "left");
        assert_eq!(MouseButton::Right.to_string(), "right");
    }
}
