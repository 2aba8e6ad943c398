//! Node and edge styles handed out by a style policy.

use crate::{color::Color, draw::StrokeDefinition};

/// How a node outline and its label are drawn.
///
/// `double_border` asks for a second copy of the outline inset by the given
/// number of pixels; it marks distinguished nodes such as initial or
/// accepting states.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeStyle {
    fill: Option<Color>,
    stroke: StrokeDefinition,
    double_border: Option<f32>,
    text_color: Color,
}

impl NodeStyle {
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self {
            stroke,
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, fill: Option<Color>) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_double_border(mut self, gap: Option<f32>) -> Self {
        self.double_border = gap;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn fill(&self) -> Option<Color> {
        self.fill
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn double_border(&self) -> Option<f32> {
        self.double_border
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }
}

/// How an edge curve, its arrow and its label are drawn.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EdgeStyle {
    stroke: StrokeDefinition,
    text_color: Color,
}

impl EdgeStyle {
    pub fn new(stroke: StrokeDefinition) -> Self {
        Self {
            stroke,
            text_color: Color::default(),
        }
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }
}
