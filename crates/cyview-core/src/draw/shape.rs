//! Node outline kinds.

use std::str::FromStr;

use crate::{
    draw::{NodeStyle, Primitive},
    geometry::{Bounds, octagon_points},
};

/// Outline drawn for a node.
///
/// Layout engines name shapes with strings; [`ShapeKind::from_str`] resolves
/// the names this crate knows how to draw and rejects everything else.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use cyview_core::draw::ShapeKind;
///
/// assert_eq!(ShapeKind::from_str("oval"), Ok(ShapeKind::Ellipse));
/// assert_eq!(ShapeKind::from_str("octagon"), Ok(ShapeKind::Octagon));
/// assert!(ShapeKind::from_str("hexagon").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Ellipse,
    Octagon,
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ellipse" | "oval" => Ok(Self::Ellipse),
            "octagon" => Ok(Self::Octagon),
            _ => Err(format!(
                "invalid shape `{s}`, valid values: ellipse, oval, octagon"
            )),
        }
    }
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Ellipse => "ellipse",
            Self::Octagon => "octagon",
        }
    }

    /// Single outline of this kind filling `bounds`.
    pub fn outline(self, bounds: Bounds, style: &NodeStyle) -> Primitive {
        let fill = style.fill();
        let stroke = style.stroke().clone();
        match self {
            Self::Ellipse => Primitive::Oval {
                bounds,
                fill,
                stroke,
            },
            Self::Octagon => Primitive::Polygon {
                points: octagon_points(bounds).to_vec(),
                fill,
                stroke,
            },
        }
    }

    /// Outer outline followed by the inset copy when the style asks for a
    /// double border.
    ///
    /// Both outlines carry the node fill, so the inset copy goes on top;
    /// drawn first, it would be painted over by the outer one.
    pub fn outlines(self, bounds: Bounds, style: &NodeStyle) -> Vec<Primitive> {
        let mut outlines = vec![self.outline(bounds, style)];
        if let Some(gap) = style.double_border() {
            outlines.push(self.outline(bounds.inset(gap), style));
        }
        outlines
    }
}
