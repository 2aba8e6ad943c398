//! Drawable definitions for canvas projection.
//!
//! Everything the projector puts on a [`Surface`](crate::surface::Surface) is
//! a [`Primitive`]: ovals, polygons, rectangles, lines and text. Styles say how
//! nodes and edges look; [`ShapeKind`] says which outline a node gets.

mod primitive;
mod shape;
mod stroke;
mod style;

pub use primitive::{Line, Primitive, TextLabel};
pub use shape::ShapeKind;
pub use stroke::{StrokeCap, StrokeDefinition, StrokeStyle};
pub use style::{EdgeStyle, NodeStyle};
