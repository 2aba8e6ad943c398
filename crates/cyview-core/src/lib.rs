//! cyview Core Types and Definitions
//!
//! This crate provides the foundational types used to put a laid-out graph
//! on a drawing surface. It includes:
//!
//! - **Identifiers**: String-interned element identifiers ([`identifier::ElementId`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and coordinate transforms ([`geometry`] module)
//! - **Draw**: Strokes, styles, shape kinds and drawable primitives ([`draw`] module)
//! - **Surface**: The drawing-surface seam and the retained [`surface::Scene`]

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
pub mod surface;
