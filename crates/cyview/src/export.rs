//! Exporting rendered scenes.
//!
//! A [`Scene`](cyview_core::surface::Scene) is the toolkit-independent record
//! of what the canvas drew. Exporters turn it into files, so a projected
//! graph can be inspected without an interactive surface.

pub mod svg;
