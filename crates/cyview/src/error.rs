//! Error types for cyview operations.
//!
//! This module provides the main error type [`CanvasError`], covering
//! malformed layout input, rendering failures and configuration problems.

use std::io;

use thiserror::Error;

use cyview_core::identifier::ElementId;

/// The main error type for cyview operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("element `{element}` is missing required field `{field}`")]
    MissingField { element: String, field: &'static str },

    #[error("element `{element}` has malformed geometry: {reason}")]
    MalformedGeometry { element: String, reason: String },

    #[error("unknown element group `{0}`")]
    UnknownGroup(String),

    #[error("node `{element}` has an unknown shape: {reason}")]
    UnknownShape { element: ElementId, reason: String },

    #[error("duplicate element identifier `{0}`")]
    DuplicateId(ElementId),

    #[error("element `{element}` refers to an object already drawn as `{existing}`")]
    DuplicateObject {
        element: ElementId,
        existing: ElementId,
    },

    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CanvasError {
    pub(crate) fn missing(element: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            element: element.into(),
            field,
        }
    }

    pub(crate) fn malformed(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedGeometry {
            element: element.into(),
            reason: reason.into(),
        }
    }
}
