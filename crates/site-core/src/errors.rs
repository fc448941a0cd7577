//! Error types for the site layout engine.

use crate::types::BuildingId;
use thiserror::Error;

/// Top-level error type for the site layout engine.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors while assembling a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Path '{path}' references unknown building '{building}'")]
    UnknownBuilding { path: String, building: String },

    #[error("Duplicate building name: {name}")]
    DuplicateBuilding { name: String },

    #[error("Invalid dimensions for building '{name}': {width} x {height}")]
    InvalidDimensions { name: String, width: f64, height: f64 },

    #[error("Invalid length bounds for path '{name}': min {min_length}, max {max_length}")]
    InvalidPathLength {
        name: String,
        min_length: f64,
        max_length: f64,
    },
}

/// Errors while loading a dataset document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error while loading dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset document: {reason}")]
    Malformed { reason: String },

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Errors during layout evaluation.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Building {id} is not part of the layout order")]
    UnknownBuilding { id: BuildingId },

    #[error("No position assigned to building {id}")]
    MissingPosition { id: BuildingId },
}

/// Errors during export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error during export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {reason}")]
    Serialize { reason: String },

    #[error("No position assigned to building '{name}'")]
    MissingPosition { name: String },
}
