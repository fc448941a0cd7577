//! Export formats for site layouts.
//!
//! Supported formats:
//! - JSON (arrangement exchange document)
//! - SVG (2D drawing of the site and its buildings)

pub mod json;

#[cfg(feature = "svg")]
pub mod svg;

use std::path::Path;

use site_core::{ExportError, LayoutDataset};
use site_layout::Solution;

// Re-export commonly used types
pub use json::{ExportBuilding, ExportDocument, ExportObjectives, ExportPath};
#[cfg(feature = "svg")]
pub use svg::{Color, SvgOptions};

/// Export a solution to a pretty-printed JSON string.
pub fn export_json(
    dataset: &LayoutDataset,
    solution: &Solution,
    arrangement_id: u64,
) -> Result<String, ExportError> {
    ExportDocument::from_solution(dataset, solution, arrangement_id)?.to_json()
}

/// Export a solution to a JSON file.
pub fn write_json(
    path: impl AsRef<Path>,
    dataset: &LayoutDataset,
    solution: &Solution,
    arrangement_id: u64,
) -> Result<(), ExportError> {
    let json = export_json(dataset, solution, arrangement_id)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Render a solution to an SVG string.
#[cfg(feature = "svg")]
pub fn render_svg(dataset: &LayoutDataset, solution: &Solution, options: &SvgOptions) -> String {
    svg::render(dataset, solution, options)
}

/// Render a solution to an SVG file.
#[cfg(feature = "svg")]
pub fn write_svg(
    path: impl AsRef<Path>,
    dataset: &LayoutDataset,
    solution: &Solution,
    options: &SvgOptions,
) -> Result<(), ExportError> {
    std::fs::write(path, svg::render(dataset, solution, options))?;
    Ok(())
}
