//! JSON export of an evaluated arrangement.
//!
//! The document is a projection of a [`Solution`]: positions, path lengths and
//! objective values are copied as computed, never re-derived.

use serde::{Deserialize, Serialize};
use site_core::{ExportError, LayoutDataset};
use site_layout::Solution;

/// An exported arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub arrangement_id: u64,
    pub buildings: Vec<ExportBuilding>,
    pub paths: Vec<ExportPath>,
    /// The site area
    pub total_area: f64,
    pub objectives: ExportObjectives,
}

/// A placed building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBuilding {
    pub name: String,
    /// Lower-left corner
    pub location: [f64; 2],
    pub dimensions: [f64; 2],
}

/// A path with its computed length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPath {
    pub name: String,
    pub length: f64,
    pub connected_buildings: [String; 2],
}

/// Objective values of the arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportObjectives {
    /// Total path length
    pub objective_1: f64,
    /// Free site area
    pub objective_2: f64,
}

impl ExportDocument {
    /// Project a solution into an export document.
    ///
    /// Buildings and paths are listed in dataset order.
    pub fn from_solution(
        dataset: &LayoutDataset,
        solution: &Solution,
        arrangement_id: u64,
    ) -> Result<Self, ExportError> {
        let buildings = dataset
            .buildings()
            .iter()
            .map(|b| {
                let origin = solution.position(b.id).ok_or_else(|| ExportError::MissingPosition {
                    name: b.name.clone(),
                })?;
                Ok(ExportBuilding {
                    name: b.name.clone(),
                    location: [origin.x, origin.y],
                    dimensions: b.dimensions.into(),
                })
            })
            .collect::<Result<Vec<_>, ExportError>>()?;

        let mut paths = Vec::with_capacity(dataset.connections().len());
        for connection in dataset.connections() {
            let [a, b] = connection.between.map(|id| {
                dataset
                    .building(id)
                    .map(|b| b.name.clone())
                    .unwrap_or_else(|| id.to_string())
            });
            let length = solution
                .path_length(connection)
                .ok_or_else(|| ExportError::MissingPosition { name: a.clone() })?;
            paths.push(ExportPath {
                name: connection.name.clone(),
                length,
                connected_buildings: [a, b],
            });
        }

        Ok(Self {
            arrangement_id,
            buildings,
            paths,
            total_area: dataset.site_area(),
            objectives: ExportObjectives {
                objective_1: solution.total_distance_paths(),
                objective_2: solution.free_area(),
            },
        })
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(|e| ExportError::Serialize {
            reason: e.to_string(),
        })
    }

    /// Parse a previously exported document.
    pub fn from_json(input: &str) -> Result<Self, ExportError> {
        serde_json::from_str(input).map_err(|e| ExportError::Serialize {
            reason: e.to_string(),
        })
    }
}
