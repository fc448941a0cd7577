//! Wire representation of the dataset document.

use serde::Deserialize;
use site_core::{
    DatasetBuilder, DatasetError, DatasetOptions, Dimensions, LayoutDataset, Objective, PathSpec,
};

/// Top-level dataset document.
///
/// Missing lists are treated as empty. `site_area` is optional and derived
/// from the building footprints when absent.
#[derive(Debug, Deserialize)]
pub(crate) struct DatasetDocument {
    #[serde(default)]
    buildings: Vec<BuildingEntry>,
    #[serde(default)]
    paths: Vec<PathEntry>,
    #[serde(default)]
    objectives: Vec<Objective>,
    #[serde(default)]
    site_area: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct BuildingEntry {
    name: String,
    #[serde(rename = "type")]
    building_type: String,
    dimensions: Dimensions,
}

#[derive(Debug, Deserialize)]
struct PathEntry {
    name: String,
    between: [String; 2],
    width: f64,
    min_length: f64,
    max_length: f64,
    #[serde(rename = "type")]
    path_type: String,
}

impl DatasetDocument {
    /// Resolve names and assemble the dataset.
    pub(crate) fn into_dataset(self, options: DatasetOptions) -> Result<LayoutDataset, DatasetError> {
        let mut builder = DatasetBuilder::with_options(options).site_area(self.site_area);

        for entry in self.buildings {
            builder.add_building(entry.name, entry.building_type, entry.dimensions)?;
        }

        for entry in self.paths {
            let [from, to] = entry.between;
            let spec = PathSpec::new(entry.name, from, to)
                .with_width(entry.width)
                .with_lengths(entry.min_length, entry.max_length)
                .with_type(entry.path_type);
            builder.add_path(spec)?;
        }

        for objective in self.objectives {
            builder.add_objective(objective.name, objective.description);
        }

        Ok(builder.build())
    }
}
