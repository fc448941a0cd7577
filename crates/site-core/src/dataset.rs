//! The layout dataset: buildings, the paths connecting them, and the site.
//!
//! A [`LayoutDataset`] can only be assembled through a [`DatasetBuilder`],
//! which resolves path endpoints by building name and checks the model's
//! invariants. The name index lives in the builder and is dropped with it.

use std::collections::HashMap;

use crate::errors::DatasetError;
use crate::types::{BuildingId, Dimensions};

/// Multiplier applied to the total building footprint when a dataset does
/// not declare its site area.
pub const DEFAULT_FILL_FACTOR: f64 = 4.0;

/// A rectangular building to be placed on the site.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub building_type: String,
    pub dimensions: Dimensions,
}

impl Building {
    /// Footprint area of the building.
    pub fn area(&self) -> f64 {
        self.dimensions.area()
    }

    pub fn width(&self) -> f64 {
        self.dimensions.width
    }

    pub fn height(&self) -> f64 {
        self.dimensions.height
    }
}

/// A path connecting two buildings.
///
/// The endpoint order carries no direction; it only matters for choosing a
/// partner when both endpoints are the same building.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub name: String,
    pub between: [BuildingId; 2],
    pub width: f64,
    /// Minimum clearance between the connected buildings
    pub min_length: f64,
    pub max_length: f64,
    pub path_type: String,
}

impl Connection {
    /// Whether `id` is one of the endpoints.
    pub fn touches(&self, id: BuildingId) -> bool {
        self.between.contains(&id)
    }

    /// The endpoint opposite to `id`.
    ///
    /// Returns the first endpoint when the second one is `id`, otherwise the
    /// second endpoint.
    pub fn partner_of(&self, id: BuildingId) -> BuildingId {
        if self.between[1] == id {
            self.between[0]
        } else {
            self.between[1]
        }
    }
}

/// A named design objective. Carried through to exports untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Objective {
    pub name: String,
    pub description: String,
}

/// Options for dataset construction.
#[derive(Debug, Clone)]
pub struct DatasetOptions {
    /// Site area as a multiple of the total building footprint, used when no
    /// explicit site area is given
    pub fill_factor: f64,
}

impl Default for DatasetOptions {
    fn default() -> Self {
        Self {
            fill_factor: DEFAULT_FILL_FACTOR,
        }
    }
}

/// All buildings, paths and objectives of one site.
///
/// Every connection endpoint refers to a building of the same dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutDataset {
    buildings: Vec<Building>,
    connections: Vec<Connection>,
    objectives: Vec<Objective>,
    site_area: f64,
    site_area_derived: bool,
}

impl LayoutDataset {
    /// Buildings in declaration order.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Paths in declaration order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    /// Total developable area of the site.
    pub fn site_area(&self) -> f64 {
        self.site_area
    }

    /// Whether the site area was derived from the building footprints.
    pub fn site_area_derived(&self) -> bool {
        self.site_area_derived
    }

    /// Get a building by ID.
    pub fn building(&self, id: BuildingId) -> Option<&Building> {
        // Ids are dense and 1-based.
        let index = (id.0 as usize).checked_sub(1)?;
        self.buildings.get(index).filter(|b| b.id == id)
    }

    /// Get a building by name.
    pub fn building_by_name(&self, name: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.name == name)
    }

    /// Sum of all building footprints.
    pub fn total_building_area(&self) -> f64 {
        self.buildings.iter().fold(0.0, |acc, b| acc + b.area())
    }

    /// Number of buildings.
    pub fn len(&self) -> usize {
        self.buildings.len()
    }

    /// Check if the dataset has no buildings.
    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty()
    }
}

/// Description of a path whose endpoints are given by building name.
#[derive(Debug, Clone, PartialEq)]
pub struct PathSpec {
    pub name: String,
    pub between: [String; 2],
    pub width: f64,
    pub min_length: f64,
    pub max_length: f64,
    pub path_type: String,
}

impl PathSpec {
    /// Create a zero-width, zero-length path between two named buildings.
    pub fn new(name: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            between: [from.into(), to.into()],
            width: 0.0,
            min_length: 0.0,
            max_length: 0.0,
            path_type: String::new(),
        }
    }

    /// Set the minimum and maximum length.
    pub fn with_lengths(mut self, min_length: f64, max_length: f64) -> Self {
        self.min_length = min_length;
        self.max_length = max_length;
        self
    }

    /// Set the path width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Set the path category.
    pub fn with_type(mut self, path_type: impl Into<String>) -> Self {
        self.path_type = path_type.into();
        self
    }
}

/// Builder for creating layout datasets.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    options: DatasetOptions,
    buildings: Vec<Building>,
    names: HashMap<String, BuildingId>,
    connections: Vec<Connection>,
    objectives: Vec<Objective>,
    site_area: Option<f64>,
}

impl DatasetBuilder {
    /// Create an empty builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder with custom options.
    pub fn with_options(options: DatasetOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Declare the site area explicitly instead of deriving it.
    pub fn site_area(mut self, site_area: Option<f64>) -> Self {
        self.site_area = site_area;
        self
    }

    /// Add a building and return its assigned ID.
    pub fn add_building(
        &mut self,
        name: impl Into<String>,
        building_type: impl Into<String>,
        dimensions: impl Into<Dimensions>,
    ) -> Result<BuildingId, DatasetError> {
        let name = name.into();
        let dimensions = dimensions.into();

        if self.names.contains_key(&name) {
            return Err(DatasetError::DuplicateBuilding { name });
        }
        if !dimensions.is_valid() {
            return Err(DatasetError::InvalidDimensions {
                name,
                width: dimensions.width,
                height: dimensions.height,
            });
        }

        let id = BuildingId(self.buildings.len() as u32 + 1);
        self.names.insert(name.clone(), id);
        self.buildings.push(Building {
            id,
            name,
            building_type: building_type.into(),
            dimensions,
        });
        Ok(id)
    }

    /// Add a path, resolving its endpoints among the buildings added so far.
    pub fn add_path(&mut self, spec: PathSpec) -> Result<(), DatasetError> {
        let PathSpec {
            name,
            between: [from, to],
            width,
            min_length,
            max_length,
            path_type,
        } = spec;

        if !(min_length >= 0.0 && min_length <= max_length && max_length.is_finite()) {
            return Err(DatasetError::InvalidPathLength {
                name,
                min_length,
                max_length,
            });
        }

        let a = self.resolve(&name, from)?;
        let b = self.resolve(&name, to)?;

        self.connections.push(Connection {
            name,
            between: [a, b],
            width,
            min_length,
            max_length,
            path_type,
        });
        Ok(())
    }

    /// Add an objective.
    pub fn add_objective(&mut self, name: impl Into<String>, description: impl Into<String>) {
        self.objectives.push(Objective {
            name: name.into(),
            description: description.into(),
        });
    }

    /// Finish the dataset, deriving the site area if none was declared.
    pub fn build(self) -> LayoutDataset {
        let (site_area, site_area_derived) = match self.site_area {
            Some(area) => (area, false),
            None => {
                let total = self.buildings.iter().fold(0.0, |acc, b| acc + b.area());
                (self.options.fill_factor * total, true)
            }
        };

        LayoutDataset {
            buildings: self.buildings,
            connections: self.connections,
            objectives: self.objectives,
            site_area,
            site_area_derived,
        }
    }

    fn resolve(&self, path: &str, building: String) -> Result<BuildingId, DatasetError> {
        self.names
            .get(&building)
            .copied()
            .ok_or_else(|| DatasetError::UnknownBuilding {
                path: path.to_string(),
                building,
            })
    }
}
