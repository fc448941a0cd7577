//! The solution record: one evaluated placement.

use glam::DVec2;
use indexmap::IndexMap;
use site_core::{Building, BuildingId, Connection, LayoutDataset};

use crate::bounds::Bounds;
use crate::metrics::{AreaMetrics, DistanceMatrix};

/// Lower-left origin of every placed building, keyed by building id.
pub type Positions = IndexMap<BuildingId, DVec2>;

/// An evaluated placement of a dataset's buildings.
///
/// Solutions are never modified after construction; placement steps always
/// return a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Building ids in matrix order (descending area)
    order: Vec<BuildingId>,
    positions: Positions,
    distance_matrix: DistanceMatrix,
    total_distance_paths: f64,
    area: AreaMetrics,
}

impl Solution {
    pub(crate) fn new(
        order: Vec<BuildingId>,
        positions: Positions,
        distance_matrix: DistanceMatrix,
        total_distance_paths: f64,
        area: AreaMetrics,
    ) -> Self {
        Self {
            order,
            positions,
            distance_matrix,
            total_distance_paths,
            area,
        }
    }

    /// All placed origins.
    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    /// Get the origin of a building.
    pub fn position(&self, id: BuildingId) -> Option<DVec2> {
        self.positions.get(&id).copied()
    }

    /// Building ids in the order that indexes the distance matrix.
    pub fn order(&self) -> &[BuildingId] {
        &self.order
    }

    /// Matrix index of a building.
    pub fn index_of(&self, id: BuildingId) -> Option<usize> {
        self.order.iter().position(|&b| b == id)
    }

    pub fn distance_matrix(&self) -> &DistanceMatrix {
        &self.distance_matrix
    }

    /// Center-to-center distance between two buildings.
    pub fn distance_between(&self, a: BuildingId, b: BuildingId) -> Option<f64> {
        self.distance_matrix.get(self.index_of(a)?, self.index_of(b)?)
    }

    /// Length of a path, measured between its endpoint centers.
    pub fn path_length(&self, connection: &Connection) -> Option<f64> {
        let [a, b] = connection.between;
        self.distance_between(a, b)
    }

    /// Sum of all path lengths (first objective).
    pub fn total_distance_paths(&self) -> f64 {
        self.total_distance_paths
    }

    pub fn used_area(&self) -> f64 {
        self.area.used_area
    }

    /// Unused site area (second objective).
    pub fn free_area(&self) -> f64 {
        self.area.free_area
    }

    pub fn utilization_factor(&self) -> f64 {
        self.area.utilization_factor
    }

    /// Placed footprint of a building, if it has a position.
    pub fn bounds(&self, building: &Building) -> Option<Bounds> {
        self.position(building.id)
            .map(|origin| Bounds::of_building(building, origin))
    }

    /// Bounding box of every placed building.
    pub fn content_bounds(&self, dataset: &LayoutDataset) -> Option<Bounds> {
        dataset
            .buildings()
            .iter()
            .filter_map(|b| self.bounds(b))
            .reduce(|acc, b| acc.union(&b))
    }

    /// Pairs of buildings whose footprints overlap, in dataset order.
    pub fn overlaps(&self, dataset: &LayoutDataset) -> Vec<(BuildingId, BuildingId)> {
        let placed: Vec<(BuildingId, Bounds)> = dataset
            .buildings()
            .iter()
            .filter_map(|b| self.bounds(b).map(|bounds| (b.id, bounds)))
            .collect();

        let mut pairs = Vec::new();
        for (i, (a, a_bounds)) in placed.iter().enumerate() {
            for (b, b_bounds) in &placed[i + 1..] {
                if a_bounds.overlaps(b_bounds) {
                    pairs.push((*a, *b));
                }
            }
        }
        pairs
    }
}
