//! Geometry and metrics kernel.
//!
//! All functions here are pure. They take buildings in a fixed order (the
//! order that indexes the distance matrix) plus a position per building id.

use std::cmp::Ordering;
use std::ops::Index;

use glam::DVec2;
use site_core::{Building, BuildingId, Connection, LayoutDataset, LayoutError};

use crate::bounds::Bounds;
use crate::solution::{Positions, Solution};

/// Buildings sorted by footprint area, largest first.
///
/// The sort is stable: buildings of equal area keep their dataset order.
/// `-0.0` and `0.0` compare equal. Both placement steps index their distance
/// matrices by this order.
pub fn order_by_area(buildings: &[Building]) -> Vec<&Building> {
    let mut order: Vec<&Building> = buildings.iter().collect();
    // Areas are finite once a dataset is built.
    order.sort_by(|a, b| b.area().partial_cmp(&a.area()).unwrap_or(Ordering::Equal));
    order
}

/// Square matrix of center-to-center distances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get the distance between the buildings at order positions `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.size && j < self.size {
            Some(self.values[i * self.size + j])
        } else {
            None
        }
    }

    /// Get one row of the matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics, and an empty matrix has no rows anyway.
        self.values.chunks(self.size.max(1))
    }
}

impl Index<(usize, usize)> for DistanceMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(i < self.size && j < self.size, "distance matrix index out of range");
        &self.values[i * self.size + j]
    }
}

/// Area usage of a placement.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AreaMetrics {
    /// Sum of all building footprints
    pub used_area: f64,
    /// Site area minus used area; 0 when the site area is not positive
    pub free_area: f64,
    /// Used area divided by site area; 0 when the site area is zero
    pub utilization_factor: f64,
}

/// Compute the distance matrix between building centers.
///
/// `D[i][j]` is the Euclidean distance between the centers of `order[i]`
/// and `order[j]`; the diagonal is exactly zero.
pub fn distance_matrix(
    order: &[&Building],
    positions: &Positions,
) -> Result<DistanceMatrix, LayoutError> {
    let centers = order
        .iter()
        .map(|b| center_of(b, positions))
        .collect::<Result<Vec<_>, _>>()?;

    let size = centers.len();
    if size == 0 {
        return Ok(DistanceMatrix::default());
    }

    let mut values = vec![0.0; size * size];

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        values
            .par_chunks_mut(size)
            .enumerate()
            .for_each(|(i, row)| fill_row(&centers, i, row));
    }

    #[cfg(not(feature = "parallel"))]
    for (i, row) in values.chunks_mut(size).enumerate() {
        fill_row(&centers, i, row);
    }

    Ok(DistanceMatrix { size, values })
}

/// Sum of the matrix distances between the endpoints of every connection.
pub fn total_path_distance(
    order: &[&Building],
    matrix: &DistanceMatrix,
    connections: &[Connection],
) -> Result<f64, LayoutError> {
    let mut total = 0.0;
    for connection in connections {
        let [a, b] = connection.between;
        let i = index_in(order, a)?;
        let j = index_in(order, b)?;
        total += matrix[(i, j)];
    }
    Ok(total)
}

/// Compute used area, free area and utilization against `site_area`.
///
/// A non-positive site area is tolerated: free area becomes 0, and
/// utilization becomes 0 when the site area is exactly zero. A negative free
/// area (more footprint than site) is reported as is.
pub fn area_metrics(order: &[&Building], site_area: f64) -> AreaMetrics {
    let used_area = order.iter().fold(0.0, |acc, b| acc + b.area());
    let free_area = if site_area > 0.0 {
        site_area - used_area
    } else {
        0.0
    };
    let utilization_factor = if site_area != 0.0 {
        used_area / site_area
    } else {
        0.0
    };

    AreaMetrics {
        used_area,
        free_area,
        utilization_factor,
    }
}

/// Run the whole kernel and package the result as a [`Solution`].
pub(crate) fn evaluate(
    dataset: &LayoutDataset,
    order: &[&Building],
    positions: Positions,
) -> Result<Solution, LayoutError> {
    let matrix = distance_matrix(order, &positions)?;
    let total_distance_paths = total_path_distance(order, &matrix, dataset.connections())?;
    let area = area_metrics(order, dataset.site_area());

    Ok(Solution::new(
        order.iter().map(|b| b.id).collect(),
        positions,
        matrix,
        total_distance_paths,
        area,
    ))
}

fn center_of(building: &Building, positions: &Positions) -> Result<DVec2, LayoutError> {
    let origin = positions
        .get(&building.id)
        .copied()
        .ok_or(LayoutError::MissingPosition { id: building.id })?;
    Ok(Bounds::of_building(building, origin).center())
}

fn fill_row(centers: &[DVec2], i: usize, row: &mut [f64]) {
    for (j, cell) in row.iter_mut().enumerate() {
        *cell = if i == j {
            0.0
        } else {
            let d = centers[i] - centers[j];
            d.x.hypot(d.y)
        };
    }
}

fn index_in(order: &[&Building], id: BuildingId) -> Result<usize, LayoutError> {
    order
        .iter()
        .position(|b| b.id == id)
        .ok_or(LayoutError::UnknownBuilding { id })
}
