//! Initial placement: one row, largest building first.

use glam::DVec2;
use site_core::{LayoutDataset, LayoutError};

use crate::metrics::{self, order_by_area};
use crate::solution::{Positions, Solution};

/// Generate the initial placement of a dataset.
///
/// Buildings are laid out left to right along `y = 0` in descending order of
/// area, each one starting where the previous one ends. No clearance is left
/// between neighbours.
pub fn generate_initial_solution(dataset: &LayoutDataset) -> Result<Solution, LayoutError> {
    let order = order_by_area(dataset.buildings());

    let mut positions = Positions::with_capacity(order.len());
    let mut current_x = 0.0;
    for building in &order {
        positions.insert(building.id, DVec2::new(current_x, 0.0));
        current_x += building.width();
    }

    metrics::evaluate(dataset, &order, positions)
}
