//! Local improvement: bring the largest building's partner next to it.

use glam::DVec2;
use site_core::{LayoutDataset, LayoutError};

use crate::metrics::{self, order_by_area};
use crate::solution::Solution;

/// Improve a placement by moving one connected building.
///
/// The anchor is the building with the largest footprint. The first path
/// touching the anchor selects a partner, which is stacked directly above
/// the anchor with exactly the path's `min_length` between them. Every other
/// building keeps its position from `prior`.
///
/// The move does not check `max_length` and does not check for new overlaps.
/// When no path touches the anchor, `prior` is returned unchanged.
pub fn improve_solution(dataset: &LayoutDataset, prior: &Solution) -> Result<Solution, LayoutError> {
    let order = order_by_area(dataset.buildings());
    let Some(anchor) = order.first().copied() else {
        return Ok(prior.clone());
    };

    let Some(main_path) = dataset.connections().iter().find(|c| c.touches(anchor.id)) else {
        log::info!(
            "no path touches anchor '{}', keeping the prior placement",
            anchor.name
        );
        return Ok(prior.clone());
    };
    let partner = main_path.partner_of(anchor.id);

    let anchor_origin = prior
        .position(anchor.id)
        .ok_or(LayoutError::MissingPosition { id: anchor.id })?;
    let target = DVec2::new(
        anchor_origin.x,
        anchor_origin.y + anchor.height() + main_path.min_length,
    );

    log::debug!(
        "moving building {} above anchor '{}' via path '{}' to ({}, {})",
        partner,
        anchor.name,
        main_path.name,
        target.x,
        target.y
    );

    let mut positions = prior.positions().clone();
    positions.insert(partner, target);

    metrics::evaluate(dataset, &order, positions)
}
