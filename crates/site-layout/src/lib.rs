//! Placement generation and evaluation for site layouts.
//!
//! This crate places building footprints on a site and scores the result by
//! total path length and unused area.
//!
//! # Architecture
//!
//! 1. **Metrics kernel**: center-to-center distance matrix, path totals, area metrics
//! 2. **Initial placement**: single-row packing in descending order of area
//! 3. **Improvement**: moves the largest building's first partner next to it
//!
//! Every step produces a new immutable [`Solution`].
//!
//! # Example
//!
//! ```ignore
//! use site_layout::{generate_initial_solution, improve_solution};
//!
//! let dataset = load_dataset(path)?;
//! let initial = generate_initial_solution(&dataset)?;
//! let improved = improve_solution(&dataset, &initial)?;
//!
//! println!("{} -> {}", initial.total_distance_paths(), improved.total_distance_paths());
//! ```

mod bounds;
mod improve;
mod initial;
pub mod metrics;
mod solution;

pub use bounds::Bounds;
pub use improve::improve_solution;
pub use initial::generate_initial_solution;
pub use metrics::{order_by_area, AreaMetrics, DistanceMatrix};
pub use solution::{Positions, Solution};

pub use glam::DVec2;
