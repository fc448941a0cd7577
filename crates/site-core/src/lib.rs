//! Core types and utilities for the site layout engine.
//!
//! This crate provides the foundational types used across all other site crates:
//! - Identifier and dimension types
//! - The layout dataset (buildings, paths, objectives, site area)
//! - Error types

pub mod dataset;
pub mod errors;
pub mod types;

pub use dataset::*;
pub use errors::*;
pub use types::*;
