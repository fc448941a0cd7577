//! Dataset loading for the site layout engine.
//!
//! Reads the JSON description of buildings, paths and objectives and turns it
//! into a validated [`LayoutDataset`]. Building ids are assigned 1-based in
//! document order; path endpoints are resolved by building name.
//!
//! # Example
//!
//! ```ignore
//! use site_loader::load_dataset;
//!
//! let dataset = load_dataset("input_instance.json")?;
//! for b in dataset.buildings() {
//!     println!("{} - {}", b.id, b.name);
//! }
//! ```

mod document;

use std::path::Path;

use site_core::{DatasetOptions, LayoutDataset, LoadError};

use crate::document::DatasetDocument;

/// Parse a dataset from a JSON string with default options.
pub fn parse_dataset(input: &str) -> Result<LayoutDataset, LoadError> {
    parse_dataset_with_options(input, DatasetOptions::default())
}

/// Parse a dataset from a JSON string.
pub fn parse_dataset_with_options(
    input: &str,
    options: DatasetOptions,
) -> Result<LayoutDataset, LoadError> {
    let document: DatasetDocument =
        serde_json::from_str(input).map_err(|e| LoadError::Malformed {
            reason: e.to_string(),
        })?;
    let dataset = document.into_dataset(options)?;

    log::debug!(
        "loaded {} buildings, {} paths, {} objectives (site area {})",
        dataset.buildings().len(),
        dataset.connections().len(),
        dataset.objectives().len(),
        dataset.site_area()
    );

    Ok(dataset)
}

/// Load a dataset from a JSON file.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<LayoutDataset, LoadError> {
    let input = std::fs::read_to_string(path)?;
    parse_dataset(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_core::{BuildingId, DatasetError, Dimensions};

    const TWO_BUILDINGS: &str = r#"{
        "buildings": [
            { "name": "A", "type": "office", "dimensions": [10, 10] },
            { "name": "B", "type": "storage", "dimensions": [5, 5] }
        ],
        "paths": [
            { "name": "AB", "between": ["A", "B"], "width": 1.5,
              "min_length": 2, "max_length": 5, "type": "road" }
        ],
        "objectives": [
            { "name": "objective_1", "description": "short paths" }
        ]
    }"#;

    #[test]
    fn test_parse_two_buildings() {
        let dataset = parse_dataset(TWO_BUILDINGS).unwrap();

        assert_eq!(dataset.len(), 2);
        let a = &dataset.buildings()[0];
        assert_eq!(a.id, BuildingId(1));
        assert_eq!(a.building_type, "office");
        assert_eq!(a.dimensions, Dimensions::new(10.0, 10.0));
        assert_eq!(dataset.buildings()[1].id, BuildingId(2));

        let path = &dataset.connections()[0];
        assert_eq!(path.between, [BuildingId(1), BuildingId(2)]);
        assert_eq!(path.path_type, "road");
        assert!((path.width - 1.5).abs() < 0.001);

        assert_eq!(dataset.objectives()[0].description, "short paths");
        assert!((dataset.site_area() - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_explicit_site_area() {
        let input = r#"{
            "buildings": [{ "name": "A", "type": "x", "dimensions": [2, 2] }],
            "site_area": 1000
        }"#;
        let dataset = parse_dataset(input).unwrap();
        assert_eq!(dataset.site_area(), 1000.0);
        assert!(!dataset.site_area_derived());
    }

    #[test]
    fn test_empty_document() {
        let dataset = parse_dataset("{}").unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.connections().is_empty());
        assert_eq!(dataset.site_area(), 0.0);
    }

    #[test]
    fn test_unknown_path_endpoint() {
        let input = r#"{
            "buildings": [{ "name": "A", "type": "x", "dimensions": [2, 2] }],
            "paths": [{ "name": "p", "between": ["A", "Nowhere"], "width": 1,
                        "min_length": 0, "max_length": 1, "type": "road" }]
        }"#;
        let err = parse_dataset(input).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Dataset(DatasetError::UnknownBuilding { .. })
        ));
    }

    #[test]
    fn test_missing_required_key() {
        let input = r#"{ "buildings": [{ "name": "A", "dimensions": [2, 2] }] }"#;
        let err = parse_dataset(input).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_wrong_dimension_arity() {
        let input = r#"{ "buildings": [{ "name": "A", "type": "x", "dimensions": [2, 2, 2] }] }"#;
        assert!(matches!(
            parse_dataset(input).unwrap_err(),
            LoadError::Malformed { .. }
        ));
    }

    #[test]
    fn test_custom_fill_factor() {
        let input = r#"{ "buildings": [{ "name": "A", "type": "x", "dimensions": [2, 3] }] }"#;
        let dataset =
            parse_dataset_with_options(input, DatasetOptions { fill_factor: 1.5 }).unwrap();
        assert!((dataset.site_area() - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dataset("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
