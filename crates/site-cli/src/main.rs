//! Site planner CLI entrypoint.
//!
//! Loads a dataset, generates the initial and improved placements, prints a
//! summary, and writes `initial_layout.svg`, `improved_layout.svg` and
//! `solution.json` to the output directory.
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=debug`) for diagnostic output.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use site_core::{ExportError, LayoutDataset, SiteError};
use site_export::{write_json, write_svg, SvgOptions};
use site_layout::{generate_initial_solution, improve_solution, Solution};
use site_loader::load_dataset;

const DEFAULT_ARRANGEMENT_ID: u64 = 1;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <dataset.json> [--out <dir>] [--arrangement-id <n>] [--no-svg]\n\n--out selects the output directory (default: current directory).\n--arrangement-id sets the id written to solution.json (default {DEFAULT_ARRANGEMENT_ID}).\n--no-svg skips the layout drawings."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    input: PathBuf,
    out_dir: PathBuf,
    arrangement_id: u64,
    svg: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<Option<CliOptions>, ()> {
    let mut input = None;
    let mut out_dir = None;
    let mut arrangement_id = None;
    let mut svg = true;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--out" => {
                if out_dir.is_some() {
                    return Err(());
                }
                out_dir = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--arrangement-id" => {
                if arrangement_id.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                arrangement_id = Some(raw.parse().map_err(|_| ())?);
            }
            "--no-svg" => {
                if !svg {
                    return Err(());
                }
                svg = false;
            }
            other if other.starts_with('-') => return Err(()),
            other => {
                if input.is_some() {
                    return Err(());
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    Ok(Some(CliOptions {
        input: input.ok_or(())?,
        out_dir: out_dir.unwrap_or_else(|| PathBuf::from(".")),
        arrangement_id: arrangement_id.unwrap_or(DEFAULT_ARRANGEMENT_ID),
        svg,
    }))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "site-planner".to_string());

    let options = match parse_options(args) {
        Ok(Some(options)) => options,
        Ok(None) => {
            print_usage(&program);
            return ExitCode::SUCCESS;
        }
        Err(()) => {
            print_usage(&program);
            return ExitCode::from(2);
        }
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(options: &CliOptions) -> Result<(), SiteError> {
    let dataset = load_dataset(&options.input)?;
    print!("{}", dataset_summary(&dataset));

    let initial = generate_initial_solution(&dataset)?;
    let improved = improve_solution(&dataset, &initial)?;

    print!("{}", solution_summary("Initial layout", &initial));
    print!("{}", solution_summary("Improved layout", &improved));
    report_overlaps(&dataset, &improved);

    std::fs::create_dir_all(&options.out_dir).map_err(ExportError::from)?;

    if options.svg {
        write_drawing(&options.out_dir, "initial_layout.svg", "Initial Layout", &dataset, &initial)?;
        write_drawing(&options.out_dir, "improved_layout.svg", "Improved Layout", &dataset, &improved)?;
    }

    let json_path = options.out_dir.join("solution.json");
    write_json(&json_path, &dataset, &improved, options.arrangement_id)?;
    log::info!("wrote {}", json_path.display());

    Ok(())
}

fn dataset_summary(dataset: &LayoutDataset) -> String {
    let mut out = format!(
        "The aggregate area of all buildings is: {}\n",
        dataset.total_building_area()
    );
    let origin = if dataset.site_area_derived() {
        " (derived from the building footprints)"
    } else {
        ""
    };
    out.push_str(&format!(
        "The area assigned for the layout is: {}{origin}\n",
        dataset.site_area()
    ));
    out.push_str("Buildings:\n");
    for b in dataset.buildings() {
        out.push_str(&format!(
            "  {} - {}, {}, ({}, {})\n",
            b.id,
            b.name,
            b.building_type,
            b.width(),
            b.height()
        ));
    }
    out
}

fn solution_summary(label: &str, solution: &Solution) -> String {
    format!(
        "{label}:\n  objective_1 (total path length): {}\n  objective_2 (free area): {}\n  used area: {}\n  utilization factor: {}\n",
        solution.total_distance_paths(),
        solution.free_area(),
        solution.used_area(),
        solution.utilization_factor()
    )
}

fn report_overlaps(dataset: &LayoutDataset, solution: &Solution) {
    for (a, b) in solution.overlaps(dataset) {
        let name = |id| dataset.building(id).map_or("?", |b| b.name.as_str());
        log::warn!("buildings '{}' and '{}' overlap", name(a), name(b));
    }
}

fn write_drawing(
    dir: &Path,
    file: &str,
    title: &str,
    dataset: &LayoutDataset,
    solution: &Solution,
) -> Result<(), SiteError> {
    let path = dir.join(file);
    write_svg(&path, dataset, solution, &SvgOptions::titled(title))?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use site_core::DatasetBuilder;

    fn parse(args: &[&str]) -> Result<Option<CliOptions>, ()> {
        parse_options(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults() {
        let options = parse(&["site.json"]).unwrap().unwrap();
        assert_eq!(options.input, PathBuf::from("site.json"));
        assert_eq!(options.out_dir, PathBuf::from("."));
        assert_eq!(options.arrangement_id, DEFAULT_ARRANGEMENT_ID);
        assert!(options.svg);
    }

    #[test]
    fn test_all_flags() {
        let options = parse(&["--out", "build", "site.json", "--arrangement-id", "42", "--no-svg"])
            .unwrap()
            .unwrap();
        assert_eq!(options.out_dir, PathBuf::from("build"));
        assert_eq!(options.arrangement_id, 42);
        assert!(!options.svg);
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["--help"]), Ok(None));
        assert_eq!(parse(&["site.json", "-h"]), Ok(None));
    }

    #[test]
    fn test_summary_uses_footprint_total() {
        let mut builder = DatasetBuilder::new().site_area(Some(1000.0));
        builder.add_building("A", "office", [10.0, 10.0]).unwrap();
        builder.add_building("B", "storage", [5.0, 5.0]).unwrap();
        let dataset = builder.build();

        let summary = dataset_summary(&dataset);
        assert!(summary.contains("The aggregate area of all buildings is: 125\n"));
        assert!(summary.contains("The area assigned for the layout is: 1000\n"));
        assert!(summary.contains("  2 - B, storage, (5, 5)\n"));
    }

    #[test]
    fn test_summary_marks_derived_site_area() {
        let mut builder = DatasetBuilder::new();
        builder.add_building("A", "office", [10.0, 10.0]).unwrap();
        let dataset = builder.build();

        let summary = dataset_summary(&dataset);
        assert!(summary.contains("The aggregate area of all buildings is: 100\n"));
        assert!(summary.contains("is: 400 (derived from the building footprints)\n"));
    }

    #[test]
    fn test_solution_summary() {
        let mut builder = DatasetBuilder::new().site_area(Some(400.0));
        builder.add_building("A", "office", [10.0, 10.0]).unwrap();
        let dataset = builder.build();
        let solution = generate_initial_solution(&dataset).unwrap();

        let summary = solution_summary("Initial layout", &solution);
        assert!(summary.starts_with("Initial layout:\n"));
        assert!(summary.contains("objective_1 (total path length): 0\n"));
        assert!(summary.contains("objective_2 (free area): 300\n"));
        assert!(summary.contains("used area: 100\n"));
        assert!(summary.contains("utilization factor: 0.25\n"));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.json", "b.json"]).is_err());
        assert!(parse(&["a.json", "--arrangement-id", "x"]).is_err());
        assert!(parse(&["a.json", "--out"]).is_err());
        assert!(parse(&["a.json", "--verbose"]).is_err());
        assert!(parse(&["a.json", "--no-svg", "--no-svg"]).is_err());
    }
}
