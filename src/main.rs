//! larder
//!
//! Loads the product and recipe catalog, computes the cheapest cost and
//! nutrient summary for every recipe, and verifies the result against the
//! expected fixture when running on the builtin catalog.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use larder::catalog::{Catalog, BUILTIN_CATALOG, BUILTIN_EXPECTED};
use larder::costing::summarize_recipes;
use larder::models::RecipeSummaries;
use larder::{build_info, verify};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Summaries go to stdout; everything else stays on stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("larder=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    build_info::print_startup_banner();

    let catalog_path = std::env::var("LARDER_CATALOG_PATH").ok();
    let catalog = match &catalog_path {
        Some(path) => {
            eprintln!("Catalog: {path}");
            Catalog::from_file(path)?
        }
        None => {
            eprintln!("Catalog: builtin fixture");
            Catalog::from_json(BUILTIN_CATALOG)?
        }
    };

    let summaries = summarize_recipes(&catalog)?;
    println!("{}", serde_json::to_string_pretty(&summaries)?);

    // The embedded expectations only describe the builtin catalog
    if catalog_path.is_some() {
        return Ok(ExitCode::SUCCESS);
    }

    let expected: RecipeSummaries = serde_json::from_str(BUILTIN_EXPECTED)?;
    let mismatches = verify::compare(&summaries, &expected);
    if mismatches.is_empty() {
        eprintln!("Verification: PASS ({} recipes)", summaries.len());
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("Verification: FAIL");
        for mismatch in &mismatches {
            eprintln!("  - {mismatch}");
        }
        Ok(ExitCode::FAILURE)
    }
}
