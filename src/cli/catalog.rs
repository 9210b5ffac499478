//! Catalog command implementation

use std::process::ExitCode;

use crate::catalog::Catalog;
use crate::color::to_hex;
use crate::config::LabConfig;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Render the catalog as an aligned text table.
pub fn format_catalog(catalog: &Catalog) -> String {
    let name_width = catalog
        .entries()
        .iter()
        .map(|t| t.name.len())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or(4);

    let mut out = format!(
        "{:<name_width$}  {:<9}  {:<9}  {:<10}  {}\n",
        "NAME", "SHAPE", "COLOR", "SIZE", "POSITION"
    );
    for t in catalog.entries() {
        out.push_str(&format!(
            "{:<name_width$}  {:<9}  {:<9}  {:<10}  {}\n",
            t.name,
            t.shape,
            to_hex(t.color),
            format!("{}x{}", t.size.0, t.size.1),
            format!("({}, {})", t.position.0, t.position.1),
        ));
    }
    out
}

/// Execute the catalog command
pub fn run_catalog(config: &LabConfig, json: bool) -> ExitCode {
    let catalog = config.catalog();

    if json {
        match serde_json::to_string_pretty(catalog.entries()) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: Failed to serialize catalog: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        print!("{}", format_catalog(&catalog));
    }

    ExitCode::from(EXIT_SUCCESS)
}
