//! CLI tool for heatview - resolves plot snapshots and outputs JSON
//!
//! Usage:
//!   heatview_cli <spec.json>              # Output JSON to stdout
//!   heatview_cli <spec.json> -o out.json  # Output JSON to file
//!
//! The input is a plot snapshot: `{ "matrix": [[..]], "color": {...} }`.
//! The output is every cell with its resolved fill color plus the scale
//! endpoints - useful for debugging color configs and for golden tests.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};

use heatview::plot::{resolve, PlotSpec};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: heatview_cli <spec.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read input file
    let data = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    // Parse the snapshot
    let spec: PlotSpec = match serde_json::from_str(&data) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error parsing plot spec: {}", e);
            std::process::exit(1);
        }
    };

    // Resolve cells and colors
    let resolved = match resolve(&spec) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error resolving plot: {}", e);
            std::process::exit(1);
        }
    };

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&resolved) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            if writeln!(handle, "{}", json).is_err() {
                std::process::exit(1);
            }
        }
    }
}
