//! Color scale tests for heatview
//!
//! End-to-end scenarios through `plot::resolve`: depth-derived and
//! fixed-endpoint scales, validation failures, and degenerate domains.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use heatview::plot::{resolve, ColorConfig, PlotSpec};
use heatview::HeatviewError;
use test_case::test_case;

fn depth_spec(matrix: Vec<Vec<f64>>, base: &str, depth: f64) -> PlotSpec {
    PlotSpec {
        matrix,
        color: ColorConfig::Depth {
            base: base.to_string(),
            depth,
        },
    }
}

#[test]
fn test_depth_half_red_scenario() {
    let resolved = resolve(&depth_spec(
        vec![vec![1.0, 2.0], vec![3.0, 4.0]],
        "#ff0000",
        0.5,
    ))
    .unwrap();

    assert_eq!(resolved.low, "#ff8080");
    assert_eq!(resolved.high, "#ff0000");
    assert_eq!(resolved.domain, (1.0, 4.0));

    // Low end for the minimum, high end for the maximum
    let color_of = |row: u32, col: u32| {
        resolved
            .cells
            .iter()
            .find(|c| c.row == row && c.col == col)
            .unwrap()
            .color
            .clone()
    };
    assert_eq!(color_of(0, 0), "#ff8080");
    assert_eq!(color_of(1, 1), "#ff0000");
}

#[test]
fn test_depth_zero_single_color() {
    let resolved = resolve(&depth_spec(vec![vec![1.0, 100.0]], "#4472c4", 0.0)).unwrap();
    assert_eq!(resolved.low, resolved.high);
    for cell in &resolved.cells {
        assert_eq!(cell.color, "#4472c4");
    }
}

#[test]
fn test_depth_one_ranges_from_white() {
    let resolved = resolve(&depth_spec(vec![vec![0.0, 1.0]], "#123456", 1.0)).unwrap();
    assert_eq!(resolved.low, "#ffffff");
    assert_eq!(resolved.high, "#123456");
}

#[test_case(-0.01)]
#[test_case(1.01)]
#[test_case(42.0)]
fn test_depth_out_of_range_fails(depth: f64) {
    let err = resolve(&depth_spec(vec![vec![1.0]], "#ff0000", depth)).unwrap_err();
    assert!(matches!(err, HeatviewError::InvalidParameter(_)));
}

#[test_case("ff0000"; "missing hash")]
#[test_case("#f00"; "short form")]
#[test_case("#ff00zz"; "bad digits")]
#[test_case("red"; "named color")]
fn test_malformed_base_color_fails(base: &str) {
    let err = resolve(&depth_spec(vec![vec![1.0]], base, 0.5)).unwrap_err();
    assert!(matches!(err, HeatviewError::InvalidColor(_)));
}

#[test]
fn test_fixed_scale_endpoints() {
    let spec = PlotSpec {
        matrix: vec![vec![0.0, 5.0, 10.0]],
        color: ColorConfig::Fixed {
            low: "#000000".to_string(),
            high: "#ffffff".to_string(),
        },
    };
    let resolved = resolve(&spec).unwrap();
    assert_eq!(resolved.cells[0].color, "#000000");
    assert_eq!(resolved.cells[1].color, "#808080");
    assert_eq!(resolved.cells[2].color, "#ffffff");
}

#[test]
fn test_fixed_scale_bad_endpoint_fails() {
    let spec = PlotSpec {
        matrix: vec![vec![1.0]],
        color: ColorConfig::Fixed {
            low: "#000000".to_string(),
            high: "white".to_string(),
        },
    };
    let err = resolve(&spec).unwrap_err();
    assert!(matches!(err, HeatviewError::InvalidColor(_)));
}

#[test]
fn test_single_value_collapses_to_high_end() {
    let resolved = resolve(&depth_spec(vec![vec![7.0, 7.0], vec![7.0, 7.0]], "#ff0000", 0.5))
        .unwrap();
    assert_eq!(resolved.domain, (7.0, 7.0));
    for cell in &resolved.cells {
        assert_eq!(cell.color, "#ff0000");
    }
}

#[test]
fn test_empty_matrix_resolves_to_empty() {
    let resolved = resolve(&depth_spec(vec![], "#ff0000", 0.5)).unwrap();
    assert!(resolved.cells.is_empty());
    assert_eq!(resolved.domain, (0.0, 0.0));
}

#[test]
fn test_spec_round_trips_through_json() {
    let json = r##"{
        "matrix": [[1.0, 2.0], [3.0, 4.0]],
        "color": { "mode": "depth", "base": "#ff0000", "depth": 0.5 }
    }"##;
    let spec: PlotSpec = serde_json::from_str(json).unwrap();
    let resolved = resolve(&spec).unwrap();
    assert_eq!(resolved.cells.len(), 4);
    assert_eq!(resolved.low, "#ff8080");

    // The resolved output serializes cleanly for the CLI and JS hosts
    let out = serde_json::to_string(&resolved).unwrap();
    assert!(out.contains("\"#ff0000\""));
}
