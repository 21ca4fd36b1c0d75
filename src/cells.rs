//! Grid-to-cell transformation.
//!
//! Reifies each matrix entry as a positioned record so the scale, layout,
//! and tooltip code all work against one canonical shape.

use serde::{Deserialize, Serialize};

use crate::error::{HeatviewError, Result};

/// One matrix entry with its grid position.
///
/// Cells are immutable once built; the collection is fully rebuilt
/// whenever the source matrix changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Row index (0-based).
    pub row: u32,
    /// Column index (0-based).
    pub col: u32,
    /// Raw datum.
    pub value: f64,
}

/// Convert a 2-D numeric matrix into a flat cell collection in row-major
/// order.
///
/// The output has exactly `rows × cols` cells with every `(row, col)`
/// pair present once. An empty matrix (zero rows, or rows of length
/// zero) yields an empty collection.
///
/// # Errors
/// Returns `MalformedInput` when rows differ in length; the input is
/// never silently truncated.
pub fn transform(matrix: &[Vec<f64>]) -> Result<Vec<Cell>> {
    let Some(first) = matrix.first() else {
        return Ok(Vec::new());
    };
    let width = first.len();

    let mut cells = Vec::with_capacity(matrix.len() * width);
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != width {
            return Err(HeatviewError::MalformedInput(format!(
                "row {} has {} entries, expected {}",
                i,
                row.len(),
                width
            )));
        }
        for (j, &value) in row.iter().enumerate() {
            cells.push(Cell {
                row: u32::try_from(i)
                    .map_err(|_| HeatviewError::MalformedInput(format!("row index {i} overflows")))?,
                col: u32::try_from(j)
                    .map_err(|_| HeatviewError::MalformedInput(format!("col index {j} overflows")))?,
                value,
            });
        }
    }
    Ok(cells)
}

/// Compute the `(min, max)` extent over the finite cell values.
///
/// Returns `None` when the collection is empty or holds no finite value;
/// non-finite entries are excluded rather than poisoning the extent.
pub fn value_extent(cells: &[Cell]) -> Option<(f64, f64)> {
    let mut extent: Option<(f64, f64)> = None;
    for cell in cells {
        if !cell.value.is_finite() {
            continue;
        }
        extent = Some(match extent {
            Some((min, max)) => (min.min(cell.value), max.max(cell.value)),
            None => (cell.value, cell.value),
        });
    }
    extent
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_row_major() {
        let cells = transform(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(
            cells,
            vec![
                Cell { row: 0, col: 0, value: 1.0 },
                Cell { row: 0, col: 1, value: 2.0 },
                Cell { row: 1, col: 0, value: 3.0 },
                Cell { row: 1, col: 1, value: 4.0 },
            ]
        );
    }

    #[test]
    fn test_transform_ragged_fails() {
        let err = transform(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, HeatviewError::MalformedInput(_)));
    }

    #[test]
    fn test_transform_empty() {
        assert!(transform(&[]).unwrap().is_empty());
        assert!(transform(&[vec![], vec![]]).unwrap().is_empty());
    }

    #[test]
    fn test_extent() {
        let cells = transform(&[vec![3.0, -1.0], vec![7.5, 0.0]]).unwrap();
        assert_eq!(value_extent(&cells), Some((-1.0, 7.5)));
    }

    #[test]
    fn test_extent_empty() {
        assert_eq!(value_extent(&[]), None);
    }

    #[test]
    fn test_extent_skips_nan() {
        let cells = vec![
            Cell { row: 0, col: 0, value: f64::NAN },
            Cell { row: 0, col: 1, value: 2.0 },
        ];
        assert_eq!(value_extent(&cells), Some((2.0, 2.0)));
    }
}
