use rustc_hash::FxHashMap;

use super::error::{Error, Result};

/// Rectangular 2D array of integers, row-major.
pub type Grid = Vec<Vec<i64>>;

pub fn dimensions(grid: &Grid) -> (usize, usize) {
    if grid.is_empty() {
        return (0, 0);
    }
    (grid.len(), grid[0].len())
}

/// Occurrence count of each distinct value in one column.
pub fn column_counts(grid: &Grid, col: usize) -> FxHashMap<i64, usize> {
    let mut counts = FxHashMap::default();
    for row in grid {
        *counts.entry(row[col]).or_insert(0) += 1;
    }
    counts
}

/// Err on the first row whose length differs from row 0.
pub fn ensure_rectangular(grid: &Grid) -> Result<()> {
    let Some(first) = grid.first() else {
        return Ok(());
    };
    let expected = first.len();
    for (row, cells) in grid.iter().enumerate() {
        if cells.len() != expected {
            return Err(Error::JaggedGrid { row, expected, found: cells.len() });
        }
    }
    Ok(())
}
