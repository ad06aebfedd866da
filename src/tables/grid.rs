// src/tables/grid.rs
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::definitions::{GridPosition, PlacedTable};

/// Dimensions of the staging grid. Inserted from the command line at
/// startup; 6 rows by 2 columns unless overridden.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig { rows: 6, cols: 2 }
    }
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        GridConfig { rows, cols }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// True iff some table sits exactly at `(row, col)`.
    pub fn is_occupied(&self, tables: &[PlacedTable], row: usize, col: usize) -> bool {
        tables
            .iter()
            .any(|t| t.position.row == row && t.position.col == col)
    }

    /// First unoccupied cell in row-major order (row 0 col 0, row 0 col 1,
    /// row 1 col 0, ...). The scan order is a contract: displacement must be
    /// deterministic regardless of insertion history.
    pub fn next_free_cell(&self, tables: &[PlacedTable]) -> Option<GridPosition> {
        self.next_free_cell_excluding(tables, None)
    }

    /// Same scan, but treats `excluded` as occupied. Used while resolving a
    /// drop: the target cell is about to be taken by the new table, so the
    /// displaced occupant may not land back on it.
    pub fn next_free_cell_excluding(
        &self,
        tables: &[PlacedTable],
        excluded: Option<(usize, usize)>,
    ) -> Option<GridPosition> {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if excluded == Some((row, col)) {
                    continue;
                }
                if !self.is_occupied(tables, row, col) {
                    return Some(GridPosition::new(row, col));
                }
            }
        }
        None
    }
}
