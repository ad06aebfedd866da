// src/tables/errors.rs
use thiserror::Error;

use super::definitions::FilterField;

/// Failures while resolving where a dropped template lands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Every cell is occupied, so the displaced occupant has nowhere to go.
    /// The whole drop is rolled back.
    #[error("grid is full: no free cell left for the displaced table")]
    GridFull,
    #[error("cell ({row},{col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// A filter update that breaks the parent-before-child cascade rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CascadeViolation {
    #[error("unknown {field} '{value}'")]
    UnknownValue { field: FilterField, value: String },
    #[error("{child} '{value}' is set but no {parent} is selected")]
    MissingParent {
        child: FilterField,
        parent: FilterField,
        value: String,
    },
    #[error("{child} '{value}' is not a valid child of {parent} '{parent_value}'")]
    InvalidChild {
        child: FilterField,
        value: String,
        parent: FilterField,
        parent_value: String,
    },
}

/// Failures in the saved-layout store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout name cannot be empty")]
    EmptyName,
    #[error("a layout named '{0}' already exists")]
    DuplicateName(String),
    #[error("no layout named '{0}' exists")]
    NotFound(String),
}

/// A mutation addressed a table id that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no table with id '{0}'")]
pub struct UnknownTable(pub String);

/// Why a filter update was rejected. Either way the table's prior filters
/// stay untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterUpdateError {
    #[error(transparent)]
    Cascade(#[from] CascadeViolation),
    #[error(transparent)]
    UnknownTable(#[from] UnknownTable),
}

/// Why a column-header rename was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnUpdateError {
    #[error(transparent)]
    UnknownTable(#[from] UnknownTable),
    #[error("column index {index} is out of bounds ({count} columns)")]
    BadIndex { index: usize, count: usize },
    #[error("this table already has a '{0}' column")]
    DuplicateColumn(String),
}
