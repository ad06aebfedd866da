// src/tables/events.rs
use bevy::prelude::Event;

use super::definitions::{FilterState, TableType};

/// A template card was dropped on a grid cell. `template_id` is the drag
/// payload; unknown ids are rejected with feedback.
#[derive(Event, Debug, Clone)]
pub struct PlaceTemplateRequest {
    pub template_id: String,
    pub row: usize,
    pub col: usize,
}

/// A table's type selector was changed. Columns and filters stay as they
/// are; only the type flips.
#[derive(Event, Debug, Clone)]
pub struct ChangeTableTypeRequest {
    pub table_id: String,
    pub new_type: TableType,
}

/// The filter dialog was applied. Carries the whole committed filter state;
/// validation happens in the handler, drafts never reach the registry.
#[derive(Event, Debug, Clone)]
pub struct ApplyTableFiltersRequest {
    pub table_id: String,
    pub filters: FilterState,
}

/// A column header was re-pointed at another metric from the picker.
#[derive(Event, Debug, Clone)]
pub struct UpdateTableColumnRequest {
    pub table_id: String,
    pub column_index: usize,
    pub new_name: String,
}

#[derive(Event, Debug, Clone)]
pub struct RemoveTableRequest {
    pub table_id: String,
}

/// Save the current collection under a name.
#[derive(Event, Debug, Clone)]
pub struct SaveLayoutRequest {
    pub name: String,
}

/// Replace the live collection with a saved snapshot.
#[derive(Event, Debug, Clone)]
pub struct LoadLayoutRequest {
    pub name: String,
}

#[derive(Event, Debug, Clone)]
pub struct DeleteLayoutRequest {
    pub name: String,
}

/// Outcome of any table or layout operation, surfaced to the UI banner.
#[derive(Event, Debug, Clone)]
pub struct TableOperationFeedback {
    pub message: String,
    pub is_error: bool,
}

/// Emitted whenever the live table collection changed, so presentation-side
/// caches can refresh.
#[derive(Event, Debug, Clone)]
pub struct TableCollectionModified;
