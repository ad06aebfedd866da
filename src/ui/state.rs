// src/ui/state.rs
use bevy::prelude::*;

use crate::tables::{FilterState, PlacedTable};

/// Ephemeral, window-local UI state: popup visibility, in-flight drafts,
/// text inputs. Nothing in here is engine state; the engine only ever sees
/// committed values via request events.
#[derive(Resource, Default, Debug, Clone)]
pub struct DashboardWindowState {
    pub sidebar_collapsed: bool,

    // Filter dialog
    pub show_filter_popup: bool,
    pub filter_target_table: Option<String>,
    pub filter_draft: FilterState,
    pub start_date_input: String,
    pub end_date_input: String,
    pub filter_input_error: Option<String>,

    // Save-layout dialog
    pub show_save_layout_popup: bool,
    pub layout_name_input: String,

    // Delete-layout confirm
    pub show_delete_layout_popup: bool,
    pub delete_layout_target: String,
}

impl DashboardWindowState {
    /// Seeds the filter dialog from a table's committed filters.
    pub fn open_filter_popup_for(&mut self, table: &PlacedTable) {
        self.filter_target_table = Some(table.id.clone());
        self.filter_draft = table.filters.clone();
        self.start_date_input = table
            .filters
            .start_date
            .map(|d| d.to_string())
            .unwrap_or_default();
        self.end_date_input = table
            .filters
            .end_date
            .map(|d| d.to_string())
            .unwrap_or_default();
        self.filter_input_error = None;
        self.show_filter_popup = true;
    }

    pub fn close_filter_popup(&mut self) {
        self.show_filter_popup = false;
        self.filter_target_table = None;
        self.filter_draft = FilterState::default();
        self.start_date_input.clear();
        self.end_date_input.clear();
        self.filter_input_error = None;
    }
}
