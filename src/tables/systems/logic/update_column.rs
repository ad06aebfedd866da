// src/tables/systems/logic/update_column.rs
use bevy::prelude::*;

use crate::tables::{
    events::{TableCollectionModified, TableOperationFeedback, UpdateTableColumnRequest},
    resources::TableRegistry,
};

/// Re-points a column header at another metric from the picker. Duplicate
/// metrics within one table are rejected with feedback.
pub fn handle_update_column(
    mut events: EventReader<UpdateTableColumnRequest>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut modified_writer: EventWriter<TableCollectionModified>,
) {
    for event in events.read() {
        match registry.rename_column(&event.table_id, event.column_index, &event.new_name) {
            Ok(()) => {
                info!(
                    "Set column {} of table '{}' to '{}'.",
                    event.column_index, event.table_id, event.new_name
                );
                modified_writer.write(TableCollectionModified);
            }
            Err(e) => {
                let msg = format!("Column change rejected: {}", e);
                warn!("{}", msg);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}
