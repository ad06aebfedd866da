// src/tables/systems/logic/remove_table.rs
use bevy::prelude::*;

use crate::tables::{
    events::{RemoveTableRequest, TableCollectionModified, TableOperationFeedback},
    resources::TableRegistry,
};

/// Removes a table from the grid; its cell is free for future drops.
pub fn handle_remove_table(
    mut events: EventReader<RemoveTableRequest>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut modified_writer: EventWriter<TableCollectionModified>,
) {
    for event in events.read() {
        match registry.remove_table(&event.table_id) {
            Ok(removed) => {
                info!(
                    "Removed table '{}' from ({},{}).",
                    removed.id, removed.position.row, removed.position.col
                );
                feedback_writer.write(TableOperationFeedback {
                    message: "Table removed.".to_string(),
                    is_error: false,
                });
                modified_writer.write(TableCollectionModified);
            }
            Err(e) => {
                let msg = format!("Remove failed: {}", e);
                warn!("{}", msg);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}
