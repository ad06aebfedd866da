// src/tables/systems/logic/change_table_type.rs
use bevy::prelude::*;

use crate::tables::{
    events::{ChangeTableTypeRequest, TableCollectionModified, TableOperationFeedback},
    resources::TableRegistry,
};

/// Flips a table's type in place. Deliberately leaves columns and filters
/// untouched; reconciliation after a type change is the caller's business.
pub fn handle_change_table_type(
    mut events: EventReader<ChangeTableTypeRequest>,
    mut registry: ResMut<TableRegistry>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut modified_writer: EventWriter<TableCollectionModified>,
) {
    for event in events.read() {
        match registry.change_table_type(&event.table_id, event.new_type) {
            Ok(()) => {
                info!(
                    "Changed table '{}' type to '{}'.",
                    event.table_id, event.new_type
                );
                modified_writer.write(TableCollectionModified);
            }
            Err(e) => {
                let msg = format!("Type change failed: {}", e);
                warn!("{}", msg);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}
