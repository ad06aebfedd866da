// src/tables/systems/logic/layouts.rs
use bevy::prelude::*;

use crate::tables::{
    events::{
        DeleteLayoutRequest, LoadLayoutRequest, SaveLayoutRequest, TableCollectionModified,
        TableOperationFeedback,
    },
    resources::{LayoutStore, TableRegistry},
};

/// Snapshots the live collection under a name. The store takes a deep copy,
/// so later edits to the grid never leak into the saved layout.
pub fn handle_save_layout(
    mut events: EventReader<SaveLayoutRequest>,
    registry: Res<TableRegistry>,
    mut store: ResMut<LayoutStore>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
) {
    for event in events.read() {
        match store.save(&event.name, &registry.snapshot()) {
            Ok(()) => {
                let msg = format!(
                    "Saved layout '{}' ({} tables).",
                    event.name.trim(),
                    registry.len()
                );
                info!("{}", msg);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: false,
                });
            }
            Err(e) => {
                let msg = format!("Save failed: {}", e);
                warn!("{}", msg);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}

/// Replaces the live collection with a deep copy of the named snapshot.
pub fn handle_load_layout(
    mut events: EventReader<LoadLayoutRequest>,
    mut registry: ResMut<TableRegistry>,
    store: Res<LayoutStore>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut modified_writer: EventWriter<TableCollectionModified>,
) {
    for event in events.read() {
        match store.load(&event.name) {
            Ok(tables) => {
                let msg = format!("Loaded layout '{}' ({} tables).", event.name, tables.len());
                info!("{}", msg);
                registry.replace_all(tables);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: false,
                });
                modified_writer.write(TableCollectionModified);
            }
            Err(e) => {
                let msg = format!("Load failed: {}", e);
                warn!("{}", msg);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}

pub fn handle_delete_layout(
    mut events: EventReader<DeleteLayoutRequest>,
    mut store: ResMut<LayoutStore>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
) {
    for event in events.read() {
        match store.delete(&event.name) {
            Ok(removed) => {
                let msg = format!("Deleted layout '{}'.", removed.name);
                info!("{}", msg);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: false,
                });
            }
            Err(e) => {
                let msg = format!("Delete failed: {}", e);
                warn!("{}", msg);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}
