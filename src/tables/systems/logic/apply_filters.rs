// src/tables/systems/logic/apply_filters.rs
use bevy::prelude::*;

use crate::tables::{
    events::{ApplyTableFiltersRequest, TableCollectionModified, TableOperationFeedback},
    hierarchy::ProductHierarchy,
    resources::TableRegistry,
};

/// Commits a filter dialog's result. The registry validates the cascade
/// rule against the product hierarchy; a rejected update changes nothing
/// and the violation is surfaced verbatim (e.g. "class 'Classic' is not a
/// valid child of department ...").
pub fn handle_apply_filters(
    mut events: EventReader<ApplyTableFiltersRequest>,
    mut registry: ResMut<TableRegistry>,
    hierarchy: Res<ProductHierarchy>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut modified_writer: EventWriter<TableCollectionModified>,
) {
    for event in events.read() {
        match registry.apply_filters(&event.table_id, event.filters.clone(), &hierarchy) {
            Ok(()) => {
                info!("Applied filters to table '{}'.", event.table_id);
                feedback_writer.write(TableOperationFeedback {
                    message: "Filters applied.".to_string(),
                    is_error: false,
                });
                modified_writer.write(TableCollectionModified);
            }
            Err(e) => {
                let msg = format!("Filter update rejected: {}", e);
                warn!("{}", msg);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}
