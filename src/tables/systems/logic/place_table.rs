// src/tables/systems/logic/place_table.rs
use bevy::prelude::*;

use crate::tables::{
    definitions::find_template,
    events::{PlaceTemplateRequest, TableCollectionModified, TableOperationFeedback},
    grid::GridConfig,
    resources::TableRegistry,
};

/// Handles template drops: resolves the template id, lets the registry
/// displace any occupant, and reports the outcome.
pub fn handle_place_template(
    mut events: EventReader<PlaceTemplateRequest>,
    mut registry: ResMut<TableRegistry>,
    grid: Res<GridConfig>,
    mut feedback_writer: EventWriter<TableOperationFeedback>,
    mut modified_writer: EventWriter<TableCollectionModified>,
) {
    for event in events.read() {
        let Some(template) = find_template(&event.template_id) else {
            let msg = format!("Drop ignored: unknown template id '{}'.", event.template_id);
            warn!("{}", msg);
            feedback_writer.write(TableOperationFeedback {
                message: msg,
                is_error: true,
            });
            continue;
        };

        match registry.place_template(template, event.row, event.col, &grid) {
            Ok(new_id) => {
                info!(
                    "Placed '{}' table '{}' at ({},{}).",
                    template.id, new_id, event.row, event.col
                );
                feedback_writer.write(TableOperationFeedback {
                    message: format!("Added {} at ({},{}).", template.title, event.row, event.col),
                    is_error: false,
                });
                modified_writer.write(TableCollectionModified);
            }
            Err(e) => {
                let msg = format!("Drop at ({},{}) failed: {}", event.row, event.col, e);
                warn!("{}", msg);
                feedback_writer.write(TableOperationFeedback {
                    message: msg,
                    is_error: true,
                });
            }
        }
    }
}
