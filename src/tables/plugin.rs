// src/tables/plugin.rs
use bevy::prelude::*;

use super::events::{
    ApplyTableFiltersRequest, ChangeTableTypeRequest, DeleteLayoutRequest, LoadLayoutRequest,
    PlaceTemplateRequest, RemoveTableRequest, SaveLayoutRequest, TableCollectionModified,
    TableOperationFeedback, UpdateTableColumnRequest,
};
use super::grid::GridConfig;
use super::hierarchy::ProductHierarchy;
use super::resources::{LayoutStore, TableRegistry};
use super::systems;

/// Plugin owning the grid-placement and table-state engine. Self-contained:
/// no presentation types, so it also drives headless tests.
pub struct TablesPlugin;

impl Plugin for TablesPlugin {
    fn build(&self, app: &mut App) {
        // --- Resource Initialization ---
        // GridConfig may already be inserted from the command line; init
        // only fills in the 6x2 default.
        app.init_resource::<GridConfig>()
            .init_resource::<TableRegistry>()
            .init_resource::<LayoutStore>()
            .init_resource::<ProductHierarchy>();

        // --- Event Registration ---
        app.add_event::<PlaceTemplateRequest>()
            .add_event::<ChangeTableTypeRequest>()
            .add_event::<ApplyTableFiltersRequest>()
            .add_event::<UpdateTableColumnRequest>()
            .add_event::<RemoveTableRequest>()
            .add_event::<SaveLayoutRequest>()
            .add_event::<LoadLayoutRequest>()
            .add_event::<DeleteLayoutRequest>()
            .add_event::<TableOperationFeedback>()
            .add_event::<TableCollectionModified>();

        // Handlers are chained: each frame's event batch is applied as one
        // serialized sequence of state transitions, in a fixed order.
        app.add_systems(
            Update,
            (
                systems::logic::handle_place_template,
                systems::logic::handle_change_table_type,
                systems::logic::handle_apply_filters,
                systems::logic::handle_update_column,
                systems::logic::handle_remove_table,
                systems::logic::handle_save_layout,
                systems::logic::handle_load_layout,
                systems::logic::handle_delete_layout,
            )
                .chain(),
        );

        info!("TablesPlugin initialized.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::definitions::TableType;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(TablesPlugin);
        app
    }

    fn drain_feedback(app: &mut App) -> Vec<TableOperationFeedback> {
        let mut events = app
            .world_mut()
            .resource_mut::<Events<TableOperationFeedback>>();
        events.drain().collect()
    }

    #[test]
    fn drop_event_places_a_table() {
        let mut app = test_app();
        app.world_mut().send_event(PlaceTemplateRequest {
            template_id: "white-ticket".to_string(),
            row: 0,
            col: 0,
        });
        app.update();

        let registry = app.world().resource::<TableRegistry>();
        assert_eq!(registry.len(), 1);
        let table = registry.table_at(0, 0).expect("table at target cell");
        assert_eq!(table.table_type, TableType::WhiteTicket);

        let feedback = drain_feedback(&mut app);
        assert!(feedback.iter().all(|f| !f.is_error));
        let modified = app
            .world_mut()
            .resource_mut::<Events<TableCollectionModified>>()
            .drain()
            .count();
        assert!(modified > 0);
    }

    #[test]
    fn unknown_template_id_yields_error_feedback() {
        let mut app = test_app();
        app.world_mut().send_event(PlaceTemplateRequest {
            template_id: "mystery-table".to_string(),
            row: 0,
            col: 0,
        });
        app.update();

        assert!(app.world().resource::<TableRegistry>().is_empty());
        let feedback = drain_feedback(&mut app);
        assert!(feedback.iter().any(|f| f.is_error));
    }

    #[test]
    fn full_grid_drop_reports_grid_full_and_changes_nothing() {
        let mut app = test_app();
        app.insert_resource(GridConfig::new(1, 2));
        for col in 0..2 {
            app.world_mut().send_event(PlaceTemplateRequest {
                template_id: "weekly-data".to_string(),
                row: 0,
                col,
            });
        }
        app.update();
        drain_feedback(&mut app);
        let before = app.world().resource::<TableRegistry>().snapshot();

        app.world_mut().send_event(PlaceTemplateRequest {
            template_id: "promo-planning".to_string(),
            row: 0,
            col: 0,
        });
        app.update();

        let registry = app.world().resource::<TableRegistry>();
        assert_eq!(registry.snapshot(), before);
        let feedback = drain_feedback(&mut app);
        assert!(feedback.iter().any(|f| f.is_error && f.message.contains("grid is full")));
    }

    #[test]
    fn save_and_load_round_trip_through_events() {
        let mut app = test_app();
        app.world_mut().send_event(PlaceTemplateRequest {
            template_id: "weekly-data".to_string(),
            row: 0,
            col: 0,
        });
        app.update();
        app.world_mut().send_event(SaveLayoutRequest {
            name: "Q1 Plan".to_string(),
        });
        app.update();

        // Grow the live collection, then restore the snapshot.
        app.world_mut().send_event(PlaceTemplateRequest {
            template_id: "white-ticket".to_string(),
            row: 1,
            col: 0,
        });
        app.update();
        assert_eq!(app.world().resource::<TableRegistry>().len(), 2);

        app.world_mut().send_event(LoadLayoutRequest {
            name: "Q1 Plan".to_string(),
        });
        app.update();
        assert_eq!(app.world().resource::<TableRegistry>().len(), 1);

        // A second save under the same name is refused.
        drain_feedback(&mut app);
        app.world_mut().send_event(SaveLayoutRequest {
            name: "Q1 Plan".to_string(),
        });
        app.update();
        let feedback = drain_feedback(&mut app);
        assert!(feedback.iter().any(|f| f.is_error && f.message.contains("already exists")));
    }
}
