// src/ui/elements/dashboard.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::tables::events::{
    ApplyTableFiltersRequest, ChangeTableTypeRequest, DeleteLayoutRequest, LoadLayoutRequest,
    PlaceTemplateRequest, RemoveTableRequest, SaveLayoutRequest, UpdateTableColumnRequest,
};
use crate::tables::{GridConfig, LayoutStore, ProductHierarchy, TableRegistry};
use crate::ui::{
    elements::{
        grid_panel::{show_grid_panel, GridPanelEventWriters},
        popups::{show_delete_layout_popup, show_filter_popup, show_save_layout_popup},
        sidebar::show_sidebar,
    },
    state::DashboardWindowState,
    UiFeedbackState,
};

/// Top-level egui pass: popups first, then the sidebar and the staging
/// grid. Reads engine resources immutably; every mutation leaves as a
/// request event.
#[allow(clippy::too_many_arguments)]
pub fn dashboard_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<DashboardWindowState>,
    registry: Res<TableRegistry>,
    store: Res<LayoutStore>,
    grid: Res<GridConfig>,
    hierarchy: Res<ProductHierarchy>,
    ui_feedback: Res<UiFeedbackState>,
    mut place_writer: EventWriter<PlaceTemplateRequest>,
    mut type_writer: EventWriter<ChangeTableTypeRequest>,
    mut filters_writer: EventWriter<ApplyTableFiltersRequest>,
    mut column_writer: EventWriter<UpdateTableColumnRequest>,
    mut remove_writer: EventWriter<RemoveTableRequest>,
    mut save_writer: EventWriter<SaveLayoutRequest>,
    mut load_writer: EventWriter<LoadLayoutRequest>,
    mut delete_writer: EventWriter<DeleteLayoutRequest>,
) {
    let ctx = contexts.ctx_mut();

    show_filter_popup(ctx, &mut state, &registry, &hierarchy, &mut filters_writer);
    show_save_layout_popup(ctx, &mut state, &mut save_writer);
    show_delete_layout_popup(ctx, &mut state, &mut delete_writer);

    let sidebar_width = if state.sidebar_collapsed { 52.0 } else { 230.0 };
    egui::SidePanel::left("template_sidebar")
        .resizable(false)
        .exact_width(sidebar_width)
        .show(ctx, |ui| {
            show_sidebar(ui, &mut state, &store, &mut load_writer);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        if !ui_feedback.last_message.is_empty() {
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
            ui.separator();
        }

        let mut writers = GridPanelEventWriters {
            place_writer: &mut place_writer,
            type_writer: &mut type_writer,
            column_writer: &mut column_writer,
            remove_writer: &mut remove_writer,
        };
        show_grid_panel(ui, &mut state, &registry, &grid, &mut writers);
    });
}
