// src/ui/elements/grid_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;
use egui_extras::{Column, TableBuilder};

use crate::tables::events::{
    ChangeTableTypeRequest, PlaceTemplateRequest, RemoveTableRequest, UpdateTableColumnRequest,
};
use crate::tables::{
    GridConfig, PlacedTable, TableRegistry, AVAILABLE_METRICS, TABLE_TEMPLATES,
};
use crate::ui::state::DashboardWindowState;

pub(super) struct GridPanelEventWriters<'a, 'w1, 'w2, 'w3, 'w4> {
    pub place_writer: &'a mut EventWriter<'w1, PlaceTemplateRequest>,
    pub type_writer: &'a mut EventWriter<'w2, ChangeTableTypeRequest>,
    pub column_writer: &'a mut EventWriter<'w3, UpdateTableColumnRequest>,
    pub remove_writer: &'a mut EventWriter<'w4, RemoveTableRequest>,
}

/// The staging grid: one drop zone per cell, rendered row by row in the
/// same row-major order the placement scan uses.
pub(super) fn show_grid_panel(
    ui: &mut egui::Ui,
    state: &mut DashboardWindowState,
    registry: &TableRegistry,
    grid: &GridConfig,
    writers: &mut GridPanelEventWriters,
) {
    let cell_width = (ui.available_width() - 16.0 * grid.cols as f32) / grid.cols as f32;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for row in 0..grid.rows {
            ui.horizontal_top(|ui| {
                for col in 0..grid.cols {
                    show_grid_cell(ui, state, registry, row, col, cell_width, writers);
                }
            });
            ui.add_space(6.0);
        }
    });
}

fn show_grid_cell(
    ui: &mut egui::Ui,
    state: &mut DashboardWindowState,
    registry: &TableRegistry,
    row: usize,
    col: usize,
    cell_width: f32,
    writers: &mut GridPanelEventWriters,
) {
    let frame = egui::Frame::group(ui.style()).inner_margin(egui::Margin::same(6));
    let (_, dropped_payload) = ui.dnd_drop_zone::<String, ()>(frame, |ui| {
        ui.set_min_size(egui::vec2(cell_width.max(240.0), 130.0));
        ui.set_max_width(cell_width.max(240.0));
        match registry.table_at(row, col) {
            Some(table) => show_placed_table(ui, state, table, writers),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.weak(format!("({},{}) — drop a table here", row, col));
                });
            }
        }
    });

    if let Some(template_id) = dropped_payload {
        writers.place_writer.write(PlaceTemplateRequest {
            template_id: (*template_id).clone(),
            row,
            col,
        });
    }
}

fn show_placed_table(
    ui: &mut egui::Ui,
    state: &mut DashboardWindowState,
    table: &PlacedTable,
    writers: &mut GridPanelEventWriters,
) {
    ui.vertical(|ui| {
        // Header bar: type selector, filter and remove controls.
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_salt(("table_type_selector", &table.id))
                .selected_text(table.table_type.to_string())
                .show_ui(ui, |ui| {
                    for template in TABLE_TEMPLATES.iter() {
                        let is_current = table.table_type == template.table_type;
                        if ui.selectable_label(is_current, template.title).clicked() && !is_current
                        {
                            writers.type_writer.write(ChangeTableTypeRequest {
                                table_id: table.id.clone(),
                                new_type: template.table_type,
                            });
                        }
                    }
                });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✖").on_hover_text("Remove table").clicked() {
                    writers.remove_writer.write(RemoveTableRequest {
                        table_id: table.id.clone(),
                    });
                }
                if ui.button("⛭ Filters").on_hover_text("Filter options").clicked() {
                    state.open_filter_popup_for(table);
                }
                if !table.filters.dept.is_empty() {
                    ui.weak(&table.filters.dept);
                }
            });
        });
        ui.separator();

        show_table_grid(ui, table, writers);
    });
}

/// Column headers double as metric pickers; body rows come straight from
/// the opaque `data` payload when the collaborator has supplied one.
fn show_table_grid(ui: &mut egui::Ui, table: &PlacedTable, writers: &mut GridPanelEventWriters) {
    if table.columns.is_empty() {
        ui.weak("No columns configured.");
        return;
    }

    let data_rows = table.data.as_array().cloned().unwrap_or_default();
    let body_row_count = data_rows.len().max(3);

    TableBuilder::new(ui)
        .id_salt(("placed_table", &table.id))
        .striped(true)
        .columns(Column::auto().at_least(56.0), table.columns.len())
        .header(20.0, |mut header| {
            for (column_index, name) in table.columns.iter().enumerate() {
                header.col(|ui| {
                    ui.menu_button(format!("{} ⏷", name), |ui| {
                        for metric in AVAILABLE_METRICS.iter() {
                            if ui.button(*metric).clicked() {
                                writers.column_writer.write(UpdateTableColumnRequest {
                                    table_id: table.id.clone(),
                                    column_index,
                                    new_name: metric.to_string(),
                                });
                                ui.close_menu();
                            }
                        }
                    });
                });
            }
        })
        .body(|body| {
            body.rows(18.0, body_row_count, |mut row| {
                let row_index = row.index();
                let record = data_rows.get(row_index);
                for name in &table.columns {
                    row.col(|ui| {
                        let text = record
                            .and_then(|r| r.get(name))
                            .map(cell_text)
                            .unwrap_or_else(|| "—".to_string());
                        ui.label(text);
                    });
                }
            });
        });
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
