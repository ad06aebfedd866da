// src/ui/elements/sidebar.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::tables::events::LoadLayoutRequest;
use crate::tables::{LayoutStore, TABLE_TEMPLATES};
use crate::ui::state::DashboardWindowState;

/// Left panel: draggable template cards plus the saved-layouts section.
/// Templates are egui drag-and-drop sources carrying their template id;
/// the grid cells are the matching drop zones.
pub(super) fn show_sidebar(
    ui: &mut egui::Ui,
    state: &mut DashboardWindowState,
    store: &LayoutStore,
    load_writer: &mut EventWriter<LoadLayoutRequest>,
) {
    ui.horizontal(|ui| {
        if !state.sidebar_collapsed {
            ui.colored_label(egui::Color32::from_rgb(67, 56, 202), "PRICE TOOL");
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let toggle_label = if state.sidebar_collapsed { "☰" } else { "◀" };
            if ui.button(toggle_label).clicked() {
                state.sidebar_collapsed = !state.sidebar_collapsed;
            }
        });
    });
    ui.separator();

    if !state.sidebar_collapsed {
        ui.weak("Drag the tables below to the staging area");
        ui.add_space(4.0);
    }

    for template in TABLE_TEMPLATES.iter() {
        let drag_id = egui::Id::new(("template_card", template.id));
        ui.dnd_drag_source(drag_id, template.id.to_string(), |ui| {
            let label = if state.sidebar_collapsed {
                "☰".to_string()
            } else {
                template.title.to_string()
            };
            ui.add_sized(
                [ui.available_width(), 28.0],
                egui::Button::new(label).wrap(),
            )
            .on_hover_text("Drag onto a grid cell");
        });
        ui.add_space(2.0);
    }

    if state.sidebar_collapsed {
        return;
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.strong("SAVED LAYOUTS");
        if ui
            .button("💾 Save")
            .on_hover_text("Save the current grid as a named layout")
            .clicked()
        {
            state.layout_name_input.clear();
            state.show_save_layout_popup = true;
        }
    });

    if store.layouts().is_empty() {
        ui.weak("No layouts saved yet.");
        return;
    }

    for layout in store.layouts() {
        ui.horizontal(|ui| {
            if ui
                .link(&layout.name)
                .on_hover_text(format!(
                    "{} tables, saved {}",
                    layout.tables.len(),
                    layout.saved_at.format("%Y-%m-%d %H:%M")
                ))
                .clicked()
            {
                load_writer.write(LoadLayoutRequest {
                    name: layout.name.clone(),
                });
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗑").on_hover_text("Delete layout").clicked() {
                    state.delete_layout_target = layout.name.clone();
                    state.show_delete_layout_popup = true;
                }
            });
        });
    }
}
