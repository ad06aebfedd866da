// src/ui/elements/popups.rs
use bevy::prelude::*;
use bevy_egui::egui;
use chrono::NaiveDate;

use crate::tables::events::{ApplyTableFiltersRequest, DeleteLayoutRequest, SaveLayoutRequest};
use crate::tables::{
    is_field_applicable, FilterField, FilterState, ProductHierarchy, TableRegistry, TableType,
};
use crate::ui::state::DashboardWindowState;

/// Time periods offered for weekly price data.
const TIME_PERIODS: [(&str, &str); 2] = [("fall-2024", "Fall 2024"), ("spring-2024", "Spring 2024")];

/// The cascading filter dialog. Selections edit a draft; the engine only
/// sees the committed whole on Apply. A parent change clears the draft's
/// descendant fields immediately so the dependent combos repopulate.
pub(super) fn show_filter_popup(
    ctx: &egui::Context,
    state: &mut DashboardWindowState,
    registry: &TableRegistry,
    hierarchy: &ProductHierarchy,
    filters_writer: &mut EventWriter<ApplyTableFiltersRequest>,
) {
    if !state.show_filter_popup {
        return;
    }
    let Some(table) = state
        .filter_target_table
        .as_deref()
        .and_then(|id| registry.get(id))
    else {
        // Target vanished (e.g. removed, or the collection was replaced by
        // a layout load) while the dialog was open.
        state.close_filter_popup();
        return;
    };
    let table_id = table.id.clone();
    let table_type = table.table_type;

    let mut popup_open = true;
    let mut trigger_apply = false;
    let mut cancel = false;

    egui::Window::new("Filter Options")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            hierarchy_combo(
                ui,
                "Department",
                hierarchy.departments(),
                &mut state.filter_draft,
                FilterField::Dept,
            );
            if !state.filter_draft.dept.is_empty() {
                let classes = hierarchy.available_classes(&state.filter_draft.dept).to_vec();
                hierarchy_combo(ui, "Class", &classes, &mut state.filter_draft, FilterField::Class);
            }
            if !state.filter_draft.class.is_empty() {
                let subs = hierarchy
                    .available_sub_classes(&state.filter_draft.class)
                    .to_vec();
                hierarchy_combo(
                    ui,
                    "Sub-class",
                    &subs,
                    &mut state.filter_draft,
                    FilterField::SubClass,
                );
            }
            if !state.filter_draft.sub_class.is_empty() {
                let styles = hierarchy
                    .available_styles(&state.filter_draft.sub_class)
                    .to_vec();
                hierarchy_combo(ui, "Style", &styles, &mut state.filter_draft, FilterField::Style);
            }

            if is_field_applicable(table_type, FilterField::TimePeriod) {
                ui.separator();
                let selected_label = TIME_PERIODS
                    .iter()
                    .find(|(value, _)| *value == state.filter_draft.time_period)
                    .map(|(_, label)| *label)
                    .unwrap_or("Choose time period");
                egui::ComboBox::from_id_salt("filter_time_period")
                    .selected_text(selected_label)
                    .show_ui(ui, |ui| {
                        for (value, label) in TIME_PERIODS.iter() {
                            let is_selected = state.filter_draft.time_period == *value;
                            if ui.selectable_label(is_selected, *label).clicked() {
                                state.filter_draft.time_period = value.to_string();
                            }
                        }
                    });

                ui.horizontal(|ui| {
                    ui.label("📅 From:");
                    ui.add(
                        egui::TextEdit::singleline(&mut state.start_date_input)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(90.0),
                    );
                    ui.label("📅 To:");
                    ui.add(
                        egui::TextEdit::singleline(&mut state.end_date_input)
                            .hint_text("YYYY-MM-DD")
                            .desired_width(90.0),
                    );
                });
            }

            if let Some(err) = &state.filter_input_error {
                ui.colored_label(egui::Color32::RED, err);
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Apply Filters").clicked() {
                    trigger_apply = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if trigger_apply {
        match parse_date_inputs(state, table_type) {
            Ok(()) => {
                filters_writer.write(ApplyTableFiltersRequest {
                    table_id,
                    filters: state.filter_draft.clone(),
                });
                state.close_filter_popup();
            }
            Err(msg) => state.filter_input_error = Some(msg),
        }
    } else if cancel || !popup_open {
        state.close_filter_popup();
    }
}

/// Reads the date text inputs into the draft. Fields that do not apply to
/// the table's type are dropped rather than validated.
fn parse_date_inputs(
    state: &mut DashboardWindowState,
    table_type: TableType,
) -> Result<(), String> {
    if !is_field_applicable(table_type, FilterField::StartDate) {
        state.filter_draft.time_period.clear();
        state.filter_draft.start_date = None;
        state.filter_draft.end_date = None;
        return Ok(());
    }
    state.filter_draft.start_date = parse_optional_date(&state.start_date_input, "start date")?;
    state.filter_draft.end_date = parse_optional_date(&state.end_date_input, "end date")?;
    Ok(())
}

fn parse_optional_date(input: &str, label: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<NaiveDate>()
        .map(Some)
        .map_err(|_| format!("Invalid {} '{}': expected YYYY-MM-DD.", label, trimmed))
}

/// One level of the cascade as a combo box. Changing the selection clears
/// every descendant field in the draft.
fn hierarchy_combo(
    ui: &mut egui::Ui,
    label: &str,
    options: &[String],
    draft: &mut FilterState,
    field: FilterField,
) {
    let current = draft.hierarchy_value(field).unwrap_or_default().to_string();
    let selected_text = if current.is_empty() {
        format!("Select {}", label)
    } else {
        current.clone()
    };

    let mut new_value: Option<String> = None;
    egui::ComboBox::from_id_salt(("filter_combo", field))
        .selected_text(selected_text)
        .show_ui(ui, |ui| {
            for option in options {
                if ui.selectable_label(current == *option, option).clicked() && current != *option {
                    new_value = Some(option.clone());
                }
            }
        });

    if let Some(value) = new_value {
        match field {
            FilterField::Dept => draft.dept = value,
            FilterField::Class => draft.class = value,
            FilterField::SubClass => draft.sub_class = value,
            FilterField::Style => draft.style = value,
            _ => {}
        }
        draft.clear_descendants(field);
    }
}

/// Names and saves the current grid arrangement. Duplicate-name rejection
/// comes back through the feedback banner.
pub(super) fn show_save_layout_popup(
    ctx: &egui::Context,
    state: &mut DashboardWindowState,
    save_writer: &mut EventWriter<SaveLayoutRequest>,
) {
    if !state.show_save_layout_popup {
        return;
    }
    let mut popup_open = true;
    let mut trigger_save = false;

    egui::Window::new("Save Layout")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Layout name:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut state.layout_name_input)
                        .desired_width(150.0)
                        .lock_focus(true),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    trigger_save = true;
                }
            });
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Save Layout").clicked() {
                    trigger_save = true;
                }
                if ui.button("Cancel").clicked() {
                    state.show_save_layout_popup = false;
                }
            });
        });

    if trigger_save {
        save_writer.write(SaveLayoutRequest {
            name: state.layout_name_input.clone(),
        });
        state.show_save_layout_popup = false;
        state.layout_name_input.clear();
    } else if !popup_open {
        state.show_save_layout_popup = false;
    }
}

pub(super) fn show_delete_layout_popup(
    ctx: &egui::Context,
    state: &mut DashboardWindowState,
    delete_writer: &mut EventWriter<DeleteLayoutRequest>,
) {
    if !state.show_delete_layout_popup {
        return;
    }
    let mut popup_open = true;
    let mut trigger_delete = false;

    egui::Window::new("Delete Layout")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut popup_open)
        .show(ctx, |ui| {
            ui.label(format!(
                "Delete layout '{}'? This cannot be undone.",
                state.delete_layout_target
            ));
            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Delete").clicked() {
                    trigger_delete = true;
                }
                if ui.button("Cancel").clicked() {
                    state.show_delete_layout_popup = false;
                }
            });
        });

    if trigger_delete {
        delete_writer.write(DeleteLayoutRequest {
            name: state.delete_layout_target.clone(),
        });
        state.show_delete_layout_popup = false;
        state.delete_layout_target.clear();
    } else if !popup_open {
        state.show_delete_layout_popup = false;
    }
}
