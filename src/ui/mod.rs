// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod state;
pub mod systems;

use elements::dashboard::dashboard_ui;
use state::DashboardWindowState;
use systems::handle_ui_feedback;

/// Last operation outcome shown in the banner above the grid.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the dashboard presentation layer. Renders engine state and
/// sends request events; it never writes to the engine's resources.
pub struct DashboardUiPlugin;

impl Plugin for DashboardUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<DashboardWindowState>()
            .add_systems(Update, handle_ui_feedback)
            .add_systems(EguiContextPass, dashboard_ui);

        info!("DashboardUiPlugin initialized.");
    }
}
