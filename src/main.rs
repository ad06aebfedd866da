// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{log::LogPlugin, prelude::*, window::WindowPlugin};
use bevy_egui::EguiPlugin;
use clap::Parser;

mod tables;
mod ui;

use tables::{GridConfig, TablesPlugin};
use ui::DashboardUiPlugin;

/// Price tool: compose a dashboard of pricing tables on a fixed grid.
#[derive(Parser, Debug)]
#[command(name = "pricegrid")]
#[command(about = "Price tool - drag pricing tables onto a staging grid", long_about = None)]
struct Cli {
    /// Number of grid rows in the staging area
    #[arg(long, default_value_t = 6)]
    rows: usize,

    /// Number of grid columns in the staging area
    #[arg(long, default_value_t = 2)]
    cols: usize,
}

fn main() {
    let cli = Cli::parse();

    App::new()
        .insert_resource(GridConfig::new(cli.rows, cli.cols))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Price Tool".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TablesPlugin)
        .add_plugins(DashboardUiPlugin)
        .run();
}
