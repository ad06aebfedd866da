// src/ui/elements/mod.rs

pub mod dashboard;
pub mod grid_panel;
pub mod popups;
pub mod sidebar;
