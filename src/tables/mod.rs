// src/tables/mod.rs

// --- Public Interface ---
pub mod definitions;
pub mod errors;
pub mod events;
pub mod grid;
pub mod hierarchy;
pub mod plugin;
pub mod resources;

// Handler systems are wiring detail, internal to the plugin.
pub(crate) mod systems;

// Re-export the types the UI layer works with.
pub use definitions::{
    FilterField, FilterState, GridPosition, PlacedTable, SavedLayout, TableTemplate, TableType,
    AVAILABLE_METRICS, TABLE_TEMPLATES,
};
pub use grid::GridConfig;
pub use hierarchy::{is_field_applicable, ProductHierarchy};
pub use plugin::TablesPlugin;
pub use resources::{LayoutStore, TableRegistry};
