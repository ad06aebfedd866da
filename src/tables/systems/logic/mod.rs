// src/tables/systems/logic/mod.rs

// One handler per request event.
pub mod apply_filters;
pub mod change_table_type;
pub mod layouts;
pub mod place_table;
pub mod remove_table;
pub mod update_column;

// Re-export the handler functions for easier use in plugin.rs
pub use apply_filters::handle_apply_filters;
pub use change_table_type::handle_change_table_type;
pub use layouts::{handle_delete_layout, handle_load_layout, handle_save_layout};
pub use place_table::handle_place_template;
pub use remove_table::handle_remove_table;
pub use update_column::handle_update_column;
