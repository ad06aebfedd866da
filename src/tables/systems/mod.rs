// src/tables/systems/mod.rs

pub mod logic;
