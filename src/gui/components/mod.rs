// src/gui/components/mod.rs
pub mod export_bar;
pub mod footer;
pub mod form;
pub mod results_table;
