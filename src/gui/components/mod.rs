// src/gui/components/mod.rs
pub mod bar_chart;
pub mod compare_bar;
pub mod data_table;
pub mod export_bar;
