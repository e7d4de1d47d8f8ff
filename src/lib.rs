// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod specs;
pub mod types;

pub mod chart;
pub mod compare;
pub mod csv;
pub mod file;
pub mod gui;
pub mod merge;
pub mod progress;

#[cfg(feature = "cli")]
pub mod cli;
