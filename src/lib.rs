// src/lib.rs

#[macro_use]
pub mod macros;

pub mod check;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod gui;
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
