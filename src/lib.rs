// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod params;

pub mod clipboard;
pub mod csv;
pub mod error;
pub mod extract;
pub mod file;
pub mod filter;
pub mod gui;
pub mod model;
pub mod preview;
pub mod progress;
pub mod render;
pub mod sample;
pub mod session;
pub mod toast;
