//! CelestaClima - city weather lookup TUI
//!
//! This library exposes the app's modules for testing.

pub mod action;
pub mod api;
pub mod components;
pub mod config;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod sprites;
pub mod state;
pub mod tasks;
pub mod view;
