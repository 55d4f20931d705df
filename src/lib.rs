//! Browser client for a household expense tracker.

pub mod api;
pub mod app;
pub mod components;
pub mod controller;
pub mod error;
pub mod form;
pub mod format;
pub mod logging;
pub mod models;
pub mod settings;
