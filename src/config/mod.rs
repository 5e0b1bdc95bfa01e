//! Configuration module for the catalog client
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;
