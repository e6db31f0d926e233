//! Configuration module for qexpand
//!
//! This module defines the TOML-backed application configuration and
//! path resolution helpers.

pub mod app_config;
pub mod path_resolver;

pub use app_config::AppConfig;
