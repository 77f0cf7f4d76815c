//! Shared types and the configuration layer for the freefly workspace.
//!
//! # Invariants
//! - Configuration is validated once at load time; downstream crates trust it.
//! - Angles are radians everywhere except where a field name says otherwise.

pub mod config;
pub mod types;

pub use config::{ConfigError, FreeflyConfig, NavigatorSettings, WindowSettings};
pub use types::Orientation;
