//! Shared data model and configuration for the StyleGuru services.
//!
//! Everything that crosses a crate boundary lives here: the user [`Profile`],
//! catalog entity types, the per-kind recommendation payloads, chat message
//! shapes, and the process [`AppConfig`].

use thiserror::Error;

pub mod app_config;
pub mod catalog;
pub mod chat;
pub mod config;
pub mod profile;
pub mod recommendations;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use profile::{ProductRequest, Profile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
