//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that turn configuration into a running
//! diagnosis service.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration (figment) |
//! | [`constants`] | Configuration defaults and file names |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`bootstrap`] | Registry-backed wiring of the diagnosis service |

// Providers register themselves at link time; this keeps the crate linked.
extern crate symdx_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{RegistryModelLoader, build_diagnosis_service};
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
