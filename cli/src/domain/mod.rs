//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod graph;
pub mod run;

pub use config::{DEFAULT_CONFIG_FILE, ModuleDecl, TerracottaConfig, validate_config};
pub use error::{ConfigError, GraphError};
pub use graph::ExecutionGraph;
pub use run::{Action, FailurePolicy, Step};
