//! Domain layer: entities and scaffolding rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod rules;

pub use entities::*;
pub use error::DomainError;
pub use rules::{expand_env_vars, is_affirmative, output_file_name, render, resolve_root};
