//! Scaffold front-end components from project templates.
//!
//! Layers, innermost first:
//! - [`domain`]: component names, root resolution, substitution rules
//! - [`application`]: the scaffolding service
//! - [`infrastructure`]: filesystem and prompt implementations, wiring
//! - [`config`]: layered settings
//! - [`cli`]: argument parsing and terminal output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
