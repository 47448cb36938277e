//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem, Prompter)
//! but are themselves concrete structs, not traits.

mod scaffold;

pub use scaffold::{ScaffoldService, OVERWRITE_PROMPT};
