//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid input to the scaffolding rules.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("component name must not be empty")]
    EmptyName,
}
