//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Unit system token is not `metric` or `imperial`
    #[error("Invalid unit system: {0}")]
    InvalidUnitSystem(String),

    /// Day grouping token is not `weekday` or `date`
    #[error("Invalid day grouping: {0}")]
    InvalidDayGrouping(String),
}
