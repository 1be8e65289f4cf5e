//! Domain layer for Skycast
//!
//! Contains the forecast model, unit systems, day grouping and condition
//! classification. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
