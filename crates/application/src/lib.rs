//! Application layer - Use cases and orchestration
//!
//! Turns raw provider observations into the forecast model and defines the
//! ports the infrastructure layer implements.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
