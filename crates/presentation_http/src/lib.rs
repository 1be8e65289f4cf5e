//! Skycast HTTP presentation layer
//!
//! Serves the forecast composite and location suggestions over JSON.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, set_expose_internal_errors};
pub use routes::{create_app, create_router};
pub use state::AppState;
