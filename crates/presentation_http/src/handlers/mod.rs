//! HTTP request handlers

pub mod geocoding;
pub mod health;
pub mod weather;
