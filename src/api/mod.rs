//! REST backend access: typed models, the HTTP client, and its errors.

mod client;
mod error;
pub mod models;

pub use client::{ApiClient, BearerToken};
pub use error::ApiError;
