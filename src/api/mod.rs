//! Episode backend: wire models, the HTTP client and its errors.

mod client;
mod error;
pub mod models;

pub use client::*;
pub use error::ApiError;
pub use models::*;
