//! `stockdeck-client`
//!
//! **Responsibility:** HTTP plumbing for the remote product inventory API.
//!
//! This crate provides:
//! - The `ProductApi` trait the controller is written against
//! - A `reqwest`-backed implementation of the five API endpoints
//! - Base-URL configuration from the environment
//!
//! The API server is the authority; nothing here caches or retries.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::ProductApi;
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::HttpProductApi;
