//! `stockdeck-core` — domain types for the product inventory client.
//!
//! This crate contains **pure domain** data (no IO, no HTTP): the product
//! record as the API serves it, and the transient form draft the client
//! edits before submitting.

pub mod draft;
pub mod error;
pub mod product;

pub use draft::{DraftField, ProductDraft};
pub use error::{DraftError, DraftResult};
pub use product::{Product, ProductId};
