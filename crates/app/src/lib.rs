//! `stockdeck-app`
//!
//! **Responsibility:** the inventory controller and its browser frontend.
//!
//! This crate provides:
//! - `InventoryController` — the list/form state machine over any
//!   `ProductApi` implementation
//! - A derived, never-stored view projection of the controller state
//! - A Leptos CSR frontend (wasm targets) rendering that projection
//!
//! The controller re-fetches the full list after every successful
//! mutation; the server is the sole source of truth.

pub mod controller;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use controller::{
    run_delete, run_submit, ConfirmDecision, ControllerState, Feedback, InventoryController,
};
pub use view::{FormMode, FormView, Listing, ViewState};
