//! The inventory controller: product list and form-editing state.
//!
//! State lives in one explicit owned struct with a transition method per
//! user action; no ambient globals. `InventoryController` wires those
//! transitions to a `ProductApi` for the async flows.

use stockdeck_client::{ApiError, ProductApi};
use stockdeck_core::{DraftField, Product, ProductDraft, ProductId};

/// The user's answer to the destructive-action prompt.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfirmDecision {
    Confirmed,
    Declined,
}

/// What a finished user action should surface.
///
/// `Cancelled` (a declined confirmation) surfaces nothing; everything
/// else carries a blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Created,
    Updated,
    Deleted,
    Cancelled,
    Failed(String),
}

impl Feedback {
    pub fn failed_adding(err: impl std::fmt::Display) -> Self {
        Self::Failed(format!("Error adding product: {}", err))
    }

    pub fn failed_updating(err: impl std::fmt::Display) -> Self {
        Self::Failed(format!("Error updating product: {}", err))
    }

    pub fn failed_deleting(err: impl std::fmt::Display) -> Self {
        Self::Failed(format!("Error deleting product: {}", err))
    }

    /// Message to show the user, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Created => Some("Product added successfully!"),
            Self::Updated => Some("Product updated successfully!"),
            Self::Deleted => Some("Product deleted successfully!"),
            Self::Cancelled => None,
            Self::Failed(message) => Some(message),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Controller state: the cached product list plus form-editing state.
///
/// `products` mirrors the server's last successful list response
/// verbatim and is never patched locally. `editing` doubles as the form
/// mode: `None` is create mode, `Some` is update mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub form_visible: bool,
    pub editing: Option<Product>,
    pub draft: ProductDraft,
}

impl ControllerState {
    /// Startup state: loading, nothing cached, form hidden.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            loading: true,
            error: None,
            form_visible: false,
            editing: None,
            draft: ProductDraft::empty(),
        }
    }

    /// A list load has been issued.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// A list load finished.
    ///
    /// Success replaces the cached list and clears the error banner; a
    /// failure records the banner message and keeps the stale list.
    pub fn finish_load(&mut self, result: Result<Vec<Product>, ApiError>) {
        match result {
            Ok(products) => {
                self.products = products;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(format!("Failed to fetch products: {}", err));
            }
        }
        self.loading = false;
    }

    /// Open the form in create mode with an empty draft.
    pub fn begin_create(&mut self) {
        self.draft.clear();
        self.editing = None;
        self.form_visible = true;
    }

    /// Open the form in update mode, pre-filled from the product.
    pub fn begin_edit(&mut self, product: Product) {
        self.draft = ProductDraft::from_product(&product);
        self.editing = Some(product);
        self.form_visible = true;
    }

    /// Apply one raw input value to the draft.
    pub fn update_field(&mut self, field: DraftField, raw: &str) {
        self.draft.set(field, raw);
    }

    /// Back to the Hidden form state: draft cleared, editing cleared.
    pub fn reset_form(&mut self) {
        self.draft.clear();
        self.editing = None;
        self.form_visible = false;
    }

    /// The id input is locked whenever an existing product is edited,
    /// since the id is the update key.
    pub fn id_locked(&self) -> bool {
        self.editing.is_some()
    }
}

impl Default for ControllerState {
    fn default() -> Self {
        Self::new()
    }
}

/// The controller: state plus the API it talks to.
pub struct InventoryController<A> {
    api: A,
    state: ControllerState,
}

impl<A: ProductApi> InventoryController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ControllerState::new(),
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// Load the full list. Run once at startup and again after every
    /// successful mutation; a failure keeps whatever was last loaded.
    pub async fn load_products(&mut self) {
        self.state.begin_load();
        let result = self.api.list_products().await;
        if let Err(err) = &result {
            tracing::warn!("product list load failed: {}", err);
        }
        self.state.finish_load(result);
    }

    pub fn begin_create(&mut self) {
        self.state.begin_create();
    }

    pub fn begin_edit(&mut self, product: Product) {
        self.state.begin_edit(product);
    }

    pub fn update_field(&mut self, field: DraftField, raw: &str) {
        self.state.update_field(field, raw);
    }

    /// Abandon the form without touching the server.
    pub fn cancel(&mut self) {
        self.state.reset_form();
    }

    /// Submit the form, branching on the editing target.
    ///
    /// On success the list is re-fetched and the form reset; on failure
    /// the form stays open with the draft intact so the user can retry
    /// the same submission.
    pub async fn submit(&mut self) -> Feedback {
        let editing = self.state.editing.clone();
        let feedback = run_submit(&self.api, &self.state.draft, editing.as_ref()).await;

        if !feedback.is_failure() {
            self.load_products().await;
            self.state.reset_form();
        }
        feedback
    }

    /// Delete a product, guarded by an explicit confirmation.
    ///
    /// A declined confirmation is a no-op: no request leaves the client
    /// and the list is untouched.
    pub async fn delete_product(&mut self, id: ProductId, decision: ConfirmDecision) -> Feedback {
        let feedback = run_delete(&self.api, id, decision).await;

        if feedback == Feedback::Deleted {
            self.load_products().await;
        }
        feedback
    }
}

/// Validate the draft and issue the create or update request.
///
/// This is the one submission flow: the controller and the browser
/// frontend both run it. It does not touch controller state; the caller
/// applies the outcome (re-fetch and reset on success, nothing on
/// failure so the draft survives for a retry).
pub async fn run_submit<A: ProductApi>(
    api: &A,
    draft: &ProductDraft,
    editing: Option<&Product>,
) -> Feedback {
    match editing {
        None => {
            let product = match draft.to_product() {
                Ok(product) => product,
                Err(err) => return Feedback::failed_adding(err),
            };

            match api.create_product(&product).await {
                Ok(()) => Feedback::Created,
                Err(err) => {
                    tracing::warn!("create failed for product {}: {}", product.id, err);
                    Feedback::failed_adding(err)
                }
            }
        }
        Some(target) => {
            let product = match draft.to_product() {
                Ok(product) => product,
                Err(err) => return Feedback::failed_updating(err),
            };

            match api.update_product(target.id, &product).await {
                Ok(()) => Feedback::Updated,
                Err(err) => {
                    tracing::warn!("update failed for product {}: {}", target.id, err);
                    Feedback::failed_updating(err)
                }
            }
        }
    }
}

/// Issue the delete request behind the destructive-action guard.
///
/// A declined confirmation returns `Cancelled` without any request
/// leaving the client. Shared by the controller and the frontend, like
/// [`run_submit`].
pub async fn run_delete<A: ProductApi>(
    api: &A,
    id: ProductId,
    decision: ConfirmDecision,
) -> Feedback {
    if decision == ConfirmDecision::Declined {
        return Feedback::Cancelled;
    }

    match api.delete_product(id).await {
        Ok(()) => Feedback::Deleted,
        Err(err) => {
            tracing::warn!("delete failed for product {}: {}", id, err);
            Feedback::failed_deleting(err)
        }
    }
}
