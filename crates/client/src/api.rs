//! The API surface the controller is written against.

use stockdeck_core::{Product, ProductId};

use crate::error::ApiError;

/// Operations the remote product API offers.
///
/// The controller is generic over this trait so its flows can run
/// against an in-memory double in tests. `HttpProductApi` is the one
/// production implementation.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    /// `GET /products` — the full list, in server order.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /product/{id}` — a single record.
    async fn fetch_product(&self, id: ProductId) -> Result<Product, ApiError>;

    /// `POST /product` — create; the caller assigns the id.
    async fn create_product(&self, product: &Product) -> Result<(), ApiError>;

    /// `PUT /product?product_id={id}` — full update by id.
    async fn update_product(&self, id: ProductId, product: &Product) -> Result<(), ApiError>;

    /// `DELETE /product?product_id={id}` — delete by id.
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError>;
}
