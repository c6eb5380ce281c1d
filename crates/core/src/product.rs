//! The product record as the remote API serves it.

use serde::{Deserialize, Serialize};

/// Product identifier.
///
/// Assigned by the caller at creation time (not server-generated) and
/// immutable afterwards; it is the update/delete key.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A product record.
///
/// Remote-owned: the client only ever holds an ephemeral copy of the
/// server's last successful list response. `price` is a non-negative
/// decimal and `quantity` a non-negative integer by contract; neither is
/// type-enforced because the wire format is plain JSON numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ProductId::new(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn product_round_trips_through_api_json_shape() {
        let json = r#"{"id":1,"name":"Laptop","description":"A high-performance laptop","price":999.99,"quantity":10}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Laptop");
        assert_eq!(product.quantity, 10);

        let back = serde_json::to_value(&product).unwrap();
        assert_eq!(back["price"], serde_json::json!(999.99));
        assert_eq!(back["id"], serde_json::json!(1));
    }
}
