//! Transient form state for creating or editing a product.

use crate::error::{DraftError, DraftResult};
use crate::product::{Product, ProductId};

/// The five editable form fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DraftField {
    Id,
    Name,
    Description,
    Price,
    Quantity,
}

/// Locally-held copy of form field values not yet sent to the server.
///
/// Numeric fields are `Option<_>`: `None` is the "no value yet" state an
/// empty input produces, distinct from zero. Text fields are stored
/// verbatim, including whitespace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductDraft {
    /// An all-empty draft, as shown when the create form opens.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pre-fill the draft from an existing product (edit mode).
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id.0),
            name: product.name.clone(),
            description: product.description.clone(),
            price: Some(product.price),
            quantity: Some(product.quantity),
        }
    }

    /// Apply a raw input value to one field.
    ///
    /// Numeric fields coerce: an empty string clears the field to unset,
    /// a parseable number replaces it, and anything else leaves the
    /// previous value in place (a `number` input does not normally emit
    /// garbage). Text fields take the raw value as-is.
    pub fn set(&mut self, field: DraftField, raw: &str) {
        match field {
            DraftField::Id => coerce_int(&mut self.id, raw),
            DraftField::Name => self.name = raw.to_string(),
            DraftField::Description => self.description = raw.to_string(),
            DraftField::Price => coerce_float(&mut self.price, raw),
            DraftField::Quantity => coerce_int(&mut self.quantity, raw),
        }
    }

    /// Clear every field back to the empty state.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    /// True when no field holds a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Convert a completed draft into a product record for submission.
    ///
    /// Fails with the first unset/empty required field, in form order.
    pub fn to_product(&self) -> DraftResult<Product> {
        let id = self.id.ok_or(DraftError::missing("id"))?;
        if self.name.is_empty() {
            return Err(DraftError::missing("name"));
        }
        if self.description.is_empty() {
            return Err(DraftError::missing("description"));
        }
        let price = self.price.ok_or(DraftError::missing("price"))?;
        let quantity = self.quantity.ok_or(DraftError::missing("quantity"))?;

        Ok(Product {
            id: ProductId::new(id),
            name: self.name.clone(),
            description: self.description.clone(),
            price,
            quantity,
        })
    }
}

fn coerce_int(slot: &mut Option<i64>, raw: &str) {
    if raw.is_empty() {
        *slot = None;
    } else if let Ok(value) = raw.parse::<i64>() {
        *slot = Some(value);
    }
}

fn coerce_float(slot: &mut Option<f64>, raw: &str) {
    if raw.is_empty() {
        *slot = None;
    } else if let Ok(value) = raw.parse::<f64>() {
        *slot = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: 1.5,
            quantity: 10,
        }
    }

    #[test]
    fn empty_input_clears_numeric_field_to_unset_not_zero() {
        let mut draft = ProductDraft::empty();
        draft.set(DraftField::Quantity, "7");
        assert_eq!(draft.quantity, Some(7));

        draft.set(DraftField::Quantity, "");
        assert_eq!(draft.quantity, None);
        assert_ne!(draft.quantity, Some(0));
    }

    #[test]
    fn unparseable_numeric_input_keeps_previous_value() {
        let mut draft = ProductDraft::empty();
        draft.set(DraftField::Price, "9.99");
        draft.set(DraftField::Price, "9.99.");
        assert_eq!(draft.price, Some(9.99));
    }

    #[test]
    fn text_fields_are_stored_verbatim() {
        let mut draft = ProductDraft::empty();
        draft.set(DraftField::Name, "  Pen ");
        assert_eq!(draft.name, "  Pen ");
    }

    #[test]
    fn draft_from_product_converts_back_unchanged() {
        let product = pen();
        let draft = ProductDraft::from_product(&product);
        assert_eq!(draft.to_product().unwrap(), product);
    }

    #[test]
    fn incomplete_draft_reports_first_missing_field_in_form_order() {
        let mut draft = ProductDraft::empty();
        assert_eq!(draft.to_product(), Err(DraftError::missing("id")));

        draft.set(DraftField::Id, "3");
        assert_eq!(draft.to_product(), Err(DraftError::missing("name")));

        draft.set(DraftField::Name, "Pen");
        draft.set(DraftField::Description, "Blue pen");
        assert_eq!(draft.to_product(), Err(DraftError::missing("price")));

        draft.set(DraftField::Price, "1.5");
        assert_eq!(draft.to_product(), Err(DraftError::missing("quantity")));

        draft.set(DraftField::Quantity, "10");
        assert_eq!(draft.to_product().unwrap(), pen());
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = ProductDraft::from_product(&pen());
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, ProductDraft::empty());
    }

    #[test]
    fn serialized_draft_matches_api_body_shape() {
        let draft = ProductDraft::from_product(&pen());
        let body = serde_json::to_value(draft.to_product().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "id": 1,
                "name": "Pen",
                "description": "Blue pen",
                "price": 1.5,
                "quantity": 10,
            })
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: setting then clearing a numeric field always
            /// lands back on unset, regardless of what was typed.
            #[test]
            fn clearing_always_yields_unset(raw in "-?[0-9]{1,10}") {
                let mut draft = ProductDraft::empty();
                draft.set(DraftField::Id, &raw);
                draft.set(DraftField::Id, "");
                prop_assert_eq!(draft.id, None);
            }

            /// Property: a numeric setter either replaces the value with
            /// the parsed input or leaves it untouched; it never invents
            /// a third value.
            #[test]
            fn numeric_setter_parses_or_retains(
                initial in proptest::option::of(any::<i64>()),
                raw in "\\PC{0,12}"
            ) {
                let mut draft = ProductDraft { quantity: initial, ..ProductDraft::empty() };
                draft.set(DraftField::Quantity, &raw);

                if raw.is_empty() {
                    prop_assert_eq!(draft.quantity, None);
                } else if let Ok(parsed) = raw.parse::<i64>() {
                    prop_assert_eq!(draft.quantity, Some(parsed));
                } else {
                    prop_assert_eq!(draft.quantity, initial);
                }
            }

            /// Property: draft -> product -> draft is lossless for any
            /// complete product.
            #[test]
            fn product_draft_round_trip(
                id in any::<i64>(),
                name in "[A-Za-z][A-Za-z0-9 ]{0,40}",
                description in "[A-Za-z][A-Za-z0-9 ]{0,80}",
                price in 0.0f64..1_000_000.0,
                quantity in 0i64..1_000_000,
            ) {
                let product = Product {
                    id: ProductId::new(id),
                    name,
                    description,
                    price,
                    quantity,
                };
                let draft = ProductDraft::from_product(&product);
                prop_assert_eq!(draft.to_product().unwrap(), product);
            }
        }
    }
}
