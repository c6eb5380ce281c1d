//! Derived view state: a pure projection of the controller state.
//!
//! Nothing here is stored; the frontend re-derives the whole projection
//! on every render.

use stockdeck_core::{Product, ProductDraft, ProductId};

use crate::controller::ControllerState;

/// Which submission the form will perform.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

/// The form as rendered: mode plus the draft to show.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView<'a> {
    pub mode: FormMode,
    pub draft: &'a ProductDraft,
}

impl FormView<'_> {
    /// The id input is read-only in edit mode.
    pub fn id_locked(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add New Product",
            FormMode::Edit(_) => "Edit Product",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Product",
            FormMode::Edit(_) => "Update Product",
        }
    }
}

/// The product section: empty-state message or one card per product.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<'a> {
    Empty,
    Products(&'a [Product]),
}

/// Everything the view needs, derived from the controller state.
///
/// While loading, the indicator suppresses the rest; otherwise the
/// banner, form and listing render independently (a stale list keeps
/// rendering under an error banner).
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<'a> {
    Loading,
    Ready {
        error: Option<&'a str>,
        form: Option<FormView<'a>>,
        listing: Listing<'a>,
        count: usize,
    },
}

impl ControllerState {
    /// Project the current state into what should be on screen.
    pub fn view(&self) -> ViewState<'_> {
        if self.loading {
            return ViewState::Loading;
        }

        let form = self.form_visible.then(|| FormView {
            mode: match &self.editing {
                None => FormMode::Create,
                Some(target) => FormMode::Edit(target.id),
            },
            draft: &self.draft,
        });

        let listing = if self.products.is_empty() {
            Listing::Empty
        } else {
            Listing::Products(&self.products)
        };

        ViewState::Ready {
            error: self.error.as_deref(),
            form,
            listing,
            count: self.products.len(),
        }
    }
}

/// Price column formatting: always two decimal places.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use stockdeck_core::DraftField;

    use super::*;

    fn product(id: i64, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: format!("{} description", name),
            price: 9.9,
            quantity: 3,
        }
    }

    #[test]
    fn loading_suppresses_everything_else() {
        let mut state = ControllerState::new();
        state.products = vec![product(1, "Laptop")];
        state.error = Some("stale error".to_string());
        state.form_visible = true;

        assert_eq!(state.view(), ViewState::Loading);
    }

    #[test]
    fn a_finished_load_lands_in_exactly_one_terminal_view() {
        use stockdeck_client::ApiError;

        // Populated: products, no error, no empty-state.
        let mut state = ControllerState::new();
        state.finish_load(Ok(vec![product(1, "Laptop")]));
        match state.view() {
            ViewState::Ready {
                error: None,
                listing: Listing::Products(items),
                count,
                ..
            } => {
                assert_eq!(items.len(), 1);
                assert_eq!(count, 1);
            }
            other => panic!("expected populated view, got {:?}", other),
        }

        // Empty: no products, no error.
        let mut state = ControllerState::new();
        state.finish_load(Ok(Vec::new()));
        match state.view() {
            ViewState::Ready {
                error: None,
                listing: Listing::Empty,
                count: 0,
                ..
            } => {}
            other => panic!("expected empty view, got {:?}", other),
        }

        // Error on a fresh load: banner, nothing cached to show.
        let mut state = ControllerState::new();
        state.finish_load(Err(ApiError::Network("connection refused".to_string())));
        match state.view() {
            ViewState::Ready {
                error: Some(message),
                listing: Listing::Empty,
                ..
            } => assert!(message.contains("Failed to fetch")),
            other => panic!("expected error view, got {:?}", other),
        }
    }

    #[test]
    fn error_banner_and_stale_list_render_together() {
        use stockdeck_client::ApiError;

        let mut state = ControllerState::new();
        state.finish_load(Ok(vec![product(1, "Laptop")]));
        state.begin_load();
        state.finish_load(Err(ApiError::Status(500, "boom".to_string())));

        match state.view() {
            ViewState::Ready {
                error: Some(_),
                listing: Listing::Products(items),
                ..
            } => assert_eq!(items, &[product(1, "Laptop")]),
            other => panic!("expected banner over stale list, got {:?}", other),
        }
    }

    #[test]
    fn form_mode_follows_the_editing_target() {
        let mut state = ControllerState::new();
        state.loading = false;

        state.begin_create();
        match state.view() {
            ViewState::Ready {
                form: Some(form), ..
            } => {
                assert_eq!(form.mode, FormMode::Create);
                assert!(!form.id_locked());
                assert_eq!(form.heading(), "Add New Product");
            }
            other => panic!("expected create form, got {:?}", other),
        }

        state.begin_edit(product(7, "Desk"));
        match state.view() {
            ViewState::Ready {
                form: Some(form), ..
            } => {
                assert_eq!(form.mode, FormMode::Edit(ProductId::new(7)));
                assert!(form.id_locked());
                assert_eq!(form.submit_label(), "Update Product");
            }
            other => panic!("expected edit form, got {:?}", other),
        }

        state.reset_form();
        match state.view() {
            ViewState::Ready { form: None, .. } => {}
            other => panic!("expected hidden form, got {:?}", other),
        }
    }

    #[test]
    fn draft_values_flow_into_the_form_view() {
        let mut state = ControllerState::new();
        state.loading = false;
        state.begin_create();
        state.update_field(DraftField::Name, "Pen");

        match state.view() {
            ViewState::Ready {
                form: Some(form), ..
            } => assert_eq!(form.draft.name, "Pen"),
            other => panic!("expected form, got {:?}", other),
        }
    }

    #[test]
    fn prices_format_to_two_decimals() {
        assert_eq!(format_price(1.5), "$1.50");
        assert_eq!(format_price(999.99), "$999.99");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(10.0 / 3.0), "$3.33");
    }
}
