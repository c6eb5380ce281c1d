//! Leptos application: product list with create/edit/delete form.

use leptos::*;

use stockdeck_client::config::DEFAULT_API_URL;
use stockdeck_client::{HttpProductApi, ProductApi};
use stockdeck_core::{DraftField, Product};

use crate::controller::{run_delete, run_submit, ConfirmDecision, ControllerState, Feedback};
use crate::view::{Listing, ViewState, format_price};

/// API base URL, fixed at bundle build time like the rest of the assets.
///
/// Built once at mount; every handler clones the stored client out of
/// the reactive system so all requests share one connection pool.
fn build_api() -> HttpProductApi {
    HttpProductApi::new(option_env!("STOCKDECK_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

fn show_feedback(feedback: &Feedback) {
    if let Some(message) = feedback.message() {
        alert(message);
    }
}

/// Destructive-action guard for delete.
fn confirm_delete() -> ConfirmDecision {
    let confirmed = web_sys::window()
        .map(|w| {
            w.confirm_with_message("Are you sure you want to delete this product?")
                .unwrap_or(false)
        })
        .unwrap_or(false);

    if confirmed {
        ConfirmDecision::Confirmed
    } else {
        ConfirmDecision::Declined
    }
}

/// Re-fetch the full list; the server response is the source of truth.
async fn refresh(api: StoredValue<HttpProductApi>, state: RwSignal<ControllerState>) {
    state.update(|s| s.begin_load());
    let result = api.get_value().list_products().await;
    state.update(|s| s.finish_load(result));
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let api = store_value(build_api());
    let state = create_rw_signal(ControllerState::new());

    // Initial load; the state starts out in `loading`.
    spawn_local(async move {
        let result = api.get_value().list_products().await;
        state.update(|s| s.finish_load(result));
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            let (draft, editing) = state.with_untracked(|s| (s.draft.clone(), s.editing.clone()));

            let feedback = run_submit(&api.get_value(), &draft, editing.as_ref()).await;
            if !feedback.is_failure() {
                refresh(api, state).await;
                state.update(|s| s.reset_form());
            }
            show_feedback(&feedback);
        });
    };

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Product Management System"</h1>
            </header>

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <div class="loading">"Loading products..."</div> }
            >
                {move || {
                    state
                        .with(|s| s.error.clone())
                        .map(|message| {
                            view! { <div class="error-message">"Error: " {message}</div> }
                        })
                }}

                <div class="container">
                    <div class="action-bar">
                        <button
                            class="btn btn-primary"
                            on:click=move |_| {
                                state
                                    .update(|s| {
                                        if s.form_visible { s.reset_form() } else { s.begin_create() }
                                    })
                            }
                        >
                            {move || {
                                if state.with(|s| s.form_visible) {
                                    "Cancel"
                                } else {
                                    "+ Add New Product"
                                }
                            }}
                        </button>
                    </div>

                    <Show when=move || state.with(|s| s.form_visible)>
                        <div class="form-container">
                            <h2>
                                {move || {
                                    state
                                        .with(|s| match s.view() {
                                            ViewState::Ready { form: Some(form), .. } => form.heading(),
                                            _ => "Add New Product",
                                        })
                                }}
                            </h2>
                            <form on:submit=on_submit>
                                <div class="form-group">
                                    <label for="id">"Product ID *"</label>
                                    <input
                                        type="number"
                                        id="id"
                                        name="id"
                                        required=true
                                        min="0"
                                        placeholder="Enter product ID"
                                        prop:value=move || {
                                            state
                                                .with(|s| {
                                                    s.draft.id.map(|v| v.to_string()).unwrap_or_default()
                                                })
                                        }
                                        disabled=move || state.with(|s| s.id_locked())
                                        on:input=move |ev| {
                                            state
                                                .update(|s| {
                                                    s.update_field(DraftField::Id, &event_target_value(&ev))
                                                })
                                        }
                                    />
                                </div>

                                <div class="form-group">
                                    <label for="name">"Product Name *"</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        required=true
                                        placeholder="Enter product name"
                                        prop:value=move || state.with(|s| s.draft.name.clone())
                                        on:input=move |ev| {
                                            state
                                                .update(|s| {
                                                    s.update_field(DraftField::Name, &event_target_value(&ev))
                                                })
                                        }
                                    />
                                </div>

                                <div class="form-group">
                                    <label for="description">"Description *"</label>
                                    <textarea
                                        id="description"
                                        name="description"
                                        required=true
                                        rows="3"
                                        placeholder="Enter product description"
                                        prop:value=move || state.with(|s| s.draft.description.clone())
                                        on:input=move |ev| {
                                            state
                                                .update(|s| {
                                                    s.update_field(
                                                        DraftField::Description,
                                                        &event_target_value(&ev),
                                                    )
                                                })
                                        }
                                    ></textarea>
                                </div>

                                <div class="form-row">
                                    <div class="form-group">
                                        <label for="price">"Price ($) *"</label>
                                        <input
                                            type="number"
                                            id="price"
                                            name="price"
                                            required=true
                                            step="0.01"
                                            min="0"
                                            placeholder="0.00"
                                            prop:value=move || {
                                                state
                                                    .with(|s| {
                                                        s.draft.price.map(|v| v.to_string()).unwrap_or_default()
                                                    })
                                            }
                                            on:input=move |ev| {
                                                state
                                                    .update(|s| {
                                                        s.update_field(DraftField::Price, &event_target_value(&ev))
                                                    })
                                            }
                                        />
                                    </div>

                                    <div class="form-group">
                                        <label for="quantity">"Quantity *"</label>
                                        <input
                                            type="number"
                                            id="quantity"
                                            name="quantity"
                                            required=true
                                            min="0"
                                            placeholder="0"
                                            prop:value=move || {
                                                state
                                                    .with(|s| {
                                                        s.draft
                                                            .quantity
                                                            .map(|v| v.to_string())
                                                            .unwrap_or_default()
                                                    })
                                            }
                                            on:input=move |ev| {
                                                state
                                                    .update(|s| {
                                                        s.update_field(
                                                            DraftField::Quantity,
                                                            &event_target_value(&ev),
                                                        )
                                                    })
                                            }
                                        />
                                    </div>
                                </div>

                                <div class="form-actions">
                                    <button type="submit" class="btn btn-success">
                                        {move || {
                                            state
                                                .with(|s| match s.view() {
                                                    ViewState::Ready { form: Some(form), .. } => {
                                                        form.submit_label()
                                                    }
                                                    _ => "Add Product",
                                                })
                                        }}
                                    </button>
                                    <button
                                        type="button"
                                        class="btn btn-secondary"
                                        on:click=move |_| state.update(|s| s.reset_form())
                                    >
                                        "Cancel"
                                    </button>
                                </div>
                            </form>
                        </div>
                    </Show>

                    <div class="products-section">
                        <h2>
                            "Products (" {move || state.with(|s| s.products.len())} ")"
                        </h2>

                        {move || {
                            state
                                .with(|s| match s.view() {
                                    ViewState::Ready { listing: Listing::Products(items), .. } => {
                                        let items = items.to_vec();
                                        view! {
                                            <div class="products-grid">
                                                {items
                                                    .into_iter()
                                                    .map(|product| product_card(api, state, product))
                                                    .collect_view()}
                                            </div>
                                        }
                                            .into_view()
                                    }
                                    _ => {
                                        view! {
                                            <div class="empty-state">
                                                <p>"No products found. Add your first product!"</p>
                                            </div>
                                        }
                                            .into_view()
                                    }
                                })
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}

/// One product card with its edit/delete actions.
fn product_card(
    api: StoredValue<HttpProductApi>,
    state: RwSignal<ControllerState>,
    product: Product,
) -> impl IntoView {
    let id = product.id;
    let edit_target = product.clone();

    view! {
        <div class="product-card">
            <div class="product-header">
                <h3>{product.name.clone()}</h3>
                <span class="product-id">"ID: " {id.to_string()}</span>
            </div>

            <p class="product-description">{product.description.clone()}</p>

            <div class="product-details">
                <div class="detail-item">
                    <span class="label">"Price:"</span>
                    <span class="value price">{format_price(product.price)}</span>
                </div>
                <div class="detail-item">
                    <span class="label">"Quantity:"</span>
                    <span class="value quantity">{product.quantity}</span>
                </div>
            </div>

            <div class="product-actions">
                <button
                    class="btn btn-edit"
                    on:click=move |_| state.update(|s| s.begin_edit(edit_target.clone()))
                >
                    "Edit"
                </button>
                <button
                    class="btn btn-delete"
                    on:click=move |_| {
                        let decision = confirm_delete();
                        spawn_local(async move {
                            let feedback = run_delete(&api.get_value(), id, decision).await;
                            if feedback == Feedback::Deleted {
                                refresh(api, state).await;
                            }
                            show_feedback(&feedback);
                        });
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
