//! Checkout Review Component
//!
//! Read-only summary of a checkout draft. Payment and order placement
//! happen outside this app.

use foodhub_cart::{format_amount, CheckoutDraft};
use leptos::prelude::*;

use crate::store::{store_clear_cart, use_app_store};

#[component]
pub fn CheckoutReview(
    draft: ReadSignal<Option<CheckoutDraft<String>>>,
    set_draft: WriteSignal<Option<CheckoutDraft<String>>>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || draft.get().map(|draft| {
            let pricing = draft.pricing;
            view! {
                <div class="modal-backdrop">
                    <div class="modal checkout-review">
                        <div class="modal-header">
                            <h3>"Review your order"</h3>
                            <button class="modal-close" on:click=move |_| set_draft.set(None)>"×"</button>
                        </div>
                        <div class="modal-body">
                            {draft.lines.into_iter().map(|line| view! {
                                <div class="summary-row">
                                    <span>{format!("{}x {}", line.quantity, line.name)}</span>
                                    <span>{format_amount(line.price * rust_decimal::Decimal::from(line.quantity))}</span>
                                </div>
                            }).collect_view()}
                            <div class="summary-row">
                                <span>"Subtotal"</span>
                                <span>{format_amount(pricing.subtotal)}</span>
                            </div>
                            <div class="summary-row">
                                <span>"Delivery Fee"</span>
                                <span>{format_amount(pricing.delivery_fee)}</span>
                            </div>
                            <div class="summary-row">
                                <span>"Service Fee"</span>
                                <span>{format_amount(pricing.service_fee)}</span>
                            </div>
                            <div class="summary-row grand">
                                <span>"Total"</span>
                                <span>{format_amount(pricing.total)}</span>
                            </div>
                        </div>
                        <div class="modal-footer">
                            <button class="secondary-btn" on:click=move |_| set_draft.set(None)>
                                "Keep shopping"
                            </button>
                            <button
                                class="danger-btn"
                                on:click=move |_| {
                                    store_clear_cart(&store);
                                    set_draft.set(None);
                                }
                            >
                                "Empty cart"
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
