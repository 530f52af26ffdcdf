//! Cart Panel Component
//!
//! Floating order summary: lines with quantity controls and the four
//! derived totals. Hidden while the cart is empty.

use foodhub_cart::{format_amount, CartLine, CheckoutDraft};
use leptos::prelude::*;

use super::DISH_PLACEHOLDER;
use crate::models::MenuItem;
use crate::store::{
    store_remove_from_cart, store_update_cart_quantity, use_app_store, AppStateStoreFields,
};

#[component]
pub fn CartPanel(#[prop(into)] on_checkout: Callback<CheckoutDraft<String>>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || !store.cart().read().is_empty()>
            <div class="cart-panel">
                <div class="cart-header">
                    <span class="cart-title">"Your Order"</span>
                    <span class="cart-count">
                        {move || format!("{} items", store.cart().read().item_count())}
                    </span>
                </div>

                <div class="cart-lines">
                    <For
                        each=move || store.cart().read().lines().to_vec()
                        key=|line| (line.item.id.clone(), line.quantity)
                        children=move |line| view! { <CartLineRow line=line /> }
                    />
                </div>

                <div class="cart-totals">
                    <div class="cart-total-row">
                        <span>"Subtotal"</span>
                        <span>{move || format_amount(store.cart().read().subtotal())}</span>
                    </div>
                    <div class="cart-total-row">
                        <span>"Delivery Fee"</span>
                        <span>{move || format_amount(store.cart().read().delivery_fee())}</span>
                    </div>
                    <div class="cart-total-row">
                        <span>"Service Fee"</span>
                        <span>{move || format_amount(store.cart().read().service_fee())}</span>
                    </div>
                    <div class="cart-total-row grand">
                        <span>"Total"</span>
                        <span>{move || format_amount(store.cart().read().total())}</span>
                    </div>
                    <button
                        class="checkout-btn"
                        on:click=move |_| {
                            let draft = store.cart().read().checkout_draft();
                            on_checkout.run(draft);
                        }
                    >
                        "Proceed to Checkout"
                    </button>
                </div>
            </div>
        </Show>
    }
}

/// One cart line with -, +, and remove buttons
#[component]
fn CartLineRow(line: CartLine<MenuItem>) -> impl IntoView {
    let store = use_app_store();
    let quantity = i64::from(line.quantity);
    let id = StoredValue::new(line.item.id.clone());
    let image = line
        .item
        .image_url
        .clone()
        .unwrap_or_else(|| DISH_PLACEHOLDER.to_string());

    view! {
        <div class="cart-line">
            <img class="cart-line-image" src=image alt=line.item.name.clone() />
            <div class="cart-line-info">
                <h4>{line.item.name.clone()}</h4>
                <p>{format_amount(line.item.price)}</p>
            </div>
            <div class="cart-line-controls">
                <button on:click=move |_| store_update_cart_quantity(&store, &id.get_value(), quantity - 1)>
                    "−"
                </button>
                <span class="cart-qty">{line.quantity}</span>
                <button on:click=move |_| store_update_cart_quantity(&store, &id.get_value(), quantity + 1)>
                    "+"
                </button>
                <button class="cart-remove" on:click=move |_| store_remove_from_cart(&store, &id.get_value())>
                    "×"
                </button>
            </div>
        </div>
    }
}
