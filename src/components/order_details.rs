//! Order Details Modal
//!
//! Customer, address and price breakdown of one order (admin console).

use foodhub_cart::format_amount;
use leptos::prelude::*;
use rust_decimal::Decimal;

use crate::insights::short_id;
use crate::models::Order;

#[component]
pub fn OrderDetails(order: Order, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let customer_name = order
        .customer
        .as_ref()
        .map(|c| c.full_name.clone())
        .unwrap_or_default();

    view! {
        <div class="modal-backdrop">
            <div class="modal order-details">
                <div class="modal-header">
                    <h3>{format!("Order Details #{}", short_id(&order.id))}</h3>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-body">
                    <div class="details-grid">
                        <div>
                            <h4>"Customer"</h4>
                            <p>{customer_name}</p>
                            <p>{order.customer_phone.clone()}</p>
                        </div>
                        <div>
                            <h4>"Delivery Address"</h4>
                            <p>{order.delivery_address.clone()}</p>
                        </div>
                    </div>
                    <h4>"Order Summary"</h4>
                    {order.items.iter().map(|item| view! {
                        <div class="summary-row">
                            <span>{format!("{}x Item", item.quantity)}</span>
                            <span>{format_amount(item.price * Decimal::from(item.quantity))}</span>
                        </div>
                    }).collect_view()}
                    <div class="summary-row">
                        <span>"Subtotal"</span>
                        <span>{format_amount(order.total_amount)}</span>
                    </div>
                    <div class="summary-row">
                        <span>"Delivery Fee"</span>
                        <span>{format_amount(order.delivery_fee)}</span>
                    </div>
                    <div class="summary-row">
                        <span>"Service Fee"</span>
                        <span>{format_amount(order.service_fee)}</span>
                    </div>
                    <div class="summary-row grand">
                        <span>"Total"</span>
                        <span>{format_amount(order.grand_total())}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
