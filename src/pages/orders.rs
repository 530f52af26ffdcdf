//! Orders Page
//!
//! The signed-in customer's order history, refreshed on an interval.

use foodhub_cart::format_amount;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_client, SupabaseClient};
use crate::components::{format_date, LoadingView, StatusBadge};
use crate::context::use_app_context;
use crate::insights::short_id;
use crate::models::Order;
use crate::poll::poll_every;
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

async fn load_orders(client: &SupabaseClient, store: AppStore) {
    let user_id = match client.user_id() {
        Ok(id) => id,
        Err(e) => {
            log::warn!("orders: {}", e);
            return;
        }
    };
    match api::list_customer_orders(client, &user_id).await {
        Ok(orders) => *store.orders().write() = orders,
        Err(e) => log::error!("Error loading orders: {}", e),
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let client = StoredValue::new(use_client());
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        load_orders(&client.get_value(), store).await;
        set_loading.set(false);
    });

    let poll = poll_every(ctx.poll_interval_ms, move || {
        let client = client.get_value();
        async move { load_orders(&client, store).await }
    });
    on_cleanup(move || poll.stop());

    view! {
        <div class="orders-page">
            <h1>"Your Orders"</h1>
            {move || {
                if loading.get() {
                    return view! { <LoadingView /> }.into_any();
                }
                if store.orders().read().is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No orders yet"</p>
                            <p class="muted">"Your order history will appear here"</p>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="order-list">
                        <For
                            each=move || store.orders().read().clone()
                            key=|order| (order.id.clone(), order.status)
                            children=move |order| view! { <OrderCard order=order /> }
                        />
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}

#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let shows_eta = order.status.shows_eta();
    let item_count: u32 = order.items.iter().map(|i| i.quantity).sum();

    view! {
        <div class="order-card">
            <div class="order-card-header">
                <div>
                    <h3>{order.restaurant_name().to_string()}</h3>
                    <p class="muted">{format!("Order #{}", short_id(&order.id))}</p>
                </div>
                <StatusBadge status=order.status />
            </div>
            <div class="order-card-body">
                <span>{format_date(&order.created_at)}</span>
                <span>{format!("{} items", item_count)}</span>
                <span class="price">{format_amount(order.grand_total())}</span>
            </div>
            <p class="muted">{order.delivery_address.clone()}</p>
            <Show when=move || shows_eta>
                <p class="eta">"Estimated delivery: 25-35 minutes"</p>
            </Show>
        </div>
    }
}
