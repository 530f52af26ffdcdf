//! Delivery Dashboard
//!
//! Driver view: availability toggle, active deliveries with their next
//! step, earnings, and recent completed deliveries.

use chrono::Utc;
use foodhub_cart::format_amount;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_client, SupabaseClient};
use crate::components::{format_date, StatCard, StatusBadge};
use crate::context::use_app_context;
use crate::insights::{delivery_earnings, short_id};
use crate::models::{DeliveryEarnings, Order, OrderStatus};
use crate::poll::poll_every;
use crate::routes::AuthState;
use crate::store::{store_set_auth, use_app_store, AppStateStoreFields};

/// Completed deliveries shown in the history table
const HISTORY_ROWS: usize = 10;

#[derive(Clone, Copy)]
struct DriverSignals {
    set_active: WriteSignal<Vec<Order>>,
    set_completed: WriteSignal<Vec<Order>>,
    set_earnings: WriteSignal<DeliveryEarnings>,
}

async fn load_deliveries(client: &SupabaseClient, signals: DriverSignals) {
    let driver_id = match client.user_id() {
        Ok(id) => id,
        Err(e) => {
            log::warn!("deliveries: {}", e);
            return;
        }
    };

    match api::list_active_deliveries(client, &driver_id).await {
        Ok(orders) => signals.set_active.set(orders),
        Err(e) => log::error!("Error loading active deliveries: {}", e),
    }

    match api::list_completed_deliveries(client, &driver_id, None).await {
        Ok(mut orders) => {
            signals.set_earnings.set(delivery_earnings(&orders, Utc::now()));
            orders.truncate(HISTORY_ROWS);
            signals.set_completed.set(orders);
        }
        Err(e) => log::error!("Error loading completed deliveries: {}", e),
    }
}

#[component]
pub fn DeliveryDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let client = StoredValue::new(use_client());

    let (active, set_active) = signal(Vec::<Order>::new());
    let (completed, set_completed) = signal(Vec::<Order>::new());
    let (earnings, set_earnings) = signal(DeliveryEarnings::default());
    let signals = DriverSignals {
        set_active,
        set_completed,
        set_earnings,
    };

    spawn_local(async move { load_deliveries(&client.get_value(), signals).await });

    let poll = poll_every(ctx.poll_interval_ms, move || {
        let client = client.get_value();
        async move { load_deliveries(&client, signals).await }
    });
    on_cleanup(move || poll.stop());

    let is_online = move || store.auth().read().user().is_some_and(|u| u.online());

    let toggle_online = move |_| {
        let Some(mut profile) = store.auth().read_untracked().user().cloned() else {
            return;
        };
        let online = !profile.online();
        let client = client.get_value();
        spawn_local(async move {
            match api::set_online(&client, &profile.id, online).await {
                Ok(()) => {
                    log::info!("driver {} online={}", profile.id, online);
                    profile.is_online = Some(online);
                    store_set_auth(&store, AuthState::SignedIn(profile));
                }
                Err(e) => log::error!("Error updating status: {}", e),
            }
        });
    };

    let advance = move |order_id: String, next: OrderStatus| {
        let client = client.get_value();
        spawn_local(async move {
            match api::update_order_status(&client, &order_id, next).await {
                Ok(()) => load_deliveries(&client, signals).await,
                Err(e) => log::error!("Error updating order {}: {}", order_id, e),
            }
        });
    };

    view! {
        <div class="delivery-dashboard">
            <div class="dashboard-header">
                <h1>"Delivery Dashboard"</h1>
                <button
                    class=move || if is_online() { "online-toggle online" } else { "online-toggle" }
                    on:click=toggle_online
                >
                    {move || if is_online() { "Online" } else { "Offline" }}
                </button>
            </div>

            <div class="stat-cards">
                <StatCard label="Today" value=Signal::derive(move || format_amount(earnings.get().daily)) />
                <StatCard label="This Week" value=Signal::derive(move || format_amount(earnings.get().weekly)) />
                <StatCard label="This Month" value=Signal::derive(move || format_amount(earnings.get().monthly)) />
                <StatCard
                    label="Deliveries"
                    value=Signal::derive(move || earnings.get().total_deliveries.to_string())
                />
            </div>

            <section>
                <h2>"Active Deliveries"</h2>
                <Show
                    when=move || !active.get().is_empty()
                    fallback=|| view! { <p class="muted">"No active deliveries"</p> }
                >
                    <For
                        each=move || active.get()
                        key=|order| (order.id.clone(), order.status)
                        children=move |order| {
                            let step = order.status.next_delivery_step();
                            let order_id = order.id.clone();
                            view! {
                                <div class="delivery-card">
                                    <div class="order-card-header">
                                        <h3>{format!("Order #{}", short_id(&order.id))}</h3>
                                        <StatusBadge status=order.status />
                                    </div>
                                    <p>{format!("From {}", order.restaurant_name())}</p>
                                    <p>{format!("To {}", order.delivery_address)}</p>
                                    <p class="muted">{order.customer_phone.clone()}</p>
                                    <p class="price">{format_amount(order.grand_total())}</p>
                                    {step.map(|(next, label)| view! {
                                        <button
                                            class="btn-primary"
                                            on:click=move |_| advance(order_id.clone(), next)
                                        >
                                            {label}
                                        </button>
                                    })}
                                </div>
                            }
                        }
                    />
                </Show>
            </section>

            <section>
                <h2>"Recent Deliveries"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Restaurant"</th>
                            <th>"Date"</th>
                            <th>"Earned"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || completed.get()
                            key=|order| order.id.clone()
                            children=move |order| view! {
                                <tr>
                                    <td>{format!("#{}", short_id(&order.id))}</td>
                                    <td>{order.restaurant_name().to_string()}</td>
                                    <td>{format_date(&order.created_at)}</td>
                                    <td>{format_amount(order.delivery_fee)}</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </section>
        </div>
    }
}
