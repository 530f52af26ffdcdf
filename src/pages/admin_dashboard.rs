//! Admin Dashboard
//!
//! Platform totals, order management and user management.

use foodhub_cart::format_amount;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_client, SupabaseClient};
use crate::components::{format_date, LoadingView, OrderDetails, StatCard, StatusBadge};
use crate::error::ApiResult;
use crate::insights::{admin_stats, filter_users, short_id};
use crate::models::{AdminStats, Order, OrderStatus, UserProfile};

/// Rows in the recent orders table
const RECENT_ORDERS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Dashboard,
    Orders,
    Users,
}

impl Tab {
    const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Orders, Tab::Users];

    fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Orders => "Orders",
            Tab::Users => "Users",
        }
    }
}

#[derive(Clone, Copy)]
struct AdminSignals {
    set_orders: WriteSignal<Vec<Order>>,
    set_users: WriteSignal<Vec<UserProfile>>,
    set_stats: WriteSignal<Option<AdminStats>>,
}

/// What one round of fetches produced
#[derive(Debug, Clone, PartialEq)]
struct AdminSnapshot {
    orders: Vec<Order>,
    users: Vec<UserProfile>,
    stats: AdminStats,
}

/// Orders and users are required. Without recent orders the stats still
/// hold and only the recent table is empty.
fn admin_snapshot(
    orders: ApiResult<Vec<Order>>,
    users: ApiResult<Vec<UserProfile>>,
    recent: ApiResult<Vec<Order>>,
) -> ApiResult<AdminSnapshot> {
    let orders = orders?;
    let users = users?;
    let recent = recent.unwrap_or_else(|e| {
        log::warn!("recent orders unavailable: {}", e);
        Vec::new()
    });
    let stats = admin_stats(&orders, &users, recent);
    Ok(AdminSnapshot { orders, users, stats })
}

/// Refresh the dashboard; on failure the previous data stays up
async fn load_admin_data(client: &SupabaseClient, signals: AdminSignals) {
    let snapshot = admin_snapshot(
        api::list_all_orders(client).await,
        api::list_users(client).await,
        api::list_recent_orders(client, RECENT_ORDERS).await,
    );
    match snapshot {
        Ok(AdminSnapshot { orders, users, stats }) => {
            log::debug!(
                "admin stats: {} orders, revenue {}",
                stats.total_orders,
                stats.total_revenue
            );
            signals.set_stats.set(Some(stats));
            signals.set_orders.set(orders);
            signals.set_users.set(users);
        }
        Err(e) => log::error!("Error loading admin data: {}", e),
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let client = StoredValue::new(use_client());

    let (tab, set_tab) = signal(Tab::Dashboard);
    let (orders, set_orders) = signal(Vec::<Order>::new());
    let (users, set_users) = signal(Vec::<UserProfile>::new());
    let (stats, set_stats) = signal(None::<AdminStats>);
    let (selected, set_selected) = signal(None::<Order>);
    let signals = AdminSignals {
        set_orders,
        set_users,
        set_stats,
    };

    spawn_local(async move { load_admin_data(&client.get_value(), signals).await });

    let change_status = Callback::new(move |(order_id, status): (String, OrderStatus)| {
        let client = client.get_value();
        spawn_local(async move {
            match api::update_order_status(&client, &order_id, status).await {
                Ok(()) => load_admin_data(&client, signals).await,
                Err(e) => log::error!("Error updating order {}: {}", order_id, e),
            }
        });
    });

    let toggle_user = Callback::new(move |(user_id, online): (String, bool)| {
        let client = client.get_value();
        spawn_local(async move {
            match api::set_online(&client, &user_id, online).await {
                Ok(()) => load_admin_data(&client, signals).await,
                Err(e) => log::error!("Error updating user {}: {}", user_id, e),
            }
        });
    });

    let open_order = Callback::new(move |order: Order| set_selected.set(Some(order)));

    view! {
        <div class="admin-dashboard">
            <div class="tab-row">
                {Tab::ALL.into_iter().map(|t| view! {
                    <button
                        class=move || if tab.get() == t { "tab active" } else { "tab" }
                        on:click=move |_| set_tab.set(t)
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>

            {move || match (tab.get(), stats.get()) {
                (_, None) => view! { <LoadingView /> }.into_any(),
                (Tab::Dashboard, Some(stats)) => {
                    view! { <StatsTab stats=stats on_open=open_order /> }.into_any()
                }
                (Tab::Orders, Some(_)) => {
                    view! { <OrdersTab orders=orders on_status=change_status on_open=open_order /> }.into_any()
                }
                (Tab::Users, Some(_)) => {
                    view! { <UsersTab users=users on_toggle=toggle_user /> }.into_any()
                }
            }}

            {move || selected.get().map(|order| view! {
                <OrderDetails order=order on_close=move |_| set_selected.set(None) />
            })}
        </div>
    }
}

#[component]
fn StatsTab(stats: AdminStats, on_open: Callback<Order>) -> impl IntoView {
    let AdminStats {
        total_revenue,
        total_commission,
        total_orders,
        active_customers,
        active_delivery_persons,
        orders_by_status,
        recent_orders,
    } = stats;

    view! {
        <div class="stat-cards">
            <StatCard label="Total Revenue" value=format_amount(total_revenue) />
            <StatCard label="Commission" value=format_amount(total_commission) />
            <StatCard label="Total Orders" value=total_orders.to_string() />
            <StatCard label="Active Customers" value=active_customers.to_string() />
            <StatCard label="Active Drivers" value=active_delivery_persons.to_string() />
        </div>

        <section>
            <h2>"Orders by Status"</h2>
            <div class="status-counts">
                {orders_by_status.into_iter().map(|(status, count)| view! {
                    <div class="status-count">
                        <StatusBadge status=status />
                        <span>{count}</span>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section>
            <h2>"Recent Orders"</h2>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Order"</th>
                        <th>"Customer"</th>
                        <th>"Restaurant"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {recent_orders.into_iter().map(|order| {
                        let customer = order
                            .customer
                            .as_ref()
                            .map(|c| c.full_name.clone())
                            .unwrap_or_default();
                        let row = StoredValue::new(order.clone());
                        view! {
                            <tr>
                                <td>{format!("#{}", short_id(&order.id))}</td>
                                <td>{customer}</td>
                                <td>{order.restaurant_name().to_string()}</td>
                                <td>{format_amount(order.grand_total())}</td>
                                <td><StatusBadge status=order.status /></td>
                                <td>
                                    <button class="link-btn" on:click=move |_| on_open.run(row.get_value())>
                                        "View Details"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn OrdersTab(
    orders: ReadSignal<Vec<Order>>,
    on_status: Callback<(String, OrderStatus)>,
    on_open: Callback<Order>,
) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Order"</th>
                    <th>"Date"</th>
                    <th>"Restaurant"</th>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || orders.get()
                    key=|order| (order.id.clone(), order.status)
                    children=move |order| {
                        let order_id = order.id.clone();
                        let current = order.status;
                        let row = StoredValue::new(order.clone());
                        view! {
                            <tr>
                                <td>{format!("#{}", short_id(&order.id))}</td>
                                <td>{format_date(&order.created_at)}</td>
                                <td>{order.restaurant_name().to_string()}</td>
                                <td>{format_amount(order.grand_total())}</td>
                                <td>
                                    <select on:change=move |ev| {
                                        let value = event_target_value(&ev);
                                        match OrderStatus::ALL.iter().find(|s| s.as_str() == value) {
                                            Some(status) if *status != current => {
                                                on_status.run((order_id.clone(), *status));
                                            }
                                            Some(_) => {}
                                            None => log::warn!("unknown status {}", value),
                                        }
                                    }>
                                        {OrderStatus::ALL.into_iter().map(|status| view! {
                                            <option value=status.as_str() selected={status == current}>
                                                {status.label()}
                                            </option>
                                        }).collect_view()}
                                    </select>
                                </td>
                                <td>
                                    <button class="link-btn" on:click=move |_| on_open.run(row.get_value())>
                                        "View Details"
                                    </button>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
fn UsersTab(users: ReadSignal<Vec<UserProfile>>, on_toggle: Callback<(String, bool)>) -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let visible = move || {
        let all = users.get();
        filter_users(&all, &query.get())
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="users-tab">
            <input
                type="text"
                class="search-input"
                placeholder="Search users..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Joined"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible
                        key=|user| (user.id.clone(), user.is_online)
                        children=move |user| {
                            let online = user.online();
                            let user_id = user.id.clone();
                            view! {
                                <tr>
                                    <td>{user.full_name.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.role().as_str()}</td>
                                    <td>{format_date(&user.created_at)}</td>
                                    <td>
                                        <button
                                            class={if online { "pill online" } else { "pill" }}
                                            on:click=move |_| on_toggle.run((user_id.clone(), !online))
                                        >
                                            {if online { "Active" } else { "Inactive" }}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn order(id: &str, total: &str) -> Order {
        Order {
            id: id.to_string(),
            user_id: "c1".to_string(),
            restaurant_id: "r1".to_string(),
            delivery_person_id: None,
            items: Vec::new(),
            total_amount: total.parse().unwrap(),
            delivery_fee: Decimal::ZERO,
            service_fee: Decimal::ZERO,
            status: OrderStatus::Delivered,
            delivery_address: String::new(),
            customer_phone: String::new(),
            restaurant: None,
            customer: None,
            created_at: Utc::now(),
        }
    }

    fn customer() -> UserProfile {
        UserProfile {
            id: "c1".to_string(),
            email: "c1@example.com".to_string(),
            full_name: "C One".to_string(),
            phone: None,
            address: None,
            created_at: Utc::now(),
            user_type: None,
            is_online: None,
            vehicle_type: None,
        }
    }

    fn failed<T>() -> ApiResult<T> {
        Err(ApiError::Status {
            status: 503,
            message: "unavailable".to_string(),
        })
    }

    #[test]
    fn test_snapshot_from_all_sources() {
        let snapshot = admin_snapshot(
            Ok(vec![order("o1", "20.00"), order("o2", "30.00")]),
            Ok(vec![customer()]),
            Ok(vec![order("o2", "30.00")]),
        )
        .unwrap();
        assert_eq!(snapshot.orders.len(), 2);
        assert_eq!(snapshot.users.len(), 1);
        assert_eq!(snapshot.stats.total_revenue, "50.00".parse::<Decimal>().unwrap());
        assert_eq!(snapshot.stats.active_customers, 1);
        assert_eq!(snapshot.stats.recent_orders.len(), 1);
    }

    #[test]
    fn test_failed_orders_or_users_publish_nothing() {
        let no_orders = admin_snapshot(failed(), Ok(vec![customer()]), Ok(Vec::new()));
        assert!(matches!(no_orders, Err(ApiError::Status { status: 503, .. })));

        let no_users = admin_snapshot(Ok(vec![order("o1", "20.00")]), failed(), Ok(Vec::new()));
        assert!(no_users.is_err());
    }

    #[test]
    fn test_failed_recent_orders_keeps_stats() {
        let snapshot = admin_snapshot(Ok(vec![order("o1", "20.00")]), Ok(vec![customer()]), failed()).unwrap();
        assert_eq!(snapshot.stats.total_orders, 1);
        assert_eq!(snapshot.stats.active_customers, 1);
        assert!(snapshot.stats.recent_orders.is_empty());
    }
}
