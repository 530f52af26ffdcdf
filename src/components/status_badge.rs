//! Order Status Badge

use leptos::prelude::*;

use crate::models::OrderStatus;

/// Colored pill: green when delivered, red when cancelled, yellow otherwise
#[component]
pub fn StatusBadge(status: OrderStatus) -> impl IntoView {
    view! {
        <span class=status.badge_class()>{status.label()}</span>
    }
}
