//! Dashboard Stat Card

use leptos::prelude::*;

#[component]
pub fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <p class="stat-label">{label}</p>
            <p class="stat-value">{move || value.get()}</p>
        </div>
    }
}
