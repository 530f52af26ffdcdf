//! FoodHub Frontend App
//!
//! Root component: shared state, session restore, and page switching.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{self, SupabaseClient};
use crate::components::{LoadingView, NavBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::ConfigError;
use crate::pages::{AdminDashboard, AuthPage, DeliveryDashboard, HomePage, OrdersPage, ProfilePage, RestaurantPage};
use crate::routes::{resolve, AuthState, Page, Resolved};
use crate::store::{store_set_auth, AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let client = SupabaseClient::new(&config);
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(signal(Page::Home), config.poll_interval_ms);

    // Provide context to all children
    provide_context(store);
    provide_context(client.clone());
    provide_context(ctx);

    // Pick up a session from a previous visit
    spawn_local(async move {
        let auth = match client.restore_session() {
            Some(session) => match api::get_profile(&client, &session.user.id).await {
                Ok(profile) => {
                    log::info!("restored session for {}", profile.email);
                    AuthState::SignedIn(profile)
                }
                Err(e) => {
                    log::warn!("stored session rejected: {}", e);
                    if let Err(e) = client.sign_out().await {
                        log::debug!("sign out after rejected session: {}", e);
                    }
                    AuthState::SignedOut
                }
            },
            None => AuthState::SignedOut,
        };
        store_set_auth(&store, auth);
    });

    let resolved = Memo::new(move |_| resolve(&ctx.page.get(), &store.auth().read()));

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match resolved.get() {
                    Resolved::Loading => view! { <LoadingView /> }.into_any(),
                    Resolved::Show(page) => render_page(page),
                }}
            </main>
        </div>
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <HomePage /> }.into_any(),
        Page::Auth => view! { <AuthPage /> }.into_any(),
        Page::Restaurant(id) => view! { <RestaurantPage restaurant_id=id /> }.into_any(),
        Page::Orders => view! { <OrdersPage /> }.into_any(),
        Page::Profile => view! { <ProfilePage /> }.into_any(),
        Page::Delivery => view! { <DeliveryDashboard /> }.into_any(),
        Page::Admin => view! { <AdminDashboard /> }.into_any(),
    }
}

/// Shown instead of the app when the build is missing backend settings
#[component]
pub fn ConfigErrorView(error: ConfigError) -> impl IntoView {
    view! {
        <div class="config-error">
            <h1>"FoodHub is not configured"</h1>
            <p>{error.to_string()}</p>
            <p class="muted">
                "Set FOODHUB_SUPABASE_URL and FOODHUB_SUPABASE_ANON_KEY when building the app."
            </p>
        </div>
    }
}
