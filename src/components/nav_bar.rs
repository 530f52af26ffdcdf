//! Navigation Bar Component
//!
//! Brand, page links, and sign in/out.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::use_client;
use crate::context::use_app_context;
use crate::routes::{AuthState, Page};
use crate::store::{store_set_auth, use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let client = StoredValue::new(use_client());

    let sign_out = move |_| {
        let client = client.get_value();
        spawn_local(async move {
            if let Err(e) = client.sign_out().await {
                log::warn!("sign out: {}", e);
            }
            store_set_auth(&store, AuthState::SignedOut);
            ctx.navigate(Page::Home);
        });
    };

    view! {
        <nav class="nav-bar">
            <button class="nav-brand" on:click=move |_| ctx.navigate(Page::Home)>
                "FoodHub"
            </button>
            <div class="nav-links">
                <button class="nav-link" on:click=move |_| ctx.navigate(Page::Home)>"Home"</button>
                {move || {
                    let signed_in = store.auth().read().user().is_some();
                    if signed_in {
                        view! {
                            <button class="nav-link" on:click=move |_| ctx.navigate(Page::Orders)>"Orders"</button>
                            <button class="nav-link" on:click=move |_| ctx.navigate(Page::Profile)>"Profile"</button>
                            <button class="nav-link" on:click=sign_out>"Sign out"</button>
                        }.into_any()
                    } else {
                        view! {
                            <button class="nav-sign-in" on:click=move |_| ctx.navigate(Page::Auth)>"Sign In"</button>
                        }.into_any()
                    }
                }}
            </div>
        </nav>
    }
}
