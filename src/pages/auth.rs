//! Auth Page
//!
//! Sign in and sign up with email and password.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_client};
use crate::context::use_app_context;
use crate::routes::{AuthState, Page};
use crate::store::{store_set_auth, use_app_store};

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let client = StoredValue::new(use_client());

    let (is_sign_up, set_is_sign_up) = signal(false);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (full_name, set_full_name) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        set_error.set(None);
        set_notice.set(None);
        set_busy.set(true);

        let client = client.get_value();
        let email = email.get_untracked();
        let password = password.get_untracked();
        let full_name = full_name.get_untracked();
        let sign_up = is_sign_up.get_untracked();

        spawn_local(async move {
            let session = if sign_up {
                client.sign_up(&email, &password, &full_name).await
            } else {
                client.sign_in(&email, &password).await.map(Some)
            };

            match session {
                Ok(Some(session)) => match api::get_profile(&client, &session.user.id).await {
                    Ok(profile) => {
                        store_set_auth(&store, AuthState::SignedIn(profile));
                        ctx.navigate(Page::Home);
                    }
                    Err(e) => {
                        log::error!("Error loading profile: {}", e);
                        set_error.set(Some(e.to_string()));
                    }
                },
                Ok(None) => {
                    set_notice.set(Some("Check your email to confirm your account.".to_string()));
                    set_is_sign_up.set(false);
                }
                Err(e) => {
                    log::warn!("auth failed: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>{move || if is_sign_up.get() { "Create an account" } else { "Sign in to FoodHub" }}</h2>

                <Show when=move || is_sign_up.get()>
                    <input
                        type="text"
                        placeholder="Full name"
                        required=true
                        prop:value=move || full_name.get()
                        on:input=move |ev| set_full_name.set(event_target_value(&ev))
                    />
                </Show>
                <input
                    type="email"
                    placeholder="Email"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    required=true
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                {move || notice.get().map(|msg| view! { <p class="form-notice">{msg}</p> })}

                <button type="submit" class="btn-primary" disabled=move || busy.get()>
                    {move || match (busy.get(), is_sign_up.get()) {
                        (true, _) => "Please wait...",
                        (false, true) => "Sign Up",
                        (false, false) => "Sign In",
                    }}
                </button>

                <button
                    type="button"
                    class="link-btn"
                    on:click=move |_| {
                        set_error.set(None);
                        set_is_sign_up.update(|v| *v = !*v);
                    }
                >
                    {move || if is_sign_up.get() {
                        "Already have an account? Sign in"
                    } else {
                        "Don't have an account? Sign up"
                    }}
                </button>
            </form>
        </div>
    }
}
