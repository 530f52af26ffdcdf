//! Profile Page
//!
//! Edit name, phone and address of the signed-in user.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_client, SupabaseClient};
use crate::components::LoadingView;
use crate::error::ApiResult;
use crate::models::{ProfileForm, UserProfile};
use crate::routes::AuthState;
use crate::store::{store_set_auth, use_app_store, AppStateStoreFields};

/// Save the form, then read the row back
async fn save_profile(client: &SupabaseClient, form: &ProfileForm) -> ApiResult<UserProfile> {
    let user_id = client.user_id()?;
    api::update_profile(client, &user_id, form).await?;
    api::get_profile(client, &user_id).await
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_app_store();
    let client = StoredValue::new(use_client());

    let initial = store
        .auth()
        .read_untracked()
        .user()
        .map(ProfileForm::from)
        .unwrap_or_default();
    let email = store
        .auth()
        .read_untracked()
        .user()
        .map(|u| u.email.clone())
        .unwrap_or_default();

    let (full_name, set_full_name) = signal(initial.full_name);
    let (phone, set_phone) = signal(initial.phone);
    let (address, set_address) = signal(initial.address);
    let (message, set_message) = signal(None::<(bool, String)>);
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let client = client.get_value();
        let form = ProfileForm {
            full_name: full_name.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
        };
        set_saving.set(true);
        set_message.set(None);

        spawn_local(async move {
            match save_profile(&client, &form).await {
                Ok(profile) => {
                    store_set_auth(&store, AuthState::SignedIn(profile));
                    set_message.set(Some((true, "Profile updated successfully".to_string())));
                }
                Err(e) => {
                    log::error!("Error updating profile: {}", e);
                    set_message.set(Some((false, e.to_string())));
                }
            }
            set_saving.set(false);
        });
    };

    let signed_in = move || store.auth().read().user().is_some();

    view! {
        <div class="profile-page">
            <h1>"Profile"</h1>
            <Show when=signed_in fallback=|| view! { <LoadingView /> }>
                <form class="profile-form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input type="email" prop:value=email.clone() disabled=true />
                    </label>
                    <label>
                        "Full name"
                        <input
                            type="text"
                            prop:value=move || full_name.get()
                            on:input=move |ev| set_full_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Phone"
                        <input
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| set_phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Address"
                        <textarea
                            prop:value=move || address.get()
                            on:input=move |ev| set_address.set(event_target_value(&ev))
                        />
                    </label>

                    {move || message.get().map(|(ok, text)| {
                        let class = if ok { "form-notice" } else { "form-error" };
                        view! { <p class=class>{text}</p> }
                    })}

                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </form>
            </Show>
        </div>
    }
}
