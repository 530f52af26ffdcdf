//! Home Page
//!
//! Restaurant search, cuisine chips, and the restaurant grid.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_client, RestaurantFilter};
use crate::components::RestaurantCard;
use crate::insights::{cuisine_filter_value, CUISINES};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_app_store();
    let client = StoredValue::new(use_client());
    let (search, set_search) = signal(String::new());
    let (cuisine, set_cuisine) = signal(String::new());

    // Reload whenever a filter changes
    Effect::new(move |_| {
        let filter = RestaurantFilter {
            search: search.get(),
            cuisine: cuisine.get(),
        };
        let client = client.get_value();
        spawn_local(async move {
            match api::list_restaurants(&client, &filter).await {
                Ok(loaded) => {
                    log::debug!("loaded {} restaurants", loaded.len());
                    *store.restaurants().write() = loaded;
                }
                Err(e) => log::error!("Error loading restaurants: {}", e),
            }
        });
    });

    view! {
        <div class="home">
            <section class="hero">
                <h1>"Delicious food delivered to your doorstep"</h1>
                <p>"Order from your favorite restaurants and track your delivery in real-time"</p>
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search for restaurants or cuisines..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </section>

            <div class="chip-row">
                {CUISINES.iter().map(|chip| {
                    let value = cuisine_filter_value(chip);
                    let active_value = value.clone();
                    view! {
                        <button
                            class=move || if cuisine.get() == active_value { "chip active" } else { "chip" }
                            on:click=move |_| set_cuisine.set(value.clone())
                        >
                            {*chip}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="restaurant-grid">
                <For
                    each=move || store.restaurants().read().clone()
                    key=|restaurant| restaurant.id.clone()
                    children=move |restaurant| view! { <RestaurantCard restaurant=restaurant /> }
                />
            </div>
        </div>
    }
}
