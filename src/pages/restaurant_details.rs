//! Restaurant Page
//!
//! Restaurant header, menu by category, and the cart panel.

use foodhub_cart::{format_amount, CheckoutDraft};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, use_client};
use crate::components::{CartPanel, CheckoutReview, LoadingView, DISH_PLACEHOLDER, RESTAURANT_PLACEHOLDER};
use crate::insights::menu_categories;
use crate::models::{MenuItem, Restaurant};
use crate::store::{store_add_to_cart, use_app_store, AppStateStoreFields};

#[component]
pub fn RestaurantPage(restaurant_id: String) -> impl IntoView {
    let store = use_app_store();
    let client = use_client();
    let (restaurant, set_restaurant) = signal(None::<Restaurant>);
    let (selected_category, set_selected_category) = signal(String::new());
    let (draft, set_draft) = signal(None::<CheckoutDraft<String>>);

    let id = restaurant_id;
    spawn_local(async move {
        match api::get_restaurant(&client, &id).await {
            Ok(loaded) => set_restaurant.set(Some(loaded)),
            Err(e) => log::error!("Error loading restaurant {}: {}", id, e),
        }
        match api::list_menu_items(&client, &id).await {
            Ok(items) => {
                if let Some(first) = items.first() {
                    set_selected_category.set(first.category.clone());
                }
                *store.menu_items().write() = items;
            }
            Err(e) => log::error!("Error loading menu items: {}", e),
        }
    });

    let categories = Memo::new(move |_| menu_categories(&store.menu_items().read()));
    let visible_items = move || {
        let category = selected_category.get();
        store
            .menu_items()
            .read()
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect::<Vec<_>>()
    };

    let on_checkout = Callback::new(move |checkout: CheckoutDraft<String>| {
        log::info!(
            "checkout draft: {} lines, total {}",
            checkout.lines.len(),
            checkout.pricing.total
        );
        set_draft.set(Some(checkout));
    });

    view! {
        <div class="restaurant-page">
            {move || match restaurant.get() {
                None => view! { <LoadingView /> }.into_any(),
                Some(r) => view! { <RestaurantHeader restaurant=r /> }.into_any(),
            }}

            <div class="chip-row sticky">
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children=move |category| {
                        let active = category.clone();
                        let pick = category.clone();
                        view! {
                            <button
                                class=move || if selected_category.get() == active { "chip active" } else { "chip" }
                                on:click=move |_| set_selected_category.set(pick.clone())
                            >
                                {category}
                            </button>
                        }
                    }
                />
            </div>

            <div class="menu-list">
                <For
                    each=visible_items
                    key=|item| item.id.clone()
                    children=move |item| view! { <MenuItemRow item=item /> }
                />
            </div>

            <CartPanel on_checkout=on_checkout />
            <CheckoutReview draft=draft set_draft=set_draft />
        </div>
    }
}

#[component]
fn RestaurantHeader(restaurant: Restaurant) -> impl IntoView {
    let image = restaurant
        .image_url
        .clone()
        .unwrap_or_else(|| RESTAURANT_PLACEHOLDER.to_string());

    view! {
        <header class="restaurant-header">
            <img src=image alt=restaurant.name.clone() />
            <div class="restaurant-header-text">
                <h1>{restaurant.name.clone()}</h1>
                <div class="restaurant-meta">
                    <span>{restaurant.address.clone()}</span>
                    <span>{format!("{} min", restaurant.delivery_time)}</span>
                    <span>{format!("{:.1} ★", restaurant.rating)}</span>
                    <span>{format!("Minimum order {}", format_amount(restaurant.minimum_order))}</span>
                </div>
            </div>
        </header>
    }
}

#[component]
fn MenuItemRow(item: MenuItem) -> impl IntoView {
    let store = use_app_store();
    let image = item
        .image_url
        .clone()
        .unwrap_or_else(|| DISH_PLACEHOLDER.to_string());
    let name = item.name.clone();
    let description = item.description.clone();
    let price = item.price;
    let item = StoredValue::new(item);

    view! {
        <div class="menu-item">
            <img class="menu-item-image" src=image alt=name.clone() />
            <div class="menu-item-body">
                <h3>{name}</h3>
                <p class="menu-item-description">{description}</p>
                <div class="menu-item-footer">
                    <span class="price">{format_amount(price)}</span>
                    <button
                        class="add-btn"
                        on:click=move |_| store_add_to_cart(&store, item.get_value())
                    >
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}
