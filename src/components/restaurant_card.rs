//! Restaurant Card Component
//!
//! One tile of the home page grid.

use foodhub_cart::format_amount;
use leptos::prelude::*;

use super::RESTAURANT_PLACEHOLDER;
use crate::context::use_app_context;
use crate::models::Restaurant;
use crate::routes::Page;

#[component]
pub fn RestaurantCard(restaurant: Restaurant) -> impl IntoView {
    let ctx = use_app_context();
    let id = restaurant.id.clone();
    let image = restaurant
        .image_url
        .clone()
        .unwrap_or_else(|| RESTAURANT_PLACEHOLDER.to_string());

    view! {
        <div class="restaurant-card" on:click=move |_| ctx.navigate(Page::Restaurant(id.clone()))>
            <img class="restaurant-image" src=image alt=restaurant.name.clone() />
            <div class="restaurant-body">
                <div class="restaurant-title-row">
                    <h3>{restaurant.name.clone()}</h3>
                    <span class="rating">{format!("{:.1} ★", restaurant.rating)}</span>
                </div>
                <p class="cuisine">{restaurant.cuisine_type.clone()}</p>
                <p class="address">{restaurant.address.clone()}</p>
                <div class="restaurant-meta">
                    <span>{format!("{} min", restaurant.delivery_time)}</span>
                    <span>{format!("{} delivery", format_amount(restaurant.delivery_fee))}</span>
                </div>
            </div>
        </div>
    }
}
