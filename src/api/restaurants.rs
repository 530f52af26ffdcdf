//! Restaurant Calls
//!
//! Restaurant listing and menu reads.

use super::{Query, SupabaseClient};
use crate::error::ApiResult;
use crate::models::{MenuItem, Restaurant};

/// Home page filters; empty strings mean "no filter"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantFilter {
    pub search: String,
    pub cuisine: String,
}

pub fn restaurants_query(filter: &RestaurantFilter) -> Query {
    let mut query = Query::table("restaurants").select("*").order("name", true);
    let search = filter.search.trim();
    if !search.is_empty() {
        query = query.ilike("name", search);
    }
    if !filter.cuisine.is_empty() {
        query = query.eq("cuisine_type", &filter.cuisine);
    }
    query
}

pub fn restaurant_query(id: &str) -> Query {
    Query::table("restaurants").select("*").eq("id", id)
}

/// Available items of one restaurant, grouped by category order
pub fn menu_query(restaurant_id: &str) -> Query {
    Query::table("menu_items")
        .select("*")
        .eq("restaurant_id", restaurant_id)
        .eq("is_available", true)
        .order("category", true)
}

pub async fn list_restaurants(client: &SupabaseClient, filter: &RestaurantFilter) -> ApiResult<Vec<Restaurant>> {
    client.select(&restaurants_query(filter)).await
}

pub async fn get_restaurant(client: &SupabaseClient, id: &str) -> ApiResult<Restaurant> {
    client.select_one(&restaurant_query(id)).await
}

pub async fn list_menu_items(client: &SupabaseClient, restaurant_id: &str) -> ApiResult<Vec<MenuItem>> {
    client.select(&menu_query(restaurant_id)).await
}
