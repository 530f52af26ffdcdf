//! Order Calls
//!
//! Order reads for customers, drivers and admins, plus status updates.

use serde_json::json;

use super::{Query, SupabaseClient};
use crate::error::ApiResult;
use crate::models::{Order, OrderStatus};

const WITH_RESTAURANT: &str = "*,restaurant:restaurants(name,address,phone,image_url)";
const WITH_PARTIES: &str =
    "*,customer:users!user_id(*),restaurant:restaurants(name,address,phone,image_url)";

pub fn customer_orders_query(user_id: &str) -> Query {
    Query::table("orders")
        .select(WITH_RESTAURANT)
        .eq("user_id", user_id)
        .order("created_at", false)
}

pub fn active_deliveries_query(driver_id: &str) -> Query {
    Query::table("orders")
        .select(WITH_RESTAURANT)
        .eq("delivery_person_id", driver_id)
        .in_list("status", OrderStatus::IN_DELIVERY.iter().map(|s| s.as_str()))
        .order("created_at", false)
}

pub fn completed_deliveries_query(driver_id: &str, limit: Option<usize>) -> Query {
    let query = Query::table("orders")
        .select(WITH_RESTAURANT)
        .eq("delivery_person_id", driver_id)
        .eq("status", OrderStatus::Delivered.as_str())
        .order("created_at", false);
    match limit {
        Some(n) => query.limit(n),
        None => query,
    }
}

pub fn recent_orders_query(limit: usize) -> Query {
    Query::table("orders")
        .select(WITH_PARTIES)
        .order("created_at", false)
        .limit(limit)
}

pub async fn list_customer_orders(client: &SupabaseClient, user_id: &str) -> ApiResult<Vec<Order>> {
    client.select(&customer_orders_query(user_id)).await
}

pub async fn list_active_deliveries(client: &SupabaseClient, driver_id: &str) -> ApiResult<Vec<Order>> {
    client.select(&active_deliveries_query(driver_id)).await
}

pub async fn list_completed_deliveries(
    client: &SupabaseClient,
    driver_id: &str,
    limit: Option<usize>,
) -> ApiResult<Vec<Order>> {
    client.select(&completed_deliveries_query(driver_id, limit)).await
}

/// Newest orders with customer and restaurant, for the admin table
pub async fn list_recent_orders(client: &SupabaseClient, limit: usize) -> ApiResult<Vec<Order>> {
    client.select(&recent_orders_query(limit)).await
}

pub fn all_orders_query() -> Query {
    Query::table("orders")
        .select(WITH_PARTIES)
        .order("created_at", false)
}

/// Every order, for dashboard totals and the orders tab
pub async fn list_all_orders(client: &SupabaseClient) -> ApiResult<Vec<Order>> {
    client.select(&all_orders_query()).await
}

pub async fn update_order_status(client: &SupabaseClient, order_id: &str, status: OrderStatus) -> ApiResult<()> {
    log::info!("order {} -> {}", order_id, status.as_str());
    client
        .update(&Query::table("orders").eq("id", order_id), &json!({ "status": status }))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_orders_newest_first() {
        assert_eq!(
            customer_orders_query("u1").to_query_string(),
            "select=*,restaurant:restaurants(name,address,phone,image_url)&user_id=eq.u1&order=created_at.desc"
        );
    }

    #[test]
    fn test_active_deliveries_statuses() {
        let q = active_deliveries_query("d1").to_query_string();
        assert!(q.contains("delivery_person_id=eq.d1"));
        assert!(q.contains("status=in.(confirmed,picked_up,out_for_delivery)"));
    }

    #[test]
    fn test_completed_deliveries_limit() {
        let limited = completed_deliveries_query("d1", Some(10)).to_query_string();
        assert!(limited.contains("status=eq.delivered"));
        assert!(limited.ends_with("&limit=10"));
        assert!(!completed_deliveries_query("d1", None).to_query_string().contains("limit"));
    }

    #[test]
    fn test_recent_orders_embeds_customer() {
        let q = recent_orders_query(10).to_query_string();
        assert!(q.starts_with("select=*,customer:users!user_id(*),restaurant:restaurants("));
        assert!(q.ends_with("order=created_at.desc&limit=10"));
    }

    #[test]
    fn test_all_orders_unbounded() {
        let q = all_orders_query().to_query_string();
        assert!(q.contains("customer:users!user_id(*)"));
        assert!(!q.contains("limit"));
    }
}
