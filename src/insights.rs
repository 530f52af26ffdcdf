//! View Helpers
//!
//! Pure functions behind the listing filters and dashboards.

use chrono::{DateTime, Datelike, Duration, Utc};
use rust_decimal::Decimal;

use crate::models::{AdminStats, DeliveryEarnings, MenuItem, Order, OrderStatus, UserProfile, UserType};

/// Cuisine filter chips on the home page
pub const CUISINES: &[&str] = &["All", "Italian", "Japanese", "Indian", "Mexican", "Chinese"];

/// Platform cut of non-cancelled order value (15%)
pub const COMMISSION_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// "All" chip clears the filter
pub fn cuisine_filter_value(chip: &str) -> String {
    if chip == "All" {
        String::new()
    } else {
        chip.to_string()
    }
}

/// Distinct categories in first-seen order
pub fn menu_categories(items: &[MenuItem]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in items {
        if !categories.contains(&item.category) {
            categories.push(item.category.clone());
        }
    }
    categories
}

/// Case-insensitive match on name or email
pub fn filter_users<'a>(users: &'a [UserProfile], query: &str) -> Vec<&'a UserProfile> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .filter(|u| {
            needle.is_empty()
                || u.full_name.to_lowercase().contains(&needle)
                || u.email.to_lowercase().contains(&needle)
        })
        .collect()
}

/// First 8 characters of an id, for "Order #xxxxxxxx"
pub fn short_id(id: &str) -> &str {
    match id.char_indices().nth(8) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Dashboard totals from the full order list
pub fn admin_stats(orders: &[Order], users: &[UserProfile], recent_orders: Vec<Order>) -> AdminStats {
    let total_revenue: Decimal = orders
        .iter()
        .filter(|o| o.status != OrderStatus::Cancelled)
        .map(|o| o.total_amount)
        .sum();

    let orders_by_status = OrderStatus::ALL
        .iter()
        .map(|status| (*status, orders.iter().filter(|o| o.status == *status).count()))
        .collect();

    let active_customers = users
        .iter()
        .filter(|u| u.role() == UserType::Customer)
        .filter(|u| orders.iter().any(|o| o.user_id == u.id))
        .count();

    let active_delivery_persons = users
        .iter()
        .filter(|u| u.role() == UserType::Delivery && u.online())
        .count();

    AdminStats {
        total_revenue,
        total_commission: total_revenue * COMMISSION_RATE,
        total_orders: orders.len(),
        active_customers,
        active_delivery_persons,
        orders_by_status,
        recent_orders,
    }
}

/// Delivery fees earned today, in the last 7 days and this calendar month
pub fn delivery_earnings(orders: &[Order], now: DateTime<Utc>) -> DeliveryEarnings {
    let week_start = now - Duration::days(7);
    let mut earnings = DeliveryEarnings::default();
    for order in orders.iter().filter(|o| o.status == OrderStatus::Delivered) {
        let at = order.created_at;
        if at > now {
            continue;
        }
        earnings.total_deliveries += 1;
        if at.date_naive() == now.date_naive() {
            earnings.daily += order.delivery_fee;
        }
        if at > week_start {
            earnings.weekly += order.delivery_fee;
        }
        if at.year() == now.year() && at.month() == now.month() {
            earnings.monthly += order.delivery_fee;
        }
    }
    earnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn money(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn order(id: &str, user: &str, status: OrderStatus, total: &str, fee: &str, created: DateTime<Utc>) -> Order {
        Order {
            id: id.to_string(),
            user_id: user.to_string(),
            restaurant_id: "r1".to_string(),
            delivery_person_id: Some("d1".to_string()),
            items: Vec::new(),
            total_amount: money(total),
            delivery_fee: money(fee),
            service_fee: Decimal::ZERO,
            status,
            delivery_address: String::new(),
            customer_phone: String::new(),
            restaurant: None,
            customer: None,
            created_at: created,
        }
    }

    fn user(id: &str, name: &str, email: &str, role: Option<UserType>, online: Option<bool>) -> UserProfile {
        UserProfile {
            id: id.to_string(),
            email: email.to_string(),
            full_name: name.to_string(),
            phone: None,
            address: None,
            created_at: at(2024, 1, 1, 0),
            user_type: role,
            is_online: online,
            vehicle_type: None,
        }
    }

    fn menu_item(id: &str, category: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            restaurant_id: "r1".to_string(),
            name: id.to_string(),
            description: String::new(),
            price: money("1.00"),
            image_url: None,
            category: category.to_string(),
            is_available: true,
            created_at: at(2024, 1, 1, 0),
        }
    }

    #[test]
    fn test_cuisine_chip() {
        assert_eq!(cuisine_filter_value("All"), "");
        assert_eq!(cuisine_filter_value("Indian"), "Indian");
    }

    #[test]
    fn test_menu_categories_first_seen() {
        let items = vec![
            menu_item("1", "Starters"),
            menu_item("2", "Mains"),
            menu_item("3", "Starters"),
            menu_item("4", "Desserts"),
        ];
        assert_eq!(menu_categories(&items), vec!["Starters", "Mains", "Desserts"]);
        assert!(menu_categories(&[]).is_empty());
    }

    #[test]
    fn test_filter_users() {
        let users = vec![
            user("1", "Ann Lee", "ann@example.com", None, None),
            user("2", "Bob Stone", "bob@FOOD.io", Some(UserType::Delivery), None),
        ];
        assert_eq!(filter_users(&users, "").len(), 2);
        assert_eq!(filter_users(&users, "LEE")[0].id, "1");
        assert_eq!(filter_users(&users, "food.io")[0].id, "2");
        assert!(filter_users(&users, "zed").is_empty());
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("3f1c9a2e-0000-4000"), "3f1c9a2e");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_admin_stats() {
        let now = at(2024, 5, 10, 12);
        let orders = vec![
            order("o1", "c1", OrderStatus::Delivered, "40.00", "5.99", now),
            order("o2", "c1", OrderStatus::Pending, "20.00", "5.99", now),
            order("o3", "c2", OrderStatus::Cancelled, "99.00", "0", now),
        ];
        let users = vec![
            user("c1", "C1", "c1@x", None, None),
            user("c2", "C2", "c2@x", Some(UserType::Customer), None),
            user("c3", "C3", "c3@x", Some(UserType::Customer), None),
            user("d1", "D1", "d1@x", Some(UserType::Delivery), Some(true)),
            user("d2", "D2", "d2@x", Some(UserType::Delivery), Some(false)),
            user("a1", "A1", "a1@x", Some(UserType::Admin), Some(true)),
        ];
        let stats = admin_stats(&orders, &users, Vec::new());
        assert_eq!(stats.total_revenue, money("60.00"));
        assert_eq!(stats.total_commission, money("9.00"));
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.active_customers, 2);
        assert_eq!(stats.active_delivery_persons, 1);
        assert_eq!(stats.orders_by_status.len(), OrderStatus::ALL.len());
        assert!(stats.orders_by_status.contains(&(OrderStatus::Pending, 1)));
        assert!(stats.orders_by_status.contains(&(OrderStatus::PickedUp, 0)));
    }

    #[test]
    fn test_delivery_earnings_windows() {
        let now = at(2024, 5, 10, 18);
        let orders = vec![
            order("today", "c", OrderStatus::Delivered, "10", "4.00", at(2024, 5, 10, 9)),
            order("this-week", "c", OrderStatus::Delivered, "10", "3.00", at(2024, 5, 5, 9)),
            order("last-month", "c", OrderStatus::Delivered, "10", "2.00", at(2024, 4, 30, 9)),
            order("old", "c", OrderStatus::Delivered, "10", "1.00", at(2024, 1, 2, 9)),
            order("active", "c", OrderStatus::OutForDelivery, "10", "9.00", at(2024, 5, 10, 10)),
        ];
        let earnings = delivery_earnings(&orders, now);
        assert_eq!(earnings.daily, money("4.00"));
        assert_eq!(earnings.weekly, money("7.00"));
        assert_eq!(earnings.monthly, money("7.00"));
        assert_eq!(earnings.total_deliveries, 4);
    }

    #[test]
    fn test_delivery_earnings_week_crosses_month() {
        let now = at(2024, 5, 2, 12);
        let orders = vec![order("o", "c", OrderStatus::Delivered, "10", "2.50", at(2024, 4, 29, 12))];
        let earnings = delivery_earnings(&orders, now);
        assert_eq!(earnings.daily, Decimal::ZERO);
        assert_eq!(earnings.weekly, money("2.50"));
        assert_eq!(earnings.monthly, Decimal::ZERO);
    }
}
