//! Frontend Models
//!
//! Data structures matching the hosted database tables.

use chrono::{DateTime, Utc};
use foodhub_cart::CartItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Restaurant row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: f64,
    /// Free text such as "25-35"
    #[serde(default)]
    pub delivery_time: String,
    #[serde(default)]
    pub minimum_order: Decimal,
    #[serde(default)]
    pub delivery_fee: Decimal,
    #[serde(default)]
    pub cuisine_type: String,
    #[serde(default)]
    pub address: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Menu item row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl CartItem for MenuItem {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Decimal {
        self.price
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

/// Order lifecycle, snake_case on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    PickedUp,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::PickedUp,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Statuses a driver is still working on
    pub const IN_DELIVERY: [OrderStatus; 3] = [
        OrderStatus::Confirmed,
        OrderStatus::PickedUp,
        OrderStatus::OutForDelivery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::PickedUp => "picked_up",
            OrderStatus::OutForDelivery => "out_for_delivery",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Human label, e.g. "Out for delivery"
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::PickedUp => "Picked up",
            OrderStatus::OutForDelivery => "Out for delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Next status a driver can move the order to, with the button text
    pub fn next_delivery_step(&self) -> Option<(OrderStatus, &'static str)> {
        match self {
            OrderStatus::Confirmed => Some((OrderStatus::PickedUp, "Mark as Picked Up")),
            OrderStatus::PickedUp => Some((OrderStatus::OutForDelivery, "Start Delivery")),
            OrderStatus::OutForDelivery => Some((OrderStatus::Delivered, "Complete Delivery")),
            _ => None,
        }
    }

    /// Food is on its way or being made
    pub fn shows_eta(&self) -> bool {
        matches!(self, OrderStatus::Preparing | OrderStatus::OutForDelivery)
    }

    /// CSS class for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "status-badge delivered",
            OrderStatus::Cancelled => "status-badge cancelled",
            _ => "status-badge in-progress",
        }
    }
}

/// One line stored in an order's `items` JSON column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub menu_item_id: String,
    pub quantity: u32,
    pub price: Decimal,
}

/// Restaurant columns embedded into order queries
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
}

/// Order row, optionally with embedded restaurant and customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub restaurant_id: String,
    pub delivery_person_id: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    #[serde(default)]
    pub delivery_fee: Decimal,
    #[serde(default)]
    pub service_fee: Decimal,
    pub status: OrderStatus,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub restaurant: Option<RestaurantSummary>,
    #[serde(default)]
    pub customer: Option<UserProfile>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn restaurant_name(&self) -> &str {
        self.restaurant.as_ref().map_or("", |r| r.name.as_str())
    }

    /// Amount charged: food plus both fees
    pub fn grand_total(&self) -> Decimal {
        self.total_amount + self.delivery_fee + self.service_fee
    }
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Customer,
    Delivery,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Customer => "customer",
            UserType::Delivery => "delivery",
            UserType::Admin => "admin",
        }
    }
}

/// Row of the `users` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_type: Option<UserType>,
    pub is_online: Option<bool>,
    pub vehicle_type: Option<String>,
}

impl UserProfile {
    /// Missing role counts as customer
    pub fn role(&self) -> UserType {
        self.user_type.unwrap_or_default()
    }

    pub fn online(&self) -> bool {
        self.is_online.unwrap_or(false)
    }
}

/// Editable profile fields
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ProfileForm {
    pub full_name: String,
    pub phone: String,
    pub address: String,
}

impl From<&UserProfile> for ProfileForm {
    fn from(profile: &UserProfile) -> Self {
        Self {
            full_name: profile.full_name.clone(),
            phone: profile.phone.clone().unwrap_or_default(),
            address: profile.address.clone().unwrap_or_default(),
        }
    }
}

/// Driver earnings summary
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeliveryEarnings {
    pub daily: Decimal,
    pub weekly: Decimal,
    pub monthly: Decimal,
    pub total_deliveries: usize,
}

/// Admin dashboard figures
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AdminStats {
    pub total_revenue: Decimal,
    pub total_commission: Decimal,
    pub total_orders: usize,
    pub active_customers: usize,
    pub active_delivery_persons: usize,
    /// Every status, in lifecycle order, with its count
    pub orders_by_status: Vec<(OrderStatus, usize)>,
    pub recent_orders: Vec<Order>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_deserialization() {
        let json = r#"{
            "id": "3f1c9a2e-0000-4000-8000-000000000001",
            "user_id": "u1",
            "restaurant_id": "r1",
            "delivery_person_id": null,
            "items": [{"menu_item_id": "m1", "quantity": 2, "price": 10.5}],
            "total_amount": 21.0,
            "delivery_fee": 5.99,
            "service_fee": 2.1,
            "status": "out_for_delivery",
            "delivery_address": "1 Main St",
            "customer_phone": "555-0100",
            "restaurant": {"name": "Luigi's", "image_url": null},
            "created_at": "2024-05-01T12:30:00.123456+00:00"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::OutForDelivery);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.restaurant_name(), "Luigi's");
        assert_eq!(order.grand_total(), "29.09".parse::<Decimal>().unwrap());
        assert!(order.customer.is_none());
    }

    #[test]
    fn test_status_wire_names() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_delivery_steps() {
        assert_eq!(
            OrderStatus::Confirmed.next_delivery_step().map(|s| s.0),
            Some(OrderStatus::PickedUp)
        );
        assert_eq!(
            OrderStatus::PickedUp.next_delivery_step().map(|s| s.0),
            Some(OrderStatus::OutForDelivery)
        );
        assert_eq!(
            OrderStatus::OutForDelivery.next_delivery_step().map(|s| s.0),
            Some(OrderStatus::Delivered)
        );
        assert!(OrderStatus::Delivered.next_delivery_step().is_none());
        assert!(OrderStatus::Pending.next_delivery_step().is_none());
    }

    #[test]
    fn test_missing_role_is_customer() {
        let json = r#"{
            "id": "u1", "email": "a@b.c", "full_name": "Ann",
            "phone": null, "address": null,
            "created_at": "2024-05-01T12:30:00Z",
            "user_type": null, "is_online": null, "vehicle_type": null
        }"#;
        let user: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(user.role(), UserType::Customer);
        assert!(!user.online());
        assert_eq!(ProfileForm::from(&user).phone, "");
    }
}
