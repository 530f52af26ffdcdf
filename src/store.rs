//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! created once by `App` and handed down through context.

use foodhub_cart::{CartChange, CartState};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{MenuItem, Order, Restaurant};
use crate::routes::AuthState;

/// The cart holds menu items from the catalog
pub type Cart = CartState<MenuItem>;

/// Application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Home page listing
    pub restaurants: Vec<Restaurant>,
    /// Menu of the restaurant being viewed
    pub menu_items: Vec<MenuItem>,
    /// Orders of the signed-in customer
    pub orders: Vec<Order>,
    /// Who is signed in
    pub auth: AuthState,
    /// The order being assembled
    pub cart: Cart,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Cart Helpers
// ========================
//
// Each helper takes one write guard. Dropping it notifies every
// subscriber before the helper returns.

fn log_change(change: &CartChange<String>) {
    log::debug!("cart: {:?}", change);
}

pub fn store_add_to_cart(store: &AppStore, item: MenuItem) {
    let change = store.cart().write().add_item(item);
    log_change(&change);
}

pub fn store_remove_from_cart(store: &AppStore, item_id: &str) {
    if let Some(change) = store.cart().write().remove_item(&item_id.to_string()) {
        log_change(&change);
    }
}

pub fn store_update_cart_quantity(store: &AppStore, item_id: &str, quantity: i64) {
    if let Some(change) = store.cart().write().update_quantity(&item_id.to_string(), quantity) {
        log_change(&change);
    }
}

pub fn store_clear_cart(store: &AppStore) {
    let change = store.cart().write().clear();
    log_change(&change);
}

// ========================
// Other Helpers
// ========================

/// Replace the signed-in state; signing out also empties the cart and
/// drops the previous user's orders
pub fn store_set_auth(store: &AppStore, auth: AuthState) {
    let signed_out = matches!(auth, AuthState::SignedOut);
    *store.auth().write() = auth;
    if !signed_out {
        return;
    }
    if !store.cart().read().is_empty() {
        store_clear_cart(store);
    }
    if !store.orders().read().is_empty() {
        store.orders().write().clear();
        log::debug!("orders cleared on sign out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use leptos::reactive::owner::Owner;
    use rust_decimal::Decimal;

    fn item(id: &str, price: &str) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            restaurant_id: "r1".to_string(),
            name: format!("Item {}", id),
            description: String::new(),
            price: price.parse().unwrap(),
            image_url: None,
            category: "Mains".to_string(),
            is_available: true,
            created_at: Utc::now(),
        }
    }

    fn money(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_cart_helpers_write_through_store() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());

        store_add_to_cart(&store, item("a", "10.00"));
        store_add_to_cart(&store, item("a", "10.00"));
        store_add_to_cart(&store, item("b", "45.00"));
        {
            let cart = store.cart().read();
            assert_eq!(cart.len(), 2);
            assert_eq!(cart.subtotal(), money("65.00"));
            assert_eq!(cart.total(), money("71.50"));
        }

        store_update_cart_quantity(&store, "b", -3);
        assert_eq!(store.cart().read().quantity_of(&"b".to_string()), 0);
        assert_eq!(store.cart().read().subtotal(), money("20.00"));

        store_remove_from_cart(&store, "missing");
        store_remove_from_cart(&store, "b");
        assert_eq!(store.cart().read().len(), 1);

        store_clear_cart(&store);
        assert!(store.cart().read().is_empty());
        assert_eq!(store.cart().read().total(), Decimal::ZERO);
    }

    #[test]
    fn test_sign_out_empties_cart() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());

        store_add_to_cart(&store, item("a", "3.00"));
        store_set_auth(&store, AuthState::SignedOut);
        assert!(store.cart().read().is_empty());
        assert_eq!(*store.auth().read(), AuthState::SignedOut);
    }

    fn order(id: &str) -> Order {
        Order {
            id: id.to_string(),
            user_id: "u1".to_string(),
            restaurant_id: "r1".to_string(),
            delivery_person_id: None,
            items: Vec::new(),
            total_amount: money("12.00"),
            delivery_fee: money("5.99"),
            service_fee: money("1.20"),
            status: crate::models::OrderStatus::Pending,
            delivery_address: String::new(),
            customer_phone: String::new(),
            restaurant: None,
            customer: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_sign_out_drops_orders() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());

        *store.orders().write() = vec![order("o1"), order("o2")];
        store_set_auth(&store, AuthState::Loading);
        assert_eq!(store.orders().read().len(), 2);

        store_set_auth(&store, AuthState::SignedOut);
        assert!(store.orders().read().is_empty());
    }

    #[test]
    fn test_checkout_names_survive_menu_switch() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AppState::default());

        let first = item("a1", "8.00");
        *store.menu_items().write() = vec![first.clone()];
        store_add_to_cart(&store, first);

        // Opening another restaurant replaces the loaded menu
        *store.menu_items().write() = vec![item("b1", "3.00")];

        let draft = store.cart().read().checkout_draft();
        assert_eq!(draft.lines.len(), 1);
        assert_eq!(draft.lines[0].name, "Item a1");
        assert_eq!(draft.lines[0].menu_item_id, "a1");
    }
}
