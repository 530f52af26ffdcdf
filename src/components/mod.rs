//! UI Components
//!
//! Reusable Leptos components.

mod cart_panel;
mod checkout_review;
mod loading_view;
mod nav_bar;
mod order_details;
mod restaurant_card;
mod stat_card;
mod status_badge;

pub use cart_panel::CartPanel;
pub use checkout_review::CheckoutReview;
pub use loading_view::LoadingView;
pub use nav_bar::NavBar;
pub use order_details::OrderDetails;
pub use restaurant_card::RestaurantCard;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;

/// Shown when a restaurant has no image
pub const RESTAURANT_PLACEHOLDER: &str = "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4";
/// Shown when a dish has no image
pub const DISH_PLACEHOLDER: &str = "https://images.unsplash.com/photo-1546069901-ba9599a7e63c";

/// Dates as "May 1, 2024"
pub fn format_date(at: &chrono::DateTime<chrono::Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}
