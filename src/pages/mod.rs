//! Pages
//!
//! One component per `routes::Page`.

mod admin_dashboard;
mod auth;
mod delivery_dashboard;
mod home;
mod orders;
mod profile;
mod restaurant_details;

pub use admin_dashboard::AdminDashboard;
pub use auth::AuthPage;
pub use delivery_dashboard::DeliveryDashboard;
pub use home::HomePage;
pub use orders::OrdersPage;
pub use profile::ProfilePage;
pub use restaurant_details::RestaurantPage;
