//! FoodHub Cart
//!
//! Client-side shopping cart and order pricing.
//!
//! - `item`: what the cart needs from a catalog entry
//! - `cart`: the cart lines and their mutations
//! - `pricing`: delivery/service fee rules and amount formatting

mod cart;
mod item;
mod pricing;

pub use cart::{CartChange, CartLine, CartState, CheckoutDraft, OrderLine};
pub use item::CartItem;
pub use pricing::{
    delivery_fee_for, format_amount, service_fee_for, PriceBreakdown, FREE_DELIVERY_THRESHOLD,
    SERVICE_FEE_RATE, STANDARD_DELIVERY_FEE,
};
