//! Cart Item Contract
//!
//! What the cart needs to know about an orderable item.
//! The catalog owns the item data; the cart only reads it.

use rust_decimal::Decimal;

/// Core trait for anything that can be put in the cart
pub trait CartItem: Clone {
    /// The type of the item's unique identifier
    type Id: Clone + PartialEq + std::fmt::Debug;

    /// Returns the item's unique identifier
    fn id(&self) -> &Self::Id;

    /// Display name
    fn name(&self) -> &str;

    /// Unit price, never negative
    fn price(&self) -> Decimal;

    /// Image reference, if the catalog has one
    fn image_url(&self) -> Option<&str>;
}
