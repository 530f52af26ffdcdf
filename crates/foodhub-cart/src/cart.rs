//! Cart State
//!
//! Ordered list of (item, quantity) lines with derived pricing.
//! Lines are keyed by item identity; derived amounts are recomputed
//! from the lines on every call.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::item::CartItem;
use crate::pricing::{self, PriceBreakdown};

/// One item and how many of it are in the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<T> {
    pub item: T,
    pub quantity: u32,
}

impl<T: CartItem> CartLine<T> {
    /// price × quantity, unrounded
    pub fn line_total(&self) -> Decimal {
        self.item.price() * Decimal::from(self.quantity)
    }
}

/// What a mutation did, for logging and observers
#[derive(Debug, Clone, PartialEq)]
pub enum CartChange<Id> {
    /// New line appended with quantity 1
    Added { id: Id },
    /// Existing line bumped by one
    Incremented { id: Id, quantity: u32 },
    /// Line deleted
    Removed { id: Id },
    /// Quantity overwritten (already clamped)
    QuantitySet { id: Id, quantity: u32 },
    /// Every line dropped
    Cleared { lines: usize },
}

/// Line summary handed to checkout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine<Id> {
    pub menu_item_id: Id,
    /// Display name captured when the draft is built
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

/// Everything a checkout action needs from the cart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutDraft<Id> {
    pub lines: Vec<OrderLine<Id>>,
    pub pricing: PriceBreakdown,
}

/// The order currently being assembled
#[derive(Debug, Clone, PartialEq)]
pub struct CartState<T> {
    lines: Vec<CartLine<T>>,
}

impl<T> Default for CartState<T> {
    fn default() -> Self {
        Self { lines: Vec::new() }
    }
}

impl<T: CartItem> CartState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Mutations
    // ========================

    /// Add one of `item`: bump its line or append a new one
    pub fn add_item(&mut self, item: T) -> CartChange<T::Id> {
        if let Some(line) = self.line_mut(item.id()) {
            line.quantity = line.quantity.saturating_add(1);
            return CartChange::Incremented {
                id: item.id().clone(),
                quantity: line.quantity,
            };
        }
        let id = item.id().clone();
        self.lines.push(CartLine { item, quantity: 1 });
        CartChange::Added { id }
    }

    /// Delete the line for `id`; `None` if there was none
    pub fn remove_item(&mut self, id: &T::Id) -> Option<CartChange<T::Id>> {
        let before = self.lines.len();
        self.lines.retain(|line| line.item.id() != id);
        (self.lines.len() != before).then(|| CartChange::Removed { id: id.clone() })
    }

    /// Set the quantity for `id`, clamped to `0..=u32::MAX`.
    ///
    /// A zero quantity keeps the line; only `remove_item` deletes it.
    /// Anything above `u32::MAX` is stored as `u32::MAX`.
    pub fn update_quantity(&mut self, id: &T::Id, quantity: i64) -> Option<CartChange<T::Id>> {
        let clamped = u32::try_from(quantity.max(0)).unwrap_or(u32::MAX);
        let line = self.line_mut(id)?;
        line.quantity = clamped;
        Some(CartChange::QuantitySet {
            id: id.clone(),
            quantity: clamped,
        })
    }

    /// Drop every line
    pub fn clear(&mut self) -> CartChange<T::Id> {
        let lines = self.lines.len();
        self.lines.clear();
        CartChange::Cleared { lines }
    }

    // ========================
    // Reads
    // ========================

    /// Lines in insertion order
    pub fn lines(&self) -> &[CartLine<T>] {
        &self.lines
    }

    pub fn line(&self, id: &T::Id) -> Option<&CartLine<T>> {
        self.lines.iter().find(|line| line.item.id() == id)
    }

    fn line_mut(&mut self, id: &T::Id) -> Option<&mut CartLine<T>> {
        self.lines.iter_mut().find(|line| line.item.id() == id)
    }

    /// Quantity for `id`, 0 when absent
    pub fn quantity_of(&self, id: &T::Id) -> u32 {
        self.line(id).map_or(0, |line| line.quantity)
    }

    /// Number of distinct lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all quantities
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    // ========================
    // Derived pricing
    // ========================

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Standard fee rule; an empty cart has nothing to deliver
    pub fn delivery_fee(&self) -> Decimal {
        if self.is_empty() {
            return Decimal::ZERO;
        }
        pricing::delivery_fee_for(self.subtotal())
    }

    pub fn service_fee(&self) -> Decimal {
        pricing::service_fee_for(self.subtotal())
    }

    pub fn total(&self) -> Decimal {
        self.subtotal() + self.delivery_fee() + self.service_fee()
    }

    /// All four amounts from a single pass over the lines
    pub fn breakdown(&self) -> PriceBreakdown {
        if self.is_empty() {
            return PriceBreakdown::default();
        }
        PriceBreakdown::from_subtotal(self.subtotal())
    }

    /// Line summaries for checkout
    pub fn order_items(&self) -> Vec<OrderLine<T::Id>> {
        self.lines
            .iter()
            .map(|line| OrderLine {
                menu_item_id: line.item.id().clone(),
                name: line.item.name().to_string(),
                quantity: line.quantity,
                price: line.item.price(),
            })
            .collect()
    }

    pub fn checkout_draft(&self) -> CheckoutDraft<T::Id> {
        CheckoutDraft {
            lines: self.order_items(),
            pricing: self.breakdown(),
        }
    }
}
