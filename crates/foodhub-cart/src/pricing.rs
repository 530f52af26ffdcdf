//! Order Pricing Rules
//!
//! Fee rules applied on top of a cart subtotal. Amounts are exact decimals;
//! rounding only happens in `format_amount`.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Subtotals strictly above this amount ship for free (50.00)
pub const FREE_DELIVERY_THRESHOLD: Decimal = Decimal::from_parts(5000, 0, 0, false, 2);

/// Delivery fee below the threshold (5.99)
pub const STANDARD_DELIVERY_FEE: Decimal = Decimal::from_parts(599, 0, 0, false, 2);

/// Service fee as a fraction of the subtotal (0.10)
pub const SERVICE_FEE_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Delivery fee for a given subtotal
pub fn delivery_fee_for(subtotal: Decimal) -> Decimal {
    if subtotal > FREE_DELIVERY_THRESHOLD {
        Decimal::ZERO
    } else {
        STANDARD_DELIVERY_FEE
    }
}

/// Service fee for a given subtotal
pub fn service_fee_for(subtotal: Decimal) -> Decimal {
    subtotal * SERVICE_FEE_RATE
}

/// All four derived amounts of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PriceBreakdown {
    pub subtotal: Decimal,
    pub delivery_fee: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
}

impl PriceBreakdown {
    /// Apply the fee rules to a subtotal
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let delivery_fee = delivery_fee_for(subtotal);
        let service_fee = service_fee_for(subtotal);
        Self {
            subtotal,
            delivery_fee,
            service_fee,
            total: subtotal + delivery_fee + service_fee,
        }
    }
}

/// Render an amount as `$12.34`
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${:.2}", rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_threshold_is_strict() {
        assert_eq!(delivery_fee_for(money("50.00")), money("5.99"));
        assert_eq!(delivery_fee_for(money("50.01")), Decimal::ZERO);
        assert_eq!(delivery_fee_for(Decimal::ZERO), money("5.99"));
    }

    #[test]
    fn test_service_fee_is_ten_percent() {
        assert_eq!(service_fee_for(Decimal::ZERO), Decimal::ZERO);
        assert_eq!(service_fee_for(money("65.00")), money("6.50"));
        assert_eq!(service_fee_for(money("0.05")), money("0.005"));
    }

    #[test]
    fn test_breakdown_adds_up() {
        let b = PriceBreakdown::from_subtotal(money("20.00"));
        assert_eq!(b.delivery_fee, money("5.99"));
        assert_eq!(b.service_fee, money("2.00"));
        assert_eq!(b.total, money("27.99"));
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(money("71.5")), "$71.50");
        assert_eq!(format_amount(Decimal::ZERO), "$0.00");
        assert_eq!(format_amount(money("0.005")), "$0.01");
        assert_eq!(format_amount(money("12.344")), "$12.34");
    }
}
