//! Pricing
//!
//! Pure total calculation over any `{price, quantity}`-shaped items,
//! independent of the live cart so quotes and historical orders can be
//! recomputed without one.

use rust_decimal::Decimal;

/// Anything with a unit price and a quantity.
pub trait Priced {
    /// Unit price of one item.
    fn unit_price(&self) -> Decimal;

    /// Number of units.
    fn quantity(&self) -> u32;
}

/// Sum of `price * quantity` across all items. Empty slice totals zero.
pub fn subtotal<T: Priced>(items: &[T]) -> Decimal {
    items.iter().fold(Decimal::ZERO, |acc, item| {
        acc + item.unit_price() * Decimal::from(item.quantity())
    })
}

/// Calculate a possibly-discounted total from a list of items.
///
/// `discount_percent` is in percent points (25 means 25% off). Out-of-range
/// values are clamped rather than rejected, preserving the observed business
/// rule: a negative discount is ignored and the plain subtotal is returned,
/// while anything above 100 makes the order free.
///
/// No rounding is applied; currency formatting and rounding belong to the
/// presentation layer.
pub fn calculate_total<T: Priced>(items: &[T], discount_percent: Decimal) -> Decimal {
    let subtotal = subtotal(items);

    if discount_percent < Decimal::ZERO {
        return subtotal;
    }

    if discount_percent > Decimal::ONE_HUNDRED {
        return Decimal::ZERO;
    }

    subtotal - subtotal * (discount_percent / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Quoted {
        price: Decimal,
        quantity: u32,
    }

    impl Priced for Quoted {
        fn unit_price(&self) -> Decimal {
            self.price
        }

        fn quantity(&self) -> u32 {
            self.quantity
        }
    }

    fn test_items() -> [Quoted; 2] {
        [
            Quoted {
                price: Decimal::from(100),
                quantity: 2,
            },
            Quoted {
                price: Decimal::from(50),
                quantity: 1,
            },
        ]
    }

    #[test]
    fn subtotal_sums_price_times_quantity() {
        assert_eq!(subtotal(&test_items()), Decimal::from(250));
    }

    #[test]
    fn subtotal_of_empty_slice_is_zero() {
        let items: [Quoted; 0] = [];

        assert_eq!(subtotal(&items), Decimal::ZERO);
    }

    #[test]
    fn in_range_discount_scales_the_subtotal() {
        let items = test_items();

        assert_eq!(
            calculate_total(&items, Decimal::from(10)),
            Decimal::from(225)
        );
        assert_eq!(
            calculate_total(&items, Decimal::from(100)),
            Decimal::ZERO
        );
        assert_eq!(calculate_total(&items, Decimal::ZERO), Decimal::from(250));
    }

    #[test]
    fn fractional_discount_is_not_rounded() {
        let items = [Quoted {
            price: Decimal::new(1999, 2), // 19.99
            quantity: 1,
        }];

        // 19.99 * 0.75 = 14.9925, carried at full precision.
        assert_eq!(
            calculate_total(&items, Decimal::from(25)),
            Decimal::new(149_925, 4)
        );
    }

    #[test]
    fn negative_discount_is_ignored() {
        assert_eq!(
            calculate_total(&test_items(), Decimal::from(-5)),
            Decimal::from(250)
        );
    }

    #[test]
    fn discount_above_one_hundred_makes_the_order_free() {
        assert_eq!(
            calculate_total(&test_items(), Decimal::from(150)),
            Decimal::ZERO
        );
    }

    #[test]
    fn empty_items_total_zero_for_any_discount() {
        let items: [Quoted; 0] = [];

        assert_eq!(calculate_total(&items, Decimal::from(-5)), Decimal::ZERO);
        assert_eq!(calculate_total(&items, Decimal::from(50)), Decimal::ZERO);
        assert_eq!(calculate_total(&items, Decimal::from(500)), Decimal::ZERO);
    }
}
