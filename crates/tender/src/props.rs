//! Property-based tests for the fixed-point engine and the text boundary.

use proptest::prelude::*;

use crate::arithmetic::{self, Amount};
use crate::currency::Currency;
use crate::parse::parse_amount;

/// Strategy for amounts comfortably inside the 64-bit range, so ratio
/// products cannot overflow.
fn amount() -> impl Strategy<Value = Amount> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy for split party counts (1 to 100).
fn party_count() -> impl Strategy<Value = usize> {
    1usize..100
}

/// Strategy for ratio lists with at least one positive entry.
fn ratios() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(0i64..1000, 1..10)
        .prop_filter("ratio sum must be positive", |rs| rs.iter().sum::<i64>() > 0)
}

/// Strategy for fraction digit counts found in real currencies.
fn fraction() -> impl Strategy<Value = u32> {
    0u32..=4
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Splitting conserves the amount exactly, for any sign and count.
    #[test]
    fn prop_split_conserves_amount(amount in amount(), parties in party_count()) {
        let shares = arithmetic::split(amount, parties).unwrap();
        prop_assert_eq!(shares.len(), parties);
        prop_assert_eq!(
            shares.iter().sum::<Amount>(),
            amount,
            "Shares must sum back to {}",
            amount
        );
    }

    /// All split shares lie within one unit of each other, and the shares
    /// carrying the extra unit come first.
    #[test]
    fn prop_split_is_fair(amount in amount(), parties in party_count()) {
        let shares = arithmetic::split(amount, parties).unwrap();
        let max = *shares.iter().max().unwrap();
        let min = *shares.iter().min().unwrap();
        prop_assert!(max - min <= 1, "Share spread exceeds one unit: {:?}", shares);

        let divisor = i64::try_from(parties).unwrap();
        let extra = amount.checked_rem(divisor).unwrap().unsigned_abs() as usize;
        let base = amount / divisor;
        for (index, share) in shares.iter().enumerate() {
            let expected = if index < extra {
                base + if amount < 0 { -1 } else { 1 }
            } else {
                base
            };
            prop_assert_eq!(*share, expected, "Share {} out of order", index);
        }
    }

    /// Allocation conserves the amount exactly whenever the ratio sum is
    /// positive.
    #[test]
    fn prop_allocate_conserves_amount(amount in amount(), ratios in ratios()) {
        let shares = arithmetic::allocate(amount, &ratios).unwrap();
        prop_assert_eq!(shares.len(), ratios.len());
        prop_assert_eq!(
            shares.iter().sum::<Amount>(),
            amount,
            "Shares must sum back to {}",
            amount
        );
    }

    /// Rounding lands on a multiple of the unit, never drifts by more than
    /// half a unit, and resolves exact halves away from zero.
    #[test]
    fn prop_round_nearest_ties_away(amount in amount(), fraction in fraction()) {
        let unit = 10i64.pow(fraction);
        let rounded = arithmetic::round(amount, fraction);

        prop_assert_eq!(rounded % unit, 0);
        let distance = (rounded - amount).abs();
        prop_assert!(distance * 2 <= unit, "Rounded {} too far from {}", rounded, amount);
        if distance * 2 == unit {
            prop_assert!(
                rounded.abs() > amount.abs(),
                "Half boundary must round away from zero: {} -> {}",
                amount,
                rounded
            );
        }
    }

    /// Rendering an amount without grouping and parsing it back is the
    /// identity, across fraction widths and separator conventions.
    #[test]
    fn prop_parse_format_round_trip(amount in amount(), fraction in fraction()) {
        let currency = Currency::new("PRP", "#", "1 $", ".", "", fraction);
        let rendered = currency.formatter().format_amount(amount);
        prop_assert_eq!(parse_amount(&rendered, &currency).unwrap(), amount);
    }

    /// The comma-decimal convention round-trips the same way.
    #[test]
    fn prop_parse_format_round_trip_comma(amount in amount()) {
        let currency = Currency::new("PRC", "#", "$ 1", ",", "", 2);
        let rendered = currency.formatter().format_amount(amount);
        prop_assert_eq!(parse_amount(&rendered, &currency).unwrap(), amount);
    }
}
