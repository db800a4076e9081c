//! Fixed-point arithmetic over minor-unit amounts.
//!
//! Every function operates on [`Amount`] values, i.e. integers counting a
//! currency's smallest unit, so results are exact. Division and modulus
//! truncate toward zero, matching the sign of the dividend. Overflow of the
//! 64-bit amount is treated as a programming error: the checked operations
//! panic with a message instead of silently wrapping.
//!
//! [`split`] and [`allocate`] guarantee that the shares sum back to the
//! original amount - leftover units are redistributed explicitly rather than
//! approximated away.

use crate::error::{MoneyError, MoneyResult};

/// A monetary amount in minor units, scaled by `10^fraction` of its currency.
pub type Amount = i64;

/// Returns the absolute value of `amount`.
///
/// # Panics
///
/// Panics if `amount` is `i64::MIN`.
#[must_use]
pub fn absolute(amount: Amount) -> Amount {
    amount.checked_abs().expect("amount overflow in absolute")
}

/// Returns `amount` with its sign flipped.
///
/// # Panics
///
/// Panics if `amount` is `i64::MIN`.
#[must_use]
pub fn negative(amount: Amount) -> Amount {
    amount.checked_neg().expect("amount overflow in negative")
}

/// Returns the sum of two amounts.
///
/// # Panics
///
/// Panics if the sum overflows the 64-bit amount range.
#[must_use]
pub fn add(a: Amount, b: Amount) -> Amount {
    a.checked_add(b).expect("amount overflow in add")
}

/// Returns the difference of two amounts.
///
/// # Panics
///
/// Panics if the difference overflows the 64-bit amount range.
#[must_use]
pub fn subtract(a: Amount, b: Amount) -> Amount {
    a.checked_sub(b).expect("amount overflow in subtract")
}

/// Returns `amount` scaled by an integer factor.
///
/// # Panics
///
/// Panics if the product overflows the 64-bit amount range.
#[must_use]
pub fn multiply(amount: Amount, factor: i64) -> Amount {
    amount
        .checked_mul(factor)
        .expect("amount overflow in multiply")
}

/// Integer division truncating toward zero.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[must_use]
pub fn divide(amount: Amount, divisor: i64) -> Amount {
    amount / divisor
}

/// Remainder of truncating division; takes the sign of `amount`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[must_use]
pub fn modulus(amount: Amount, divisor: i64) -> Amount {
    amount % divisor
}

/// Rounds `amount` to the nearest multiple of `10^fraction`, ties away from
/// zero.
///
/// A magnitude sitting exactly on the half boundary rounds outward, so
/// `round(150, 2) == 200` and `round(-150, 2) == -200`.
///
/// # Panics
///
/// Panics if `10^fraction` or the rounded result overflows the 64-bit amount
/// range.
#[must_use]
pub fn round(amount: Amount, fraction: u32) -> Amount {
    let unit = 10i64
        .checked_pow(fraction)
        .expect("fraction too large for a 64-bit amount");
    let remainder = amount % unit;
    let truncated = amount - remainder;
    if absolute(remainder) * 2 >= unit {
        if amount < 0 {
            subtract(truncated, unit)
        } else {
            add(truncated, unit)
        }
    } else {
        truncated
    }
}

/// Splits `amount` into `parties` equal-as-possible shares.
///
/// Each share starts at the truncating quotient; the leftover units are then
/// handed out one by one, carrying the sign of `amount`, to the first shares
/// in order. The shares always sum back to `amount`.
///
/// # Errors
///
/// Returns [`MoneyError::InvalidSplitCount`] if `parties` is zero.
pub fn split(amount: Amount, parties: usize) -> MoneyResult<Vec<Amount>> {
    if parties == 0 {
        return Err(MoneyError::InvalidSplitCount(parties));
    }
    let divisor = i64::try_from(parties).expect("party count exceeds i64");

    let base = divide(amount, divisor);
    let mut shares = vec![base; parties];

    let mut leftover = absolute(modulus(amount, divisor));
    let step: Amount = if amount < 0 { -1 } else { 1 };
    for share in &mut shares {
        if leftover == 0 {
            break;
        }
        *share = add(*share, step);
        leftover -= 1;
    }

    Ok(shares)
}

/// Distributes `amount` across parties weighted by non-negative integer
/// ratios.
///
/// Each party's raw share is the truncating quotient `amount * ratio / sum`;
/// whatever is left after truncation is distributed in single-unit steps,
/// carrying the leftover's sign, to the parties in ratio order. For a ratio
/// sum of zero every party receives zero and the amount stays with the
/// caller. Otherwise the shares always sum back to `amount`.
///
/// # Errors
///
/// Returns [`MoneyError::NoRatios`] if `ratios` is empty and
/// [`MoneyError::NegativeRatio`] if any ratio is negative.
///
/// # Panics
///
/// Panics if `amount * ratio` or the ratio sum overflows the 64-bit amount
/// range.
pub fn allocate(amount: Amount, ratios: &[i64]) -> MoneyResult<Vec<Amount>> {
    if ratios.is_empty() {
        return Err(MoneyError::NoRatios);
    }

    let mut sum: i64 = 0;
    for &ratio in ratios {
        if ratio < 0 {
            return Err(MoneyError::NegativeRatio(ratio));
        }
        sum = sum.checked_add(ratio).expect("ratio sum overflow");
    }
    if sum == 0 {
        return Ok(vec![0; ratios.len()]);
    }

    let mut shares: Vec<Amount> = ratios
        .iter()
        .map(|&ratio| divide(multiply(amount, ratio), sum))
        .collect();

    let total: Amount = shares.iter().sum();
    let mut leftover = subtract(amount, total);
    let step: Amount = if leftover < 0 { -1 } else { 1 };
    // Truncation leaves strictly less than one unit per party, so the walk
    // below never runs past the end of the share list.
    let mut party = 0;
    while leftover != 0 {
        shares[party] = add(shares[party], step);
        leftover -= step;
        party += 1;
    }

    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute() {
        assert_eq!(absolute(-1), 1);
        assert_eq!(absolute(0), 0);
        assert_eq!(absolute(1), 1);
    }

    #[test]
    fn test_negative() {
        assert_eq!(negative(-1), 1);
        assert_eq!(negative(0), 0);
        assert_eq!(negative(1), -1);
    }

    #[test]
    fn test_add_subtract_multiply() {
        assert_eq!(add(5, 5), 10);
        assert_eq!(add(1, -1), 0);
        assert_eq!(subtract(10, 5), 5);
        assert_eq!(subtract(1, -1), 2);
        assert_eq!(multiply(5, 5), 25);
        assert_eq!(multiply(1, -1), -1);
        assert_eq!(multiply(1, 0), 0);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(divide(7, 2), 3);
        assert_eq!(divide(-7, 2), -3);
        assert_eq!(divide(7, -2), -3);
    }

    #[test]
    fn test_modulus_takes_dividend_sign() {
        assert_eq!(modulus(7, 2), 1);
        assert_eq!(modulus(-7, 2), -1);
        assert_eq!(modulus(-101, 4), -1);
    }

    #[test]
    fn test_round_ties_away_from_zero() {
        // Rounding to whole major units of a 2-fraction currency.
        assert_eq!(round(125, 2), 100);
        assert_eq!(round(175, 2), 200);
        assert_eq!(round(349, 2), 300);
        assert_eq!(round(351, 2), 400);
        assert_eq!(round(0, 2), 0);
        assert_eq!(round(-1, 2), 0);
        assert_eq!(round(-75, 2), -100);
        assert_eq!(round(-150, 2), -200);
    }

    #[test]
    fn test_round_three_fraction_digits() {
        assert_eq!(round(12555, 3), 13000);
    }

    #[test]
    fn test_split_distributes_remainder_first() {
        assert_eq!(split(100, 3).unwrap(), vec![34, 33, 33]);
        assert_eq!(split(100, 4).unwrap(), vec![25, 25, 25, 25]);
        assert_eq!(split(5, 3).unwrap(), vec![2, 2, 1]);
    }

    #[test]
    fn test_split_negative_amount() {
        assert_eq!(split(-101, 4).unwrap(), vec![-26, -25, -25, -25]);
        assert_eq!(split(-2, 3).unwrap(), vec![-1, -1, 0]);
    }

    #[test]
    fn test_split_zero_parties() {
        assert_eq!(split(100, 0), Err(MoneyError::InvalidSplitCount(0)));
    }

    #[test]
    fn test_split_conserves_amount() {
        for amount in [-101, -2, 0, 5, 100, 999_999] {
            for parties in 1..=9 {
                let shares = split(amount, parties).unwrap();
                assert_eq!(shares.len(), parties);
                assert_eq!(
                    shares.iter().sum::<Amount>(),
                    amount,
                    "Sum invariant failed for amount={amount}, parties={parties}"
                );
            }
        }
    }

    #[test]
    fn test_allocate_by_ratios() {
        assert_eq!(allocate(100, &[50, 50]).unwrap(), vec![50, 50]);
        assert_eq!(allocate(100, &[30, 30, 30]).unwrap(), vec![34, 33, 33]);
        assert_eq!(allocate(200, &[25, 25, 50]).unwrap(), vec![50, 50, 100]);
        assert_eq!(allocate(5, &[50, 25, 25]).unwrap(), vec![3, 1, 1]);
    }

    #[test]
    fn test_allocate_zero_ratios_receive_nothing() {
        // A zero ratio yields a zero raw share; leftover only tops up parties
        // when some ratio is positive.
        assert_eq!(allocate(10, &[0, 100]).unwrap(), vec![0, 10]);
        assert_eq!(allocate(0, &[50, 10]).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_allocate_all_zero_ratio_sum() {
        assert_eq!(allocate(10, &[0, 0]).unwrap(), vec![0, 0]);
        assert_eq!(allocate(0, &[0, 0, 0, 0]).unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_allocate_empty_ratios() {
        assert_eq!(allocate(100, &[]), Err(MoneyError::NoRatios));
    }

    #[test]
    fn test_allocate_negative_ratio() {
        assert_eq!(
            allocate(100, &[50, -1]),
            Err(MoneyError::NegativeRatio(-1))
        );
    }

    #[test]
    fn test_allocate_negative_amount() {
        let shares = allocate(-100, &[30, 30, 30]).unwrap();
        assert_eq!(shares, vec![-34, -33, -33]);
        assert_eq!(shares.iter().sum::<Amount>(), -100);
    }

    #[test]
    fn test_allocate_conserves_amount() {
        let cases: &[(Amount, &[i64])] = &[
            (100, &[1, 2, 3]),
            (101, &[7, 11, 13]),
            (-101, &[7, 11, 13]),
            (1, &[3, 3, 3]),
            (999_999, &[1, 1_000_000]),
        ];
        for &(amount, ratios) in cases {
            let shares = allocate(amount, ratios).unwrap();
            assert_eq!(
                shares.iter().sum::<Amount>(),
                amount,
                "Sum invariant failed for amount={amount}, ratios={ratios:?}"
            );
        }
    }
}
