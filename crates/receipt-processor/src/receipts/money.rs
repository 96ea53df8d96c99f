//! Exact currency amounts.
//!
//! Receipt totals and prices arrive as strings like `"12.25"`. The whole part
//! is kept as its digit string and the fractional part as a cent count, so
//! checks such as "multiple of 0.25" never depend on binary floating point
//! and no submitted amount is too large to inspect.

use std::fmt;
use std::str::FromStr;

const CENTS_PER_UNIT: u128 = 100;

/// A non-negative monetary value with exactly two fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    /// Decimal digits without leading zeros; `"0"` for amounts under one unit.
    whole: String,
    fraction: u8,
}

impl Money {
    pub fn from_cents(cents: u64) -> Self {
        let cents = u128::from(cents);
        Money {
            whole: (cents / CENTS_PER_UNIT).to_string(),
            fraction: (cents % CENTS_PER_UNIT) as u8,
        }
    }

    /// Total cent count, or `None` when it does not fit in a `u128`.
    pub fn cents(&self) -> Option<u128> {
        self.whole
            .parse::<u128>()
            .ok()?
            .checked_mul(CENTS_PER_UNIT)?
            .checked_add(u128::from(self.fraction))
    }

    #[inline]
    pub const fn fraction_cents(&self) -> u8 {
        self.fraction
    }

    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.fraction == 0
    }

    /// Whether the amount divides evenly into steps of `step_cents`.
    ///
    /// A zero step never divides anything.
    pub fn is_multiple_of(&self, step_cents: u64) -> bool {
        if step_cents == 0 {
            return false;
        }
        let step = u128::from(step_cents);
        let whole_rem = self
            .whole
            .bytes()
            .fold(0u128, |rem, digit| (rem * 10 + u128::from(digit - b'0')) % step);
        (whole_rem * CENTS_PER_UNIT + u128::from(self.fraction)) % step == 0
    }

    /// `ceil(amount * percent / 100)` in whole currency units, saturating at
    /// `u64::MAX`.
    ///
    /// For `12.25` at 20 percent this is `ceil(2.45) = 3`.
    pub fn percent_ceil(&self, percent: u32) -> u64 {
        if percent == 0 {
            return 0;
        }
        let divisor = CENTS_PER_UNIT * 100;
        let Some(scaled) = self
            .cents()
            .and_then(|cents| cents.checked_mul(u128::from(percent)))
        else {
            return u64::MAX;
        };
        u64::try_from(scaled.div_ceil(divisor)).unwrap_or(u64::MAX)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.whole, self.fraction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("amount '{0}' must look like <digits>.<two digits>")]
pub struct MoneyParseError(pub String);

impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let format_error = || MoneyParseError(raw.to_string());

        let (whole, fraction) = raw.split_once('.').ok_or_else(format_error)?;
        let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) || fraction.len() != 2 {
            return Err(format_error());
        }

        let fraction = fraction.parse().map_err(|_| format_error())?;
        let whole = match whole.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        Ok(Money {
            whole: whole.to_string(),
            fraction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HUGE: &str = "100000000000000000000000000000000000000000.75";

    #[test]
    fn parses_two_decimal_amounts_into_cents() {
        assert_eq!("35.35".parse::<Money>(), Ok(Money::from_cents(3535)));
        assert_eq!("0.00".parse::<Money>(), Ok(Money::from_cents(0)));
        assert_eq!("012.05".parse::<Money>(), Ok(Money::from_cents(1205)));
        assert_eq!("000.40".parse::<Money>().map(|m| m.cents()), Ok(Some(40)));
    }

    #[test]
    fn rejects_amounts_without_exactly_two_decimals() {
        for raw in ["12", "12.5", "12.345", ".25", "12.", "-1.00", "1,00", "1.0a", " 1.00", ""] {
            assert_eq!(
                raw.parse::<Money>(),
                Err(MoneyParseError(raw.to_string())),
                "expected format error for {raw:?}"
            );
        }
    }

    #[test]
    fn accepts_amounts_beyond_machine_integers() {
        let money: Money = HUGE.parse().expect("huge amount parses");
        assert_eq!(money.cents(), None);
        assert_eq!(money.fraction_cents(), 75);
        assert_eq!(money.to_string(), HUGE);
        assert!(money.is_multiple_of(25));
        assert!(!money.is_multiple_of(7));
        assert!(!money.is_whole_dollars());
        assert_eq!(money.percent_ceil(20), u64::MAX);
        assert_eq!(money.percent_ceil(0), 0);
    }

    #[test]
    fn quarter_checks_use_exact_cents() {
        assert!(Money::from_cents(1275).is_multiple_of(25));
        assert!(Money::from_cents(0).is_multiple_of(25));
        assert!(!Money::from_cents(1210).is_multiple_of(25));
        assert!(!Money::from_cents(1275).is_multiple_of(0));
        assert!(Money::from_cents(1200).is_whole_dollars());
        assert!(!Money::from_cents(1201).is_whole_dollars());
    }

    #[test]
    fn multiple_checks_carry_the_whole_part_for_odd_steps() {
        // 1.05 = 105 cents = 3 * 35
        assert!(Money::from_cents(105).is_multiple_of(35));
        assert!(!Money::from_cents(100).is_multiple_of(35));
        assert!(Money::from_cents(300).is_multiple_of(300));
    }

    #[test]
    fn percent_ceil_rounds_up_partial_units() {
        assert_eq!(Money::from_cents(1225).percent_ceil(20), 3);
        assert_eq!(Money::from_cents(1200).percent_ceil(20), 3);
        assert_eq!(Money::from_cents(1000).percent_ceil(20), 2);
        assert_eq!(Money::from_cents(225).percent_ceil(20), 1);
        assert_eq!(Money::from_cents(0).percent_ceil(20), 0);
        assert_eq!(Money::from_cents(1).percent_ceil(20), 1);
    }

    #[test]
    fn percent_ceil_stays_exact_past_i64_cents() {
        let money: Money = "100000000000000000.00".parse().expect("amount parses");
        assert_eq!(money.percent_ceil(20), 20_000_000_000_000_000);
    }

    #[test]
    fn displays_as_decimal_string() {
        assert_eq!(Money::from_cents(3535).to_string(), "35.35");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }
}
