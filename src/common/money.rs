use bigdecimal::*;
use std::fmt;
use std::ops::{Add, AddAssign};

/// Number of decimal places every `Money` value carries.
pub const CENT_SCALE: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
/// A monetary value rounded to whole cents.
///
/// `Money` only ever holds values with exactly two decimal places; anything with
/// more precision goes through [`Money::round_half_up`] first. The inner value is
/// an arbitrary precision decimal, so sums never overflow or pick up binary
/// floating-point error.
///
/// # Examples
/// ```
/// use expense_splitter::common::money::Money;
///
/// let third: bigdecimal::BigDecimal = "33.335".parse().unwrap();
/// assert_eq!(Money::round_half_up(&third).to_string_2dp(), "33.34");
/// ```
pub struct Money(BigDecimal);

impl Money {
    pub fn zero() -> Self {
        Money(BigDecimal::zero().with_scale(CENT_SCALE))
    }

    #[cfg(test)]
    pub fn from_cents(cents: i64) -> Self {
        Money((BigDecimal::from(cents) / BigDecimal::from(100)).with_scale(CENT_SCALE))
    }

    /// Rounds to cents, ties going away from zero.
    pub fn round_half_up(value: &BigDecimal) -> Self {
        Money(value.with_scale_round(CENT_SCALE, RoundingMode::HalfUp))
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn to_string_2dp(&self) -> String {
        let (digits, _) = self.0.with_scale(CENT_SCALE).as_bigint_and_exponent();
        let digits = digits.to_string();
        let (sign, digits) = match digits.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", digits.as_str()),
        };
        let padded = format!("{digits:0>3}");
        let (units, cents) = padded.split_at(padded.len() - 2);
        format!("{sign}{units}.{cents}")
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Parses decimal text, rounding half-up to cents: `"1.999"` becomes `2.00`.
/// Text with more than two decimals is accepted, not rejected.
impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;
        Ok(Money::round_half_up(&bd))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
