use crate::model::Money;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use std::fmt;

/// A supported currency and the scale of its smallest unit.
///
/// # Example
/// ```
/// use splitsmart_domain::{Currency, Money};
///
/// let usd = Currency::USD;
/// assert_eq!(usd.atomic_unit(), Money::new(1, 2));
/// assert_eq!(usd.quantize(Money::new(10005, 3)), Money::new(1001, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Currency {
    code: &'static str,
    symbol: &'static str,
    scale: u32,
}

impl Currency {
    pub const USD: Self = Self::new("USD", "$", 2);
    pub const EUR: Self = Self::new("EUR", "€", 2);
    pub const GBP: Self = Self::new("GBP", "£", 2);
    pub const JPY: Self = Self::new("JPY", "¥", 0);
    pub const CAD: Self = Self::new("CAD", "C$", 2);

    pub const ALL: [Currency; 5] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::JPY,
        Currency::CAD,
    ];

    const fn new(code: &'static str, symbol: &'static str, scale: u32) -> Self {
        Self {
            code,
            symbol,
            scale,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|currency| currency.code.eq_ignore_ascii_case(code))
    }

    pub fn code(self) -> &'static str {
        self.code
    }

    pub fn symbol(self) -> &'static str {
        self.symbol
    }

    /// Number of decimal places of the smallest unit (2 for USD, 0 for JPY).
    pub fn scale(self) -> u32 {
        self.scale
    }

    pub fn atomic_unit(self) -> Money {
        Money::new(1, self.scale)
    }

    pub fn quantize(self, amount: Money) -> Money {
        amount.round_to(self.scale)
    }

    /// Converts to a whole number of smallest units, rounding first.
    ///
    /// `None` when the amount does not fit in an `i64` of units.
    pub fn to_atomic_units(self, amount: Money) -> Option<i64> {
        let factor = Decimal::from_i128_with_scale(10_i128.checked_pow(self.scale)?, 0);
        self.quantize(amount)
            .as_decimal()
            .checked_mul(factor)?
            .to_i64()
    }

    pub fn from_atomic_units(self, units: i64) -> Money {
        Money::new(units, self.scale)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
