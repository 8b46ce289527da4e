use crate::{currency::Currency, model::Money};

/// Splits `amount` into `count` shares of whole currency units.
///
/// The amount is quantised to the currency unit first. Leftover units are
/// handed out one at a time starting from the first share, so the shares
/// always sum back to the quantised amount. Returns `None` when the amount
/// has no `i64` representation in smallest units.
///
/// # Example
/// ```
/// use splitsmart_domain::{Currency, Money, services::split_evenly};
///
/// let shares = split_evenly(Money::new(1000, 2), 3, Currency::USD);
/// assert_eq!(
///     shares,
///     Some(vec![Money::new(334, 2), Money::new(333, 2), Money::new(333, 2)])
/// );
/// ```
pub fn split_evenly(amount: Money, count: usize, currency: Currency) -> Option<Vec<Money>> {
    if count == 0 {
        return Some(Vec::new());
    }

    let units = currency.to_atomic_units(amount)?;
    let divisor = i64::try_from(count).ok()?;
    let base = units / divisor;
    // Truncating division: the remainder carries the sign of `units`.
    let remainder = units % divisor;
    let leftover = remainder.unsigned_abs() as usize;

    Some(
        (0..count)
            .map(|idx| {
                let share = if idx < leftover {
                    base + remainder.signum()
                } else {
                    base
                };
                currency.from_atomic_units(share)
            })
            .collect(),
    )
}
