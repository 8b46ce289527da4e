use rust_decimal::{Decimal, RoundingStrategy};
use splitsmart_domain::{Currency, Money};

/// Formats an amount as `-$1,234.50`, rounded to the currency unit.
pub fn format_money(amount: Money, currency: Currency) -> String {
    let rounded = currency.quantize(amount);
    let sign = if rounded.is_negative() { "-" } else { "" };
    format!(
        "{sign}{}{}",
        currency.symbol(),
        group_digits(rounded.abs().as_decimal(), currency.scale())
    )
}

/// Like [`format_money`] but always shows the sign of non-zero amounts.
pub fn format_signed_money(amount: Money, currency: Currency) -> String {
    if currency.quantize(amount).is_positive() {
        format!("+{}", format_money(amount, currency))
    } else {
        format_money(amount, currency)
    }
}

/// Formats a `0..=1` fraction as a percentage with one decimal place.
pub fn format_percent(fraction: Decimal) -> String {
    let percent = (fraction * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{percent:.1}%")
}

fn group_digits(value: Decimal, scale: u32) -> String {
    let text = format!("{:.*}", scale as usize, value);
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    for (idx, digit) in integer.chars().enumerate() {
        if idx > 0 && (integer.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::cents(dec!(10), Currency::USD, "$10.00")]
    #[case::thousands(dec!(1234.5), Currency::USD, "$1,234.50")]
    #[case::millions(dec!(-1234567.891), Currency::EUR, "-€1,234,567.89")]
    #[case::yen(dec!(148450), Currency::JPY, "¥148,450")]
    #[case::yen_rounding(dec!(99.5), Currency::JPY, "¥100")]
    #[case::canadian(dec!(0.004), Currency::CAD, "C$0.00")]
    fn formats_money(#[case] amount: Decimal, #[case] currency: Currency, #[case] expected: &str) {
        assert_eq!(format_money(Money::from_decimal(amount), currency), expected);
    }

    #[rstest]
    #[case::positive(dec!(20), "+$20.00")]
    #[case::negative(dec!(-10), "-$10.00")]
    #[case::zero(dec!(0), "$0.00")]
    #[case::negative_dust(dec!(-0.001), "$0.00")]
    fn formats_signed_money(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(
            format_signed_money(Money::from_decimal(amount), Currency::USD),
            expected
        );
    }

    #[test]
    fn formats_percent() {
        assert_eq!(format_percent(dec!(0.5206)), "52.1%");
        assert_eq!(format_percent(Decimal::ONE), "100.0%");
    }
}
