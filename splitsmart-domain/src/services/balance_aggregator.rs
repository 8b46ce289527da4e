use crate::{
    currency::Currency,
    model::{Balance, Expense, Member},
    services::split_evenly,
};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Reduces a group's expenses into one balance per declared member.
pub struct BalanceAggregator {
    currency: Currency,
}

impl BalanceAggregator {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Compute balances for `members`, in declaration order.
    ///
    /// Participants missing from `members` still count towards the share
    /// denominator but get no balance entry. Expenses with no participants, a
    /// non-positive amount, or an amount too large to count in smallest units
    /// are skipped.
    pub fn aggregate(&self, members: &[Member], expenses: &[Expense]) -> Vec<Balance> {
        let mut ledger: IndexMap<&str, Balance, FxBuildHasher> =
            IndexMap::with_capacity_and_hasher(members.len(), FxBuildHasher::default());
        for member in members {
            ledger
                .entry(member.name())
                .or_insert_with(|| Balance::new(member.clone()));
        }

        let mut skipped = 0usize;
        for (index, expense) in expenses.iter().enumerate() {
            if expense.participants.is_empty() {
                tracing::warn!(
                    expense_index = index,
                    title = %expense.title,
                    payer = %expense.payer,
                    "Skipping expense without participants"
                );
                skipped += 1;
                continue;
            }

            let amount = self.currency.quantize(expense.amount);
            if !amount.is_positive() {
                tracing::warn!(
                    expense_index = index,
                    title = %expense.title,
                    amount = %expense.amount,
                    "Skipping expense with non-positive amount"
                );
                skipped += 1;
                continue;
            }

            let Some(shares) = split_evenly(amount, expense.participants.len(), self.currency)
            else {
                tracing::warn!(
                    expense_index = index,
                    title = %expense.title,
                    amount = %expense.amount,
                    "Skipping expense with an amount outside the representable range"
                );
                skipped += 1;
                continue;
            };

            // Each share fits in i64 smallest units, so running totals stay
            // far inside Decimal's range.
            if let Some(payer) = ledger.get_mut(expense.payer.name()) {
                payer.paid += amount;
            }
            for (participant, share) in expense.participants.iter().zip(shares) {
                let Some(balance) = ledger.get_mut(participant.name()) else {
                    continue;
                };
                if *participant == expense.payer {
                    balance.self_share += share;
                } else {
                    balance.owes += share;
                }
            }
        }

        tracing::debug!(
            member_count = ledger.len(),
            expense_count = expenses.len(),
            skipped_expenses = skipped,
            currency = %self.currency,
            "Balances aggregated"
        );

        ledger.into_values().collect()
    }
}

pub fn compute_balances(
    members: &[Member],
    expenses: &[Expense],
    currency: Currency,
) -> Vec<Balance> {
    BalanceAggregator::new(currency).aggregate(members, expenses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Money;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn m(name: &str) -> Member {
        Member::new(name).expect("valid member")
    }

    fn members(names: &[&str]) -> Vec<Member> {
        names.iter().copied().map(m).collect()
    }

    fn expense(amount: Money, payer: &str, participants: &[&str]) -> Expense {
        Expense::new(amount, m(payer), members(participants))
    }

    fn summary(balances: &[Balance]) -> Vec<(&str, Money, Money, Money)> {
        balances
            .iter()
            .map(|b| (b.member.name(), b.paid, b.owes, b.net()))
            .collect()
    }

    #[fixture]
    fn aggregator() -> BalanceAggregator {
        BalanceAggregator::new(Currency::USD)
    }

    #[rstest]
    fn equal_split_between_three(aggregator: BalanceAggregator) {
        let balances = aggregator.aggregate(
            &members(&["A", "B", "C"]),
            &[expense(Money::from_i64(30), "A", &["A", "B", "C"])],
        );

        assert_eq!(
            summary(&balances),
            vec![
                ("A", Money::from_i64(30), Money::ZERO, Money::from_i64(20)),
                ("B", Money::ZERO, Money::from_i64(10), Money::from_i64(-10)),
                ("C", Money::ZERO, Money::from_i64(10), Money::from_i64(-10)),
            ]
        );
        assert_eq!(balances[0].self_share, Money::from_i64(10));
    }

    #[rstest]
    fn payer_only_expense_is_self_funded(aggregator: BalanceAggregator) {
        let balances = aggregator.aggregate(
            &members(&["A", "B"]),
            &[expense(Money::from_i64(42), "A", &["A"])],
        );

        assert_eq!(balances[0].paid, Money::from_i64(42));
        assert_eq!(balances[0].owes, Money::ZERO);
        assert_eq!(balances[0].net(), Money::ZERO);
        assert_eq!(balances[1], Balance::new(m("B")));
    }

    #[rstest]
    fn payer_outside_participants_fronts_everything(aggregator: BalanceAggregator) {
        let balances = aggregator.aggregate(
            &members(&["A", "B", "C"]),
            &[expense(Money::from_i64(20), "A", &["B", "C"])],
        );

        assert_eq!(
            summary(&balances),
            vec![
                ("A", Money::from_i64(20), Money::ZERO, Money::from_i64(20)),
                ("B", Money::ZERO, Money::from_i64(10), Money::from_i64(-10)),
                ("C", Money::ZERO, Money::from_i64(10), Money::from_i64(-10)),
            ]
        );
    }

    #[rstest]
    fn undeclared_participant_still_counts_in_split(aggregator: BalanceAggregator) {
        let balances = aggregator.aggregate(
            &members(&["A", "B"]),
            &[expense(Money::from_i64(30), "A", &["A", "B", "Zed"])],
        );

        assert_eq!(balances.len(), 2);
        assert_eq!(balances[1].owes, Money::from_i64(10));
        assert_eq!(balances[0].net(), Money::from_i64(20));
    }

    #[rstest]
    #[case::no_participants(expense(Money::from_i64(30), "A", &[]))]
    #[case::zero_amount(expense(Money::ZERO, "A", &["A", "B"]))]
    #[case::negative_amount(expense(Money::from_i64(-5), "A", &["A", "B"]))]
    #[case::rounds_to_zero(expense(Money::new(4, 3), "A", &["A", "B"]))]
    fn anomalous_expenses_are_skipped(aggregator: BalanceAggregator, #[case] anomalous: Expense) {
        let declared = members(&["A", "B"]);
        let balances = aggregator.aggregate(&declared, &[anomalous]);
        let expected: Vec<Balance> = declared.into_iter().map(Balance::new).collect();
        assert_eq!(balances, expected);
    }

    #[rstest]
    fn rounding_keeps_totals_exact(aggregator: BalanceAggregator) {
        let balances = aggregator.aggregate(
            &members(&["A", "B", "C"]),
            &[expense(Money::from_decimal(dec!(10.00)), "A", &["A", "B", "C"])],
        );

        let shares: Money = balances.iter().map(|b| b.owes + b.self_share).sum();
        assert_eq!(shares, Money::from_decimal(dec!(10.00)));
        assert_eq!(balances[0].self_share, Money::from_decimal(dec!(3.34)));
        assert_eq!(balances[1].owes, Money::from_decimal(dec!(3.33)));
        assert_eq!(balances[2].owes, Money::from_decimal(dec!(3.33)));
        let total_net: Money = balances.iter().map(Balance::net).sum();
        assert_eq!(total_net, Money::ZERO);
    }

    #[rstest]
    fn duplicate_declared_members_collapse(aggregator: BalanceAggregator) {
        let balances = aggregator.aggregate(&members(&["A", "B", "A"]), &[]);
        let names: Vec<&str> = balances.iter().map(|b| b.member.name()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    fn huge(mantissa: i128) -> Money {
        Money::from_decimal(Decimal::from_i128_with_scale(mantissa, 0))
    }

    #[rstest]
    fn unrepresentable_amount_is_skipped(aggregator: BalanceAggregator) {
        let balances = aggregator.aggregate(
            &members(&["A", "B"]),
            &[
                expense(huge(10_i128.pow(27)), "A", &["A", "B"]),
                expense(Money::from_i64(10), "B", &["A", "B"]),
            ],
        );

        assert_eq!(
            summary(&balances),
            vec![
                ("A", Money::ZERO, Money::from_i64(5), Money::from_i64(-5)),
                ("B", Money::from_i64(10), Money::ZERO, Money::from_i64(5)),
            ]
        );
    }

    #[test]
    fn amounts_beyond_the_unit_range_never_reach_the_totals() {
        let declared = members(&["A", "B"]);
        let expenses = [
            expense(huge(5 * 10_i128.pow(28)), "A", &["A", "B"]),
            expense(huge(5 * 10_i128.pow(28)), "B", &["A", "B"]),
        ];

        let balances = compute_balances(&declared, &expenses, Currency::JPY);

        let expected: Vec<Balance> = declared.into_iter().map(Balance::new).collect();
        assert_eq!(balances, expected);
    }

    #[test]
    fn empty_inputs_produce_empty_output() {
        assert!(compute_balances(&[], &[], Currency::USD).is_empty());
    }

    #[test]
    fn legacy_split_members_use_first_as_payer() {
        let expense = Expense::from_split_members(Money::from_i64(30), members(&["B", "A", "C"]))
            .expect("non-empty split members");
        let balances = compute_balances(&members(&["A", "B", "C"]), &[expense], Currency::USD);
        assert_eq!(balances[1].paid, Money::from_i64(30));
        assert_eq!(balances[1].net(), Money::from_i64(20));
        assert!(Expense::from_split_members(Money::from_i64(30), Vec::new()).is_none());
    }
}
