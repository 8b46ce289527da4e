use proptest::prelude::*;
use splitsmart_domain::{
    Balance, Currency, Expense, Member, Money, compute_balances, compute_settlements,
};

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn member(idx: usize) -> Member {
    Member::new(NAMES[idx]).expect("valid member")
}

fn build_expenses(
    member_count: usize,
    amounts: &[i64],
    payer_indexes: &[usize],
    participant_masks: &[u8],
) -> Vec<Expense> {
    amounts
        .iter()
        .enumerate()
        .map(|(idx, &cents)| {
            let payer = member(payer_indexes.get(idx).copied().unwrap_or(0) % member_count);
            let mask = participant_masks.get(idx).copied().unwrap_or(1);
            let participants: Vec<Member> = (0..member_count)
                .filter(|bit| mask & (1 << bit) != 0)
                .map(member)
                .collect();
            Expense::new(Money::new(cents, 2), payer, participants)
        })
        .collect()
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(1i64..=100_000, 0..=30),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=30),
        participant_masks in prop::collection::vec(0u8..=63, 0..=30),
    ) {
        let members: Vec<Member> = (0..member_count).map(member).collect();
        let expenses = build_expenses(member_count, &amounts, &payer_indexes, &participant_masks);

        let balances = compute_balances(&members, &expenses, Currency::USD);

        prop_assert_eq!(balances.len(), member_count);
        let total: Money = balances.iter().map(Balance::net).sum();
        prop_assert_eq!(total, Money::ZERO);
    }

    #[test]
    fn aggregation_is_idempotent(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(1i64..=100_000, 0..=20),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=20),
        participant_masks in prop::collection::vec(0u8..=63, 0..=20),
    ) {
        let members: Vec<Member> = (0..member_count).map(member).collect();
        let expenses = build_expenses(member_count, &amounts, &payer_indexes, &participant_masks);
        let snapshot = expenses.clone();

        let first = compute_balances(&members, &expenses, Currency::USD);
        let second = compute_balances(&members, &expenses, Currency::USD);

        prop_assert_eq!(first, second);
        prop_assert_eq!(expenses, snapshot);
    }

    #[test]
    fn settlements_zero_every_balance(
        member_count in 1usize..=6,
        amounts in prop::collection::vec(1i64..=100_000, 0..=30),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=30),
        participant_masks in prop::collection::vec(0u8..=63, 0..=30),
    ) {
        let members: Vec<Member> = (0..member_count).map(member).collect();
        let expenses = build_expenses(member_count, &amounts, &payer_indexes, &participant_masks);
        let balances = compute_balances(&members, &expenses, Currency::USD);

        let settlements = compute_settlements(&balances, Currency::USD);

        let mut remaining: Vec<Money> = balances.iter().map(Balance::net).collect();
        for settlement in &settlements {
            prop_assert!(settlement.amount.is_positive());
            prop_assert_ne!(&settlement.from, &settlement.to);

            let from = members.iter().position(|m| *m == settlement.from).expect("known payer");
            let to = members.iter().position(|m| *m == settlement.to).expect("known payee");
            prop_assert!(remaining[from].is_negative());
            prop_assert!(remaining[to].is_positive());
            prop_assert!(settlement.amount <= remaining[from].abs());
            prop_assert!(settlement.amount <= remaining[to]);

            remaining[from] += settlement.amount;
            remaining[to] -= settlement.amount;
        }
        for net in remaining {
            prop_assert_eq!(net, Money::ZERO);
        }
        prop_assert!(settlements.len() < member_count.max(1));
    }
}
