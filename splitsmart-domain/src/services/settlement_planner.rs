use crate::{
    currency::Currency,
    model::{Balance, Member, Money, Settlement},
};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Plans pairwise transfers that bring every balance back to zero.
///
/// Matching is greedy: the largest remaining creditor is always paired with
/// the largest remaining debtor. Ties go to whoever appears first in the
/// input. This keeps the transfer count low but is not a guaranteed minimum.
pub struct SettlementPlanner {
    currency: Currency,
}

struct Party<'a> {
    position: usize,
    member: &'a Member,
    remaining: Money,
}

impl SettlementPlanner {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub fn plan(&self, balances: &[Balance]) -> Vec<Settlement> {
        let unit = self.currency.atomic_unit();

        // Repeated entries for one member are merged so nobody pays themselves.
        let mut nets: IndexMap<&Member, Money, FxBuildHasher> =
            IndexMap::with_capacity_and_hasher(balances.len(), FxBuildHasher::default());
        for balance in balances {
            let net = nets.entry(&balance.member).or_insert(Money::ZERO);
            match balance.checked_net().and_then(|delta| net.checked_add(delta)) {
                Some(merged) => *net = merged,
                None => tracing::warn!(
                    member = %balance.member,
                    "Skipping balance whose net amount overflows"
                ),
            }
        }

        let mut creditors = Vec::new();
        let mut debtors = Vec::new();
        let mut dust = Money::ZERO;
        for (position, (member, net)) in nets.into_iter().enumerate() {
            let party = Party {
                position,
                member,
                remaining: net.abs(),
            };
            if party.remaining < unit {
                dust += net;
            } else if net.is_positive() {
                creditors.push(party);
            } else {
                debtors.push(party);
            }
        }

        let mut settlements = Vec::with_capacity(creditors.len() + debtors.len());
        loop {
            let (Some(ci), Some(di)) = (largest(&creditors), largest(&debtors)) else {
                break;
            };

            let transfer = creditors[ci].remaining.min(debtors[di].remaining);
            if !transfer.is_positive() {
                break;
            }

            settlements.push(Settlement {
                from: debtors[di].member.clone(),
                to: creditors[ci].member.clone(),
                amount: transfer,
            });

            creditors[ci].remaining -= transfer;
            debtors[di].remaining -= transfer;
            if creditors[ci].remaining < unit {
                dust += creditors[ci].remaining;
                creditors.swap_remove(ci);
            }
            if debtors[di].remaining < unit {
                dust -= debtors[di].remaining;
                debtors.swap_remove(di);
            }
        }

        if !creditors.is_empty() || !debtors.is_empty() {
            tracing::warn!(
                creditor_count = creditors.len(),
                debtor_count = debtors.len(),
                "Balances do not sum to zero; leaving remainder unsettled"
            );
        }
        if !dust.is_zero() {
            tracing::debug!(dust = %dust, unit = %unit, "Dropped sub-unit rounding dust");
        }
        tracing::debug!(
            member_count = balances.len(),
            settlement_count = settlements.len(),
            currency = %self.currency,
            "Settlements planned"
        );

        settlements
    }
}

fn largest(parties: &[Party<'_>]) -> Option<usize> {
    parties
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.remaining
                .cmp(&b.remaining)
                .then_with(|| b.position.cmp(&a.position))
        })
        .map(|(idx, _)| idx)
}

pub fn compute_settlements(balances: &[Balance], currency: Currency) -> Vec<Settlement> {
    SettlementPlanner::new(currency).plan(balances)
}
