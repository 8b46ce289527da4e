use crate::{
    error::LedgerError,
    model::{GroupSnapshot, LedgerSummary},
    ports::GroupRepository,
};
use splitsmart_domain::{BalanceAggregator, SettlementPlanner, SpendingReport};

/// Loads group snapshots and derives balances, settlements and reports.
///
/// Nothing derived here is cached or written back; every call recomputes
/// from the snapshot the repository hands out.
#[derive(Clone, Copy)]
pub struct GroupLedger<'a> {
    repository: &'a dyn GroupRepository,
}

impl<'a> GroupLedger<'a> {
    pub fn new(repository: &'a dyn GroupRepository) -> Self {
        Self { repository }
    }

    pub fn group_names(&self) -> Result<Vec<String>, LedgerError> {
        Ok(self.repository.group_names()?)
    }

    pub fn summarize(&self, group_name: &str) -> Result<LedgerSummary, LedgerError> {
        let snapshot = self
            .repository
            .load_group(group_name)?
            .ok_or_else(|| LedgerError::GroupNotFound(group_name.to_owned()))?;

        tracing::info!(
            group = snapshot.group.name(),
            member_count = snapshot.group.members().len(),
            expense_count = snapshot.expenses.len(),
            currency = %snapshot.currency,
            "Summarizing group ledger"
        );

        Ok(Self::summarize_snapshot(&snapshot))
    }

    pub fn summarize_snapshot(snapshot: &GroupSnapshot) -> LedgerSummary {
        let balances = BalanceAggregator::new(snapshot.currency)
            .aggregate(snapshot.group.members(), &snapshot.expenses);
        let settlements = SettlementPlanner::new(snapshot.currency).plan(&balances);
        let report = SpendingReport::from_expenses(&snapshot.expenses, snapshot.currency);

        LedgerSummary {
            group_name: snapshot.group.name().to_owned(),
            currency: snapshot.currency,
            balances,
            settlements,
            report,
        }
    }
}
