use splitsmart_domain::{Balance, Currency, Expense, Group, Settlement, SpendingReport};

/// A consistent, fully materialised view of one group.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupSnapshot {
    pub group: Group,
    pub expenses: Vec<Expense>,
    pub currency: Currency,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSummary {
    pub group_name: String,
    pub currency: Currency,
    pub balances: Vec<Balance>,
    pub settlements: Vec<Settlement>,
    pub report: SpendingReport,
}
