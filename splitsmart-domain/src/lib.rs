#![warn(clippy::uninlined_format_args)]

pub mod challenge;
pub mod currency;
pub mod group;
pub mod model;
pub mod services;

pub use challenge::{ChallengeError, ChallengeMilestone, ChallengeStatus, SavingsChallenge};
pub use currency::Currency;
pub use group::{Group, GroupError};
pub use model::{
    Balance, Expense, ExpenseCategory, Member, MemberNameError, Money, RecurringInterval,
    Settlement, UnknownVariant,
};
pub use services::{
    BalanceAggregator, ChallengeProgress, SettlementPlanner, SpendingReport, compute_balances,
    compute_settlements,
};
