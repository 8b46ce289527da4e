pub mod balance_aggregator;
pub mod challenge_progress;
pub mod settlement_planner;
pub mod share_allocation;
pub mod spending_report;

pub use balance_aggregator::{BalanceAggregator, compute_balances};
pub use challenge_progress::{ChallengeProgress, ParticipantProgress};
pub use settlement_planner::{SettlementPlanner, compute_settlements};
pub use share_allocation::split_evenly;
pub use spending_report::{CategorySpending, MonthlySpending, SpendingReport};
