#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod group_ledger;
pub mod model;
pub mod ports;

pub use error::{LedgerError, RepositoryError};
pub use group_ledger::GroupLedger;
pub use model::{GroupSnapshot, LedgerSummary};
pub use ports::GroupRepository;
