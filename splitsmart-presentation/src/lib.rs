#![warn(clippy::uninlined_format_args)]

pub mod balance_presenter;
pub mod money_format;
pub mod report_presenter;
pub mod settlement_presenter;
pub mod summary_presenter;
pub mod text_table;

pub use balance_presenter::BalancePresenter;
pub use money_format::{format_money, format_percent, format_signed_money};
pub use report_presenter::ReportPresenter;
pub use settlement_presenter::SettlementPresenter;
pub use summary_presenter::SummaryPresenter;
