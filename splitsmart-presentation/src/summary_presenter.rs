use crate::{BalancePresenter, ReportPresenter, SettlementPresenter};
use splitsmart_application::LedgerSummary;
use splitsmart_i18n as i18n;

pub struct SummaryPresenter;

impl SummaryPresenter {
    pub fn render(summary: &LedgerSummary) -> String {
        [
            i18n::group_heading(&summary.group_name, summary.balances.len()),
            BalancePresenter::render(&summary.balances, summary.currency),
            SettlementPresenter::render(&summary.settlements, summary.currency),
            ReportPresenter::render(&summary.report, summary.currency),
        ]
        .join("\n")
    }
}
