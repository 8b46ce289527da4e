use crate::{
    money_format::{format_money, format_percent},
    text_table::{Alignment, TextTableBuilder},
};
use splitsmart_domain::{Currency, SpendingReport};
use splitsmart_i18n as i18n;
use std::{borrow::Cow, fmt::Write};

pub struct ReportPresenter;

impl ReportPresenter {
    pub fn render(report: &SpendingReport, currency: Currency) -> String {
        let mut out = String::with_capacity(512);
        let _ = writeln!(out, "{}", i18n::SPENDING_REPORT);
        let _ = writeln!(
            out,
            "{}: {}",
            i18n::TOTAL_SPENDING,
            format_money(report.total, currency)
        );
        let _ = writeln!(
            out,
            "{}: {}",
            i18n::AVERAGE_EXPENSE,
            format_money(report.average, currency)
        );
        if report.months.len() >= 2 {
            let _ = writeln!(
                out,
                "{}: {}",
                i18n::SPENDING_TREND,
                format_percent(report.spending_trend())
            );
        }

        if !report.categories.is_empty() {
            let table = TextTableBuilder::new()
                .column(i18n::CATEGORY, Alignment::Left)
                .column(i18n::AMOUNT, Alignment::Right)
                .column(i18n::SHARE, Alignment::Right)
                .rows(report.categories.iter().map(|spending| {
                    [
                        Cow::Borrowed(spending.category.label()),
                        Cow::Owned(format_money(spending.amount, currency)),
                        Cow::Owned(format_percent(spending.share)),
                    ]
                }))
                .build();
            out.push('\n');
            out.push_str(&table);
        }

        if !report.months.is_empty() {
            let table = TextTableBuilder::new()
                .column(i18n::MONTH, Alignment::Left)
                .column(i18n::AMOUNT, Alignment::Right)
                .column(i18n::COUNT, Alignment::Right)
                .rows(report.months.iter().map(|spending| {
                    [
                        Cow::Owned(spending.month.format("%Y-%m").to_string()),
                        Cow::Owned(format_money(spending.amount, currency)),
                        Cow::Owned(spending.count.to_string()),
                    ]
                }))
                .build();
            out.push('\n');
            out.push_str(&table);
        }

        out
    }
}
