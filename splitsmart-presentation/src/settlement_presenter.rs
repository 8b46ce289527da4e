use crate::{
    money_format::format_money,
    text_table::{Alignment, TextTableBuilder},
};
use splitsmart_domain::{Currency, Settlement};
use splitsmart_i18n as i18n;
use std::borrow::Cow;

pub struct SettlementPresenter;

impl SettlementPresenter {
    pub fn render(settlements: &[Settlement], currency: Currency) -> String {
        if settlements.is_empty() {
            return format!("{}\n{}\n", i18n::SUGGESTED_SETTLEMENTS, i18n::NO_SETTLEMENTS_NEEDED);
        }

        format!(
            "{}\n{}{}\n",
            i18n::SUGGESTED_SETTLEMENTS,
            Self::build_transfer_table(settlements, currency),
            i18n::SETTLEMENTS_FOOTER
        )
    }

    pub fn build_transfer_table(settlements: &[Settlement], currency: Currency) -> String {
        TextTableBuilder::new()
            .column(i18n::FROM, Alignment::Left)
            .column(i18n::TO, Alignment::Left)
            .column(i18n::AMOUNT, Alignment::Right)
            .rows(settlements.iter().map(|settlement| {
                [
                    Cow::Borrowed(settlement.from.name()),
                    Cow::Borrowed(settlement.to.name()),
                    Cow::Owned(format_money(settlement.amount, currency)),
                ]
            }))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitsmart_domain::{Member, Money};

    #[test]
    fn empty_settlements_say_so() {
        let text = SettlementPresenter::render(&[], Currency::USD);
        assert!(text.contains(i18n::NO_SETTLEMENTS_NEEDED));
        assert!(!text.contains(i18n::SETTLEMENTS_FOOTER));
    }

    #[test]
    fn lists_each_transfer() {
        let settlements = [
            Settlement {
                from: Member::new("Bob").expect("valid member"),
                to: Member::new("Alice").expect("valid member"),
                amount: Money::new(1050, 2),
            },
            Settlement {
                from: Member::new("Carol").expect("valid member"),
                to: Member::new("Alice").expect("valid member"),
                amount: Money::new(1, 0),
            },
        ];

        let text = SettlementPresenter::render(&settlements, Currency::GBP);

        let rows: Vec<&str> = text.lines().skip(3).take(2).collect();
        assert_eq!(rows, ["Bob   | Alice | £10.50", "Carol | Alice |  £1.00"]);
        assert!(text.trim_end().ends_with(i18n::SETTLEMENTS_FOOTER));
    }
}
