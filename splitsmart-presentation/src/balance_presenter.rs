use crate::{
    money_format::{format_money, format_signed_money},
    text_table::{Alignment, TextTableBuilder},
};
use splitsmart_domain::{Balance, Currency};
use splitsmart_i18n as i18n;
use std::borrow::Cow;

pub struct BalancePresenter;

impl BalancePresenter {
    pub fn render(balances: &[Balance], currency: Currency) -> String {
        let mut builder = TextTableBuilder::new()
            .column(i18n::MEMBER, Alignment::Left)
            .column(i18n::PAID, Alignment::Right)
            .column(i18n::OWES, Alignment::Right)
            .column(i18n::NET, Alignment::Right);

        for balance in balances {
            builder = builder.row([
                Cow::Borrowed(balance.member.name()),
                Cow::Owned(format_money(balance.paid, currency)),
                Cow::Owned(format_money(balance.owes, currency)),
                Cow::Owned(format_signed_money(balance.net(), currency)),
            ]);
        }

        format!("{}\n{}", i18n::BALANCES, builder.build())
    }
}
