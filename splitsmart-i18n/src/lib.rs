#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBER: &str = "メンバー";
    pub const PAID: &str = "支払額";
    pub const OWES: &str = "負担額";
    pub const NET: &str = "収支";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const CATEGORY: &str = "カテゴリ";
    pub const SHARE: &str = "割合";
    pub const MONTH: &str = "月";
    pub const COUNT: &str = "件数";
    pub const BALANCES: &str = "収支一覧";
    pub const SUGGESTED_SETTLEMENTS: &str = "精算案";
    pub const SETTLEMENTS_FOOTER: &str = "グループの収支を精算する最も効率的な方法です。";
    pub const NO_SETTLEMENTS_NEEDED: &str = "精算は必要ありません！";
    pub const SPENDING_REPORT: &str = "支出レポート";
    pub const TOTAL_SPENDING: &str = "支出合計";
    pub const AVERAGE_EXPENSE: &str = "平均支出";
    pub const SPENDING_TREND: &str = "前月比";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const PAID: &str = "Paid";
    pub const OWES: &str = "Owes";
    pub const NET: &str = "Net";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const CATEGORY: &str = "Category";
    pub const SHARE: &str = "Share";
    pub const MONTH: &str = "Month";
    pub const COUNT: &str = "Count";
    pub const BALANCES: &str = "Balances";
    pub const SUGGESTED_SETTLEMENTS: &str = "Suggested Settlements";
    pub const SETTLEMENTS_FOOTER: &str =
        "These are the most efficient ways to settle the group's balances.";
    pub const NO_SETTLEMENTS_NEEDED: &str = "No settlements needed!";
    pub const SPENDING_REPORT: &str = "Spending Report";
    pub const TOTAL_SPENDING: &str = "Total spending";
    pub const AVERAGE_EXPENSE: &str = "Average expense";
    pub const SPENDING_TREND: &str = "Trend vs. previous month";
}

pub use strings::*;

#[cfg(feature = "ja")]
pub fn group_not_found(name: impl std::fmt::Display) -> String {
    format!("グループ '{name}' が見つかりません")
}

#[cfg(not(feature = "ja"))]
pub fn group_not_found(name: impl std::fmt::Display) -> String {
    format!("Group '{name}' was not found")
}

#[cfg(feature = "ja")]
pub fn group_heading(name: impl std::fmt::Display, member_count: usize) -> String {
    format!("{name}（{member_count}人）")
}

#[cfg(not(feature = "ja"))]
pub fn group_heading(name: impl std::fmt::Display, member_count: usize) -> String {
    format!("{name} ({member_count} members)")
}
