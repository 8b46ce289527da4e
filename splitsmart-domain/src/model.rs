use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MemberNameError {
    #[error("member name must not be empty")]
    Empty,
}

/// A group member, identified by display name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Member(String);

impl Member {
    pub fn new(name: impl AsRef<str>) -> Result<Self, MemberNameError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(MemberNameError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Member {
    type Err = MemberNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds half away from zero to `scale` decimal places.
    pub fn round_to(self, scale: u32) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Utilities,
    Rent,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Shopping,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Utilities,
        ExpenseCategory::Rent,
        ExpenseCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Transport => "Transport",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownVariant {
                kind: "expense category",
                value: needle.to_owned(),
            })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecurringInterval {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurringInterval {
    pub fn as_str(self) -> &'static str {
        match self {
            RecurringInterval::Daily => "daily",
            RecurringInterval::Weekly => "weekly",
            RecurringInterval::Monthly => "monthly",
            RecurringInterval::Yearly => "yearly",
        }
    }
}

impl FromStr for RecurringInterval {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(RecurringInterval::Daily),
            "weekly" => Ok(RecurringInterval::Weekly),
            "monthly" => Ok(RecurringInterval::Monthly),
            "yearly" => Ok(RecurringInterval::Yearly),
            _ => Err(UnknownVariant {
                kind: "recurring interval",
                value: s.trim().to_owned(),
            }),
        }
    }
}

/// A single logged expense.
///
/// `participants` is ordered: when an amount does not divide evenly, the
/// leftover smallest units go to the earliest participants.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub title: String,
    pub amount: Money,
    pub payer: Member,
    pub participants: Vec<Member>,
    pub category: ExpenseCategory,
    pub date: NaiveDate,
    pub note: Option<String>,
    pub recurring: Option<RecurringInterval>,
}

impl Expense {
    pub fn new(amount: Money, payer: Member, participants: Vec<Member>) -> Self {
        Self {
            title: String::new(),
            amount,
            payer,
            participants,
            category: ExpenseCategory::default(),
            date: NaiveDate::default(),
            note: None,
            recurring: None,
        }
    }

    /// Builds an expense where the first split member is the payer.
    pub fn from_split_members(amount: Money, split_members: Vec<Member>) -> Option<Self> {
        let payer = split_members.first()?.clone();
        Some(Self::new(amount, payer, split_members))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_category(mut self, category: ExpenseCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_recurring(mut self, interval: RecurringInterval) -> Self {
        self.recurring = Some(interval);
        self
    }
}

/// Per-member totals derived from a group's expenses.
///
/// `owes` only counts shares of expenses somebody else paid for; a payer's
/// own share is tracked separately in `self_share`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Balance {
    pub member: Member,
    pub paid: Money,
    pub owes: Money,
    pub self_share: Money,
}

impl Balance {
    pub fn new(member: Member) -> Self {
        Self {
            member,
            paid: Money::ZERO,
            owes: Money::ZERO,
            self_share: Money::ZERO,
        }
    }

    pub fn net(&self) -> Money {
        self.paid - self.owes - self.self_share
    }

    /// [`Balance::net`] without the overflow panic.
    pub fn checked_net(&self) -> Option<Money> {
        self.paid.checked_sub(self.owes)?.checked_sub(self.self_share)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub from: Member,
    pub to: Member,
    pub amount: Money,
}
