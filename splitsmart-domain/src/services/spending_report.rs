use crate::{
    currency::Currency,
    model::{Expense, ExpenseCategory, Money},
};
use chrono::{Datelike, NaiveDate};
use fxhash::FxHashMap;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySpending {
    pub category: ExpenseCategory,
    pub amount: Money,
    /// Fraction of total spending, in `0..=1`.
    pub share: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthlySpending {
    /// First day of the month.
    pub month: NaiveDate,
    pub amount: Money,
    pub count: usize,
}

/// Aggregate spending figures over a list of expenses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpendingReport {
    pub total: Money,
    pub average: Money,
    pub expense_count: usize,
    /// Sorted by amount, largest first.
    pub categories: Vec<CategorySpending>,
    /// Sorted by month, oldest first.
    pub months: Vec<MonthlySpending>,
}

impl SpendingReport {
    /// Only expenses whose amount rounds to a positive number of smallest
    /// currency units that fits in an `i64` are counted, the same ones the
    /// balance aggregator accepts.
    pub fn from_expenses(expenses: &[Expense], currency: Currency) -> Self {
        let counted: Vec<&Expense> = expenses
            .iter()
            .filter(|e| {
                currency.quantize(e.amount).is_positive()
                    && currency.to_atomic_units(e.amount).is_some()
            })
            .collect();
        if counted.len() < expenses.len() {
            tracing::debug!(
                ignored = expenses.len() - counted.len(),
                "Ignoring non-positive or out-of-range expenses in spending report"
            );
        }

        let total: Money = counted.iter().map(|e| e.amount).sum();
        let average = if counted.is_empty() {
            Money::ZERO
        } else {
            currency.quantize(Money::from_decimal(
                total.as_decimal() / Decimal::from(counted.len()),
            ))
        };

        let mut by_category: FxHashMap<ExpenseCategory, Money> = FxHashMap::default();
        let mut by_month: BTreeMap<NaiveDate, (Money, usize)> = BTreeMap::new();
        for expense in &counted {
            *by_category.entry(expense.category).or_insert(Money::ZERO) += expense.amount;
            let entry = by_month
                .entry(start_of_month(expense.date))
                .or_insert((Money::ZERO, 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let mut categories: Vec<CategorySpending> = by_category
            .into_iter()
            .map(|(category, amount)| CategorySpending {
                category,
                amount,
                share: if total.is_positive() {
                    amount.as_decimal() / total.as_decimal()
                } else {
                    Decimal::ZERO
                },
            })
            .collect();
        categories.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.category.cmp(&b.category))
        });

        let months = by_month
            .into_iter()
            .map(|(month, (amount, count))| MonthlySpending {
                month,
                amount,
                count,
            })
            .collect();

        Self {
            total,
            average,
            expense_count: counted.len(),
            categories,
            months,
        }
    }

    pub fn most_expensive_category(&self) -> Option<&CategorySpending> {
        self.categories.first()
    }

    /// Relative change from the second-to-last month to the last one.
    ///
    /// Zero with fewer than two months of data; one when the earlier month
    /// had no spending. Saturates at `Decimal::MAX`.
    pub fn spending_trend(&self) -> Decimal {
        let [.., previous, last] = self.months.as_slice() else {
            return Decimal::ZERO;
        };
        if previous.amount.is_zero() {
            return Decimal::ONE;
        }
        (last.amount - previous.amount)
            .as_decimal()
            .checked_div(previous.amount.as_decimal())
            .unwrap_or(Decimal::MAX)
    }
}

fn start_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
