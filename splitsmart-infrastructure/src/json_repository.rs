use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Deserialize;
use splitsmart_application::{GroupRepository, GroupSnapshot, RepositoryError};
use splitsmart_domain::{
    Currency, Expense, ExpenseCategory, Group, GroupError, Member, Money, RecurringInterval,
};
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotLoadError {
    #[error("failed to read snapshot file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode snapshot JSON")]
    Decode(#[from] serde_json::Error),
    #[error("unknown currency '{0}'")]
    UnknownCurrency(String),
    #[error("group '{group}' is invalid")]
    InvalidGroup {
        group: String,
        #[source]
        source: GroupError,
    },
    #[error("duplicate group '{0}'")]
    DuplicateGroup(String),
    #[error("expense #{index} in group '{group}' is invalid: {detail}")]
    InvalidExpense {
        group: String,
        index: usize,
        detail: String,
    },
}

impl From<SnapshotLoadError> for RepositoryError {
    fn from(err: SnapshotLoadError) -> Self {
        match err {
            SnapshotLoadError::Io { .. } => RepositoryError::Unavailable(err.to_string()),
            _ => RepositoryError::InvalidData(err.to_string()),
        }
    }
}

#[derive(Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    currency: Option<String>,
    groups: Vec<GroupRecord>,
}

#[derive(Deserialize)]
struct GroupRecord {
    name: String,
    #[serde(default)]
    currency: Option<String>,
    members: Vec<String>,
    #[serde(default)]
    expenses: Vec<ExpenseRecord>,
}

#[derive(Deserialize)]
struct ExpenseRecord {
    #[serde(default)]
    title: String,
    amount: Decimal,
    /// When absent, the first participant pays.
    #[serde(default)]
    payer: Option<String>,
    #[serde(default, alias = "split_members")]
    participants: Vec<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    recurring: Option<String>,
}

/// Group snapshots decoded from a JSON document.
///
/// The whole document is decoded and validated up front, so every snapshot
/// handed out is complete.
pub struct JsonGroupRepository {
    groups: IndexMap<String, GroupSnapshot>,
}

impl JsonGroupRepository {
    pub fn open(
        path: impl AsRef<Path>,
        default_currency: Currency,
    ) -> Result<Self, SnapshotLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SnapshotLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let repository = Self::from_json(&content, default_currency)?;
        tracing::info!(
            path = %path.display(),
            group_count = repository.groups.len(),
            "Loaded group snapshot file"
        );
        Ok(repository)
    }

    pub fn from_json(
        content: &str,
        default_currency: Currency,
    ) -> Result<Self, SnapshotLoadError> {
        let file: SnapshotFile = serde_json::from_str(content)?;
        let file_currency = match file.currency.as_deref() {
            Some(code) => parse_currency(code)?,
            None => default_currency,
        };

        let mut groups = IndexMap::with_capacity(file.groups.len());
        for record in file.groups {
            let snapshot = build_snapshot(record, file_currency)?;
            let name = snapshot.group.name().to_owned();
            if groups.contains_key(&name) {
                return Err(SnapshotLoadError::DuplicateGroup(name));
            }
            groups.insert(name, snapshot);
        }

        Ok(Self { groups })
    }
}

impl GroupRepository for JsonGroupRepository {
    fn load_group(&self, name: &str) -> Result<Option<GroupSnapshot>, RepositoryError> {
        Ok(self.groups.get(name.trim()).cloned())
    }

    fn group_names(&self) -> Result<Vec<String>, RepositoryError> {
        Ok(self.groups.keys().cloned().collect())
    }
}

fn parse_currency(code: &str) -> Result<Currency, SnapshotLoadError> {
    Currency::from_code(code).ok_or_else(|| SnapshotLoadError::UnknownCurrency(code.to_owned()))
}

fn build_snapshot(
    record: GroupRecord,
    default_currency: Currency,
) -> Result<GroupSnapshot, SnapshotLoadError> {
    let group = Group::new(&record.name, &record.members).map_err(|source| {
        SnapshotLoadError::InvalidGroup {
            group: record.name.clone(),
            source,
        }
    })?;
    let currency = match record.currency.as_deref() {
        Some(code) => parse_currency(code)?,
        None => default_currency,
    };

    let expenses = record
        .expenses
        .into_iter()
        .enumerate()
        .map(|(index, expense)| {
            build_expense(expense).map_err(|detail| SnapshotLoadError::InvalidExpense {
                group: group.name().to_owned(),
                index,
                detail,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GroupSnapshot {
        group,
        expenses,
        currency,
    })
}

fn build_expense(record: ExpenseRecord) -> Result<Expense, String> {
    let participants = record
        .participants
        .iter()
        .map(Member::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| err.to_string())?;
    let amount = Money::from_decimal(record.amount);

    let mut expense = match record.payer {
        Some(payer) => {
            let payer = Member::new(payer).map_err(|err| err.to_string())?;
            Expense::new(amount, payer, participants)
        }
        None => Expense::from_split_members(amount, participants)
            .ok_or_else(|| "expense has neither a payer nor participants".to_owned())?,
    };

    expense = expense.with_title(record.title);
    if let Some(category) = record.category {
        let category = category
            .parse::<ExpenseCategory>()
            .map_err(|err| err.to_string())?;
        expense = expense.with_category(category);
    }
    if let Some(date) = record.date {
        expense = expense.with_date(date);
    }
    if let Some(note) = record.note {
        expense = expense.with_note(note);
    }
    if let Some(recurring) = record.recurring {
        let interval = recurring
            .parse::<RecurringInterval>()
            .map_err(|err| err.to_string())?;
        expense = expense.with_recurring(interval);
    }

    Ok(expense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    const TRIP: &str = r#"{
        "currency": "EUR",
        "groups": [
            {
                "name": "  Lisbon Trip ",
                "members": ["Ana", "Ben", "Caro"],
                "expenses": [
                    {
                        "title": "Dinner",
                        "amount": "30.00",
                        "payer": "Ana",
                        "participants": ["Ana", "Ben", "Caro"],
                        "category": "food",
                        "date": "2024-06-01",
                        "note": "Tasca"
                    },
                    {
                        "title": "Taxi",
                        "amount": 12.5,
                        "split_members": ["Ben", "Caro"],
                        "category": "Transport",
                        "recurring": "weekly"
                    }
                ]
            },
            {
                "name": "Tokyo",
                "currency": "jpy",
                "members": ["Ana"]
            }
        ]
    }"#;

    #[test]
    fn decodes_groups_and_expenses() {
        let repository = JsonGroupRepository::from_json(TRIP, Currency::USD).expect("valid json");

        assert_eq!(
            repository.group_names().expect("names"),
            vec!["Lisbon Trip", "Tokyo"]
        );

        let trip = repository
            .load_group("Lisbon Trip")
            .expect("load")
            .expect("group exists");
        assert_eq!(trip.currency, Currency::EUR);
        assert_eq!(trip.expenses.len(), 2);

        let dinner = &trip.expenses[0];
        assert_eq!(dinner.amount, Money::from_decimal(dec!(30.00)));
        assert_eq!(dinner.category, ExpenseCategory::Food);
        assert_eq!(dinner.note.as_deref(), Some("Tasca"));
        assert_eq!(
            dinner.date,
            NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
        );

        let taxi = &trip.expenses[1];
        assert_eq!(taxi.payer.name(), "Ben");
        assert_eq!(taxi.amount, Money::from_decimal(dec!(12.5)));
        assert_eq!(taxi.recurring, Some(RecurringInterval::Weekly));

        let tokyo = repository
            .load_group("Tokyo")
            .expect("load")
            .expect("group exists");
        assert_eq!(tokyo.currency, Currency::JPY);
        assert!(tokyo.expenses.is_empty());
    }

    #[test]
    fn missing_group_is_none() {
        let repository = JsonGroupRepository::from_json(TRIP, Currency::USD).expect("valid json");
        assert!(repository.load_group("Paris").expect("load").is_none());
    }

    #[rstest]
    #[case::bad_json("{", "decode")]
    #[case::unknown_currency(r#"{"currency": "XXX", "groups": []}"#, "currency")]
    #[case::short_group_name(r#"{"groups": [{"name": "ab", "members": ["A"]}]}"#, "group")]
    #[case::duplicate_group(
        r#"{"groups": [{"name": "Home", "members": ["A"]}, {"name": "Home ", "members": ["B"]}]}"#,
        "duplicate"
    )]
    #[case::no_payer(
        r#"{"groups": [{"name": "Home", "members": ["A"], "expenses": [{"amount": "1"}]}]}"#,
        "expense"
    )]
    #[case::bad_category(
        r#"{"groups": [{"name": "Home", "members": ["A"], "expenses": [{"amount": "1", "payer": "A", "category": "boats"}]}]}"#,
        "expense"
    )]
    fn rejects_invalid_documents(#[case] json: &str, #[case] kind: &str) {
        let err = match JsonGroupRepository::from_json(json, Currency::USD) {
            Ok(_) => panic!("expected {kind} error"),
            Err(err) => err,
        };
        let actual = match err {
            SnapshotLoadError::Decode(_) => "decode",
            SnapshotLoadError::UnknownCurrency(_) => "currency",
            SnapshotLoadError::InvalidGroup { .. } => "group",
            SnapshotLoadError::DuplicateGroup(_) => "duplicate",
            SnapshotLoadError::InvalidExpense { .. } => "expense",
            SnapshotLoadError::Io { .. } => "io",
        };
        assert_eq!(actual, kind);
    }

    #[test]
    fn load_errors_map_to_repository_errors() {
        let err = JsonGroupRepository::open("/definitely/not/here.json", Currency::USD)
            .err()
            .expect("missing file");
        assert!(matches!(
            RepositoryError::from(err),
            RepositoryError::Unavailable(_)
        ));
    }
}
