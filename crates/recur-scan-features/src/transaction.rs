use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::{format_iso_date, parse_iso_date};
use crate::{FeatureError, FeatureResult};

/// One externally supplied transaction record.
///
/// Records are validated once at construction; every feature reads them
/// through shared references and never mutates them. Fields are public for
/// reading; only [`Transaction::new`], [`Transaction::from_date`] and
/// deserialization check them, and a struct literal skips those checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TransactionRecord", into = "TransactionRecord")]
pub struct Transaction {
    pub id: i64,
    pub user_id: String,
    pub name: String,
    pub amount: f64,
    pub date: NaiveDate,
}

/// Wire shape of a transaction, with the date kept as `YYYY-MM-DD` text.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TransactionRecord {
    id: i64,
    user_id: String,
    name: String,
    amount: f64,
    date: String,
}

impl Transaction {
    pub fn new(id: i64, user_id: &str, name: &str, amount: f64, date: &str) -> FeatureResult<Self> {
        let parsed = parse_iso_date(date.trim(), "date")?;
        Self::from_date(id, user_id, name, amount, parsed)
    }

    pub fn from_date(
        id: i64,
        user_id: &str,
        name: &str,
        amount: f64,
        date: NaiveDate,
    ) -> FeatureResult<Self> {
        if user_id.trim().is_empty() {
            return Err(FeatureError::missing_field("user_id"));
        }
        if name.trim().is_empty() {
            return Err(FeatureError::missing_field("name"));
        }
        if !amount.is_finite() {
            return Err(FeatureError::invalid_argument(
                "`amount` must be a finite number.",
            ));
        }

        Ok(Self {
            id,
            user_id: user_id.to_string(),
            name: name.to_string(),
            amount,
            date,
        })
    }

    /// True when `other` belongs to the same user/name series as `self`.
    pub fn shares_series_with(&self, other: &Transaction) -> bool {
        self.user_id == other.user_id && self.name == other.name
    }
}

impl TryFrom<TransactionRecord> for Transaction {
    type Error = FeatureError;

    fn try_from(record: TransactionRecord) -> FeatureResult<Self> {
        Self::new(
            record.id,
            &record.user_id,
            &record.name,
            record.amount,
            &record.date,
        )
    }
}

impl From<Transaction> for TransactionRecord {
    fn from(transaction: Transaction) -> Self {
        Self {
            id: transaction.id,
            date: format_iso_date(&transaction.date),
            user_id: transaction.user_id,
            name: transaction.name,
            amount: transaction.amount,
        }
    }
}
