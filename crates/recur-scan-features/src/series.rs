use chrono::NaiveDate;
use tracing::trace;

use crate::date::{DayAnchor, days_between};
use crate::transaction::Transaction;

/// Transactions sharing the query's user and name, oldest first.
///
/// Every feature builds its series through [`Series::for_transaction`] so all
/// statistics see the same members in the same order. Equal dates keep their
/// input order.
#[derive(Debug, Clone)]
pub struct Series<'a> {
    members: Vec<&'a Transaction>,
}

impl<'a> Series<'a> {
    pub fn for_transaction(query: &'a Transaction, transactions: &'a [Transaction]) -> Self {
        let mut members: Vec<&'a Transaction> = transactions
            .iter()
            .filter(|candidate| candidate.shares_series_with(query))
            .collect();
        if !members.iter().any(|member| member.id == query.id) {
            members.push(query);
        }
        members.sort_by_key(|member| member.date);

        trace!(
            user_id = %query.user_id,
            name = %query.name,
            members = members.len(),
            "built transaction series"
        );
        Self { members }
    }

    pub(crate) fn len(&self) -> usize {
        self.members.len()
    }

    /// A series needs two members before any interval is defined.
    pub fn is_degenerate(&self) -> bool {
        self.members.len() < 2
    }

    pub fn members(&self) -> &[&'a Transaction] {
        &self.members
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.members.iter().map(|member| member.date).collect()
    }

    pub fn anchors(&self) -> Vec<DayAnchor> {
        self.members
            .iter()
            .map(|member| DayAnchor::from_date(member.date))
            .collect()
    }

    /// Days between consecutive members; empty for degenerate series.
    pub fn gaps(&self) -> Vec<i64> {
        self.members
            .windows(2)
            .map(|pair| days_between(pair[0].date, pair[1].date))
            .collect()
    }

    /// Days from the first to the last member.
    pub fn span_days(&self) -> i64 {
        match (self.members.first(), self.members.last()) {
            (Some(first), Some(last)) => days_between(first.date, last.date),
            _ => 0,
        }
    }
}
