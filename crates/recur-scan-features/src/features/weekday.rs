use std::collections::BTreeSet;

use crate::date::weekday_index;
use crate::policy::FEATURE_POLICY_V1;
use crate::series::Series;
use crate::transaction::Transaction;

pub fn is_weekday_consistent(transaction: &Transaction, transactions: &[Transaction]) -> bool {
    is_weekday_consistent_with(transaction, transactions, FEATURE_POLICY_V1.max_distinct)
}

/// True when the series touches at most `max_distinct` weekdays. The default
/// of two lets a weekly biller shift off a weekend now and then.
pub fn is_weekday_consistent_with(
    transaction: &Transaction,
    transactions: &[Transaction],
    max_distinct: usize,
) -> bool {
    let series = Series::for_transaction(transaction, transactions);
    if series.is_degenerate() {
        return true;
    }
    distinct_weekdays(&series) <= max_distinct
}

pub(crate) fn distinct_weekdays(series: &Series<'_>) -> usize {
    series
        .dates()
        .into_iter()
        .map(weekday_index)
        .collect::<BTreeSet<u32>>()
        .len()
}
