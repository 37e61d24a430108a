use crate::policy::FEATURE_POLICY_V1;
use crate::series::Series;
use crate::stats::median_f64;
use crate::transaction::Transaction;

/// True when the series has two or more members spanning at least the
/// default `min_days`.
pub fn has_min_recurrence_period(transaction: &Transaction, transactions: &[Transaction]) -> bool {
    has_min_recurrence_period_with(transaction, transactions, FEATURE_POLICY_V1.min_days)
}

/// Inclusive: a span of exactly `min_days` qualifies.
pub fn has_min_recurrence_period_with(
    transaction: &Transaction,
    transactions: &[Transaction],
    min_days: i64,
) -> bool {
    let series = Series::for_transaction(transaction, transactions);
    if series.is_degenerate() {
        return false;
    }
    series.span_days() >= min_days
}

/// Median of the day gaps between consecutive series members, 0.0 when there
/// are no gaps.
pub fn get_median_period(transaction: &Transaction, transactions: &[Transaction]) -> f64 {
    let series = Series::for_transaction(transaction, transactions);
    median_period(&series)
}

pub(crate) fn median_period(series: &Series<'_>) -> f64 {
    let gaps: Vec<f64> = series.gaps().into_iter().map(|gap| gap as f64).collect();
    median_f64(&gaps).unwrap_or(0.0)
}
