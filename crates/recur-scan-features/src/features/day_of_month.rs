use crate::date::{DayAnchor, MONTH_END_POSITION};
use crate::policy::FEATURE_POLICY_V1;
use crate::series::Series;
use crate::stats::{median_f64, sample_std_dev};
use crate::transaction::Transaction;

/// Fraction of series members whose day-of-month anchor lies within the
/// default tolerance of the query transaction's anchor.
pub fn get_day_of_month_consistency(transaction: &Transaction, transactions: &[Transaction]) -> f64 {
    get_day_of_month_consistency_with(transaction, transactions, FEATURE_POLICY_V1.tolerance_days)
}

/// The query transaction's own anchor is the reference, so the result does not
/// depend on which other members happen to be present. End-of-month members
/// always match an end-of-month reference.
pub fn get_day_of_month_consistency_with(
    transaction: &Transaction,
    transactions: &[Transaction],
    tolerance_days: u32,
) -> f64 {
    let series = Series::for_transaction(transaction, transactions);
    day_of_month_consistency(&series, DayAnchor::from_date(transaction.date), tolerance_days)
}

/// Sample standard deviation of day-of-month positions. 0.0 below two members.
///
/// End-of-month dates stand for the series' billing day when that day could
/// have clamped to them (a 28th or 30th biller in February), and for the 31st
/// otherwise, so neither month lengths nor clamping add spread.
pub fn get_day_of_month_variability(transaction: &Transaction, transactions: &[Transaction]) -> f64 {
    let series = Series::for_transaction(transaction, transactions);
    day_of_month_variability(&series)
}

pub(crate) fn day_of_month_consistency(
    series: &Series<'_>,
    reference: DayAnchor,
    tolerance_days: u32,
) -> f64 {
    if series.is_degenerate() {
        return 1.0;
    }
    let anchors = series.anchors();
    let matches = anchors
        .iter()
        .filter(|anchor| anchor.distance(reference) <= tolerance_days)
        .count();
    (matches as f64) / (anchors.len() as f64)
}

pub(crate) fn day_of_month_variability(series: &Series<'_>) -> f64 {
    let anchors = series.anchors();
    let billing_day = billing_day(&anchors);
    let positions: Vec<f64> = anchors
        .into_iter()
        .map(|anchor| anchor.position_toward(billing_day))
        .collect();
    sample_std_dev(&positions).unwrap_or(0.0)
}

// Median plain day of the series; the 31st when every member is a month end.
fn billing_day(anchors: &[DayAnchor]) -> f64 {
    let plain_days: Vec<f64> = anchors
        .iter()
        .filter(|anchor| !anchor.is_month_end())
        .map(|anchor| f64::from(anchor.day()))
        .collect();
    median_f64(&plain_days).unwrap_or(f64::from(MONTH_END_POSITION))
}
