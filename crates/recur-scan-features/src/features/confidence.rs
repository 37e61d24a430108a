use serde::Serialize;
use tracing::debug;

use crate::date::DayAnchor;
use crate::features::day_of_month::{day_of_month_consistency, day_of_month_variability};
use crate::features::period::median_period;
use crate::policy::{FEATURE_POLICY_V1, FeaturePolicy};
use crate::series::Series;
use crate::stats::{round_to, sample_std_dev};
use crate::transaction::Transaction;

/// Sub-scores behind a recurrence confidence value, each in [0,1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceBreakdown {
    pub consistency: f64,
    pub variability_score: f64,
    pub period_coverage: f64,
    pub regularity: f64,
    pub length_score: f64,
    pub score: f64,
}

impl ConfidenceBreakdown {
    const NONE: Self = Self {
        consistency: 0.0,
        variability_score: 0.0,
        period_coverage: 0.0,
        regularity: 0.0,
        length_score: 0.0,
        score: 0.0,
    };
}

pub fn get_recurrence_confidence(transaction: &Transaction, transactions: &[Transaction]) -> f64 {
    get_recurrence_confidence_with_policy(transaction, transactions, FEATURE_POLICY_V1)
}

pub fn get_recurrence_confidence_with_policy(
    transaction: &Transaction,
    transactions: &[Transaction],
    policy: FeaturePolicy,
) -> f64 {
    recurrence_breakdown_with_policy(transaction, transactions, policy).score
}

pub fn recurrence_breakdown(
    transaction: &Transaction,
    transactions: &[Transaction],
) -> ConfidenceBreakdown {
    recurrence_breakdown_with_policy(transaction, transactions, FEATURE_POLICY_V1)
}

/// Weighted blend of day-of-month consistency, day-of-month spread, gap
/// regularity and series length. A series below two members carries no
/// recurrence evidence and scores 0.0.
pub fn recurrence_breakdown_with_policy(
    transaction: &Transaction,
    transactions: &[Transaction],
    policy: FeaturePolicy,
) -> ConfidenceBreakdown {
    let series = Series::for_transaction(transaction, transactions);
    breakdown_for(&series, transaction, policy)
}

/// Day-of-month agreement only counts in proportion to `period_coverage`:
/// members a few days apart share a day of month without recurring monthly.
pub(crate) fn breakdown_for(
    series: &Series<'_>,
    transaction: &Transaction,
    policy: FeaturePolicy,
) -> ConfidenceBreakdown {
    if series.is_degenerate() {
        return ConfidenceBreakdown::NONE;
    }

    let consistency = day_of_month_consistency(
        series,
        DayAnchor::from_date(transaction.date),
        policy.tolerance_days,
    );
    let variability_score = policy.variability_score(day_of_month_variability(series));
    let median = median_period(series);
    let period_coverage = policy.period_coverage(median);
    let regularity = period_regularity(series, median, policy);
    let length_score = policy.length_score(series.len());
    let score = policy.score(
        consistency * period_coverage,
        variability_score * period_coverage,
        regularity,
        length_score,
    );

    debug!(
        transaction_id = transaction.id,
        consistency = round_to(consistency, 4),
        variability_score = round_to(variability_score, 4),
        period_coverage = round_to(period_coverage, 4),
        regularity = round_to(regularity, 4),
        length_score = round_to(length_score, 4),
        score = round_to(score, 4),
        "scored recurrence confidence"
    );

    ConfidenceBreakdown {
        consistency,
        variability_score,
        period_coverage,
        regularity,
        length_score,
        score,
    }
}

// Gap spread relative to the median period. A zero median means no period,
// and a single gap has no spread to measure.
fn period_regularity(series: &Series<'_>, median: f64, policy: FeaturePolicy) -> f64 {
    if median <= 0.0 {
        return 0.0;
    }
    let gaps: Vec<f64> = series.gaps().into_iter().map(|gap| gap as f64).collect();
    let Some(spread) = sample_std_dev(&gaps) else {
        return 0.0;
    };
    policy.regularity_score(spread / median)
}
