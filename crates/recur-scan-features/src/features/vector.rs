use std::collections::BTreeMap;

use serde::Serialize;

use crate::date::DayAnchor;
use crate::features::confidence::breakdown_for;
use crate::features::day_of_month::{day_of_month_consistency, day_of_month_variability};
use crate::features::period::median_period;
use crate::features::weekday::distinct_weekdays;
use crate::policy::{FEATURE_POLICY_V1, FEATURE_POLICY_VERSION, FeaturePolicy};
use crate::series::Series;
use crate::transaction::Transaction;
use crate::{FeatureError, FeatureResult};

/// Every recurrence feature for one transaction, computed over one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    pub policy_version: String,
    pub transaction_id: i64,
    pub series_length: usize,
    pub has_min_recurrence_period: bool,
    pub median_period: f64,
    pub day_of_month_consistency: f64,
    pub day_of_month_variability: f64,
    pub is_weekday_consistent: bool,
    pub recurrence_confidence: f64,
}

impl FeatureVector {
    /// Flat name -> value map for classifier input; booleans become 0.0/1.0.
    pub fn to_feature_map(&self) -> BTreeMap<String, f64> {
        let mut features = BTreeMap::new();
        features.insert("series_length".to_string(), self.series_length as f64);
        features.insert(
            "has_min_recurrence_period".to_string(),
            flag(self.has_min_recurrence_period),
        );
        features.insert("median_period".to_string(), self.median_period);
        features.insert(
            "day_of_month_consistency".to_string(),
            self.day_of_month_consistency,
        );
        features.insert(
            "day_of_month_variability".to_string(),
            self.day_of_month_variability,
        );
        features.insert(
            "is_weekday_consistent".to_string(),
            flag(self.is_weekday_consistent),
        );
        features.insert(
            "recurrence_confidence".to_string(),
            self.recurrence_confidence,
        );
        features
    }

    pub fn to_json(&self) -> FeatureResult<serde_json::Value> {
        serde_json::to_value(self).map_err(|error| {
            FeatureError::new("internal_serialization_error", &error.to_string(), Vec::new())
        })
    }
}

pub fn compute_features(transaction: &Transaction, transactions: &[Transaction]) -> FeatureVector {
    compute_features_with_policy(transaction, transactions, FEATURE_POLICY_V1)
}

pub fn compute_features_with_policy(
    transaction: &Transaction,
    transactions: &[Transaction],
    policy: FeaturePolicy,
) -> FeatureVector {
    let series = Series::for_transaction(transaction, transactions);
    let degenerate = series.is_degenerate();
    let breakdown = breakdown_for(&series, transaction, policy);

    FeatureVector {
        policy_version: FEATURE_POLICY_VERSION.to_string(),
        transaction_id: transaction.id,
        series_length: series.len(),
        has_min_recurrence_period: !degenerate && series.span_days() >= policy.min_days,
        median_period: median_period(&series),
        day_of_month_consistency: day_of_month_consistency(
            &series,
            DayAnchor::from_date(transaction.date),
            policy.tolerance_days,
        ),
        day_of_month_variability: day_of_month_variability(&series),
        is_weekday_consistent: degenerate || distinct_weekdays(&series) <= policy.max_distinct,
        recurrence_confidence: breakdown.score,
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}
