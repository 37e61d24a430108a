pub mod confidence;
pub mod day_of_month;
pub mod period;
pub mod vector;
pub mod weekday;

pub use confidence::{
    ConfidenceBreakdown, get_recurrence_confidence, get_recurrence_confidence_with_policy,
    recurrence_breakdown, recurrence_breakdown_with_policy,
};
pub use day_of_month::{
    get_day_of_month_consistency, get_day_of_month_consistency_with, get_day_of_month_variability,
};
pub use period::{get_median_period, has_min_recurrence_period, has_min_recurrence_period_with};
pub use vector::{FeatureVector, compute_features, compute_features_with_policy};
pub use weekday::{is_weekday_consistent, is_weekday_consistent_with};
