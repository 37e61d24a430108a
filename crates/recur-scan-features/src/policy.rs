/// Feature policy identifier.
///
/// Emitted with every feature vector so threshold or weight changes show up
/// as a new version instead of silently shifting classifier inputs.
pub const FEATURE_POLICY_VERSION: &str = "recurrence-features/v1";

/// Tunable thresholds and confidence weights for the recurrence features.
///
/// Notes:
/// - Each threshold only affects the feature that names it.
/// - The four confidence weights sum to 1.0 so the composite stays in [0,1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeaturePolicy {
    pub min_days: i64,
    pub tolerance_days: u32,
    pub max_distinct: usize,
    pub consistency_weight: f64,
    pub variability_weight: f64,
    pub regularity_weight: f64,
    pub length_weight: f64,
    pub variability_ceiling_days: f64,
    pub monthly_period_days: f64,
    pub length_saturation: usize,
}

impl FeaturePolicy {
    pub fn score(
        self,
        consistency: f64,
        variability_score: f64,
        regularity: f64,
        length_score: f64,
    ) -> f64 {
        let raw = (self.consistency_weight * consistency)
            + (self.variability_weight * variability_score)
            + (self.regularity_weight * regularity)
            + (self.length_weight * length_score);
        raw.clamp(0.0, 1.0)
    }

    /// Maps a day-of-month standard deviation onto [0,1], 1.0 meaning no spread.
    pub fn variability_score(self, variability_days: f64) -> f64 {
        if self.variability_ceiling_days <= 0.0 {
            return if variability_days > 0.0 { 0.0 } else { 1.0 };
        }
        1.0 - (variability_days / self.variability_ceiling_days).clamp(0.0, 1.0)
    }

    /// Share of a monthly period the median gap covers, in [0,1]. Day-of-month
    /// agreement is weighted by it.
    pub fn period_coverage(self, median_period_days: f64) -> f64 {
        if self.monthly_period_days <= 0.0 {
            return 1.0;
        }
        (median_period_days / self.monthly_period_days).clamp(0.0, 1.0)
    }

    /// Maps a gap coefficient of variation onto [0,1], 1.0 meaning constant gaps.
    pub fn regularity_score(self, coefficient_of_variation: f64) -> f64 {
        1.0 - coefficient_of_variation.clamp(0.0, 1.0)
    }

    pub fn length_score(self, occurrences: usize) -> f64 {
        if occurrences < 2 {
            return 0.0;
        }
        if self.length_saturation < 2 {
            return 1.0;
        }
        let observed = (occurrences - 1) as f64;
        let saturation = (self.length_saturation - 1) as f64;
        (observed / saturation).min(1.0)
    }
}

impl Default for FeaturePolicy {
    fn default() -> Self {
        FEATURE_POLICY_V1
    }
}

pub const FEATURE_POLICY_V1: FeaturePolicy = FeaturePolicy {
    min_days: 60,
    tolerance_days: 2,
    max_distinct: 2,
    consistency_weight: 0.35,
    variability_weight: 0.20,
    regularity_weight: 0.30,
    length_weight: 0.15,
    variability_ceiling_days: 10.0,
    monthly_period_days: 28.0,
    length_saturation: 6,
};
