use chrono::{Datelike, NaiveDate};

use crate::{FeatureError, FeatureResult};

/// Latest position an end-of-month anchor can stand for, so the 28th of
/// February and the 31st of January coincide for a month-end biller.
pub const MONTH_END_POSITION: u32 = 31;

/// A date's position within its month.
///
/// The last day of a month is an end-of-month anchor, as is February 28th in
/// leap years. Two end-of-month anchors are always distance 0 apart, whichever
/// calendar day they fall on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayAnchor {
    day: u32,
    end_day: u32,
}

impl DayAnchor {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            end_day: month_end_day(date.year(), date.month()),
        }
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    pub const fn is_month_end(self) -> bool {
        self.day >= self.end_day
    }

    /// Day-of-month position nearest to `billing_day`.
    ///
    /// A plain day is fixed. An end-of-month anchor on calendar day `d` is what
    /// any billing day from `d` through the 31st clamps to, so it takes the
    /// value in that range closest to `billing_day`.
    pub fn position_toward(self, billing_day: f64) -> f64 {
        if !self.is_month_end() {
            return f64::from(self.day);
        }
        billing_day.clamp(f64::from(self.day), f64::from(MONTH_END_POSITION))
    }

    pub fn distance(self, other: Self) -> u32 {
        match (self.is_month_end(), other.is_month_end()) {
            (true, true) => 0,
            (false, false) => self.day.abs_diff(other.day),
            (false, true) => plain_to_month_end(self, other),
            (true, false) => plain_to_month_end(other, self),
        }
    }
}

// A plain day is as close to the month end as the nearer of its own month's
// end and the end anchor's calendar day; a day past that calendar day is the
// clamped case and counts as 0.
fn plain_to_month_end(plain: DayAnchor, month_end: DayAnchor) -> u32 {
    let to_own_end = plain.end_day - plain.day;
    let to_anchor_day = month_end.day.saturating_sub(plain.day);
    to_own_end.min(to_anchor_day)
}

pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_iso_date(value: &str, field_name: &str) -> FeatureResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(FeatureError::invalid_date(field_name, value));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| FeatureError::invalid_date(field_name, value))
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}

/// First day of the month that counts as end-of-month.
fn month_end_day(year: i32, month: u32) -> u32 {
    if month == 2 {
        return 28;
    }
    days_in_month(year, month)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DayAnchor, days_in_month, format_iso_date, parse_iso_date, weekday_index};

    fn anchor(year: i32, month: u32, day: u32) -> DayAnchor {
        let date = NaiveDate::from_ymd_opt(year, month, day);
        assert!(date.is_some());
        DayAnchor::from_date(date.unwrap_or(NaiveDate::MIN))
    }

    #[test]
    fn month_end_anchors_are_equivalent_across_month_lengths() {
        let jan_31 = anchor(2024, 1, 31);
        let feb_28_leap = anchor(2024, 2, 28);
        let feb_29 = anchor(2024, 2, 29);
        let apr_30 = anchor(2024, 4, 30);
        assert!(jan_31.is_month_end());
        assert!(feb_28_leap.is_month_end());
        assert!(feb_29.is_month_end());
        assert_eq!(jan_31.distance(feb_28_leap), 0);
        assert_eq!(feb_29.distance(apr_30), 0);
        assert_eq!(jan_31.position_toward(31.0), feb_28_leap.position_toward(31.0));
    }

    #[test]
    fn thirtieth_is_not_month_end_in_long_months() {
        let jan_30 = anchor(2023, 1, 30);
        assert!(!jan_30.is_month_end());
        assert_eq!(jan_30.position_toward(31.0), 30.0);
        assert_eq!(jan_30.distance(anchor(2023, 1, 31)), 1);
    }

    #[test]
    fn month_end_position_clamps_toward_billing_day() {
        let feb_28 = anchor(2023, 2, 28);
        assert_eq!(feb_28.position_toward(28.0), 28.0);
        assert_eq!(feb_28.position_toward(30.0), 30.0);
        assert_eq!(feb_28.position_toward(15.0), 28.0);
        assert_eq!(anchor(2023, 4, 30).position_toward(31.0), 31.0);
        assert_eq!(anchor(2023, 3, 15).position_toward(31.0), 15.0);
    }

    #[test]
    fn plain_day_past_the_end_anchor_day_is_a_clamped_match() {
        let jan_30 = anchor(2023, 1, 30);
        let feb_28 = anchor(2023, 2, 28);
        assert_eq!(jan_30.distance(feb_28), 0);
        assert_eq!(feb_28.distance(jan_30), 0);
    }

    #[test]
    fn plain_day_uses_nearest_month_end() {
        let feb_27 = anchor(2023, 2, 27);
        let jan_31 = anchor(2023, 1, 31);
        assert_eq!(feb_27.distance(jan_31), 1);
        let jan_15 = anchor(2023, 1, 15);
        assert_eq!(jan_15.distance(jan_31), 16);
    }

    #[test]
    fn plain_days_use_absolute_difference() {
        assert_eq!(anchor(2024, 3, 16).distance(anchor(2024, 1, 15)), 1);
        assert_eq!(anchor(2024, 4, 10).distance(anchor(2024, 1, 15)), 5);
    }

    #[test]
    fn parse_rejects_malformed_and_impossible_dates() {
        assert!(parse_iso_date("2024-1-15", "date").is_err());
        assert!(parse_iso_date("2024/01/15", "date").is_err());
        assert!(parse_iso_date("2023-02-29", "date").is_err());
        let parsed = parse_iso_date("2024-02-29", "date");
        assert!(parsed.is_ok());
        if let Ok(value) = parsed {
            assert_eq!(format_iso_date(&value), "2024-02-29");
        }
    }

    #[test]
    fn parse_error_reports_received_value() {
        let result = parse_iso_date("not-a-date", "posted");
        assert!(result.is_err());
        if let Err(error) = result {
            assert_eq!(error.code, "invalid_date");
            assert!(error.message.contains("`posted`"));
        }
    }

    #[test]
    fn weekday_index_starts_on_monday() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN);
        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap_or(NaiveDate::MIN);
        assert_eq!(weekday_index(monday), 0);
        assert_eq!(weekday_index(sunday), 6);
    }

    #[test]
    fn february_length_follows_leap_rules() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }
}
