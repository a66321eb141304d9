//! Relative-time bucketing.
//!
//! Converts the distance between two instants into a single time unit, a
//! rounded count and a tense, then hands that `HumanizedMoment` to the
//! locale's date-time phrasing provider.
//!
//! Unit selection is an ordered list of threshold rules evaluated top to
//! bottom, first match wins. Besides plain "below N" thresholds the list has
//! snap windows around round-number boundaries (about a minute, an hour, a
//! day, a week, a month, a year) which promote the duration to the next unit
//! so that wording near a boundary does not flicker between "59 seconds" and
//! "60 seconds". The numeric edges are exclusive and must stay exactly as
//! listed in [`RULES`].

use crate::error::{HumanizeError, Result};
use crate::providers::DateTimeFormatter;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Units a relative time can be expressed in, from smallest to largest.
///
/// The declaration order is the clamping order used by [`UnitBounds`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 8] = [
        TimeUnit::Millisecond,
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// Name used to build resource keys (e.g. "Minute").
    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "Millisecond",
            TimeUnit::Second => "Second",
            TimeUnit::Minute => "Minute",
            TimeUnit::Hour => "Hour",
            TimeUnit::Day => "Day",
            TimeUnit::Week => "Week",
            TimeUnit::Month => "Month",
            TimeUnit::Year => "Year",
        }
    }

    /// Express an elapsed duration in this unit, rounded half away from zero.
    ///
    /// Weeks are 7 days, months 29.5 days and years 365 days.
    pub fn count_in(&self, elapsed: &Elapsed) -> u64 {
        let value = match self {
            TimeUnit::Millisecond => elapsed.total_milliseconds(),
            TimeUnit::Second => elapsed.total_seconds(),
            TimeUnit::Minute => elapsed.total_minutes(),
            TimeUnit::Hour => elapsed.total_hours(),
            TimeUnit::Day => elapsed.total_days(),
            TimeUnit::Week => elapsed.total_days() / 7.0,
            TimeUnit::Month => elapsed.total_days() / 29.5,
            TimeUnit::Year => elapsed.total_days() / 365.0,
        };

        // `as` saturates, and `value` is never negative.
        value.round() as u64
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = HumanizeError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| HumanizeError::UnknownTimeUnit(s.to_string()))
    }
}

/// Direction of a relative time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tense {
    Future,
    Past,
}

impl Tense {
    pub fn name(&self) -> &'static str {
        match self {
            Tense::Future => "Future",
            Tense::Past => "Past",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive lower and upper unit bounds for bucketing.
///
/// Constructed only through [`UnitBounds::new`], so `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitBounds {
    min: TimeUnit,
    max: TimeUnit,
}

impl UnitBounds {
    /// # Returns
    /// * `Ok(UnitBounds)` when `min` is not ordered after `max`
    /// * `Err(HumanizeError::InvalidUnitBounds)` otherwise
    pub fn new(min: TimeUnit, max: TimeUnit) -> Result<Self> {
        if min > max {
            return Err(HumanizeError::InvalidUnitBounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> TimeUnit {
        self.min
    }

    pub fn max(&self) -> TimeUnit {
        self.max
    }
}

impl Default for UnitBounds {
    /// Seconds through years.
    fn default() -> Self {
        Self {
            min: TimeUnit::Second,
            max: TimeUnit::Year,
        }
    }
}

/// Absolute distance between two instants, with fractional accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elapsed {
    seconds: f64,
}

impl Elapsed {
    /// Build from a signed duration; the sign is discarded.
    pub fn from_duration(duration: Duration) -> Self {
        let seconds = match duration.num_microseconds() {
            Some(micros) => micros as f64 / 1_000_000.0,
            None => duration.num_milliseconds() as f64 / 1_000.0,
        };
        Self {
            seconds: seconds.abs(),
        }
    }

    pub fn from_seconds(seconds: f64) -> Self {
        Self {
            seconds: seconds.abs(),
        }
    }

    pub fn total_milliseconds(&self) -> f64 {
        self.seconds * 1_000.0
    }

    pub fn total_seconds(&self) -> f64 {
        self.seconds
    }

    pub fn total_minutes(&self) -> f64 {
        self.seconds / 60.0
    }

    pub fn total_hours(&self) -> f64 {
        self.seconds / 3_600.0
    }

    pub fn total_days(&self) -> f64 {
        self.seconds / 86_400.0
    }
}

// ==================== Bucketing Rules ====================

/// Which fractional total a rule compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Measure {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl Measure {
    fn of(&self, elapsed: &Elapsed) -> f64 {
        match self {
            Measure::Seconds => elapsed.total_seconds(),
            Measure::Minutes => elapsed.total_minutes(),
            Measure::Hours => elapsed.total_hours(),
            Measure::Days => elapsed.total_days(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Threshold {
    /// `lower < value < upper` and `min <= unit`.
    Snap { lower: f64, upper: f64 },
    /// `value < limit` and `min <= unit`, or `max == unit`.
    Below { limit: f64 },
}

/// One row of the cascade: pick `unit` when `threshold` holds for `measure`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BucketRule {
    unit: TimeUnit,
    measure: Measure,
    threshold: Threshold,
}

impl BucketRule {
    const fn snap(unit: TimeUnit, measure: Measure, lower: f64, upper: f64) -> Self {
        Self {
            unit,
            measure,
            threshold: Threshold::Snap { lower, upper },
        }
    }

    const fn below(unit: TimeUnit, measure: Measure, limit: f64) -> Self {
        Self {
            unit,
            measure,
            threshold: Threshold::Below { limit },
        }
    }

    fn applies(&self, elapsed: &Elapsed, bounds: &UnitBounds) -> bool {
        let value = self.measure.of(elapsed);
        let permitted = bounds.min <= self.unit;

        match self.threshold {
            Threshold::Snap { lower, upper } => value > lower && value < upper && permitted,
            Threshold::Below { limit } => (value < limit && permitted) || bounds.max == self.unit,
        }
    }
}

/// The cascade, in evaluation order. Anything that matches none of them is
/// expressed in years.
const RULES: [BucketRule; 14] = [
    BucketRule::below(TimeUnit::Millisecond, Measure::Seconds, 1.0),
    BucketRule::snap(TimeUnit::Minute, Measure::Seconds, 59.0, 61.0),
    BucketRule::below(TimeUnit::Second, Measure::Seconds, 90.0),
    BucketRule::snap(TimeUnit::Hour, Measure::Minutes, 59.0, 61.0),
    BucketRule::below(TimeUnit::Minute, Measure::Minutes, 90.0),
    BucketRule::snap(TimeUnit::Day, Measure::Hours, 23.0, 25.0),
    BucketRule::below(TimeUnit::Hour, Measure::Hours, 30.0),
    BucketRule::snap(TimeUnit::Week, Measure::Days, 6.0, 8.0),
    BucketRule::below(TimeUnit::Day, Measure::Days, 13.0),
    BucketRule::snap(TimeUnit::Month, Measure::Days, 29.0, 32.0),
    BucketRule::below(TimeUnit::Week, Measure::Days, 50.0),
    BucketRule::snap(TimeUnit::Year, Measure::Days, 345.0, 380.0),
    BucketRule::below(TimeUnit::Month, Measure::Days, 500.0),
    BucketRule::below(TimeUnit::Year, Measure::Days, f64::INFINITY),
];

/// Pick the unit that best describes `elapsed` within `bounds`.
pub fn select_unit(elapsed: &Elapsed, bounds: &UnitBounds) -> TimeUnit {
    RULES
        .iter()
        .find(|rule| rule.applies(elapsed, bounds))
        .map(|rule| rule.unit)
        .unwrap_or(TimeUnit::Year)
}

// ==================== Humanized Moment ====================

/// Result of bucketing: what to say, before any wording is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanizedMoment {
    pub tense: Tense,
    pub unit: TimeUnit,
    pub count: u64,
}

impl HumanizedMoment {
    /// Bucket the distance from `reference` to `input`.
    ///
    /// The tense is `Future` when `input` is after `reference`.
    pub fn between(input: DateTime<Utc>, reference: DateTime<Utc>, bounds: &UnitBounds) -> Self {
        Self::from_delta(input - reference, bounds)
    }

    /// Bucket a signed offset (`input - reference`).
    pub fn from_delta(delta: Duration, bounds: &UnitBounds) -> Self {
        let tense = if delta > Duration::zero() {
            Tense::Future
        } else {
            Tense::Past
        };
        let elapsed = Elapsed::from_duration(delta);
        let unit = select_unit(&elapsed, bounds);
        let count = unit.count_in(&elapsed);

        trace!(
            "Bucketed {:.3}s as {} {} ({})",
            elapsed.total_seconds(),
            count,
            unit,
            tense
        );

        Self { tense, unit, count }
    }

    /// Express the moment with a locale's phrasing provider.
    ///
    /// A zero count renders the "now" phrase.
    pub fn render(&self, formatter: &dyn DateTimeFormatter) -> String {
        if self.count == 0 {
            formatter.now()
        } else {
            formatter.date_humanize(self.tense, self.unit, self.count)
        }
    }
}

/// Largest unit within `[min, max]` holding at least one whole count of
/// `elapsed`, with that count. Zero when even `min` holds none.
pub fn largest_whole_unit(elapsed: &Elapsed, min: TimeUnit, max: TimeUnit) -> (TimeUnit, u64) {
    TimeUnit::ALL
        .into_iter()
        .rev()
        .filter(|unit| *unit >= min && *unit <= max)
        .map(|unit| (unit, whole_count_in(elapsed, unit)))
        .find(|(_, count)| *count > 0)
        .unwrap_or((min, 0))
}

fn whole_count_in(elapsed: &Elapsed, unit: TimeUnit) -> u64 {
    let value = match unit {
        TimeUnit::Millisecond => elapsed.total_milliseconds(),
        TimeUnit::Second => elapsed.total_seconds(),
        TimeUnit::Minute => elapsed.total_minutes(),
        TimeUnit::Hour => elapsed.total_hours(),
        TimeUnit::Day => elapsed.total_days(),
        TimeUnit::Week => elapsed.total_days() / 7.0,
        TimeUnit::Month => elapsed.total_days() / 30.0,
        TimeUnit::Year => elapsed.total_days() / 365.0,
    };
    value.floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds(s: f64) -> Elapsed {
        Elapsed::from_seconds(s)
    }

    fn minutes(m: f64) -> Elapsed {
        Elapsed::from_seconds(m * 60.0)
    }

    fn hours(h: f64) -> Elapsed {
        Elapsed::from_seconds(h * 3_600.0)
    }

    fn days(d: f64) -> Elapsed {
        Elapsed::from_seconds(d * 86_400.0)
    }

    fn bounds(min: TimeUnit, max: TimeUnit) -> UnitBounds {
        UnitBounds::new(min, max).expect("Valid bounds")
    }

    fn pick(elapsed: Elapsed) -> (TimeUnit, u64) {
        let unit = select_unit(&elapsed, &UnitBounds::default());
        (unit, unit.count_in(&elapsed))
    }

    // ==================== TimeUnit Tests ====================

    #[test]
    fn test_time_unit_ordering() {
        assert!(TimeUnit::Millisecond < TimeUnit::Second);
        assert!(TimeUnit::Week < TimeUnit::Month);
        assert_eq!(TimeUnit::ALL.iter().max(), Some(&TimeUnit::Year));
    }

    #[test]
    fn test_time_unit_from_str_case_insensitive() {
        assert_eq!("hour".parse::<TimeUnit>().expect("Should parse"), TimeUnit::Hour);
        assert_eq!(" WEEK ".parse::<TimeUnit>().expect("Should parse"), TimeUnit::Week);
    }

    #[test]
    fn test_time_unit_from_str_unknown() {
        let result = "fortnight".parse::<TimeUnit>();
        assert!(matches!(result, Err(HumanizeError::UnknownTimeUnit(_))));
    }

    #[test]
    fn test_count_rounds_half_away_from_zero() {
        assert_eq!(TimeUnit::Second.count_in(&seconds(2.5)), 3);
        assert_eq!(TimeUnit::Second.count_in(&seconds(2.49)), 2);
        assert_eq!(TimeUnit::Day.count_in(&days(0.5)), 1);
    }

    #[test]
    fn test_count_month_and_year_divisors() {
        assert_eq!(TimeUnit::Month.count_in(&days(59.0)), 2);
        assert_eq!(TimeUnit::Year.count_in(&days(730.0)), 2);
        assert_eq!(TimeUnit::Week.count_in(&days(14.0)), 2);
    }

    // ==================== UnitBounds Tests ====================

    #[test]
    fn test_bounds_default() {
        let bounds = UnitBounds::default();
        assert_eq!(bounds.min(), TimeUnit::Second);
        assert_eq!(bounds.max(), TimeUnit::Year);
    }

    #[test]
    fn test_bounds_reject_inverted() {
        let result = UnitBounds::new(TimeUnit::Day, TimeUnit::Hour);
        assert!(matches!(
            result,
            Err(HumanizeError::InvalidUnitBounds {
                min: TimeUnit::Day,
                max: TimeUnit::Hour
            })
        ));
    }

    #[test]
    fn test_bounds_accept_equal() {
        assert!(UnitBounds::new(TimeUnit::Hour, TimeUnit::Hour).is_ok());
    }

    // ==================== Elapsed Tests ====================

    #[test]
    fn test_elapsed_discards_sign() {
        let elapsed = Elapsed::from_duration(Duration::seconds(-90));
        assert_eq!(elapsed.total_seconds(), 90.0);
        assert_eq!(elapsed.total_minutes(), 1.5);
    }

    #[test]
    fn test_elapsed_keeps_sub_millisecond_precision() {
        let elapsed = Elapsed::from_duration(Duration::microseconds(1_500));
        assert_eq!(elapsed.total_milliseconds(), 1.5);
    }

    // ==================== Cascade Tests ====================

    #[test]
    fn test_sub_second_with_default_bounds_is_seconds() {
        assert_eq!(pick(seconds(0.4)), (TimeUnit::Second, 0));
    }

    #[test]
    fn test_sub_second_with_millisecond_min() {
        let b = bounds(TimeUnit::Millisecond, TimeUnit::Year);
        assert_eq!(select_unit(&seconds(0.25), &b), TimeUnit::Millisecond);
    }

    #[test]
    fn test_max_millisecond_forces_milliseconds() {
        let b = bounds(TimeUnit::Millisecond, TimeUnit::Millisecond);
        assert_eq!(select_unit(&days(3.0), &b), TimeUnit::Millisecond);
    }

    #[test]
    fn test_seconds() {
        assert_eq!(pick(seconds(10.0)), (TimeUnit::Second, 10));
        assert_eq!(pick(seconds(89.0)), (TimeUnit::Second, 89));
    }

    #[test]
    fn test_minute_snap_window_is_exclusive() {
        assert_eq!(pick(seconds(59.0)), (TimeUnit::Second, 59));
        assert_eq!(pick(seconds(59.5)), (TimeUnit::Minute, 1));
        assert_eq!(pick(seconds(60.0)), (TimeUnit::Minute, 1));
        assert_eq!(pick(seconds(60.5)), (TimeUnit::Minute, 1));
        assert_eq!(pick(seconds(61.0)), (TimeUnit::Second, 61));
    }

    #[test]
    fn test_minutes() {
        assert_eq!(pick(seconds(90.0)), (TimeUnit::Minute, 2));
        assert_eq!(pick(minutes(10.0)), (TimeUnit::Minute, 10));
        assert_eq!(pick(minutes(89.0)), (TimeUnit::Minute, 89));
    }

    #[test]
    fn test_hour_snap_window() {
        assert_eq!(pick(minutes(60.0)), (TimeUnit::Hour, 1));
        assert_eq!(pick(minutes(61.0)), (TimeUnit::Minute, 61));
        assert_eq!(pick(minutes(60.9)), (TimeUnit::Hour, 1));
    }

    #[test]
    fn test_hours() {
        assert_eq!(pick(minutes(90.0)), (TimeUnit::Hour, 2));
        assert_eq!(pick(hours(10.0)), (TimeUnit::Hour, 10));
        assert_eq!(pick(hours(29.0)), (TimeUnit::Hour, 29));
    }

    #[test]
    fn test_day_snap_window() {
        assert_eq!(pick(hours(24.0)), (TimeUnit::Day, 1));
        assert_eq!(pick(hours(23.5)), (TimeUnit::Day, 1));
        assert_eq!(pick(hours(25.0)), (TimeUnit::Hour, 25));
    }

    #[test]
    fn test_days() {
        assert_eq!(pick(hours(30.0)), (TimeUnit::Day, 1));
        assert_eq!(pick(days(2.0)), (TimeUnit::Day, 2));
        assert_eq!(pick(days(12.0)), (TimeUnit::Day, 12));
    }

    #[test]
    fn test_week_snap_window_is_measured_in_days() {
        assert_eq!(pick(days(7.0)), (TimeUnit::Week, 1));
        assert_eq!(pick(days(6.5)), (TimeUnit::Week, 1));
        assert_eq!(pick(days(6.0)), (TimeUnit::Day, 6));
        assert_eq!(pick(days(8.0)), (TimeUnit::Day, 8));
    }

    #[test]
    fn test_weeks() {
        assert_eq!(pick(days(14.0)), (TimeUnit::Week, 2));
        assert_eq!(pick(days(49.0)), (TimeUnit::Week, 7));
    }

    #[test]
    fn test_month_snap_window() {
        assert_eq!(pick(days(30.0)), (TimeUnit::Month, 1));
        assert_eq!(pick(days(31.5)), (TimeUnit::Month, 1));
        assert_eq!(pick(days(29.0)), (TimeUnit::Week, 4));
    }

    #[test]
    fn test_months() {
        assert_eq!(pick(days(60.0)), (TimeUnit::Month, 2));
        assert_eq!(pick(days(300.0)), (TimeUnit::Month, 10));
    }

    #[test]
    fn test_year_snap_window() {
        assert_eq!(pick(days(366.0)), (TimeUnit::Year, 1));
        assert_eq!(pick(days(350.0)), (TimeUnit::Year, 1));
        assert_eq!(pick(days(380.0)), (TimeUnit::Month, 13));
    }

    #[test]
    fn test_years() {
        assert_eq!(pick(days(500.0)), (TimeUnit::Year, 1));
        assert_eq!(pick(days(730.0)), (TimeUnit::Year, 2));
    }

    // ==================== Bound Tests ====================

    #[test]
    fn test_min_unit_skips_smaller_buckets() {
        let b = bounds(TimeUnit::Day, TimeUnit::Year);
        assert_eq!(select_unit(&hours(3.0), &b), TimeUnit::Day);
        assert_eq!(TimeUnit::Day.count_in(&hours(3.0)), 0);
    }

    #[test]
    fn test_max_unit_forces_smaller_unit() {
        let b = bounds(TimeUnit::Second, TimeUnit::Day);
        assert_eq!(select_unit(&days(100.0), &b), TimeUnit::Day);

        let b = bounds(TimeUnit::Second, TimeUnit::Hour);
        assert_eq!(select_unit(&days(3.0), &b), TimeUnit::Hour);
    }

    #[test]
    fn test_max_week_after_day_threshold() {
        let b = bounds(TimeUnit::Second, TimeUnit::Week);
        assert_eq!(select_unit(&days(100.0), &b), TimeUnit::Week);
    }

    #[test]
    fn test_snap_window_ignores_max_unit() {
        let b = bounds(TimeUnit::Second, TimeUnit::Second);
        assert_eq!(select_unit(&seconds(60.0), &b), TimeUnit::Minute);
        assert_eq!(select_unit(&seconds(120.0), &b), TimeUnit::Second);
    }

    // ==================== HumanizedMoment Tests ====================

    #[test]
    fn test_moment_tense_from_order() {
        let reference = Utc::now();
        let past = HumanizedMoment::between(
            reference - Duration::seconds(10),
            reference,
            &UnitBounds::default(),
        );
        assert_eq!(past.tense, Tense::Past);
        assert_eq!(past.unit, TimeUnit::Second);
        assert_eq!(past.count, 10);

        let future = HumanizedMoment::between(
            reference + Duration::seconds(10),
            reference,
            &UnitBounds::default(),
        );
        assert_eq!(future.tense, Tense::Future);
    }

    #[test]
    fn test_moment_equal_instants_are_past_zero() {
        let reference = Utc::now();
        let moment = HumanizedMoment::between(reference, reference, &UnitBounds::default());
        assert_eq!(moment.tense, Tense::Past);
        assert_eq!(moment.count, 0);
    }

    // ==================== Whole Unit Tests ====================

    #[test]
    fn test_largest_whole_unit() {
        assert_eq!(
            largest_whole_unit(&days(15.0), TimeUnit::Millisecond, TimeUnit::Week),
            (TimeUnit::Week, 2)
        );
        assert_eq!(
            largest_whole_unit(&minutes(90.0), TimeUnit::Second, TimeUnit::Year),
            (TimeUnit::Hour, 1)
        );
    }

    #[test]
    fn test_largest_whole_unit_zero() {
        assert_eq!(
            largest_whole_unit(&seconds(0.5), TimeUnit::Second, TimeUnit::Year),
            (TimeUnit::Second, 0)
        );
    }
}
