// File: crates/timechart-core/src/time_range.rs
// Summary: Immutable begin/end time interval with epoch-millisecond serialization.

use std::fmt;

use chrono::{DateTime, Duration, Local, SecondsFormat, Utc};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::LayoutError;

/// Instant on the time axis.
pub type Time = DateTime<Utc>;

/// Convert epoch milliseconds to a [`Time`], saturating at chrono's bounds.
pub fn time_from_millis(ms: i64) -> Time {
    DateTime::<Utc>::from_timestamp_millis(ms).unwrap_or(if ms < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// Closed interval `[begin, end]` of instants.
/// Contract: `begin <= end`, enforced by every constructor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimeRange {
    begin: Time,
    end: Time,
}

impl TimeRange {
    pub fn new(begin: Time, end: Time) -> Result<Self, LayoutError> {
        if begin > end {
            return Err(LayoutError::InvalidTimeRange {
                begin_ms: begin.timestamp_millis(),
                end_ms: end.timestamp_millis(),
            });
        }
        Ok(Self { begin, end })
    }

    pub fn from_millis(begin_ms: i64, end_ms: i64) -> Result<Self, LayoutError> {
        Self::new(time_from_millis(begin_ms), time_from_millis(end_ms))
    }

    /// Range spanning `a` and `b` in whichever order they are given.
    pub fn between(a: Time, b: Time) -> Self {
        if a <= b {
            Self { begin: a, end: b }
        } else {
            Self { begin: b, end: a }
        }
    }

    /// Range of `length` ending at `now`.
    pub fn last(length: Duration, now: Time) -> Self {
        let ms = length.num_milliseconds().saturating_abs();
        Self::between(time_from_millis(now.timestamp_millis().saturating_sub(ms)), now)
    }

    pub fn last_day(now: Time) -> Self { Self::last(Duration::days(1), now) }
    pub fn last_seven_days(now: Time) -> Self { Self::last(Duration::days(7), now) }
    pub fn last_thirty_days(now: Time) -> Self { Self::last(Duration::days(30), now) }
    pub fn last_ninety_days(now: Time) -> Self { Self::last(Duration::days(90), now) }
    pub fn last_year(now: Time) -> Self { Self::last(Duration::days(365), now) }

    pub fn begin(&self) -> Time { self.begin }
    pub fn end(&self) -> Time { self.end }
    pub fn begin_ms(&self) -> i64 { self.begin.timestamp_millis() }
    pub fn end_ms(&self) -> i64 { self.end.timestamp_millis() }

    pub fn duration(&self) -> Duration { self.end - self.begin }

    pub fn duration_ms(&self) -> i64 { self.end_ms() - self.begin_ms() }

    /// Inclusive at both ends.
    pub fn contains(&self, t: Time) -> bool {
        self.begin <= t && t <= self.end
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.begin <= other.end && other.begin <= self.end
    }

    /// Whether `self` lies entirely inside `other`.
    pub fn within(&self, other: &TimeRange) -> bool {
        other.begin <= self.begin && self.end <= other.end
    }

    /// Smallest range covering both.
    pub fn extents(&self, other: &TimeRange) -> TimeRange {
        Self {
            begin: self.begin.min(other.begin),
            end: self.end.max(other.end),
        }
    }

    /// Same duration, moved by `offset`.
    pub fn shifted(&self, offset: Duration) -> TimeRange {
        self.shifted_ms(offset.num_milliseconds())
    }

    pub(crate) fn shifted_ms(&self, offset_ms: i64) -> TimeRange {
        Self::between(
            time_from_millis(self.begin_ms().saturating_add(offset_ms)),
            time_from_millis(self.end_ms().saturating_add(offset_ms)),
        )
    }

    pub fn to_local_string(&self) -> String {
        let b: DateTime<Local> = self.begin.with_timezone(&Local);
        let e: DateTime<Local> = self.end.with_timezone(&Local);
        format!("[{}, {}]", b.to_rfc3339_opts(SecondsFormat::Millis, false), e.to_rfc3339_opts(SecondsFormat::Millis, false))
    }

    /// Human-readable length using the two most significant units, e.g. `"2 days 3 hours"`.
    pub fn humanize_duration(&self) -> String {
        humanize_millis(self.duration_ms())
    }
}

fn humanize_millis(ms: i64) -> String {
    const UNITS: [(&str, i64); 5] = [
        ("day", 86_400_000),
        ("hour", 3_600_000),
        ("minute", 60_000),
        ("second", 1_000),
        ("millisecond", 1),
    ];
    if ms == 0 {
        return "0 milliseconds".to_string();
    }
    let mut rest = ms;
    let mut parts = Vec::with_capacity(2);
    for (name, size) in UNITS {
        let n = rest / size;
        if n > 0 {
            rest -= n * size;
            parts.push(format!("{n} {name}{}", if n == 1 { "" } else { "s" }));
        }
        if parts.len() == 2 {
            break;
        }
    }
    parts.join(" ")
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]",
            self.begin.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.end.to_rfc3339_opts(SecondsFormat::Millis, true)
        )
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.begin_ms(), self.end_ms()].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (begin, end) = <(i64, i64)>::deserialize(deserializer)?;
        TimeRange::from_millis(begin, end).map_err(de::Error::custom)
    }
}
