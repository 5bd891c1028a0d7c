use std::{cmp, fmt, ops};

use serde::{Deserialize, Serialize};

use crate::{trim_f64, UnitFmt};

/// A duration, in seconds. Can be negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Duration(f64);

// By construction, Duration is a finite f64 with trimmed precision.
impl Eq for Duration {}

#[allow(clippy::derive_ord_xor_partial_ord)] // false positive
impl Ord for Duration {
    fn cmp(&self, other: &Duration) -> cmp::Ordering {
        self.partial_cmp(other).unwrap()
    }
}

impl Duration {
    pub const ZERO: Duration = Duration::const_seconds(0.0);

    /// Creates a duration in seconds.
    pub fn seconds(value: f64) -> Duration {
        if !value.is_finite() {
            panic!("Bad Duration {}", value);
        }

        Duration(trim_f64(value))
    }

    /// Creates a duration in minutes.
    pub fn minutes(mins: usize) -> Duration {
        Duration::seconds((mins as f64) * 60.0)
    }

    /// Creates a duration in hours.
    pub fn hours(hours: usize) -> Duration {
        Duration::seconds((hours as f64) * 3600.0)
    }

    /// Creates a duration in minutes.
    pub fn f64_minutes(mins: f64) -> Duration {
        Duration::seconds(mins * 60.0)
    }

    pub const fn const_seconds(value: f64) -> Duration {
        Duration(value)
    }

    /// Returns the duration in seconds. Prefer working in typesafe `Duration`s.
    pub fn inner_seconds(self) -> f64 {
        self.0
    }

    /// Returns the duration in fractional minutes.
    pub fn to_minutes(self) -> f64 {
        self.0 / 60.0
    }

    pub fn abs(self) -> Duration {
        Duration(self.0.abs())
    }

    /// Describes the duration as hours, minutes, and seconds. When rounding, seconds are dropped
    /// once the duration reaches an hour, since nobody planning a drive cares about them.
    pub fn to_string(self, fmt: &UnitFmt) -> String {
        let sign = if self < Duration::ZERO { "-" } else { "" };
        let total = self.0.abs();
        let hours = (total / 3600.0).floor() as usize;
        let minutes = ((total % 3600.0) / 60.0).floor() as usize;
        let secs = total % 60.0;

        let mut parts = Vec::new();
        if hours > 0 {
            parts.push(format!("{}hr", hours));
        }
        if minutes > 0 {
            parts.push(format!("{}min", minutes));
        }
        if fmt.round_durations {
            let secs = secs.floor() as usize;
            if secs > 0 && hours == 0 {
                parts.push(format!("{}s", secs));
            }
        } else if secs >= 0.005 {
            let text = format!("{:.2}", secs);
            parts.push(format!(
                "{}s",
                text.trim_end_matches('0').trim_end_matches('.')
            ));
        }

        if parts.is_empty() {
            return "0s".to_string();
        }
        format!("{}{}", sign, parts.join(" "))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fmt = UnitFmt {
            metric: true,
            round_durations: false,
        };
        write!(f, "{}", (*self).to_string(&fmt))
    }
}

impl ops::Add for Duration {
    type Output = Duration;

    fn add(self, other: Duration) -> Duration {
        Duration::seconds(self.0 + other.0)
    }
}

impl ops::AddAssign for Duration {
    fn add_assign(&mut self, other: Duration) {
        *self = *self + other;
    }
}

impl ops::Sub for Duration {
    type Output = Duration;

    fn sub(self, other: Duration) -> Duration {
        Duration::seconds(self.0 - other.0)
    }
}

impl ops::Neg for Duration {
    type Output = Duration;

    fn neg(self) -> Duration {
        Duration::seconds(-self.0)
    }
}

impl ops::Mul<f64> for Duration {
    type Output = Duration;

    fn mul(self, other: f64) -> Duration {
        Duration::seconds(self.0 * other)
    }
}

impl std::iter::Sum for Duration {
    fn sum<I: Iterator<Item = Duration>>(iter: I) -> Duration {
        iter.fold(Duration::ZERO, |a, b| a + b)
    }
}

impl Default for Duration {
    fn default() -> Duration {
        Duration::ZERO
    }
}
