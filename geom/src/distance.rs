use std::{cmp, fmt, ops};

use serde::{Deserialize, Serialize};

use crate::{trim_f64, Duration, Speed, UnitFmt};

/// A distance, in meters. Can be negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance(f64);

// By construction, Distance is a finite f64 with trimmed precision.
impl Eq for Distance {}

#[allow(clippy::derive_ord_xor_partial_ord)] // false positive
impl Ord for Distance {
    fn cmp(&self, other: &Distance) -> cmp::Ordering {
        self.partial_cmp(other).unwrap()
    }
}

impl Distance {
    pub const ZERO: Distance = Distance::const_meters(0.0);

    /// Creates a distance in meters.
    pub fn meters(value: f64) -> Distance {
        if !value.is_finite() {
            panic!("Bad Distance {}", value);
        }

        Distance(trim_f64(value))
    }

    /// For constants. The value isn't checked or trimmed.
    pub const fn const_meters(value: f64) -> Distance {
        Distance(value)
    }

    /// Creates a distance in kilometers.
    pub fn kilometers(value: f64) -> Distance {
        Distance::meters(1000.0 * value)
    }

    /// Creates a distance in miles.
    pub fn miles(value: f64) -> Distance {
        Distance::meters(1609.34 * value)
    }

    /// Returns the distance in meters. Prefer to work with type-safe `Distance`s.
    pub fn inner_meters(self) -> f64 {
        self.0
    }

    /// Returns the distance in kilometers.
    pub fn to_km(self) -> f64 {
        self.0 / 1000.0
    }

    /// Returns the distance in miles.
    pub fn to_miles(self) -> f64 {
        self.0 * 3.28084 / 5280.0
    }

    /// Describes the distance the way a road sign would: whole meters for short hops, otherwise
    /// kilometers (or miles) to one decimal place.
    pub fn to_string(self, fmt: &UnitFmt) -> String {
        let one_decimal = |x: f64| (x * 10.0).round() / 10.0;
        if !fmt.metric {
            return format!("{} mi", one_decimal(self.to_miles()));
        }
        if self.0.abs() < 1000.0 {
            format!("{}m", self.0.round())
        } else {
            format!("{}km", one_decimal(self.to_km()))
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}

impl ops::Add for Distance {
    type Output = Distance;

    fn add(self, other: Distance) -> Distance {
        Distance::meters(self.0 + other.0)
    }
}

impl ops::AddAssign for Distance {
    fn add_assign(&mut self, other: Distance) {
        *self = *self + other;
    }
}

impl ops::Sub for Distance {
    type Output = Distance;

    fn sub(self, other: Distance) -> Distance {
        Distance::meters(self.0 - other.0)
    }
}

impl ops::Neg for Distance {
    type Output = Distance;

    fn neg(self) -> Distance {
        Distance::meters(-self.0)
    }
}

impl ops::Mul<f64> for Distance {
    type Output = Distance;

    fn mul(self, factor: f64) -> Distance {
        Distance::meters(self.0 * factor)
    }
}

impl ops::Div<Speed> for Distance {
    type Output = Duration;

    fn div(self, other: Speed) -> Duration {
        if other == Speed::ZERO {
            panic!("Covering {} at zero speed takes forever", self);
        }
        Duration::seconds(self.0 / other.inner_meters_per_second())
    }
}

impl std::iter::Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Distance {
        iter.fold(Distance::ZERO, |a, b| a + b)
    }
}

impl Default for Distance {
    fn default() -> Distance {
        Distance::ZERO
    }
}
