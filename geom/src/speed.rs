use std::{cmp, fmt};

use serde::{Deserialize, Serialize};

use crate::{trim_f64, UnitFmt};

/// In meters per second. Can be negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Speed(f64);

// By construction, Speed is a finite f64 with trimmed precision.
impl Eq for Speed {}

#[allow(clippy::derive_ord_xor_partial_ord)] // false positive
impl Ord for Speed {
    fn cmp(&self, other: &Speed) -> cmp::Ordering {
        self.partial_cmp(other).unwrap()
    }
}

impl Speed {
    pub const ZERO: Speed = Speed::const_meters_per_second(0.0);

    pub fn meters_per_second(value: f64) -> Speed {
        if !value.is_finite() {
            panic!("Bad Speed {}", value);
        }

        Speed(trim_f64(value))
    }

    pub const fn const_meters_per_second(value: f64) -> Speed {
        Speed(value)
    }

    pub fn km_per_hour(value: f64) -> Speed {
        Speed::meters_per_second(value / 3.6)
    }

    pub fn inner_meters_per_second(self) -> f64 {
        self.0
    }

    pub fn to_km_per_hour(self) -> f64 {
        self.0 * 3.6
    }

    /// Describes the speed according to formatting rules.
    pub fn to_string(self, fmt: &UnitFmt) -> String {
        if fmt.metric {
            format!("{} km/h", self.to_km_per_hour().round())
        } else {
            format!("{} mph", (self.0 * 2.23694).round())
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", (*self).to_string(&UnitFmt::metric()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_speeds() {
        assert_eq!("36 km/h", format!("{}", Speed::km_per_hour(36.0)));
        let imperial = UnitFmt {
            metric: false,
            round_durations: true,
        };
        assert_eq!("22 mph", Speed::meters_per_second(10.0).to_string(&imperial));
    }
}
