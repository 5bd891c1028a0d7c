//! Units and coordinates shared by every roadtrip crate. Distances, durations, and speeds are
//! type-safe wrappers over finite `f64`s, so a trip's kilometers can't be confused with its
//! minutes.

#[macro_use]
extern crate anyhow;

pub use crate::distance::Distance;
pub use crate::duration::Duration;
pub use crate::gps::LonLat;
pub use crate::speed::Speed;

mod distance;
mod duration;
mod gps;
mod speed;

/// Reduce the precision of an f64. This helps ensure serialization is idempotent (everything is
/// exactly the same before and after saving/loading). Ideally we'd use some kind of proper
/// fixed-precision type instead of f64.
pub fn trim_f64(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}

/// Specifies how to stringify different geom objects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitFmt {
    /// Round `Duration`s to whole seconds, and drop seconds entirely past an hour.
    pub round_durations: bool,
    /// Display in metric; US imperial otherwise.
    pub metric: bool,
}

impl UnitFmt {
    pub fn metric() -> UnitFmt {
        UnitFmt {
            round_durations: true,
            metric: true,
        }
    }
}
