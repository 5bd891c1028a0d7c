use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

use geom::LonLat;

/// How congested a stretch of road is, from best to worst.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum TrafficLevel {
    Clear,
    Light,
    Moderate,
    Heavy,
    Standstill,
}

impl TrafficLevel {
    pub fn color(self) -> &'static str {
        match self {
            TrafficLevel::Clear => "#22c55e",
            TrafficLevel::Light => "#84cc16",
            TrafficLevel::Moderate => "#eab308",
            TrafficLevel::Heavy => "#f97316",
            TrafficLevel::Standstill => "#ef4444",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrafficLevel::Clear => "Clear",
            TrafficLevel::Light => "Light Traffic",
            TrafficLevel::Moderate => "Moderate Traffic",
            TrafficLevel::Heavy => "Heavy Traffic",
            TrafficLevel::Standstill => "Standstill",
        }
    }

    /// One step more congested, saturating at standstill.
    pub fn worse(self) -> TrafficLevel {
        match self {
            TrafficLevel::Clear => TrafficLevel::Light,
            TrafficLevel::Light => TrafficLevel::Moderate,
            TrafficLevel::Moderate => TrafficLevel::Heavy,
            TrafficLevel::Heavy | TrafficLevel::Standstill => TrafficLevel::Standstill,
        }
    }

    fn rank(self) -> usize {
        self as usize
    }

    fn from_rank(rank: usize) -> TrafficLevel {
        match rank {
            0 => TrafficLevel::Clear,
            1 => TrafficLevel::Light,
            2 => TrafficLevel::Moderate,
            3 => TrafficLevel::Heavy,
            _ => TrafficLevel::Standstill,
        }
    }

    /// The level closest to the mean of the inputs. Clear if there are none.
    pub fn average(levels: &[TrafficLevel]) -> TrafficLevel {
        if levels.is_empty() {
            return TrafficLevel::Clear;
        }
        let sum: usize = levels.iter().map(|l| l.rank()).sum();
        let mean = (sum as f64) / (levels.len() as f64);
        TrafficLevel::from_rank(mean.round() as usize)
    }
}

/// A stretch of an alternative between two waypoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrafficSegment {
    pub from: LonLat,
    pub to: LonLat,
    pub level: TrafficLevel,
}

impl TrafficSegment {
    pub fn midpoint(&self) -> LonLat {
        self.from.lerp(self.to, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn ordered_and_total() {
        let all: Vec<TrafficLevel> = TrafficLevel::iter().collect();
        assert_eq!(all.len(), 5);
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].worse(), pair[1]);
        }
        for level in all {
            assert!(level.color().starts_with('#'));
            assert!(!level.label().is_empty());
        }
        assert_eq!(TrafficLevel::Standstill.worse(), TrafficLevel::Standstill);
    }

    #[test]
    fn averages() {
        assert_eq!(TrafficLevel::average(&[]), TrafficLevel::Clear);
        assert_eq!(
            TrafficLevel::average(&[TrafficLevel::Light, TrafficLevel::Heavy]),
            TrafficLevel::Moderate
        );
        assert_eq!(
            TrafficLevel::average(&[
                TrafficLevel::Moderate,
                TrafficLevel::Moderate,
                TrafficLevel::Heavy
            ]),
            TrafficLevel::Moderate
        );
    }
}
