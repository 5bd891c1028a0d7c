use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use geom::Speed;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TravelMode {
    Drive,
    Bike,
    Walk,
    Trek,
    Transit,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TravelModeInfo {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    /// Typical door-to-door speed, including stops
    pub average_speed: Speed,
    pub tips: Vec<&'static str>,
}

impl TravelMode {
    pub fn info(self) -> TravelModeInfo {
        match self {
            TravelMode::Drive => TravelModeInfo {
                name: "Car",
                icon: "🚗",
                description: "Road trip by car",
                average_speed: Speed::km_per_hour(50.0),
                tips: vec![
                    "Check tyre pressure and fluids before leaving",
                    "Plan fuel stops on long highway stretches",
                    "Take a break every two hours of driving",
                ],
            },
            TravelMode::Bike => TravelModeInfo {
                name: "Motorbike",
                icon: "🏍️",
                description: "Ride on two wheels",
                average_speed: Speed::km_per_hour(40.0),
                tips: vec![
                    "Always wear a helmet and riding gear",
                    "Avoid riding after dark on unfamiliar roads",
                    "Carry a puncture repair kit",
                ],
            },
            TravelMode::Walk => TravelModeInfo {
                name: "Walk",
                icon: "🚶",
                description: "Explore on foot",
                average_speed: Speed::km_per_hour(5.0),
                tips: vec![
                    "Wear comfortable shoes",
                    "Carry water and sun protection",
                ],
            },
            TravelMode::Trek => TravelModeInfo {
                name: "Trek",
                icon: "🥾",
                description: "Multi-day hike on mountain trails",
                average_speed: Speed::km_per_hour(3.0),
                tips: vec![
                    "Acclimatize before going above 3000m",
                    "Tell someone your route and expected return",
                    "Start early to finish before afternoon weather",
                ],
            },
            TravelMode::Transit => TravelModeInfo {
                name: "Public Transport",
                icon: "🚆",
                description: "Trains and buses",
                average_speed: Speed::km_per_hour(35.0),
                tips: vec![
                    "Book train tickets in advance",
                    "Keep a printed copy of your tickets",
                    "Arrive 30 minutes before departure",
                ],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn info_is_total() {
        assert_eq!(TravelMode::iter().count(), 5);
        for mode in TravelMode::iter() {
            let info = mode.info();
            assert!(!info.name.is_empty());
            assert!(!info.tips.is_empty());
            assert!(info.average_speed > Speed::ZERO);
        }
    }

    #[test]
    fn parse() {
        assert_eq!(TravelMode::from_str("trek").unwrap(), TravelMode::Trek);
        assert_eq!(TravelMode::Transit.to_string(), "transit");
        assert!(TravelMode::from_str("teleport").is_err());
    }
}
