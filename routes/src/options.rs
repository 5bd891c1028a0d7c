use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::TrafficLevel;

/// Tunes the mock route generator. The defaults reproduce the behavior the app has always had;
/// override them from a JSON file to experiment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteOptions {
    /// When approximating distance on a flat plane, how many kilometers one degree counts for.
    pub km_per_degree: f64,
    /// Measure the base distance with the haversine formula instead of the flat approximation.
    pub use_geodesic: bool,
    /// Free-flow speed for the fastest route, used to turn its distance into a duration.
    pub base_speed_kmh: f64,
    pub fuel_cost_per_km: f64,
    pub toll_per_km: f64,
    pub fastest: RouteProfile,
    pub scenic: RouteProfile,
    pub bypass: RouteProfile,
}

/// How one alternative relates to the base (fastest, free-flow) estimate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteProfile {
    pub distance_factor: f64,
    pub duration_factor: f64,
    /// Multiplies the free-flow duration to get the duration in current traffic, before any
    /// delays from reported issues.
    pub traffic_factor: f64,
    pub traffic_level: TrafficLevel,
    pub tolled: bool,
}

impl Default for RouteOptions {
    fn default() -> RouteOptions {
        RouteOptions {
            km_per_degree: 100.0,
            use_geodesic: false,
            base_speed_kmh: 40.0,
            fuel_cost_per_km: 8.0,
            toll_per_km: 1.5,
            fastest: RouteProfile {
                distance_factor: 1.0,
                duration_factor: 1.0,
                traffic_factor: 1.4,
                traffic_level: TrafficLevel::Moderate,
                tolled: true,
            },
            scenic: RouteProfile {
                distance_factor: 1.2,
                duration_factor: 2.0,
                traffic_factor: 1.05,
                traffic_level: TrafficLevel::Light,
                tolled: false,
            },
            bypass: RouteProfile {
                distance_factor: 1.1,
                duration_factor: 1.8,
                traffic_factor: 1.15,
                traffic_level: TrafficLevel::Light,
                tolled: true,
            },
        }
    }
}

impl RouteOptions {
    /// Reads options from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &str) -> Result<RouteOptions> {
        let opts: RouteOptions = rtutil::read_json(path)?;
        opts.validate()?;
        info!("Loaded route options from {}", path);
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("km_per_degree", self.km_per_degree),
            ("base_speed_kmh", self.base_speed_kmh),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                bail!("{} must be positive, not {}", name, value);
            }
        }
        for (name, value) in [
            ("fuel_cost_per_km", self.fuel_cost_per_km),
            ("toll_per_km", self.toll_per_km),
        ] {
            if !(value >= 0.0 && value.is_finite()) {
                bail!("{} can't be negative: {}", name, value);
            }
        }
        for (name, profile) in [
            ("fastest", &self.fastest),
            ("scenic", &self.scenic),
            ("bypass", &self.bypass),
        ] {
            for (factor, value) in [
                ("distance_factor", profile.distance_factor),
                ("duration_factor", profile.duration_factor),
                ("traffic_factor", profile.traffic_factor),
            ] {
                if !(value > 0.0 && value.is_finite()) {
                    bail!("{}.{} must be positive, not {}", name, factor, value);
                }
            }
        }
        Ok(())
    }
}
