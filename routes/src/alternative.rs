use serde::{Deserialize, Serialize};

use geom::{Distance, Duration, LonLat};

use crate::{RouteIssue, TrafficLevel, TrafficSegment, WeatherCondition};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub location: LonLat,
}

/// One candidate way of getting between two places, with everything a traveler would want to
/// weigh it against the others.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteAlternative {
    pub id: String,
    pub name: String,
    pub description: String,
    pub distance: Distance,
    /// Free-flow
    pub duration: Duration,
    pub duration_with_traffic: Duration,
    pub advantages: Vec<String>,
    pub disadvantages: Vec<String>,
    pub via_roads: Vec<String>,
    /// In travel order, starting at the origin and ending at the destination
    pub waypoints: Vec<Waypoint>,
    pub traffic_segments: Vec<TrafficSegment>,
    pub issues: Vec<RouteIssue>,
    pub average_traffic_level: TrafficLevel,
    pub attractions: Vec<String>,
    /// Relative to the reference (fastest) route. Positive means this one takes longer.
    pub time_difference: Duration,
    /// Relative to the reference (fastest) route. Positive means this one is longer.
    pub distance_difference: Distance,
    pub recommended: bool,
    pub recommendation_reason: Option<String>,
    pub weather: Vec<WeatherCondition>,
    pub tolls: Option<f64>,
    pub fuel_cost: Option<f64>,
}

impl RouteAlternative {
    /// Tolls plus fuel. Unknown costs count as zero.
    pub fn total_cost(&self) -> f64 {
        self.tolls.unwrap_or(0.0) + self.fuel_cost.unwrap_or(0.0)
    }

    /// How much time reported issues add to this alternative.
    pub fn delay_from_issues(&self) -> Duration {
        self.issues.iter().map(|i| i.delay).sum()
    }
}

/// What switching from one alternative to another buys. Positive values mean the second route is
/// better.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteComparison {
    pub time_saved: Duration,
    pub distance_saved: Distance,
    pub cost_saved: f64,
}

/// Compares `a` against `b`. Swapping the arguments negates every field.
pub fn compare_routes(a: &RouteAlternative, b: &RouteAlternative) -> RouteComparison {
    RouteComparison {
        time_saved: a.duration_with_traffic - b.duration_with_traffic,
        distance_saved: a.distance - b.distance,
        cost_saved: a.total_cost() - b.total_cost(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(km: f64, mins: usize, tolls: Option<f64>, fuel: Option<f64>) -> RouteAlternative {
        RouteAlternative {
            id: format!("route-{}", km),
            name: "Test".to_string(),
            description: String::new(),
            distance: Distance::kilometers(km),
            duration: Duration::minutes(mins),
            duration_with_traffic: Duration::minutes(mins + 10),
            advantages: Vec::new(),
            disadvantages: Vec::new(),
            via_roads: Vec::new(),
            waypoints: Vec::new(),
            traffic_segments: Vec::new(),
            issues: Vec::new(),
            average_traffic_level: TrafficLevel::Light,
            attractions: Vec::new(),
            time_difference: Duration::ZERO,
            distance_difference: Distance::ZERO,
            recommended: false,
            recommendation_reason: None,
            weather: Vec::new(),
            tolls,
            fuel_cost: fuel,
        }
    }

    #[test]
    fn compare() {
        let a = route(120.0, 150, Some(180.0), Some(960.0));
        let b = route(100.0, 120, None, Some(800.0));
        let cmp = compare_routes(&a, &b);
        assert_eq!(cmp.time_saved, Duration::minutes(30));
        assert_eq!(cmp.distance_saved, Distance::kilometers(20.0));
        assert_eq!(cmp.cost_saved, 340.0);
    }

    #[test]
    fn missing_costs_are_zero() {
        let a = route(10.0, 10, None, None);
        let b = route(10.0, 10, Some(5.0), None);
        assert_eq!(a.total_cost(), 0.0);
        assert_eq!(compare_routes(&a, &b).cost_saved, -5.0);
    }

    #[test]
    fn antisymmetric() {
        let routes = vec![
            route(120.5, 151, Some(180.25), Some(960.1)),
            route(99.3, 119, None, Some(800.7)),
            route(0.0, 0, None, None),
            route(47.77, 63, Some(12.5), None),
        ];
        for a in &routes {
            for b in &routes {
                let ab = compare_routes(a, b);
                let ba = compare_routes(b, a);
                assert_eq!(ab.time_saved, -ba.time_saved);
                assert_eq!(ab.distance_saved, -ba.distance_saved);
                assert_eq!(ab.cost_saved, -ba.cost_saved);
            }
        }
    }
}
