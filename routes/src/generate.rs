use geom::{Distance, Duration, LonLat};

use crate::{
    RouteAlternative, RouteIssue, RouteOptions, RouteProfile, Severity, TrafficLevel,
    TrafficSegment, Waypoint, WeatherCondition,
};

/// The static parts of each alternative. The numbers come from `RouteOptions`.
struct Template {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    advantages: &'static [&'static str],
    disadvantages: &'static [&'static str],
    via_roads: &'static [&'static str],
    attractions: &'static [&'static str],
    weather: &'static [WeatherCondition],
    /// Sideways offset of the middle waypoint, as a fraction of the straight-line span
    detour: f64,
    via_name: &'static str,
}

const FASTEST: Template = Template {
    id: "route-fastest",
    name: "Fastest Route",
    description: "Via highways and expressways",
    advantages: &["Shortest travel time", "Well-maintained highways", "Frequent fuel stops"],
    disadvantages: &["Toll charges apply", "Heavier traffic near cities"],
    via_roads: &["National Highway", "Expressway"],
    attractions: &["Highway food plaza"],
    weather: &[WeatherCondition::Clear],
    detour: 0.0,
    via_name: "Highway junction",
};

const SCENIC: Template = Template {
    id: "route-scenic",
    name: "Scenic Route",
    description: "Through hills, lakes, and villages",
    advantages: &["Beautiful views", "Local food stops", "Less truck traffic"],
    disadvantages: &["Longer travel time", "Narrow roads in places", "Fewer fuel stations"],
    via_roads: &["State Highway", "Lakeside Road"],
    attractions: &["Hilltop viewpoint", "Riverside dhaba", "Heritage village"],
    weather: &[WeatherCondition::PartlyCloudy, WeatherCondition::Fog],
    detour: 0.15,
    via_name: "Lakeside viewpoint",
};

const BYPASS: Template = Template {
    id: "route-bypass",
    name: "Bypass Route",
    description: "Around city centers on ring roads",
    advantages: &["Avoids reported incidents", "Skips city traffic"],
    disadvantages: &["Slightly longer distance", "Few amenities along the way"],
    via_roads: &["Outer Ring Road", "Bypass"],
    attractions: &[],
    weather: &[WeatherCondition::Clear, WeatherCondition::Cloudy],
    detour: -0.08,
    via_name: "Ring road interchange",
};

/// Fabricates exactly three alternatives between two points: "Fastest Route", "Scenic Route",
/// and "Bypass Route", in that order. This is a rough stand-in for a real routing engine; only
/// the shape of the output is meaningful.
///
/// The fastest route carries every reported issue except critical ones. The other two go around
/// the reported issues and carry none.
pub fn generate_route_alternatives(
    origin: LonLat,
    destination: LonLat,
    issues: &[RouteIssue],
    opts: &RouteOptions,
) -> Vec<RouteAlternative> {
    let base_distance = if opts.use_geodesic {
        origin.gps_dist(destination)
    } else {
        Distance::kilometers(origin.planar_degrees(destination) * opts.km_per_degree)
    };
    let base_duration = Duration::f64_minutes(base_distance.to_km() * 60.0 / opts.base_speed_kmh);

    let fastest_issues: Vec<RouteIssue> = issues
        .iter()
        .filter(|i| i.severity != Severity::Critical)
        .cloned()
        .collect();

    let mut alternatives = vec![
        build(
            &FASTEST,
            &opts.fastest,
            origin,
            destination,
            base_distance,
            base_duration,
            fastest_issues,
            opts,
        ),
        build(
            &SCENIC,
            &opts.scenic,
            origin,
            destination,
            base_distance,
            base_duration,
            Vec::new(),
            opts,
        ),
        build(
            &BYPASS,
            &opts.bypass,
            origin,
            destination,
            base_distance,
            base_duration,
            Vec::new(),
            opts,
        ),
    ];

    let reference_time = alternatives[0].duration_with_traffic;
    let reference_dist = alternatives[0].distance;
    for alt in &mut alternatives {
        alt.time_difference = alt.duration_with_traffic - reference_time;
        alt.distance_difference = alt.distance - reference_dist;
    }

    // Ties go to the earlier alternative
    let mut best = 0;
    for (idx, alt) in alternatives.iter().enumerate() {
        if alt.duration_with_traffic < alternatives[best].duration_with_traffic {
            best = idx;
        }
    }
    let reason = if best == 0 {
        "Shortest travel time in current traffic".to_string()
    } else {
        format!(
            "Saves {} over the {} in current traffic",
            (-alternatives[best].time_difference).to_string(&geom::UnitFmt::metric()),
            alternatives[0].name.to_lowercase()
        )
    };
    alternatives[best].recommended = true;
    alternatives[best].recommendation_reason = Some(reason);

    for alt in &alternatives {
        debug!(
            "{}: {} in {} ({} with traffic), {} issues",
            alt.name,
            alt.distance,
            alt.duration,
            alt.duration_with_traffic,
            alt.issues.len()
        );
    }

    alternatives
}

#[allow(clippy::too_many_arguments)]
fn build(
    template: &Template,
    profile: &RouteProfile,
    origin: LonLat,
    destination: LonLat,
    base_distance: Distance,
    base_duration: Duration,
    issues: Vec<RouteIssue>,
    opts: &RouteOptions,
) -> RouteAlternative {
    let distance = base_distance * profile.distance_factor;
    let duration = base_duration * profile.duration_factor;

    let delay: Duration = issues.iter().map(|i| i.delay).sum();
    let mut duration_with_traffic = duration * profile.traffic_factor + delay;
    if duration_with_traffic < duration {
        warn!(
            "{}: duration with traffic {} is less than free-flow {}; clamping",
            template.name, duration_with_traffic, duration
        );
        duration_with_traffic = duration;
    }

    // Push the middle waypoint sideways, perpendicular to the straight line
    let dlon = destination.longitude - origin.longitude;
    let dlat = destination.latitude - origin.latitude;
    let via = origin
        .lerp(destination, 0.5)
        .offset(-dlat * template.detour, dlon * template.detour);
    let waypoints = vec![
        Waypoint {
            name: "Origin".to_string(),
            location: origin,
        },
        Waypoint {
            name: template.via_name.to_string(),
            location: via,
        },
        Waypoint {
            name: "Destination".to_string(),
            location: destination,
        },
    ];

    let mut traffic_segments: Vec<TrafficSegment> = waypoints
        .windows(2)
        .map(|pair| TrafficSegment {
            from: pair[0].location,
            to: pair[1].location,
            level: profile.traffic_level,
        })
        .collect();
    // Each issue makes the segment nearest to it one step worse
    for issue in &issues {
        if let Some(seg) = traffic_segments.iter_mut().min_by_key(|seg| {
            seg.midpoint().gps_dist(issue.location)
        }) {
            seg.level = seg.level.worse();
        }
    }
    let average_traffic_level = TrafficLevel::average(
        &traffic_segments
            .iter()
            .map(|seg| seg.level)
            .collect::<Vec<_>>(),
    );

    let km = distance.to_km();
    let fuel_cost = Some((km * opts.fuel_cost_per_km).round());
    let tolls = if profile.tolled {
        Some((km * opts.toll_per_km).round())
    } else {
        None
    };

    RouteAlternative {
        id: template.id.to_string(),
        name: template.name.to_string(),
        description: template.description.to_string(),
        distance,
        duration,
        duration_with_traffic,
        advantages: strings(template.advantages),
        disadvantages: strings(template.disadvantages),
        via_roads: strings(template.via_roads),
        waypoints,
        traffic_segments,
        issues,
        average_traffic_level,
        attractions: strings(template.attractions),
        time_difference: Duration::ZERO,
        distance_difference: Distance::ZERO,
        recommended: false,
        recommendation_reason: None,
        weather: template.weather.to_vec(),
        tolls,
        fuel_cost,
    }
}

fn strings(list: &[&str]) -> Vec<String> {
    list.iter().map(|x| x.to_string()).collect()
}
