use std::cmp::Ordering;

use rtutil::Counter;

use geom::{Distance, LonLat};

use crate::{POICategory, POI};

/// How far `nearby` looks when the caller doesn't say.
pub const DEFAULT_NEARBY_RADIUS: Distance = Distance::const_meters(10_000.0);

/// Every POI belonging to `category`, in input order.
pub fn by_category(pois: &[POI], category: POICategory) -> Vec<&POI> {
    pois.iter().filter(|p| p.has_category(category)).collect()
}

/// Every POI belonging to at least one of `categories`, in input order. A POI matching several
/// requested categories still appears once.
pub fn by_categories<'a>(pois: &'a [POI], categories: &[POICategory]) -> Vec<&'a POI> {
    pois.iter()
        .filter(|p| categories.iter().any(|c| p.has_category(*c)))
        .collect()
}

/// POIs with a known distance no more than `max_dist`, closest first. Ties keep their input
/// order. POIs without a distance are left out.
pub fn nearby(pois: &[POI], max_dist: Distance) -> Vec<&POI> {
    let mut results: Vec<(Distance, &POI)> = pois
        .iter()
        .filter_map(|p| p.distance.filter(|d| *d <= max_dist).map(|d| (d, p)))
        .collect();
    // sort_by_key is stable
    results.sort_by_key(|(d, _)| *d);
    results.into_iter().map(|(_, p)| p).collect()
}

/// Fills out `distance` on every POI, measured along the earth's surface from `origin`.
pub fn with_distances_from(pois: &mut [POI], origin: LonLat) {
    for poi in pois {
        poi.distance = Some(origin.gps_dist(poi.location));
    }
}

/// Case-insensitive substring search over name, address, and description. An empty query
/// matches everything.
pub fn search<'a>(pois: &'a [POI], query: &str) -> Vec<&'a POI> {
    let query = query.trim().to_lowercase();
    pois.iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&query)
                || p.address.to_lowercase().contains(&query)
                || p.description
                    .as_ref()
                    .map(|d| d.to_lowercase().contains(&query))
                    .unwrap_or(false)
        })
        .collect()
}

/// Rated POIs scoring at least `min_rating`, best first. Ties keep input order; unrated POIs
/// are left out.
pub fn top_rated(pois: &[POI], min_rating: f64) -> Vec<&POI> {
    let mut results: Vec<(f64, &POI)> = pois
        .iter()
        .filter_map(|p| p.rating.filter(|r| *r >= min_rating).map(|r| (r, p)))
        .collect();
    results.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    results.into_iter().map(|(_, p)| p).collect()
}

/// How many POIs fall into each category. A POI counts once per category it belongs to.
pub fn count_by_category(pois: &[POI]) -> Counter<POICategory> {
    let mut counts = Counter::new();
    for poi in pois {
        for c in &poi.categories {
            counts.inc(*c);
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::POIType;

    fn poi(id: &str, poi_type: POIType, km: Option<f64>) -> POI {
        let mut p = POI::new(id, id, poi_type, LonLat::new(77.0, 28.0), "somewhere");
        p.distance = km.map(Distance::kilometers);
        p
    }

    fn ids(pois: Vec<&POI>) -> Vec<&str> {
        pois.into_iter().map(|p| p.id.as_str()).collect()
    }

    fn fixture() -> Vec<POI> {
        vec![
            poi("temple", POIType::Temple, Some(4.0)),
            poi("dhaba", POIType::Dhaba, Some(1.5)),
            poi("fort", POIType::Fort, None),
            poi("pump", POIType::PetrolPump, Some(12.0)),
            poi("gurudwara", POIType::Gurudwara, Some(1.5)),
            poi("cafe", POIType::Cafe, Some(10.0)),
        ]
    }

    #[test]
    fn single_category_keeps_order() {
        let pois = fixture();
        assert_eq!(
            ids(by_category(&pois, POICategory::Food)),
            vec!["dhaba", "gurudwara", "cafe"]
        );
        assert_eq!(
            ids(by_category(&pois, POICategory::Heritage)),
            vec!["temple", "fort"]
        );
        assert!(by_category(&pois, POICategory::Nightlife).is_empty());
        assert!(by_category(&[], POICategory::Food).is_empty());
    }

    #[test]
    fn multiple_categories_is_a_union_without_duplicates() {
        let pois = fixture();
        let requested = vec![POICategory::Worship, POICategory::Food, POICategory::Rest];
        let union = by_categories(&pois, &requested);
        assert_eq!(ids(union.clone()), vec!["temple", "dhaba", "gurudwara", "cafe"]);

        // Same set as filtering one category at a time
        let mut expected: Vec<&str> = Vec::new();
        for c in &requested {
            for p in by_category(&pois, *c) {
                if !expected.contains(&p.id.as_str()) {
                    expected.push(&p.id);
                }
            }
        }
        let mut got = ids(union);
        got.sort();
        expected.sort();
        assert_eq!(got, expected);

        assert!(by_categories(&pois, &[]).is_empty());
    }

    #[test]
    fn nearby_sorts_stably_and_skips_unknown_distances() {
        let pois = fixture();
        assert_eq!(
            ids(nearby(&pois, DEFAULT_NEARBY_RADIUS)),
            vec!["dhaba", "gurudwara", "temple", "cafe"]
        );
        assert_eq!(
            ids(nearby(&pois, Distance::kilometers(2.0))),
            vec!["dhaba", "gurudwara"]
        );
        assert!(nearby(&pois, Distance::meters(1.0)).is_empty());
        assert_eq!(ids(nearby(&pois, Distance::kilometers(100.0))).len(), 5);
    }

    #[test]
    fn distances_from_a_point() {
        let mut pois = fixture();
        with_distances_from(&mut pois, LonLat::new(77.0, 28.0));
        assert!(pois.iter().all(|p| p.distance == Some(Distance::ZERO)));

        pois[0].location = LonLat::new(77.0, 28.1);
        with_distances_from(&mut pois, LonLat::new(77.0, 28.0));
        let km = pois[0].distance.unwrap().to_km();
        assert!(km > 11.0 && km < 11.2, "got {}", km);
    }

    #[test]
    fn search_and_ratings() {
        let mut pois = fixture();
        pois[0].description = Some("Ancient SHRINE on the hill".to_string());
        pois[1].rating = Some(4.5);
        pois[3].rating = Some(3.0);
        pois[5].rating = Some(4.5);

        assert_eq!(ids(search(&pois, "shrine")), vec!["temple"]);
        assert_eq!(ids(search(&pois, "DHA")), vec!["dhaba"]);
        assert_eq!(search(&pois, "").len(), pois.len());

        assert_eq!(ids(top_rated(&pois, 4.0)), vec!["dhaba", "cafe"]);
        assert_eq!(ids(top_rated(&pois, 0.0)), vec!["dhaba", "cafe", "pump"]);
    }

    #[test]
    fn counts() {
        let counts = count_by_category(&fixture());
        assert_eq!(counts.get(POICategory::Food), 3);
        assert_eq!(counts.get(POICategory::Rest), 2);
        assert_eq!(counts.get(POICategory::Fuel), 1);
        assert_eq!(counts.get(POICategory::Medical), 0);
    }
}
