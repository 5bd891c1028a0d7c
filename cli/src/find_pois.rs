use anyhow::Result;

use geom::{Distance, LonLat};
use poi::{POICategory, POI};

pub fn count(path: &str) -> Result<()> {
    let pois = poi::load_pois(path)?;
    let counts = poi::count_by_category(&pois);
    println!("{}", rtutil::to_json(counts.borrow()));
    Ok(())
}

pub fn nearby(path: &str, from: LonLat, radius_km: Option<f64>) -> Result<()> {
    let mut pois = poi::load_pois(path)?;
    poi::with_distances_from(&mut pois, from);
    let radius = radius_km
        .map(Distance::kilometers)
        .unwrap_or(poi::DEFAULT_NEARBY_RADIUS);
    let results = poi::nearby(&pois, radius);
    info!(
        "{} of {} POIs within {} of {}",
        results.len(),
        pois.len(),
        radius,
        from
    );
    println!("{}", rtutil::to_json(&results));
    Ok(())
}

pub fn search(
    path: &str,
    query: &str,
    categories: &[POICategory],
    min_rating: Option<f64>,
) -> Result<()> {
    let pois = poi::load_pois(path)?;
    let mut results: Vec<POI> = poi::search(&pois, query).into_iter().cloned().collect();
    if !categories.is_empty() {
        results = poi::by_categories(&results, categories)
            .into_iter()
            .cloned()
            .collect();
    }
    if let Some(min) = min_rating {
        results = poi::top_rated(&results, min).into_iter().cloned().collect();
    }
    info!("{} of {} POIs match", results.len(), pois.len());
    println!("{}", rtutil::to_json(&results));
    Ok(())
}
