use anyhow::Result;
use serde::{Deserialize, Serialize};

use geom::{Distance, LonLat};

use crate::{POICategory, POIType};

/// A named, located place that travelers might want to find.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct POI {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub poi_type: POIType,
    /// Unordered, never empty once validated. Missing from input means "use the type's defaults".
    #[serde(default)]
    pub categories: Vec<POICategory>,
    pub location: LonLat,
    pub address: String,
    /// Out of 5
    pub rating: Option<f64>,
    pub reviews: Option<usize>,
    pub description: Option<String>,
    pub contact: Option<Contact>,
    pub hours: Option<String>,
    pub price_level: Option<PriceLevel>,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// From the user's current position, if known
    pub distance: Option<Distance>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: Option<String>,
    pub website: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceLevel {
    Budget,
    Moderate,
    Expensive,
    Luxury,
}

impl PriceLevel {
    pub fn symbol(self) -> &'static str {
        match self {
            PriceLevel::Budget => "₹",
            PriceLevel::Moderate => "₹₹",
            PriceLevel::Expensive => "₹₹₹",
            PriceLevel::Luxury => "₹₹₹₹",
        }
    }
}

impl POI {
    /// Creates a POI with the categories implied by its type and nothing optional filled out.
    pub fn new<I: Into<String>>(
        id: I,
        name: I,
        poi_type: POIType,
        location: LonLat,
        address: I,
    ) -> POI {
        POI {
            id: id.into(),
            name: name.into(),
            poi_type,
            categories: poi_type.default_categories(),
            location,
            address: address.into(),
            rating: None,
            reviews: None,
            description: None,
            contact: None,
            hours: None,
            price_level: None,
            amenities: Vec::new(),
            distance: None,
        }
    }

    pub fn has_category(&self, category: POICategory) -> bool {
        self.categories.contains(&category)
    }

    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            bail!("POI {:?} has no id", self.name);
        }
        if self.categories.is_empty() {
            bail!("POI {} has no categories", self.id);
        }
        if let Some(rating) = self.rating {
            if !(0.0..=5.0).contains(&rating) {
                bail!("POI {} has rating {} outside [0, 5]", self.id, rating);
            }
        }
        if let Some(dist) = self.distance {
            if dist < Distance::ZERO {
                bail!("POI {} is a negative distance {} away", self.id, dist);
            }
        }
        Ok(())
    }
}

/// Reads a JSON list of POIs. POIs without categories get the defaults for their type; invalid
/// ones are skipped with a warning.
pub fn load_pois(path: &str) -> Result<Vec<POI>> {
    let raw: Vec<POI> = rtutil::read_json(path)?;
    let total = raw.len();
    let mut pois = Vec::new();
    for mut poi in raw {
        if poi.categories.is_empty() {
            poi.categories = poi.poi_type.default_categories();
        }
        if let Err(err) = poi.validate() {
            warn!("Skipping POI from {}: {}", path, err);
            continue;
        }
        pois.push(poi);
    }
    info!("Loaded {} of {} POIs from {}", pois.len(), total, path);
    Ok(pois)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_categories() {
        let poi = POI::new(
            "1",
            "Red Fort",
            POIType::Fort,
            LonLat::new(77.241, 28.6562),
            "Netaji Subhash Marg, Delhi",
        );
        assert!(poi.has_category(POICategory::Heritage));
        assert!(poi.has_category(POICategory::Tourist));
        assert!(!poi.has_category(POICategory::Food));
        assert!(poi.validate().is_ok());
    }

    #[test]
    fn validation() {
        let mut poi = POI::new(
            "2",
            "Highway Dhaba",
            POIType::Dhaba,
            LonLat::new(77.0, 29.0),
            "NH44",
        );
        poi.rating = Some(5.5);
        assert!(poi.validate().is_err());
        poi.rating = Some(4.2);
        poi.categories.clear();
        assert!(poi.validate().is_err());

        poi.categories = POIType::Dhaba.default_categories();
        assert!(poi.validate().is_ok());
        poi.distance = Some(Distance::ZERO);
        assert!(poi.validate().is_ok());
        poi.distance = Some(Distance::meters(-50.0));
        assert!(poi.validate().is_err());
    }

    #[test]
    fn parse_minimal_json() {
        let poi: POI = serde_json::from_str(
            r#"{
                "id": "p1",
                "name": "Lakeside Cafe",
                "type": "cafe",
                "location": {"longitude": 76.0, "latitude": 31.1},
                "address": "Mall Road",
                "rating": 4.5,
                "price_level": "moderate",
                "distance": 2500.0
            }"#,
        )
        .unwrap();
        assert_eq!(poi.poi_type, POIType::Cafe);
        assert!(poi.categories.is_empty());
        assert_eq!(poi.distance, Some(Distance::kilometers(2.5)));
        assert_eq!(poi.price_level.map(|p| p.symbol()), Some("₹₹"));
        assert!(poi.amenities.is_empty());
    }

    #[test]
    fn load_skips_invalid() {
        let dir = std::env::temp_dir().join(format!("poi_load_{}", std::process::id()));
        let path = dir.join("pois.json");
        let path = path.to_str().unwrap();

        let good = POI::new("a", "Atm", POIType::Atm, LonLat::new(1.0, 1.0), "x");
        let mut bad = POI::new("b", "Bad", POIType::Bank, LonLat::new(1.0, 1.0), "y");
        bad.rating = Some(-1.0);
        let mut no_categories =
            POI::new("c", "Bank", POIType::Bank, LonLat::new(1.0, 1.0), "z");
        no_categories.categories.clear();
        rtutil::write_json(path, &vec![good, bad, no_categories]).unwrap();

        let pois = load_pois(path).unwrap();
        assert_eq!(
            pois.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
        assert_eq!(pois[1].categories, vec![POICategory::Finance]);
    }
}
