use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// A broad audience or purpose grouping. One place usually falls in several.
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
pub enum POICategory {
    Tourist,
    Worship,
    Food,
    Accommodation,
    Fuel,
    Medical,
    Shopping,
    Transport,
    Emergency,
    Entertainment,
    Nature,
    Adventure,
    Heritage,
    Services,
    Finance,
    Rest,
    Family,
    Nightlife,
}

/// The specific kind of place.
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
pub enum POIType {
    Monument,
    Museum,
    Viewpoint,
    ThemePark,
    Zoo,
    Aquarium,
    Beach,
    Landmark,
    Temple,
    Mosque,
    Church,
    Gurudwara,
    Monastery,
    Restaurant,
    Cafe,
    Dhaba,
    FastFood,
    StreetFood,
    Bakery,
    Hotel,
    Resort,
    Hostel,
    Homestay,
    Campsite,
    PetrolPump,
    EvCharger,
    Hospital,
    Clinic,
    Pharmacy,
    Mall,
    Market,
    Supermarket,
    SouvenirShop,
    BusStation,
    RailwayStation,
    Airport,
    Parking,
    FerryTerminal,
    PoliceStation,
    FireStation,
    RoadsideAssistance,
    Cinema,
    Theatre,
    NationalPark,
    Waterfall,
    Lake,
    Garden,
    Trailhead,
    RaftingPoint,
    Paragliding,
    Fort,
    Palace,
    MechanicShop,
    PostOffice,
    Atm,
    Bank,
    CurrencyExchange,
    RestArea,
    PublicToilet,
    Playground,
    Bar,
    Nightclub,
}

/// Display metadata for a category.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryInfo {
    pub category: POICategory,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    /// The (from, to) colors of a gradient badge
    pub gradient: (&'static str, &'static str),
    pub description: &'static str,
    /// Every type listing this category, in enum order
    pub types: Vec<POIType>,
}

/// Display metadata for a type of place.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TypeInfo {
    pub poi_type: POIType,
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub categories: Vec<POICategory>,
}

lazy_static::lazy_static! {
    pub static ref POI_TYPE_INFO: BTreeMap<POIType, TypeInfo> = POIType::iter()
        .map(|t| {
            let (name, icon, color, categories) = t.describe();
            (
                t,
                TypeInfo {
                    poi_type: t,
                    name,
                    icon,
                    color,
                    categories: categories.to_vec(),
                },
            )
        })
        .collect();

    pub static ref POI_CATEGORIES: BTreeMap<POICategory, CategoryInfo> = POICategory::iter()
        .map(|c| {
            let (name, icon, color, gradient, description) = c.describe();
            // Derived from the type table, so the two directions always agree
            let types = POIType::iter()
                .filter(|t| t.describe().3.contains(&c))
                .collect();
            (
                c,
                CategoryInfo {
                    category: c,
                    name,
                    icon,
                    color,
                    gradient,
                    description,
                    types,
                },
            )
        })
        .collect();
}

impl POICategory {
    pub fn all() -> Vec<POICategory> {
        POICategory::iter().collect()
    }

    pub fn info(self) -> &'static CategoryInfo {
        &POI_CATEGORIES[&self]
    }

    #[allow(clippy::type_complexity)]
    fn describe(
        self,
    ) -> (
        &'static str,
        &'static str,
        &'static str,
        (&'static str, &'static str),
        &'static str,
    ) {
        match self {
            POICategory::Tourist => (
                "Tourist Attractions",
                "📸",
                "#3b82f6",
                ("#3b82f6", "#06b6d4"),
                "Landmarks, sights, and must-see spots",
            ),
            POICategory::Worship => (
                "Places of Worship",
                "🛕",
                "#f59e0b",
                ("#f59e0b", "#f97316"),
                "Temples, mosques, churches, and gurudwaras",
            ),
            POICategory::Food => (
                "Food & Dining",
                "🍽️",
                "#ef4444",
                ("#ef4444", "#f97316"),
                "Restaurants, dhabas, cafes, and street food",
            ),
            POICategory::Accommodation => (
                "Stay",
                "🏨",
                "#8b5cf6",
                ("#8b5cf6", "#6366f1"),
                "Hotels, homestays, hostels, and campsites",
            ),
            POICategory::Fuel => (
                "Fuel & Charging",
                "⛽",
                "#10b981",
                ("#10b981", "#059669"),
                "Petrol pumps and EV chargers",
            ),
            POICategory::Medical => (
                "Medical",
                "🏥",
                "#dc2626",
                ("#dc2626", "#b91c1c"),
                "Hospitals, clinics, and pharmacies",
            ),
            POICategory::Shopping => (
                "Shopping",
                "🛍️",
                "#ec4899",
                ("#ec4899", "#d946ef"),
                "Malls, markets, and souvenir shops",
            ),
            POICategory::Transport => (
                "Transport",
                "🚉",
                "#0ea5e9",
                ("#0ea5e9", "#2563eb"),
                "Stations, airports, parking, and ferries",
            ),
            POICategory::Emergency => (
                "Emergency",
                "🚨",
                "#b91c1c",
                ("#b91c1c", "#7f1d1d"),
                "Police, fire brigade, hospitals, and roadside assistance",
            ),
            POICategory::Entertainment => (
                "Entertainment",
                "🎭",
                "#a855f7",
                ("#a855f7", "#ec4899"),
                "Cinemas, theatres, and theme parks",
            ),
            POICategory::Nature => (
                "Nature",
                "🌿",
                "#22c55e",
                ("#22c55e", "#16a34a"),
                "Parks, lakes, waterfalls, and gardens",
            ),
            POICategory::Adventure => (
                "Adventure",
                "🧗",
                "#f97316",
                ("#f97316", "#ea580c"),
                "Treks, rafting, paragliding, and camping",
            ),
            POICategory::Heritage => (
                "Heritage",
                "🏰",
                "#a16207",
                ("#a16207", "#78350f"),
                "Forts, palaces, and monuments",
            ),
            POICategory::Services => (
                "Services",
                "🔧",
                "#64748b",
                ("#64748b", "#475569"),
                "Mechanics, post offices, and public facilities",
            ),
            POICategory::Finance => (
                "Banks & ATMs",
                "🏧",
                "#0d9488",
                ("#0d9488", "#0f766e"),
                "ATMs, banks, and currency exchange",
            ),
            POICategory::Rest => (
                "Rest Stops",
                "☕",
                "#84cc16",
                ("#84cc16", "#65a30d"),
                "Rest areas, toilets, and roadside cafes",
            ),
            POICategory::Family => (
                "Family",
                "👨‍👩‍👧",
                "#06b6d4",
                ("#06b6d4", "#0891b2"),
                "Kid-friendly parks, zoos, and museums",
            ),
            POICategory::Nightlife => (
                "Nightlife",
                "🌃",
                "#6366f1",
                ("#6366f1", "#4338ca"),
                "Bars, pubs, and clubs",
            ),
        }
    }
}

impl POIType {
    pub fn all() -> Vec<POIType> {
        POIType::iter().collect()
    }

    pub fn info(self) -> &'static TypeInfo {
        &POI_TYPE_INFO[&self]
    }

    /// The categories a place of this type belongs to by default.
    pub fn default_categories(self) -> Vec<POICategory> {
        self.describe().3.to_vec()
    }

    fn describe(
        self,
    ) -> (
        &'static str,
        &'static str,
        &'static str,
        &'static [POICategory],
    ) {
        use POICategory as C;

        match self {
            POIType::Monument => ("Monument", "🗿", "#a16207", &[C::Tourist, C::Heritage]),
            POIType::Museum => (
                "Museum",
                "🏛️",
                "#a16207",
                &[C::Tourist, C::Heritage, C::Family],
            ),
            POIType::Viewpoint => ("Viewpoint", "🔭", "#3b82f6", &[C::Tourist, C::Nature]),
            POIType::ThemePark => (
                "Theme Park",
                "🎢",
                "#a855f7",
                &[C::Entertainment, C::Family],
            ),
            POIType::Zoo => ("Zoo", "🦁", "#22c55e", &[C::Tourist, C::Family, C::Nature]),
            POIType::Aquarium => ("Aquarium", "🐠", "#06b6d4", &[C::Tourist, C::Family]),
            POIType::Beach => ("Beach", "🏖️", "#0ea5e9", &[C::Tourist, C::Nature]),
            POIType::Landmark => ("Landmark", "📍", "#3b82f6", &[C::Tourist]),
            POIType::Temple => (
                "Temple",
                "🛕",
                "#f59e0b",
                &[C::Worship, C::Heritage, C::Tourist],
            ),
            POIType::Mosque => ("Mosque", "🕌", "#10b981", &[C::Worship, C::Heritage]),
            POIType::Church => ("Church", "⛪", "#6366f1", &[C::Worship]),
            POIType::Gurudwara => ("Gurudwara", "🙏", "#f59e0b", &[C::Worship, C::Food]),
            POIType::Monastery => ("Monastery", "☸️", "#ea580c", &[C::Worship, C::Heritage]),
            POIType::Restaurant => ("Restaurant", "🍽️", "#ef4444", &[C::Food]),
            POIType::Cafe => ("Cafe", "☕", "#92400e", &[C::Food, C::Rest]),
            POIType::Dhaba => ("Dhaba", "🍛", "#f97316", &[C::Food, C::Rest]),
            POIType::FastFood => ("Fast Food", "🍔", "#ef4444", &[C::Food]),
            POIType::StreetFood => ("Street Food", "🌮", "#f97316", &[C::Food]),
            POIType::Bakery => ("Bakery", "🥐", "#d97706", &[C::Food]),
            POIType::Hotel => ("Hotel", "🏨", "#8b5cf6", &[C::Accommodation]),
            POIType::Resort => (
                "Resort",
                "🏝️",
                "#8b5cf6",
                &[C::Accommodation, C::Entertainment],
            ),
            POIType::Hostel => ("Hostel", "🛏️", "#6366f1", &[C::Accommodation]),
            POIType::Homestay => ("Homestay", "🏡", "#8b5cf6", &[C::Accommodation]),
            POIType::Campsite => (
                "Campsite",
                "⛺",
                "#16a34a",
                &[C::Accommodation, C::Adventure, C::Nature],
            ),
            POIType::PetrolPump => ("Petrol Pump", "⛽", "#10b981", &[C::Fuel]),
            POIType::EvCharger => ("EV Charger", "🔌", "#059669", &[C::Fuel]),
            POIType::Hospital => ("Hospital", "🏥", "#dc2626", &[C::Medical, C::Emergency]),
            POIType::Clinic => ("Clinic", "🩺", "#dc2626", &[C::Medical]),
            POIType::Pharmacy => ("Pharmacy", "💊", "#16a34a", &[C::Medical]),
            POIType::Mall => ("Mall", "🛍️", "#ec4899", &[C::Shopping, C::Entertainment]),
            POIType::Market => ("Market", "🧺", "#d946ef", &[C::Shopping, C::Food]),
            POIType::Supermarket => ("Supermarket", "🛒", "#ec4899", &[C::Shopping]),
            POIType::SouvenirShop => (
                "Souvenir Shop",
                "🎁",
                "#db2777",
                &[C::Shopping, C::Tourist],
            ),
            POIType::BusStation => ("Bus Station", "🚌", "#0ea5e9", &[C::Transport]),
            POIType::RailwayStation => ("Railway Station", "🚉", "#2563eb", &[C::Transport]),
            POIType::Airport => ("Airport", "✈️", "#2563eb", &[C::Transport]),
            POIType::Parking => ("Parking", "🅿️", "#0284c7", &[C::Transport]),
            POIType::FerryTerminal => ("Ferry Terminal", "⛴️", "#0369a1", &[C::Transport]),
            POIType::PoliceStation => ("Police Station", "🚓", "#1d4ed8", &[C::Emergency]),
            POIType::FireStation => ("Fire Station", "🚒", "#b91c1c", &[C::Emergency]),
            POIType::RoadsideAssistance => (
                "Roadside Assistance",
                "🛠️",
                "#b45309",
                &[C::Emergency, C::Services],
            ),
            POIType::Cinema => ("Cinema", "🎬", "#a855f7", &[C::Entertainment]),
            POIType::Theatre => (
                "Theatre",
                "🎭",
                "#9333ea",
                &[C::Entertainment, C::Heritage],
            ),
            POIType::NationalPark => (
                "National Park",
                "🏞️",
                "#16a34a",
                &[C::Nature, C::Adventure, C::Tourist],
            ),
            POIType::Waterfall => ("Waterfall", "💧", "#0ea5e9", &[C::Nature, C::Tourist]),
            POIType::Lake => ("Lake", "🌊", "#0284c7", &[C::Nature]),
            POIType::Garden => ("Garden", "🌳", "#22c55e", &[C::Nature, C::Family]),
            POIType::Trailhead => ("Trailhead", "🥾", "#f97316", &[C::Adventure, C::Nature]),
            POIType::RaftingPoint => ("Rafting Point", "🚣", "#ea580c", &[C::Adventure]),
            POIType::Paragliding => ("Paragliding", "🪂", "#f97316", &[C::Adventure]),
            POIType::Fort => ("Fort", "🏰", "#78350f", &[C::Heritage, C::Tourist]),
            POIType::Palace => ("Palace", "👑", "#a16207", &[C::Heritage, C::Tourist]),
            POIType::MechanicShop => ("Mechanic", "🔧", "#64748b", &[C::Services]),
            POIType::PostOffice => ("Post Office", "📮", "#dc2626", &[C::Services]),
            POIType::Atm => ("ATM", "🏧", "#0d9488", &[C::Finance]),
            POIType::Bank => ("Bank", "🏦", "#0f766e", &[C::Finance]),
            POIType::CurrencyExchange => ("Currency Exchange", "💱", "#0d9488", &[C::Finance]),
            POIType::RestArea => ("Rest Area", "🪑", "#84cc16", &[C::Rest]),
            POIType::PublicToilet => ("Public Toilet", "🚻", "#64748b", &[C::Rest, C::Services]),
            POIType::Playground => ("Playground", "🛝", "#06b6d4", &[C::Family]),
            POIType::Bar => ("Bar", "🍺", "#6366f1", &[C::Nightlife, C::Food]),
            POIType::Nightclub => ("Nightclub", "🪩", "#4338ca", &[C::Nightlife]),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn every_type_has_info() {
        assert_eq!(POI_TYPE_INFO.len(), POIType::all().len());
        for t in POIType::all() {
            let info = t.info();
            assert_eq!(info.poi_type, t);
            assert!(!info.categories.is_empty(), "{} has no categories", t);
            assert!(!rtutil::contains_duplicates(&info.categories));
        }
    }

    #[test]
    fn categories_and_types_agree() {
        assert_eq!(POI_CATEGORIES.len(), 18);
        for c in POICategory::all() {
            let info = c.info();
            assert_eq!(info.category, c);
            assert!(!info.types.is_empty(), "nothing belongs to {}", c);
            for t in &info.types {
                assert!(t.info().categories.contains(&c));
            }
        }

        for t in POIType::all() {
            for c in &t.info().categories {
                assert!(POI_CATEGORIES.contains_key(c));
                assert!(c.info().types.contains(&t), "{} missing from {}", t, c);
            }
            assert!(POICategory::all()
                .into_iter()
                .any(|c| c.info().types.contains(&t)));
        }
    }

    #[test]
    fn string_forms() {
        assert_eq!(POIType::PetrolPump.to_string(), "petrol_pump");
        assert_eq!(POIType::from_str("ev_charger").unwrap(), POIType::EvCharger);
        assert!(POIType::from_str("spaceport").is_err());
        assert_eq!(
            POICategory::from_str("nightlife").unwrap(),
            POICategory::Nightlife
        );
    }
}
