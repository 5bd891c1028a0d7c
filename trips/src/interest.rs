use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::TravelMode;

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
pub enum InterestType {
    Sightseeing,
    Adventure,
    Spiritual,
    Food,
    Nature,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InterestInfo {
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub suggestions: Vec<&'static str>,
    pub tips: Vec<&'static str>,
    pub best_time: &'static str,
}

lazy_static::lazy_static! {
    static ref INTEREST_INFO: BTreeMap<InterestType, InterestInfo> =
        InterestType::iter().map(|x| (x, describe(x))).collect();
}

impl InterestType {
    pub fn info(self) -> &'static InterestInfo {
        &INTEREST_INFO[&self]
    }
}

/// Recommendations for someone with the given interest. Unrecognized interests get the
/// sightseeing recommendations. The travel mode doesn't influence anything yet.
pub fn interest_based_info(interest: &str, _travel_mode: TravelMode) -> &'static InterestInfo {
    match InterestType::from_str(interest) {
        Ok(x) => x.info(),
        Err(_) => {
            debug!("No recommendations for {}, using sightseeing", interest);
            InterestType::Sightseeing.info()
        }
    }
}

fn describe(x: InterestType) -> InterestInfo {
    match x {
        InterestType::Sightseeing => InterestInfo {
            title: "Sightseeing",
            icon: "🏛️",
            description: "Monuments, forts, museums and viewpoints along the way",
            suggestions: vec![
                "Visit heritage sites early to avoid crowds",
                "Hire a licensed local guide at major monuments",
                "Stop at viewpoints for photos",
            ],
            tips: vec![
                "Carry ID for ticket counters",
                "Check which days monuments are closed",
            ],
            best_time: "October to March",
        },
        InterestType::Adventure => InterestInfo {
            title: "Adventure",
            icon: "🧗",
            description: "Treks, rafting, paragliding and off-road trails",
            suggestions: vec![
                "Book activities with certified operators",
                "Try river rafting on a guided stretch",
                "Plan a day hike to a nearby peak",
            ],
            tips: vec![
                "Check weather before any outdoor activity",
                "Carry a basic first-aid kit",
                "Don't go alone on remote trails",
            ],
            best_time: "March to June, September to November",
        },
        InterestType::Spiritual => InterestInfo {
            title: "Spiritual",
            icon: "🛕",
            description: "Temples, gurudwaras, mosques, churches and ashrams",
            suggestions: vec![
                "Attend a morning or evening aarti",
                "Eat at a langar",
                "Spend a quiet hour at an ashram",
            ],
            tips: vec![
                "Dress modestly and cover your head where expected",
                "Remove footwear before entering",
            ],
            best_time: "Year-round, festivals are busiest",
        },
        InterestType::Food => InterestInfo {
            title: "Food",
            icon: "🍛",
            description: "Dhabas, street food and regional specialties",
            suggestions: vec![
                "Stop at highway dhabas for local dishes",
                "Ask locals for their favorite street stalls",
                "Try the regional sweets",
            ],
            tips: vec![
                "Stick to busy stalls with high turnover",
                "Drink sealed bottled water",
            ],
            best_time: "Year-round",
        },
        InterestType::Nature => InterestInfo {
            title: "Nature",
            icon: "🌿",
            description: "National parks, lakes, waterfalls and hill stations",
            suggestions: vec![
                "Book a morning safari in a national park",
                "Walk to a waterfall after the monsoon",
                "Watch the sunrise from a hilltop",
            ],
            tips: vec![
                "Don't feed wildlife",
                "Carry your trash back out",
                "Keep noise down near animals",
            ],
            best_time: "July to March",
        },
    }
}
