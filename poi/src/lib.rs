//! Points of interest: the fixed taxonomy of categories and types, the POI record itself, and
//! the filters used by discovery screens.

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub use crate::filter::{
    by_categories, by_category, count_by_category, nearby, search, top_rated,
    with_distances_from, DEFAULT_NEARBY_RADIUS,
};
pub use crate::poi::{load_pois, Contact, PriceLevel, POI};
pub use crate::taxonomy::{
    CategoryInfo, POICategory, POIType, TypeInfo, POI_CATEGORIES, POI_TYPE_INFO,
};

mod filter;
mod poi;
mod taxonomy;
