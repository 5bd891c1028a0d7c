//! Planning a trip: who's going, how, what to pack, and when to remind everyone.

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub use crate::checklist::{default_checklists, ChecklistItem, TripChecklist};
pub use crate::interest::{interest_based_info, InterestInfo, InterestType};
pub use crate::mode::{TravelMode, TravelModeInfo};
pub use crate::reminders::generate_smart_reminders;
pub use crate::trip::{
    HealthInfo, TravelerInfo, TravelerRole, Trip, TripLocation, TripPlan, TripStatus,
    VehicleInfo,
};

mod checklist;
mod interest;
mod mode;
mod reminders;
mod trip;
