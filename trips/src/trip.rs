use std::collections::BTreeSet;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use geom::{Distance, Duration, LonLat};

use crate::{default_checklists, InterestType, TravelMode, TripChecklist};

/// Nothing restricts which status can follow which; callers set it directly.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TripStatus {
    Draft,
    Planned,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TravelerRole {
    Leader,
    Member,
    Child,
    Elder,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthInfo {
    pub blood_group: Option<String>,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
    pub emergency_contact: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TravelerInfo {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub role: TravelerRole,
    pub health: Option<HealthInfo>,
    pub last_location: Option<LonLat>,
    pub last_seen: Option<DateTime<Utc>>,
}

impl TravelerInfo {
    pub fn update_location(&mut self, pt: LonLat, at: DateTime<Utc>) {
        self.last_location = Some(pt);
        self.last_seen = Some(at);
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VehicleInfo {
    /// car, suv, motorbike, ...
    pub kind: String,
    pub registration: Option<String>,
    pub fuel_type: Option<String>,
    pub seats: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripLocation {
    pub name: String,
    pub location: LonLat,
    pub address: Option<String>,
}

/// What someone fills in when creating a trip. Everything else is derived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_by: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub origin: TripLocation,
    pub destination: TripLocation,
    #[serde(default)]
    pub waypoints: Vec<TripLocation>,
    pub travel_mode: TravelMode,
    pub vehicle: Option<VehicleInfo>,
    #[serde(default)]
    pub travelers: Vec<TravelerInfo>,
    #[serde(default)]
    pub share_location: bool,
    #[serde(default)]
    pub group_chat: bool,
    pub interest: Option<InterestType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: TripStatus,
    pub origin: TripLocation,
    pub destination: TripLocation,
    pub waypoints: Vec<TripLocation>,
    pub travel_mode: TravelMode,
    pub vehicle: Option<VehicleInfo>,
    pub travelers: Vec<TravelerInfo>,
    pub is_group: bool,
    pub checklists: Vec<TripChecklist>,
    pub reminders: Vec<DateTime<Utc>>,
    pub share_location: bool,
    pub group_chat: bool,
    pub interest: Option<InterestType>,
}

impl Trip {
    /// Starts a draft trip with the default checklists for its mode and group size.
    pub fn new<I: Into<String>>(id: I, plan: TripPlan, created_at: DateTime<Utc>) -> Trip {
        let is_group = plan.travelers.len() > 1;
        Trip {
            id: id.into(),
            name: plan.name,
            description: plan.description,
            created_by: plan.created_by,
            created_at,
            start_date: plan.start_date,
            end_date: plan.end_date,
            status: TripStatus::Draft,
            origin: plan.origin,
            destination: plan.destination,
            waypoints: plan.waypoints,
            travel_mode: plan.travel_mode,
            vehicle: plan.vehicle,
            travelers: plan.travelers,
            is_group,
            checklists: default_checklists(plan.travel_mode, is_group),
            reminders: Vec::new(),
            share_location: plan.share_location,
            group_chat: plan.group_chat,
            interest: plan.interest,
        }
    }

    /// Checks the group bookkeeping that nothing else enforces.
    pub fn validate(&self) -> Result<()> {
        if self.is_group && self.travelers.is_empty() {
            bail!("Group trip {} has no travelers", self.id);
        }
        if self.is_group != (self.travelers.len() > 1) {
            bail!(
                "Trip {} has is_group = {}, but {} travelers",
                self.id,
                self.is_group,
                self.travelers.len()
            );
        }
        let leaders = self
            .travelers
            .iter()
            .filter(|t| t.role == TravelerRole::Leader)
            .count();
        if leaders > 1 || (self.is_group && leaders == 0) {
            bail!("Trip {} has {} leaders", self.id, leaders);
        }
        let mut ids = BTreeSet::new();
        for t in &self.travelers {
            if !ids.insert(&t.id) {
                bail!("Trip {} lists traveler {} twice", self.id, t.id);
            }
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                bail!("Trip {} ends at {} before it starts at {}", self.id, end, start);
            }
        }
        Ok(())
    }

    pub fn leader(&self) -> Option<&TravelerInfo> {
        self.travelers
            .iter()
            .find(|t| t.role == TravelerRole::Leader)
    }

    pub fn traveler_mut(&mut self, id: &str) -> Option<&mut TravelerInfo> {
        self.travelers.iter_mut().find(|t| t.id == id)
    }

    /// (checked, total) across every checklist
    pub fn checklist_progress(&self) -> (usize, usize) {
        self.checklists
            .iter()
            .map(|c| c.progress())
            .fold((0, 0), |(a, b), (c, d)| (a + c, b + d))
    }

    /// True once every mandatory item is checked.
    pub fn ready_to_start(&self) -> bool {
        self.checklists
            .iter()
            .all(|c| c.missing_mandatory().is_empty())
    }

    /// How long covering `dist` takes at this trip's typical speed.
    pub fn estimated_duration(&self, dist: Distance) -> Duration {
        dist / self.travel_mode.info().average_speed
    }
}
