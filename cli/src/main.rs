//! A multi-tool for poking at trip planning data from the command line. Everything is printed as
//! JSON on STDOUT; logs go to STDERR.

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod find_pois;
mod plan_route;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use structopt::StructOpt;
use strum::IntoEnumIterator;

use geom::LonLat;
use poi::{POICategory, POI_CATEGORIES};
use trips::{TravelMode, Trip, TripPlan};

#[derive(StructOpt)]
#[structopt(name = "rtcli", about = "The roadtrip multi-tool")]
enum Command {
    /// Print every POI category and the types belonging to it
    Categories {
        /// If set, count how many POIs from this JSON file fall into each category instead
        #[structopt(long)]
        pois: Option<String>,
    },
    /// List POIs close to a point, closest first
    Nearby {
        /// The path to a JSON list of POIs
        #[structopt()]
        pois: String,
        /// Where to search from, as "longitude,latitude"
        #[structopt(long)]
        from: LonLat,
        /// How far to look. Defaults to 10km.
        #[structopt(long)]
        radius_km: Option<f64>,
    },
    /// Search POIs by text, category, and rating
    Search {
        /// The path to a JSON list of POIs
        #[structopt()]
        pois: String,
        /// Matched case-insensitively against names, addresses, and descriptions
        #[structopt(long, default_value = "")]
        query: String,
        /// Only keep POIs in these categories, like `food` or `fuel`. Repeatable.
        #[structopt(long)]
        category: Vec<POICategory>,
        /// Only keep POIs rated at least this much, best first
        #[structopt(long)]
        min_rating: Option<f64>,
    },
    /// Generate the fastest, scenic, and bypass alternatives between two points
    Routes {
        /// Where the trip starts, as "longitude,latitude"
        #[structopt(long)]
        from: LonLat,
        /// Where the trip ends, as "longitude,latitude"
        #[structopt(long)]
        to: LonLat,
        /// The path to a JSON file overriding the default route options
        #[structopt(long)]
        options: Option<String>,
        /// The path to a JSON list of reported road issues. Only issues active right now are
        /// used.
        #[structopt(long)]
        issues: Option<String>,
        /// Instead of printing the alternatives, compare the recommended one against the others
        #[structopt(long)]
        compare: bool,
    },
    /// Make up a weather forecast
    Forecast {
        /// How many days to forecast
        #[structopt(long, default_value = "3")]
        days: usize,
        /// A seed for generating random numbers
        #[structopt(long, default_value = "42")]
        rng_seed: u64,
        /// The first day of the forecast, like 2025-06-01. Defaults to today.
        #[structopt(long)]
        start: Option<NaiveDate>,
    },
    /// Print the default packing checklists
    Checklist {
        /// drive, bike, walk, trek, or transit
        #[structopt(long)]
        mode: TravelMode,
        /// Is more than one person going?
        #[structopt(long)]
        group: bool,
    },
    /// Describe every way of traveling
    Modes,
    /// Turn a JSON trip plan into a full trip, with checklists and reminders filled out
    PlanTrip {
        /// The path to a JSON trip plan
        #[structopt()]
        plan: String,
        /// The ID to give the new trip
        #[structopt(long, default_value = "trip-1")]
        id: String,
        /// Also write the trip to this path
        #[structopt(long)]
        output: Option<String>,
    },
    /// Print reminder times for a trip plan
    Reminders {
        /// The path to a JSON trip plan
        #[structopt()]
        plan: String,
    },
    /// Print recommendations for an interest, like `food` or `spiritual`
    Interest {
        #[structopt()]
        interest: String,
        #[structopt(long, default_value = "drive")]
        mode: TravelMode,
    },
}

fn main() -> Result<()> {
    rtutil::logger::setup();

    // Short implementations can stay in this file
    match Command::from_args() {
        Command::Categories { pois } => {
            if let Some(path) = pois {
                find_pois::count(&path)?;
            } else {
                println!("{}", rtutil::to_json(&*POI_CATEGORIES));
            }
        }
        Command::Nearby {
            pois,
            from,
            radius_km,
        } => find_pois::nearby(&pois, from, radius_km)?,
        Command::Search {
            pois,
            query,
            category,
            min_rating,
        } => find_pois::search(&pois, &query, &category, min_rating)?,
        Command::Routes {
            from,
            to,
            options,
            issues,
            compare,
        } => plan_route::run(from, to, options, issues, compare)?,
        Command::Forecast {
            days,
            rng_seed,
            start,
        } => forecast(days, rng_seed, start),
        Command::Checklist { mode, group } => {
            println!(
                "{}",
                rtutil::to_json(&trips::default_checklists(mode, group))
            );
        }
        Command::Modes => {
            let modes: Vec<_> = TravelMode::iter().map(|m| (m, m.info())).collect();
            println!("{}", rtutil::to_json(&modes));
        }
        Command::PlanTrip { plan, id, output } => {
            let trip = plan_trip(&plan, id)?;
            if let Some(path) = output {
                rtutil::write_json(&path, &trip)?;
            }
            println!("{}", rtutil::to_json(&trip));
        }
        Command::Reminders { plan } => {
            let trip = plan_trip(&plan, "trip-1".to_string())?;
            println!("{}", rtutil::to_json(&trip.reminders));
        }
        Command::Interest { interest, mode } => {
            println!(
                "{}",
                rtutil::to_json(trips::interest_based_info(&interest, mode))
            );
        }
    }
    Ok(())
}

fn forecast(days: usize, rng_seed: u64, start: Option<NaiveDate>) {
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    let mut rng = XorShiftRng::seed_from_u64(rng_seed);
    let start = start.unwrap_or_else(|| Utc::now().date_naive());
    let forecast = routes::generate_weather_forecast(days, start, &mut rng);
    println!("{}", rtutil::to_json(&forecast));
}

fn plan_trip(path: &str, id: String) -> Result<Trip> {
    let plan: TripPlan = rtutil::read_json(path)?;
    let mut trip = Trip::new(id, plan, Utc::now());
    trip.reminders = trips::generate_smart_reminders(&trip);
    // Still print problematic trips, so they can be fixed up by hand
    if let Err(err) = trip.validate() {
        warn!("{} has problems: {}", path, err);
    }
    Ok(trip)
}
