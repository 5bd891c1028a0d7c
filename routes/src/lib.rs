//! Route alternatives between two places: a mock generator standing in for a routing engine,
//! plus the traffic, incident, and weather vocabulary used to describe and compare them.

#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

pub use crate::alternative::{compare_routes, RouteAlternative, RouteComparison, Waypoint};
pub use crate::generate::generate_route_alternatives;
pub use crate::issue::{worst_severity, IssueType, RouteIssue, Severity};
pub use crate::options::{RouteOptions, RouteProfile};
pub use crate::traffic::{TrafficLevel, TrafficSegment};
pub use crate::weather::{
    generate_weather_forecast, HourlyWeather, WeatherCondition, WeatherForecast,
    DEFAULT_FORECAST_DAYS,
};

mod alternative;
mod generate;
mod issue;
mod options;
mod traffic;
mod weather;
