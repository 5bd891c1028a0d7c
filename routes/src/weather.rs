use chrono::NaiveDate;
use rand::Rng;
use rand_xorshift::XorShiftRng;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FORECAST_DAYS: usize = 3;

/// Conditions as reported by a weather feed. Feeds send free-form strings, so anything
/// unrecognized is kept as `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Rain,
    Thunderstorm,
    Fog,
    Snow,
    Windy,
    Haze,
    Other(String),
}

impl WeatherCondition {
    /// Only some conditions have their own icon; the rest share a generic one.
    pub fn icon(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "☀️",
            WeatherCondition::Cloudy => "☁️",
            WeatherCondition::Rain => "🌧️",
            WeatherCondition::Thunderstorm => "⛈️",
            WeatherCondition::Fog => "🌫️",
            WeatherCondition::Snow => "❄️",
            _ => "🌤️",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::PartlyCloudy => "partly_cloudy",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Thunderstorm => "thunderstorm",
            WeatherCondition::Fog => "fog",
            WeatherCondition::Snow => "snow",
            WeatherCondition::Windy => "windy",
            WeatherCondition::Haze => "haze",
            WeatherCondition::Other(x) => x,
        }
    }
}

impl From<String> for WeatherCondition {
    fn from(x: String) -> WeatherCondition {
        match x.as_str() {
            "clear" => WeatherCondition::Clear,
            "partly_cloudy" => WeatherCondition::PartlyCloudy,
            "cloudy" => WeatherCondition::Cloudy,
            "rain" => WeatherCondition::Rain,
            "thunderstorm" => WeatherCondition::Thunderstorm,
            "fog" => WeatherCondition::Fog,
            "snow" => WeatherCondition::Snow,
            "windy" => WeatherCondition::Windy,
            "haze" => WeatherCondition::Haze,
            _ => WeatherCondition::Other(x),
        }
    }
}

impl From<WeatherCondition> for String {
    fn from(x: WeatherCondition) -> String {
        x.as_str().to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HourlyWeather {
    /// Hour of the day, 0-23
    pub hour: u32,
    pub temperature_c: f64,
    pub condition: WeatherCondition,
    /// Percent, 0-100
    pub precipitation_chance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub date: NaiveDate,
    pub hourly: Vec<HourlyWeather>,
}

impl WeatherForecast {
    pub fn high(&self) -> Option<f64> {
        self.hourly.iter().map(|h| h.temperature_c).reduce(f64::max)
    }

    pub fn low(&self) -> Option<f64> {
        self.hourly.iter().map(|h| h.temperature_c).reduce(f64::min)
    }

    pub fn will_rain(&self) -> bool {
        self.hourly
            .iter()
            .any(|h| h.condition == WeatherCondition::Rain)
    }
}

/// Makes up a forecast for `days` consecutive days beginning with `start`. Each day has samples
/// every 3 hours from 6am through 6pm.
pub fn generate_weather_forecast(
    days: usize,
    start: NaiveDate,
    rng: &mut XorShiftRng,
) -> Vec<WeatherForecast> {
    let choices = [
        WeatherCondition::Clear,
        WeatherCondition::Cloudy,
        WeatherCondition::Rain,
    ];

    let mut forecasts = Vec::new();
    for day in 0..days {
        let mut hourly = Vec::new();
        let mut hour = 6;
        while hour <= 20 {
            hourly.push(HourlyWeather {
                hour,
                temperature_c: rng.gen_range(20.0..30.0),
                condition: choices[rng.gen_range(0..choices.len())].clone(),
                precipitation_chance: rng.gen_range(0.0..100.0),
            });
            hour += 3;
        }
        forecasts.push(WeatherForecast {
            date: start + chrono::Duration::days(day as i64),
            hourly,
        });
    }
    forecasts
}
