use super::WeatherSource;
use crate::config::WeatherConfig;
use crate::models::{CurrentConditions, DailyForecast, WeatherCondition, WeatherReport};
use chrono::{Duration, NaiveDate};

const FARM_LOCATION: &str = "Punjab, India";
const FALLBACK_LOCATION: &str = "Default Location";

/// (label, high, low, condition, rain chance)
type DaySpec = (&'static str, f64, f64, WeatherCondition, f64);

const FARM_FORECAST: [DaySpec; 4] = [
    ("Today", 32.0, 22.0, WeatherCondition::Sunny, 0.0),
    ("Tomorrow", 30.0, 20.0, WeatherCondition::Cloudy, 10.0),
    ("Day 3", 25.0, 18.0, WeatherCondition::Rain, 80.0),
    ("Day 4", 28.0, 19.0, WeatherCondition::PartlyCloudy, 20.0),
];

const FALLBACK_FORECAST: [DaySpec; 4] = [
    ("Today", 28.0, 18.0, WeatherCondition::Sunny, 0.0),
    ("Tomorrow", 26.0, 16.0, WeatherCondition::Cloudy, 15.0),
    ("Day 3", 22.0, 14.0, WeatherCondition::Rain, 85.0),
    ("Day 4", 25.0, 15.0, WeatherCondition::PartlyCloudy, 25.0),
];

/// Canned weather for offline use.
///
/// With location sharing on it reports the farm dataset; with it off, a
/// generic fallback. A configured location label names the farm, so it
/// replaces the display name only while sharing is on.
#[derive(Debug, Clone, Default)]
pub struct SimulatedWeather {
    share_location: bool,
    location: Option<String>,
}

impl SimulatedWeather {
    pub fn new(share_location: bool) -> Self {
        Self {
            share_location,
            location: None,
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::with_sharing(config, config.share_location)
    }

    /// Source for `config` with sharing forced on or off
    pub fn with_sharing(config: &WeatherConfig, share_location: bool) -> Self {
        let location = if share_location {
            config.location.clone().filter(|l| !l.trim().is_empty())
        } else {
            None
        };
        Self {
            share_location,
            location,
        }
    }

    pub fn shares_location(&self) -> bool {
        self.share_location
    }

    fn build_forecast(today: NaiveDate, days: &[DaySpec]) -> Vec<DailyForecast> {
        days.iter()
            .enumerate()
            .map(|(offset, &(label, high_c, low_c, condition, chance))| DailyForecast {
                label: label.to_string(),
                date: today + Duration::days(offset as i64),
                high_c,
                low_c,
                condition,
                precipitation_chance_pct: chance,
            })
            .collect()
    }
}

impl WeatherSource for SimulatedWeather {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn current(&self, today: NaiveDate) -> WeatherReport {
        let (default_location, current, days) = if self.share_location {
            (
                FARM_LOCATION,
                CurrentConditions {
                    temperature_c: 28.0,
                    humidity_pct: 65.0,
                    wind_speed_kmh: 12.0,
                    condition: WeatherCondition::PartlyCloudy,
                },
                &FARM_FORECAST,
            )
        } else {
            tracing::debug!("Location sharing disabled, using fallback weather");
            (
                FALLBACK_LOCATION,
                CurrentConditions {
                    temperature_c: 25.0,
                    humidity_pct: 60.0,
                    wind_speed_kmh: 10.0,
                    condition: WeatherCondition::Clear,
                },
                &FALLBACK_FORECAST,
            )
        };

        let location = self
            .location
            .clone()
            .unwrap_or_else(|| default_location.to_string());

        WeatherReport {
            location,
            source: self.name(),
            current,
            forecast: Self::build_forecast(today, days),
        }
    }
}
