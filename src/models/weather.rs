use chrono::NaiveDate;
use serde::Serialize;

/// Rain chance above which the forecast raises a heavy rain alert
pub const HEAVY_RAIN_THRESHOLD_PCT: f64 = 70.0;

#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub location: String,
    pub source: &'static str,
    pub current: CurrentConditions,
    pub forecast: Vec<DailyForecast>,
}

impl WeatherReport {
    pub fn heavy_rain_expected(&self) -> bool {
        self.forecast
            .iter()
            .any(|d| d.precipitation_chance_pct > HEAVY_RAIN_THRESHOLD_PCT)
    }

    /// First forecast day over the heavy rain threshold
    pub fn first_heavy_rain_day(&self) -> Option<&DailyForecast> {
        self.forecast
            .iter()
            .find(|d| d.precipitation_chance_pct > HEAVY_RAIN_THRESHOLD_PCT)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CurrentConditions {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_kmh: f64,
    pub condition: WeatherCondition,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyForecast {
    pub label: String,
    pub date: NaiveDate,
    pub high_c: f64,
    pub low_c: f64,
    pub condition: WeatherCondition,
    pub precipitation_chance_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum WeatherCondition {
    #[default]
    Clear,
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rain,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rain => "Rain",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherCondition::Clear | WeatherCondition::Sunny => "☀",
            WeatherCondition::PartlyCloudy | WeatherCondition::Cloudy => "☁",
            WeatherCondition::Rain => "🌧",
        }
    }

    pub fn has_precipitation(&self) -> bool {
        matches!(self, WeatherCondition::Rain)
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(label: &str, chance: f64) -> DailyForecast {
        DailyForecast {
            label: label.into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            high_c: 30.0,
            low_c: 20.0,
            condition: WeatherCondition::Cloudy,
            precipitation_chance_pct: chance,
        }
    }

    fn report(days: Vec<DailyForecast>) -> WeatherReport {
        WeatherReport {
            location: "Test".into(),
            source: "Test",
            current: CurrentConditions {
                temperature_c: 25.0,
                humidity_pct: 60.0,
                wind_speed_kmh: 10.0,
                condition: WeatherCondition::Clear,
            },
            forecast: days,
        }
    }

    #[test]
    fn heavy_rain_threshold_is_exclusive() {
        assert!(!report(vec![day("Today", 70.0)]).heavy_rain_expected());
        let r = report(vec![day("Today", 10.0), day("Tomorrow", 80.0)]);
        assert!(r.heavy_rain_expected());
        assert_eq!(
            r.first_heavy_rain_day().map(|d| d.label.as_str()),
            Some("Tomorrow")
        );
    }

    #[test]
    fn weather_condition_has_precipitation() {
        assert!(WeatherCondition::Rain.has_precipitation());
        assert!(!WeatherCondition::Sunny.has_precipitation());
    }
}
