pub mod simulated;

pub use simulated::SimulatedWeather;

use crate::models::WeatherReport;
use chrono::NaiveDate;

/// A provider of current conditions plus a short daily forecast
pub trait WeatherSource {
    fn name(&self) -> &'static str;

    /// Report anchored on `today`; forecast day 0 is `today`.
    fn current(&self, today: NaiveDate) -> WeatherReport;
}
