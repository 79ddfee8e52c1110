use super::HealthRule;
use crate::models::{Finding, Observation, PlantProfile};

/// Points lost per degree away from the middle of the optimal band
const PENALTY_PER_DEGREE: f64 = 2.0;
const MAX_PENALTY: f64 = 30.0;

/// Air temperature stress rule
///
/// Fires when temperature leaves the crop's optimal band. The penalty scales
/// with distance from the band midpoint rather than from the violated edge,
/// capped at 30 points.
pub struct TemperatureRule;

impl HealthRule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn name(&self) -> &'static str {
        "Temperature Stress"
    }

    fn evaluate(&self, profile: &PlantProfile, obs: &Observation) -> Option<Finding> {
        let range = profile.optimal_conditions.temperature;
        let temp = obs.temperature_c;

        if range.contains(temp) {
            return None;
        }

        let penalty = (PENALTY_PER_DEGREE * range.deviation(temp)).min(MAX_PENALTY);

        let (issue, recommendation) = if range.is_above(temp) {
            (
                format!(
                    "Temperature too high for {} ({:.1}°C, optimal {}°C) - heat stress",
                    profile.name, temp, range
                ),
                format!(
                    "Provide shade or cooling to bring temperature down into the {}°C range",
                    range
                ),
            )
        } else {
            (
                format!(
                    "Temperature too low for {} ({:.1}°C, optimal {}°C) - cold stress",
                    profile.name, temp, range
                ),
                format!(
                    "Use row covers or heating to raise temperature into the {}°C range",
                    range
                ),
            )
        };

        Some(Finding::new(self.id(), penalty, issue, recommendation))
    }
}
