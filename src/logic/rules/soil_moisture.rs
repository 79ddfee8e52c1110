use super::HealthRule;
use crate::models::{Finding, Observation, PlantProfile};

const DROUGHT_PENALTY: f64 = 30.0;
const WATERLOGGED_PENALTY: f64 = 25.0;

/// Soil moisture rule - flat penalties for drought and waterlogging
pub struct SoilMoistureRule;

impl HealthRule for SoilMoistureRule {
    fn id(&self) -> &'static str {
        "soil_moisture"
    }

    fn name(&self) -> &'static str {
        "Soil Moisture"
    }

    fn evaluate(&self, profile: &PlantProfile, obs: &Observation) -> Option<Finding> {
        let range = profile.optimal_conditions.soil_moisture;
        let moisture = obs.soil_moisture_pct;

        if range.is_below(moisture) {
            Some(Finding::new(
                self.id(),
                DROUGHT_PENALTY,
                format!(
                    "Soil moisture too low for {} ({:.0}%, optimal {}%) - drought stress",
                    profile.name, moisture, range
                ),
                format!(
                    "Increase irrigation frequency to keep soil moisture within {}%",
                    range
                ),
            ))
        } else if range.is_above(moisture) {
            Some(Finding::new(
                self.id(),
                WATERLOGGED_PENALTY,
                format!(
                    "Soil moisture too high for {} ({:.0}%, optimal {}%) - waterlogging and root rot risk",
                    profile.name, moisture, range
                ),
                format!(
                    "Improve drainage and reduce watering until soil moisture is within {}%",
                    range
                ),
            ))
        } else {
            None
        }
    }
}
