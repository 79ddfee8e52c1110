pub mod engine;
pub mod humidity;
pub mod leaf_color;
pub mod nutrients;
pub mod soil_moisture;
pub mod temperature;

pub use engine::RulesEngine;

use crate::models::{Finding, Observation, PlantProfile};

/// Trait for crop health rules
pub trait HealthRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule and return a finding if the observation breaks it
    fn evaluate(&self, profile: &PlantProfile, obs: &Observation) -> Option<Finding>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::logic::PlantProfileStore;
    use crate::models::{Observation, PlantProfile};

    pub fn profile(id: &str) -> &'static PlantProfile {
        PlantProfileStore::builtin().get_profile(id).unwrap()
    }

    /// Observation sitting on the midpoint of every optimal band
    pub fn optimal_observation(profile: &PlantProfile) -> Observation {
        let c = &profile.optimal_conditions;
        Observation::new(profile.id)
            .with_height(profile.growth_stages.seedling.height_cm.midpoint())
            .with_leaf_color(profile.leaf_color_indicators.healthy[0])
            .with_climate(c.temperature.midpoint(), c.humidity.midpoint())
            .with_soil_moisture(c.soil_moisture.midpoint())
            .with_nutrients(
                c.nutrients.nitrogen.midpoint(),
                c.nutrients.phosphorus.midpoint(),
                c.nutrients.potassium.midpoint(),
            )
    }
}
