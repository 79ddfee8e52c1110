use super::HealthRule;
use crate::models::{Finding, Observation, PlantProfile};

const NITROGEN_DEFICIENCY_PENALTY: f64 = 20.0;
const NITROGEN_EXCESS_PENALTY: f64 = 15.0;
const PHOSPHORUS_DEFICIENCY_PENALTY: f64 = 15.0;
const POTASSIUM_DEFICIENCY_PENALTY: f64 = 15.0;

/// Nitrogen rule
///
/// Low nitrogen stunts leafy growth; too much pushes foliage at the expense
/// of flowering.
pub struct NitrogenRule;

impl HealthRule for NitrogenRule {
    fn id(&self) -> &'static str {
        "nitrogen"
    }

    fn name(&self) -> &'static str {
        "Nitrogen Level"
    }

    fn evaluate(&self, profile: &PlantProfile, obs: &Observation) -> Option<Finding> {
        let range = profile.optimal_conditions.nutrients.nitrogen;
        let nitrogen = obs.nitrogen_ppm;

        if range.is_below(nitrogen) {
            Some(Finding::new(
                self.id(),
                NITROGEN_DEFICIENCY_PENALTY,
                format!(
                    "Nitrogen deficiency for {} ({:.0} ppm, optimal {} ppm)",
                    profile.name, nitrogen, range
                ),
                format!("Apply nitrogen-rich fertilizer to reach {} ppm", range),
            ))
        } else if range.is_above(nitrogen) {
            Some(Finding::new(
                self.id(),
                NITROGEN_EXCESS_PENALTY,
                format!(
                    "Excess nitrogen for {} ({:.0} ppm, optimal {} ppm) - risk of delayed flowering",
                    profile.name, nitrogen, range
                ),
                format!(
                    "Hold off on nitrogen fertilizer until levels fall back to {} ppm",
                    range
                ),
            ))
        } else {
            None
        }
    }
}

/// Phosphorus rule - only deficiency is penalised
pub struct PhosphorusRule;

impl HealthRule for PhosphorusRule {
    fn id(&self) -> &'static str {
        "phosphorus"
    }

    fn name(&self) -> &'static str {
        "Phosphorus Level"
    }

    fn evaluate(&self, profile: &PlantProfile, obs: &Observation) -> Option<Finding> {
        let range = profile.optimal_conditions.nutrients.phosphorus;
        let phosphorus = obs.phosphorus_ppm;

        if !range.is_below(phosphorus) {
            return None;
        }

        Some(Finding::new(
            self.id(),
            PHOSPHORUS_DEFICIENCY_PENALTY,
            format!(
                "Phosphorus deficiency for {} ({:.0} ppm, optimal {} ppm) - weak root development",
                profile.name, phosphorus, range
            ),
            format!(
                "Add a phosphorus supplement to the soil to reach {} ppm",
                range
            ),
        ))
    }
}

/// Potassium rule - only deficiency is penalised
pub struct PotassiumRule;

impl HealthRule for PotassiumRule {
    fn id(&self) -> &'static str {
        "potassium"
    }

    fn name(&self) -> &'static str {
        "Potassium Level"
    }

    fn evaluate(&self, profile: &PlantProfile, obs: &Observation) -> Option<Finding> {
        let range = profile.optimal_conditions.nutrients.potassium;
        let potassium = obs.potassium_ppm;

        if !range.is_below(potassium) {
            return None;
        }

        Some(Finding::new(
            self.id(),
            POTASSIUM_DEFICIENCY_PENALTY,
            format!(
                "Potassium deficiency for {} ({:.0} ppm, optimal {} ppm) - reduced disease resistance",
                profile.name, potassium, range
            ),
            format!("Apply potassium-rich fertilizer to reach {} ppm", range),
        ))
    }
}
