use super::HealthRule;
use crate::models::{Finding, LeafColorClass, Observation, PlantProfile};

const DISEASED_PENALTY: f64 = 35.0;
const DEFICIENCY_PENALTY: f64 = 20.0;

/// Leaf color rule
///
/// Classifies the observed color against the crop's indicator sets.
/// Diseased colors point at the crop's common diseases; deficiency colors get
/// a generic nutrient warning. Healthy and unrecognized labels cost nothing.
pub struct LeafColorRule;

impl HealthRule for LeafColorRule {
    fn id(&self) -> &'static str {
        "leaf_color"
    }

    fn name(&self) -> &'static str {
        "Leaf Coloration"
    }

    fn evaluate(&self, profile: &PlantProfile, obs: &Observation) -> Option<Finding> {
        match profile.leaf_color_indicators.classify(&obs.leaf_color) {
            LeafColorClass::Diseased => {
                let diseases = profile.common_diseases.join(", ");
                Some(Finding::new(
                    self.id(),
                    DISEASED_PENALTY,
                    format!(
                        "{} leaves on {} suggest possible disease ({})",
                        obs.leaf_color, profile.name, diseases
                    ),
                    format!(
                        "Inspect plants for signs of {} and remove affected leaves",
                        diseases
                    ),
                ))
            }
            LeafColorClass::Deficiency => Some(Finding::new(
                self.id(),
                DEFICIENCY_PENALTY,
                format!(
                    "{} leaves on {} indicate a nutrient deficiency",
                    obs.leaf_color, profile.name
                ),
                "Test soil nutrients and apply a balanced fertilizer",
            )),
            LeafColorClass::Healthy | LeafColorClass::Unrecognized => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{optimal_observation, profile};

    #[test]
    fn brown_tomato_is_diseased() {
        let tomato = profile("tomato");
        let obs = optimal_observation(tomato).with_leaf_color("brown");
        let finding = LeafColorRule.evaluate(tomato, &obs).unwrap();
        assert_eq!(finding.penalty, DISEASED_PENALTY);
        assert!(finding.issue.contains("Blight"));
        assert!(finding.issue.contains("Fusarium Wilt"));
    }

    #[test]
    fn pale_leaves_are_deficiency() {
        let wheat = profile("wheat");
        let obs = optimal_observation(wheat).with_leaf_color("light-green");
        let finding = LeafColorRule.evaluate(wheat, &obs).unwrap();
        assert_eq!(finding.penalty, DEFICIENCY_PENALTY);
        assert!(finding.issue.contains("deficiency"));
    }

    #[test]
    fn healthy_and_unknown_colors_pass() {
        let rice = profile("rice");
        for color in ["green", "dark-green", "purple", ""] {
            let obs = optimal_observation(rice).with_leaf_color(color);
            assert!(LeafColorRule.evaluate(rice, &obs).is_none(), "{color}");
        }
    }
}
