use super::{
    humidity::HumidityRule,
    leaf_color::LeafColorRule,
    nutrients::{NitrogenRule, PhosphorusRule, PotassiumRule},
    soil_moisture::SoilMoistureRule,
    temperature::TemperatureRule,
    HealthRule,
};
use crate::models::{Finding, Observation, PlantProfile};

/// Ordered set of health rules. Findings come back in rule order.
pub struct RulesEngine {
    rules: Vec<Box<dyn HealthRule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn HealthRule>> = vec![
            Box::new(TemperatureRule),
            Box::new(HumidityRule),
            Box::new(SoilMoistureRule),
            Box::new(NitrogenRule),
            Box::new(PhosphorusRule),
            Box::new(PotassiumRule),
            Box::new(LeafColorRule),
        ];

        Self { rules }
    }

    pub fn evaluate(&self, profile: &PlantProfile, obs: &Observation) -> Vec<Finding> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(profile, obs))
            .collect()
    }

    pub fn evaluate_rule(
        &self,
        rule_id: &str,
        profile: &PlantProfile,
        obs: &Observation,
    ) -> Option<Finding> {
        self.rules
            .iter()
            .find(|r| r.id() == rule_id)
            .and_then(|rule| rule.evaluate(profile, obs))
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{optimal_observation, profile};

    #[test]
    fn rules_are_listed_in_evaluation_order() {
        let ids: Vec<_> = RulesEngine::new()
            .list_rules()
            .into_iter()
            .map(|(id, _)| id)
            .collect();
        assert_eq!(
            ids,
            vec![
                "temperature",
                "humidity",
                "soil_moisture",
                "nitrogen",
                "phosphorus",
                "potassium",
                "leaf_color"
            ]
        );
    }

    #[test]
    fn findings_follow_rule_order() {
        let tomato = profile("tomato");
        let obs = optimal_observation(tomato)
            .with_leaf_color("yellow")
            .with_soil_moisture(10.0)
            .with_climate(40.0, 70.0);
        let findings = RulesEngine::new().evaluate(tomato, &obs);
        let ids: Vec<_> = findings.iter().map(|f| f.rule_id).collect();
        assert_eq!(ids, vec!["temperature", "soil_moisture", "leaf_color"]);
    }

    #[test]
    fn evaluate_single_rule() {
        let engine = RulesEngine::new();
        let wheat = profile("wheat");
        let obs = optimal_observation(wheat).with_nutrients(5.0, 25.0, 20.0);
        assert!(engine.evaluate_rule("nitrogen", wheat, &obs).is_some());
        assert!(engine.evaluate_rule("phosphorus", wheat, &obs).is_none());
        assert!(engine.evaluate_rule("no_such_rule", wheat, &obs).is_none());
    }
}
