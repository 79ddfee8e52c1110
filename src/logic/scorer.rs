use super::rules::RulesEngine;
use super::store::PlantProfileStore;
use crate::models::{
    AnalysisResult, Dimension, HealthStatus, Observation, ParameterAssessment, PlantProfile,
};
use chrono::Utc;

const STARTING_SCORE: f64 = 100.0;
/// Below this score the crop's own care tips are added to the advice
const CARE_TIP_THRESHOLD: f64 = 70.0;
const MAX_CARE_TIPS: usize = 2;

/// Scores an observation against the crop's optimal envelope.
///
/// Holds the profile store and the rule set. Both are immutable, so one
/// scorer can be shared for the lifetime of the process.
pub struct HealthScorer {
    store: PlantProfileStore,
    engine: RulesEngine,
}

impl HealthScorer {
    pub fn new(store: PlantProfileStore) -> Self {
        Self {
            store,
            engine: RulesEngine::new(),
        }
    }

    pub fn store(&self) -> &PlantProfileStore {
        &self.store
    }

    pub fn engine(&self) -> &RulesEngine {
        &self.engine
    }

    /// Score the observation using its own plant id
    pub fn analyze_observation(&self, obs: &Observation) -> AnalysisResult {
        self.analyze(&obs.plant_id, obs)
    }

    /// Score `obs` against the profile named by `profile_id`.
    ///
    /// An unknown id yields the error sentinel rather than a `Result::Err`.
    /// Every other input is accepted as given, however implausible.
    pub fn analyze(&self, profile_id: &str, obs: &Observation) -> AnalysisResult {
        let Some(profile) = self.store.get_profile(profile_id) else {
            tracing::warn!(plant_id = %profile_id, "Unknown plant type requested");
            return AnalysisResult::unknown_plant(profile_id);
        };

        let findings = self.engine.evaluate(profile, obs);

        let mut score = STARTING_SCORE;
        let mut issues = Vec::with_capacity(findings.len());
        let mut recommendations = Vec::with_capacity(findings.len() + MAX_CARE_TIPS);
        for finding in &findings {
            tracing::debug!(
                rule = finding.rule_id,
                penalty = finding.penalty,
                "Rule triggered"
            );
            score -= finding.penalty;
            issues.push(finding.issue.clone());
            recommendations.push(finding.recommendation.clone());
        }

        let score = score.max(0.0);

        if score < CARE_TIP_THRESHOLD {
            recommendations.extend(
                profile
                    .specific_care
                    .iter()
                    .take(MAX_CARE_TIPS)
                    .map(|tip| tip.to_string()),
            );
        }

        let growth_stage = profile.growth_stage(obs.height_cm);
        let status = HealthStatus::from_score(score);

        tracing::info!(
            plant = profile.id,
            score,
            status = %status,
            stage = %growth_stage,
            issues = issues.len(),
            "Analysis complete"
        );

        AnalysisResult {
            plant_id: profile.id.to_string(),
            score,
            status,
            growth_stage: Some(growth_stage),
            issues,
            recommendations,
            assessments: assess_parameters(profile, obs),
            findings,
            profile: Some(profile),
            analyzed_at: Utc::now(),
        }
    }
}

impl Default for HealthScorer {
    fn default() -> Self {
        Self::new(PlantProfileStore::builtin())
    }
}

/// Low / Optimal / High for each monitored dimension
pub fn assess_parameters(profile: &PlantProfile, obs: &Observation) -> Vec<ParameterAssessment> {
    let c = &profile.optimal_conditions;
    Dimension::all()
        .iter()
        .map(|&dimension| {
            let (observed, optimal) = match dimension {
                Dimension::Temperature => (obs.temperature_c, c.temperature),
                Dimension::Humidity => (obs.humidity_pct, c.humidity),
                Dimension::SoilMoisture => (obs.soil_moisture_pct, c.soil_moisture),
                Dimension::Nitrogen => (obs.nitrogen_ppm, c.nutrients.nitrogen),
                Dimension::Phosphorus => (obs.phosphorus_ppm, c.nutrients.phosphorus),
                Dimension::Potassium => (obs.potassium_ppm, c.nutrients.potassium),
            };
            ParameterAssessment::new(dimension, observed, optimal)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{optimal_observation, profile};
    use crate::models::{GrowthStage, RangeStatus};

    fn scorer() -> HealthScorer {
        HealthScorer::default()
    }

    #[test]
    fn midpoint_observation_is_perfect_for_every_crop() {
        let scorer = scorer();
        for p in scorer.store().list_all() {
            let obs = optimal_observation(p);
            let result = scorer.analyze(p.id, &obs);
            assert_eq!(result.score, 100.0, "{}", p.id);
            assert_eq!(result.status, HealthStatus::Excellent);
            assert!(result.issues.is_empty(), "{}: {:?}", p.id, result.issues);
            assert!(result.recommendations.is_empty());
            assert!(result
                .assessments
                .iter()
                .all(|a| a.status == RangeStatus::Optimal));
        }
    }

    #[test]
    fn drought_costs_exactly_thirty() {
        let scorer = scorer();
        for p in scorer.store().list_all() {
            let baseline = optimal_observation(p);
            let dry = baseline
                .clone()
                .with_soil_moisture(p.optimal_conditions.soil_moisture.min - 1.0);

            let before = scorer.analyze(p.id, &baseline);
            let after = scorer.analyze(p.id, &dry);

            assert_eq!(before.score - after.score, 30.0, "{}", p.id);
            let drought: Vec<_> = after
                .issues
                .iter()
                .filter(|i| i.contains("drought"))
                .collect();
            assert_eq!(drought.len(), 1);
            assert_eq!(after.issues.len(), 1);
        }
    }

    #[test]
    fn drought_penalty_independent_of_other_dimensions() {
        let scorer = scorer();
        let tomato = profile("tomato");
        let stressed = optimal_observation(tomato).with_climate(26.0, 85.0);
        let dry = stressed.clone().with_soil_moisture(10.0);
        let delta = scorer.analyze("tomato", &stressed).score - scorer.analyze("tomato", &dry).score;
        assert!((delta - 30.0).abs() < 1e-9);
    }

    #[test]
    fn score_never_increases_as_deviation_grows() {
        let scorer = scorer();
        let tomato = profile("tomato");
        let base = optimal_observation(tomato);

        let mut last = f64::MAX;
        for step in 0..40 {
            let obs = base
                .clone()
                .with_climate(23.5 + step as f64, base.humidity_pct);
            let score = scorer.analyze("tomato", &obs).score;
            assert!(score <= last);
            last = score;
        }

        let mut last = f64::MAX;
        for step in 0..40 {
            let obs = base
                .clone()
                .with_climate(base.temperature_c, 70.0 - 3.0 * step as f64);
            let score = scorer.analyze("tomato", &obs).score;
            assert!(score <= last);
            last = score;
        }

        let mut last = f64::MAX;
        for step in 0..20 {
            let n = base.nitrogen_ppm - 2.0 * step as f64;
            let obs = base
                .clone()
                .with_nutrients(n, base.phosphorus_ppm, base.potassium_ppm);
            let score = scorer.analyze("tomato", &obs).score;
            assert!(score <= last);
            last = score;
        }
    }

    #[test]
    fn score_is_clamped_at_zero() {
        let scorer = scorer();
        let obs = Observation::new("potato")
            .with_height(0.0)
            .with_leaf_color("brown")
            .with_climate(-40.0, -500.0)
            .with_soil_moisture(0.0)
            .with_nutrients(0.0, 0.0, 0.0);
        let result = scorer.analyze("potato", &obs);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.status, HealthStatus::Poor);
        assert!(result.total_penalty() > 100.0);
        assert_eq!(result.growth_stage, Some(GrowthStage::EarlySeedling));
    }

    #[test]
    fn score_stays_in_bounds() {
        let scorer = scorer();
        let colors = ["green", "brown", "yellow-green", "blue"];
        for p in scorer.store().list_all() {
            for (i, color) in colors.iter().enumerate() {
                let v = i as f64 * 37.0 - 20.0;
                let obs = Observation::new(p.id)
                    .with_height(v)
                    .with_leaf_color(*color)
                    .with_climate(v, v * 2.0)
                    .with_soil_moisture(v)
                    .with_nutrients(v, v, v);
                let score = scorer.analyze(p.id, &obs).score;
                assert!((0.0..=100.0).contains(&score), "{} {}", p.id, score);
            }
        }
    }

    #[test]
    fn unknown_plant_returns_sentinel() {
        let scorer = scorer();
        let obs = Observation::default();
        let result = scorer.analyze("unknown-id", &obs);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.status, HealthStatus::Error);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.profile.is_none());
        assert!(result.growth_stage.is_none());
        assert!(result.assessments.is_empty());
    }

    #[test]
    fn maize_at_two_metres_is_flowering() {
        let scorer = scorer();
        let maize = profile("maize");
        let obs = optimal_observation(maize).with_height(200.0);
        let result = scorer.analyze("maize", &obs);
        assert_eq!(result.growth_stage, Some(GrowthStage::Flowering));
    }

    #[test]
    fn brown_tomato_leaves_cost_thirty_five() {
        let scorer = scorer();
        let tomato = profile("tomato");
        let obs = optimal_observation(tomato).with_leaf_color("brown");
        let result = scorer.analyze("tomato", &obs);
        assert_eq!(result.score, 65.0);
        assert_eq!(result.issues.len(), 1);
        assert!(result.issues[0].contains("disease"));
        assert_eq!(result.findings[0].penalty, 35.0);
    }

    #[test]
    fn care_tips_added_below_seventy() {
        let scorer = scorer();
        let tomato = profile("tomato");
        let obs = optimal_observation(tomato).with_leaf_color("brown");
        let result = scorer.analyze("tomato", &obs);

        // one rule recommendation plus the first two care tips
        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.recommendations[1], tomato.specific_care[0]);
        assert_eq!(result.recommendations[2], tomato.specific_care[1]);
    }

    #[test]
    fn no_care_tips_at_seventy_or_above() {
        let scorer = scorer();
        let wheat = profile("wheat");
        // waterlogging alone: 100 - 25 = 75
        let obs = optimal_observation(wheat).with_soil_moisture(90.0);
        let result = scorer.analyze("wheat", &obs);
        assert_eq!(result.score, 75.0);
        assert_eq!(result.status, HealthStatus::Good);
        assert_eq!(result.recommendations.len(), 1);
    }

    #[test]
    fn analyze_observation_uses_embedded_id() {
        let scorer = scorer();
        let rice = profile("rice");
        let obs = optimal_observation(rice);
        let result = scorer.analyze_observation(&obs);
        assert_eq!(result.plant_id, "rice");
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn parameter_assessment_flags_direction() {
        let wheat = profile("wheat");
        let obs = optimal_observation(wheat)
            .with_climate(5.0, 90.0)
            .with_nutrients(40.0, 10.0, 20.0);
        let assessments = assess_parameters(wheat, &obs);
        assert_eq!(assessments.len(), 6);
        assert_eq!(assessments[0].status, RangeStatus::Low);
        assert_eq!(assessments[1].status, RangeStatus::High);
        assert_eq!(assessments[2].status, RangeStatus::Optimal);
        assert_eq!(assessments[4].dimension, Dimension::Phosphorus);
        assert_eq!(assessments[4].status, RangeStatus::Low);
    }
}
