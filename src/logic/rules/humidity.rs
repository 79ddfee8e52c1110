use super::HealthRule;
use crate::models::{Finding, Observation, PlantProfile};

const PENALTY_PER_PERCENT: f64 = 0.5;
const MAX_PENALTY: f64 = 25.0;

/// Relative humidity rule
///
/// Same shape as the temperature rule: half a point per percent away from
/// the band midpoint, capped at 25.
pub struct HumidityRule;

impl HealthRule for HumidityRule {
    fn id(&self) -> &'static str {
        "humidity"
    }

    fn name(&self) -> &'static str {
        "Humidity Balance"
    }

    fn evaluate(&self, profile: &PlantProfile, obs: &Observation) -> Option<Finding> {
        let range = profile.optimal_conditions.humidity;
        let humidity = obs.humidity_pct;

        if range.contains(humidity) {
            return None;
        }

        let penalty = (PENALTY_PER_PERCENT * range.deviation(humidity)).min(MAX_PENALTY);

        let (issue, recommendation) = if range.is_above(humidity) {
            (
                format!(
                    "Humidity too high for {} ({:.0}%, optimal {}%) - fungal disease risk",
                    profile.name, humidity, range
                ),
                format!(
                    "Improve ventilation and air circulation to bring humidity down to {}%",
                    range
                ),
            )
        } else {
            (
                format!(
                    "Humidity too low for {} ({:.0}%, optimal {}%) - moisture loss through leaves",
                    profile.name, humidity, range
                ),
                format!(
                    "Mist plants or irrigate more often to raise humidity to {}%",
                    range
                ),
            )
        };

        Some(Finding::new(self.id(), penalty, issue, recommendation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::rules::test_support::{optimal_observation, profile};

    #[test]
    fn humid_air_penalty() {
        // rice 70-90, midpoint 80
        let rice = profile("rice");
        let mut obs = optimal_observation(rice);
        obs.humidity_pct = 100.0;
        let finding = HumidityRule.evaluate(rice, &obs).unwrap();
        assert!((finding.penalty - 10.0).abs() < 1e-9);
        assert!(finding.issue.contains("too high"));
        assert!(finding.issue.contains("70-90%"));
    }

    #[test]
    fn dry_air_penalty() {
        let rice = profile("rice");
        let mut obs = optimal_observation(rice);
        obs.humidity_pct = 60.0;
        let finding = HumidityRule.evaluate(rice, &obs).unwrap();
        assert!((finding.penalty - 10.0).abs() < 1e-9);
        assert!(finding.issue.contains("too low"));
    }

    #[test]
    fn penalty_is_capped() {
        let rice = profile("rice");
        let mut obs = optimal_observation(rice);
        obs.humidity_pct = -200.0;
        let finding = HumidityRule.evaluate(rice, &obs).unwrap();
        assert_eq!(finding.penalty, MAX_PENALTY);
    }

    #[test]
    fn inside_band_is_clean() {
        let rice = profile("rice");
        let mut obs = optimal_observation(rice);
        obs.humidity_pct = 70.0;
        assert!(HumidityRule.evaluate(rice, &obs).is_none());
    }
}
