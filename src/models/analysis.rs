use super::plant_profile::{GrowthStage, PlantProfile, ValueRange};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
    Error,
}

impl HealthStatus {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            HealthStatus::Excellent
        } else if score >= 60.0 {
            HealthStatus::Good
        } else if score >= 40.0 {
            HealthStatus::Fair
        } else {
            HealthStatus::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Fair => "Fair",
            HealthStatus::Poor => "Poor",
            HealthStatus::Error => "Error",
        }
    }

    /// Binary success indicator used for badges, separate from the tier itself
    pub fn is_positive(&self) -> bool {
        matches!(self, HealthStatus::Excellent | HealthStatus::Good)
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "✔",
            HealthStatus::Good | HealthStatus::Fair => "⚠",
            HealthStatus::Poor | HealthStatus::Error => "✘",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monitored dimensions, in the order the rules evaluate them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Temperature,
    Humidity,
    SoilMoisture,
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl Dimension {
    pub fn all() -> &'static [Dimension] {
        &[
            Dimension::Temperature,
            Dimension::Humidity,
            Dimension::SoilMoisture,
            Dimension::Nitrogen,
            Dimension::Phosphorus,
            Dimension::Potassium,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Temperature => "Temperature",
            Dimension::Humidity => "Humidity",
            Dimension::SoilMoisture => "Soil Moisture",
            Dimension::Nitrogen => "Nitrogen",
            Dimension::Phosphorus => "Phosphorus",
            Dimension::Potassium => "Potassium",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Dimension::Temperature => "°C",
            Dimension::Humidity | Dimension::SoilMoisture => "%",
            Dimension::Nitrogen | Dimension::Phosphorus | Dimension::Potassium => " ppm",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RangeStatus {
    Low,
    Optimal,
    High,
}

impl RangeStatus {
    pub fn of(range: &ValueRange, value: f64) -> Self {
        if range.is_below(value) {
            RangeStatus::Low
        } else if range.is_above(value) {
            RangeStatus::High
        } else {
            RangeStatus::Optimal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeStatus::Low => "Low",
            RangeStatus::Optimal => "Optimal",
            RangeStatus::High => "High",
        }
    }
}

/// One row of the parameter assessment panel
#[derive(Debug, Clone, Serialize)]
pub struct ParameterAssessment {
    pub dimension: Dimension,
    pub observed: f64,
    pub optimal: ValueRange,
    pub status: RangeStatus,
}

impl ParameterAssessment {
    pub fn new(dimension: Dimension, observed: f64, optimal: ValueRange) -> Self {
        Self {
            dimension,
            observed,
            optimal,
            status: RangeStatus::of(&optimal, observed),
        }
    }
}

/// A triggered rule: what it cost and what it reported
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub rule_id: &'static str,
    pub penalty: f64,
    pub issue: String,
    pub recommendation: String,
}

impl Finding {
    pub fn new(
        rule_id: &'static str,
        penalty: f64,
        issue: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            penalty,
            issue: issue.into(),
            recommendation: recommendation.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub plant_id: String,
    pub score: f64,
    pub status: HealthStatus,
    pub growth_stage: Option<GrowthStage>,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub assessments: Vec<ParameterAssessment>,
    pub findings: Vec<Finding>,
    pub profile: Option<&'static PlantProfile>,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    /// Result returned when the plant id is not in the catalog
    pub fn unknown_plant(plant_id: &str) -> Self {
        Self {
            plant_id: plant_id.to_string(),
            score: 0.0,
            status: HealthStatus::Error,
            growth_stage: None,
            issues: vec!["Unknown plant type".to_string()],
            recommendations: vec!["Please select a valid plant type".to_string()],
            assessments: Vec::new(),
            findings: Vec::new(),
            profile: None,
            analyzed_at: Utc::now(),
        }
    }

    pub fn total_penalty(&self) -> f64 {
        self.findings.iter().map(|f| f.penalty).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tiers() {
        assert_eq!(HealthStatus::from_score(100.0), HealthStatus::Excellent);
        assert_eq!(HealthStatus::from_score(80.0), HealthStatus::Excellent);
        assert_eq!(HealthStatus::from_score(79.5), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(60.0), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(59.9), HealthStatus::Fair);
        assert_eq!(HealthStatus::from_score(40.0), HealthStatus::Fair);
        assert_eq!(HealthStatus::from_score(39.0), HealthStatus::Poor);
        assert_eq!(HealthStatus::from_score(0.0), HealthStatus::Poor);
    }

    #[test]
    fn status_positive_indicator() {
        assert!(HealthStatus::Excellent.is_positive());
        assert!(HealthStatus::Good.is_positive());
        assert!(!HealthStatus::Fair.is_positive());
        assert!(!HealthStatus::Poor.is_positive());
        assert!(!HealthStatus::Error.is_positive());
    }

    #[test]
    fn range_status() {
        let range = ValueRange::new(40.0, 60.0);
        assert_eq!(RangeStatus::of(&range, 39.0), RangeStatus::Low);
        assert_eq!(RangeStatus::of(&range, 40.0), RangeStatus::Optimal);
        assert_eq!(RangeStatus::of(&range, 60.0), RangeStatus::Optimal);
        assert_eq!(RangeStatus::of(&range, 61.0), RangeStatus::High);
    }

    #[test]
    fn unknown_plant_sentinel() {
        let result = AnalysisResult::unknown_plant("banana");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.status, HealthStatus::Error);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.growth_stage.is_none());
        assert!(result.profile.is_none());
        assert_eq!(result.total_penalty(), 0.0);
    }
}
