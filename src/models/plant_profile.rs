use serde::Serialize;

/// Inclusive numeric band, used for optimal conditions and stage heights
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn is_below(&self, value: f64) -> bool {
        value < self.min
    }

    pub fn is_above(&self, value: f64) -> bool {
        value > self.max
    }

    /// Absolute distance from the middle of the band
    pub fn deviation(&self, value: f64) -> f64 {
        (value - self.midpoint()).abs()
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutrientRanges {
    pub nitrogen: ValueRange,
    pub phosphorus: ValueRange,
    pub potassium: ValueRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimalConditions {
    pub temperature: ValueRange,
    pub humidity: ValueRange,
    pub soil_moisture: ValueRange,
    pub nutrients: NutrientRanges,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageBand {
    pub height_cm: ValueRange,
    pub duration_days: u32,
}

impl StageBand {
    pub const fn new(min_cm: f64, max_cm: f64, duration_days: u32) -> Self {
        Self {
            height_cm: ValueRange::new(min_cm, max_cm),
            duration_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthStages {
    pub seedling: StageBand,
    pub vegetative: StageBand,
    pub flowering: StageBand,
    pub fruiting: Option<StageBand>,
}

impl GrowthStages {
    /// Stage bands in evaluation order. Fruiting is skipped when the crop has none.
    pub fn ordered(&self) -> Vec<(GrowthStage, &StageBand)> {
        let mut stages = vec![
            (GrowthStage::Seedling, &self.seedling),
            (GrowthStage::Vegetative, &self.vegetative),
            (GrowthStage::Flowering, &self.flowering),
        ];
        if let Some(ref fruiting) = self.fruiting {
            stages.push((GrowthStage::Fruiting, fruiting));
        }
        stages
    }

    /// Resolve a stage from plant height.
    ///
    /// Bands overlap in the catalog, so the first band containing the height
    /// wins. Heights under the seedling band are `EarlySeedling`; anything
    /// else that matches no band is `Mature`.
    pub fn stage_for_height(&self, height_cm: f64) -> GrowthStage {
        if let Some((stage, _)) = self
            .ordered()
            .into_iter()
            .find(|(_, band)| band.height_cm.contains(height_cm))
        {
            return stage;
        }

        if self.seedling.height_cm.is_below(height_cm) {
            GrowthStage::EarlySeedling
        } else {
            GrowthStage::Mature
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    EarlySeedling,
    Seedling,
    Vegetative,
    Flowering,
    Fruiting,
    Mature,
}

impl GrowthStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthStage::EarlySeedling => "early_seedling",
            GrowthStage::Seedling => "seedling",
            GrowthStage::Vegetative => "vegetative",
            GrowthStage::Flowering => "flowering",
            GrowthStage::Fruiting => "fruiting",
            GrowthStage::Mature => "mature",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GrowthStage::EarlySeedling => "Early Seedling",
            GrowthStage::Seedling => "Seedling",
            GrowthStage::Vegetative => "Vegetative",
            GrowthStage::Flowering => "Flowering",
            GrowthStage::Fruiting => "Fruiting",
            GrowthStage::Mature => "Mature",
        }
    }
}

impl std::fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Leaf color labels grouped by what they indicate for a crop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeafColorIndicators {
    pub healthy: &'static [&'static str],
    pub deficiency: &'static [&'static str],
    pub diseased: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafColorClass {
    Healthy,
    Deficiency,
    Diseased,
    Unrecognized,
}

impl LeafColorIndicators {
    /// Diseased takes precedence over deficiency; unknown labels are not penalised.
    pub fn classify(&self, color: &str) -> LeafColorClass {
        if self.diseased.iter().any(|c| *c == color) {
            LeafColorClass::Diseased
        } else if self.deficiency.iter().any(|c| *c == color) {
            LeafColorClass::Deficiency
        } else if self.healthy.iter().any(|c| *c == color) {
            LeafColorClass::Healthy
        } else {
            LeafColorClass::Unrecognized
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub optimal_conditions: OptimalConditions,
    pub growth_stages: GrowthStages,
    pub leaf_color_indicators: LeafColorIndicators,
    pub common_diseases: &'static [&'static str],
    pub specific_care: &'static [&'static str],
    pub harvest_time: &'static str,
    pub climate: &'static [&'static str],
}

impl PlantProfile {
    pub fn growth_stage(&self, height_cm: f64) -> GrowthStage {
        self.growth_stages.stage_for_height(height_cm)
    }
}

impl std::fmt::Display for PlantProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages(fruiting: Option<StageBand>) -> GrowthStages {
        GrowthStages {
            seedling: StageBand::new(10.0, 30.0, 14),
            vegetative: StageBand::new(30.0, 150.0, 50),
            flowering: StageBand::new(150.0, 250.0, 21),
            fruiting,
        }
    }

    #[test]
    fn value_range_bounds_are_inclusive() {
        let range = ValueRange::new(18.0, 29.0);
        assert!(range.contains(18.0));
        assert!(range.contains(29.0));
        assert!(!range.contains(17.9));
        assert!(range.is_below(17.9));
        assert!(range.is_above(29.1));
        assert!((range.midpoint() - 23.5).abs() < f64::EPSILON);
    }

    #[test]
    fn value_range_display() {
        assert_eq!(ValueRange::new(18.0, 29.0).to_string(), "18-29");
        assert_eq!(ValueRange::new(0.5, 1.5).to_string(), "0.5-1.5");
    }

    #[test]
    fn stage_first_match_wins_on_overlap() {
        let s = stages(Some(StageBand::new(200.0, 300.0, 40)));
        // 200 sits in both flowering and fruiting
        assert_eq!(s.stage_for_height(200.0), GrowthStage::Flowering);
        assert_eq!(s.stage_for_height(30.0), GrowthStage::Seedling);
        assert_eq!(s.stage_for_height(260.0), GrowthStage::Fruiting);
    }

    #[test]
    fn stage_outside_all_bands() {
        let s = stages(Some(StageBand::new(200.0, 300.0, 40)));
        assert_eq!(s.stage_for_height(5.0), GrowthStage::EarlySeedling);
        assert_eq!(s.stage_for_height(301.0), GrowthStage::Mature);
    }

    #[test]
    fn stage_without_fruiting_band() {
        let s = stages(None);
        assert_eq!(s.ordered().len(), 3);
        assert_eq!(s.stage_for_height(260.0), GrowthStage::Mature);
    }

    #[test]
    fn leaf_color_classification() {
        let indicators = LeafColorIndicators {
            healthy: &["green", "dark-green"],
            deficiency: &["light-green", "yellow-green"],
            diseased: &["yellow", "brown"],
        };
        assert_eq!(indicators.classify("green"), LeafColorClass::Healthy);
        assert_eq!(
            indicators.classify("yellow-green"),
            LeafColorClass::Deficiency
        );
        assert_eq!(indicators.classify("brown"), LeafColorClass::Diseased);
        assert_eq!(indicators.classify("purple"), LeafColorClass::Unrecognized);
        assert_eq!(indicators.classify("Brown"), LeafColorClass::Unrecognized);
    }

    #[test]
    fn growth_stage_labels() {
        assert_eq!(GrowthStage::EarlySeedling.as_str(), "early_seedling");
        assert_eq!(GrowthStage::Mature.to_string(), "mature");
        assert_eq!(GrowthStage::Fruiting.label(), "Fruiting");
    }
}
