use super::plant_profile::{
    GrowthStages, LeafColorIndicators, NutrientRanges, OptimalConditions, PlantProfile, StageBand,
    ValueRange,
};

const STANDARD_LEAF_COLORS: LeafColorIndicators = LeafColorIndicators {
    healthy: &["green", "dark-green"],
    deficiency: &["light-green", "yellow-green"],
    diseased: &["yellow", "brown"],
};

/// Built-in crop reference table, in display order
pub const PLANT_CATALOG: &[PlantProfile] = &[
    PlantProfile {
        id: "tomato",
        name: "Tomato",
        category: "Vegetable",
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(18.0, 29.0),
            humidity: ValueRange::new(60.0, 80.0),
            soil_moisture: ValueRange::new(60.0, 85.0),
            nutrients: NutrientRanges {
                nitrogen: ValueRange::new(25.0, 40.0),
                phosphorus: ValueRange::new(15.0, 25.0),
                potassium: ValueRange::new(20.0, 35.0),
            },
        },
        growth_stages: GrowthStages {
            seedling: StageBand::new(5.0, 15.0, 21),
            vegetative: StageBand::new(15.0, 60.0, 35),
            flowering: StageBand::new(60.0, 120.0, 28),
            fruiting: Some(StageBand::new(80.0, 150.0, 45)),
        },
        leaf_color_indicators: LeafColorIndicators {
            healthy: &["dark-green", "green"],
            deficiency: &["light-green", "yellow-green"],
            diseased: &["yellow", "brown"],
        },
        common_diseases: &["Blight", "Mosaic Virus", "Fusarium Wilt"],
        specific_care: &[
            "Provide support stakes for tall varieties",
            "Prune suckers regularly",
            "Deep watering 2-3 times per week",
            "Mulch around base to retain moisture",
        ],
        harvest_time: "75-85 days from transplant",
        climate: &["Warm temperate", "Mediterranean", "Subtropical"],
    },
    PlantProfile {
        id: "wheat",
        name: "Wheat",
        category: "Cereal",
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(12.0, 25.0),
            humidity: ValueRange::new(40.0, 70.0),
            soil_moisture: ValueRange::new(40.0, 70.0),
            nutrients: NutrientRanges {
                nitrogen: ValueRange::new(30.0, 50.0),
                phosphorus: ValueRange::new(20.0, 30.0),
                potassium: ValueRange::new(15.0, 25.0),
            },
        },
        growth_stages: GrowthStages {
            seedling: StageBand::new(2.0, 10.0, 14),
            vegetative: StageBand::new(10.0, 40.0, 60),
            flowering: StageBand::new(40.0, 80.0, 21),
            fruiting: Some(StageBand::new(60.0, 100.0, 35)),
        },
        leaf_color_indicators: STANDARD_LEAF_COLORS,
        common_diseases: &["Rust", "Smut", "Powdery Mildew"],
        specific_care: &[
            "Plant in well-drained soil",
            "Apply nitrogen fertilizer in split doses",
            "Monitor for pest infestations",
            "Ensure good air circulation",
        ],
        harvest_time: "110-130 days from sowing",
        climate: &["Temperate", "Continental", "Mediterranean"],
    },
    PlantProfile {
        id: "rice",
        name: "Rice",
        category: "Cereal",
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(20.0, 35.0),
            humidity: ValueRange::new(70.0, 90.0),
            soil_moisture: ValueRange::new(80.0, 100.0),
            nutrients: NutrientRanges {
                nitrogen: ValueRange::new(35.0, 55.0),
                phosphorus: ValueRange::new(18.0, 28.0),
                potassium: ValueRange::new(25.0, 40.0),
            },
        },
        growth_stages: GrowthStages {
            seedling: StageBand::new(5.0, 20.0, 21),
            vegetative: StageBand::new(20.0, 60.0, 45),
            flowering: StageBand::new(60.0, 100.0, 35),
            fruiting: Some(StageBand::new(80.0, 120.0, 30)),
        },
        leaf_color_indicators: STANDARD_LEAF_COLORS,
        common_diseases: &["Blast", "Bacterial Blight", "Sheath Rot"],
        specific_care: &[
            "Maintain consistent water levels",
            "Apply organic matter regularly",
            "Control weeds in early stages",
            "Monitor water pH levels",
        ],
        harvest_time: "120-150 days from sowing",
        climate: &["Tropical", "Subtropical", "Monsoon"],
    },
    PlantProfile {
        id: "maize",
        name: "Maize (Corn)",
        category: "Cereal",
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(15.0, 32.0),
            humidity: ValueRange::new(50.0, 75.0),
            soil_moisture: ValueRange::new(50.0, 80.0),
            nutrients: NutrientRanges {
                nitrogen: ValueRange::new(40.0, 60.0),
                phosphorus: ValueRange::new(25.0, 35.0),
                potassium: ValueRange::new(30.0, 45.0),
            },
        },
        growth_stages: GrowthStages {
            seedling: StageBand::new(10.0, 30.0, 14),
            vegetative: StageBand::new(30.0, 150.0, 50),
            flowering: StageBand::new(150.0, 250.0, 21),
            fruiting: Some(StageBand::new(200.0, 300.0, 40)),
        },
        leaf_color_indicators: LeafColorIndicators {
            healthy: &["dark-green", "green"],
            deficiency: &["light-green", "yellow-green"],
            diseased: &["yellow", "brown"],
        },
        common_diseases: &["Leaf Blight", "Smut", "Downy Mildew"],
        specific_care: &[
            "Hill up soil around base for support",
            "Side-dress with nitrogen mid-season",
            "Ensure deep root zone moisture",
            "Watch for corn borer damage",
        ],
        harvest_time: "90-120 days from planting",
        climate: &["Temperate", "Subtropical", "Continental"],
    },
    PlantProfile {
        id: "cotton",
        name: "Cotton",
        category: "Fiber Crop",
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(20.0, 35.0),
            humidity: ValueRange::new(45.0, 70.0),
            soil_moisture: ValueRange::new(45.0, 75.0),
            nutrients: NutrientRanges {
                nitrogen: ValueRange::new(30.0, 45.0),
                phosphorus: ValueRange::new(20.0, 30.0),
                potassium: ValueRange::new(25.0, 40.0),
            },
        },
        growth_stages: GrowthStages {
            seedling: StageBand::new(5.0, 15.0, 21),
            vegetative: StageBand::new(15.0, 80.0, 70),
            flowering: StageBand::new(60.0, 120.0, 45),
            fruiting: Some(StageBand::new(80.0, 150.0, 50)),
        },
        leaf_color_indicators: STANDARD_LEAF_COLORS,
        common_diseases: &["Bollworm", "Fusarium Wilt", "Bacterial Blight"],
        specific_care: &[
            "Regular weeding in early stages",
            "Monitor for bollworm infestation",
            "Avoid overwatering during flowering",
            "Apply potash during boll formation",
        ],
        harvest_time: "160-200 days from sowing",
        climate: &["Semi-arid", "Subtropical", "Mediterranean"],
    },
    PlantProfile {
        id: "potato",
        name: "Potato",
        category: "Tuber Crop",
        optimal_conditions: OptimalConditions {
            temperature: ValueRange::new(15.0, 24.0),
            humidity: ValueRange::new(65.0, 85.0),
            soil_moisture: ValueRange::new(55.0, 80.0),
            nutrients: NutrientRanges {
                nitrogen: ValueRange::new(20.0, 35.0),
                phosphorus: ValueRange::new(25.0, 40.0),
                potassium: ValueRange::new(30.0, 50.0),
            },
        },
        growth_stages: GrowthStages {
            seedling: StageBand::new(5.0, 15.0, 21),
            vegetative: StageBand::new(15.0, 40.0, 45),
            flowering: StageBand::new(30.0, 60.0, 30),
            fruiting: Some(StageBand::new(40.0, 80.0, 35)),
        },
        leaf_color_indicators: STANDARD_LEAF_COLORS,
        common_diseases: &["Late Blight", "Early Blight", "Potato Scab"],
        specific_care: &[
            "Hill soil around plants regularly",
            "Avoid green tuber exposure to sunlight",
            "Consistent moisture during tuber formation",
            "Rotate crops to prevent disease buildup",
        ],
        harvest_time: "90-120 days from planting",
        climate: &["Temperate", "Cool subtropical", "Highland tropical"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = PLANT_CATALOG.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PLANT_CATALOG.len());
    }

    #[test]
    fn catalog_ranges_are_well_formed() {
        for profile in PLANT_CATALOG {
            let c = &profile.optimal_conditions;
            for range in [
                c.temperature,
                c.humidity,
                c.soil_moisture,
                c.nutrients.nitrogen,
                c.nutrients.phosphorus,
                c.nutrients.potassium,
            ] {
                assert!(range.min < range.max, "bad range in {}", profile.id);
            }
            for (_, band) in profile.growth_stages.ordered() {
                assert!(band.height_cm.min < band.height_cm.max);
            }
        }
    }

    #[test]
    fn leaf_color_sets_are_disjoint() {
        for profile in PLANT_CATALOG {
            let leaf = &profile.leaf_color_indicators;
            for color in leaf.diseased {
                assert!(!leaf.healthy.contains(color));
                assert!(!leaf.deficiency.contains(color));
            }
            for color in leaf.deficiency {
                assert!(!leaf.healthy.contains(color));
            }
        }
    }

    #[test]
    fn every_crop_has_at_least_two_care_tips() {
        for profile in PLANT_CATALOG {
            assert!(profile.specific_care.len() >= 2, "{}", profile.id);
            assert!(!profile.common_diseases.is_empty(), "{}", profile.id);
        }
    }
}
