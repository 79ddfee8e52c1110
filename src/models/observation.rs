use crate::error::{AgriError, Result};
use serde::{Deserialize, Serialize};

/// Leaf color labels offered by the assessment form, as (value, display name)
pub const LEAF_COLOR_OPTIONS: &[(&str, &str)] = &[
    ("dark-green", "Dark Green"),
    ("green", "Green"),
    ("light-green", "Light Green"),
    ("yellow-green", "Yellow Green"),
    ("yellow", "Yellow"),
    ("brown", "Brown"),
];

pub fn leaf_color_label(value: &str) -> &str {
    LEAF_COLOR_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// One snapshot of measured plant and environment parameters.
///
/// Numeric fields are taken as given; out-of-range values are what the
/// scoring rules exist to flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub plant_id: String,
    pub height_cm: f64,
    pub leaf_color: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub soil_moisture_pct: f64,
    pub nitrogen_ppm: f64,
    pub phosphorus_ppm: f64,
    pub potassium_ppm: f64,
}

impl Observation {
    pub fn new(plant_id: impl Into<String>) -> Self {
        Self {
            plant_id: plant_id.into(),
            ..Self::default()
        }
    }

    pub fn with_height(mut self, height_cm: f64) -> Self {
        self.height_cm = height_cm;
        self
    }

    pub fn with_leaf_color(mut self, leaf_color: impl Into<String>) -> Self {
        self.leaf_color = leaf_color.into();
        self
    }

    pub fn with_climate(mut self, temperature_c: f64, humidity_pct: f64) -> Self {
        self.temperature_c = temperature_c;
        self.humidity_pct = humidity_pct;
        self
    }

    pub fn with_soil_moisture(mut self, soil_moisture_pct: f64) -> Self {
        self.soil_moisture_pct = soil_moisture_pct;
        self
    }

    pub fn with_nutrients(mut self, nitrogen: f64, phosphorus: f64, potassium: f64) -> Self {
        self.nitrogen_ppm = nitrogen;
        self.phosphorus_ppm = phosphorus;
        self.potassium_ppm = potassium;
        self
    }

    /// Boundary check: a plant type must be chosen and every reading must be
    /// a finite number. Magnitudes are not range-checked.
    pub fn validate(&self) -> Result<()> {
        if self.plant_id.trim().is_empty() {
            return Err(AgriError::InvalidInput(
                "Please select a plant type first".into(),
            ));
        }
        for (name, value) in self.readings() {
            if !value.is_finite() {
                return Err(AgriError::InvalidInput(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    fn readings(&self) -> [(&'static str, f64); 7] {
        [
            ("Height", self.height_cm),
            ("Temperature", self.temperature_c),
            ("Humidity", self.humidity_pct),
            ("Soil moisture", self.soil_moisture_pct),
            ("Nitrogen", self.nitrogen_ppm),
            ("Phosphorus", self.phosphorus_ppm),
            ("Potassium", self.potassium_ppm),
        ]
    }
}

impl Default for Observation {
    fn default() -> Self {
        Self {
            plant_id: String::new(),
            height_cm: 30.0,
            leaf_color: "green".into(),
            temperature_c: 25.0,
            humidity_pct: 60.0,
            soil_moisture_pct: 45.0,
            nitrogen_ppm: 20.0,
            phosphorus_ppm: 15.0,
            potassium_ppm: 18.0,
        }
    }
}
