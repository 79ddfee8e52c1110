use crate::error::{AgriError, Result};
use crate::models::Observation;
use dialoguer::{Confirm, Input};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_DIR: &str = "agrismart";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

/// Starting values for the assessment form and the `analyze` command
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Preselected plant id; empty means the user must pick one
    pub plant: String,
    pub height_cm: f64,
    pub leaf_color: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub soil_moisture_pct: f64,
    pub nitrogen_ppm: f64,
    pub phosphorus_ppm: f64,
    pub potassium_ppm: f64,
}

impl DefaultsConfig {
    pub fn observation(&self) -> Observation {
        Observation::new(self.plant.clone())
            .with_height(self.height_cm)
            .with_leaf_color(self.leaf_color.clone())
            .with_climate(self.temperature_c, self.humidity_pct)
            .with_soil_moisture(self.soil_moisture_pct)
            .with_nutrients(self.nitrogen_ppm, self.phosphorus_ppm, self.potassium_ppm)
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        let obs = Observation::default();
        Self {
            plant: obs.plant_id,
            height_cm: obs.height_cm,
            leaf_color: obs.leaf_color,
            temperature_c: obs.temperature_c,
            humidity_pct: obs.humidity_pct,
            soil_moisture_pct: obs.soil_moisture_pct,
            nitrogen_ppm: obs.nitrogen_ppm,
            phosphorus_ppm: obs.phosphorus_ppm,
            potassium_ppm: obs.potassium_ppm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WeatherConfig {
    #[serde(default = "default_share_location")]
    pub share_location: bool,
    /// Display label for the farm, replaces the simulated location name
    #[serde(default)]
    pub location: Option<String>,
}

fn default_share_location() -> bool {
    true
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            share_location: default_share_location(),
            location: None,
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(AgriError::Config(format!(
                "Config file not found at {:?}. Run `agrismart init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| AgriError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    /// Load the config if one exists, otherwise fall back to built-in defaults.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if Self::exists(config_override.as_ref()) {
            Self::load(config_override)
        } else {
            tracing::info!("No config file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse YAML after `${VAR}` substitution
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AgriError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let default_path = Self::default_config_path()?;
        if default_path.exists() {
            tracing::debug!(path = %default_path.display(), "Using XDG config");
        }
        Ok(default_path)
    }

    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/agrismart/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgriError::Config("Cannot determine config directory".into()))?
            .join(APP_DIR);
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up AgriSmart!");
        println!();

        println!("Assessment defaults");
        let plant: String = Input::new()
            .with_prompt("  Default plant id (blank for none)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AgriError::Config(format!("Input error: {}", e)))?;

        let base = DefaultsConfig::default();
        let height_cm: f64 = Input::new()
            .with_prompt("  Plant height (cm)")
            .default(base.height_cm)
            .interact_text()
            .map_err(|e| AgriError::Config(format!("Input error: {}", e)))?;

        println!();
        println!("Weather");
        let share_location = Confirm::new()
            .with_prompt("  Share farm location for local weather?")
            .default(true)
            .interact()
            .map_err(|e| AgriError::Config(format!("Input error: {}", e)))?;

        let location: String = Input::new()
            .with_prompt("  Location label (blank for default)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| AgriError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            defaults: DefaultsConfig {
                plant: plant.trim().to_string(),
                height_cm,
                ..base
            },
            weather: WeatherConfig {
                share_location,
                location: Some(location.trim().to_string()).filter(|l| !l.is_empty()),
            },
        };

        let config_path = Self::default_config_path()?;
        config.save(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn save(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let content = format!(
            "# AgriSmart Configuration\n# Generated by `agrismart init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| AgriError::Config(format!("Bad substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            match std::env::var(var_name) {
                Ok(value) => result = result.replace(placeholder, &value),
                Err(_) => tracing::warn!(var = var_name, "Config references unset variable"),
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::parse("{}").unwrap();
        assert_eq!(config.defaults, DefaultsConfig::default());
        assert!(config.weather.share_location);
        assert!(config.weather.location.is_none());
    }

    #[test]
    fn partial_defaults_keep_the_rest() {
        let yaml = "defaults:\n  plant: rice\n  temperature_c: 31.5\nweather:\n  share_location: false\n";
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.defaults.plant, "rice");
        assert_eq!(config.defaults.temperature_c, 31.5);
        assert_eq!(config.defaults.height_cm, 30.0);
        assert_eq!(config.defaults.leaf_color, "green");
        assert!(!config.weather.share_location);
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("AGRISMART_TEST_FARM", "North Field");
        let yaml = "weather:\n  location: \"${AGRISMART_TEST_FARM}\"\n";
        let config = Config::parse(yaml).unwrap();
        assert_eq!(config.weather.location.as_deref(), Some("North Field"));
    }

    #[test]
    fn unset_vars_are_left_in_place() {
        let out = Config::substitute_env_vars("x: ${AGRISMART_SURELY_UNSET_VAR}").unwrap();
        assert_eq!(out, "x: ${AGRISMART_SURELY_UNSET_VAR}");
    }

    #[test]
    fn bad_yaml_is_config_error() {
        let err = Config::parse("defaults: [").unwrap_err();
        assert!(matches!(err, AgriError::Config(_)));
    }

    #[test]
    fn defaults_build_observation() {
        let defaults = DefaultsConfig {
            plant: "maize".into(),
            nitrogen_ppm: 50.0,
            ..DefaultsConfig::default()
        };
        let obs = defaults.observation();
        assert_eq!(obs.plant_id, "maize");
        assert_eq!(obs.nitrogen_ppm, 50.0);
        assert_eq!(obs.soil_moisture_pct, 45.0);
        assert_eq!(obs.potassium_ppm, 18.0);
    }

    #[test]
    fn missing_override_path_is_error() {
        let path = PathBuf::from("/nonexistent/agrismart/config.yaml");
        assert!(!Config::exists(Some(&path)));
        assert!(matches!(Config::load(Some(path)), Err(AgriError::Config(_))));
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("agrismart-test-{}", std::process::id()));
        let path = dir.join("config.yaml");
        let mut config = Config::default();
        config.defaults.plant = "cotton".into();
        config.weather.location = Some("Multan".into());

        config.save(&path).unwrap();
        let loaded = Config::load(Some(path.clone())).unwrap();
        assert_eq!(loaded.defaults.plant, "cotton");
        assert_eq!(loaded.weather.location.as_deref(), Some("Multan"));

        let _ = std::fs::remove_dir_all(dir);
    }
}
