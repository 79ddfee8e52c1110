use crate::config::{Config, DefaultsConfig};
use crate::datasources::{SimulatedWeather, WeatherSource};
use crate::error::{AgriError, Result};
use crate::logic::{HealthScorer, PlantProfileStore};
use crate::models::{AnalysisResult, Observation, PlantProfile, WeatherReport, LEAF_COLOR_OPTIONS};
use crate::ui::screens::FormField;
use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Assessment,
    Catalog,
    Weather,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::Assessment),
            '2' => Some(Screen::Catalog),
            '3' => Some(Screen::Weather),
            _ => None,
        }
    }
}

/// Assessment form. `observation` always holds the committed values.
pub struct FormState {
    pub focused_field: FormField,
    pub editing: bool,
    pub edit_buffer: String,
    pub plant_index: Option<usize>,
    pub leaf_index: usize,
    pub observation: Observation,
}

impl FormState {
    pub fn from_defaults(defaults: &DefaultsConfig, store: &PlantProfileStore) -> Self {
        let observation = defaults.observation();
        let plant_index = store
            .list_all()
            .iter()
            .position(|p| p.id == observation.plant_id);
        let leaf_index = leaf_position(&observation.leaf_color).unwrap_or(1);

        let mut form = Self {
            focused_field: FormField::Plant,
            editing: false,
            edit_buffer: String::new(),
            plant_index,
            leaf_index,
            observation,
        };
        if plant_index.is_none() {
            form.observation.plant_id.clear();
        }
        form.observation.leaf_color = LEAF_COLOR_OPTIONS[form.leaf_index].0.to_string();
        form
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn value_of(&self, field: FormField) -> String {
        let obs = &self.observation;
        match field {
            FormField::Plant => obs.plant_id.clone(),
            FormField::LeafColor => obs.leaf_color.clone(),
            FormField::Height => obs.height_cm.to_string(),
            FormField::Temperature => obs.temperature_c.to_string(),
            FormField::Humidity => obs.humidity_pct.to_string(),
            FormField::SoilMoisture => obs.soil_moisture_pct.to_string(),
            FormField::Nitrogen => obs.nitrogen_ppm.to_string(),
            FormField::Phosphorus => obs.phosphorus_ppm.to_string(),
            FormField::Potassium => obs.potassium_ppm.to_string(),
        }
    }

    pub fn select_plant(&mut self, store: &PlantProfileStore, index: usize) {
        if let Some(profile) = store.list_all().get(index) {
            self.plant_index = Some(index);
            self.observation.plant_id = profile.id.to_string();
        }
    }

    /// Step the focused select field forward or back, wrapping at the ends
    pub fn cycle(&mut self, store: &PlantProfileStore, forward: bool) {
        match self.focused_field {
            FormField::Plant => {
                let count = store.len();
                if count == 0 {
                    return;
                }
                let index = match (self.plant_index, forward) {
                    (None, true) => 0,
                    (None, false) => count - 1,
                    (Some(i), true) => (i + 1) % count,
                    (Some(i), false) => (i + count - 1) % count,
                };
                self.select_plant(store, index);
            }
            FormField::LeafColor => {
                let count = LEAF_COLOR_OPTIONS.len();
                self.leaf_index = if forward {
                    (self.leaf_index + 1) % count
                } else {
                    (self.leaf_index + count - 1) % count
                };
                self.observation.leaf_color = LEAF_COLOR_OPTIONS[self.leaf_index].0.to_string();
            }
            _ => {}
        }
    }

    pub fn start_editing(&mut self) {
        if self.focused_field.is_select() {
            return;
        }
        self.editing = true;
        self.edit_buffer = self.value_of(self.focused_field);
    }

    pub fn cancel_editing(&mut self) {
        self.editing = false;
        self.edit_buffer.clear();
    }

    /// Commit the edit buffer. On a parse error the previous value is kept.
    pub fn finish_editing(&mut self) -> Result<()> {
        self.editing = false;
        let text = std::mem::take(&mut self.edit_buffer);
        let field = self.focused_field;
        let value: f64 = text.trim().parse().map_err(|_| {
            AgriError::InvalidInput(format!("{} must be a number, got '{}'", field.label(), text))
        })?;
        self.set_value(field, value);
        Ok(())
    }

    fn set_value(&mut self, field: FormField, value: f64) {
        let obs = &mut self.observation;
        match field {
            FormField::Height => obs.height_cm = value,
            FormField::Temperature => obs.temperature_c = value,
            FormField::Humidity => obs.humidity_pct = value,
            FormField::SoilMoisture => obs.soil_moisture_pct = value,
            FormField::Nitrogen => obs.nitrogen_ppm = value,
            FormField::Phosphorus => obs.phosphorus_ppm = value,
            FormField::Potassium => obs.potassium_ppm = value,
            FormField::Plant | FormField::LeafColor => {}
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::from_defaults(&DefaultsConfig::default(), &PlantProfileStore::builtin())
    }
}

fn leaf_position(color: &str) -> Option<usize> {
    LEAF_COLOR_OPTIONS.iter().position(|(value, _)| *value == color)
}

pub struct CatalogState {
    pub selected_index: usize,
    pub filter: Option<&'static str>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            filter: None,
        }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// All, then each category in catalog order, then back to All
    pub fn cycle_filter(&mut self, categories: &[&'static str]) {
        self.filter = match self.filter {
            None => categories.first().copied(),
            Some(current) => categories
                .iter()
                .position(|c| *c == current)
                .and_then(|i| categories.get(i + 1))
                .copied(),
        };
        self.selected_index = 0;
    }
}

pub struct App {
    pub screen: Screen,
    pub should_quit: bool,
    pub config: Config,

    pub scorer: HealthScorer,
    pub weather_source: SimulatedWeather,

    pub form: FormState,
    pub catalog_state: CatalogState,
    pub analysis: Option<AnalysisResult>,
    pub weather: WeatherReport,

    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let scorer = HealthScorer::default();
        let weather_source = SimulatedWeather::from_config(&config.weather);
        let weather = weather_source.current(Local::now().date_naive());
        let form = FormState::from_defaults(&config.defaults, scorer.store());

        Self {
            screen: Screen::Assessment,
            should_quit: false,
            config,
            scorer,
            weather_source,
            form,
            catalog_state: CatalogState::new(),
            analysis: None,
            weather,
            status_message: None,
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Score the form. Refuses when no plant type has been chosen.
    pub fn run_analysis(&mut self) {
        if let Err(e) = self.form.observation.validate() {
            self.set_status(&e.to_string());
            return;
        }

        let result = self.scorer.analyze_observation(&self.form.observation);
        let message = format!(
            "Analysis complete: {:.0}/100 ({})",
            result.score, result.status
        );
        self.analysis = Some(result);
        self.set_status(&message);
    }

    pub fn visible_profiles(&self) -> Vec<&'static PlantProfile> {
        let store = self.scorer.store();
        match self.catalog_state.filter {
            Some(category) => store.list_by_category(category),
            None => store.list_all().iter().collect(),
        }
    }

    pub fn cycle_catalog_filter(&mut self) {
        let categories = self.scorer.store().categories();
        self.catalog_state.cycle_filter(&categories);
    }

    /// Preselect the highlighted catalog plant in the form and jump to it
    pub fn assess_selected_plant(&mut self) {
        let visible = self.visible_profiles();
        let Some(profile) = visible.get(self.catalog_state.selected_index) else {
            return;
        };
        let store = *self.scorer.store();
        if let Some(index) = store.list_all().iter().position(|p| p.id == profile.id) {
            self.form.select_plant(&store, index);
            self.form.focused_field = FormField::Height;
            self.set_status(&format!("Selected {}", profile.name));
        }
        self.switch_screen(Screen::Assessment);
    }

    pub fn refresh_weather(&mut self) {
        self.weather = self.weather_source.current(Local::now().date_naive());
        tracing::debug!(location = %self.weather.location, "Weather refreshed");
    }

    pub fn toggle_location_sharing(&mut self) {
        let share = !self.weather_source.shares_location();
        self.weather_source = SimulatedWeather::with_sharing(&self.config.weather, share);
        self.refresh_weather();
        self.set_status(if share {
            "Location sharing enabled"
        } else {
            "Location sharing disabled - showing default location"
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn screen_keys() {
        assert_eq!(Screen::from_key('1'), Some(Screen::Assessment));
        assert_eq!(Screen::from_key('2'), Some(Screen::Catalog));
        assert_eq!(Screen::from_key('3'), Some(Screen::Weather));
        assert_eq!(Screen::from_key('x'), None);
    }

    #[test]
    fn analysis_requires_plant() {
        let mut app = app();
        assert!(app.form.plant_index.is_none());
        app.run_analysis();
        assert!(app.analysis.is_none());
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.contains("plant type")));
    }

    #[test]
    fn analysis_after_selecting_plant() {
        let mut app = app();
        app.form.cycle(&PlantProfileStore::builtin(), true);
        assert_eq!(app.form.observation.plant_id, "tomato");
        app.run_analysis();
        let result = app.analysis.as_ref().unwrap();
        assert_eq!(result.plant_id, "tomato");
        assert!(result.score <= 100.0);
    }

    #[test]
    fn plant_select_wraps_backwards() {
        let store = PlantProfileStore::builtin();
        let mut form = FormState::default();
        form.cycle(&store, false);
        assert_eq!(form.observation.plant_id, "potato");
        form.cycle(&store, true);
        assert_eq!(form.observation.plant_id, "tomato");
    }

    #[test]
    fn leaf_color_cycles_options() {
        let store = PlantProfileStore::builtin();
        let mut form = FormState::default();
        assert_eq!(form.observation.leaf_color, "green");
        form.focused_field = FormField::LeafColor;
        form.cycle(&store, true);
        assert_eq!(form.observation.leaf_color, "light-green");
        for _ in 0..5 {
            form.cycle(&store, true);
        }
        assert_eq!(form.observation.leaf_color, "green");
    }

    #[test]
    fn numeric_edit_commits_or_rejects() {
        let mut form = FormState::default();
        form.focused_field = FormField::SoilMoisture;
        form.start_editing();
        assert!(form.editing);
        assert_eq!(form.edit_buffer, "45");

        form.edit_buffer = "72.5".into();
        form.finish_editing().unwrap();
        assert_eq!(form.observation.soil_moisture_pct, 72.5);

        form.start_editing();
        form.edit_buffer = "wet".into();
        assert!(form.finish_editing().is_err());
        assert!(!form.editing);
        assert_eq!(form.observation.soil_moisture_pct, 72.5);
    }

    #[test]
    fn select_fields_do_not_enter_edit_mode() {
        let mut form = FormState::default();
        form.start_editing();
        assert!(!form.editing);
    }

    #[test]
    fn config_defaults_seed_form() {
        let mut config = Config::default();
        config.defaults.plant = "rice".into();
        config.defaults.leaf_color = "yellow".into();
        let app = App::new(config);
        assert_eq!(app.form.plant_index, Some(2));
        assert_eq!(app.form.leaf_index, 4);

        let mut config = Config::default();
        config.defaults.plant = "banana".into();
        config.defaults.leaf_color = "purple".into();
        let app = App::new(config);
        assert!(app.form.plant_index.is_none());
        assert!(app.form.observation.plant_id.is_empty());
        assert_eq!(app.form.observation.leaf_color, "green");
    }

    #[test]
    fn catalog_filter_cycles_through_categories() {
        let mut app = app();
        assert_eq!(app.visible_profiles().len(), 6);
        app.cycle_catalog_filter();
        assert_eq!(app.catalog_state.filter, Some("Vegetable"));
        app.cycle_catalog_filter();
        assert_eq!(app.catalog_state.filter, Some("Cereal"));
        assert_eq!(app.visible_profiles().len(), 3);
        app.cycle_catalog_filter();
        app.cycle_catalog_filter();
        assert_eq!(app.catalog_state.filter, Some("Tuber Crop"));
        app.cycle_catalog_filter();
        assert_eq!(app.catalog_state.filter, None);
    }

    #[test]
    fn catalog_enter_preselects_plant() {
        let mut app = app();
        app.switch_screen(Screen::Catalog);
        app.cycle_catalog_filter();
        app.cycle_catalog_filter(); // Cereal
        app.catalog_state.next(app.visible_profiles().len());
        app.assess_selected_plant();
        assert_eq!(app.screen, Screen::Assessment);
        assert_eq!(app.form.observation.plant_id, "rice");
    }

    #[test]
    fn toggling_location_switches_dataset() {
        let mut app = app();
        assert_eq!(app.weather.location, "Punjab, India");
        app.toggle_location_sharing();
        assert_eq!(app.weather.location, "Default Location");
        app.toggle_location_sharing();
        assert_eq!(app.weather.location, "Punjab, India");
    }

    #[test]
    fn farm_label_follows_location_sharing() {
        let mut config = Config::default();
        config.weather.location = Some("Ludhiana".into());
        let mut app = App::new(config);
        assert_eq!(app.weather.location, "Ludhiana");
        app.toggle_location_sharing();
        assert_eq!(app.weather.location, "Default Location");
        app.toggle_location_sharing();
        assert_eq!(app.weather.location, "Ludhiana");
    }
}
