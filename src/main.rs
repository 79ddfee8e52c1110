mod app;
mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;
mod ui;

use anyhow::Context;
use app::{App, Screen};
use clap::Parser;
use cli::{AnalyzeArgs, Cli, Commands};
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use datasources::{SimulatedWeather, WeatherSource};
use dialoguer::{Input, Select};
use error::AgriError;
use logic::HealthScorer;
use models::{Observation, LEAF_COLOR_OPTIONS};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use ui::report;
use ui::screens::{AssessmentScreen, CatalogScreen, WeatherScreen};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // -v flags win over RUST_LOG
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Some(Commands::Analyze(args)) => run_analyze(cli.config, &args),
        Some(Commands::Assess) => run_assess(cli.config),
        Some(Commands::Plants { category, json }) => run_plants(category.as_deref(), json),
        Some(Commands::Show { id, json }) => run_show(&id, json),
        Some(Commands::Weather { deny_location }) => run_weather(cli.config, deny_location),
        Some(Commands::Init) => {
            Config::setup_interactive().context("Setup failed")?;
            Ok(())
        }
        Some(Commands::Check) => run_check(cli.config),
        None => run_tui(cli.config),
    }
}

fn run_analyze(config_path: Option<PathBuf>, args: &AnalyzeArgs) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;

    let base = match args.input {
        Some(ref path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str::<Observation>(&content)
                .map_err(AgriError::from)
                .with_context(|| format!("Invalid observation in {}", path.display()))?
        }
        None => config.defaults.observation(),
    };

    let obs = args.apply(base);
    obs.validate()?;

    let result = HealthScorer::default().analyze_observation(&obs);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::format_analysis(&result));
    }
    Ok(())
}

fn run_assess(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;
    let scorer = HealthScorer::default();
    let defaults = config.defaults.observation();

    let profiles = scorer.store().list_all();
    let names: Vec<&str> = profiles.iter().map(|p| p.name).collect();
    let default_plant = profiles
        .iter()
        .position(|p| p.id == defaults.plant_id)
        .unwrap_or(0);
    let plant = Select::new()
        .with_prompt("Plant type")
        .items(&names)
        .default(default_plant)
        .interact()
        .map_err(|e| AgriError::InvalidInput(format!("Input error: {}", e)))?;

    let leaf_names: Vec<&str> = LEAF_COLOR_OPTIONS.iter().map(|(_, name)| *name).collect();
    let default_leaf = LEAF_COLOR_OPTIONS
        .iter()
        .position(|(value, _)| *value == defaults.leaf_color)
        .unwrap_or(1);
    let leaf = Select::new()
        .with_prompt("Leaf color")
        .items(&leaf_names)
        .default(default_leaf)
        .interact()
        .map_err(|e| AgriError::InvalidInput(format!("Input error: {}", e)))?;

    let obs = Observation::new(profiles[plant].id)
        .with_height(prompt_number("Plant height (cm)", defaults.height_cm)?)
        .with_leaf_color(LEAF_COLOR_OPTIONS[leaf].0)
        .with_climate(
            prompt_number("Temperature (°C)", defaults.temperature_c)?,
            prompt_number("Humidity (%)", defaults.humidity_pct)?,
        )
        .with_soil_moisture(prompt_number("Soil moisture (%)", defaults.soil_moisture_pct)?)
        .with_nutrients(
            prompt_number("Nitrogen (ppm)", defaults.nitrogen_ppm)?,
            prompt_number("Phosphorus (ppm)", defaults.phosphorus_ppm)?,
            prompt_number("Potassium (ppm)", defaults.potassium_ppm)?,
        );

    obs.validate()?;

    println!();
    print!("{}", report::format_analysis(&scorer.analyze_observation(&obs)));
    Ok(())
}

fn prompt_number(prompt: &str, default: f64) -> error::Result<f64> {
    Input::new()
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .map_err(|e| AgriError::InvalidInput(format!("Input error: {}", e)))
}

fn run_plants(category: Option<&str>, json: bool) -> anyhow::Result<()> {
    let store = logic::PlantProfileStore::builtin();
    let profiles = match category {
        Some(c) => store.list_by_category(c),
        None => store.list_all().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
    } else if profiles.is_empty() {
        println!(
            "No plants in category '{}'. Known categories: {}",
            category.unwrap_or_default(),
            store.categories().join(", ")
        );
    } else {
        print!("{}", report::format_plant_list(&profiles));
    }
    Ok(())
}

fn run_show(id: &str, json: bool) -> anyhow::Result<()> {
    let store = logic::PlantProfileStore::builtin();
    let profile = store
        .get_profile(id)
        .ok_or_else(|| AgriError::NotFound(format!("plant '{}'", id)))?;

    if json {
        println!("{}", serde_json::to_string_pretty(profile)?);
    } else {
        print!("{}", report::format_profile(profile));
    }
    Ok(())
}

fn run_weather(config_path: Option<PathBuf>, deny_location: bool) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;
    let source = if deny_location {
        SimulatedWeather::with_sharing(&config.weather, false)
    } else {
        SimulatedWeather::from_config(&config.weather)
    };
    let today = chrono::Local::now().date_naive();
    print!("{}", report::format_weather(&source.current(today)));
    Ok(())
}

fn run_check(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load(config_path).context("Config check failed")?;
    println!("Config OK");

    let store = logic::PlantProfileStore::builtin();
    let plant = &config.defaults.plant;
    if plant.is_empty() {
        println!("  Default plant: none (chosen per assessment)");
    } else if let Some(profile) = store.get_profile(plant) {
        println!("  Default plant: {}", profile.name);
    } else {
        println!("  Default plant: '{}' is not in the catalog", plant);
    }
    println!(
        "  Weather: {}",
        if config.weather.share_location {
            "farm location"
        } else {
            "default location"
        }
    );

    println!("  Catalog: {} plants", store.len());
    let scorer = HealthScorer::default();
    for (id, name) in scorer.engine().list_rules() {
        println!("  Rule: {} ({})", name, id);
    }
    Ok(())
}

fn run_tui(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load_or_default(config_path)?;
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| {
            let area = f.area();

            match app.screen {
                Screen::Assessment => {
                    let screen = AssessmentScreen::new(&app.form, app.scorer.store())
                        .with_analysis(app.analysis.as_ref())
                        .with_status(app.status_message.as_deref());
                    f.render_widget(screen, area);
                }
                Screen::Catalog => {
                    let profiles = app.visible_profiles();
                    let screen = CatalogScreen::new(&profiles)
                        .with_selection(app.catalog_state.selected_index)
                        .with_filter(app.catalog_state.filter);
                    f.render_widget(screen, area);
                }
                Screen::Weather => {
                    f.render_widget(WeatherScreen::new(&app.weather), area);
                }
            }
        })?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let editing = app.form.editing;
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.quit();
                    }
                    KeyCode::Char('q') if !editing => app.quit(),
                    KeyCode::Esc if !editing => app.switch_screen(Screen::Assessment),
                    KeyCode::Char(c) if !editing => {
                        if let Some(screen) = Screen::from_key(c) {
                            app.switch_screen(screen);
                        } else {
                            handle_screen_input(app, key.code);
                        }
                    }
                    _ => handle_screen_input(app, key.code),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_screen_input(app: &mut App, code: KeyCode) {
    match app.screen {
        Screen::Assessment => handle_assessment_input(app, code),
        Screen::Catalog => handle_catalog_input(app, code),
        Screen::Weather => handle_weather_input(app, code),
    }
}

fn handle_assessment_input(app: &mut App, code: KeyCode) {
    if app.form.editing {
        match code {
            KeyCode::Esc => app.form.cancel_editing(),
            KeyCode::Enter | KeyCode::Tab => {
                match app.form.finish_editing() {
                    Ok(()) => app.clear_status(),
                    Err(e) => app.set_status(&e.to_string()),
                }
            }
            KeyCode::Backspace => {
                app.form.edit_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
                app.form.edit_buffer.push(c);
            }
            _ => {}
        }
        return;
    }

    let store = *app.scorer.store();
    match code {
        KeyCode::Up | KeyCode::BackTab => app.form.prev_field(),
        KeyCode::Down | KeyCode::Tab => app.form.next_field(),
        KeyCode::Left => app.form.cycle(&store, false),
        KeyCode::Right => app.form.cycle(&store, true),
        KeyCode::Enter => {
            if app.form.focused_field.is_select() {
                app.form.cycle(&store, true);
            } else {
                app.form.start_editing();
            }
        }
        KeyCode::Char('a') => app.run_analysis(),
        _ => {}
    }
}

fn handle_catalog_input(app: &mut App, code: KeyCode) {
    let count = app.visible_profiles().len();
    match code {
        KeyCode::Up => app.catalog_state.prev(),
        KeyCode::Down => app.catalog_state.next(count),
        KeyCode::Char('f') => app.cycle_catalog_filter(),
        KeyCode::Enter => app.assess_selected_plant(),
        _ => {}
    }
}

fn handle_weather_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('r') => app.refresh_weather(),
        KeyCode::Char('l') => app.toggle_location_sharing(),
        _ => {}
    }
}
