use crate::models::{RangeStatus, WeatherCondition};
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const FG: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const ACCENT: Color = Color::Green;
    pub const HIGHLIGHT: Color = Color::Cyan;

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;

    // Field readings, all metric
    pub const TEMP_COLD: Color = Color::LightBlue;
    pub const TEMP_MILD: Color = Color::Green;
    pub const TEMP_WARM: Color = Color::Yellow;
    pub const TEMP_HOT: Color = Color::Red;
    pub const MOISTURE_DRY: Color = Color::Yellow;
    pub const MOISTURE_OK: Color = Color::Green;
    pub const MOISTURE_WET: Color = Color::LightBlue;
    pub const RAIN: Color = Color::LightBlue;

    pub fn title() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn highlight() -> Style {
        Style::default()
            .fg(Self::HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .fg(Self::FG)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Self::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Self::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Self::ERROR)
    }

    pub fn temp_color(temp_c: f64) -> Color {
        if temp_c < 10.0 {
            Self::TEMP_COLD
        } else if temp_c < 25.0 {
            Self::TEMP_MILD
        } else if temp_c < 32.0 {
            Self::TEMP_WARM
        } else {
            Self::TEMP_HOT
        }
    }

    pub fn range_status(status: RangeStatus) -> Style {
        match status {
            RangeStatus::Optimal => Self::success(),
            RangeStatus::Low => Style::default().fg(Self::MOISTURE_WET),
            RangeStatus::High => Self::warning(),
        }
    }

    pub fn weather_color(condition: WeatherCondition) -> Color {
        match condition {
            WeatherCondition::Clear | WeatherCondition::Sunny => Self::WARNING,
            WeatherCondition::PartlyCloudy | WeatherCondition::Cloudy => Self::FG,
            WeatherCondition::Rain => Self::RAIN,
        }
    }

    /// Swatch color for a leaf color label
    pub fn leaf_color(label: &str) -> Color {
        match label {
            "dark-green" => Color::Rgb(0x1b, 0x5e, 0x20),
            "green" => Color::Green,
            "light-green" => Color::LightGreen,
            "yellow-green" => Color::Rgb(0x9a, 0xcd, 0x32),
            "yellow" => Color::Yellow,
            "brown" => Color::Rgb(0x8b, 0x45, 0x13),
            _ => Self::DIM,
        }
    }

    pub fn nav_key() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn nav_label() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }
}
