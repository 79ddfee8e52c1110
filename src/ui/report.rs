//! Plain-text rendering for the non-interactive subcommands.

use crate::models::{leaf_color_label, AnalysisResult, PlantProfile, WeatherReport};
use std::fmt::Write;

pub fn format_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let Some(profile) = result.profile else {
        let _ = writeln!(out, "Plant: {} (not in catalog)", result.plant_id);
        let _ = writeln!(out, "Score: {:.0}/100  {}", result.score, result.status);
        write_list(&mut out, "Issues", &result.issues);
        write_list(&mut out, "Recommendations", &result.recommendations);
        return out;
    };

    let _ = writeln!(out, "{} ({})", profile.name, profile.category);
    let _ = writeln!(
        out,
        "Score: {:.0}/100  {} {}",
        result.score,
        result.status.symbol(),
        result.status
    );
    if !result.findings.is_empty() {
        let _ = writeln!(
            out,
            "Deductions: {:.1} from {} finding(s)",
            result.total_penalty(),
            result.findings.len()
        );
    }
    if let Some(stage) = result.growth_stage {
        let _ = writeln!(out, "Growth stage: {}", stage.label());
    }
    let _ = writeln!(
        out,
        "Analyzed: {}",
        result.analyzed_at.format("%Y-%m-%d %H:%M UTC")
    );

    if !result.assessments.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Parameter assessment:");
        for a in &result.assessments {
            let _ = writeln!(
                out,
                "  {:<14} {:>8.1}{:<5} optimal {:<9} {}",
                a.dimension.as_str(),
                a.observed,
                a.dimension.unit(),
                a.optimal.to_string(),
                a.status.as_str()
            );
        }
    }

    if result.issues.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "No issues detected.");
    } else {
        write_list(&mut out, "Issues", &result.issues);
    }
    write_list(&mut out, "Recommendations", &result.recommendations);

    out
}

fn write_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}:", heading);
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

pub fn format_plant_list(profiles: &[&PlantProfile]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<14} {:<12} {:<10} {:<10} Harvest",
        "ID", "Name", "Category", "Temp °C", "Moisture %"
    );
    for p in profiles {
        let c = &p.optimal_conditions;
        let _ = writeln!(
            out,
            "{:<8} {:<14} {:<12} {:<10} {:<10} {}",
            p.id,
            p.name,
            p.category,
            c.temperature.to_string(),
            c.soil_moisture.to_string(),
            p.harvest_time
        );
    }
    out
}

pub fn format_profile(profile: &PlantProfile) -> String {
    let mut out = String::new();
    let c = &profile.optimal_conditions;

    let _ = writeln!(out, "{} [{}]", profile.name, profile.id);
    let _ = writeln!(out, "Category: {}", profile.category);
    let _ = writeln!(out, "Climate: {}", profile.climate.join(", "));
    let _ = writeln!(out, "Harvest: {}", profile.harvest_time);

    let _ = writeln!(out);
    let _ = writeln!(out, "Optimal conditions:");
    let _ = writeln!(out, "  Temperature    {} °C", c.temperature);
    let _ = writeln!(out, "  Humidity       {} %", c.humidity);
    let _ = writeln!(out, "  Soil moisture  {} %", c.soil_moisture);
    let _ = writeln!(out, "  Nitrogen       {} ppm", c.nutrients.nitrogen);
    let _ = writeln!(out, "  Phosphorus     {} ppm", c.nutrients.phosphorus);
    let _ = writeln!(out, "  Potassium      {} ppm", c.nutrients.potassium);

    let _ = writeln!(out);
    let _ = writeln!(out, "Growth stages:");
    for (stage, band) in profile.growth_stages.ordered() {
        let _ = writeln!(
            out,
            "  {:<11} {} cm, ~{} days",
            stage.label(),
            band.height_cm,
            band.duration_days
        );
    }

    let leaf = &profile.leaf_color_indicators;
    let labels = |colors: &[&str]| {
        colors
            .iter()
            .map(|c| leaf_color_label(c))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let _ = writeln!(out);
    let _ = writeln!(out, "Leaf color:");
    let _ = writeln!(out, "  Healthy     {}", labels(leaf.healthy));
    let _ = writeln!(out, "  Deficiency  {}", labels(leaf.deficiency));
    let _ = writeln!(out, "  Diseased    {}", labels(leaf.diseased));

    let _ = writeln!(out);
    let _ = writeln!(out, "Common diseases: {}", profile.common_diseases.join(", "));
    let _ = writeln!(out);
    let _ = writeln!(out, "Care:");
    for tip in profile.specific_care {
        let _ = writeln!(out, "  - {}", tip);
    }

    out
}

pub fn format_weather(report: &WeatherReport) -> String {
    let mut out = String::new();
    let now = &report.current;

    let _ = writeln!(out, "Weather for {} ({})", report.location, report.source);
    let _ = writeln!(
        out,
        "Now: {} {:.0}°C, humidity {:.0}%, wind {:.0} km/h",
        now.condition.symbol(),
        now.temperature_c,
        now.humidity_pct,
        now.wind_speed_kmh
    );
    let _ = writeln!(out, "  {}", now.condition);

    let _ = writeln!(out);
    for day in &report.forecast {
        let _ = writeln!(
            out,
            "{:<9} {}  {:>3.0}° / {:>3.0}°  {:<14} rain {:>3.0}%",
            day.label,
            day.date.format("%a %d %b"),
            day.high_c,
            day.low_c,
            day.condition.to_string(),
            day.precipitation_chance_pct
        );
    }

    if let Some(day) = report.first_heavy_rain_day() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Heavy rain alert: {:.0}% chance on {}. Hold irrigation and check field drainage.",
            day.precipitation_chance_pct, day.label
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasources::{SimulatedWeather, WeatherSource};
    use crate::logic::{HealthScorer, PlantProfileStore};
    use crate::models::Observation;
    use chrono::NaiveDate;

    #[test]
    fn analysis_report_lists_issues() {
        let scorer = HealthScorer::default();
        let obs = Observation::new("tomato").with_leaf_color("brown");
        let text = format_analysis(&scorer.analyze_observation(&obs));
        assert!(text.starts_with("Tomato (Vegetable)"));
        assert!(text.contains("Parameter assessment:"));
        assert!(text.contains("Issues:"));
        assert!(text.contains("Recommendations:"));
        assert!(text.contains("Growth stage:"));
        assert!(text.contains("Deductions:"));
    }

    #[test]
    fn sentinel_report_has_no_profile_fields() {
        let scorer = HealthScorer::default();
        let text = format_analysis(&scorer.analyze("banana", &Observation::default()));
        assert!(text.contains("not in catalog"));
        assert!(text.contains("Unknown plant type"));
        assert!(!text.contains("Growth stage"));
        assert!(!text.contains("Parameter assessment"));
        assert!(!text.contains("Deductions"));
    }

    #[test]
    fn plant_table_has_row_per_profile() {
        let store = PlantProfileStore::builtin();
        let cereals = store.list_by_category("Cereal");
        let text = format_plant_list(&cereals);
        assert_eq!(text.lines().count(), 1 + cereals.len());
        assert!(text.contains("Maize (Corn)"));
        assert!(!text.contains("Tomato"));
    }

    #[test]
    fn profile_detail_includes_stages_and_care() {
        let store = PlantProfileStore::builtin();
        let maize = store.get_profile("maize").unwrap();
        let text = format_profile(maize);
        assert!(text.contains("Fruiting"));
        assert!(text.contains("150-250 cm"));
        assert!(text.contains(maize.specific_care[0]));
        assert!(text.contains("Diseased    Yellow, Brown"));
    }

    #[test]
    fn weather_report_flags_heavy_rain() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let text = format_weather(&SimulatedWeather::new(true).current(day));
        assert!(text.contains("Punjab, India"));
        assert!(text.contains("Heavy rain alert: 80% chance on Day 3"));
        assert_eq!(text.lines().filter(|l| l.ends_with('%')).count(), 4);
    }
}
