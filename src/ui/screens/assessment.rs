use crate::app::FormState;
use crate::logic::PlantProfileStore;
use crate::models::{AnalysisResult, Dimension, LEAF_COLOR_OPTIONS};
use crate::ui::components::{
    humidity_gauge, moisture_gauge, score_gauge, temperature_gauge, InputWidget, SelectWidget,
};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Widget, Wrap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Plant,
    Height,
    LeafColor,
    Temperature,
    Humidity,
    SoilMoisture,
    Nitrogen,
    Phosphorus,
    Potassium,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Plant,
            FormField::Height,
            FormField::LeafColor,
            FormField::Temperature,
            FormField::Humidity,
            FormField::SoilMoisture,
            FormField::Nitrogen,
            FormField::Phosphorus,
            FormField::Potassium,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Plant => "Plant Type",
            FormField::Height => "Plant Height",
            FormField::LeafColor => "Leaf Color",
            FormField::Temperature => "Temperature",
            FormField::Humidity => "Humidity",
            FormField::SoilMoisture => "Soil Moisture",
            FormField::Nitrogen => "Nitrogen (N)",
            FormField::Phosphorus => "Phosphorus (P)",
            FormField::Potassium => "Potassium (K)",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            FormField::Plant | FormField::LeafColor => "",
            FormField::Height => " cm",
            FormField::Temperature => " °C",
            FormField::Humidity | FormField::SoilMoisture => " %",
            FormField::Nitrogen | FormField::Phosphorus | FormField::Potassium => " ppm",
        }
    }

    /// Select fields cycle through options instead of taking typed input
    pub fn is_select(&self) -> bool {
        matches!(self, FormField::Plant | FormField::LeafColor)
    }

    pub fn next(&self) -> Self {
        let all = Self::all();
        let i = all.iter().position(|f| f == self).unwrap_or(0);
        all[(i + 1) % all.len()]
    }

    pub fn prev(&self) -> Self {
        let all = Self::all();
        let i = all.iter().position(|f| f == self).unwrap_or(0);
        all[(i + all.len() - 1) % all.len()]
    }
}

pub struct AssessmentScreen<'a> {
    pub form: &'a FormState,
    pub store: &'a PlantProfileStore,
    pub analysis: Option<&'a AnalysisResult>,
    pub status_message: Option<&'a str>,
}

impl<'a> AssessmentScreen<'a> {
    pub fn new(form: &'a FormState, store: &'a PlantProfileStore) -> Self {
        Self {
            form,
            store,
            analysis: None,
            status_message: None,
        }
    }

    pub fn with_analysis(mut self, analysis: Option<&'a AnalysisResult>) -> Self {
        self.analysis = analysis;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for AssessmentScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(17),   // Form + results
                Constraint::Length(1), // Status
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Crop Health Assessment", Theme::title()),
            Span::styled(" - enter field readings and press [a]", Theme::dim()),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[1]);

        self.render_form(body[0], buf);
        self.render_results(body[1], buf);

        if let Some(msg) = self.status_message {
            Paragraph::new(Span::styled(msg, Theme::warning())).render(chunks[2], buf);
        }

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Field ", Theme::nav_label()),
            Span::styled("[←→]", Theme::nav_key()),
            Span::styled("Choose ", Theme::nav_label()),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Edit ", Theme::nav_label()),
            Span::styled("[a]", Theme::nav_key()),
            Span::styled("Analyze ", Theme::nav_label()),
            Span::styled("[2]", Theme::nav_key()),
            Span::styled("Catalog ", Theme::nav_label()),
            Span::styled("[3]", Theme::nav_key()),
            Span::styled("Weather ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[3], buf);
    }
}

impl AssessmentScreen<'_> {
    fn render_form(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Observation")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        // Plant and leaf color on full rows, numeric fields two per row
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3); 5])
            .split(inner);

        let halves = |row: Rect| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(row)
        };

        let plant_names: Vec<&str> = self.store.list_all().iter().map(|p| p.name).collect();
        SelectWidget::new(FormField::Plant.label(), &plant_names, self.form.plant_index)
            .placeholder("Select a plant...")
            .focused(self.form.focused_field == FormField::Plant)
            .render(rows[0], buf);

        let top = halves(rows[1]);
        self.render_input(FormField::Height, top[0], buf);
        let leaf_names: Vec<&str> = LEAF_COLOR_OPTIONS.iter().map(|(_, name)| *name).collect();
        let leaf_value = LEAF_COLOR_OPTIONS
            .get(self.form.leaf_index)
            .map(|(value, _)| *value)
            .unwrap_or("");
        SelectWidget::new(
            FormField::LeafColor.label(),
            &leaf_names,
            Some(self.form.leaf_index),
        )
        .swatch(Style::default().fg(Theme::leaf_color(leaf_value)))
        .focused(self.form.focused_field == FormField::LeafColor)
        .render(top[1], buf);

        let climate = halves(rows[2]);
        self.render_input(FormField::Temperature, climate[0], buf);
        self.render_input(FormField::Humidity, climate[1], buf);

        let soil = halves(rows[3]);
        self.render_input(FormField::SoilMoisture, soil[0], buf);
        self.render_input(FormField::Nitrogen, soil[1], buf);

        let nutrients = halves(rows[4]);
        self.render_input(FormField::Phosphorus, nutrients[0], buf);
        self.render_input(FormField::Potassium, nutrients[1], buf);
    }

    fn render_input(&self, field: FormField, area: Rect, buf: &mut Buffer) {
        let focused = self.form.focused_field == field;
        let editing = focused && self.form.editing;
        let value = if editing {
            self.form.edit_buffer.clone()
        } else {
            self.form.value_of(field)
        };
        InputWidget::new(field.label(), &value)
            .unit(field.unit())
            .focused(focused)
            .editing(editing)
            .render(area, buf);
    }

    fn render_results(&self, area: Rect, buf: &mut Buffer) {
        let Some(result) = self.analysis else {
            let block = Block::default()
                .title("Analysis")
                .borders(Borders::ALL)
                .border_style(Theme::border());
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Span::styled(
                "No analysis yet. Fill in the form and press [a].",
                Theme::dim(),
            ))
            .render(inner, buf);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Score gauge
                Constraint::Length(9), // Parameter table
                Constraint::Min(4),    // Issues + recommendations
            ])
            .split(area);

        self.render_gauges(result, chunks[0], buf);
        self.render_assessment_table(result, chunks[1], buf);
        self.render_findings(result, chunks[2], buf);
    }

    fn render_gauges(&self, result: &AnalysisResult, area: Rect, buf: &mut Buffer) {
        let score = score_gauge(Some(result.score), Some(result.status));
        if result.assessments.is_empty() {
            score.render(area, buf);
            return;
        }

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
                Constraint::Percentage(20),
            ])
            .split(area);
        score.render(cols[0], buf);

        for a in &result.assessments {
            let (gauge, col) = match a.dimension {
                Dimension::Temperature => (temperature_gauge("Temp", Some(a.observed)), cols[1]),
                Dimension::Humidity => (humidity_gauge("Humidity", Some(a.observed)), cols[2]),
                Dimension::SoilMoisture => (moisture_gauge("Soil", Some(a.observed)), cols[3]),
                _ => continue,
            };
            gauge.optimal(a.optimal).render(col, buf);
        }
    }

    fn render_assessment_table(&self, result: &AnalysisResult, area: Rect, buf: &mut Buffer) {
        let title = match (result.profile, result.growth_stage) {
            (Some(profile), Some(stage)) => {
                format!("{} - {} stage", profile.name, stage.label())
            }
            _ => "Parameter Assessment".to_string(),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        if result.assessments.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Span::styled("No parameters assessed", Theme::dim()))
                .render(inner, buf);
            return;
        }

        let header = Row::new(vec!["Parameter", "Reading", "Optimal", "Status"])
            .style(Theme::header());

        let rows: Vec<Row> = result
            .assessments
            .iter()
            .map(|a| {
                Row::new(vec![
                    Cell::from(a.dimension.as_str()),
                    Cell::from(format!("{:.1}{}", a.observed, a.dimension.unit())),
                    Cell::from(format!("{}{}", a.optimal, a.dimension.unit())),
                    Cell::from(Span::styled(a.status.as_str(), Theme::range_status(a.status))),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(14),
                Constraint::Length(11),
                Constraint::Length(12),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(block);

        Widget::render(table, area, buf);
    }

    fn render_findings(&self, result: &AnalysisResult, area: Rect, buf: &mut Buffer) {
        let halves = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let issues_block = Block::default()
            .title(format!("Issues ({})", result.issues.len()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        if result.issues.is_empty() {
            let inner = issues_block.inner(halves[0]);
            issues_block.render(halves[0], buf);
            Paragraph::new(Span::styled("No issues detected", Theme::success()))
                .render(inner, buf);
        } else {
            let items: Vec<ListItem> = result
                .issues
                .iter()
                .map(|i| ListItem::new(Line::from(vec![
                    Span::styled("✘ ", Theme::error()),
                    Span::raw(i.as_str()),
                ])))
                .collect();
            Widget::render(List::new(items).block(issues_block), halves[0], buf);
        }

        let rec_block = Block::default()
            .title("Recommendations")
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let lines: Vec<Line> = result
            .recommendations
            .iter()
            .map(|r| Line::from(vec![Span::styled("→ ", Theme::highlight()), Span::raw(r.as_str())]))
            .collect();
        Paragraph::new(lines)
            .block(rec_block)
            .wrap(Wrap { trim: true })
            .render(halves[1], buf);
    }
}
