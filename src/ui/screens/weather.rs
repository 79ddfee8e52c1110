use crate::models::WeatherReport;
use crate::ui::components::{humidity_gauge, temperature_gauge, GaugeWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

pub struct WeatherScreen<'a> {
    pub report: &'a WeatherReport,
}

impl<'a> WeatherScreen<'a> {
    pub fn new(report: &'a WeatherReport) -> Self {
        Self { report }
    }
}

impl Widget for WeatherScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(4), // Current conditions
                Constraint::Length(7), // Forecast
                Constraint::Min(3),    // Alerts
                Constraint::Length(1), // Nav
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Weather", Theme::title()),
            Span::styled(
                format!(" - {} ({})", self.report.location, self.report.source),
                Theme::dim(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        self.render_current(chunks[1], buf);
        self.render_forecast(chunks[2], buf);
        self.render_alerts(chunks[3], buf);

        let nav = Line::from(vec![
            Span::styled("[l]", Theme::nav_key()),
            Span::styled("Toggle location sharing ", Theme::nav_label()),
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Refresh ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[4], buf);
    }
}

impl WeatherScreen<'_> {
    fn render_current(&self, area: Rect, buf: &mut Buffer) {
        let current = &self.report.current;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        temperature_gauge("Temperature", Some(current.temperature_c)).render(cols[0], buf);
        humidity_gauge("Humidity", Some(current.humidity_pct)).render(cols[1], buf);
        GaugeWidget::new("Wind", Some(current.wind_speed_kmh), " km/h")
            .range(0.0, 60.0)
            .precision(0)
            .render(cols[2], buf);

        let block = Block::default()
            .title("Conditions")
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(cols[3]);
        block.render(cols[3], buf);
        Paragraph::new(Span::styled(
            format!("{} {}", current.condition.symbol(), current.condition),
            Style::default().fg(Theme::weather_color(current.condition)),
        ))
        .render(inner, buf);
    }

    fn render_forecast(&self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(vec!["Day", "Date", "High", "Low", "Conditions", "Rain"])
            .style(Theme::header());

        let rows: Vec<Row> = self
            .report
            .forecast
            .iter()
            .map(|day| {
                let rain_style = if day.condition.has_precipitation() {
                    Style::default()
                        .fg(Theme::RAIN)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Theme::normal()
                };
                Row::new(vec![
                    Cell::from(day.label.clone()),
                    Cell::from(day.date.format("%a %d %b").to_string()),
                    Cell::from(Span::styled(
                        format!("{:.0}°C", day.high_c),
                        Style::default().fg(Theme::temp_color(day.high_c)),
                    )),
                    Cell::from(Span::styled(
                        format!("{:.0}°C", day.low_c),
                        Style::default().fg(Theme::temp_color(day.low_c)),
                    )),
                    Cell::from(Span::styled(
                        format!("{} {}", day.condition.symbol(), day.condition),
                        Style::default().fg(Theme::weather_color(day.condition)),
                    )),
                    Cell::from(Span::styled(
                        format!("{:.0}%", day.precipitation_chance_pct),
                        rain_style,
                    )),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(10),
                Constraint::Length(11),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(16),
                Constraint::Length(6),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title("4-Day Forecast")
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        Widget::render(table, area, buf);
    }

    fn render_alerts(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Alerts")
            .borders(Borders::ALL)
            .border_style(Theme::border());
        let inner = block.inner(area);
        block.render(area, buf);

        let line = match self.report.first_heavy_rain_day() {
            Some(day) => Line::from(vec![
                Span::styled("⚠ Heavy rain expected ", Theme::warning()),
                Span::raw(format!(
                    "({:.0}% on {}). Hold irrigation and check field drainage.",
                    day.precipitation_chance_pct, day.label
                )),
            ]),
            None => Line::from(Span::styled("No weather alerts", Theme::success())),
        };
        Paragraph::new(line).render(inner, buf);
    }
}
