use crate::models::{HealthStatus, ValueRange};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Boxed reading with a horizontal bar.
///
/// An optional optimal band is drawn under the bar so the reading can be
/// compared with the crop's envelope at a glance.
pub struct GaugeWidget<'a> {
    title: &'a str,
    value: Option<f64>,
    unit: &'a str,
    min: f64,
    max: f64,
    thresholds: Vec<(f64, Color)>,
    precision: usize,
    optimal: Option<ValueRange>,
    label: Option<String>,
}

impl<'a> GaugeWidget<'a> {
    pub fn new(title: &'a str, value: Option<f64>, unit: &'a str) -> Self {
        Self {
            title,
            value,
            unit,
            min: 0.0,
            max: 100.0,
            thresholds: Vec::new(),
            precision: 1,
            optimal: None,
            label: None,
        }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn thresholds(mut self, thresholds: Vec<(f64, Color)>) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn optimal(mut self, band: ValueRange) -> Self {
        self.optimal = Some(band);
        self
    }

    /// Text shown after the value, e.g. a status tier
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    fn get_color(&self, value: f64) -> Color {
        for (threshold, color) in self.thresholds.iter().rev() {
            if value >= *threshold {
                return *color;
            }
        }
        Theme::FG
    }

    fn column(&self, value: f64, width: u16) -> u16 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0;
        }
        let ratio = ((value - self.min) / span).clamp(0.0, 1.0);
        (width as f64 * ratio) as u16
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(value) = self.value else {
            Paragraph::new(Span::styled("N/A", Theme::dim())).render(inner, buf);
            return;
        };

        let color = self.get_color(value);
        let mut spans = vec![Span::styled(
            format!("{:.prec$}{}", value, self.unit, prec = self.precision),
            Style::default().fg(color),
        )];
        if let Some(ref label) = self.label {
            spans.push(Span::styled(format!("  {}", label), Style::default().fg(color)));
        }
        if let Some(band) = self.optimal {
            spans.push(Span::styled(
                format!("  (optimal {}{})", band, self.unit),
                Theme::dim(),
            ));
        }
        Paragraph::new(Line::from(spans)).render(inner, buf);

        if inner.height < 2 {
            return;
        }

        let bar_y = inner.y + 1;
        let filled = self.column(value, inner.width);
        for x in inner.x..inner.x + inner.width {
            let ch = if x < inner.x + filled { '█' } else { '░' };
            buf[(x, bar_y)].set_char(ch).set_fg(color);
        }

        if let Some(band) = self.optimal {
            if inner.height >= 3 {
                let start = inner.x + self.column(band.min, inner.width);
                let end = (inner.x + self.column(band.max, inner.width))
                    .min(inner.x + inner.width.saturating_sub(1));
                for x in start..=end {
                    buf[(x, bar_y + 1)].set_char('▔').set_fg(Theme::ACCENT);
                }
            }
        }
    }
}

/// 0-100 health score colored by status tier
pub fn score_gauge(score: Option<f64>, status: Option<HealthStatus>) -> GaugeWidget<'static> {
    let gauge = GaugeWidget::new("Health Score", score, "/100")
        .precision(0)
        .thresholds(vec![
            (0.0, Theme::ERROR),
            (40.0, Theme::WARNING),
            (60.0, Color::LightGreen),
            (80.0, Theme::SUCCESS),
        ]);
    match status {
        Some(status) => gauge.label(format!("{} {}", status.symbol(), status)),
        None => gauge,
    }
}

pub fn temperature_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "°C")
        .range(-10.0, 50.0)
        .thresholds(vec![
            (-50.0, Theme::TEMP_COLD),
            (10.0, Theme::TEMP_MILD),
            (25.0, Theme::TEMP_WARM),
            (32.0, Theme::TEMP_HOT),
        ])
}

pub fn moisture_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%")
        .precision(0)
        .thresholds(vec![
            (f64::MIN, Theme::MOISTURE_DRY),
            (30.0, Theme::MOISTURE_OK),
            (80.0, Theme::MOISTURE_WET),
        ])
}

pub fn humidity_gauge(title: &str, value: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(title, value, "%")
        .precision(0)
        .thresholds(vec![
            (f64::MIN, Theme::SUCCESS),
            (80.0, Theme::WARNING),
            (90.0, Theme::ERROR),
        ])
}
