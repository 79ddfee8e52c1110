use crate::models::{leaf_color_label, PlantProfile};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

/// Browsable list of crop profiles with a detail pane
pub struct CatalogScreen<'a> {
    pub profiles: &'a [&'static PlantProfile],
    pub selected_index: usize,
    pub filter: Option<&'a str>,
}

impl<'a> CatalogScreen<'a> {
    pub fn new(profiles: &'a [&'static PlantProfile]) -> Self {
        Self {
            profiles,
            selected_index: 0,
            filter: None,
        }
    }

    pub fn with_selection(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn with_filter(mut self, filter: Option<&'a str>) -> Self {
        self.filter = filter;
        self
    }
}

impl Widget for CatalogScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        let title = Line::from(vec![
            Span::styled("Plant Catalog", Theme::title()),
            Span::styled(
                format!(" - {}", self.filter.unwrap_or("All categories")),
                Theme::dim(),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(chunks[1]);

        self.render_list(content[0], buf);
        self.render_details(content[1], buf);

        let nav = Line::from(vec![
            Span::styled("[↑↓]", Theme::nav_key()),
            Span::styled("Navigate ", Theme::nav_label()),
            Span::styled("[f]", Theme::nav_key()),
            Span::styled("Filter ", Theme::nav_label()),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Assess this plant ", Theme::nav_label()),
            Span::styled("[Esc]", Theme::nav_key()),
            Span::styled("Back", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(chunks[2], buf);
    }
}

impl CatalogScreen<'_> {
    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!("Plants ({})", self.profiles.len()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        if self.profiles.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Span::styled("No plants in this category", Theme::dim()))
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .profiles
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let style = if i == self.selected_index {
                    Theme::selected()
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(p.name, Theme::normal()),
                    Span::styled(format!("  {}", p.category), Theme::dim()),
                ]))
                .style(style)
            })
            .collect();

        Widget::render(List::new(items).block(block), area, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let Some(profile) = self.profiles.get(self.selected_index) else {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Span::styled("Select a plant", Theme::dim())).render(inner, buf);
            return;
        };

        let c = &profile.optimal_conditions;
        let mut lines = vec![
            Line::from(Span::styled(profile.name, Theme::title())),
            Line::from(vec![
                Span::styled("Climate: ", Theme::dim()),
                Span::raw(profile.climate.join(", ")),
            ]),
            Line::from(vec![
                Span::styled("Harvest: ", Theme::dim()),
                Span::raw(profile.harvest_time),
            ]),
            Line::from(""),
            Line::from(Span::styled("Optimal conditions", Theme::header())),
            range_line("Temperature", &c.temperature.to_string(), "°C"),
            range_line("Humidity", &c.humidity.to_string(), "%"),
            range_line("Soil moisture", &c.soil_moisture.to_string(), "%"),
            range_line(
                "N / P / K",
                &format!(
                    "{} / {} / {}",
                    c.nutrients.nitrogen, c.nutrients.phosphorus, c.nutrients.potassium
                ),
                " ppm",
            ),
            Line::from(""),
            Line::from(Span::styled("Growth stages", Theme::header())),
        ];

        for (stage, band) in profile.growth_stages.ordered() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", stage.label()), Theme::dim()),
                Span::raw(format!("{} cm, ~{} days", band.height_cm, band.duration_days)),
            ]));
        }

        let leaf = &profile.leaf_color_indicators;
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Leaf color", Theme::header())));
        for (label, colors, style) in [
            ("Healthy", leaf.healthy, Theme::success()),
            ("Deficiency", leaf.deficiency, Theme::warning()),
            ("Diseased", leaf.diseased, Theme::error()),
        ] {
            let mut spans = vec![Span::styled(format!("  {:<12}", label), style)];
            for color in colors {
                spans.push(Span::styled(
                    "■ ",
                    Style::default().fg(Theme::leaf_color(color)),
                ));
                spans.push(Span::raw(format!("{}  ", leaf_color_label(color))));
            }
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Common diseases: ", Theme::header()),
            Span::raw(profile.common_diseases.join(", ")),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Care", Theme::header())));
        for tip in profile.specific_care {
            lines.push(Line::from(format!("  • {}", tip)));
        }

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

fn range_line(label: &str, range: &str, unit: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<14}", label), Theme::dim()),
        Span::raw(format!("{}{}", range, unit)),
    ])
}
