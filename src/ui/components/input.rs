use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Single-line numeric or text field
pub struct InputWidget<'a> {
    label: &'a str,
    value: &'a str,
    unit: &'a str,
    focused: bool,
    editing: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            unit: "",
            focused: false,
            editing: false,
        }
    }

    pub fn unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let block = Block::default()
            .title(self.label)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.editing {
            Line::from(vec![
                Span::styled(self.value, Theme::highlight()),
                Span::styled(" ", Theme::selected()),
                Span::styled(self.unit, Theme::dim()),
            ])
        } else {
            let style = if self.focused {
                Theme::selected()
            } else {
                Theme::normal()
            };
            Line::from(vec![
                Span::styled(self.value, style),
                Span::styled(self.unit, Theme::dim()),
            ])
        };

        Paragraph::new(line).render(inner, buf);
    }
}

/// Cycling choice field. `selected = None` shows the placeholder.
pub struct SelectWidget<'a> {
    label: &'a str,
    options: &'a [&'a str],
    selected: Option<usize>,
    placeholder: &'a str,
    focused: bool,
    swatch: Option<Style>,
}

impl<'a> SelectWidget<'a> {
    pub fn new(label: &'a str, options: &'a [&'a str], selected: Option<usize>) -> Self {
        Self {
            label,
            options,
            selected,
            placeholder: "Select...",
            focused: false,
            swatch: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Colored block drawn before the value
    pub fn swatch(mut self, style: Style) -> Self {
        self.swatch = Some(style);
        self
    }
}

impl Widget for SelectWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Theme::border_focused()
        } else {
            Theme::border()
        };

        let block = Block::default()
            .title(self.label)
            .borders(Borders::ALL)
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let (value, style) = match self.selected.and_then(|i| self.options.get(i)) {
            Some(value) if self.focused => (format!("< {} >", value), Theme::highlight()),
            Some(value) => (value.to_string(), Theme::normal()),
            None => (self.placeholder.to_string(), Theme::dim()),
        };

        let mut spans = Vec::new();
        if let Some(swatch) = self.swatch {
            spans.push(Span::styled("██ ", swatch));
        }
        spans.push(Span::styled(value, style));

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn select_shows_placeholder_until_chosen() {
        let options = ["Tomato", "Wheat"];
        let area = Rect::new(0, 0, 30, 3);

        let mut buf = Buffer::empty(area);
        SelectWidget::new("Plant", &options, None)
            .placeholder("Choose a plant")
            .render(area, &mut buf);
        assert!(text(&buf, 1).contains("Choose a plant"));

        let mut buf = Buffer::empty(area);
        SelectWidget::new("Plant", &options, Some(1))
            .focused(true)
            .render(area, &mut buf);
        assert!(text(&buf, 1).contains("< Wheat >"));
    }

    #[test]
    fn input_renders_value_and_unit() {
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        InputWidget::new("Height", "42").unit(" cm").render(area, &mut buf);
        assert!(text(&buf, 1).contains("42 cm"));
    }
}
