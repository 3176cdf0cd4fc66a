use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use super::style;
use crate::input::LegendEntry;

/// One-line key legend: `A/← left | D/→ right | ...`.
#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    entries: &'a [LegendEntry],
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(entries: &'a [LegendEntry]) -> Self {
        Self { entries }
    }

    fn line(&self) -> Line<'a> {
        let mut spans = vec![];
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", style::LEGEND_SEPARATOR));
            }
            for (j, key) in entry.keys.iter().enumerate() {
                if j > 0 {
                    spans.push(Span::styled("/", style::LEGEND_SEPARATOR));
                }
                spans.push(Span::styled(key.as_str(), style::LEGEND_KEY));
            }
            spans.push(Span::raw(" "));
            spans.push(Span::styled(entry.description, style::DEFAULT));
        }
        Line::from(spans).centered()
    }
}

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::KeyConfig,
        input::KeyBindings,
        view::widgets::{color, test_util::row_text},
    };

    #[test]
    fn test_default_legend() {
        let bindings = KeyBindings::new(&KeyConfig::default());
        let display = KeyBindingDisplay::new(bindings.legend());
        let text = display.line().to_string();
        assert_eq!(
            text,
            "A/← left | D/→ right | W/↑ rotate | S/↓/Space drop | Q/Esc quit | P pause"
        );
    }

    #[test]
    fn test_keys_are_highlighted() {
        let entries = [LegendEntry {
            keys: vec!["P".to_owned()],
            description: "pause",
        }];
        let mut buf = Buffer::empty(Rect::new(0, 0, 7, 1));
        KeyBindingDisplay::new(&entries).render(buf.area, &mut buf);
        assert_eq!(row_text(&buf, 0), "P pause");
        assert_eq!(buf[(0, 0)].fg, color::CYAN);
    }
}
