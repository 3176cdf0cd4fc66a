use std::iter;

use blocktris_engine::Snapshot;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::style;

/// Score, level and clear counters.
pub struct StatsDisplay<'a> {
    snapshot: &'a Snapshot<'a>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(snapshot: &'a Snapshot<'a>) -> Self {
        Self {
            snapshot,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        16 + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        ROWS.len() as u16 + super::block_vertical_margin(self.block.as_ref())
    }
}

type Value = &'static dyn Fn(&Snapshot<'_>) -> String;

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(Value),
    LabelValue(&'static str, Value),
}

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE"),
    Row::FullValue(&|s| s.score().to_string()),
    Row::Empty,
    Row::LabelValue("LEVEL", &|s| s.level().to_string()),
    Row::LabelValue("LINES", &|s| s.stats.cleared_rows().to_string()),
    Row::LabelValue("PIECES", &|s| s.stats.locked_pieces().to_string()),
    Row::Empty,
    Row::LabelValue("SINGLE", &|s| s.stats.line_clear_counter()[1].to_string()),
    Row::LabelValue("DOUBLE", &|s| s.stats.line_clear_counter()[2].to_string()),
    Row::LabelValue("TRIPLE", &|s| s.stats.line_clear_counter()[3].to_string()),
    Row::LabelValue("QUAD", &|s| s.stats.line_clear_counter()[4].to_string()),
];

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let style = style::DEFAULT;
        let row_areas = Layout::vertical(ROWS.iter().map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), row_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.snapshot), style)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    Line::styled(label, style).left_aligned().render(area, buf);
                    Line::styled(value(self.snapshot), style)
                        .right_aligned()
                        .render(area, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blocktris_engine::{Command, Engine, EngineConfig, PieceSeed};

    use super::*;
    use crate::view::widgets::test_util::row_text;

    #[test]
    fn test_renders_labels_and_values() {
        let mut engine = Engine::with_seed(EngineConfig::default(), PieceSeed::from_bytes([1; 16]));
        engine.apply(Command::HardDrop);
        let snapshot = engine.snapshot();
        let display = StatsDisplay::new(&snapshot);
        let mut buf = Buffer::empty(Rect::new(0, 0, display.width(), display.height()));
        display.render(buf.area, &mut buf);

        assert_eq!(row_text(&buf, 0), "SCORE           ");
        assert_eq!(row_text(&buf, 1), "               0");
        assert_eq!(row_text(&buf, 3), "LEVEL          1");
        assert_eq!(row_text(&buf, 5), "PIECES         1");
        assert_eq!(row_text(&buf, 10), "QUAD           0");
    }
}
