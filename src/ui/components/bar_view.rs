use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use super::colors::{kind_color, BAR_IDLE, BORDER_DEFAULT, TEXT_MUTED};
use crate::trace::Step;

const BAR_SYMBOL: &str = "█";

/// Vertical bars for the array in one step, targets colored by step kind.
pub struct BarView<'a> {
    step: &'a Step,
}

impl<'a> BarView<'a> {
    pub fn new(step: &'a Step) -> Self {
        Self { step }
    }

    /// Width of each bar and the gap after it for `n` bars in `width` columns.
    fn bar_geometry(n: usize, width: u16) -> (u16, u16) {
        if n == 0 {
            return (0, 0);
        }
        let n = n as u16;
        let with_gap = width.saturating_sub(n.saturating_sub(1)) / n;
        if with_gap >= 1 {
            (with_gap, 1)
        } else {
            ((width / n).max(1), 0)
        }
    }

    /// Rows filled for `value`, leaving one row for labels.
    fn bar_height(value: i32, max: i32, rows: u16) -> u16 {
        if value <= 0 || max <= 0 || rows == 0 {
            return 0;
        }
        let scaled = (i64::from(value) * i64::from(rows)) / i64::from(max);
        (scaled as u16).clamp(1, rows)
    }
}

impl Widget for BarView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT))
            .title(" Live Visualization ");
        let inner = block.inner(area);
        block.render(area, buf);

        let values = &self.step.array;
        if values.is_empty() || inner.height < 2 || inner.width == 0 {
            return;
        }

        let (bar_width, gap) = Self::bar_geometry(values.len(), inner.width);
        let rows = inner.height - 1;
        let label_y = inner.y + rows;
        let max = values.iter().copied().max().unwrap_or(0);

        for (idx, &value) in values.iter().enumerate() {
            let x0 = inner.x + (idx as u16) * (bar_width + gap);
            if x0 >= inner.x + inner.width {
                break;
            }
            let width = bar_width.min(inner.x + inner.width - x0);

            let color = if self.step.touches(idx) {
                kind_color(self.step.kind)
            } else {
                BAR_IDLE
            };
            let style = Style::default().fg(color);

            let height = Self::bar_height(value, max, rows);
            for dy in 0..height {
                let y = label_y - 1 - dy;
                for x in x0..x0 + width {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_symbol(BAR_SYMBOL).set_style(style);
                    }
                }
            }

            let label = value.to_string();
            buf.set_stringn(
                x0,
                label_y,
                &label,
                width as usize,
                Style::default().fg(TEXT_MUTED),
            );
        }
    }
}
