use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::colors::{ACCENT_PRIMARY, BORDER_DEFAULT, TEXT_FAINT};
use crate::trace::BUBBLE_SORT_LISTING;

/// The bubble sort source with the current step's line highlighted.
pub struct ListingView {
    highlight: Option<usize>,
}

impl ListingView {
    pub fn new(highlight: Option<usize>) -> Self {
        Self { highlight }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        BUBBLE_SORT_LISTING
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let active = self.highlight == Some(i);
                let (marker, style) = if active {
                    (
                        "▌",
                        Style::default()
                            .fg(ACCENT_PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    (" ", Style::default().fg(TEXT_FAINT))
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(ACCENT_PRIMARY)),
                    Span::styled(format!("{:>2} ", i + 1), Style::default().fg(TEXT_FAINT)),
                    Span::styled(*text, style),
                ])
            })
            .collect()
    }
}

impl Widget for ListingView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_DEFAULT))
            .title(" bubble_sort.py ");
        Paragraph::new(self.lines()).block(block).render(area, buf);
    }
}
