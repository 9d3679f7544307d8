//! Key hint footer.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::colors::{ACCENT_PRIMARY, TEXT_FAINT, TEXT_MUTED};

pub const PLAYBACK_HINTS: &[(&str, &str)] = &[
    ("space", "play/pause"),
    ("←/→", "step"),
    ("+/-", "speed"),
    ("r", "reset"),
    ("q", "quit"),
];

pub fn render_key_hints(area: Rect, buf: &mut Buffer, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();

    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(TEXT_FAINT)));
        }
        spans.push(Span::styled(key.to_string(), Style::default().fg(ACCENT_PRIMARY)));
        spans.push(Span::styled(format!(" {}", action), Style::default().fg(TEXT_MUTED)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, buf);
}
