use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::colors::{kind_color, ACCENT_SUCCESS, ACCENT_WARNING, TEXT_BRIGHT, TEXT_FAINT, TEXT_MUTED};
use crate::playback::PlaybackStatus;
use crate::trace::StepKind;

/// One-line playback summary: run state, position, kind and speed.
pub struct StatusBar {
    status: PlaybackStatus,
    kind: StepKind,
}

impl StatusBar {
    pub fn new(status: PlaybackStatus, kind: StepKind) -> Self {
        Self { status, kind }
    }

    pub fn line(&self) -> Line<'static> {
        let (state, state_color) = if self.status.running {
            ("Running", ACCENT_SUCCESS)
        } else {
            ("Paused", ACCENT_WARNING)
        };
        let sep = Span::styled("  │  ", Style::default().fg(TEXT_FAINT));

        Line::from(vec![
            Span::styled(" Status: ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                state,
                Style::default().fg(state_color).add_modifier(Modifier::BOLD),
            ),
            sep.clone(),
            Span::styled("Step ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                format!("{} / {}", self.status.cursor, self.status.last_index()),
                Style::default().fg(TEXT_BRIGHT),
            ),
            sep.clone(),
            Span::styled(
                self.kind.label().to_uppercase(),
                Style::default().fg(kind_color(self.kind)),
            ),
            sep,
            Span::styled("Speed ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                format!(
                    "{}% ({} ms)",
                    self.status.speed.percent(),
                    self.status.interval().as_millis()
                ),
                Style::default().fg(TEXT_BRIGHT),
            ),
        ])
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line()).render(area, buf);
    }
}
