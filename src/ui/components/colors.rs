use ratatui::style::Color;

use crate::trace::StepKind;

pub const ACCENT_PRIMARY: Color = Color::Cyan;
pub const ACCENT_WARNING: Color = Color::Yellow;
pub const ACCENT_SUCCESS: Color = Color::Green;
pub const ACCENT_COMPLETE: Color = Color::Magenta;

pub const TEXT_BRIGHT: Color = Color::White;
pub const TEXT_MUTED: Color = Color::Gray;
pub const TEXT_FAINT: Color = Color::DarkGray;

pub const BAR_IDLE: Color = Color::DarkGray;
pub const BORDER_DEFAULT: Color = Color::DarkGray;

/// Color for a bar the current step points at.
pub fn kind_color(kind: StepKind) -> Color {
    match kind {
        StepKind::Compare => ACCENT_PRIMARY,
        StepKind::Swap => ACCENT_WARNING,
        StepKind::SortedBoundary => ACCENT_SUCCESS,
        StepKind::Complete => ACCENT_COMPLETE,
        StepKind::Init => BAR_IDLE,
    }
}
