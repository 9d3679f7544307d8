mod bar_view;
mod colors;
mod key_hints;
mod listing_view;
mod status_bar;

pub use bar_view::BarView;
pub use colors::{
    kind_color, ACCENT_COMPLETE, ACCENT_PRIMARY, ACCENT_SUCCESS, ACCENT_WARNING, BAR_IDLE,
    BORDER_DEFAULT, TEXT_BRIGHT, TEXT_FAINT, TEXT_MUTED,
};
pub use key_hints::{render_key_hints, PLAYBACK_HINTS};
pub use listing_view::ListingView;
pub use status_bar::StatusBar;
