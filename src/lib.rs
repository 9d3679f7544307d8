pub mod config;
pub mod dump;
pub mod playback;
pub mod trace;
pub mod ui;
pub mod util;

pub use config::{Config, ConfigError};
pub use dump::{write_trace, DumpFormat};
pub use playback::{
    ArraySource, FixedArraySource, PlaybackCommand, PlaybackController, PlaybackDriver,
    PlaybackFrame, PlaybackHandle, PlaybackSession, PlaybackStatus, RandomArraySource, Schedule,
    Speed,
};
pub use trace::{generate, Step, StepKind, TraceSummary, BUBBLE_SORT_LISTING};
pub use ui::App;
pub use util::{parse_array, ArrayParseError};
