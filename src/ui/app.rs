use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::playback::{PlaybackController, PlaybackDriver, PlaybackFrame, PlaybackHandle};
use crate::trace::Step;
use crate::ui::action::Action;
use crate::ui::components::{
    render_key_hints, BarView, ListingView, StatusBar, ACCENT_PRIMARY, BORDER_DEFAULT,
    PLAYBACK_HINTS, TEXT_BRIGHT, TEXT_MUTED,
};
use crate::ui::terminal_guard::TerminalGuard;

/// Terminal front-end over a [`PlaybackDriver`].
pub struct App {
    /// Whether the app should quit
    should_quit: bool,
    /// Controls the background driver
    playback: PlaybackHandle,
    /// Frames published by the driver
    update_rx: mpsc::UnboundedReceiver<PlaybackFrame>,
    /// Latest frame; the placeholder until the driver reports in
    frame: PlaybackFrame,
}

impl App {
    /// Start the first session and its driver. Must be called inside a tokio runtime.
    pub fn new(config: &Config) -> Self {
        let controller = PlaybackController::start(config.array.source(), config.speed);
        let frame = PlaybackFrame::of(&controller);
        let (update_tx, update_rx) = mpsc::unbounded_channel();
        let playback = PlaybackDriver::spawn(controller, update_tx);

        Self {
            should_quit: false,
            playback,
            update_rx,
            frame,
        }
    }

    pub fn frame(&self) -> &PlaybackFrame {
        &self.frame
    }

    pub fn step(&self) -> &Step {
        &self.frame.step
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let mut guard = TerminalGuard::new();
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Clear screen
        terminal.clear()?;

        // Main event loop
        let result = self.event_loop(&mut terminal).await;

        self.playback.shutdown();
        guard.cleanup()?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            // Draw UI
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                // Terminal input
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    while event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key) = event::read()? {
                            if let Some(action) = Action::from_key(key) {
                                self.dispatch(action);
                            }
                        }
                    }
                }

                // Frames from the playback driver
                update = self.update_rx.recv() => {
                    match update {
                        Some(frame) => self.frame = frame,
                        None => {
                            tracing::warn!("Playback driver exited");
                            self.should_quit = true;
                        }
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Forward an action to the driver.
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "Dispatch");
        match action {
            Action::Quit => self.should_quit = true,
            Action::TogglePlay => self.playback.toggle(),
            Action::StepForward => self.playback.step_forward(),
            Action::StepBackward => self.playback.step_backward(),
            Action::Faster => self.playback.faster(),
            Action::Slower => self.playback.slower(),
            Action::Reset => self.playback.reset(),
        }
    }

    /// Wait for the driver's next frame. Returns `false` if it has exited.
    pub async fn sync(&mut self) -> bool {
        match self.update_rx.recv().await {
            Some(frame) => {
                self.frame = frame;
                true
            }
            None => false,
        }
    }

    pub fn draw(&self, f: &mut Frame<'_>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(8),
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.draw_header(f, rows[0]);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(rows[1]);
        f.render_widget(BarView::new(self.step()), main[0]);
        f.render_widget(ListingView::new(self.step().highlight_line), main[1]);

        let narrative = Paragraph::new(self.step().narrative.as_str())
            .style(Style::default().fg(TEXT_BRIGHT))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(BORDER_DEFAULT)),
            );
        f.render_widget(narrative, rows[2]);

        f.render_widget(StatusBar::new(self.frame.status, self.step().kind), rows[3]);
        render_key_hints(rows[4], f.buffer_mut(), PLAYBACK_HINTS);
    }

    fn draw_header(&self, f: &mut Frame<'_>, area: Rect) {
        let title = Line::from(vec![
            Span::styled(
                " BUBBLE SORT ",
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("· O(n²) · stable", Style::default().fg(TEXT_MUTED)),
        ]);
        f.render_widget(Paragraph::new(title), area);
    }
}
