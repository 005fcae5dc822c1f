//! Terminal user interface using Ratatui.
//!
//! The board, the palette studio and their overlays are drawn from a single
//! [`AppState`]. Key events and the 50 ms tick are the only things that
//! mutate it.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod board;
pub mod clipboard;
pub mod handlers;
pub mod header;
pub mod help_overlay;
pub mod palette_view;
pub mod status_bar;
pub mod theme;
pub mod win_dialog;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::game::{GameEvent, Session};
use crate::shortcuts::{contexts, ShortcutRegistry};

pub use board::Celebration;
pub use clipboard::HexClipboard;
pub use help_overlay::HelpOverlayState;
pub use palette_view::{GeneratorSlot, PaletteScreen};
pub use theme::Theme;

/// How long the event loop waits for input before ticking the game.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which full-screen view is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The card grid
    #[default]
    Board,
    /// The palette generator and previews
    Palette,
}

/// Application state - single source of truth
pub struct AppState {
    /// Game session: deck, score, pending resolutions
    pub session: Session,
    /// Loaded configuration
    pub config: Config,
    /// Current theme
    pub theme: Theme,
    /// Key bindings per context
    pub shortcuts: ShortcutRegistry,

    /// Visible screen
    pub screen: Screen,
    /// Board index under the cursor
    pub cursor: usize,
    /// Help overlay, when open
    pub help: Option<HelpOverlayState>,
    /// Confetti after the last pair
    pub celebration: Option<Celebration>,

    /// Palette studio state
    pub palette: PaletteScreen,
    /// Hex copy target
    pub clipboard: HexClipboard,

    /// One-line feedback in the status bar
    pub status_message: String,
    /// Error shown in the overlay until dismissed
    pub error_message: Option<String>,
    /// Set by the quit action
    pub should_quit: bool,
}

impl AppState {
    /// Creates the UI state around an existing session.
    #[must_use]
    pub fn new(
        session: Session,
        config: Config,
        theme: Theme,
        generator: GeneratorSlot,
        clipboard: HexClipboard,
    ) -> Self {
        let help = config
            .ui
            .show_help_on_startup
            .then(HelpOverlayState::new);

        Self {
            session,
            config,
            theme,
            shortcuts: ShortcutRegistry::new(),
            screen: Screen::Board,
            cursor: 0,
            help,
            celebration: None,
            palette: PaletteScreen::new(generator),
            clipboard,
            status_message: String::new(),
            error_message: None,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        let error = error.into();
        tracing::warn!(%error, "showing error");
        self.error_message = Some(error);
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Shortcut context for the current screen and overlays.
    #[must_use]
    pub fn context(&self) -> &'static str {
        if self.help.is_some() {
            return contexts::HELP;
        }
        match self.screen {
            Screen::Palette if self.palette.editing => contexts::PALETTE_INPUT,
            Screen::Palette => contexts::PALETTE,
            Screen::Board if self.session.is_won() => contexts::WON,
            Screen::Board => contexts::BOARD,
        }
    }

    /// Reflects game events in the UI.
    pub fn apply_events(&mut self, events: &[GameEvent], now: Instant) {
        for event in events {
            match event {
                GameEvent::Dealt { difficulty } => {
                    self.cursor = 0;
                    self.celebration = None;
                    self.set_status(format!("New {} game", difficulty.label()));
                }
                GameEvent::Revealed { .. } | GameEvent::Hidden => {}
                GameEvent::Matched { color } => {
                    self.set_status(format!("It's {} color!", color.name));
                }
                GameEvent::Mismatched { .. } => self.set_status("Not a match"),
                GameEvent::Celebrate => self.celebration = Some(Celebration::start(now)),
                GameEvent::Won { score, moves } => {
                    self.set_status(format!("You won in {moves} moves. Score {score}"));
                }
            }
        }
    }

    /// How long the loop may wait for input before the next pending
    /// resolution is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.session
            .next_deadline()
            .map_or(POLL_INTERVAL, |due| {
                due.saturating_duration_since(now).min(POLL_INTERVAL)
            })
    }

    /// Advances timers: pair resolutions, the palette job and the confetti.
    pub fn tick(&mut self, now: Instant) {
        let events = self.session.tick(now);
        self.apply_events(&events, now);

        if let Some(result) = self.palette.job.poll() {
            match result {
                Ok(palette) => {
                    tracing::info!(name = %palette.name, colors = palette.colors.len(), "palette ready");
                    self.set_status(format!("Generated '{}'", palette.name));
                    self.palette.show(palette);
                }
                Err(e) => {
                    self.set_status("Generation failed");
                    self.set_error(format!("Failed to generate palette: {e}"));
                }
            }
        }

        if self
            .celebration
            .as_ref()
            .is_some_and(|c| !c.is_active(now))
        {
            self.celebration = None;
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to original state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main TUI loop.
///
/// Redraws, waits up to [`POLL_INTERVAL`] for a key, then ticks.
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, state, Instant::now()))?;

        if event::poll(state.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key_event(state, key, Instant::now())?;
                }
            }
        }

        if state.should_quit {
            break;
        }

        state.tick(Instant::now());
    }

    Ok(())
}

/// Main render function
pub fn render(f: &mut Frame, state: &AppState, now: Instant) {
    let theme = &state.theme;

    let background = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(background, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title and selector
            Constraint::Min(8),    // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    header::render(f, chunks[0], state);

    match state.screen {
        Screen::Board => {
            board::render(f, chunks[1], state, now);
            if state.session.is_won() {
                win_dialog::render(f, chunks[1], state);
            }
        }
        Screen::Palette => palette_view::render(f, chunks[1], state, now),
    }

    status_bar::render(f, chunks[2], state);

    if let Some(help) = &state.help {
        help_overlay::render(f, f.area(), help, &state.shortcuts, theme);
    }

    // Error overlay goes on top of everything
    if let Some(error) = &state.error_message {
        render_error_overlay(f, error, theme);
    }
}

/// Renders a modal error overlay.
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(70, 40, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(" ERROR ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let details = Paragraph::new(error)
        .style(Style::default().fg(theme.text))
        .wrap(Wrap { trim: true });
    f.render_widget(details, chunks[0]);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled(
            "Enter/Esc",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Dismiss", Style::default().fg(theme.text_muted)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(hint, chunks[1]);
}

/// Helper to create centered rectangle
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input.
///
/// An open error overlay swallows every key except Enter and Esc.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent, now: Instant) -> Result<()> {
    if state.error_message.is_some() {
        if matches!(
            key.code,
            event::KeyCode::Enter | event::KeyCode::Esc
        ) {
            state.clear_error();
        }
        return Ok(());
    }

    let context = state.context();
    match state.shortcuts.lookup(context, key) {
        Some(action) => handlers::dispatch_action(state, action, now),
        None if context == contexts::PALETTE_INPUT => {
            handlers::palette::handle_prompt_input(state, key);
            Ok(())
        }
        None => Ok(()),
    }
}
