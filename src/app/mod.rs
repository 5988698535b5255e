//! Application state and event handling

pub mod command;
pub mod input;
pub mod session;
pub mod state;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Config;
use crate::study::{StudyAid, StudyClient};
use crate::theme::Theme;
use crate::ui;
pub use session::Session;

/// The main application
pub struct App {
    /// Active color theme
    theme: Theme,

    /// State plus request dispatch
    session: Session,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Result<Self> {
        let client = StudyClient::new(&config.api_base_url)
            .with_context(|| format!("Cannot use API URL {}", config.api_base_url))?;
        let session = Session::new(StudyAid::new(client), config.export_dir());
        let theme = config.active_theme();
        let terminal = Self::setup_terminal()?;

        tracing::info!(api = %config.api_base_url, "studymate started");
        Ok(Self { theme, session, terminal })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            // Write any responses that arrived since the last frame
            self.session.apply_results();

            let state = &self.session.state;
            let theme = &self.theme;
            self.terminal.draw(|frame| {
                ui::draw(frame, state, theme);
            })?;

            // Poll briefly so the runtime can drive in-flight requests
            if event::poll(std::time::Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press && self.session.handle_key(key) {
                        break;
                    }
                }
            }
            tokio::task::yield_now().await;
        }

        self.restore_terminal()?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
