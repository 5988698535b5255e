//! Dispatch of user actions onto the view state and the study API

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use super::command::{Command, ParseResult, parse_command};
use super::input::{Action, key_to_action};
use super::state::{AppState, InputMode};
use crate::export;
use crate::study::{Capability, OutputSink, Rendered, StudyAid, StudyRequest};
use crate::view::{GateError, SectionId, TabId, require_question};

/// A finished request on its way back to the UI
type StudyResult = (Capability, Rendered);

/// Everything the TUI does between keystrokes and the screen
///
/// Requests run as independent tokio tasks and report back over a channel.
/// Results are written in arrival order, so the last response to land wins
/// its output area.
pub struct Session {
    /// State read by the renderer
    pub state: AppState,
    study: StudyAid,
    export_dir: PathBuf,
    results_tx: mpsc::UnboundedSender<StudyResult>,
    results_rx: mpsc::UnboundedReceiver<StudyResult>,
}

impl Session {
    pub fn new(study: StudyAid, export_dir: PathBuf) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self { state: AppState::default(), study, export_dir, results_tx, results_rx }
    }

    /// Handle a key press, returns true if should exit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Alerts are modal: only dismissal gets through
        if self.state.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.alert = None;
            }
            return false;
        }

        match self.state.mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Command => self.handle_command_key(key),
            InputMode::EditNotes => {
                self.handle_notes_key(key);
                false
            }
            InputMode::EditQuestion => {
                self.handle_question_key(key);
                false
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> bool {
        let Some(action) = key_to_action(key.code, key.modifiers) else {
            return false;
        };

        if self.state.show_help && action != Action::Help {
            self.state.show_help = false;
            if action == Action::Back {
                return false;
            }
        }

        match action {
            Action::CommandMode => {
                self.state.command_line.begin();
                self.state.mode = InputMode::Command;
            }
            Action::Edit => self.begin_editing(),
            Action::Help => self.state.show_help = !self.state.show_help,
            Action::Back => self.state.command_line.clear_message(),
            Action::Upload => self.upload(),
            Action::Tab(tab) => self.show_tab(tab),
            Action::NextTab => self.show_tab(self.state.view.active_tab().next()),
            Action::PrevTab => self.show_tab(self.state.view.active_tab().prev()),
            Action::Generate => self.generate_for_section(),
            Action::ScrollUp => self.scroll(-1),
            Action::ScrollDown => self.scroll(1),
            Action::Paste => self.paste(),
            Action::Export => self.export(),
        }
        false
    }

    fn handle_command_key(&mut self, key: KeyEvent) -> bool {
        let cl = &mut self.state.command_line;
        match key.code {
            KeyCode::Esc => {
                cl.input.clear();
                self.state.mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                let input = std::mem::take(&mut cl.input.text);
                cl.input.clear();
                cl.add_to_history(input.clone());
                self.state.mode = InputMode::Normal;
                return self.execute_input(&input);
            }
            KeyCode::Backspace => {
                if cl.input.is_empty() {
                    self.state.mode = InputMode::Normal;
                } else {
                    cl.input.delete_char();
                }
            }
            KeyCode::Left => cl.input.move_left(),
            KeyCode::Right => cl.input.move_right(),
            KeyCode::Up => cl.history_up(),
            KeyCode::Down => cl.history_down(),
            KeyCode::Char(c) => cl.input.insert_char(c),
            _ => {}
        }
        false
    }

    fn handle_notes_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('v') {
            self.paste();
            return;
        }

        let notes = &mut self.state.upload.notes;
        match key.code {
            KeyCode::Esc => self.state.mode = InputMode::Normal,
            KeyCode::Enter => notes.insert_char('\n'),
            KeyCode::Tab => notes.insert_str("    "),
            KeyCode::Backspace => notes.delete_char(),
            KeyCode::Left => notes.move_left(),
            KeyCode::Right => notes.move_right(),
            KeyCode::Up => notes.move_up(),
            KeyCode::Down => notes.move_down(),
            KeyCode::Home => notes.move_home(),
            KeyCode::End => notes.move_line_end(),
            KeyCode::Char(c) => notes.insert_char(c),
            _ => {}
        }
    }

    fn handle_question_key(&mut self, key: KeyEvent) {
        let question = &mut self.state.question;
        match key.code {
            KeyCode::Esc => self.state.mode = InputMode::Normal,
            KeyCode::Enter => {
                self.state.mode = InputMode::Normal;
                self.request(Capability::Qa);
            }
            KeyCode::Backspace => question.delete_char(),
            KeyCode::Left => question.move_left(),
            KeyCode::Right => question.move_right(),
            KeyCode::Char(c) => question.insert_char(c),
            _ => {}
        }
    }

    /// Parse and run a command line, returns true if should exit
    pub fn execute_input(&mut self, input: &str) -> bool {
        match parse_command(input) {
            ParseResult::Ok(command) => self.execute(command),
            ParseResult::UnknownCommand(cmd) => {
                self.state.command_line.set_error(format!("Unknown command: {}", cmd));
                false
            }
            ParseResult::MissingArgument(cmd) => {
                self.state.command_line.set_error(format!(":{} needs an argument", cmd));
                false
            }
            ParseResult::InvalidArgument(arg) => {
                self.state.command_line.set_error(format!("Not a section or tab: {}", arg));
                false
            }
        }
    }

    /// Run a parsed command, returns true if should exit
    pub fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::Upload => self.upload(),
            Command::File(path) => self.select_file(path),
            Command::Paste => self.paste(),
            Command::Clear => {
                self.state.upload.notes.clear();
                self.state.command_line.set_message("Notes cleared");
            }
            Command::Section(id) => self.show_section(id),
            Command::Tab(id) => self.show_tab(id),
            Command::Summary => self.request_on_tab(Capability::Summary, TabId::Summary),
            Command::Flashcards => self.request_on_tab(Capability::Flashcards, TabId::Flashcards),
            Command::Quiz => self.request_on_tab(Capability::Quiz, TabId::Quiz),
            Command::Ask(question) => {
                self.state.question.set(question);
                self.request_on_tab(Capability::Qa, TabId::Qa);
            }
            Command::Export => self.export(),
            Command::Help => self.state.show_help = true,
            Command::Quit => return true,
            Command::Nop => self.state.command_line.clear_message(),
        }
        false
    }

    /// Unlock the content area with whatever the upload form holds
    pub fn upload(&mut self) {
        let (has_text, has_file) = (self.state.upload.has_text(), self.state.upload.has_file());
        match self.state.view.unlock_after_upload(has_text, has_file) {
            Ok(()) => {
                self.state.mode = InputMode::Normal;
                self.state.command_line.set_message("Notes uploaded");
            }
            Err(e) => self.state.alert(e.to_string()),
        }
    }

    /// Open a sidebar section, bringing its tab along
    pub fn show_section(&mut self, id: SectionId) {
        if let Err(e) = self.state.view.activate_section(id) {
            self.state.alert(e.to_string());
            return;
        }
        if let Some(tab) = id.tab() {
            // Cannot fail: the section switch above already passed the gate
            let _ = self.state.view.activate_tab(tab);
        }
    }

    /// Open a tab, moving to its section if another one is showing
    pub fn show_tab(&mut self, id: TabId) {
        if let Err(e) = self.state.view.activate_tab(id) {
            self.state.alert(e.to_string());
            return;
        }
        let _ = self.state.view.activate_section(SectionId::from(id));
    }

    fn request_on_tab(&mut self, capability: Capability, tab: TabId) {
        if !self.state.view.notes_uploaded() {
            self.state.alert(GateError::NotesRequired.to_string());
            return;
        }
        self.show_tab(tab);
        self.request(capability);
    }

    /// Issue one request for a capability using the current notes
    pub fn request(&mut self, capability: Capability) {
        if !self.state.view.notes_uploaded() {
            self.state.alert(GateError::NotesRequired.to_string());
            return;
        }

        let question = if capability == Capability::Qa {
            match require_question(&self.state.question.text) {
                Ok(question) => Some(question.to_string()),
                Err(e) => {
                    self.state.alert(e.to_string());
                    return;
                }
            }
        } else {
            None
        };

        let request =
            StudyRequest { capability, text: self.state.upload.text().to_string(), question };
        self.state.outputs.get_mut(capability).pending += 1;

        let study = self.study.clone();
        let tx = self.results_tx.clone();
        tokio::spawn(async move {
            let content = study.run(&request).await;
            // Receiver only goes away when the app is shutting down
            let _ = tx.send((request.capability, content));
        });

        tracing::info!(capability = capability.display_name(), "study request issued");
    }

    /// Write every result that has arrived, returns how many were applied
    pub fn apply_results(&mut self) -> usize {
        let mut applied = 0;
        while let Ok((capability, content)) = self.results_rx.try_recv() {
            self.state.outputs.get_mut(capability).set_content(content);
            applied += 1;
        }
        applied
    }

    /// Wait for the next result and write it
    pub async fn wait_for_result(&mut self) -> Option<Capability> {
        let (capability, content) = self.results_rx.recv().await?;
        self.state.outputs.get_mut(capability).set_content(content);
        Some(capability)
    }

    /// Save the notes as StudyNotes.pdf in the export directory
    pub fn export(&mut self) {
        match export::export_notes(self.state.upload.text(), &self.export_dir) {
            Ok(path) => {
                self.state.command_line.set_message(format!("Saved {}", path.display()));
                self.state.last_export = Some(path);
            }
            Err(e) => {
                tracing::error!("Export failed: {}", e);
                self.state.command_line.set_error(format!("Export failed: {}", e));
            }
        }
    }

    /// Append clipboard text to the notes
    pub fn paste(&mut self) {
        let text = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text());
        match text {
            Ok(text) => {
                self.state.upload.notes.move_end();
                self.state.upload.notes.insert_str(&text);
                self.state.command_line.set_message(format!("Pasted {} characters", text.chars().count()));
            }
            Err(e) => self.state.command_line.set_error(format!("Clipboard unavailable: {}", e)),
        }
    }

    /// Pick the notes file; only its existence matters
    pub fn select_file(&mut self, path: PathBuf) {
        if path.is_file() {
            self.state.command_line.set_message(format!("Selected {}", path.display()));
            self.state.upload.file = Some(path);
        } else {
            self.state.command_line.set_error(format!("No such file: {}", path.display()));
        }
    }

    fn begin_editing(&mut self) {
        match self.state.view.active_section() {
            SectionId::Upload => self.state.mode = InputMode::EditNotes,
            SectionId::Qa => self.state.mode = InputMode::EditQuestion,
            _ => self.state.command_line.set_message("Nothing to edit here"),
        }
    }

    fn generate_for_section(&mut self) {
        match self.state.view.active_section() {
            SectionId::Upload => self.upload(),
            SectionId::Export => self.export(),
            SectionId::Summary => self.request(Capability::Summary),
            SectionId::Flashcards => self.request(Capability::Flashcards),
            SectionId::Qa => self.request(Capability::Qa),
            SectionId::Quiz => self.request(Capability::Quiz),
        }
    }

    fn scroll(&mut self, delta: isize) {
        let capability = Capability::from(self.state.view.active_tab());
        self.state.outputs.get_mut(capability).scroll_by(delta);
    }
}
