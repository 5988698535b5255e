//! Application state definitions

use std::path::{Path, PathBuf};

use crate::study::{Capability, OutputSink, Rendered};
use crate::view::ViewState;

/// What keystrokes currently feed into
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Keys map to actions
    #[default]
    Normal,
    /// Accepting a : command
    Command,
    /// Typing into the notes area
    EditNotes,
    /// Typing the Q&A question
    EditQuestion,
}

/// Editable text with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current contents
    pub text: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl TextInput {
    /// Convert character index to byte index
    fn char_to_byte_index(&self, char_idx: usize) -> usize {
        self.text.char_indices().nth(char_idx).map(|(i, _)| i).unwrap_or(self.text.len())
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Insert a character at cursor
    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.text.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Insert a string at cursor
    pub fn insert_str(&mut self, s: &str) {
        let byte_idx = self.char_to_byte_index(self.cursor);
        self.text.insert_str(byte_idx, s);
        self.cursor += s.chars().count();
    }

    /// Delete character before cursor
    pub fn delete_char(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.char_to_byte_index(self.cursor);
            self.text.remove(byte_idx);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// (start, length) in characters of every newline-separated line
    fn line_spans(&self) -> Vec<(usize, usize)> {
        let mut start = 0;
        self.text
            .split('\n')
            .map(|line| {
                let len = line.chars().count();
                let span = (start, len);
                start += len + 1;
                span
            })
            .collect()
    }

    /// Line index and column of the cursor
    fn cursor_position(&self, spans: &[(usize, usize)]) -> (usize, usize) {
        let row = spans.iter().rposition(|(start, _)| *start <= self.cursor).unwrap_or(0);
        (row, self.cursor - spans[row].0)
    }

    /// Move to the start of the cursor's line
    pub fn move_home(&mut self) {
        let spans = self.line_spans();
        let (row, _) = self.cursor_position(&spans);
        self.cursor = spans[row].0;
    }

    /// Move to the end of the cursor's line
    pub fn move_line_end(&mut self) {
        let spans = self.line_spans();
        let (row, _) = self.cursor_position(&spans);
        let (start, len) = spans[row];
        self.cursor = start + len;
    }

    /// Move one line up, keeping the column where the line is long enough
    pub fn move_up(&mut self) {
        let spans = self.line_spans();
        match self.cursor_position(&spans) {
            (0, _) => self.cursor = 0,
            (row, col) => {
                let (start, len) = spans[row - 1];
                self.cursor = start + col.min(len);
            }
        }
    }

    /// Move one line down, keeping the column where the line is long enough
    pub fn move_down(&mut self) {
        let spans = self.line_spans();
        let (row, col) = self.cursor_position(&spans);
        match spans.get(row + 1) {
            Some(&(start, len)) => self.cursor = start + col.min(len),
            None => self.move_end(),
        }
    }

    /// Replace contents and put the cursor at the end
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.move_end();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// State for the command line
#[derive(Debug, Clone, Default)]
pub struct CommandLineState {
    /// Command being typed
    pub input: TextInput,
    /// Status/error message to display (when not in input mode)
    pub message: Option<String>,
    /// Whether message is an error
    pub is_error: bool,
    /// Command history
    pub history: Vec<String>,
    /// Current history index when navigating
    pub history_index: Option<usize>,
}

impl CommandLineState {
    /// Maximum number of history entries to keep
    const MAX_HISTORY: usize = 200;

    /// Start command mode
    pub fn begin(&mut self) {
        self.input.clear();
        self.message = None;
        self.history_index = None;
    }

    /// Set a status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = false;
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Add to history, skipping repeats of the last entry
    pub fn add_to_history(&mut self, cmd: String) {
        if !cmd.is_empty() && self.history.last() != Some(&cmd) {
            if self.history.len() >= Self::MAX_HISTORY {
                self.history.remove(0);
            }
            self.history.push(cmd);
        }
    }

    /// Navigate history up
    pub fn history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => self.history.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.history_index = Some(index);
        self.input.set(self.history[index].clone());
    }

    /// Navigate history down
    pub fn history_down(&mut self) {
        if let Some(i) = self.history_index {
            if i + 1 < self.history.len() {
                self.history_index = Some(i + 1);
                self.input.set(self.history[i + 1].clone());
            } else {
                self.history_index = None;
                self.input.clear();
            }
        }
    }
}

/// Inputs on the upload section
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    /// Pasted or typed note text
    pub notes: TextInput,
    /// Selected notes file; only its presence is ever checked
    pub file: Option<PathBuf>,
}

impl UploadForm {
    pub fn has_text(&self) -> bool {
        !self.notes.is_empty()
    }

    pub fn has_file(&self) -> bool {
        self.file.as_deref().is_some_and(Path::is_file)
    }

    pub fn text(&self) -> &str {
        &self.notes.text
    }
}

/// One capability's output area
#[derive(Debug, Clone, Default)]
pub struct OutputArea {
    /// Last content written, if any
    pub content: Option<Rendered>,
    /// Requests issued but not yet answered
    pub pending: usize,
    /// First visible line or card
    pub scroll: usize,
}

impl OutputArea {
    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    /// Last scroll position that still shows something: final line or final card
    pub fn max_scroll(&self) -> usize {
        match &self.content {
            Some(Rendered::Text(text)) => text.lines().count().saturating_sub(1),
            Some(Rendered::Cards(cards)) => cards.len().saturating_sub(1),
            Some(Rendered::Fallback(_)) | None => 0,
        }
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
    }
}

impl OutputSink for OutputArea {
    fn set_content(&mut self, content: Rendered) {
        self.content = Some(content);
        self.pending = self.pending.saturating_sub(1);
        self.scroll = 0;
    }
}

/// Output areas for all four capabilities
#[derive(Debug, Clone, Default)]
pub struct Outputs {
    pub summary: OutputArea,
    pub flashcards: OutputArea,
    pub qa: OutputArea,
    pub quiz: OutputArea,
}

impl Outputs {
    pub fn get(&self, capability: Capability) -> &OutputArea {
        match capability {
            Capability::Summary => &self.summary,
            Capability::Flashcards => &self.flashcards,
            Capability::Qa => &self.qa,
            Capability::Quiz => &self.quiz,
        }
    }

    pub fn get_mut(&mut self, capability: Capability) -> &mut OutputArea {
        match capability {
            Capability::Summary => &mut self.summary,
            Capability::Flashcards => &mut self.flashcards,
            Capability::Qa => &mut self.qa,
            Capability::Quiz => &mut self.quiz,
        }
    }
}

/// Full application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Upload gate, sections and tabs
    pub view: ViewState,

    /// Current input mode
    pub mode: InputMode,

    /// Upload section inputs
    pub upload: UploadForm,

    /// Q&A question
    pub question: TextInput,

    /// Results per capability
    pub outputs: Outputs,

    /// Blocking alert text, shown until dismissed
    pub alert: Option<String>,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Command line state
    pub command_line: CommandLineState,

    /// Path of the last PDF export
    pub last_export: Option<PathBuf>,
}

impl AppState {
    /// Raise a blocking alert
    pub fn alert(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "alert raised");
        self.alert = Some(message);
    }
}
