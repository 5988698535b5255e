//! Line wrapping and pagination for exported notes

use textwrap::wrap;

/// Body text used when there are no notes
pub const EMPTY_NOTES_TEXT: &str = "No notes available.";

pub(crate) const PAGE_WIDTH_MM: f32 = 210.0;
pub(crate) const PAGE_HEIGHT_MM: f32 = 297.0;
pub(crate) const MARGIN_LEFT_MM: f32 = 15.0;
pub(crate) const MARGIN_TOP_MM: f32 = 20.0;
pub(crate) const FONT_SIZE_PT: f32 = 12.0;
pub(crate) const LINE_HEIGHT_MM: f32 = 5.5;

/// Columns of 12pt Helvetica that fit in 180mm
const WRAP_COLUMNS: usize = 84;
const LINES_PER_PAGE: usize = 46;

/// Notes split into pages of wrapped lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesLayout {
    pages: Vec<Vec<String>>,
}

impl NotesLayout {
    pub fn from_text(text: &str) -> Self {
        let body = if text.is_empty() { EMPTY_NOTES_TEXT } else { text };

        let lines: Vec<String> = body
            .lines()
            .flat_map(|line| {
                if line.trim().is_empty() {
                    vec![String::new()]
                } else {
                    wrap(line, WRAP_COLUMNS).into_iter().map(|l| l.into_owned()).collect()
                }
            })
            .collect();

        let mut pages: Vec<Vec<String>> =
            lines.chunks(LINES_PER_PAGE).map(|chunk| chunk.to_vec()).collect();
        if pages.is_empty() {
            pages.push(Vec::new());
        }

        Self { pages }
    }

    pub fn pages(&self) -> &[Vec<String>] {
        &self.pages
    }

    /// All lines joined with newlines, as they appear in the document
    pub fn body_text(&self) -> String {
        self.pages.iter().flatten().cloned().collect::<Vec<_>>().join("\n")
    }
}
