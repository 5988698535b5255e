//! PDF export of the raw note text

pub mod layout;

use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;

pub use layout::{EMPTY_NOTES_TEXT, NotesLayout};
use layout::{FONT_SIZE_PT, LINE_HEIGHT_MM, MARGIN_LEFT_MM, MARGIN_TOP_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

/// File name of every export
pub const EXPORT_FILE_NAME: &str = "StudyNotes.pdf";

const DOCUMENT_TITLE: &str = "Study Notes";

/// Errors that can occur while exporting notes
#[derive(Debug, Error)]
pub enum ExportError {
    /// PDF generation failed
    #[error("PDF error: {0}")]
    Pdf(String),

    /// Writing the file failed
    #[error("Failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render a laid-out document to PDF bytes
pub fn render_pdf(layout: &NotesLayout) -> Result<Vec<u8>, ExportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(DOCUMENT_TITLE, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Notes");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_error)?;

    for (index, lines) in layout.pages().iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Notes")
        };
        let canvas = doc.get_page(page).get_layer(layer);

        for (row, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = PAGE_HEIGHT_MM - MARGIN_TOP_MM - row as f32 * LINE_HEIGHT_MM;
            canvas.use_text(line.as_str(), FONT_SIZE_PT, Mm(MARGIN_LEFT_MM), Mm(y), &font);
        }
    }

    doc.save_to_bytes().map_err(pdf_error)
}

fn pdf_error(e: printpdf::Error) -> ExportError {
    ExportError::Pdf(e.to_string())
}

/// Write the notes as `StudyNotes.pdf` inside `dir`, returning the file path
pub fn export_notes(text: &str, dir: &Path) -> Result<PathBuf, ExportError> {
    let layout = NotesLayout::from_text(text);
    let bytes = render_pdf(&layout)?;

    std::fs::create_dir_all(dir)
        .map_err(|source| ExportError::Io { path: dir.to_path_buf(), source })?;

    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, bytes).map_err(|source| ExportError::Io { path: path.clone(), source })?;

    tracing::info!(path = %path.display(), pages = layout.pages().len(), "notes exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_writes_named_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_notes("Photosynthesis turns light into sugar.", dir.path()).unwrap();

        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("today");
        let path = export_notes("", &nested).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn export_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        export_notes("first", dir.path()).unwrap();
        let path = export_notes("second", dir.path()).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
        assert!(path.exists());
    }
}
