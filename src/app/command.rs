//! Command parsing for the command line

use std::path::PathBuf;

use crate::view::{SectionId, TabId};

/// Parsed command from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Unlock content with the current notes: :upload
    Upload,
    /// Select a notes file: :file <path>
    File(PathBuf),
    /// Append clipboard text to the notes: :paste
    Paste,
    /// Empty the notes area: :clear
    Clear,
    /// Switch section: :section <id>
    Section(SectionId),
    /// Switch tab: :tab <id>
    Tab(TabId),
    /// Request a summary: :summary
    Summary,
    /// Request flashcards: :flashcards
    Flashcards,
    /// Request a quiz: :quiz
    Quiz,
    /// Ask a question about the notes: :ask <question>
    Ask(String),
    /// Save the notes as PDF: :export
    Export,
    /// Show help: :help or :h
    Help,
    /// Quit the application: :q or :quit
    Quit,
    /// Clear message: (empty command)
    Nop,
}

/// Result of parsing a command
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed command
    Ok(Command),
    /// Unknown command
    UnknownCommand(String),
    /// Command needs an argument
    MissingArgument(String),
    /// Argument was not understood
    InvalidArgument(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> ParseResult {
    let input = input.trim();

    if input.is_empty() {
        return ParseResult::Ok(Command::Nop);
    }

    // Split into command and arguments
    let mut parts = input.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("");
    let args = parts.next().map(|s| s.trim()).unwrap_or("");

    match cmd.to_lowercase().as_str() {
        "upload" | "u" => ParseResult::Ok(Command::Upload),
        "file" | "load" => {
            if args.is_empty() {
                ParseResult::MissingArgument("file".to_string())
            } else {
                ParseResult::Ok(Command::File(PathBuf::from(args)))
            }
        }
        "paste" | "p" => ParseResult::Ok(Command::Paste),
        "clear" => ParseResult::Ok(Command::Clear),
        "section" | "sec" => {
            if args.is_empty() {
                ParseResult::MissingArgument("section".to_string())
            } else {
                match SectionId::parse(args) {
                    Some(id) => ParseResult::Ok(Command::Section(id)),
                    None => ParseResult::InvalidArgument(args.to_string()),
                }
            }
        }
        "tab" | "t" => {
            if args.is_empty() {
                ParseResult::MissingArgument("tab".to_string())
            } else {
                match TabId::parse(args) {
                    Some(id) => ParseResult::Ok(Command::Tab(id)),
                    None => ParseResult::InvalidArgument(args.to_string()),
                }
            }
        }
        "summary" | "sum" => ParseResult::Ok(Command::Summary),
        "flashcards" | "cards" => ParseResult::Ok(Command::Flashcards),
        "quiz" => ParseResult::Ok(Command::Quiz),
        "ask" => {
            if args.is_empty() {
                ParseResult::MissingArgument("ask".to_string())
            } else {
                ParseResult::Ok(Command::Ask(args.to_string()))
            }
        }
        "export" | "pdf" | "download" => ParseResult::Ok(Command::Export),
        "help" | "h" | "?" => ParseResult::Ok(Command::Help),
        "quit" | "q" => ParseResult::Ok(Command::Quit),
        _ => ParseResult::UnknownCommand(cmd.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_quit_command() {
        assert!(matches!(parse_command("q"), ParseResult::Ok(Command::Quit)));
        assert!(matches!(parse_command("QUIT"), ParseResult::Ok(Command::Quit)));
    }

    #[test]
    fn parse_file_command() {
        match parse_command("file ~/notes/biology.pdf") {
            ParseResult::Ok(Command::File(path)) => {
                assert_eq!(path, PathBuf::from("~/notes/biology.pdf"));
            }
            other => panic!("Expected File command, got {:?}", other),
        }
    }

    #[test]
    fn parse_file_missing_arg() {
        assert!(matches!(parse_command("file"), ParseResult::MissingArgument(_)));
    }

    #[test]
    fn parse_ask_keeps_whole_question() {
        match parse_command("ask what is  osmosis?") {
            ParseResult::Ok(Command::Ask(q)) => assert_eq!(q, "what is  osmosis?"),
            other => panic!("Expected Ask command, got {:?}", other),
        }
    }

    #[test]
    fn parse_section_and_tab() {
        assert!(matches!(
            parse_command("section quiz"),
            ParseResult::Ok(Command::Section(SectionId::Quiz))
        ));
        assert!(matches!(parse_command("tab 2"), ParseResult::Ok(Command::Tab(TabId::Flashcards))));
        assert!(matches!(parse_command("tab nowhere"), ParseResult::InvalidArgument(_)));
    }

    #[test]
    fn parse_generation_commands() {
        assert!(matches!(parse_command("summary"), ParseResult::Ok(Command::Summary)));
        assert!(matches!(parse_command("cards"), ParseResult::Ok(Command::Flashcards)));
        assert!(matches!(parse_command("quiz"), ParseResult::Ok(Command::Quiz)));
        assert!(matches!(parse_command("pdf"), ParseResult::Ok(Command::Export)));
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(parse_command("frobnicate"), ParseResult::UnknownCommand(_)));
    }

    #[test]
    fn parse_empty_is_nop() {
        assert!(matches!(parse_command(""), ParseResult::Ok(Command::Nop)));
        assert!(matches!(parse_command("   "), ParseResult::Ok(Command::Nop)));
    }
}
