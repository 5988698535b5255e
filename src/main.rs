use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use studymate::study::{StudyAid, StudyClient, StudyRequest};
use studymate::view::require_question;
use studymate::{App, Config, export};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "studymate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Study API base URL (overrides the config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize notes
    Summary(NotesArgs),
    /// Turn notes into flashcards
    Flashcards(NotesArgs),
    /// Generate quiz questions from notes
    Quiz(NotesArgs),
    /// Ask a question about notes
    Ask {
        /// The question to ask
        question: String,
        #[command(flatten)]
        notes: NotesArgs,
    },
    /// Save notes as StudyNotes.pdf
    Export {
        #[command(flatten)]
        notes: NotesArgs,
        /// Directory to write into (defaults to the configured export directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args)]
struct NotesArgs {
    /// Note text; read from stdin when omitted
    #[arg(short, long)]
    text: Option<String>,
}

impl NotesArgs {
    fn read(self) -> Result<String> {
        match self.text {
            Some(text) => Ok(text),
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text).context("Failed to read notes from stdin")?;
                Ok(text)
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?.with_api_url(cli.api_url);

    match cli.command {
        None => {
            // The TUI owns the terminal, so logs go to a file
            init_file_logging()?;
            let mut app = App::new(config)?;
            app.run().await?;
        }
        Some(command) => {
            init_stderr_logging();
            run_headless(command, &config, &mut std::io::stdout()).await?;
        }
    }

    Ok(())
}

/// Run one subcommand, writing its result (or the fallback message) to `out`
async fn run_headless(command: Commands, config: &Config, out: &mut impl Write) -> Result<()> {
    let request = match command {
        Commands::Summary(notes) => StudyRequest::summary(notes.read()?),
        Commands::Flashcards(notes) => StudyRequest::flashcards(notes.read()?),
        Commands::Quiz(notes) => StudyRequest::quiz(notes.read()?),
        Commands::Ask { question, notes } => {
            let question = require_question(&question)?.to_string();
            StudyRequest::question(notes.read()?, question)
        }
        Commands::Export { notes, output } => {
            let dir = output.unwrap_or_else(|| config.export_dir());
            let path = export::export_notes(&notes.read()?, &dir)?;
            writeln!(out, "{}", path.display())?;
            return Ok(());
        }
    };

    let client = StudyClient::new(&config.api_base_url)
        .with_context(|| format!("Cannot use API URL {}", config.api_base_url))?;
    let rendered = StudyAid::new(client).run(&request).await;

    writeln!(out, "{}", rendered.to_plain_text())?;
    Ok(())
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "studymate=info".into())
}

fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn init_file_logging() -> Result<()> {
    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file)),
        )
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use studymate::study::FALLBACK_MESSAGES;
    use studymate::view::GateError;

    fn unreachable_config() -> Config {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        Config::default().with_api_url(Some(format!("http://127.0.0.1:{}", port)))
    }

    fn notes(text: &str) -> NotesArgs {
        NotesArgs { text: Some(text.to_string()) }
    }

    #[tokio::test]
    async fn fallback_goes_to_stdout() {
        let mut out = Vec::new();
        run_headless(Commands::Summary(notes("cells divide")), &unreachable_config(), &mut out)
            .await
            .unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert!(FALLBACK_MESSAGES.iter().any(|m| *m == printed.trim_end()), "got {:?}", printed);
    }

    #[tokio::test]
    async fn blank_question_is_rejected_before_sending() {
        let mut out = Vec::new();
        let command = Commands::Ask { question: "  ".to_string(), notes: notes("cells divide") };
        let err = run_headless(command, &unreachable_config(), &mut out).await.unwrap_err();

        assert_eq!(err.downcast_ref::<GateError>(), Some(&GateError::QuestionRequired));
        assert!(out.is_empty());
    }
}
