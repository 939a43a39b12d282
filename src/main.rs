//! LinkFlow - Main Entry Point
//!
//! Opens the link page in a native window, or exports it as static HTML.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use linkflow::app::application::run_app;
use linkflow::constants::LOG_FILE_PREFIX;
use linkflow::domain::content::PageContent;
use linkflow::domain::theme::ThemeMode;
use linkflow::export::{ExportOptions, export_page};
use linkflow::helpers::get_or_create_data_dir;
use linkflow::i18n::{Catalogs, SupportedLanguage};
use linkflow::utils::preferences::{FileStorage, MemoryStorage, SharedStorage};

#[derive(Parser)]
#[command(name = "linkflow")]
#[command(version)]
#[command(about = "A personal link-in-bio page")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the page in a window (default)
    Run,

    /// Render the page as a standalone HTML document
    Export {
        /// Language to render in
        #[arg(short, long, value_enum)]
        lang: Option<LanguageArg>,

        /// Color scheme
        #[arg(short, long, value_enum, default_value = "light")]
        theme: ThemeArg,

        /// Render the section with this id collapsed (repeatable)
        #[arg(short, long, value_name = "SECTION_ID")]
        collapse: Vec<String>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LanguageArg {
    En,
    Pt,
    Es,
}

impl From<LanguageArg> for SupportedLanguage {
    fn from(arg: LanguageArg) -> Self {
        match arg {
            LanguageArg::En => SupportedLanguage::En,
            LanguageArg::Pt => SupportedLanguage::Pt,
            LanguageArg::Es => SupportedLanguage::Es,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing();

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run(),
        Commands::Export {
            lang,
            theme,
            collapse,
            output,
        } => export(
            ExportOptions {
                language: lang.map(Into::into),
                theme: theme.into(),
                collapsed: collapse,
            },
            output,
        ),
    }
}

/// Log to stderr, and to a daily file in the data directory when it exists.
fn init_tracing() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

fn run() -> Result<()> {
    info!("Starting LinkFlow...");

    let content = PageContent::embedded().context("failed to load page content")?;
    let catalogs = Catalogs::embedded().context("failed to load translations")?;

    let storage: SharedStorage = match FileStorage::in_config_dir() {
        Ok(storage) => {
            info!(path = %storage.path().display(), "Using preferences file");
            Rc::new(storage)
        }
        Err(e) => {
            warn!(error = %e, "Preferences will not persist");
            Rc::new(MemoryStorage::new())
        }
    };

    run_app(content, Rc::new(catalogs), storage);
    Ok(())
}

fn export(options: ExportOptions, output: Option<PathBuf>) -> Result<()> {
    let content = PageContent::embedded().context("failed to load page content")?;
    let catalogs = Catalogs::embedded().context("failed to load translations")?;
    let html = export_page(content, Rc::new(catalogs), &options)?;

    match output {
        Some(path) => {
            std::fs::write(&path, html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "Page exported");
        }
        None => print!("{html}"),
    }
    Ok(())
}
