//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use wordtally_core::{RankStrategy, Session};
use wordtally_source::{Corpus, FileSource, HttpSource, PageSource};

use crate::config::TallyConfig;

pub mod browse;
pub mod report;

/// Browse the word frequencies of one section of a web page
#[derive(Parser, Debug)]
#[command(name = "wordtally")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (defaults to ./wordtally.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactively browse the ranked words (default)
    Browse(browse::BrowseArgs),

    /// Print the top words once and exit
    Report(report::ReportArgs),
}

/// Options selecting the page, section and ranking.
#[derive(Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Page to fetch
    #[arg(long, value_name = "URL", conflicts_with = "file")]
    pub url: Option<String>,

    /// Read a saved page instead of fetching one
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Literal text that opens the section
    #[arg(long, value_name = "TEXT")]
    pub start_marker: Option<String>,

    /// Literal text that follows the section
    #[arg(long, value_name = "TEXT")]
    pub end_marker: Option<String>,

    /// Ranking algorithm: insertion or merge
    #[arg(long, value_name = "STRATEGY")]
    pub strategy: Option<RankStrategy>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}

impl SourceArgs {
    /// Overlay the flags that were given on top of `config`.
    pub fn apply(&self, config: &mut TallyConfig) {
        if let Some(url) = &self.url {
            config.source.url = url.clone();
            config.source.file = None;
        }
        if let Some(file) = &self.file {
            config.source.file = Some(file.clone());
        }
        if let Some(marker) = &self.start_marker {
            config.source.start_marker = marker.clone();
        }
        if let Some(marker) = &self.end_marker {
            config.source.end_marker = marker.clone();
        }
        if let Some(strategy) = self.strategy {
            config.ranking.strategy = strategy;
        }
        if let Some(secs) = self.timeout_secs {
            config.source.timeout_secs = secs;
        }
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let mut config = TallyConfig::load(self.config.as_deref())?;

        match self.command.unwrap_or(Commands::Browse(browse::BrowseArgs::default())) {
            Commands::Browse(args) => {
                args.source.apply(&mut config);
                browse::execute(args, &config).await
            }
            Commands::Report(args) => {
                args.source.apply(&mut config);
                report::execute(args, &config).await
            }
        }
    }
}

/// Load the configured page and start a session over its section.
///
/// Any failure here is fatal: nothing can be counted without the page.
pub async fn load_session(config: &TallyConfig, show_progress: bool) -> Result<Session> {
    let source = &config.source;
    let (page_source, location): (Box<dyn PageSource>, String) = match &source.file {
        Some(path) => (Box::new(FileSource), path.display().to_string()),
        None => (
            Box::new(HttpSource::new(source.timeout(), &source.user_agent)?),
            source.url.clone(),
        ),
    };

    let spinner = show_progress.then(|| fetch_spinner(&location));
    let loaded = Corpus::load(page_source.as_ref(), &location, &source.markers()).await;
    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }
    let corpus = loaded.with_context(|| format!("Unable to load a section of {location}"))?;

    let session = Session::from_tokens(corpus.tokens(), config.ranking.strategy)
        .with_limit(config.display.limit);

    let summary = session.summary();
    info!(
        unique_words = summary.unique_words,
        tokens = summary.tokens_seen,
        discarded = summary.discarded,
        "Counted section"
    );
    Ok(session)
}

fn fetch_spinner(location: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Loading {location}"));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_defaults_to_browse() {
        let cli = Cli::try_parse_from(["wordtally"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_report_flags() {
        let cli = Cli::try_parse_from([
            "wordtally",
            "-vv",
            "report",
            "--limit",
            "5",
            "--exclude",
            "the",
            "--exclude",
            "and",
            "--strategy",
            "merge",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Report(args)) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.limit, Some(5));
        assert_eq!(args.exclude, vec!["the", "and"]);
        assert_eq!(args.source.strategy, Some(RankStrategy::Merge));
        assert!(args.json);
    }

    #[test]
    fn test_url_conflicts_with_file() {
        let result = Cli::try_parse_from([
            "wordtally",
            "browse",
            "--url",
            "https://example.org",
            "--file",
            "page.html",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = TallyConfig::default();
        let args = SourceArgs {
            url: Some("https://example.org/wiki/Rust".to_string()),
            start_marker: Some("<h2>Start</h2>".to_string()),
            strategy: Some(RankStrategy::Merge),
            timeout_secs: Some(3),
            ..Default::default()
        };
        args.apply(&mut config);

        assert_eq!(config.source.url, "https://example.org/wiki/Rust");
        assert_eq!(config.source.start_marker, "<h2>Start</h2>");
        assert_eq!(config.ranking.strategy, RankStrategy::Merge);
        assert_eq!(config.source.timeout_secs, 3);
        assert_eq!(
            config.source.end_marker,
            TallyConfig::default().source.end_marker
        );
    }

    #[tokio::test]
    async fn test_load_session_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "<body><h2>Start</h2><p>the cat saw the 3rd dog</p><h2>End</h2></body>"
        )
        .unwrap();

        let mut config = TallyConfig::default();
        SourceArgs {
            file: Some(file.path().to_path_buf()),
            start_marker: Some("<h2>Start</h2>".to_string()),
            end_marker: Some("<h2>End</h2>".to_string()),
            ..Default::default()
        }
        .apply(&mut config);

        let session = load_session(&config, false).await.unwrap();
        assert_eq!(session.table().get("The"), Some(2));
        assert_eq!(session.table().unique_words(), 4);
        assert_eq!(session.ranked().as_slice()[0].word, "The");
    }

    #[tokio::test]
    async fn test_load_session_missing_marker_is_fatal() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<body>no sections</body>").unwrap();

        let mut config = TallyConfig::default();
        config.source.file = Some(file.path().to_path_buf());

        let err = load_session(&config, false).await.unwrap_err();
        assert!(err.to_string().contains("Unable to load"));
    }
}
