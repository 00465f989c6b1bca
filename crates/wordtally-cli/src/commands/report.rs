//! One-shot frequency report.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::warn;

use wordtally_core::{CorpusSummary, DisplayLimit, TopN};

use super::SourceArgs;
use crate::config::TallyConfig;
use crate::output;

#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of words to show
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Word to leave out of the results (repeatable)
    #[arg(short = 'x', long, value_name = "WORD")]
    pub exclude: Vec<String>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: CorpusSummary,
    excluded: Vec<&'a str>,
    results: &'a TopN,
}

pub async fn execute(args: ReportArgs, config: &TallyConfig) -> Result<()> {
    let mut session = super::load_session(config, !args.json).await?;

    if let Some(limit) = args.limit {
        session = session.with_limit(DisplayLimit::new(limit)?);
    }
    for word in &args.exclude {
        if let Err(e) = session.exclusions_mut().add(word) {
            warn!(word = %word, error = %e, "Ignoring exclusion");
        }
    }

    let results = session.results();
    if args.json {
        let report = JsonReport {
            summary: session.summary(),
            excluded: session.exclusions().list().collect(),
            results: &results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_summary(&session.summary());
        output::print_results(&results);
    }

    Ok(())
}
