//! Terminal output formatting.

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use wordtally_core::{CorpusSummary, DisplayLimit, MenuChoice, Report, TallyError, TopN};

const RULE_WIDTH: usize = 40;

/// Print the main menu.
pub fn print_menu(limit: DisplayLimit) {
    println!();
    println!("{}", "Please Select An Option".bold());
    for choice in MenuChoice::ALL {
        if choice == MenuChoice::ChangeLimit {
            println!(
                "{}. {}: {}",
                choice.key(),
                choice.label(),
                format!("Currently {limit}").dimmed()
            );
        } else {
            println!("{}. {}", choice.key(), choice.label());
        }
    }
}

/// Print corpus totals.
pub fn print_summary(summary: &CorpusSummary) {
    println!(
        "{} {} unique words ({} tokens read, {} discarded)",
        "■".cyan(),
        summary.unique_words.to_string().bold(),
        summary.tokens_seen,
        summary.discarded
    );
}

/// Print the outcome of a command.
pub fn print_report(report: &Report) {
    println!();
    match report {
        Report::Results(top) => print_results(top),
        Report::LimitChanged(limit) => {
            println!("{} Showing {} words", "✓".green().bold(), limit);
        }
        Report::Excluded(word) => {
            println!("{} '{}' added to the exclude list", "✓".green().bold(), word.cyan());
        }
        Report::Included(word) => {
            println!(
                "{} '{}' removed from the exclude list",
                "✓".green().bold(),
                word.cyan()
            );
        }
        Report::Exclusions(words) => print_exclusions(words),
        Report::Cleared(removed) => {
            println!(
                "{} Exclude list has been cleared ({} removed)",
                "✓".green().bold(),
                removed
            );
        }
        Report::Count { word, count } => {
            println!("'{}' appears {} times in the list.", word.cyan(), count.to_string().bold());
        }
        Report::Goodbye => print_goodbye(),
    }
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}

/// Print ranked results with a proportional bar.
pub fn print_results(top: &TopN) {
    if top.entries.is_empty() {
        println!("{}", "No words to display.".dimmed());
    } else {
        let word_width = top
            .entries
            .iter()
            .map(|e| UnicodeWidthStr::width(e.word.as_str()))
            .max()
            .unwrap_or(0);
        let rank_width = top.entries.len().to_string().len();
        let max_count = top.entries.iter().map(|e| e.count).max().unwrap_or(1);
        let bar_room = term_width()
            .saturating_sub(rank_width + word_width + 16)
            .clamp(1, 40);

        for (i, entry) in top.entries.iter().enumerate() {
            let bar_len = (entry.count * bar_room / max_count).max(1);
            println!(
                "{:>rank_width$}. {}: {:>6} {}",
                i + 1,
                pad_right(&entry.word, word_width),
                entry.count,
                "█".repeat(bar_len).cyan()
            );
        }
    }

    if top.skipped > 0 {
        println!("{}", format!("({} excluded words skipped)", top.skipped).dimmed());
    }

    if let Some(notice) = truncation_notice(top) {
        println!("{} {}", "!".yellow().bold(), notice);
    }
}

/// Explain a limit that asks for more words than the exclusions leave.
fn truncation_notice(top: &TopN) -> Option<String> {
    top.is_truncated().then(|| {
        format!(
            "Your desired display count of {} is greater than the number of words available. Only {} are available.",
            top.requested, top.available
        )
    })
}

/// Print the exclude list, or a note that it is empty.
pub fn print_exclusions(words: &[String]) {
    if words.is_empty() {
        println!("{}", "Exclude list is currently blank.".dimmed());
        return;
    }
    println!("{}", "Exclude List".bold());
    for word in words {
        println!("  {}", word);
    }
}

/// Print a recoverable error.
pub fn print_error(error: &TallyError) {
    println!("{} {}", "✗".red().bold(), error);
}

pub fn print_goodbye() {
    println!("{}", "Have a lovely day".green());
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}
