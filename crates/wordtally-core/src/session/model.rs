//! Menu, command and report values exchanged with the session.

use serde::Serialize;

use crate::error::{TallyError, TallyResult};
use crate::limit::DisplayLimit;
use crate::query::TopN;

/// An entry of the numeric main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewResults,
    ChangeLimit,
    AddExclusion,
    RemoveExclusion,
    ViewExclusions,
    ClearExclusions,
    LookupWord,
    Quit,
}

impl MenuChoice {
    /// Every choice in menu order.
    pub const ALL: [MenuChoice; 8] = [
        Self::ViewResults,
        Self::ChangeLimit,
        Self::AddExclusion,
        Self::RemoveExclusion,
        Self::ViewExclusions,
        Self::ClearExclusions,
        Self::LookupWord,
        Self::Quit,
    ];

    /// Parse a menu selection such as `"3"`.
    pub fn parse(input: &str) -> TallyResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(TallyError::EmptyInput);
        }
        match input {
            "1" => Ok(Self::ViewResults),
            "2" => Ok(Self::ChangeLimit),
            "3" => Ok(Self::AddExclusion),
            "4" => Ok(Self::RemoveExclusion),
            "5" => Ok(Self::ViewExclusions),
            "6" => Ok(Self::ClearExclusions),
            "7" => Ok(Self::LookupWord),
            "8" => Ok(Self::Quit),
            other => Err(TallyError::UnknownChoice(other.to_string())),
        }
    }

    /// The number the user types to select this entry.
    pub fn key(&self) -> usize {
        Self::ALL
            .iter()
            .position(|choice| choice == self)
            .map_or(0, |index| index + 1)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ViewResults => "View Results",
            Self::ChangeLimit => "Change Number Of Words To Display",
            Self::AddExclusion => "Add Word To The Exclude List",
            Self::RemoveExclusion => "Remove Word From The Exclude List",
            Self::ViewExclusions => "View The Exclude List",
            Self::ClearExclusions => "Clear The Exclude List",
            Self::LookupWord => "Check Count Of Specific Word",
            Self::Quit => "Quit",
        }
    }

    /// Prompt for the argument this choice needs, if any.
    pub fn argument_prompt(&self) -> Option<&'static str> {
        match self {
            Self::ChangeLimit => Some("Number of words to display"),
            Self::AddExclusion => Some("Word to add to the exclude list"),
            Self::RemoveExclusion => Some("Word to remove from the exclude list"),
            Self::LookupWord => Some("Word to count"),
            _ => None,
        }
    }

    /// Build the command for this choice from its (possibly unused) argument.
    pub fn into_command(self, argument: String) -> Command {
        match self {
            Self::ViewResults => Command::ViewResults,
            Self::ChangeLimit => Command::SetLimit(argument),
            Self::AddExclusion => Command::Exclude(argument),
            Self::RemoveExclusion => Command::Include(argument),
            Self::ViewExclusions => Command::ListExclusions,
            Self::ClearExclusions => Command::ClearExclusions,
            Self::LookupWord => Command::Lookup(argument),
            Self::Quit => Command::Quit,
        }
    }
}

/// A single request against the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ViewResults,
    SetLimit(String),
    Exclude(String),
    Include(String),
    ListExclusions,
    ClearExclusions,
    Lookup(String),
    Quit,
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Results(TopN),
    LimitChanged(DisplayLimit),
    Excluded(String),
    Included(String),
    /// Current exclusions; empty when nothing is excluded.
    Exclusions(Vec<String>),
    Cleared(usize),
    Count { word: String, count: usize },
    Goodbye,
}

/// Totals describing the counted corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusSummary {
    /// Distinct words; reported as the corpus "total words".
    pub unique_words: usize,
    pub tokens_seen: usize,
    pub discarded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_choices() {
        for (index, choice) in MenuChoice::ALL.iter().enumerate() {
            let key = (index + 1).to_string();
            assert_eq!(MenuChoice::parse(&key), Ok(*choice));
            assert_eq!(choice.key(), index + 1);
        }
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert_eq!(MenuChoice::parse(""), Err(TallyError::EmptyInput));
        assert_eq!(MenuChoice::parse(" \t"), Err(TallyError::EmptyInput));
        assert_eq!(
            MenuChoice::parse("9"),
            Err(TallyError::UnknownChoice("9".to_string()))
        );
        assert_eq!(
            MenuChoice::parse("view"),
            Err(TallyError::UnknownChoice("view".to_string()))
        );
    }

    #[test]
    fn test_argument_prompts() {
        let with_argument: Vec<_> = MenuChoice::ALL
            .iter()
            .filter(|c| c.argument_prompt().is_some())
            .copied()
            .collect();
        assert_eq!(
            with_argument,
            vec![
                MenuChoice::ChangeLimit,
                MenuChoice::AddExclusion,
                MenuChoice::RemoveExclusion,
                MenuChoice::LookupWord,
            ]
        );
    }

    #[test]
    fn test_into_command() {
        assert_eq!(
            MenuChoice::AddExclusion.into_command("the".to_string()),
            Command::Exclude("the".to_string())
        );
        assert_eq!(
            MenuChoice::ViewResults.into_command(String::new()),
            Command::ViewResults
        );
    }
}
