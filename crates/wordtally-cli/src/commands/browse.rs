//! Interactive menu over a loaded session.

use anyhow::{Context, Result};
use clap::Args;
use console::Term;
use dialoguer::Input;
use tracing::{debug, info, Level};

use wordtally_core::{MenuChoice, Report, Session, TallyError};

use super::SourceArgs;
use crate::config::TallyConfig;
use crate::output;

#[derive(Args, Debug, Default)]
pub struct BrowseArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// A line-oriented source of user input.
pub trait Prompt {
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Clear the screen before the menu is redrawn.
    fn clear(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Reads answers from the terminal.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")
    }

    fn clear(&mut self) -> Result<()> {
        Term::stdout()
            .clear_screen()
            .context("Failed to clear the screen")
    }
}

pub async fn execute(_args: BrowseArgs, config: &TallyConfig) -> Result<()> {
    let mut session = super::load_session(config, true).await?;
    output::print_summary(&session.summary());
    run(&mut session, &mut TerminalPrompt)
}

/// Show the menu and dispatch choices until the user quits.
pub fn run(session: &mut Session, prompt: &mut dyn Prompt) -> Result<()> {
    loop {
        prompt.clear()?;
        output::print_menu(session.limit());
        let input = prompt.ask("Select an option")?;

        let choice = match MenuChoice::parse(&input) {
            Ok(choice) => choice,
            Err(e) => {
                log_rejection(&e);
                output::print_error(&e);
                pause(prompt)?;
                continue;
            }
        };

        let argument = match choice.argument_prompt() {
            Some(question) => prompt.ask(question)?,
            None => String::new(),
        };

        match session.execute(choice.into_command(argument)) {
            Ok(Report::Goodbye) => {
                output::print_goodbye();
                return Ok(());
            }
            Ok(report) => output::print_report(&report),
            Err(e) => {
                log_rejection(&e);
                output::print_error(&e);
            }
        }
        pause(prompt)?;
    }
}

fn pause(prompt: &mut dyn Prompt) -> Result<()> {
    prompt.ask("Press Enter to return to the menu").map(|_| ())
}

/// The user already sees the error, so it is only logged for `-v`/`-vv`.
fn log_rejection(error: &TallyError) {
    if rejection_level(error) == Level::DEBUG {
        debug!(error = %error, "Rejected input");
    } else {
        info!(error = %error, "Command failed");
    }
}

fn rejection_level(error: &TallyError) -> Level {
    if error.is_validation() {
        Level::DEBUG
    } else {
        Level::INFO
    }
}
