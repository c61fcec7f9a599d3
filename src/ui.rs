use std::cell::RefCell;
use std::fmt::Debug;

use anyhow::Result;
use colored::Colorize;

use defs::{DefinitionChoices, DefinitionKind};
use util::Timer;
use workflow::Pipeline;

use crate::settings::Settings;

/// Terminal output and prompts. Step progress only shows with `-v`;
/// the pipeline listing and prompts always do.
pub struct Ui {
    /// -v given at least once
    pub verbose: bool,
    /// -y: answer yes to every prompt
    assume_yes: bool,
    /// time since the current step began
    timer: Timer,
    /// last line read from stdin
    answer: RefCell<String>,
}

impl Ui {
    pub fn new(settings: &Settings) -> Self {
        Self {
            verbose: settings.verbose > 0,
            assume_yes: settings.yes,
            timer: Timer::now(),
            answer: RefCell::new(String::with_capacity(8)),
        }
    }

    /// Ask a yes/no question on stderr; anything but `y` or `Y` means no.
    pub fn confirm(&self, question: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        eprintln!("{question} (y/N)");

        let mut answer = self.answer.borrow_mut();
        answer.clear();
        std::io::stdin().read_line(&mut answer)?;
        Ok(matches!(answer.trim_start().chars().next(), Some('y' | 'Y')))
    }

    /// Announce a step and restart the step timer.
    pub fn begin(&mut self, step: &str) {
        if self.verbose {
            eprint!("{}... ", step.magenta());
            self.timer.reset();
        }
    }

    /// Like `begin`, naming the file or value the step works on.
    pub fn begin_with<T: Debug>(&mut self, step: &str, subject: T) {
        if self.verbose {
            eprint!("{} {:?}... ", step.magenta(), subject);
            self.timer.reset();
        }
    }

    /// Close the step opened by `begin`, with its duration.
    pub fn finish(&self) {
        if self.verbose {
            eprintln!("{} ({:.2?}).", "done".green(), self.timer.elapsed());
        }
    }

    /// How many names each definition library offered for flag checking.
    pub fn definitions(&self, choices: &DefinitionChoices) {
        if !self.verbose {
            return;
        }
        for kind in DefinitionKind::ALL {
            let n = choices.get(kind).len();
            if n == 0 {
                eprintln!("  {}: {}", kind, "none found, values unchecked".yellow());
            } else {
                eprintln!("  {kind}: {n}");
            }
        }
    }

    /// The executables about to be chained, main task first.
    pub fn pipeline(&self, pipeline: &Pipeline) {
        eprintln!(
            "\n{} ({} executables)",
            "Pipeline:".green(),
            pipeline.len()
        );
        for exe in pipeline.executables() {
            eprintln!("  {exe}");
        }
    }
}
