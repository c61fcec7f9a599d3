/// Declarative flag records
mod flag;
pub use flag::{Choices, FlagKind, FlagSpec, TaskGroup};

/// Help text sections rendered from label/description pairs
mod help;
pub use help::{HelpEntry, HelpRenderer, HelpSection};

/// Registering every group's flags on one `clap::Command`
mod cli;
pub use cli::CliBuilder;

/// Values supplied on the command line, and writing them into a configuration
mod selection;
pub use selection::{Selection, Selections};

/// Flag tables, one per external analysis task
pub mod groups;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Flag --{0} is defined by both \"{1}\" and \"{2}\"")]
    DuplicateFlag(String, String, String),
    #[error("Invalid value \"{1}\" for --{0}: not one of the known {2}")]
    InvalidChoice(String, String, defs::DefinitionKind),
}
