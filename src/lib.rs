/// High-level command line app
mod app;
/// Definition of command-line args
mod args;
/// Pipeline execution
mod exec;
/// Filesystem operations
mod fs;
/// Interpreted command-line settings
mod settings;
/// Text UI
mod ui;

use anyhow::Result;
use clap::{ArgMatches, Command, CommandFactory, FromArgMatches};

use tasks::{groups, CliBuilder, Selections};

// exported for tests:
pub use app::App;
pub use args::Args;
pub use settings::Settings;

/// The full command: common args plus every task group's flags.
pub fn command() -> Result<Command> {
    Ok(CliBuilder::new(&groups::ALL).build(Args::command())?)
}

/// Split parsed matches into common args and task flag values.
pub fn interpret(matches: &ArgMatches) -> Result<(Args, Selections)> {
    let args = Args::from_arg_matches(matches)?;
    let selections = Selections::from_matches(matches, &groups::ALL);
    Ok((args, selections))
}

/// Run the command-line app.
pub fn run() -> Result<(), anyhow::Error> {
    let matches = command()?.get_matches();
    let (args, selections) = interpret(&matches)?;

    // INTERPRET SETTINGS ///////////////
    let settings: Settings = args.try_into()?;

    let log_level = match settings.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    simple_logging::log_to_stderr(log_level);

    // RUN THE THING /////////////////
    let app = App::new(settings, selections);
    app.run()?;

    Ok(())
}
