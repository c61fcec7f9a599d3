use clap::builder::PossibleValuesParser;
use clap::Parser;

use defs::DEFAULT_VERSION;
use workflow::WORKFLOW_NAMES;

const CMD_NAME: &str = "o2dq";
const DEFAULT_OUTPUT: &str = ".";

/// Stores our command-line args format.
/// Task flags are added to this at runtime; see `tasks::CliBuilder`.
#[derive(Parser, Debug)]
#[command(name = CMD_NAME, version, about = "Configure and run O2 DQ analysis workflows")]
#[command(long_about = None)]
pub struct Args {
    /// Task configuration file (JSON)
    #[arg(value_name = "CONFIG")]
    pub config: String,

    /// Analysis workflow to configure
    #[arg(short, long, value_name = "WORKFLOW")]
    #[arg(value_parser = PossibleValuesParser::new(WORKFLOW_NAMES))]
    pub workflow: String,

    /// Input AOD: a .root file, or @list.txt
    #[arg(long, value_name = "FILE")]
    pub aod: Option<String>,

    /// Output directory for generated configuration files and logs
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT)]
    #[arg(env = "O2DQ_OUTPUT")]
    pub output: String,

    /// Copy definition libraries from this directory instead of downloading them
    #[arg(long, value_name = "DIR", env = "O2DQ_LOCAL_DEFS")]
    pub local_defs: Option<String>,

    /// O2Physics branch or tag to download definition libraries from
    #[arg(long, value_name = "REF", default_value = DEFAULT_VERSION)]
    pub defs_version: String,

    /// Cache directory for definition libraries [default: $HOME/.cache/o2dq]
    #[arg(long, value_name = "DIR", env = "O2DQ_DEFS_CACHE")]
    pub defs_cache: Option<String>,

    /// Comma-separated tree names of the input AOD; used to add converters
    #[arg(long, value_name = "T1,T2,...")]
    pub aod_trees: Option<String>,

    /// Use track propagation instead of the track extension
    #[arg(long)]
    pub add_track_prop: bool,

    /// Set debug mode in the AOD reader and writer descriptors
    #[arg(long)]
    pub debug_descriptors: bool,

    /// Dry run; write configuration files and print the pipeline, but don't run it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Bypass user confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Print additional debugging info (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
