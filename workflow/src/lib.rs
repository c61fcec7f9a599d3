/// The task configuration record loaded from the user's JSON file
mod config;
pub use config::{TaskConfig, FALSE, TRUE};

/// Dependencies between process functions of different tasks
mod deps;
pub use deps::{DependencyChecker, DependencyRule, UnsatisfiedDependency};

/// Input, environment, and mandatory-option checks
pub mod checks;

/// Injection of AOD converter tasks
mod converters;
pub use converters::{needs_track_propagation, ConverterManager, ConverterRule, CONVERTERS};

/// Reader/writer descriptor documents
pub mod descriptor;
pub use descriptor::TableCatalog;

/// Static table catalog of the reduced data model
mod tables;
pub use tables::REDUCED_TABLES;

/// Static definitions of each supported analysis workflow
mod workflows;
pub use workflows::{ProcessSpec, WorkflowDef, WorkflowKind, WORKFLOW_NAMES};

/// Which executables run and which tables are read and written
mod plan;
pub use plan::Plan;

/// Rendering the DPL pipeline command line
mod pipeline;
pub use pipeline::Pipeline;

mod error;
pub use error::{AggregatedErrors, Errors};

/// Executable extending tracks to the primary vertex from already-propagated tracks.
pub const TRACK_EXTENSION: &str = "o2-analysis-trackextension";
/// Executable propagating tracks from the innermost update point; replaces `TRACK_EXTENSION`.
pub const TRACK_PROPAGATION: &str = "o2-analysis-track-propagation";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Configuration file must be a .json file: {0}")]
    ConfigNotJson(String),
    #[error("Configuration file does not contain a JSON object: {0}")]
    ConfigNotObject(String),
    #[error("Main task \"{0}\" not found in configuration file {1}")]
    MainTaskMissing(String, String),
    #[error("AOD text list \"{0}\" must start with @")]
    TextListWithoutAt(String),
    #[error("AOD list after @ must be a .txt or .text file: {0}")]
    ListNotText(String),
    #[error("AOD input must be a .root file or an @-prefixed .txt list: {0}")]
    UnsupportedAodExtension(String),
    #[error("AOD input does not exist: {0}")]
    AodNotFound(String),
    #[error("Table \"{0}\" is not in the table catalog")]
    UnknownTable(String),
    #[error("Unknown workflow \"{0}\"")]
    UnknownWorkflow(String),
}
