/// Which definition library a choice list comes from
mod kind;
pub use kind::DefinitionKind;

/// Local copy or remote download of the definition libraries
mod fetch;
pub use fetch::{remote_url, DefinitionFiles, DefinitionSource, Fetcher, DEFAULT_VERSION};

/// Scanning definition libraries for names
mod extract;
pub use extract::{ChoiceExtractor, NAME_MARKER};

/// Harvested names, grouped by library
mod choices;
pub use choices::DefinitionChoices;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Local definitions directory does not exist: {0}")]
    LocalPathMissing(String),
    #[error("Request for {0} failed with status {1}")]
    HttpStatus(String, u16),
}
