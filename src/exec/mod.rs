use std::path::Path;
use std::process::Command;

use anyhow::Result;

use workflow::Pipeline;

use crate::fs::Fs;

/// Run a subprocess
mod run_cmd;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to start {0}")]
    SpawnFailed(String),
    #[error("Cannot attach to child {0}")]
    NoChildPipe(&'static str),
    #[error("Thread copying child {0} panicked")]
    TeeThreadPanicked(&'static str),
    #[error("Pipeline failed with {0}")]
    SubprocessFailed(String),
}

/// Run the whole pipeline through `sh -c`, logging its output to `log_path`.
pub fn run_pipeline(pipeline: &Pipeline, log_path: &Path, fs: &Fs, verbose: bool) -> Result<()> {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(pipeline.command_line());
    let status = run_cmd::run_cmd(&mut cmd, log_path, fs, verbose)?;
    if status.success() {
        Ok(())
    } else {
        Err(Error::SubprocessFailed(status.to_string()).into())
    }
}
