//! Checks run on user input before anything is written.
//!
//! Fatal problems come back as [`Error`]; environment problems are only warnings.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use util::OrderedSet;

use crate::{Error, TaskConfig, TRACK_EXTENSION, TRACK_PROPAGATION};

/// Environment variables set inside an O2Physics `alienv` shell.
pub const ENV_MARKERS: &[&str] = &["O2PHYSICS_ROOT", "O2_ROOT"];

/// A validated `--aod` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AodInput {
    /// A single `.root` file.
    File(PathBuf),
    /// A text file listing one AOD file per line, given as `@list.txt`.
    List(PathBuf),
}

impl AodInput {
    /// Value for the `aod-file` option of the AOD reader.
    pub fn to_arg(&self) -> String {
        match self {
            Self::File(p) => p.display().to_string(),
            Self::List(p) => format!("@{}", p.display()),
        }
    }
}

fn has_extension(path: &Path, exts: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| exts.contains(&e))
}

const TEXT_EXTS: &[&str] = &["txt", "text"];

/// Accepts an existing `.root` file, or `@` followed by an existing `.txt`/`.text` list.
pub fn check_aod_path(arg: &str) -> Result<AodInput, Error> {
    if let Some(list) = arg.strip_prefix('@') {
        let path = PathBuf::from(list);
        if !has_extension(&path, TEXT_EXTS) {
            return Err(Error::ListNotText(arg.to_owned()));
        }
        if !path.is_file() {
            return Err(Error::AodNotFound(list.to_owned()));
        }
        return Ok(AodInput::List(path));
    }

    let path = PathBuf::from(arg);
    if has_extension(&path, TEXT_EXTS) {
        return Err(Error::TextListWithoutAt(arg.to_owned()));
    }
    if !has_extension(&path, &["root"]) {
        return Err(Error::UnsupportedAodExtension(arg.to_owned()));
    }
    if !path.is_file() {
        return Err(Error::AodNotFound(arg.to_owned()));
    }
    Ok(AodInput::File(path))
}

pub fn check_config_extension(path: &Path) -> Result<(), Error> {
    if has_extension(path, &["json"]) {
        Ok(())
    } else {
        Err(Error::ConfigNotJson(path.display().to_string()))
    }
}

pub fn check_main_task(config: &TaskConfig, task: &str, config_path: &Path) -> Result<(), Error> {
    if config.has_task(task) {
        Ok(())
    } else {
        Err(Error::MainTaskMissing(
            task.to_owned(),
            config_path.display().to_string(),
        ))
    }
}

/// Names of the O2 environment markers missing according to `lookup`.
pub fn check_environment<F>(lookup: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<OsString>,
{
    ENV_MARKERS
        .iter()
        .copied()
        .filter(|var| lookup(var).map_or(true, |v| v.is_empty()))
        .collect()
}

/// Force `task`'s `process` function on if it's off. Returns true if the configuration changed.
/// A task missing from the configuration is left alone.
pub fn check_mandatory_process(config: &mut TaskConfig, task: &str, process: &str) -> bool {
    if !config.has_task(task) || config.is_enabled(task, process) {
        return false;
    }
    log::warn!("{task}:{process} is mandatory; it will be automatically set to true");
    config.set_process(task, process, true)
}

/// Track propagation and the legacy track extension can't run together:
/// swap the latter for the former. A run list without barrel tracks
/// (no track extension) is left alone. Returns true if the swap happened.
pub fn apply_track_propagation(run_list: &mut OrderedSet<String>) -> bool {
    if !run_list.remove(TRACK_EXTENSION) {
        return false;
    }
    log::info!("replacing {TRACK_EXTENSION} with {TRACK_PROPAGATION}");
    run_list.insert(TRACK_PROPAGATION.to_owned());
    true
}
