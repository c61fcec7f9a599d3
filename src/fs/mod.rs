use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use util::PathEncodingError;

/// Defines fns for creating common paths in the output directory
mod paths;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Specified output directory \"{0}\" is not a directory")]
    NotDirectory(String),
    #[error("Can't perform IO operation: \"{0}\" is not whitelisted")]
    NotWhitelisted(String),
}

/// All file operations in the crate should go through this struct.
///
/// All writes check that the path in question is a child of the
/// single whitelisted prefix (the output dir), otherwise they will not be performed.
/// The definitions cache is managed separately by `defs::Fetcher`.
#[derive(Debug)]
pub struct Fs {
    /// The directory we are allowed to modify
    output_prefix: PathBuf,
}

impl Fs {
    /// Create a new `Fs` with the given output directory.
    pub fn new(output_prefix: &Path) -> Self {
        Self {
            output_prefix: output_prefix.to_path_buf(),
        }
    }

    /// Check whether output dir exists, and create it if not.
    pub fn ensure_output_dir_exists(&mut self, verbose: bool) -> Result<()> {
        if !self.output_prefix.exists() {
            eprintln!(
                "Output directory {:?} doesn't exist. Creating.",
                self.output_prefix
            );
            fs::create_dir_all(&self.output_prefix).context("creating output directory")?;
        } else if !self.output_prefix.is_dir() {
            return Err(Error::NotDirectory(
                self.output_prefix
                    .to_str()
                    .ok_or(PathEncodingError)?
                    .to_string(),
            )
            .into());
        } else if verbose {
            eprintln!(
                "Output directory {:?} already exists. Not creating.",
                self.output_prefix
            );
        }

        self.output_prefix = self.output_prefix.canonicalize()?;
        Ok(())
    }

    /// Create a file, and return a writable `File` handle.
    pub fn create_file<T: AsRef<Path>>(&self, path: T) -> Result<fs::File> {
        let path = path.as_ref();
        self.check_whitelist(path)?;
        let f = fs::File::create(path).context("creating file")?;
        Ok(f)
    }

    /// Write entire str to a file.
    pub fn write_file<T: AsRef<Path>>(&self, path: T, text: &str) -> Result<()> {
        let path = path.as_ref();
        self.check_whitelist(path)?;
        fs::write(path, text).with_context(|| format!("writing file {:?}", path))?;
        Ok(())
    }

    /// Write a JSON document, pretty-printed.
    pub fn write_json<T: AsRef<Path>>(&self, path: T, doc: &Value) -> Result<()> {
        let path = path.as_ref();
        self.check_whitelist(path)?;
        workflow::descriptor::write_document(path, doc)
    }

    fn is_whitelisted<T: AsRef<Path>>(&self, path: T) -> bool {
        path.as_ref().starts_with(&self.output_prefix)
    }

    fn check_whitelist(&self, path: &Path) -> Result<()> {
        if !self.is_whitelisted(path) {
            Err(Error::NotWhitelisted(path.to_str().ok_or(PathEncodingError)?.to_owned()).into())
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_writes_only_under_output() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut fs = Fs::new(&dir.path().join("out"));
        fs.ensure_output_dir_exists(false)?;

        let mut buf = PathBuf::new();
        fs.write_file(fs.temp_config("table-maker", &mut buf), "{}")?;
        assert!(buf.exists());

        let outside = dir.path().join("elsewhere.json");
        let err = fs.write_file(&outside, "{}").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NotWhitelisted(_))
        ));
        assert!(!outside.exists());
        Ok(())
    }

    #[test]
    fn test_output_must_be_dir() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("file");
        std::fs::write(&file, "")?;
        let mut fs = Fs::new(&file);
        let err = fs.ensure_output_dir_exists(false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NotDirectory(_))
        ));
        Ok(())
    }
}
