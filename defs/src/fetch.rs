use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::{DefinitionKind, Error};

const REMOTE_BASE: &str = "https://raw.githubusercontent.com/AliceO2Group/O2Physics";
const REMOTE_SUBDIR: &str = "PWGDQ/Core";
const TIMEOUT: Duration = Duration::from_secs(60);

/// Repository ref used when no version is given.
pub const DEFAULT_VERSION: &str = "master";

/// Where the definition libraries come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    /// A local O2Physics checkout's `PWGDQ/Core` directory.
    Local(PathBuf),
    /// The O2Physics repository at the given branch or tag.
    Remote { version: String },
}

/// Raw URL of one library at `version`.
pub fn remote_url(version: &str, kind: DefinitionKind) -> String {
    format!(
        "{REMOTE_BASE}/{version}/{REMOTE_SUBDIR}/{}",
        kind.file_name()
    )
}

/// Location of the three definition libraries on disk.
#[derive(Debug, Clone)]
pub struct DefinitionFiles {
    dir: PathBuf,
}

impl DefinitionFiles {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, kind: DefinitionKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// True only if every library is present.
    pub fn all_present(&self) -> bool {
        DefinitionKind::ALL.iter().all(|k| self.path(*k).is_file())
    }
}

/// Copies or downloads the definition libraries into a cache directory.
///
/// The cache is an existence check only: once all three files are present for a
/// given version they are never refreshed. Files are written through a temp file
/// and renamed into place, so a concurrent run never reads a partial file.
pub struct Fetcher {
    source: DefinitionSource,
    cache_root: PathBuf,
}

impl Fetcher {
    pub fn new(source: DefinitionSource, cache_root: PathBuf) -> Self {
        Self { source, cache_root }
    }

    /// Directory the files end up in; remote versions are kept apart from each other.
    pub fn cache_dir(&self) -> PathBuf {
        match &self.source {
            DefinitionSource::Local(_) => self.cache_root.join("local"),
            DefinitionSource::Remote { version } => self.cache_root.join(version),
        }
    }

    pub fn fetch(&self) -> Result<DefinitionFiles> {
        let files = DefinitionFiles::new(self.cache_dir());
        match &self.source {
            DefinitionSource::Local(src) => {
                if !src.is_dir() {
                    return Err(Error::LocalPathMissing(src.display().to_string()).into());
                }
                self.ensure_cache_dir(&files)?;
                self.copy_local(src, &files)?;
            }
            DefinitionSource::Remote { version } => {
                if files.all_present() {
                    log::info!("using cached definitions in {:?}", files.dir());
                    return Ok(files);
                }
                self.ensure_cache_dir(&files)?;
                self.download_all(version, &files)?;
            }
        }
        Ok(files)
    }

    fn ensure_cache_dir(&self, files: &DefinitionFiles) -> Result<()> {
        std::fs::create_dir_all(files.dir())
            .with_context(|| format!("creating definitions cache {:?}", files.dir()))
    }

    fn copy_local(&self, src: &Path, files: &DefinitionFiles) -> Result<()> {
        for kind in DefinitionKind::ALL {
            let from = src.join(kind.file_name());
            let dest = files.path(kind);
            match std::fs::read(&from) {
                Ok(bytes) => write_atomic(&dest, &bytes)?,
                // the extractor will see no file and leave the flags unconstrained:
                Err(e) => {
                    log::error!("can't copy {from:?}: {e}");
                    remove_stale(&dest)?;
                }
            }
        }
        Ok(())
    }

    fn download_all(&self, version: &str, files: &DefinitionFiles) -> Result<()> {
        let client = reqwest::blocking::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(TIMEOUT)
            .build()
            .context("building http client")?;

        for kind in DefinitionKind::ALL {
            let url = remote_url(version, kind);
            log::info!("downloading {url}");
            if let Err(e) = download(&client, &url, &files.path(kind)) {
                log::error!("failed to download {kind} from {url}: {e:#}");
            }
        }
        Ok(())
    }
}

fn download(client: &reqwest::blocking::Client, url: &str, dest: &Path) -> Result<()> {
    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus(url.to_owned(), status.as_u16()).into());
    }
    let bytes = response.bytes()?;
    write_atomic(dest, &bytes)
}

/// A copy left from an earlier checkout must not stand in for a missing file.
fn remove_stale(path: &Path) -> Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => {
            log::warn!("removed stale cached copy {path:?}");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("removing stale cached copy {path:?}")),
    }
}

fn write_atomic(dest: &Path, bytes: &[u8]) -> Result<()> {
    let dir = dest.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temp file in {dir:?}"))?;
    tmp.write_all(bytes)?;
    tmp.persist(dest)
        .with_context(|| format!("moving downloaded file to {dest:?}"))?;
    Ok(())
}
