use std::path::PathBuf;

use anyhow::Result;

use defs::DefinitionSource;
use workflow::checks::{self, AodInput};
use workflow::WorkflowKind;

use crate::args::Args;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Configuration file does not exist: {0}")]
    ConfigNotFound(String),
    #[error("No definitions cache directory: set --defs-cache or HOME")]
    NoCacheDir,
}

/// Settings are like Args, except all the logic has
/// been applied so e.g. defaults are added in.
#[derive(Debug)]
pub struct Settings {
    pub config: PathBuf,
    pub workflow: WorkflowKind,
    pub aod: Option<AodInput>,
    pub output: PathBuf,
    pub defs_source: DefinitionSource,
    pub defs_cache: PathBuf,
    pub aod_trees: Vec<String>,
    pub add_track_prop: bool,
    pub debug_descriptors: bool,
    pub dry_run: bool,
    pub yes: bool,
    pub verbose: u8,
}

impl TryFrom<Args> for Settings {
    type Error = anyhow::Error;
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let config = PathBuf::from(&args.config);
        checks::check_config_extension(&config)?;
        if !config.is_file() {
            return Err(Error::ConfigNotFound(args.config).into());
        }

        let workflow: WorkflowKind = args.workflow.parse()?;

        let aod = args
            .aod
            .as_deref()
            .map(checks::check_aod_path)
            .transpose()?;

        let defs_source = match args.local_defs {
            Some(dir) => DefinitionSource::Local(PathBuf::from(dir)),
            None => DefinitionSource::Remote {
                version: args.defs_version,
            },
        };

        let defs_cache = match args.defs_cache {
            Some(dir) => PathBuf::from(dir),
            None => default_cache_dir()?,
        };

        let aod_trees = args
            .aod_trees
            .as_deref()
            .map(util::string_to_list)
            .unwrap_or_default();

        Ok(Self {
            config,
            workflow,
            aod,
            output: PathBuf::from(&args.output),
            defs_source,
            defs_cache,
            aod_trees,
            add_track_prop: args.add_track_prop,
            debug_descriptors: args.debug_descriptors,
            dry_run: args.dry_run,
            yes: args.yes,
            verbose: args.verbose,
        })
    }
}

/// $HOME/.cache/o2dq
fn default_cache_dir() -> Result<PathBuf, Error> {
    let home = std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .ok_or(Error::NoCacheDir)?;
    let mut dir = PathBuf::from(home);
    dir.push(".cache");
    dir.push("o2dq");
    Ok(dir)
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(config: String) -> Args {
        Args {
            config,
            workflow: String::from("table-reader"),
            aod: None,
            output: String::from("."),
            local_defs: None,
            defs_version: String::from("master"),
            defs_cache: Some(String::from("/tmp/o2dq-cache")),
            aod_trees: Some(String::from("O2bc,O2fdd")),
            add_track_prop: false,
            debug_descriptors: false,
            dry_run: true,
            yes: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_settings_from_args() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join("config.json");
        std::fs::write(&config, "{}")?;

        let settings = Settings::try_from(args(config.display().to_string()))?;
        assert_eq!(settings.workflow, WorkflowKind::TableReader);
        assert_eq!(
            settings.defs_source,
            DefinitionSource::Remote {
                version: String::from("master")
            }
        );
        assert_eq!(settings.defs_cache, PathBuf::from("/tmp/o2dq-cache"));
        assert_eq!(settings.aod_trees, ["O2bc", "O2fdd"]);
        assert!(settings.aod.is_none());
        Ok(())
    }

    #[test]
    fn test_config_must_be_json_and_exist() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let yaml = dir.path().join("config.yaml");
        std::fs::write(&yaml, "{}")?;
        let err = Settings::try_from(args(yaml.display().to_string())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<workflow::Error>(),
            Some(workflow::Error::ConfigNotJson(_))
        ));

        let missing = dir.path().join("missing.json");
        let err = Settings::try_from(args(missing.display().to_string())).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::ConfigNotFound(_))
        ));
        Ok(())
    }

    #[test]
    fn test_local_defs_and_bad_aod() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join("config.json");
        std::fs::write(&config, "{}")?;

        let mut a = args(config.display().to_string());
        a.local_defs = Some(String::from("/opt/O2Physics/PWGDQ/Core"));
        a.aod_trees = None;
        let settings = Settings::try_from(a)?;
        assert_eq!(
            settings.defs_source,
            DefinitionSource::Local(PathBuf::from("/opt/O2Physics/PWGDQ/Core"))
        );
        assert!(settings.aod_trees.is_empty());

        let mut a = args(config.display().to_string());
        a.aod = Some(String::from("data.txt"));
        let err = Settings::try_from(a).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<workflow::Error>(),
            Some(workflow::Error::TextListWithoutAt(_))
        ));
        Ok(())
    }
}
