use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::Value;
use tempfile::{tempdir, TempDir};

use o2dq_workflows::{command, interpret, App, Settings};

const CUTS: &str = r#"
AnalysisCompositeCut* o2::aod::dqcuts::GetCompositeCut(const char* cutName)
{
  std::string nameStr = cutName;
  if (!nameStr.compare("eventStandard")) {
  }
  if (!nameStr.compare("jpsiPID1")) {
  }
  if (!nameStr.compare("jpsiPID2")) {
  }
  if (!nameStr.compare("muonQualityCuts")) {
  }
  if (!nameStr.compare("pairNoCut")) {
  }
}
"#;

const SIGNALS: &str = r#"
  if (!nameStr.compare("eFromJpsi")) {
  }
"#;

const MIXING: &str = r#"
  if (!nameStr.compare("Vtx3")) {
  }
  if (!nameStr.compare("Centrality3")) {
  }
"#;

const TABLE_READER_CONFIG: &str = r#"{
  "analysis-event-selection": {
    "cfgMixingVars": "",
    "cfgEventCuts": "eventStandard",
    "cfgQA": "false",
    "processSkimmed": "false",
    "processDummy": "false"
  },
  "analysis-track-selection": {
    "cfgTrackCuts": "jpsiPID1",
    "cfgQA": "false",
    "processSkimmed": "false",
    "processDummy": "false"
  },
  "analysis-muon-selection": {
    "cfgMuonCuts": "muonQualityCuts",
    "processSkimmed": "false"
  },
  "analysis-same-event-pairing": {
    "processDecayToEESkimmed": "false",
    "processDecayToMuMuSkimmed": "false",
    "processDecayToMuMuVertexingSkimmed": "false"
  }
}"#;

const TABLE_MAKER_CONFIG: &str = r#"{
  "internal-dpl-aod-reader": {
    "aod-file": "AO2D.root"
  },
  "table-maker": {
    "cfgBarrelTrackCuts": "jpsiPID1",
    "cfgMinTpcSignal": "30",
    "processFull": "true",
    "processBarrelOnly": "false",
    "processMuonOnly": "false"
  }
}"#;

/// Scratch space: local definitions, a definitions cache, a config file, and an output dir.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(config: &str) -> Result<Self> {
        let dir = tempdir()?;
        let defs = dir.path().join("defs");
        std::fs::create_dir(&defs)?;
        std::fs::write(defs.join("CutsLibrary.cxx"), CUTS)?;
        std::fs::write(defs.join("MCSignalLibrary.cxx"), SIGNALS)?;
        std::fs::write(defs.join("MixingLibrary.cxx"), MIXING)?;
        std::fs::write(dir.path().join("config.json"), config)?;
        Ok(Self { dir })
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn arg(&self, name: &str) -> String {
        self.path(name).display().to_string()
    }

    /// Base argv for a dry run of `workflow` with local definitions.
    fn argv(&self, workflow: &str) -> Vec<String> {
        vec![
            "o2dq".to_owned(),
            self.arg("config.json"),
            "--workflow".to_owned(),
            workflow.to_owned(),
            "--output".to_owned(),
            self.arg("out"),
            "--local-defs".to_owned(),
            self.arg("defs"),
            "--defs-cache".to_owned(),
            self.arg("cache"),
            "--dry-run".to_owned(),
            "--yes".to_owned(),
        ]
    }

    fn run(&self, argv: Vec<String>) -> Result<()> {
        simple_logging::log_to_stderr(log::LevelFilter::Debug);
        let matches = command()?.try_get_matches_from(argv)?;
        let (args, selections) = interpret(&matches)?;
        let settings: Settings = args.try_into()?;
        App::new(settings, selections).run()
    }

    fn read_json(&self, path: &Path) -> Result<Value> {
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }

    fn output_json(&self, name: &str) -> Result<Value> {
        self.read_json(&self.path("out").join(name))
    }
}

fn with(mut argv: Vec<String>, extra: &[&str]) -> Vec<String> {
    argv.extend(extra.iter().map(|s| s.to_string()));
    argv
}

#[test]
fn test_table_reader() -> Result<()> {
    let fx = Fixture::new(TABLE_READER_CONFIG)?;
    let argv = with(
        fx.argv("table-reader"),
        &[
            "--analysis",
            "trackSelection",
            "sameEventPairing",
            "--cfgTrackCuts",
            "jpsiPID1",
            "jpsiPID2",
            "--cfgMixingVars",
            "Vtx3",
            "--cfgQA",
            "true",
        ],
    );
    fx.run(argv)?;

    let config = fx.output_json("tempConfig-table-reader.json")?;
    // forced on as the mandatory process function:
    assert_eq!(config["analysis-event-selection"]["processSkimmed"], "true");
    assert_eq!(config["analysis-track-selection"]["processSkimmed"], "true");
    assert_eq!(config["analysis-track-selection"]["processDummy"], "false");
    assert_eq!(config["analysis-same-event-pairing"]["processDecayToEESkimmed"], "true");
    assert_eq!(config["analysis-same-event-pairing"]["processDecayToMuMuSkimmed"], "false");
    assert_eq!(config["analysis-muon-selection"]["processSkimmed"], "false");
    assert_eq!(config["analysis-track-selection"]["cfgTrackCuts"], "jpsiPID1,jpsiPID2");
    assert_eq!(config["analysis-event-selection"]["cfgMixingVars"], "Vtx3");
    assert_eq!(config["analysis-event-selection"]["cfgQA"], "true");
    assert_eq!(config["analysis-track-selection"]["cfgQA"], "true");
    // tasks missing from the file are not created:
    assert!(config.get("table-maker").is_none());

    let reader = fx.output_json("aodReaderTempConfig.json")?;
    let inputs = reader["InputDirector"]["InputDescriptors"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    assert_eq!(inputs[0]["treename"], "ReducedEvents");
    assert!(inputs.iter().any(|d| d["treename"] == "ReducedTracksBarrelPID"));
    assert!(!inputs.iter().any(|d| d["treename"] == "ReducedMuons"));
    assert_eq!(reader["InputDirector"]["debugmode"], false);

    let writer = fx.output_json("aodWriterTempConfig.json")?;
    let out = &writer["OutputDirector"];
    assert_eq!(out["resfile"], "dileptonAOD");
    assert_eq!(out["resfilemode"], "RECREATE");
    assert_eq!(out["ntfmerge"], 1);
    assert_eq!(out["OutputDescriptors"][0]["treename"], "Dileptons");

    // dry run: nothing was executed
    assert!(!fx.path("out").join("table-reader.log").exists());
    Ok(())
}

#[test]
fn test_table_maker() -> Result<()> {
    let fx = Fixture::new(TABLE_MAKER_CONFIG)?;
    std::fs::write(fx.path("AO2D.root"), "")?;
    let aod = fx.arg("AO2D.root");
    let argv = with(
        fx.argv("table-maker"),
        &[
            "--aod",
            aod.as_str(),
            "--aod-trees",
            "O2bc,O2fdd,O2track_iu",
            "--debug-descriptors",
            "-v",
            "--process",
            "BarrelOnly",
            "--cfgBarrelTrackCuts",
            "jpsiPID1",
            "jpsiPID2",
            "--cfgMinTpcSignal",
            "50",
            "--est",
            "FT0C",
        ],
    );
    fx.run(argv)?;

    let config = fx.output_json("tempConfig-table-maker.json")?;
    let tm = &config["table-maker"];
    assert_eq!(tm["processFull"], "false");
    assert_eq!(tm["processBarrelOnly"], "true");
    assert_eq!(tm["processMuonOnly"], "false");
    assert_eq!(tm["cfgBarrelTrackCuts"], "jpsiPID1,jpsiPID2");
    assert_eq!(tm["cfgMinTpcSignal"], "50");
    assert_eq!(config["internal-dpl-aod-reader"]["aod-file"], aod.as_str());
    // no centrality task in the file:
    assert!(config.get("centrality-table").is_none());

    let writer = fx.output_json("aodWriterTempConfig.json")?;
    let out = &writer["OutputDirector"];
    assert_eq!(out["resfile"], "reducedAod");
    assert_eq!(out["debugmode"], true);
    let trees: Vec<&str> = out["OutputDescriptors"]
        .as_array()
        .map(|a| a.iter().filter_map(|d| d["treename"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(trees[0], "ReducedEvents");
    assert!(trees.contains(&"ReducedTracksBarrel"));
    assert!(!trees.contains(&"ReducedMuons"));

    assert!(!fx.path("out").join("aodReaderTempConfig.json").exists());
    Ok(())
}

#[test]
fn test_unknown_cut_rejected() -> Result<()> {
    let fx = Fixture::new(TABLE_READER_CONFIG)?;
    let argv = with(fx.argv("table-reader"), &["--cfgTrackCuts", "notACut"]);
    let err = fx.run(argv).unwrap_err();
    assert!(err.downcast_ref::<workflow::AggregatedErrors>().is_some());
    assert!(!fx.path("out").join("tempConfig-table-reader.json").exists());
    Ok(())
}

#[test]
fn test_unsatisfied_dependency() -> Result<()> {
    let fx = Fixture::new(TABLE_READER_CONFIG)?;
    // pairing needs the track selection, which stays off:
    let argv = with(fx.argv("table-reader"), &["--analysis", "sameEventPairing"]);
    let err = fx.run(argv).unwrap_err();
    let agg = err
        .downcast_ref::<workflow::AggregatedErrors>()
        .map(|e| e.1);
    assert_eq!(agg, Some(1));
    Ok(())
}

#[test]
fn test_main_task_missing() -> Result<()> {
    let fx = Fixture::new(TABLE_READER_CONFIG)?;
    let err = fx.run(fx.argv("table-maker")).unwrap_err();
    assert!(err.to_string().contains("table-maker"));
    Ok(())
}

#[test]
fn test_missing_local_defs() -> Result<()> {
    let fx = Fixture::new(TABLE_READER_CONFIG)?;
    std::fs::remove_dir_all(fx.path("defs"))?;
    assert!(fx.run(fx.argv("table-reader")).is_err());
    Ok(())
}

#[test]
fn test_cached_remote_definitions() -> Result<()> {
    let fx = Fixture::new(TABLE_READER_CONFIG)?;
    // pre-populated cache: nothing is downloaded
    let cached = fx.path("cache").join("v1");
    std::fs::create_dir_all(&cached)?;
    for name in ["CutsLibrary.cxx", "MCSignalLibrary.cxx", "MixingLibrary.cxx"] {
        std::fs::copy(fx.path("defs").join(name), cached.join(name))?;
    }
    let argv = vec![
        "o2dq".to_owned(),
        fx.arg("config.json"),
        "-w".to_owned(),
        "table-reader".to_owned(),
        "-o".to_owned(),
        fx.arg("out"),
        "--defs-version".to_owned(),
        "v1".to_owned(),
        "--defs-cache".to_owned(),
        fx.arg("cache"),
        "-n".to_owned(),
        "--cfgTrackCuts".to_owned(),
        "jpsiPID2".to_owned(),
    ];
    fx.run(argv)?;
    let config = fx.output_json("tempConfig-table-reader.json")?;
    assert_eq!(config["analysis-track-selection"]["cfgTrackCuts"], "jpsiPID2");
    Ok(())
}

#[test]
fn test_help_lists_task_groups() -> Result<()> {
    let help = command()?.render_long_help().to_string();
    assert!(help.contains("Table maker"));
    assert!(help.contains("--cfgBarrelTrackCuts"));
    assert!(help.contains("BarrelOnly"));
    Ok(())
}

#[test]
fn test_static_choices_enforced() -> Result<()> {
    let fx = Fixture::new(TABLE_MAKER_CONFIG)?;
    let argv = with(fx.argv("table-maker"), &["--process", "Everything"]);
    assert!(command()?.try_get_matches_from(argv).is_err());
    Ok(())
}
