use clap::ArgMatches;
use log::{debug, error, warn};

use defs::DefinitionChoices;
use workflow::{Errors, TaskConfig};

use crate::{Choices, Error, FlagKind, FlagSpec, TaskGroup};

/// Values one flag received, explicitly or from its default.
#[derive(Debug, Clone)]
pub struct Selection {
    pub flag: &'static FlagSpec,
    pub values: Vec<String>,
}

/// Every flag that has a value after parsing, in registration order.
#[derive(Debug, Default)]
pub struct Selections {
    items: Vec<Selection>,
}

impl Selections {
    pub fn from_matches(matches: &ArgMatches, groups: &[&'static TaskGroup]) -> Self {
        let mut items = Vec::new();
        for group in groups {
            for flag in group.flags {
                if let Ok(Some(values)) = matches.try_get_many::<String>(flag.name) {
                    let values: Vec<String> = values.cloned().collect();
                    if !values.is_empty() {
                        items.push(Selection { flag, values });
                    }
                }
            }
        }
        Self { items }
    }

    pub fn push(&mut self, flag: &'static FlagSpec, values: Vec<String>) {
        self.items.push(Selection { flag, values });
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks values of definition-backed flags against the loaded library.
    /// An empty list of known names accepts anything.
    pub fn validate_choices(&self, choices: &DefinitionChoices) -> anyhow::Result<()> {
        let mut errors = Errors::default();
        for sel in &self.items {
            let Choices::Definitions(kind) = sel.flag.choices else {
                continue;
            };
            if choices.get(kind).is_empty() {
                warn!("No {} known; values of --{} are not checked", kind, sel.flag.name);
                continue;
            }
            for value in &sel.values {
                if !choices.is_allowed(kind, value) {
                    let e = Error::InvalidChoice(sel.flag.name.to_owned(), value.clone(), kind);
                    error!("{}", e);
                    errors.add(e.into());
                }
            }
        }
        errors.print_recap("validating option values")
    }

    /// Writes every selection into `config`; returns how many keys were written.
    pub fn apply(&self, config: &mut TaskConfig) -> usize {
        self.items.iter().map(|sel| apply_one(sel, config)).sum()
    }
}

fn apply_one(sel: &Selection, config: &mut TaskConfig) -> usize {
    let flag = sel.flag;
    let mut written = 0;
    match flag.kind {
        FlagKind::Value | FlagKind::Int | FlagKind::Float | FlagKind::Bool => {
            if let Some(value) = sel.values.first() {
                for (task, key) in flag.targets {
                    written += set_or_skip(config, flag, task, key, value);
                }
            }
        }
        FlagKind::List => {
            let joined = util::list_to_string(&sel.values);
            for (task, key) in flag.targets {
                written += set_or_skip(config, flag, task, key, joined.as_str());
            }
        }
        FlagKind::Switch { on, off } => {
            for (task, prefix) in flag.targets {
                if !config.has_task(task) {
                    debug!("{} not in configuration; skipping --{}", task, flag.name);
                    continue;
                }
                for key in config.keys_with_prefix(task, prefix) {
                    config.set(task, &key, off);
                }
                for value in &sel.values {
                    let key = format!("{}{}", prefix, value);
                    written += config.set(task, &key, on) as usize;
                }
            }
        }
        FlagKind::Enable(map) => {
            for value in &sel.values {
                for (_, task, process) in map.iter().filter(|(label, _, _)| label == value) {
                    if config.set_process(task, process, true) {
                        written += 1;
                    } else {
                        debug!(
                            "{} not in configuration; skipping --{} {}",
                            task, flag.name, value
                        );
                    }
                }
            }
        }
    }
    written
}

fn set_or_skip(
    config: &mut TaskConfig,
    flag: &FlagSpec,
    task: &str,
    key: &str,
    value: &str,
) -> usize {
    if config.set(task, key, value) {
        1
    } else {
        debug!("{} not in configuration; skipping --{}", task, flag.name);
        0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use defs::DefinitionKind;
    use serde_json::json;

    static FLAGS: [FlagSpec; 5] = [
        FlagSpec {
            name: "cfgBarrelTrackCuts",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::Cuts),
            default: None,
            targets: &[
                ("table-maker", "cfgBarrelTrackCuts"),
                ("missing-task", "cfgBarrelTrackCuts"),
            ],
            help: "",
        },
        FlagSpec {
            name: "process",
            kind: FlagKind::Switch {
                on: "true",
                off: "false",
            },
            choices: Choices::Static(&["Full", "BarrelOnly", "MuonOnly"]),
            default: None,
            targets: &[("table-maker", "process")],
            help: "",
        },
        FlagSpec {
            name: "analysis",
            kind: FlagKind::Enable(&[
                ("trackSelection", "analysis-track-selection", "processSkimmed"),
                ("eventMixing", "analysis-event-mixing", "processBarrelSkimmed"),
            ]),
            choices: Choices::Any,
            default: None,
            targets: &[],
            help: "",
        },
        FlagSpec {
            name: "cfgMinTpcSignal",
            kind: FlagKind::Int,
            choices: Choices::Any,
            default: None,
            targets: &[("table-maker", "cfgMinTpcSignal")],
            help: "",
        },
        FlagSpec {
            name: "cfgMCsignals",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::MCSignals),
            default: None,
            targets: &[("table-maker-m-c", "cfgMCsignals")],
            help: "",
        },
    ];

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn config() -> TaskConfig {
        let value = json!({
            "table-maker": {
                "cfgBarrelTrackCuts": "jpsiPID1",
                "cfgMinTpcSignal": "30",
                "processFull": "true",
                "processBarrelOnly": "false",
                "processMuonOnly": "false"
            },
            "analysis-track-selection": {
                "processSkimmed": "false",
                "processDummy": "false"
            }
        });
        match value {
            serde_json::Value::Object(map) => TaskConfig::from_map(map),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_apply_list_and_int() {
        let mut sel = Selections::default();
        sel.push(&FLAGS[0], strings(&["jpsiPID1", "jpsiPID2"]));
        sel.push(&FLAGS[3], strings(&["50"]));
        let mut config = config();
        assert_eq!(sel.apply(&mut config), 2);
        assert_eq!(
            config.get("table-maker", "cfgBarrelTrackCuts"),
            Some(&json!("jpsiPID1,jpsiPID2"))
        );
        assert_eq!(config.get("table-maker", "cfgMinTpcSignal"), Some(&json!("50")));
        assert!(!config.has_task("missing-task"));
    }

    #[test]
    fn test_apply_switch() {
        let mut sel = Selections::default();
        sel.push(&FLAGS[1], strings(&["BarrelOnly", "MuonOnly"]));
        let mut config = config();
        assert_eq!(sel.apply(&mut config), 2);
        assert_eq!(config.process_state("table-maker", "processFull"), Some(false));
        assert_eq!(config.process_state("table-maker", "processBarrelOnly"), Some(true));
        assert_eq!(config.process_state("table-maker", "processMuonOnly"), Some(true));
    }

    #[test]
    fn test_apply_enable() {
        let mut sel = Selections::default();
        sel.push(&FLAGS[2], strings(&["trackSelection", "eventMixing"]));
        let mut config = config();
        // event mixing task is absent from the configuration
        assert_eq!(sel.apply(&mut config), 1);
        assert!(config.is_enabled("analysis-track-selection", "processSkimmed"));
        assert_eq!(
            config.process_state("analysis-track-selection", "processDummy"),
            Some(false)
        );
        assert!(!config.has_task("analysis-event-mixing"));
    }

    #[test]
    fn test_validate_choices() {
        let choices = DefinitionChoices {
            cuts: strings(&["jpsiPID1", "jpsiPID2"]),
            mc_signals: vec![],
            mixing_vars: vec![],
        };

        let mut sel = Selections::default();
        sel.push(&FLAGS[0], strings(&["jpsiPID1", "jpsiPID2"]));
        // no MC signals known: anything is accepted
        sel.push(&FLAGS[4], strings(&["eFromJpsi"]));
        sel.push(&FLAGS[3], strings(&["50"]));
        assert!(sel.validate_choices(&choices).is_ok());

        let mut sel = Selections::default();
        sel.push(&FLAGS[0], strings(&["jpsiPID1", "notACut"]));
        assert!(sel.validate_choices(&choices).is_err());
    }

    #[test]
    fn test_from_matches() -> anyhow::Result<()> {
        static GROUP: TaskGroup = TaskGroup {
            id: "test",
            title: "Test",
            flags: &[
                FlagSpec {
                    name: "cfgQA",
                    kind: FlagKind::Bool,
                    choices: Choices::Any,
                    default: Some("false"),
                    targets: &[("table-maker", "cfgQA")],
                    help: "",
                },
                FlagSpec {
                    name: "cfgMuonCuts",
                    kind: FlagKind::List,
                    choices: Choices::Any,
                    default: None,
                    targets: &[("table-maker", "cfgMuonCuts")],
                    help: "",
                },
                FlagSpec {
                    name: "cfgBarrelLowPt",
                    kind: FlagKind::Float,
                    choices: Choices::Any,
                    default: None,
                    targets: &[("table-maker", "cfgBarrelLowPt")],
                    help: "",
                },
            ],
            help: &[],
        };
        let groups = [&GROUP];
        let cmd = crate::CliBuilder::new(&groups).build(clap::Command::new("test"))?;
        let matches = cmd.try_get_matches_from([
            "test",
            "--cfgMuonCuts",
            "muonQualityCuts",
            "muonTightQualityCutsForTests",
        ])?;
        let sel = Selections::from_matches(&matches, &groups);

        let values = |name: &str| {
            sel.items
                .iter()
                .find(|s| s.flag.name == name)
                .map(|s| s.values.clone())
        };
        assert_eq!(sel.len(), 2);
        assert_eq!(values("cfgQA").unwrap(), ["false"]);
        assert_eq!(
            values("cfgMuonCuts").unwrap(),
            ["muonQualityCuts", "muonTightQualityCutsForTests"]
        );
        assert!(values("cfgBarrelLowPt").is_none());
        Ok(())
    }
}
