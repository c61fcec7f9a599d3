use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, Command};

use util::HashMap;

use crate::{Error, FlagKind, FlagSpec, HelpRenderer, HelpSection, TaskGroup};

/// Source name used for flags that belong to the base command.
const BASE: &str = "base options";

/// Adds the flags of several task groups to one command.
#[derive(Debug)]
pub struct CliBuilder<'a> {
    groups: &'a [&'static TaskGroup],
    help: HelpRenderer,
}

impl<'a> CliBuilder<'a> {
    pub fn new(groups: &'a [&'static TaskGroup]) -> Self {
        Self {
            groups,
            help: HelpRenderer::default(),
        }
    }

    /// Fails if any long name (or argument id) is registered twice,
    /// either by two groups or by a group and the base command.
    pub fn check_unique(&self, base: &Command) -> Result<(), Error> {
        let mut seen: HashMap<&str, &str> = HashMap::default();
        for arg in base.get_arguments() {
            seen.insert(arg.get_id().as_str(), BASE);
            if let Some(long) = arg.get_long() {
                seen.insert(long, BASE);
            }
        }
        for group in self.groups {
            for flag in group.flags {
                if let Some(first) = seen.insert(flag.name, group.id) {
                    return Err(Error::DuplicateFlag(
                        flag.name.to_owned(),
                        first.to_owned(),
                        group.id.to_owned(),
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn build(&self, base: Command) -> Result<Command, Error> {
        self.check_unique(&base)?;
        let mut cmd = base;
        for group in self.groups {
            for flag in group.flags {
                cmd = cmd.arg(make_arg(group, flag));
            }
        }
        let sections: Vec<HelpSection> = self
            .groups
            .iter()
            .map(|g| HelpSection {
                title: g.title,
                entries: g.help,
            })
            .collect();
        let extra = self.help.render(&sections);
        if !extra.is_empty() {
            cmd = cmd.after_long_help(extra);
        }
        Ok(cmd)
    }
}

fn make_arg(group: &TaskGroup, flag: &'static FlagSpec) -> Arg {
    let mut arg = Arg::new(flag.name)
        .long(flag.name)
        .help(flag.help)
        .help_heading(group.title)
        .action(ArgAction::Set);

    arg = if flag.kind.takes_many() {
        arg.num_args(1..).value_name("VALUES")
    } else {
        arg.num_args(1).value_name("VALUE")
    };

    arg = match (flag.kind, flag.static_values()) {
        (_, Some(values)) => arg.value_parser(PossibleValuesParser::new(values)),
        (FlagKind::Int, None) => arg.value_parser(parse_int),
        (FlagKind::Float, None) => arg.value_parser(parse_float),
        _ => arg,
    };

    if let Some(default) = flag.default {
        arg = arg.default_value(default);
    }
    arg
}

// numbers are written back as the user typed them
fn parse_int(s: &str) -> Result<String, std::num::ParseIntError> {
    s.parse::<i64>().map(|_| s.to_owned())
}

fn parse_float(s: &str) -> Result<String, std::num::ParseFloatError> {
    s.parse::<f64>().map(|_| s.to_owned())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::help::entry;
    use crate::Choices;

    static GROUP_A: TaskGroup = TaskGroup {
        id: "group-a",
        title: "Group A",
        flags: &[
            FlagSpec {
                name: "cfgQA",
                kind: FlagKind::Bool,
                choices: Choices::Any,
                default: None,
                targets: &[("task-a", "cfgQA")],
                help: "Enable QA histograms",
            },
            FlagSpec {
                name: "cfgMinTpcSignal",
                kind: FlagKind::Int,
                choices: Choices::Any,
                default: Some("30"),
                targets: &[("task-a", "cfgMinTpcSignal")],
                help: "Minimum TPC signal",
            },
            FlagSpec {
                name: "process",
                kind: FlagKind::Switch {
                    on: "true",
                    off: "false",
                },
                choices: Choices::Static(&["Full", "BarrelOnly", "MuonOnly"]),
                default: None,
                targets: &[("task-a", "process")],
                help: "Process functions",
            },
        ],
        help: &[entry("Full", "barrel and muon tables")],
    };

    static GROUP_B: TaskGroup = TaskGroup {
        id: "group-b",
        title: "Group B",
        flags: &[FlagSpec {
            name: "cfgQA",
            kind: FlagKind::Bool,
            choices: Choices::Any,
            default: None,
            targets: &[("task-b", "cfgQA")],
            help: "",
        }],
        help: &[],
    };

    static GROUP_C: TaskGroup = TaskGroup {
        id: "group-c",
        title: "Group C",
        flags: &[FlagSpec {
            name: "output",
            kind: FlagKind::Value,
            choices: Choices::Any,
            default: None,
            targets: &[("task-c", "output")],
            help: "",
        }],
        help: &[],
    };

    fn base() -> Command {
        Command::new("test").arg(Arg::new("output").long("output").short('o'))
    }

    #[test]
    fn test_duplicate_between_groups() {
        let groups = [&GROUP_A, &GROUP_B];
        let err = CliBuilder::new(&groups).build(base()).unwrap_err();
        assert!(matches!(err, Error::DuplicateFlag(ref name, ref a, ref b)
            if name == "cfgQA" && a == "group-a" && b == "group-b"));
    }

    #[test]
    fn test_duplicate_with_base() {
        let groups = [&GROUP_C];
        let err = CliBuilder::new(&groups).build(base()).unwrap_err();
        assert!(matches!(err, Error::DuplicateFlag(ref name, ..) if name == "output"));
    }

    #[test]
    fn test_parse_values() -> anyhow::Result<()> {
        let groups = [&GROUP_A];
        let cmd = CliBuilder::new(&groups).build(base())?;
        let matches = cmd.try_get_matches_from([
            "test",
            "--process",
            "Full",
            "MuonOnly",
            "--cfgQA",
            "true",
        ])?;
        let process: Vec<&String> = matches.get_many::<String>("process").unwrap().collect();
        assert_eq!(process, ["Full", "MuonOnly"]);
        assert_eq!(matches.get_one::<String>("cfgQA").unwrap(), "true");
        assert_eq!(matches.get_one::<String>("cfgMinTpcSignal").unwrap(), "30");
        Ok(())
    }

    #[test]
    fn test_rejects_bad_values() -> anyhow::Result<()> {
        let groups = [&GROUP_A];
        let cmd = CliBuilder::new(&groups).build(base())?;
        assert!(cmd
            .clone()
            .try_get_matches_from(["test", "--process", "Everything"])
            .is_err());
        assert!(cmd
            .clone()
            .try_get_matches_from(["test", "--cfgQA", "yes"])
            .is_err());
        assert!(cmd
            .try_get_matches_from(["test", "--cfgMinTpcSignal", "3.5"])
            .is_err());
        Ok(())
    }

    #[test]
    fn test_number_parsers() {
        assert_eq!(parse_int("-1").unwrap(), "-1");
        assert!(parse_int("abc").is_err());
        assert_eq!(parse_float("0.998").unwrap(), "0.998");
        assert!(parse_float("").is_err());
    }
}
