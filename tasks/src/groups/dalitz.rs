use crate::{Choices, FlagKind, FlagSpec, TaskGroup};
use defs::DefinitionKind;

const TASK: &str = "dalitz-pairing";

pub const GROUP: TaskGroup = TaskGroup {
    id: "dalitz",
    title: "Dalitz selection",
    flags: &[
        FlagSpec {
            name: "cfgDalitzTrackCuts",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::Cuts),
            default: None,
            targets: &[(TASK, "cfgDalitzTrackCuts")],
            help: "Track cuts for Dalitz electrons",
        },
        FlagSpec {
            name: "cfgDalitzPairCuts",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::Cuts),
            default: None,
            targets: &[(TASK, "cfgDalitzPairCuts")],
            help: "Pair cuts for Dalitz pairs",
        },
    ],
    help: &[],
};
