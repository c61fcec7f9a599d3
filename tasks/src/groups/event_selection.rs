use crate::help::entry;
use crate::{Choices, FlagKind, FlagSpec, TaskGroup};

const TASK: &str = "event-selection-task";

pub const GROUP: TaskGroup = TaskGroup {
    id: "event-selection",
    title: "Event selection",
    flags: &[
        FlagSpec {
            name: "syst",
            kind: FlagKind::Value,
            choices: Choices::Static(&["PbPb", "pp", "pPb", "Pbp", "XeXe"]),
            default: None,
            targets: &[(TASK, "syst")],
            help: "Collision system",
        },
        FlagSpec {
            name: "muonSelection",
            kind: FlagKind::Value,
            choices: Choices::Static(&["0", "1", "2"]),
            default: None,
            targets: &[(TASK, "muonSelection")],
            help: "Muon trigger selection mode",
        },
        FlagSpec {
            name: "customDeltaBC",
            kind: FlagKind::Int,
            choices: Choices::Any,
            default: None,
            targets: &[(TASK, "customDeltaBC")],
            help: "Custom BC shift applied to the trigger",
        },
    ],
    help: &[
        entry("muonSelection 0", "no muon selection"),
        entry("muonSelection 1", "muon selection with pileup cuts"),
        entry("muonSelection 2", "muon selection without pileup cuts"),
    ],
};
