use crate::help::entry;
use crate::{Choices, FlagKind, FlagSpec, TaskGroup};

const TASK: &str = "track-selection";

pub const GROUP: TaskGroup = TaskGroup {
    id: "track-selection",
    title: "Track selection",
    flags: &[
        FlagSpec {
            name: "itsMatching",
            kind: FlagKind::Value,
            choices: Choices::Static(&["0", "1", "2", "3"]),
            default: None,
            targets: &[(TASK, "itsMatching")],
            help: "ITS matching requirement of the global track selection",
        },
        FlagSpec {
            name: "compatibilityIU",
            kind: FlagKind::Bool,
            choices: Choices::Any,
            default: None,
            targets: &[(TASK, "compatibilityIU")],
            help: "Read tracks at the innermost update point",
        },
        FlagSpec {
            name: "ptMin",
            kind: FlagKind::Float,
            choices: Choices::Any,
            default: None,
            targets: &[(TASK, "ptMin")],
            help: "Lower pT cut",
        },
        FlagSpec {
            name: "etaMin",
            kind: FlagKind::Float,
            choices: Choices::Any,
            default: None,
            targets: &[(TASK, "etaMin")],
            help: "Lower eta cut",
        },
        FlagSpec {
            name: "etaMax",
            kind: FlagKind::Float,
            choices: Choices::Any,
            default: None,
            targets: &[(TASK, "etaMax")],
            help: "Upper eta cut",
        },
    ],
    help: &[
        entry("itsMatching 0", "Run 2 SPD kAny"),
        entry("itsMatching 1", "Run 3 ITS hit map"),
        entry("itsMatching 2", "Run 3 ITS inner barrel, any layer"),
        entry("itsMatching 3", "Run 3 ITS inner barrel, all three layers"),
    ],
};
