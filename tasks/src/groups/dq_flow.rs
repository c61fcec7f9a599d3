use super::QVECTOR;
use crate::{Choices, FlagKind, FlagSpec, TaskGroup};
use defs::DefinitionKind;

pub const GROUP: TaskGroup = TaskGroup {
    id: "dq-flow",
    title: "DQ flow",
    flags: &[
        FlagSpec {
            name: "cfgFlowTrackCuts",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::Cuts),
            default: None,
            targets: &[(QVECTOR, "cfgTrackCuts")],
            help: "Track cuts for the Q-vector",
        },
        FlagSpec {
            name: "cfgCutPtMin",
            kind: FlagKind::Float,
            choices: Choices::Any,
            default: None,
            targets: &[(QVECTOR, "cfgCutPtMin")],
            help: "Minimal pT for the Q-vector tracks",
        },
        FlagSpec {
            name: "cfgCutPtMax",
            kind: FlagKind::Float,
            choices: Choices::Any,
            default: None,
            targets: &[(QVECTOR, "cfgCutPtMax")],
            help: "Maximal pT for the Q-vector tracks",
        },
        FlagSpec {
            name: "cfgCutEta",
            kind: FlagKind::Float,
            choices: Choices::Any,
            default: None,
            targets: &[(QVECTOR, "cfgCutEta")],
            help: "Eta range for the Q-vector tracks",
        },
    ],
    help: &[],
};
