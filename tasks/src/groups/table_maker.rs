use super::{TABLE_MAKER, TABLE_MAKER_MC};
use crate::help::entry;
use crate::{Choices, FlagKind, FlagSpec, TaskGroup};
use defs::DefinitionKind;

const fn both(key: &'static str) -> [(&'static str, &'static str); 2] {
    [(TABLE_MAKER, key), (TABLE_MAKER_MC, key)]
}

pub const GROUP: TaskGroup = TaskGroup {
    id: "table-maker",
    title: "Table maker",
    flags: &[
        FlagSpec {
            name: "process",
            kind: FlagKind::Switch {
                on: "true",
                off: "false",
            },
            choices: Choices::Static(&[
                "Full",
                "FullWithCov",
                "FullWithCent",
                "BarrelOnly",
                "BarrelOnlyWithCov",
                "BarrelOnlyWithCent",
                "BarrelOnlyWithV0Bits",
                "BarrelOnlyWithEventFilter",
                "BarrelOnlyWithQvector",
                "MuonOnly",
                "MuonOnlyWithCov",
                "MuonOnlyWithCent",
                "MuonOnlyWithQvector",
                "MuonOnlyWithFilter",
            ]),
            default: None,
            targets: &both("process"),
            help: "Process functions of the table maker; all others are switched off",
        },
        FlagSpec {
            name: "cfgBarrelLowPt",
            kind: FlagKind::Float,
            choices: Choices::Any,
            default: None,
            targets: &both("cfgBarrelLowPt"),
            help: "Lower pT cut for barrel tracks",
        },
        FlagSpec {
            name: "cfgMuonLowPt",
            kind: FlagKind::Float,
            choices: Choices::Any,
            default: None,
            targets: &both("cfgMuonLowPt"),
            help: "Lower pT cut for muons",
        },
        FlagSpec {
            name: "cfgMinTpcSignal",
            kind: FlagKind::Int,
            choices: Choices::Any,
            default: None,
            targets: &both("cfgMinTpcSignal"),
            help: "Minimal TPC signal",
        },
        FlagSpec {
            name: "cfgMaxTpcSignal",
            kind: FlagKind::Int,
            choices: Choices::Any,
            default: None,
            targets: &both("cfgMaxTpcSignal"),
            help: "Maximal TPC signal",
        },
        FlagSpec {
            name: "cfgDetailedQA",
            kind: FlagKind::Bool,
            choices: Choices::Any,
            default: None,
            targets: &both("cfgDetailedQA"),
            help: "Fill the detailed QA histograms",
        },
        FlagSpec {
            name: "cfgIsRun2",
            kind: FlagKind::Bool,
            choices: Choices::Any,
            default: None,
            targets: &both("cfgIsRun2"),
            help: "Input is Run 2 data",
        },
        FlagSpec {
            name: "cfgMCsignals",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::MCSignals),
            default: None,
            targets: &[(TABLE_MAKER_MC, "cfgMCsignals")],
            help: "MC signals whose generated particles are kept",
        },
    ],
    help: &[
        entry("Full", "barrel tracks and muons"),
        entry("BarrelOnly", "barrel tracks only"),
        entry("MuonOnly", "muons only"),
        entry("*WithCov", "also write track covariances"),
        entry("*WithCent", "also write centrality (runs the centrality table)"),
        entry("*WithV0Bits", "also write V0 bits (runs the V0 selector)"),
        entry("*WithEventFilter", "keep only events passing the DQ filter"),
        entry("*WithQvector", "also write Q-vectors (runs DQ flow)"),
    ],
};
