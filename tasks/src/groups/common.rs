//! Flags whose config key is shared by the table maker and the analysis tasks.

use super::{
    DQ_BARREL_SEL, DQ_EVENT_SEL, DQ_MUON_SEL, EVENT_SEL, FILTER_PP, MUON_SEL, PAIRING, QVECTOR,
    TABLE_MAKER, TABLE_MAKER_MC, TRACK_SEL,
};
use crate::{Choices, FlagKind, FlagSpec, TaskGroup};
use defs::DefinitionKind;

pub const GROUP: TaskGroup = TaskGroup {
    id: "common",
    title: "Common DQ selections",
    flags: &[
        FlagSpec {
            name: "cfgEventCuts",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::Cuts),
            default: None,
            targets: &[
                (TABLE_MAKER, "cfgEventCuts"),
                (TABLE_MAKER_MC, "cfgEventCuts"),
                (EVENT_SEL, "cfgEventCuts"),
                (QVECTOR, "cfgEventCuts"),
                (DQ_EVENT_SEL, "cfgEventCuts"),
            ],
            help: "Event selection cuts",
        },
        FlagSpec {
            name: "cfgBarrelTrackCuts",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::Cuts),
            default: None,
            targets: &[
                (TABLE_MAKER, "cfgBarrelTrackCuts"),
                (TABLE_MAKER_MC, "cfgBarrelTrackCuts"),
                (DQ_BARREL_SEL, "cfgBarrelTrackCuts"),
            ],
            help: "Barrel track cuts",
        },
        FlagSpec {
            name: "cfgMuonCuts",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::Cuts),
            default: None,
            targets: &[
                (TABLE_MAKER, "cfgMuonCuts"),
                (TABLE_MAKER_MC, "cfgMuonCuts"),
                (MUON_SEL, "cfgMuonCuts"),
                (DQ_MUON_SEL, "cfgMuonsCuts"),
            ],
            help: "Muon track cuts",
        },
        FlagSpec {
            name: "cfgQA",
            kind: FlagKind::Bool,
            choices: Choices::Any,
            default: None,
            targets: &[
                (TABLE_MAKER, "cfgQA"),
                (TABLE_MAKER_MC, "cfgQA"),
                (EVENT_SEL, "cfgQA"),
                (TRACK_SEL, "cfgQA"),
                (MUON_SEL, "cfgQA"),
                (PAIRING, "cfgQA"),
                (QVECTOR, "cfgQA"),
                (FILTER_PP, "cfgWithQA"),
            ],
            help: "Fill QA histograms",
        },
    ],
    help: &[],
};
