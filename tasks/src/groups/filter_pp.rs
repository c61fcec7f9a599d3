use super::{DQ_BARREL_SEL, FILTER_PP};
use crate::help::entry;
use crate::{Choices, FlagKind, FlagSpec, TaskGroup};

pub const GROUP: TaskGroup = TaskGroup {
    id: "filter-pp",
    title: "Filter pp",
    flags: &[
        FlagSpec {
            name: "filterProcess",
            kind: FlagKind::Switch {
                on: "true",
                off: "false",
            },
            choices: Choices::Static(&["FilterPP", "FilterPPTiny"]),
            default: None,
            targets: &[(FILTER_PP, "process")],
            help: "Filter process function; all others are switched off",
        },
        FlagSpec {
            name: "barrelSelection",
            kind: FlagKind::Switch {
                on: "true",
                off: "false",
            },
            choices: Choices::Static(&["Selection", "SelectionTiny"]),
            default: None,
            targets: &[(DQ_BARREL_SEL, "process")],
            help: "Barrel track selection process function",
        },
        FlagSpec {
            name: "cfgBarrelSels",
            kind: FlagKind::List,
            choices: Choices::Any,
            default: None,
            targets: &[(FILTER_PP, "cfgBarrelSels")],
            help: "Barrel selections, as <cut>:<pair cut>:<n>",
        },
        FlagSpec {
            name: "cfgMuonSels",
            kind: FlagKind::List,
            choices: Choices::Any,
            default: None,
            targets: &[(FILTER_PP, "cfgMuonSels")],
            help: "Muon selections, as <cut>:<pair cut>:<n>",
        },
    ],
    help: &[
        entry("FilterPP", "barrel and muon filter"),
        entry("FilterPPTiny", "barrel filter on the tiny track tables"),
    ],
};
