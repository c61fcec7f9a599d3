use crate::help::entry;
use crate::{Choices, FlagKind, FlagSpec, TaskGroup};

pub const GROUP: TaskGroup = TaskGroup {
    id: "centrality",
    title: "Centrality table",
    flags: &[FlagSpec {
        name: "est",
        kind: FlagKind::Switch { on: "1", off: "-1" },
        choices: Choices::Static(&[
            "Run2V0M",
            "Run2SPDtks",
            "Run2SPDcls",
            "Run2CL0",
            "Run2CL1",
            "FV0A",
            "FT0M",
            "FT0A",
            "FT0C",
            "FDDM",
            "NTPV",
        ]),
        default: None,
        targets: &[("centrality-table", "est")],
        help: "Centrality estimators to produce; all others are switched off",
    }],
    help: &[
        entry("Run2*", "Run 2 estimators (V0M, SPD tracklets and clusters, CL0, CL1)"),
        entry("FV0A, FT0*", "Run 3 FIT estimators"),
        entry("FDDM", "Run 3 FDD estimator"),
        entry("NTPV", "number of PV contributors"),
    ],
};
