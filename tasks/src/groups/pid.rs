use crate::help::entry;
use crate::{Choices, FlagKind, FlagSpec, TaskGroup};

pub const GROUP: TaskGroup = TaskGroup {
    id: "pid",
    title: "PID",
    flags: &[
        FlagSpec {
            name: "pid",
            kind: FlagKind::Switch { on: "1", off: "-1" },
            choices: Choices::Static(&["el", "mu", "pi", "ka", "pr", "de", "tr", "he", "al"]),
            default: None,
            targets: &[("tpc-pid-full", "pid-"), ("tof-pid-full", "pid-")],
            help: "Particle species with TPC and TOF PID tables",
        },
        FlagSpec {
            name: "tof-expreso",
            kind: FlagKind::Float,
            choices: Choices::Any,
            default: None,
            targets: &[("tof-pid-beta", "tof-expreso")],
            help: "Expected resolution for the TOF beta",
        },
    ],
    help: &[
        entry("el", "electron"),
        entry("mu", "muon"),
        entry("pi", "pion"),
        entry("ka", "kaon"),
        entry("pr", "proton"),
        entry("de", "deuteron"),
        entry("tr", "triton"),
        entry("he", "helium-3"),
        entry("al", "alpha"),
    ],
};
