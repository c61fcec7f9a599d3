use crate::help::entry;
use crate::{Choices, FlagKind, FlagSpec, TaskGroup};

const TASK: &str = "track-propagation";

pub const GROUP: TaskGroup = TaskGroup {
    id: "track-propagation",
    title: "Track propagation",
    flags: &[
        FlagSpec {
            name: "trackPropProcess",
            kind: FlagKind::Switch {
                on: "true",
                off: "false",
            },
            choices: Choices::Static(&["Standard", "Covariance"]),
            default: None,
            targets: &[(TASK, "process")],
            help: "Track propagation process function (with --add-track-prop)",
        },
        FlagSpec {
            name: "minPropagationDistance",
            kind: FlagKind::Float,
            choices: Choices::Any,
            default: None,
            targets: &[(TASK, "minPropagationDistance")],
            help: "Only propagate tracks further out than this radius (cm)",
        },
    ],
    help: &[
        entry("Standard", "propagate track parameters"),
        entry("Covariance", "propagate track parameters and covariance"),
    ],
};
