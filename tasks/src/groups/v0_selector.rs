use crate::{Choices, FlagKind, FlagSpec, TaskGroup};

const TASK: &str = "v0-selector";

const fn float(
    name: &'static str,
    targets: &'static [(&'static str, &'static str)],
    help: &'static str,
) -> FlagSpec {
    FlagSpec {
        name,
        kind: FlagKind::Float,
        choices: Choices::Any,
        default: None,
        targets,
        help,
    }
}

pub const GROUP: TaskGroup = TaskGroup {
    id: "v0-selector",
    title: "V0 selector",
    flags: &[
        float(
            "d_bz_input",
            &[(TASK, "d_bz_input")],
            "Magnetic field (kG); -999 reads it from CCDB",
        ),
        float("v0cospa", &[(TASK, "v0cospa")], "Minimal V0 cosine of pointing angle"),
        float("dcav0dau", &[(TASK, "dcav0dau")], "Maximal DCA between the V0 daughters"),
        float("v0Rmin", &[(TASK, "v0Rmin")], "Minimal V0 radius"),
        float("v0Rmax", &[(TASK, "v0Rmax")], "Maximal V0 radius"),
        float(
            "dcamin",
            &[(TASK, "dcamin")],
            "Minimal daughter DCA to the primary vertex",
        ),
        float(
            "dcamax",
            &[(TASK, "dcamax")],
            "Maximal daughter DCA to the primary vertex",
        ),
        FlagSpec {
            name: "mincrossedrows",
            kind: FlagKind::Int,
            choices: Choices::Any,
            default: None,
            targets: &[(TASK, "mincrossedrows")],
            help: "Minimal number of crossed TPC rows",
        },
        float("maxchi2tpc", &[(TASK, "maxchi2tpc")], "Maximal TPC chi2 per cluster"),
    ],
    help: &[],
};
