use crate::{Choices, FlagKind, FlagSpec, TaskGroup};

pub const GROUP: TaskGroup = TaskGroup {
    id: "multiplicity",
    title: "Multiplicity table",
    flags: &[FlagSpec {
        name: "isVertexZeq",
        kind: FlagKind::Bool,
        choices: Choices::Any,
        default: None,
        targets: &[("multiplicity-table", "doVertexZeq")],
        help: "Equalize multiplicity estimators in vertex Z",
    }],
    help: &[],
};
