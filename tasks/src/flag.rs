use defs::DefinitionKind;

use crate::HelpEntry;

/// How a flag's values are written into the configuration.
#[derive(Debug, Clone, Copy)]
pub enum FlagKind {
    /// One string, written as-is.
    Value,
    /// One integer, written as a string.
    Int,
    /// One floating-point number, written as a string.
    Float,
    /// `true` or `false`.
    Bool,
    /// Several values, joined with commas.
    List,
    /// Several suffixes. For each target `(task, prefix)`, every `<prefix>*` key is set to
    /// `off`, then `<prefix><value>` is set to `on` for each value given.
    Switch { on: &'static str, off: &'static str },
    /// Several labels, each turning on one `(label, task, process)` process function.
    /// Targets are ignored.
    Enable(&'static [(&'static str, &'static str, &'static str)]),
}

impl FlagKind {
    pub fn takes_many(&self) -> bool {
        matches!(self, Self::List | Self::Switch { .. } | Self::Enable(_))
    }
}

/// Which values a flag accepts.
#[derive(Debug, Clone, Copy)]
pub enum Choices {
    Any,
    /// Enforced while parsing.
    Static(&'static [&'static str]),
    /// Names from a definition library; checked after parsing, once the library is available.
    Definitions(DefinitionKind),
}

/// One command-line flag and the configuration keys it writes.
#[derive(Debug)]
pub struct FlagSpec {
    /// long name, without dashes
    pub name: &'static str,
    pub kind: FlagKind,
    pub choices: Choices,
    pub default: Option<&'static str>,
    /// `(task, key)` pairs; a target whose task isn't in the configuration is skipped
    pub targets: &'static [(&'static str, &'static str)],
    pub help: &'static str,
}

impl FlagSpec {
    /// Allowed values known before parsing, if any.
    pub fn static_values(&self) -> Option<Vec<&'static str>> {
        match (&self.kind, &self.choices) {
            (FlagKind::Enable(map), _) => Some(map.iter().map(|(label, _, _)| *label).collect()),
            (FlagKind::Bool, _) => Some(vec![workflow::TRUE, workflow::FALSE]),
            (_, Choices::Static(values)) => Some(values.to_vec()),
            _ => None,
        }
    }
}

/// Flags of one external task (or a few closely related ones), shown under one help heading.
#[derive(Debug)]
pub struct TaskGroup {
    pub id: &'static str,
    pub title: &'static str,
    pub flags: &'static [FlagSpec],
    pub help: &'static [HelpEntry],
}
