use std::fmt;

/// The three PWGDQ libraries whose names are offered as flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefinitionKind {
    Cuts,
    MCSignals,
    Mixing,
}

impl DefinitionKind {
    pub const ALL: [DefinitionKind; 3] = [Self::Cuts, Self::MCSignals, Self::Mixing];

    /// File name in `PWGDQ/Core`.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Cuts => "CutsLibrary.cxx",
            Self::MCSignals => "MCSignalLibrary.cxx",
            Self::Mixing => "MixingLibrary.cxx",
        }
    }
}

impl fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Cuts => "analysis cuts",
            Self::MCSignals => "MC signals",
            Self::Mixing => "mixing variables",
        };
        f.write_str(label)
    }
}
