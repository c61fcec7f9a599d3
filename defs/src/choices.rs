use anyhow::Result;

use crate::{ChoiceExtractor, DefinitionFiles, DefinitionKind, NAME_MARKER};

/// Names harvested from the definition libraries.
/// Built once at startup and handed to whatever needs to validate flag values.
#[derive(Debug, Default, Clone)]
pub struct DefinitionChoices {
    pub cuts: Vec<String>,
    pub mc_signals: Vec<String>,
    pub mixing_vars: Vec<String>,
}

impl DefinitionChoices {
    /// Scan every file in `files`.
    pub fn load(files: &DefinitionFiles) -> Result<Self> {
        let extractor = ChoiceExtractor::new()?;
        let mut choices = Self::default();
        for kind in DefinitionKind::ALL {
            let names = extractor.extract_file(&files.path(kind), NAME_MARKER);
            log::debug!("found {} {kind}", names.len());
            *choices.get_mut(kind) = names;
        }
        Ok(choices)
    }

    pub fn get(&self, kind: DefinitionKind) -> &[String] {
        match kind {
            DefinitionKind::Cuts => &self.cuts,
            DefinitionKind::MCSignals => &self.mc_signals,
            DefinitionKind::Mixing => &self.mixing_vars,
        }
    }

    fn get_mut(&mut self, kind: DefinitionKind) -> &mut Vec<String> {
        match kind {
            DefinitionKind::Cuts => &mut self.cuts,
            DefinitionKind::MCSignals => &mut self.mc_signals,
            DefinitionKind::Mixing => &mut self.mixing_vars,
        }
    }

    /// True if `value` is a known name. An empty list accepts anything.
    pub fn is_allowed(&self, kind: DefinitionKind, value: &str) -> bool {
        let names = self.get(kind);
        names.is_empty() || names.iter().any(|n| n == value)
    }
}
