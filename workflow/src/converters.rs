use util::OrderedSet;

/// Run `converter` when an AOD has the `legacy` tree but not its `current` version.
#[derive(Debug, Clone, Copy)]
pub struct ConverterRule {
    pub legacy: &'static str,
    pub current: &'static str,
    pub converter: &'static str,
}

const fn rule(
    legacy: &'static str,
    current: &'static str,
    converter: &'static str,
) -> ConverterRule {
    ConverterRule {
        legacy,
        current,
        converter,
    }
}

pub const CONVERTERS: &[ConverterRule] = &[
    rule("O2bc", "O2bc_001", "o2-analysis-bc-converter"),
    rule("O2collision", "O2collision_001", "o2-analysis-collision-converter"),
    rule("O2fdd", "O2fdd_001", "o2-analysis-fdd-converter"),
    rule("O2zdc", "O2zdc_001", "o2-analysis-zdc-converter"),
    rule("O2mcparticle", "O2mcparticle_001", "o2-analysis-mc-converter"),
    rule("O2trackextra", "O2trackextra_001", "o2-analysis-tracks-extra-converter"),
    rule("O2v0", "O2v0_001", "o2-analysis-v0converter"),
];

/// Tree holding tracks at their innermost update point; such AODs need track propagation.
const TRACK_IU_TREE: &str = "O2track_iu";

/// True if the AOD stores unpropagated tracks.
pub fn needs_track_propagation<S: AsRef<str>>(trees: &[S]) -> bool {
    trees.iter().any(|t| t.as_ref() == TRACK_IU_TREE)
}

/// Adds converter executables to a run list based on the trees found in an AOD.
pub struct ConverterManager<'a> {
    rules: &'a [ConverterRule],
}

impl Default for ConverterManager<'static> {
    fn default() -> Self {
        Self::new(CONVERTERS)
    }
}

impl<'a> ConverterManager<'a> {
    pub fn new(rules: &'a [ConverterRule]) -> Self {
        Self { rules }
    }

    /// Append the converters `trees` call for. Returns how many were added.
    pub fn apply<S: AsRef<str>>(&self, trees: &[S], run_list: &mut OrderedSet<String>) -> usize {
        let has = |name: &str| trees.iter().any(|t| t.as_ref() == name);
        let mut added = 0;
        for rule in self.rules {
            if has(rule.legacy) && !has(rule.current) {
                log::info!(
                    "AOD has {} but no {}; adding {}",
                    rule.legacy,
                    rule.current,
                    rule.converter
                );
                if run_list.insert(rule.converter.to_owned()) {
                    added += 1;
                }
            }
        }
        added
    }
}
