use super::{DILEPTON_TRACK, MUON_SEL, PAIRING, TRACK_SEL};
use crate::help::entry;
use crate::{Choices, FlagKind, FlagSpec, TaskGroup};
use defs::DefinitionKind;

const fn signals(
    name: &'static str,
    targets: &'static [(&'static str, &'static str)],
    help: &'static str,
) -> FlagSpec {
    FlagSpec {
        name,
        kind: FlagKind::List,
        choices: Choices::Definitions(DefinitionKind::MCSignals),
        default: None,
        targets,
        help,
    }
}

pub const GROUP: TaskGroup = TaskGroup {
    id: "efficiency",
    title: "Efficiency",
    flags: &[
        FlagSpec {
            name: "dilepton",
            kind: FlagKind::Enable(&[
                ("dimuonMuon", DILEPTON_TRACK, "processDimuonMuonSkimmed"),
                ("dielectronKaon", DILEPTON_TRACK, "processDielectronKaonSkimmed"),
            ]),
            choices: Choices::Any,
            default: None,
            targets: &[],
            help: "Dilepton-track combinations to enable",
        },
        signals(
            "cfgTrackMCSignals",
            &[(TRACK_SEL, "cfgTrackMCSignals")],
            "MC signals matched to barrel tracks",
        ),
        signals(
            "cfgMuonMCSignals",
            &[(MUON_SEL, "cfgMuonMCSignals")],
            "MC signals matched to muons",
        ),
        signals(
            "cfgBarrelMCRecSignals",
            &[(PAIRING, "cfgBarrelMCRecSignals")],
            "MC signals of reconstructed pairs",
        ),
        signals(
            "cfgBarrelMCGenSignals",
            &[(PAIRING, "cfgBarrelMCGenSignals")],
            "MC signals of generated pairs",
        ),
        signals(
            "cfgDileptonMCSignals",
            &[(DILEPTON_TRACK, "cfgBarrelMCRecSignals")],
            "MC signals of dilepton-track combinations",
        ),
    ],
    help: &[
        entry("dimuonMuon", "dimuon plus muon"),
        entry("dielectronKaon", "dielectron plus kaon"),
    ],
};
