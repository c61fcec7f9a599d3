use super::{DILEPTON_HADRON, EVENT_SEL, MIXING, MUON_SEL, PAIRING, TRACK_SEL};
use crate::help::entry;
use crate::{Choices, FlagKind, FlagSpec, TaskGroup};
use defs::DefinitionKind;

const SKIMMED: &str = "processSkimmed";

pub const GROUP: TaskGroup = TaskGroup {
    id: "table-reader",
    title: "Table reader",
    flags: &[
        FlagSpec {
            name: "analysis",
            kind: FlagKind::Enable(&[
                ("eventSelection", EVENT_SEL, SKIMMED),
                ("trackSelection", TRACK_SEL, SKIMMED),
                ("muonSelection", MUON_SEL, SKIMMED),
                ("eventMixing", MIXING, "processBarrelSkimmed"),
                ("eventMixingMuon", MIXING, "processMuonSkimmed"),
                ("eventMixingBarrelMuon", MIXING, "processBarrelMuonSkimmed"),
                ("sameEventPairing", PAIRING, "processDecayToEESkimmed"),
                ("sameEventPairingMuMu", PAIRING, "processDecayToMuMuSkimmed"),
                ("dileptonHadron", DILEPTON_HADRON, SKIMMED),
            ]),
            choices: Choices::Any,
            default: None,
            targets: &[],
            help: "Analysis steps to enable",
        },
        FlagSpec {
            name: "pairing",
            kind: FlagKind::Switch {
                on: "true",
                off: "false",
            },
            choices: Choices::Static(&[
                "DecayToEESkimmed",
                "DecayToMuMuSkimmed",
                "DecayToMuMuVertexingSkimmed",
                "DecayToEEVertexingSkimmed",
                "VnDecayToEESkimmed",
                "VnDecayToMuMuSkimmed",
            ]),
            default: None,
            targets: &[(PAIRING, "process")],
            help: "Same-event pairing process functions; all others are switched off",
        },
        FlagSpec {
            name: "cfgTrackCuts",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::Cuts),
            default: None,
            targets: &[(TRACK_SEL, "cfgTrackCuts")],
            help: "Barrel track cuts of the analysis",
        },
        FlagSpec {
            name: "cfgPairCuts",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::Cuts),
            default: None,
            targets: &[(PAIRING, "cfgPairCuts")],
            help: "Pair cuts of the same-event pairing",
        },
        FlagSpec {
            name: "cfgMixingVars",
            kind: FlagKind::List,
            choices: Choices::Definitions(DefinitionKind::Mixing),
            default: None,
            targets: &[(EVENT_SEL, "cfgMixingVars")],
            help: "Event mixing variables",
        },
    ],
    help: &[
        entry("eventSelection", "event selection on skimmed data"),
        entry("trackSelection", "barrel track selection"),
        entry("muonSelection", "muon selection"),
        entry("eventMixing", "barrel event mixing"),
        entry("eventMixingMuon", "muon event mixing"),
        entry("eventMixingBarrelMuon", "barrel-muon event mixing"),
        entry("sameEventPairing", "dielectron pairing"),
        entry("sameEventPairingMuMu", "dimuon pairing"),
        entry("dileptonHadron", "dilepton-hadron combinations"),
    ],
};
