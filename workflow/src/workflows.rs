use std::fmt;
use std::str::FromStr;

use crate::{DependencyRule, Error};

/// An analysis workflow `o2dq` knows how to configure and launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowKind {
    TableMaker,
    TableMakerMC,
    TableReader,
    Efficiency,
    FilterPP,
}

/// Command-line names of every workflow, in `WorkflowKind` order.
pub const WORKFLOW_NAMES: [&str; 5] = [
    "table-maker",
    "table-maker-mc",
    "table-reader",
    "efficiency",
    "filter-pp",
];

impl WorkflowKind {
    pub const ALL: [WorkflowKind; 5] = [
        Self::TableMaker,
        Self::TableMakerMC,
        Self::TableReader,
        Self::Efficiency,
        Self::FilterPP,
    ];

    pub fn name(self) -> &'static str {
        WORKFLOW_NAMES[self as usize]
    }

    pub fn def(self) -> &'static WorkflowDef {
        match self {
            Self::TableMaker => &TABLE_MAKER,
            Self::TableMakerMC => &TABLE_MAKER_MC,
            Self::TableReader => &TABLE_READER,
            Self::Efficiency => &EFFICIENCY,
            Self::FilterPP => &FILTER_PP_DEF,
        }
    }
}

impl FromStr for WorkflowKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| Error::UnknownWorkflow(s.to_owned()))
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What enabling one process function of a task brings into the workflow.
#[derive(Debug, Clone, Copy)]
pub struct ProcessSpec {
    pub task: &'static str,
    pub name: &'static str,
    /// pulls in the workflow's barrel-track helpers
    pub barrel: bool,
    /// pulls in the workflow's muon helpers
    pub muon: bool,
    /// extra executables
    pub deps: &'static [&'static str],
    /// tables written to the output AOD
    pub tables: &'static [&'static str],
    /// tables read from an input reduced AOD
    pub reads: &'static [&'static str],
}

/// Static description of an analysis workflow.
#[derive(Debug)]
pub struct WorkflowDef {
    pub kind: WorkflowKind,
    pub executable: &'static str,
    /// task that must be present in the configuration file
    pub main_task: &'static str,
    /// process function forced on if the user turned it off
    pub mandatory: Option<(&'static str, &'static str)>,
    pub common_deps: &'static [&'static str],
    pub barrel_deps: &'static [&'static str],
    pub muon_deps: &'static [&'static str],
    pub processes: &'static [ProcessSpec],
    pub dependencies: &'static [DependencyRule],
    /// name of the output AOD written by the AOD writer
    pub resfile: &'static str,
    /// reads raw AODs, so converters and track propagation may apply;
    /// false for workflows reading reduced DQ AODs
    pub raw_input: bool,
}

const NONE: &[&str] = &[];

const fn process(
    task: &'static str,
    name: &'static str,
    barrel: bool,
    muon: bool,
    deps: &'static [&'static str],
    tables: &'static [&'static str],
) -> ProcessSpec {
    ProcessSpec {
        task,
        name,
        barrel,
        muon,
        deps,
        tables,
        reads: NONE,
    }
}

const fn reader(
    task: &'static str,
    name: &'static str,
    reads: &'static [&'static str],
    tables: &'static [&'static str],
) -> ProcessSpec {
    ProcessSpec {
        task,
        name,
        barrel: false,
        muon: false,
        deps: NONE,
        tables,
        reads,
    }
}

const fn requires(
    task: &'static str,
    process: &'static str,
    requires: &'static [(&'static str, &'static str)],
) -> DependencyRule {
    DependencyRule {
        task,
        process,
        requires,
    }
}

// EXECUTABLES ///////////////////

const COMMON_DEPS: &[&str] = &[
    "o2-analysis-timestamp",
    "o2-analysis-event-selection",
    "o2-analysis-multiplicity-table",
];

const BARREL_DEPS: &[&str] = &[
    "o2-analysis-trackselection",
    crate::TRACK_EXTENSION,
    "o2-analysis-pid-tof-base",
    "o2-analysis-pid-tof-full",
    "o2-analysis-pid-tof-beta",
    "o2-analysis-pid-tpc-base",
    "o2-analysis-pid-tpc-full",
];

const MUON_DEPS: &[&str] = &["o2-analysis-fwdtrackextension"];

const CENTRALITY: &[&str] = &["o2-analysis-centrality-table"];
const V0_BITS: &[&str] = &["o2-analysis-dq-v0-selector", "o2-analysis-weak-decay-indices"];
const EVENT_FILTER: &[&str] = &["o2-analysis-dq-filter-pp"];
const QVECTOR: &[&str] = &["o2-analysis-dq-flow"];

// TABLES ////////////////////////

const EVENTS_BARREL: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedTracks",
    "ReducedTracksBarrel",
    "ReducedTracksBarrelPID",
];
const EVENTS_BARREL_COV: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedTracks",
    "ReducedTracksBarrel",
    "ReducedTracksBarrelCov",
    "ReducedTracksBarrelPID",
];
const EVENTS_BARREL_QVECTOR: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedEventsQvector",
    "ReducedTracks",
    "ReducedTracksBarrel",
    "ReducedTracksBarrelPID",
];
const EVENTS_MUON: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedMuons",
    "ReducedMuonsExtra",
];
const EVENTS_MUON_COV: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedMuons",
    "ReducedMuonsExtra",
    "ReducedMuonsCov",
];
const EVENTS_MUON_QVECTOR: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedEventsQvector",
    "ReducedMuons",
    "ReducedMuonsExtra",
];
const EVENTS_FULL: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedTracks",
    "ReducedTracksBarrel",
    "ReducedTracksBarrelPID",
    "ReducedMuons",
    "ReducedMuonsExtra",
];
const EVENTS_FULL_COV: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedTracks",
    "ReducedTracksBarrel",
    "ReducedTracksBarrelCov",
    "ReducedTracksBarrelPID",
    "ReducedMuons",
    "ReducedMuonsExtra",
    "ReducedMuonsCov",
];

const MC_FULL: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedMCEventLabels",
    "ReducedMCEvents",
    "ReducedTracks",
    "ReducedTracksBarrel",
    "ReducedTracksBarrelPID",
    "ReducedTracksBarrelLabels",
    "ReducedMuons",
    "ReducedMuonsExtra",
    "ReducedMuonsLabels",
    "ReducedMCTracks",
];
const MC_FULL_COV: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedMCEventLabels",
    "ReducedMCEvents",
    "ReducedTracks",
    "ReducedTracksBarrel",
    "ReducedTracksBarrelCov",
    "ReducedTracksBarrelPID",
    "ReducedTracksBarrelLabels",
    "ReducedMuons",
    "ReducedMuonsExtra",
    "ReducedMuonsCov",
    "ReducedMuonsLabels",
    "ReducedMCTracks",
];
const MC_BARREL: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedMCEventLabels",
    "ReducedMCEvents",
    "ReducedTracks",
    "ReducedTracksBarrel",
    "ReducedTracksBarrelPID",
    "ReducedTracksBarrelLabels",
    "ReducedMCTracks",
];
const MC_BARREL_COV: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedMCEventLabels",
    "ReducedMCEvents",
    "ReducedTracks",
    "ReducedTracksBarrel",
    "ReducedTracksBarrelCov",
    "ReducedTracksBarrelPID",
    "ReducedTracksBarrelLabels",
    "ReducedMCTracks",
];
const MC_MUON: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedMCEventLabels",
    "ReducedMCEvents",
    "ReducedMuons",
    "ReducedMuonsExtra",
    "ReducedMuonsLabels",
    "ReducedMCTracks",
];
const MC_MUON_COV: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsVtxCov",
    "ReducedMCEventLabels",
    "ReducedMCEvents",
    "ReducedMuons",
    "ReducedMuonsExtra",
    "ReducedMuonsCov",
    "ReducedMuonsLabels",
    "ReducedMCTracks",
];

const READ_EVENTS: &[&str] = &["ReducedEvents", "ReducedEventsExtended"];
const READ_EVENTS_QVECTOR: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedEventsQvector",
];
const READ_BARREL: &[&str] = &["ReducedTracks", "ReducedTracksBarrel", "ReducedTracksBarrelPID"];
const READ_BARREL_COV: &[&str] = &[
    "ReducedTracks",
    "ReducedTracksBarrel",
    "ReducedTracksBarrelCov",
    "ReducedTracksBarrelPID",
];
const READ_MUON: &[&str] = &["ReducedMuons", "ReducedMuonsExtra"];
const READ_MUON_COV: &[&str] = &["ReducedMuons", "ReducedMuonsExtra", "ReducedMuonsCov"];
const READ_MC_EVENTS: &[&str] = &[
    "ReducedEvents",
    "ReducedEventsExtended",
    "ReducedMCEventLabels",
    "ReducedMCEvents",
];
const READ_MC_BARREL: &[&str] = &[
    "ReducedTracks",
    "ReducedTracksBarrel",
    "ReducedTracksBarrelPID",
    "ReducedTracksBarrelLabels",
    "ReducedMCTracks",
];
const READ_MC_MUON: &[&str] = &[
    "ReducedMuons",
    "ReducedMuonsExtra",
    "ReducedMuonsLabels",
    "ReducedMCTracks",
];

const DILEPTONS: &[&str] = &["Dileptons", "DileptonsExtra"];
const DILEPTONS_VERTEXING: &[&str] = &["Dileptons", "DileptonsExtra", "DimuonsAll"];
const DILEPTONS_FLOW: &[&str] = &["Dileptons", "DileptonsExtra", "DileptonFlow"];

// TASK NAMES ////////////////////

const TABLE_MAKER_TASK: &str = "table-maker";
const TABLE_MAKER_MC_TASK: &str = "table-maker-m-c";
const FILTER_PP_TASK: &str = "d-q-filter-p-p-task";
const EVENT_SEL: &str = "analysis-event-selection";
const TRACK_SEL: &str = "analysis-track-selection";
const MUON_SEL: &str = "analysis-muon-selection";
const MIXING: &str = "analysis-event-mixing";
const PAIRING: &str = "analysis-same-event-pairing";
const DILEPTON_HADRON: &str = "analysis-dilepton-hadron";
const DILEPTON_TRACK: &str = "analysis-dilepton-track";
const DQ_EVENT_SEL: &str = "d-q-event-selection-task";
const DQ_BARREL_SEL: &str = "d-q-barrel-track-selection";
const DQ_MUON_SEL: &str = "d-q-muons-selection";

const SKIMMED: &str = "processSkimmed";
const FILTER_PP: (&str, &str) = (FILTER_PP_TASK, "processFilterPP");
const EVENT_SKIMMED: (&str, &str) = (EVENT_SEL, SKIMMED);
const TRACK_SKIMMED: (&str, &str) = (TRACK_SEL, SKIMMED);
const MUON_SKIMMED: (&str, &str) = (MUON_SEL, SKIMMED);

// WORKFLOWS /////////////////////

static TABLE_MAKER: WorkflowDef = WorkflowDef {
    kind: WorkflowKind::TableMaker,
    executable: "o2-analysis-dq-table-maker",
    main_task: TABLE_MAKER_TASK,
    mandatory: None,
    common_deps: COMMON_DEPS,
    barrel_deps: BARREL_DEPS,
    muon_deps: MUON_DEPS,
    processes: &[
        process(TABLE_MAKER_TASK, "processFull", true, true, NONE, EVENTS_FULL),
        process(TABLE_MAKER_TASK, "processFullWithCov", true, true, NONE, EVENTS_FULL_COV),
        process(TABLE_MAKER_TASK, "processFullWithCent", true, true, CENTRALITY, EVENTS_FULL),
        process(TABLE_MAKER_TASK, "processBarrelOnly", true, false, NONE, EVENTS_BARREL),
        process(TABLE_MAKER_TASK, "processBarrelOnlyWithCov", true, false, NONE, EVENTS_BARREL_COV),
        process(
            TABLE_MAKER_TASK,
            "processBarrelOnlyWithCent",
            true,
            false,
            CENTRALITY,
            EVENTS_BARREL,
        ),
        process(
            TABLE_MAKER_TASK,
            "processBarrelOnlyWithV0Bits",
            true,
            false,
            V0_BITS,
            EVENTS_BARREL,
        ),
        process(
            TABLE_MAKER_TASK,
            "processBarrelOnlyWithEventFilter",
            true,
            false,
            EVENT_FILTER,
            EVENTS_BARREL,
        ),
        process(
            TABLE_MAKER_TASK,
            "processBarrelOnlyWithQvector",
            true,
            false,
            QVECTOR,
            EVENTS_BARREL_QVECTOR,
        ),
        process(TABLE_MAKER_TASK, "processMuonOnly", false, true, NONE, EVENTS_MUON),
        process(TABLE_MAKER_TASK, "processMuonOnlyWithCov", false, true, NONE, EVENTS_MUON_COV),
        process(TABLE_MAKER_TASK, "processMuonOnlyWithCent", false, true, CENTRALITY, EVENTS_MUON),
        process(
            TABLE_MAKER_TASK,
            "processMuonOnlyWithQvector",
            false,
            true,
            QVECTOR,
            EVENTS_MUON_QVECTOR,
        ),
        process(
            TABLE_MAKER_TASK,
            "processMuonOnlyWithFilter",
            false,
            true,
            EVENT_FILTER,
            EVENTS_MUON,
        ),
    ],
    dependencies: &[
        requires(TABLE_MAKER_TASK, "processBarrelOnlyWithEventFilter", &[FILTER_PP]),
        requires(TABLE_MAKER_TASK, "processMuonOnlyWithFilter", &[FILTER_PP]),
        requires(FILTER_PP_TASK, "processFilterPP", &[(DQ_BARREL_SEL, "processSelection")]),
    ],
    resfile: "reducedAod",
    raw_input: true,
};

static TABLE_MAKER_MC: WorkflowDef = WorkflowDef {
    kind: WorkflowKind::TableMakerMC,
    executable: "o2-analysis-dq-table-maker-mc",
    main_task: TABLE_MAKER_MC_TASK,
    mandatory: None,
    common_deps: COMMON_DEPS,
    barrel_deps: BARREL_DEPS,
    muon_deps: MUON_DEPS,
    processes: &[
        process(TABLE_MAKER_MC_TASK, "processFull", true, true, NONE, MC_FULL),
        process(TABLE_MAKER_MC_TASK, "processFullWithCov", true, true, NONE, MC_FULL_COV),
        process(TABLE_MAKER_MC_TASK, "processBarrelOnly", true, false, NONE, MC_BARREL),
        process(TABLE_MAKER_MC_TASK, "processBarrelOnlyWithCov", true, false, NONE, MC_BARREL_COV),
        process(TABLE_MAKER_MC_TASK, "processMuonOnly", false, true, NONE, MC_MUON),
        process(TABLE_MAKER_MC_TASK, "processMuonOnlyWithCov", false, true, NONE, MC_MUON_COV),
    ],
    dependencies: &[],
    resfile: "reducedAod",
    raw_input: true,
};

static TABLE_READER: WorkflowDef = WorkflowDef {
    kind: WorkflowKind::TableReader,
    executable: "o2-analysis-dq-table-reader",
    main_task: EVENT_SEL,
    mandatory: Some(EVENT_SKIMMED),
    common_deps: NONE,
    barrel_deps: NONE,
    muon_deps: NONE,
    processes: &[
        reader(EVENT_SEL, SKIMMED, READ_EVENTS, NONE),
        reader(TRACK_SEL, SKIMMED, READ_BARREL, NONE),
        reader(MUON_SEL, SKIMMED, READ_MUON, NONE),
        reader(MIXING, "processBarrelSkimmed", READ_EVENTS, NONE),
        reader(MIXING, "processMuonSkimmed", READ_EVENTS, NONE),
        reader(MIXING, "processBarrelMuonSkimmed", READ_EVENTS, NONE),
        reader(PAIRING, "processDecayToEESkimmed", READ_BARREL, DILEPTONS),
        reader(PAIRING, "processDecayToMuMuSkimmed", READ_MUON, DILEPTONS),
        reader(PAIRING, "processDecayToMuMuVertexingSkimmed", READ_MUON_COV, DILEPTONS_VERTEXING),
        reader(PAIRING, "processDecayToEEVertexingSkimmed", READ_BARREL_COV, DILEPTONS),
        reader(PAIRING, "processVnDecayToEESkimmed", READ_EVENTS_QVECTOR, DILEPTONS_FLOW),
        reader(PAIRING, "processVnDecayToMuMuSkimmed", READ_EVENTS_QVECTOR, DILEPTONS_FLOW),
        reader(DILEPTON_HADRON, SKIMMED, READ_BARREL, NONE),
    ],
    dependencies: &[
        requires(TRACK_SEL, SKIMMED, &[EVENT_SKIMMED]),
        requires(MUON_SEL, SKIMMED, &[EVENT_SKIMMED]),
        requires(MIXING, "processBarrelSkimmed", &[TRACK_SKIMMED]),
        requires(MIXING, "processMuonSkimmed", &[MUON_SKIMMED]),
        requires(MIXING, "processBarrelMuonSkimmed", &[TRACK_SKIMMED, MUON_SKIMMED]),
        requires(PAIRING, "processDecayToEESkimmed", &[TRACK_SKIMMED]),
        requires(PAIRING, "processDecayToMuMuSkimmed", &[MUON_SKIMMED]),
        requires(PAIRING, "processDecayToMuMuVertexingSkimmed", &[MUON_SKIMMED]),
        requires(PAIRING, "processDecayToEEVertexingSkimmed", &[TRACK_SKIMMED]),
        requires(PAIRING, "processVnDecayToEESkimmed", &[TRACK_SKIMMED]),
        requires(PAIRING, "processVnDecayToMuMuSkimmed", &[MUON_SKIMMED]),
        requires(DILEPTON_HADRON, SKIMMED, &[TRACK_SKIMMED, (PAIRING, "processDecayToEESkimmed")]),
    ],
    resfile: "dileptonAOD",
    raw_input: false,
};

static EFFICIENCY: WorkflowDef = WorkflowDef {
    kind: WorkflowKind::Efficiency,
    executable: "o2-analysis-dq-efficiency",
    main_task: EVENT_SEL,
    mandatory: Some(EVENT_SKIMMED),
    common_deps: NONE,
    barrel_deps: NONE,
    muon_deps: NONE,
    processes: &[
        reader(EVENT_SEL, SKIMMED, READ_MC_EVENTS, NONE),
        reader(TRACK_SEL, SKIMMED, READ_MC_BARREL, NONE),
        reader(MUON_SEL, SKIMMED, READ_MC_MUON, NONE),
        reader(PAIRING, "processDecayToEESkimmed", READ_MC_BARREL, DILEPTONS),
        reader(PAIRING, "processDecayToMuMuSkimmed", READ_MC_MUON, DILEPTONS),
        reader(PAIRING, "processDecayToMuMuVertexingSkimmed", READ_MUON_COV, DILEPTONS_VERTEXING),
        reader(DILEPTON_TRACK, "processDimuonMuonSkimmed", READ_MC_MUON, NONE),
        reader(DILEPTON_TRACK, "processDielectronKaonSkimmed", READ_MC_BARREL, NONE),
    ],
    dependencies: &[
        requires(TRACK_SEL, SKIMMED, &[EVENT_SKIMMED]),
        requires(MUON_SEL, SKIMMED, &[EVENT_SKIMMED]),
        requires(PAIRING, "processDecayToEESkimmed", &[TRACK_SKIMMED]),
        requires(PAIRING, "processDecayToMuMuSkimmed", &[MUON_SKIMMED]),
        requires(PAIRING, "processDecayToMuMuVertexingSkimmed", &[MUON_SKIMMED]),
        requires(
            DILEPTON_TRACK,
            "processDimuonMuonSkimmed",
            &[(PAIRING, "processDecayToMuMuSkimmed")],
        ),
        requires(
            DILEPTON_TRACK,
            "processDielectronKaonSkimmed",
            &[(PAIRING, "processDecayToEESkimmed")],
        ),
    ],
    resfile: "dileptonAOD",
    raw_input: false,
};

static FILTER_PP_DEF: WorkflowDef = WorkflowDef {
    kind: WorkflowKind::FilterPP,
    executable: "o2-analysis-dq-filter-pp",
    main_task: FILTER_PP_TASK,
    mandatory: Some((DQ_EVENT_SEL, "processEventSelection")),
    common_deps: COMMON_DEPS,
    barrel_deps: BARREL_DEPS,
    muon_deps: MUON_DEPS,
    processes: &[
        process(DQ_EVENT_SEL, "processEventSelection", false, false, NONE, NONE),
        process(DQ_BARREL_SEL, "processSelection", true, false, NONE, NONE),
        process(DQ_BARREL_SEL, "processSelectionTiny", true, false, NONE, NONE),
        process(DQ_MUON_SEL, "processSelection", false, true, NONE, NONE),
        process(FILTER_PP_TASK, "processFilterPP", true, true, NONE, NONE),
        process(FILTER_PP_TASK, "processFilterPPTiny", true, false, NONE, NONE),
    ],
    dependencies: &[
        requires(
            FILTER_PP_TASK,
            "processFilterPP",
            &[
                (DQ_EVENT_SEL, "processEventSelection"),
                (DQ_BARREL_SEL, "processSelection"),
                (DQ_MUON_SEL, "processSelection"),
            ],
        ),
        requires(
            FILTER_PP_TASK,
            "processFilterPPTiny",
            &[
                (DQ_EVENT_SEL, "processEventSelection"),
                (DQ_BARREL_SEL, "processSelectionTiny"),
            ],
        ),
    ],
    resfile: "",
    raw_input: true,
};
