/// Tables of the DQ reduced data model: (tree name, AOD origin description).
pub const REDUCED_TABLES: &[(&str, &str)] = &[
    ("ReducedEvents", "REDUCEDEVENT"),
    ("ReducedEventsExtended", "REEXTENDED"),
    ("ReducedEventsVtxCov", "REVTXCOV"),
    ("ReducedEventsQvector", "REQVECTOR"),
    ("ReducedMCEventLabels", "REMCCOLLBL"),
    ("ReducedMCEvents", "REMC"),
    ("ReducedTracks", "REDUCEDTRACK"),
    ("ReducedTracksBarrel", "RTBARREL"),
    ("ReducedTracksBarrelCov", "RTBARRELCOV"),
    ("ReducedTracksBarrelPID", "RTBARRELPID"),
    ("ReducedTracksBarrelLabels", "RTBARRELLABELS"),
    ("ReducedMCTracks", "RTMC"),
    ("ReducedMuons", "RTMUON"),
    ("ReducedMuonsExtra", "RTMUONEXTRA"),
    ("ReducedMuonsCov", "RTMUONCOV"),
    ("ReducedMuonsLabels", "RTMUONSLABELS"),
    ("Dileptons", "RTDILEPTON"),
    ("DileptonsExtra", "RTDILEPTONEXTRA"),
    ("DileptonFlow", "RTDILEPTONFLOW"),
    ("DimuonsAll", "RTDIMUONALL"),
    ("DQEventFilter", "EVENTFILTER"),
];
