use crate::TaskGroup;

pub mod centrality;
pub mod common;
pub mod dalitz;
pub mod dq_flow;
pub mod efficiency;
pub mod event_selection;
pub mod filter_pp;
pub mod multiplicity;
pub mod pid;
pub mod table_maker;
pub mod table_reader;
pub mod track_propagation;
pub mod track_selection;
pub mod v0_selector;

// config keys shared by several task names
pub(crate) const TABLE_MAKER: &str = "table-maker";
pub(crate) const TABLE_MAKER_MC: &str = "table-maker-m-c";
pub(crate) const EVENT_SEL: &str = "analysis-event-selection";
pub(crate) const TRACK_SEL: &str = "analysis-track-selection";
pub(crate) const MUON_SEL: &str = "analysis-muon-selection";
pub(crate) const MIXING: &str = "analysis-event-mixing";
pub(crate) const PAIRING: &str = "analysis-same-event-pairing";
pub(crate) const DILEPTON_HADRON: &str = "analysis-dilepton-hadron";
pub(crate) const DILEPTON_TRACK: &str = "analysis-dilepton-track";
pub(crate) const QVECTOR: &str = "analysis-qvector";
pub(crate) const FILTER_PP: &str = "d-q-filter-p-p-task";
pub(crate) const DQ_EVENT_SEL: &str = "d-q-event-selection-task";
pub(crate) const DQ_BARREL_SEL: &str = "d-q-barrel-track-selection";
pub(crate) const DQ_MUON_SEL: &str = "d-q-muons-selection";

/// Every group, in help order.
pub static ALL: [&TaskGroup; 14] = [
    &common::GROUP,
    &event_selection::GROUP,
    &multiplicity::GROUP,
    &centrality::GROUP,
    &pid::GROUP,
    &track_selection::GROUP,
    &track_propagation::GROUP,
    &dq_flow::GROUP,
    &v0_selector::GROUP,
    &dalitz::GROUP,
    &table_maker::GROUP,
    &table_reader::GROUP,
    &efficiency::GROUP,
    &filter_pp::GROUP,
];
