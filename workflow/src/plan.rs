use util::OrderedSet;

use crate::checks::apply_track_propagation;
use crate::{needs_track_propagation, ConverterManager, TaskConfig, WorkflowDef};

/// What a configured workflow will do: which executables run,
/// which tables it reads, and which it writes.
#[derive(Debug, Default)]
pub struct Plan {
    /// Executables joined into the pipeline; the workflow's own executable comes first.
    pub run_list: OrderedSet<String>,
    pub tables_to_produce: OrderedSet<String>,
    pub tables_to_read: OrderedSet<String>,
}

impl Plan {
    /// Collect executables and tables for every process function enabled in `config`.
    pub fn create(def: &WorkflowDef, config: &TaskConfig) -> Self {
        let mut plan = Self {
            run_list: OrderedSet::with_capacity(16),
            tables_to_produce: OrderedSet::with_capacity(16),
            tables_to_read: OrderedSet::with_capacity(16),
        };
        plan.run_list.insert(def.executable.to_owned());
        plan.run_list.extend(def.common_deps.iter().map(|s| s.to_string()));

        for p in def.processes {
            if !config.is_enabled(p.task, p.name) {
                continue;
            }
            log::debug!("{}:{} is enabled", p.task, p.name);
            if p.barrel {
                plan.run_list.extend(def.barrel_deps.iter().map(|s| s.to_string()));
            }
            if p.muon {
                plan.run_list.extend(def.muon_deps.iter().map(|s| s.to_string()));
            }
            plan.run_list.extend(p.deps.iter().map(|s| s.to_string()));
            plan.tables_to_produce.extend(p.tables.iter().map(|s| s.to_string()));
            plan.tables_to_read.extend(p.reads.iter().map(|s| s.to_string()));
        }
        plan
    }

    /// Add AOD converters for the legacy `trees` of a raw AOD, and swap in track
    /// propagation when the AOD holds unpropagated tracks or `force_propagation` is set.
    /// Workflows reading reduced AODs get neither. Returns how many converters were added.
    pub fn add_raw_helpers<S: AsRef<str>>(
        &mut self,
        def: &WorkflowDef,
        trees: &[S],
        force_propagation: bool,
    ) -> usize {
        if !def.raw_input {
            if force_propagation || !trees.is_empty() {
                log::warn!(
                    "{} reads reduced AODs; ignoring AOD trees and track propagation",
                    def.kind
                );
            }
            return 0;
        }
        let added = ConverterManager::default().apply(trees, &mut self.run_list);
        if (force_propagation || needs_track_propagation(trees))
            && !apply_track_propagation(&mut self.run_list)
        {
            log::warn!("no barrel tracks in {}; track propagation not added", def.kind);
        }
        added
    }
}
