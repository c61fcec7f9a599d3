use std::fmt;

use anyhow::Result;

use crate::{Errors, TaskConfig};

/// `task`'s `process` function only works if every `(task, process)` in `requires` is enabled too.
#[derive(Debug, Clone, Copy)]
pub struct DependencyRule {
    pub task: &'static str,
    pub process: &'static str,
    pub requires: &'static [(&'static str, &'static str)],
}

/// An enabled process function whose dependency is explicitly disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsatisfiedDependency {
    pub task: String,
    pub process: String,
    pub dep_task: String,
    pub dep_process: String,
}

impl fmt::Display for UnsatisfiedDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} is enabled but its dependency {}:{} is false",
            self.task, self.process, self.dep_task, self.dep_process
        )
    }
}

impl std::error::Error for UnsatisfiedDependency {}

/// Checks a configuration against a workflow's dependency rules.
pub struct DependencyChecker<'a> {
    rules: &'a [DependencyRule],
}

impl<'a> DependencyChecker<'a> {
    pub fn new(rules: &'a [DependencyRule]) -> Self {
        Self { rules }
    }

    /// Offending pairs for the rules belonging to `task`.
    /// Functions or tasks missing from the configuration are not applicable and are skipped.
    pub fn unsatisfied_for(&self, config: &TaskConfig, task: &str) -> Vec<UnsatisfiedDependency> {
        let mut found = Vec::with_capacity(0);
        for rule in self.rules.iter().filter(|r| r.task == task) {
            self.check_rule(config, rule, &mut found);
        }
        found
    }

    /// Tasks that own at least one rule, in order of first appearance.
    fn tasks(&self) -> Vec<&'a str> {
        let mut tasks: Vec<&'a str> = Vec::with_capacity(self.rules.len());
        for rule in self.rules {
            if !tasks.contains(&rule.task) {
                tasks.push(rule.task);
            }
        }
        tasks
    }

    /// Offending pairs for every task, grouped by task.
    pub fn unsatisfied(&self, config: &TaskConfig) -> Vec<UnsatisfiedDependency> {
        self.tasks()
            .into_iter()
            .flat_map(|task| self.unsatisfied_for(config, task))
            .collect()
    }

    /// Log each offending pair once and fail if there were any.
    pub fn check(&self, config: &TaskConfig) -> Result<()> {
        let mut errors = Errors::default();
        for unsatisfied in self.unsatisfied(config) {
            log::error!("{unsatisfied}");
            errors.add(unsatisfied.into());
        }
        errors.print_recap("checking task dependencies")
    }

    fn check_rule(
        &self,
        config: &TaskConfig,
        rule: &DependencyRule,
        found: &mut Vec<UnsatisfiedDependency>,
    ) {
        if config.process_state(rule.task, rule.process) != Some(true) {
            return;
        }
        for (dep_task, dep_process) in rule.requires {
            if config.process_state(dep_task, dep_process) != Some(false) {
                continue;
            }
            let unsatisfied = UnsatisfiedDependency {
                task: rule.task.to_owned(),
                process: rule.process.to_owned(),
                dep_task: (*dep_task).to_owned(),
                dep_process: (*dep_process).to_owned(),
            };
            if !found.contains(&unsatisfied) {
                found.push(unsatisfied);
            }
        }
    }
}
