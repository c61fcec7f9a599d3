use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::Error;

/// Value of an enabled process function.
pub const TRUE: &str = "true";
/// Value of a disabled process function.
pub const FALSE: &str = "false";

/// Per-task configuration: task name -> key -> value, in file order.
///
/// Process functions are keys starting with `process` whose value is `"true"` or `"false"`.
/// Anything not present in the file counts as not configured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskConfig {
    tasks: Map<String, Value>,
}

impl TaskConfig {
    /// Read a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("while reading configuration file {path:?}"))?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("while parsing configuration file {path:?}"))?;
        match value {
            Value::Object(tasks) => Ok(Self { tasks }),
            _ => Err(Error::ConfigNotObject(path.display().to_string()).into()),
        }
    }

    pub fn from_map(tasks: Map<String, Value>) -> Self {
        Self { tasks }
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.tasks)?)
    }

    pub fn has_task(&self, task: &str) -> bool {
        self.tasks.get(task).map_or(false, Value::is_object)
    }

    pub fn get(&self, task: &str, key: &str) -> Option<&Value> {
        self.tasks.get(task)?.as_object()?.get(key)
    }

    /// Set `key` of an existing task. Returns false (and changes nothing)
    /// if the task isn't in the configuration.
    pub fn set(&mut self, task: &str, key: &str, value: impl Into<Value>) -> bool {
        match self.tasks.get_mut(task).and_then(Value::as_object_mut) {
            Some(entries) => {
                entries.insert(key.to_owned(), value.into());
                true
            }
            None => false,
        }
    }

    /// Set `key` of `task`, creating the task if needed.
    pub fn insert(&mut self, task: &str, key: &str, value: impl Into<Value>) {
        let entry = self
            .tasks
            .entry(task.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(entries) = entry {
            entries.insert(key.to_owned(), value.into());
        }
    }

    /// `Some(true)`/`Some(false)` for a configured process function, `None` if absent
    /// or not a boolean-like value.
    pub fn process_state(&self, task: &str, func: &str) -> Option<bool> {
        match self.get(task, func)? {
            Value::String(s) if s == TRUE => Some(true),
            Value::String(s) if s == FALSE => Some(false),
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_enabled(&self, task: &str, func: &str) -> bool {
        self.process_state(task, func) == Some(true)
    }

    pub fn set_process(&mut self, task: &str, func: &str, on: bool) -> bool {
        self.set(task, func, if on { TRUE } else { FALSE })
    }

    /// Keys of `task` beginning with `prefix`, in file order.
    pub fn keys_with_prefix(&self, task: &str, prefix: &str) -> Vec<String> {
        self.tasks
            .get(task)
            .and_then(Value::as_object)
            .map(|entries| {
                entries
                    .keys()
                    .filter(|k| k.starts_with(prefix))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
