use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{Tag, TaskOrder};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file holding lists, tasks and checklist items.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

/// Defaults applied by the screens.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Defaults {
    /// Ordering inside the doing and done partitions.
    #[serde(default)]
    pub task_order: TaskOrder,
    /// Tag given to new tasks when none is chosen.
    #[serde(default)]
    pub default_tag: Tag,
}

fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("todometer")
        .join("todometer.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}
