use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Color tag attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    #[default]
    Gray,
    Indigo,
    Blue,
    Teal,
    Green,
    Yellow,
    Amber,
    Orange,
    Red,
    Pink,
    Purple,
    Brown,
}

impl Tag {
    /// All variants in display order.
    pub fn all() -> &'static [Tag] {
        &[
            Self::Gray,
            Self::Indigo,
            Self::Blue,
            Self::Teal,
            Self::Green,
            Self::Yellow,
            Self::Amber,
            Self::Orange,
            Self::Red,
            Self::Pink,
            Self::Purple,
            Self::Brown,
        ]
    }

    /// Stable key used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Indigo => "indigo",
            Self::Blue => "blue",
            Self::Teal => "teal",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Amber => "amber",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Brown => "brown",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|tag| tag.as_str() == key)
            .ok_or_else(|| format!("unknown tag '{}'", s))
    }
}
