//! The eight resize handles drawn around a selected element.

use ps_core::ResizeDirection;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A resize handle, named by compass direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        Self::N,
        Self::S,
        Self::E,
        Self::W,
        Self::NE,
        Self::NW,
        Self::SE,
        Self::SW,
    ];

    /// Edges this handle drags.
    pub fn direction(self) -> ResizeDirection {
        let has = |c: char| self.as_str().contains(c);
        ResizeDirection {
            has_west: has('w'),
            has_east: has('e'),
            has_north: has('n'),
            has_south: has('s'),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }
}

impl FromStr for ResizeHandle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|h| h.as_str() == lower)
            .ok_or_else(|| format!("unknown resize handle \"{s}\""))
    }
}
