//! League Configuration
//!
//! The closed vocabulary of ranking leagues a monster may hold a score
//! under. Modeled as an enum rather than free-form strings so unknown
//! league keys cannot exist past the parsing boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A ranking league.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum League {
    Great,
    Ultra,
    Master,
}

impl League {
    /// Every league, in the order the browsing UI presents them.
    pub const ALL: [League; 3] = [League::Great, League::Ultra, League::Master];

    /// Lowercase tag as used in catalog data and query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            League::Great => "great",
            League::Ultra => "ultra",
            League::Master => "master",
        }
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a league tag is outside the known vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown league tag: {0}")]
pub struct ParseLeagueError(pub String);

impl FromStr for League {
    type Err = ParseLeagueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "great" => Ok(League::Great),
            "ultra" => Ok(League::Ultra),
            "master" => Ok(League::Master),
            other => Err(ParseLeagueError(other.to_string())),
        }
    }
}
