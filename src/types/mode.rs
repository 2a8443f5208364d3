//! Chain mode selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ChainError;

/// Which template set the chain factory builds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ChainMode {
    /// Three independent chains: explain, split, question
    #[default]
    ZeroShot,
    /// One chain seeded with worked exemplars
    FewShot,
}

impl ChainMode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ZeroShot => "zero-shot",
            Self::FewShot => "few-shot",
        }
    }

    /// Number of chains the factory returns for this mode
    pub const fn chain_count(&self) -> usize {
        match self {
            Self::ZeroShot => 3,
            Self::FewShot => 1,
        }
    }
}

impl fmt::Display for ChainMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainMode {
    type Err = ChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero-shot" => Ok(Self::ZeroShot),
            "few-shot" => Ok(Self::FewShot),
            other => Err(ChainError::InvalidMode(other.to_string())),
        }
    }
}

impl TryFrom<&str> for ChainMode {
    type Error = ChainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
