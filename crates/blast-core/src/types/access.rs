//! Access model selector and node kind.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which edge set is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// Every identity reaches every resource.
    #[default]
    Flat,
    /// Each identity reaches only its curated role grants.
    Rbac,
}

impl AccessMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Rbac => "rbac",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Flat => Self::Rbac,
            Self::Rbac => Self::Flat,
        }
    }

    pub fn all() -> &'static [AccessMode] {
        &[Self::Flat, Self::Rbac]
    }
}

impl fmt::Display for AccessMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccessMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "rbac" => Ok(Self::Rbac),
            other => Err(format!("unknown access mode '{other}' (expected 'flat' or 'rbac')")),
        }
    }
}

/// Side of the bipartite access graph a node lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Identity,
    Resource,
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Resource => "resource",
        }
    }

    /// The kind found on the other end of an edge.
    pub fn counterpart(self) -> Self {
        match self {
            Self::Identity => Self::Resource,
            Self::Resource => Self::Identity,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
