//! Catalog record types: identities, resources, roles, sensitivity tiers.

use std::fmt;

use blast_core::types::{IdentityId, ResourceId};
use serde::{Deserialize, Serialize};

/// Organizational role of an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Executive,
    Consultant,
    ItAdmin,
    Hr,
}

impl Role {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Executive => "executive",
            Self::Consultant => "consultant",
            Self::ItAdmin => "it_admin",
            Self::Hr => "hr",
        }
    }

    pub fn all() -> &'static [Role] {
        &[Self::Executive, Self::Consultant, Self::ItAdmin, Self::Hr]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Data-sensitivity tier of a resource.
///
/// Variants are declared in rank order so `Ord` follows sensitivity:
/// `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sensitivity {
    Low,
    Medium,
    High,
}

impl Sensitivity {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Tiers from most to least sensitive.
    pub fn all() -> &'static [Sensitivity] {
        &[Self::High, Self::Medium, Self::Low]
    }
}

impl fmt::Display for Sensitivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A user account that may hold credentials to resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: IdentityId,
    pub label: String,
    pub role: Role,
}

impl Identity {
    pub fn new(id: impl Into<IdentityId>, label: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            role,
        }
    }
}

/// A system or data store an identity may reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub label: String,
    pub sensitivity: Sensitivity,
}

impl Resource {
    pub fn new(
        id: impl Into<ResourceId>,
        label: impl Into<String>,
        sensitivity: Sensitivity,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            sensitivity,
        }
    }
}
