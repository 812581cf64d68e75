//! Catalog: the fixed population of identities and resources.
//!
//! Both sequences keep their construction order for the lifetime of the
//! catalog. Lookups go through id-indexed maps built once in `Catalog::new`.

pub mod builtin;
pub mod types;

pub use types::{Identity, Resource, Role, Sensitivity};

use blast_core::errors::CatalogError;
use blast_core::types::collections::{FxHashMap, FxHashSet};
use blast_core::types::{IdentityId, NodeKind, ResourceId};

/// Ordered identities and resources with O(1) lookup by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    identities: Vec<Identity>,
    resources: Vec<Resource>,
    identity_index: FxHashMap<IdentityId, usize>,
    resource_index: FxHashMap<ResourceId, usize>,
}

impl Catalog {
    /// Build a catalog, validating it can be scored.
    ///
    /// Fails with `DegenerateCatalog` when either side is empty and with
    /// `DuplicateId` when an id appears twice anywhere in the catalog.
    pub fn new(identities: Vec<Identity>, resources: Vec<Resource>) -> Result<Self, CatalogError> {
        if identities.is_empty() || resources.is_empty() {
            return Err(CatalogError::DegenerateCatalog {
                identities: identities.len(),
                resources: resources.len(),
            });
        }

        // Ids are unique across both sides so a bare id names one node.
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let all_ids = identities
            .iter()
            .map(|i| i.id.as_str())
            .chain(resources.iter().map(|r| r.id.as_str()));
        for id in all_ids {
            if !seen.insert(id) {
                return Err(CatalogError::DuplicateId { id: id.to_string() });
            }
        }

        let identity_index = identities
            .iter()
            .enumerate()
            .map(|(pos, i)| (i.id.clone(), pos))
            .collect();
        let resource_index = resources
            .iter()
            .enumerate()
            .map(|(pos, r)| (r.id.clone(), pos))
            .collect();

        Ok(Self {
            identities,
            resources,
            identity_index,
            resource_index,
        })
    }

    /// The demo catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        builtin::catalog()
    }

    pub fn identities(&self) -> &[Identity] {
        &self.identities
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn identity_count(&self) -> usize {
        self.identities.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    /// Look up an identity. `NotFound` signals a programming error.
    pub fn identity(&self, id: &str) -> Result<&Identity, CatalogError> {
        self.find_identity(id).ok_or_else(|| CatalogError::NotFound {
            kind: NodeKind::Identity,
            id: id.to_string(),
        })
    }

    /// Look up a resource. `NotFound` signals a programming error.
    pub fn resource(&self, id: &str) -> Result<&Resource, CatalogError> {
        self.find_resource(id).ok_or_else(|| CatalogError::NotFound {
            kind: NodeKind::Resource,
            id: id.to_string(),
        })
    }

    pub fn find_identity(&self, id: &str) -> Option<&Identity> {
        self.identity_index.get(id).map(|&pos| &self.identities[pos])
    }

    pub fn find_resource(&self, id: &str) -> Option<&Resource> {
        self.resource_index.get(id).map(|&pos| &self.resources[pos])
    }

    /// Position of an identity in catalog order.
    pub fn identity_position(&self, id: &str) -> Option<usize> {
        self.identity_index.get(id).copied()
    }

    /// Position of a resource in catalog order.
    pub fn resource_position(&self, id: &str) -> Option<usize> {
        self.resource_index.get(id).copied()
    }

    /// Which side of the graph an id belongs to, if any.
    pub fn kind_of(&self, id: &str) -> Option<NodeKind> {
        if self.identity_index.contains_key(id) {
            Some(NodeKind::Identity)
        } else if self.resource_index.contains_key(id) {
            Some(NodeKind::Resource)
        } else {
            None
        }
    }

    /// Display label of a node of the given kind.
    pub fn label_of(&self, id: &str, kind: NodeKind) -> Result<&str, CatalogError> {
        match kind {
            NodeKind::Identity => self.identity(id).map(|i| i.label.as_str()),
            NodeKind::Resource => self.resource(id).map(|r| r.label.as_str()),
        }
    }
}
