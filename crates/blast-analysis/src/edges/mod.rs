//! Edge model: the flat and RBAC access graphs over one catalog.
//!
//! Both sets are built once at load and never recomputed. A mode toggle
//! selects one of them; it does not filter or merge.

pub mod types;

pub use types::{Edge, EdgeSet, GraphNode};

use blast_core::errors::{EdgeModelError, RbacViolation};
use blast_core::types::collections::FxHashSet;
use blast_core::types::AccessMode;

use crate::catalog::{Catalog, Identity, Resource};

/// Full identity × resource cross product, identity-major, catalog order.
pub fn build_flat_edges(identities: &[Identity], resources: &[Resource]) -> Vec<Edge> {
    identities
        .iter()
        .flat_map(|i| resources.iter().map(move |r| Edge::new(i.id.clone(), r.id.clone())))
        .collect()
}

/// The two access models of a catalog.
#[derive(Debug, Clone)]
pub struct EdgeModel {
    flat: EdgeSet,
    rbac: EdgeSet,
}

impl EdgeModel {
    /// Build the flat set and validate the curated RBAC grants against it.
    ///
    /// Every grant must name a catalog identity and a catalog resource, be a
    /// member of the flat set, and appear once.
    pub fn new(catalog: &Catalog, rbac_edges: Vec<Edge>) -> Result<Self, EdgeModelError> {
        let flat_edges = build_flat_edges(catalog.identities(), catalog.resources());
        let flat = EdgeSet::new(AccessMode::Flat, catalog, flat_edges);

        validate_rbac_edges(catalog, &flat, &rbac_edges)?;

        let rbac = EdgeSet::new(AccessMode::Rbac, catalog, rbac_edges);
        debug_assert!(rbac.is_subset_of(&flat));
        if rbac.len() == flat.len() {
            tracing::warn!("RBAC grants cover the full cross product; both modes score alike");
        }

        tracing::debug!(
            flat_edges = flat.len(),
            rbac_edges = rbac.len(),
            "edge model built"
        );

        Ok(Self { flat, rbac })
    }

    /// O(1) dispatch to the set for `mode`.
    pub fn select_edges(&self, mode: AccessMode) -> &EdgeSet {
        match mode {
            AccessMode::Flat => &self.flat,
            AccessMode::Rbac => &self.rbac,
        }
    }

    pub fn flat(&self) -> &EdgeSet {
        &self.flat
    }

    pub fn rbac(&self) -> &EdgeSet {
        &self.rbac
    }
}

fn validate_rbac_edges(
    catalog: &Catalog,
    flat: &EdgeSet,
    rbac_edges: &[Edge],
) -> Result<(), EdgeModelError> {
    let mut seen: FxHashSet<&Edge> = FxHashSet::default();
    for edge in rbac_edges {
        let violation = if catalog.find_identity(edge.from.as_str()).is_none() {
            Some(RbacViolation::UnknownIdentity)
        } else if catalog.find_resource(edge.to.as_str()).is_none() {
            Some(RbacViolation::UnknownResource)
        } else if !flat.contains(edge.from.as_str(), edge.to.as_str()) {
            Some(RbacViolation::NotInFlatSet)
        } else {
            None
        };
        if let Some(violation) = violation {
            return Err(EdgeModelError::InvalidRbacEdge {
                from: edge.from.to_string(),
                to: edge.to.to_string(),
                violation,
            });
        }
        if !seen.insert(edge) {
            return Err(EdgeModelError::DuplicateRbacEdge {
                from: edge.from.to_string(),
                to: edge.to.to_string(),
            });
        }
    }
    Ok(())
}
