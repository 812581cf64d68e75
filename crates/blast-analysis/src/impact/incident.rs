//! Incident report: labelled view of one compromise's blast radius.

use blast_core::errors::CatalogError;
use blast_core::types::NodeKind;

use super::blast_radius::blast_radius;
use super::types::{Compromise, ExposedNode, IncidentReport};
use super::weights::SensitivityWeights;
use crate::catalog::Catalog;
use crate::edges::EdgeSet;

/// Resolve the blast radius of `origin` and attach catalog labels and
/// sensitivities.
///
/// Fails with `NotFound` if the origin is not a catalog node of its kind.
pub fn incident_report(
    origin: &Compromise,
    edges: &EdgeSet,
    catalog: &Catalog,
    weights: &SensitivityWeights,
) -> Result<IncidentReport, CatalogError> {
    let origin_label = catalog
        .label_of(origin.origin_id.as_str(), origin.origin_kind)?
        .to_string();
    let exposed_kind = origin.origin_kind.counterpart();

    let mut exposed = Vec::new();
    let mut exposed_weight = 0u64;
    for id in blast_radius(Some(origin), edges) {
        let node = match exposed_kind {
            NodeKind::Identity => {
                let identity = catalog.identity(id.as_str())?;
                ExposedNode {
                    id,
                    label: identity.label.clone(),
                    kind: exposed_kind,
                    sensitivity: None,
                }
            }
            NodeKind::Resource => {
                let resource = catalog.resource(id.as_str())?;
                exposed_weight += u64::from(weights.weight(resource.sensitivity));
                ExposedNode {
                    id,
                    label: resource.label.clone(),
                    kind: exposed_kind,
                    sensitivity: Some(resource.sensitivity),
                }
            }
        };
        exposed.push(node);
    }

    tracing::debug!(
        origin = %origin.origin_id,
        exposed = exposed.len(),
        exposed_weight,
        "incident report built"
    );

    Ok(IncidentReport {
        origin: origin.clone(),
        origin_label,
        exposed,
        exposed_weight,
    })
}
