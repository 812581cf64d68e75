//! Weighted risk score over an edge set.
//!
//! The score is the fraction of the flat-model ceiling an edge set reaches,
//! weighting each edge by the sensitivity of its target. The ceiling is the
//! same in every mode, so an RBAC score reads as "share of the worst case
//! still exposed".

use blast_core::constants::MAX_RISK_SCORE;

use super::types::{RiskReport, SensitivityCounts};
use super::weights::{RiskBands, SensitivityWeights};
use crate::catalog::Catalog;
use crate::edges::Edge;

/// Risk if every identity reached every resource.
pub fn max_possible_risk(catalog: &Catalog, weights: &SensitivityWeights) -> u64 {
    let per_identity: u64 = catalog
        .resources()
        .iter()
        .map(|r| u64::from(weights.weight(r.sensitivity)))
        .sum();
    catalog.identity_count() as u64 * per_identity
}

/// Σ target weight over `edges`. Targets missing from the catalog add 0.
pub fn actual_risk(edges: &[Edge], catalog: &Catalog, weights: &SensitivityWeights) -> u64 {
    edges
        .iter()
        .filter_map(|e| catalog.find_resource(e.to.as_str()))
        .map(|r| u64::from(weights.weight(r.sensitivity)))
        .sum()
}

/// Normalized 0-100 score, rounding half up.
pub fn score(edges: &[Edge], catalog: &Catalog, weights: &SensitivityWeights) -> u8 {
    normalize(
        actual_risk(edges, catalog, weights),
        max_possible_risk(catalog, weights),
    )
}

/// Score plus the figures it was derived from.
pub fn risk_report(
    edges: &[Edge],
    catalog: &Catalog,
    weights: &SensitivityWeights,
    bands: &RiskBands,
) -> RiskReport {
    let mut edges_by_sensitivity = SensitivityCounts::default();
    let mut actual = 0u64;
    for resource in edges.iter().filter_map(|e| catalog.find_resource(e.to.as_str())) {
        edges_by_sensitivity.add(resource.sensitivity);
        actual += u64::from(weights.weight(resource.sensitivity));
    }
    let max = max_possible_risk(catalog, weights);
    let score = normalize(actual, max);

    RiskReport {
        score,
        band: bands.classify(score),
        actual_risk: actual,
        max_possible_risk: max,
        edges_by_sensitivity,
    }
}

/// `round(actual / max × 100)` in integer arithmetic, capped at 100.
///
/// Catalog validation guarantees `max > 0`; a zero ceiling scores 0.
fn normalize(actual: u64, max: u64) -> u8 {
    debug_assert!(max > 0, "catalog validation guarantees a positive ceiling");
    if max == 0 {
        return 0;
    }
    let cap = u64::from(MAX_RISK_SCORE);
    let rounded = (actual * 2 * cap + max) / (2 * max);
    // Only a list repeating edges can pass the ceiling.
    rounded.min(cap) as u8
}
