//! Scoring and blast-radius properties over random catalogs and grant tables.

use blast_analysis::catalog::{Catalog, Identity, Resource, Role, Sensitivity};
use blast_analysis::edges::{build_flat_edges, Edge, EdgeModel};
use blast_analysis::impact::{self, blast_radius, Compromise, SensitivityWeights};
use blast_core::types::NodeKind;
use proptest::prelude::*;

const MAX_SIDE: usize = 6;

fn arb_sensitivity() -> impl Strategy<Value = Sensitivity> {
    prop_oneof![
        Just(Sensitivity::Low),
        Just(Sensitivity::Medium),
        Just(Sensitivity::High),
    ]
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    (
        1..=MAX_SIDE,
        prop::collection::vec(arb_sensitivity(), 1..=MAX_SIDE),
    )
        .prop_map(|(identity_count, sensitivities)| {
            let identities = (0..identity_count)
                .map(|i| Identity::new(format!("u{i}"), format!("User {i}"), Role::Consultant))
                .collect();
            let resources = sensitivities
                .into_iter()
                .enumerate()
                .map(|(i, s)| Resource::new(format!("r{i}"), format!("Resource {i}"), s))
                .collect();
            Catalog::new(identities, resources).unwrap()
        })
}

fn arb_mask() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(any::<bool>(), MAX_SIDE * MAX_SIDE)
}

/// Flat edges kept where `mask` is set.
fn grants(catalog: &Catalog, mask: &[bool]) -> Vec<Edge> {
    build_flat_edges(catalog.identities(), catalog.resources())
        .into_iter()
        .zip(mask)
        .filter(|&(_, &keep)| keep)
        .map(|(edge, _)| edge)
        .collect()
}

proptest! {
    #[test]
    fn flat_always_scores_100(catalog in arb_catalog()) {
        let flat = build_flat_edges(catalog.identities(), catalog.resources());
        prop_assert_eq!(impact::score(&flat, &catalog, &SensitivityWeights::default()), 100);
    }

    #[test]
    fn empty_always_scores_0(catalog in arb_catalog()) {
        prop_assert_eq!(impact::score(&[], &catalog, &SensitivityWeights::default()), 0);
    }

    #[test]
    fn score_is_monotone_in_the_edge_set(
        catalog in arb_catalog(),
        small in arb_mask(),
        extra in arb_mask(),
    ) {
        let union: Vec<bool> = small.iter().zip(&extra).map(|(a, b)| *a || *b).collect();
        let weights = SensitivityWeights::default();
        let e1 = grants(&catalog, &small);
        let e2 = grants(&catalog, &union);
        prop_assert!(impact::score(&e1, &catalog, &weights) <= impact::score(&e2, &catalog, &weights));
    }

    #[test]
    fn any_subset_grant_table_is_valid(catalog in arb_catalog(), mask in arb_mask()) {
        let model = EdgeModel::new(&catalog, grants(&catalog, &mask)).unwrap();
        prop_assert!(model.rbac().is_subset_of(model.flat()));
    }

    #[test]
    fn identity_radius_is_catalog_ordered_and_unique(
        catalog in arb_catalog(),
        mask in arb_mask(),
    ) {
        let model = EdgeModel::new(&catalog, grants(&catalog, &mask)).unwrap();
        for identity in catalog.identities() {
            let origin = Compromise::identity(&identity.id);
            let radius = blast_radius(Some(&origin), model.rbac());
            let positions: Vec<usize> = radius
                .iter()
                .map(|id| catalog.resource_position(id.as_str()).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            for id in &radius {
                prop_assert!(model.rbac().contains(identity.id.as_str(), id.as_str()));
            }
        }
    }

    #[test]
    fn resource_radius_is_inverse_of_identity_radius(
        catalog in arb_catalog(),
        mask in arb_mask(),
    ) {
        let model = EdgeModel::new(&catalog, grants(&catalog, &mask)).unwrap();
        for resource in catalog.resources() {
            let origin = Compromise::resource(&resource.id);
            let holders = blast_radius(Some(&origin), model.rbac());
            let expected: Vec<&str> = catalog
                .identities()
                .iter()
                .filter(|i| model.rbac().contains(i.id.as_str(), resource.id.as_str()))
                .map(|i| i.id.as_str())
                .collect();
            let actual: Vec<&str> = holders.iter().map(|id| id.as_str()).collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn kind_mismatch_never_reaches_anything(catalog in arb_catalog()) {
        let model = EdgeModel::new(&catalog, Vec::new()).unwrap();
        for identity in catalog.identities() {
            let origin = Compromise::new(&identity.id, NodeKind::Resource);
            prop_assert!(blast_radius(Some(&origin), model.flat()).is_empty());
        }
    }
}
