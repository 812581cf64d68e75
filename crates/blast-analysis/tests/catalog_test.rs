//! Catalog construction, validation, and lookup.

use blast_analysis::catalog::{builtin, Catalog, Identity, Resource, Role, Sensitivity};
use blast_core::errors::{BlastErrorCode, CatalogError};
use blast_core::types::NodeKind;

fn one_identity() -> Vec<Identity> {
    vec![Identity::new("alice", "Alice", Role::Executive)]
}

fn one_resource() -> Vec<Resource> {
    vec![Resource::new("vault", "Vault", Sensitivity::High)]
}

// ═══════════════════════════════════════════════════════════════════════════
// Builtin population
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn builtin_catalog_has_six_identities_and_five_resources() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.identity_count(), 6);
    assert_eq!(catalog.resource_count(), 5);

    let ids: Vec<&str> = catalog.identities().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(
        ids,
        ["ceo", "consultant1", "consultant2", "itadmin1", "itadmin2", "hr1"]
    );
    let ids: Vec<&str> = catalog.resources().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["payroll", "hrdb", "aws", "crm", "codebase"]);
}

#[test]
fn builtin_sensitivities() {
    let catalog = Catalog::builtin().unwrap();
    let sens = |id: &str| catalog.resource(id).unwrap().sensitivity;
    assert_eq!(sens("payroll"), Sensitivity::High);
    assert_eq!(sens("hrdb"), Sensitivity::High);
    assert_eq!(sens("aws"), Sensitivity::Medium);
    assert_eq!(sens("crm"), Sensitivity::Medium);
    assert_eq!(sens("codebase"), Sensitivity::Low);
}

#[test]
fn builtin_roles() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.identity("ceo").unwrap().role, Role::Executive);
    assert_eq!(catalog.identity("consultant2").unwrap().role, Role::Consultant);
    assert_eq!(catalog.identity("itadmin1").unwrap().role, Role::ItAdmin);
    assert_eq!(catalog.identity("hr1").unwrap().role, Role::Hr);
}

#[test]
fn builtin_grants_are_twelve() {
    assert_eq!(builtin::rbac_edges().len(), 12);
}

// ═══════════════════════════════════════════════════════════════════════════
// Validation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn empty_identities_is_degenerate() {
    let err = Catalog::new(Vec::new(), one_resource()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::DegenerateCatalog {
            identities: 0,
            resources: 1
        }
    ));
    assert_eq!(err.error_code(), "DEGENERATE_CATALOG");
}

#[test]
fn empty_resources_is_degenerate() {
    let err = Catalog::new(one_identity(), Vec::new()).unwrap_err();
    assert!(matches!(err, CatalogError::DegenerateCatalog { resources: 0, .. }));
}

#[test]
fn duplicate_id_within_a_side_is_rejected() {
    let identities = vec![
        Identity::new("alice", "Alice", Role::Executive),
        Identity::new("alice", "Alice again", Role::Hr),
    ];
    let err = Catalog::new(identities, one_resource()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "alice"));
}

#[test]
fn duplicate_id_across_sides_is_rejected() {
    let resources = vec![Resource::new("alice", "Alice's laptop", Sensitivity::Low)];
    let err = Catalog::new(one_identity(), resources).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "alice"));
}

#[test]
fn minimal_catalog_is_valid() {
    let catalog = Catalog::new(one_identity(), one_resource()).unwrap();
    assert_eq!(catalog.identity_count(), 1);
    assert_eq!(catalog.resource_count(), 1);
}

// ═══════════════════════════════════════════════════════════════════════════
// Lookup
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn unknown_id_is_not_found() {
    let catalog = Catalog::builtin().unwrap();
    let err = catalog.identity("intern").unwrap_err();
    assert!(matches!(
        err,
        CatalogError::NotFound {
            kind: NodeKind::Identity,
            ..
        }
    ));
    assert_eq!(err.to_string(), "identity not found: intern");
}

#[test]
fn lookup_does_not_cross_sides() {
    let catalog = Catalog::builtin().unwrap();
    assert!(catalog.resource("ceo").is_err());
    assert!(catalog.identity("payroll").is_err());
    assert!(catalog.find_resource("ceo").is_none());
}

#[test]
fn labels_resolve_by_kind() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.label_of("hr1", NodeKind::Identity).unwrap(), "HR Manager");
    assert_eq!(catalog.label_of("aws", NodeKind::Resource).unwrap(), "AWS Cloud");
    assert!(catalog.label_of("aws", NodeKind::Identity).is_err());
}

#[test]
fn sensitivity_orders_low_to_high() {
    assert!(Sensitivity::Low < Sensitivity::Medium);
    assert!(Sensitivity::Medium < Sensitivity::High);
    assert_eq!(Sensitivity::High.name(), "High");
}
