//! The demo population: six identities, five resources, and the curated
//! per-role RBAC grants.

use blast_core::errors::CatalogError;

use super::types::{Identity, Resource, Role, Sensitivity};
use super::Catalog;
use crate::edges::Edge;

/// `(id, label, role)` in display order.
pub const IDENTITIES: &[(&str, &str, Role)] = &[
    ("ceo", "CEO", Role::Executive),
    ("consultant1", "Consultant A", Role::Consultant),
    ("consultant2", "Consultant B", Role::Consultant),
    ("itadmin1", "IT Admin 1", Role::ItAdmin),
    ("itadmin2", "IT Admin 2", Role::ItAdmin),
    ("hr1", "HR Manager", Role::Hr),
];

/// `(id, label, sensitivity)` in display order.
pub const RESOURCES: &[(&str, &str, Sensitivity)] = &[
    ("payroll", "Payroll Server", Sensitivity::High),
    ("hrdb", "HR Database", Sensitivity::High),
    ("aws", "AWS Cloud", Sensitivity::Medium),
    ("crm", "CRM System", Sensitivity::Medium),
    ("codebase", "Codebase", Sensitivity::Low),
];

/// Hand-assigned `(identity, resource)` grants for the RBAC model.
pub const RBAC_GRANTS: &[(&str, &str)] = &[
    // Executive: business systems, no source code.
    ("ceo", "payroll"),
    ("ceo", "hrdb"),
    ("ceo", "aws"),
    ("ceo", "crm"),
    // Consultants: CRM only.
    ("consultant1", "crm"),
    ("consultant2", "crm"),
    // IT admins: infrastructure and code.
    ("itadmin1", "aws"),
    ("itadmin1", "codebase"),
    ("itadmin2", "aws"),
    ("itadmin2", "codebase"),
    // HR: people data.
    ("hr1", "hrdb"),
    ("hr1", "payroll"),
];

pub fn identities() -> Vec<Identity> {
    IDENTITIES
        .iter()
        .map(|&(id, label, role)| Identity::new(id, label, role))
        .collect()
}

pub fn resources() -> Vec<Resource> {
    RESOURCES
        .iter()
        .map(|&(id, label, sensitivity)| Resource::new(id, label, sensitivity))
        .collect()
}

pub fn rbac_edges() -> Vec<Edge> {
    RBAC_GRANTS
        .iter()
        .map(|&(from, to)| Edge::new(from, to))
        .collect()
}

pub fn catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(identities(), resources())
}
