//! Shared value types: collections, typed ids, access mode and node kind.

pub mod access;
pub mod collections;
pub mod identifiers;

pub use access::{AccessMode, NodeKind};
pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::{IdentityId, NodeId, ResourceId};
