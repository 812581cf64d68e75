//! String-backed ID types for catalog nodes.
//!
//! Each ID type wraps its own `String` to prevent cross-type confusion.
//! An `IdentityId` cannot be passed where a `ResourceId` is expected.
//! `NodeId` is the kind-agnostic form used for compromise origins and
//! blast-radius results.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID, returning the inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_id!(
    /// Identity (user account) identifier.
    IdentityId
);

define_id!(
    /// Resource identifier.
    ResourceId
);

define_id!(
    /// Kind-agnostic node identifier.
    NodeId
);

impl From<IdentityId> for NodeId {
    fn from(id: IdentityId) -> Self {
        Self(id.0)
    }
}

impl From<ResourceId> for NodeId {
    fn from(id: ResourceId) -> Self {
        Self(id.0)
    }
}

impl From<&IdentityId> for NodeId {
    fn from(id: &IdentityId) -> Self {
        Self(id.0.clone())
    }
}

impl From<&ResourceId> for NodeId {
    fn from(id: &ResourceId) -> Self {
        Self(id.0.clone())
    }
}
