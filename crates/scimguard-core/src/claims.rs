//! Claim set type and the fixed SCIM claim URIs.
//!
//! Active Directory auto-generates the attributes behind the URIs named
//! here, so platform-side writes to them are unsafe. The interception
//! policy removes or rewrites exactly this set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// SCIM `id` claim URI.
pub const ID_URI: &str = "urn:scim:schemas:core:1.0:id";

/// SCIM `meta.created` claim URI.
pub const META_CREATED_URI: &str = "urn:scim:schemas:core:1.0:meta.created";

/// SCIM `meta.lastModified` claim URI.
pub const META_LAST_MODIFIED_URI: &str = "urn:scim:schemas:core:1.0:meta.lastModified";

/// SCIM `meta.location` claim URI.
pub const META_LOCATION_URI: &str = "urn:scim:schemas:core:1.0:meta.location";

/// All claim URIs owned by the directory and managed by the policy.
pub const MANAGED_CLAIM_URIS: [&str; 4] = [
    ID_URI,
    META_CREATED_URI,
    META_LAST_MODIFIED_URI,
    META_LOCATION_URI,
];

/// A set of user claims keyed by claim URI.
///
/// Keys are unique, order is irrelevant. Listener callbacks mutate claim
/// sets in place; every value is scoped to a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimSet {
    /// Map of claim URI to claim value.
    #[serde(flatten)]
    claims: HashMap<String, String>,
}

impl ClaimSet {
    /// Create a new empty claim set.
    pub fn new() -> Self {
        Self {
            claims: HashMap::new(),
        }
    }

    /// Set a claim value, replacing any existing value for the URI.
    pub fn set(&mut self, uri: impl Into<String>, value: impl Into<String>) {
        self.claims.insert(uri.into(), value.into());
    }

    /// Set a claim using builder pattern.
    #[must_use]
    pub fn with(mut self, uri: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(uri, value);
        self
    }

    /// Get a claim value.
    pub fn get(&self, uri: &str) -> Option<&str> {
        self.claims.get(uri).map(String::as_str)
    }

    /// Check if a claim is present.
    pub fn has(&self, uri: &str) -> bool {
        self.claims.contains_key(uri)
    }

    /// Remove a claim, returning its value if it was present.
    ///
    /// Removing an absent URI is a no-op.
    pub fn remove(&mut self, uri: &str) -> Option<String> {
        self.claims.remove(uri)
    }

    /// Merge another claim set into this one, overwriting existing entries.
    pub fn merge(&mut self, other: ClaimSet) {
        self.claims.extend(other.claims);
    }

    /// Get all claim URIs.
    pub fn uris(&self) -> impl Iterator<Item = &str> {
        self.claims.keys().map(String::as_str)
    }

    /// Get the number of claims.
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Iterate over all claims.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.claims.iter()
    }

    /// Convert to a plain `HashMap`.
    pub fn into_map(self) -> HashMap<String, String> {
        self.claims
    }
}

impl FromIterator<(String, String)> for ClaimSet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            claims: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut claims = ClaimSet::new();
        claims.set(ID_URI, "a1b2");
        assert_eq!(claims.get(ID_URI), Some("a1b2"));
        assert!(claims.has(ID_URI));
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut claims = ClaimSet::new().with("other.claim", "y");
        assert_eq!(claims.remove(META_LOCATION_URI), None);
        assert_eq!(claims.get("other.claim"), Some("y"));
    }

    #[test]
    fn test_merge_overwrites_existing() {
        let mut claims = ClaimSet::new()
            .with(ID_URI, "stale")
            .with("other.claim", "y");
        let fetched = ClaimSet::new().with(ID_URI, "fresh");

        claims.merge(fetched);

        assert_eq!(claims.get(ID_URI), Some("fresh"));
        assert_eq!(claims.get("other.claim"), Some("y"));
        assert_eq!(claims.len(), 2);
    }

    #[test]
    fn test_managed_uris_are_exact() {
        assert_eq!(ID_URI, "urn:scim:schemas:core:1.0:id");
        assert_eq!(META_CREATED_URI, "urn:scim:schemas:core:1.0:meta.created");
        assert_eq!(
            META_LAST_MODIFIED_URI,
            "urn:scim:schemas:core:1.0:meta.lastModified"
        );
        assert_eq!(META_LOCATION_URI, "urn:scim:schemas:core:1.0:meta.location");
        assert_eq!(MANAGED_CLAIM_URIS.len(), 4);
    }

    #[test]
    fn test_serde_flatten_roundtrip() {
        let claims = ClaimSet::new()
            .with(ID_URI, "a1b2")
            .with("other.claim", "y");

        let json = serde_json::to_string(&claims).unwrap();
        let parsed: ClaimSet = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, claims);
    }

    #[test]
    fn test_from_iterator() {
        let claims: ClaimSet = vec![
            (ID_URI.to_string(), "x".to_string()),
            ("other.claim".to_string(), "y".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(claims.len(), 2);
        assert_eq!(claims.get(ID_URI), Some("x"));
    }
}
