//! User-store context consumed by listener callbacks.

use async_trait::async_trait;

use crate::claims::ClaimSet;
use crate::error::PolicyResult;

/// Opaque handle to the user store a callback is operating against.
///
/// Capability flags are set explicitly by whoever constructs the context;
/// the policy never inspects the store's concrete type. Any retry or
/// timeout behavior for the claim lookup belongs to the directory client
/// behind the implementation, not to callers of this trait.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether the store's canonical data lives in an external directory
    /// service that auto-generates the SCIM metadata attributes.
    fn is_directory_backed(&self) -> bool;

    /// Whether SCIM claim handling is enabled for this store.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::StoreAccess`] when the flag cannot be read.
    /// Callers must propagate the failure rather than guess a value.
    ///
    /// [`PolicyError::StoreAccess`]: crate::error::PolicyError::StoreAccess
    fn is_scim_enabled(&self) -> PolicyResult<bool>;

    /// Fetch the current values of the given claim URIs for a user profile.
    ///
    /// URIs the user has no value for are simply absent from the returned
    /// set.
    async fn fetch_claim_values(
        &self,
        user_name: &str,
        claim_uris: &[&str],
        profile: &str,
    ) -> PolicyResult<ClaimSet>;
}
