//! SCIM metadata claim interception.
//!
//! Active Directory generates the SCIM `id` and `meta.*` attributes itself.
//! This policy strips them from platform-side writes, re-reads the
//! directory-generated values after a user is created, and normalizes
//! timestamp claims on the way back out, keeping the directory
//! authoritative for all four managed URIs.

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use scimguard_core::claims::{
    ClaimSet, ID_URI, MANAGED_CLAIM_URIS, META_CREATED_URI, META_LAST_MODIFIED_URI,
};
use scimguard_core::error::PolicyResult;
use scimguard_core::listener::UserOperationListener;
use scimguard_core::store::UserStore;

use crate::config::PolicyConfig;
use crate::generalized_time;

/// Listener that intercepts the directory-owned SCIM metadata claims
/// around user-store operations.
///
/// Every callback is fail-open: when the policy is disabled or the store
/// is not a SCIM-enabled directory, the claim set passes through untouched
/// and the underlying operation proceeds. The policy never vetoes an
/// operation.
pub struct ClaimInterceptionPolicy {
    config: PolicyConfig,
}

impl ClaimInterceptionPolicy {
    /// Create a policy with the given configuration.
    #[must_use]
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    /// Access the policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Common guard: the policy only touches SCIM-enabled, directory-backed
    /// stores, and only while enabled. A failed SCIM-enablement read
    /// propagates.
    fn applies_to(&self, store: &dyn UserStore) -> PolicyResult<bool> {
        if !self.config.enabled {
            return Ok(false);
        }
        if !store.is_scim_enabled()? {
            return Ok(false);
        }
        Ok(store.is_directory_backed())
    }

    /// Remove every managed claim URI from the set. Absent keys are a
    /// no-op, so repeated application is idempotent.
    fn strip_managed_claims(claims: &mut ClaimSet) {
        for uri in MANAGED_CLAIM_URIS {
            if claims.remove(uri).is_some() {
                debug!(claim = uri, "Removed directory-owned claim");
            }
        }
    }

    /// Rewrite one timestamp claim in place. A parse failure keeps the
    /// original value and must not affect any other claim.
    fn normalize_timestamp(claims: &mut ClaimSet, uri: &str) {
        let Some(original) = claims.get(uri).map(str::to_string) else {
            return;
        };
        match generalized_time::to_profile_timestamp(&original) {
            Ok(formatted) => {
                debug!(
                    claim = uri,
                    before = %original,
                    after = %formatted,
                    "Normalized directory timestamp claim"
                );
                claims.set(uri, formatted);
            }
            Err(err) => {
                warn!(
                    claim = uri,
                    error = %err,
                    "Timestamp claim left unchanged after conversion failure"
                );
            }
        }
    }
}

impl Default for ClaimInterceptionPolicy {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

#[async_trait]
impl UserOperationListener for ClaimInterceptionPolicy {
    fn execution_order(&self) -> i32 {
        self.config.execution_order()
    }

    fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    #[instrument(skip(self, claims, store))]
    async fn before_user_add(
        &self,
        user_name: &str,
        claims: &mut ClaimSet,
        profile: &str,
        store: &dyn UserStore,
    ) -> PolicyResult<bool> {
        if !self.applies_to(store)? {
            return Ok(true);
        }
        Self::strip_managed_claims(claims);
        Ok(true)
    }

    #[instrument(skip(self, claims, store))]
    async fn after_user_add(
        &self,
        user_name: &str,
        claims: &mut ClaimSet,
        profile: &str,
        store: &dyn UserStore,
    ) -> PolicyResult<bool> {
        if !self.applies_to(store)? {
            return Ok(true);
        }

        // Read back what the directory generated during the add.
        let fetched = store
            .fetch_claim_values(
                user_name,
                &[ID_URI, META_CREATED_URI, META_LAST_MODIFIED_URI],
                profile,
            )
            .await?;

        if !fetched.is_empty() {
            info!(
                claim_count = fetched.len(),
                "Merged directory-generated claims after user add"
            );
        }
        claims.merge(fetched);
        Ok(true)
    }

    #[instrument(skip(self, claims, store))]
    async fn before_set_claim_values(
        &self,
        user_name: &str,
        claims: &mut ClaimSet,
        profile: &str,
        store: &dyn UserStore,
    ) -> PolicyResult<bool> {
        if !self.applies_to(store)? {
            return Ok(true);
        }
        Self::strip_managed_claims(claims);
        Ok(true)
    }

    #[instrument(skip(self, claims, store))]
    async fn after_get_claim_values(
        &self,
        user_name: &str,
        claims: &mut ClaimSet,
        profile: &str,
        store: &dyn UserStore,
    ) -> PolicyResult<bool> {
        if !self.applies_to(store)? {
            return Ok(true);
        }
        // Each conversion stands alone: a failure on one key leaves the
        // other untouched.
        Self::normalize_timestamp(claims, META_CREATED_URI);
        Self::normalize_timestamp(claims, META_LAST_MODIFIED_URI);
        Ok(true)
    }
}
