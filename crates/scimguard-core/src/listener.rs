//! User-operation listener contract.
//!
//! The host dispatcher drives implementations of this trait around user
//! provisioning and claim access. Each callback takes the claim set by
//! mutable reference and returns a continuation signal: `true` means the
//! underlying store operation should proceed. Ordering among listeners,
//! session plumbing, and dispatch itself are the host's concern.

use async_trait::async_trait;

use crate::claims::ClaimSet;
use crate::error::PolicyResult;
use crate::store::UserStore;

/// A listener invoked around user-store operations.
///
/// Each invocation runs to completion before returning; listeners must not
/// hold shared mutable state across invocations.
#[async_trait]
pub trait UserOperationListener: Send + Sync {
    /// Priority used by the host dispatcher to order this listener among
    /// others.
    fn execution_order(&self) -> i32;

    /// Whether this listener should run at all.
    fn is_enabled(&self) -> bool;

    /// Called before a user is created in the store. May mutate `claims`.
    async fn before_user_add(
        &self,
        user_name: &str,
        claims: &mut ClaimSet,
        profile: &str,
        store: &dyn UserStore,
    ) -> PolicyResult<bool>;

    /// Called after a user has been created in the store.
    async fn after_user_add(
        &self,
        user_name: &str,
        claims: &mut ClaimSet,
        profile: &str,
        store: &dyn UserStore,
    ) -> PolicyResult<bool>;

    /// Called before claim values are written to the store.
    async fn before_set_claim_values(
        &self,
        user_name: &str,
        claims: &mut ClaimSet,
        profile: &str,
        store: &dyn UserStore,
    ) -> PolicyResult<bool>;

    /// Called after claim values have been read from the store. May rewrite
    /// values in `claims` before they reach the caller.
    async fn after_get_claim_values(
        &self,
        user_name: &str,
        claims: &mut ClaimSet,
        profile: &str,
        store: &dyn UserStore,
    ) -> PolicyResult<bool>;
}
