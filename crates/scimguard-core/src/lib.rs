//! # scimguard-core
//!
//! Domain types and extension-point contracts for SCIM claim interception
//! in front of directory-backed user stores.
//!
//! ## Crate Organization
//!
//! - [`claims`] - `ClaimSet` and the fixed SCIM claim URIs
//! - [`store`] - `UserStore` context trait (capability flags + claim lookup)
//! - [`listener`] - `UserOperationListener` callback contract
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```ignore
//! use scimguard_core::prelude::*;
//!
//! async fn provision(listener: &dyn UserOperationListener, store: &dyn UserStore) {
//!     let mut claims = ClaimSet::new()
//!         .with(ID_URI, "platform-generated")
//!         .with("urn:scim:schemas:core:1.0:userName", "jdoe");
//!
//!     if listener
//!         .before_user_add("jdoe", &mut claims, "default", store)
//!         .await
//!         .unwrap_or(false)
//!     {
//!         // proceed with the store write
//!     }
//! }
//! ```

pub mod claims;
pub mod error;
pub mod listener;
pub mod store;

/// Prelude module for convenient imports.
///
/// ```
/// use scimguard_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::claims::{
        ClaimSet, ID_URI, MANAGED_CLAIM_URIS, META_CREATED_URI, META_LAST_MODIFIED_URI,
        META_LOCATION_URI,
    };
    pub use crate::error::{PolicyError, PolicyResult};
    pub use crate::listener::UserOperationListener;
    pub use crate::store::UserStore;
}

// Re-export async_trait for listener and store implementors
pub use async_trait::async_trait;
