//! # scimguard-policy
//!
//! Claim interception policy for Active Directory-backed user stores.
//!
//! The directory auto-generates the SCIM metadata attributes (`id`,
//! `meta.created`, `meta.lastModified`, `meta.location`). This crate
//! provides a [`UserOperationListener`] implementation that keeps the
//! platform from overwriting them:
//!
//! - before a user add or claim write: strip the managed claim URIs;
//! - after a user add: re-read the directory-generated values and merge
//!   them into the claim set;
//! - after a claim read: convert `meta.created` / `meta.lastModified`
//!   from generalized time to profile timestamps.
//!
//! ## Example
//!
//! ```ignore
//! use scimguard_policy::{ClaimInterceptionPolicy, PolicyConfig};
//!
//! let policy = ClaimInterceptionPolicy::new(PolicyConfig::default());
//! host_dispatcher.register(Box::new(policy));
//! ```
//!
//! ## Crate Organization
//!
//! - [`policy`] - The [`ClaimInterceptionPolicy`] listener
//! - [`config`] - [`PolicyConfig`] and the default execution order
//! - [`generalized_time`] - Directory timestamp conversion
//!
//! [`UserOperationListener`]: scimguard_core::listener::UserOperationListener

pub mod config;
pub mod generalized_time;
pub mod policy;

// Re-exports
pub use config::{PolicyConfig, DEFAULT_EXECUTION_ORDER};
pub use generalized_time::{to_profile_timestamp, GeneralizedTimeError};
pub use policy::ClaimInterceptionPolicy;
