//! devdash-core: domain models and state containers for the devdash client.
//!
//! The client is a thin state-management layer over a remote HTTP API: a
//! session store (credential + profile, persisted across runs), one generic
//! remote-backed collection store instantiated per domain (resources,
//! goals), a read-only repository mirror, and route guards over session
//! state. Transport and disk concerns live behind the traits in
//! [`gateway`], implemented by `devdash-infrastructure`.

pub mod collection;
pub mod error;
pub mod gateway;
pub mod github;
pub mod goal;
pub mod guard;
pub mod resource;
pub mod session;
pub mod user;

// Re-export common error type
pub use error::{DevdashError, Result};
