//! devdash-infrastructure: concrete transport, storage, and configuration.
//!
//! Implements the gateway traits of `devdash-core`: the reqwest HTTP
//! client, file-backed credential storage, config loading, and path
//! resolution.

pub mod config;
pub mod credentials;
pub mod http;
pub mod paths;

pub use config::AppConfig;
pub use credentials::FileCredentialStorage;
pub use http::{ApiClient, GoalEndpoint, ResourceEndpoint};
pub use paths::DevdashPaths;
