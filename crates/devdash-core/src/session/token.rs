//! Shared credential cell.

use std::sync::{Arc, RwLock};

/// Shared in-memory handle to the current bearer credential.
///
/// The session store writes it, the HTTP gateway reads it before every
/// request. This replaces ad hoc reads of durable storage from the
/// transport layer: the store keeps the cell and the disk in lockstep, so
/// the gateway never observes a credential the session no longer holds.
#[derive(Debug, Clone, Default)]
pub struct TokenCell {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenCell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current credential, if any.
    pub fn get(&self) -> Option<String> {
        self.inner.read().expect("token cell poisoned").clone()
    }

    /// Replaces the current credential.
    pub fn set(&self, token: Option<String>) {
        *self.inner.write().expect("token cell poisoned") = token;
    }
}
