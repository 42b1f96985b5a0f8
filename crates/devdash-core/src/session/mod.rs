//! Session domain module.
//!
//! - `model`: the `Session` state (credential + profile, always paired)
//! - `token`: the shared token cell the HTTP gateway reads from
//! - `store`: the `SessionStore` owning login/signup/logout/bootstrap

mod model;
mod store;
mod token;

pub use model::Session;
pub use store::SessionStore;
pub use token::TokenCell;
