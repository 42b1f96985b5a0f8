//! Route guards.
//!
//! Pure functions of the current session, evaluated fresh at every decision
//! point. The view layer interprets a redirect decision however its
//! presentation model requires (the CLI prints a hint and exits non-zero).

use crate::session::Session;

/// The outcome of gating a view on session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Render the guarded view.
    Allow,
    /// Not logged in; send the user to the login entry point.
    RedirectToLogin,
    /// Already logged in; send the user to the authenticated landing view.
    RedirectToDashboard,
}

/// Gate for views that require an authenticated session.
pub fn require_session(session: &Session) -> GateDecision {
    if session.is_authenticated() {
        GateDecision::Allow
    } else {
        GateDecision::RedirectToLogin
    }
}

/// Gate for views that require no session (login, signup).
pub fn require_anonymous(session: &Session) -> GateDecision {
    if session.is_authenticated() {
        GateDecision::RedirectToDashboard
    } else {
        GateDecision::Allow
    }
}
