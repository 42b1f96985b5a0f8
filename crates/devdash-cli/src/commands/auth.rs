//! Session commands: signup, login, logout, whoami.

use crate::context::AppContext;
use anyhow::{Result, bail};

pub async fn signup(ctx: &mut AppContext, name: &str, email: &str, password: &str) -> Result<()> {
    ctx.ensure_anonymous()?;
    if ctx.session.signup(name, email, password).await.is_err() {
        bail!(error_banner(ctx));
    }
    announce(ctx, "Account created");
    Ok(())
}

pub async fn login(ctx: &mut AppContext, email: &str, password: &str) -> Result<()> {
    ctx.ensure_anonymous()?;
    if ctx.session.login(email, password).await.is_err() {
        bail!(error_banner(ctx));
    }
    announce(ctx, "Logged in");
    Ok(())
}

pub fn logout(ctx: &mut AppContext) {
    ctx.session.logout();
    println!("Logged out.");
}

pub fn whoami(ctx: &AppContext) {
    match ctx.session.session().user() {
        Some(user) => println!("{} <{}> (id {})", user.name, user.email, user.id),
        None => println!("Not logged in."),
    }
}

/// The session store's user-facing message, shown verbatim (the inline
/// banner of the original forms).
fn error_banner(ctx: &AppContext) -> String {
    ctx.session
        .error()
        .unwrap_or("An unexpected error occurred")
        .to_string()
}

fn announce(ctx: &AppContext, verb: &str) {
    if let Some(user) = ctx.session.session().user() {
        println!("{} as {} <{}>.", verb, user.name, user.email);
    }
}
