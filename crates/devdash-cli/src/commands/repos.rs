//! Repository mirror command.
//!
//! The mirror is supplementary: a failed fetch is logged and rendered as an
//! empty listing instead of failing the command. This is the one deliberate
//! exception to the error-propagation policy.

use crate::context::AppContext;
use anyhow::Result;
use devdash_core::gateway::RepoMirrorApi;
use devdash_core::github::RepoSummary;

pub async fn show(ctx: &AppContext, username_override: Option<&str>) -> Result<()> {
    ctx.ensure_session()?;
    let username = username_override.or(ctx.config.github_username.as_deref());
    match username {
        Some(username) => render(&fetch_mirror(ctx.client.as_ref(), username).await),
        None => println!("No GitHub account configured (set `github_username` in config.toml)."),
    }
    Ok(())
}

/// Best-effort fetch: failures degrade to an empty list.
pub async fn fetch_mirror(api: &dyn RepoMirrorApi, username: &str) -> Vec<RepoSummary> {
    match api.repos(username).await {
        Ok(repos) => repos,
        Err(err) => {
            tracing::warn!(%err, username, "repository mirror fetch failed");
            Vec::new()
        }
    }
}

pub fn render(repos: &[RepoSummary]) {
    if repos.is_empty() {
        println!("No repos found");
        return;
    }
    for repo in repos {
        println!("{}  ({})  ★ {}", repo.name, repo.language, repo.stars);
        if let Some(description) = &repo.description {
            println!("       {description}");
        }
        println!("       {}  updated {}", repo.url, repo.updated);
    }
}
