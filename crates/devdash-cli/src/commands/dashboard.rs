//! The authenticated landing view: stats, resources, goals, and the
//! best-effort repository mirror.

use crate::commands::{goals, repos, resources};
use crate::context::AppContext;
use anyhow::Result;
use devdash_core::collection::CollectionStore;
use devdash_infrastructure::{GoalEndpoint, ResourceEndpoint};
use std::sync::Arc;

pub async fn show(ctx: &AppContext) -> Result<()> {
    let user = ctx.ensure_session()?;
    println!("Welcome back, {}!\n", user.name);

    let mut resource_store =
        CollectionStore::new(Arc::new(ResourceEndpoint::new(ctx.client.clone())));
    let mut goal_store = CollectionStore::new(Arc::new(GoalEndpoint::new(ctx.client.clone())));
    resource_store.fetch_all().await;
    goal_store.fetch_all().await;

    // The mirror loads after the session-scoped data; its failure is
    // swallowed inside fetch_mirror.
    let mirror = match &ctx.config.github_username {
        Some(username) => repos::fetch_mirror(ctx.client.as_ref(), username).await,
        None => Vec::new(),
    };

    println!(
        "Resources: {}   Goals: {}   Repos: {}\n",
        resource_store.records().len(),
        goal_store.records().len(),
        mirror.len()
    );

    println!("Resources");
    match resource_store.fetch_error() {
        Some(err) => println!("  {err}"),
        None => resources::render(resource_store.records()),
    }

    println!("\nGoals");
    match goal_store.fetch_error() {
        Some(err) => println!("  {err}"),
        None => goals::render(goal_store.records()),
    }

    println!("\nGitHub Repos");
    repos::render(&mirror);
    Ok(())
}
