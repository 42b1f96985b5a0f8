//! Goal commands: list, add, edit, rm.
//!
//! Progress values are clamped to [0, 100] here, at the input surface; the
//! store submits drafts as-is.

use crate::context::AppContext;
use anyhow::{Result, bail};
use devdash_core::collection::CollectionStore;
use devdash_core::goal::{Goal, GoalDraft, clamp_progress};
use devdash_infrastructure::GoalEndpoint;
use std::sync::Arc;

fn store(ctx: &AppContext) -> CollectionStore<GoalEndpoint> {
    CollectionStore::new(Arc::new(GoalEndpoint::new(ctx.client.clone())))
}

async fn fetch(ctx: &AppContext) -> Result<CollectionStore<GoalEndpoint>> {
    let mut store = store(ctx);
    store.fetch_all().await;
    if let Some(err) = store.fetch_error() {
        bail!(err.to_string());
    }
    Ok(store)
}

pub async fn list(ctx: &AppContext) -> Result<()> {
    ctx.ensure_session()?;
    let store = fetch(ctx).await?;
    render(store.records());
    Ok(())
}

pub async fn add(ctx: &AppContext, text: &str, progress: i64, due_date: &str) -> Result<()> {
    ctx.ensure_session()?;
    let mut store = store(ctx);
    let draft = GoalDraft {
        text: text.to_string(),
        progress: clamp_progress(progress),
        due_date: due_date.to_string(),
    };
    if let Err(err) = store.create(&draft).await {
        bail!(err.user_message("Failed to create goal"));
    }
    let created = &store.records()[0];
    println!("Created goal {} ({})", created.id, created.text);
    Ok(())
}

pub async fn edit(ctx: &AppContext, id: i64, text: &str, progress: i64, due_date: &str) -> Result<()> {
    ctx.ensure_session()?;
    let mut store = fetch(ctx).await?;
    let draft = GoalDraft {
        text: text.to_string(),
        progress: clamp_progress(progress),
        due_date: due_date.to_string(),
    };
    if let Err(err) = store.update(id, &draft).await {
        bail!(err.user_message("Failed to update goal"));
    }
    println!("Updated goal {id}");
    Ok(())
}

pub async fn rm(ctx: &AppContext, id: i64) -> Result<()> {
    ctx.ensure_session()?;
    let mut store = fetch(ctx).await?;
    if let Err(err) = store.remove(id).await {
        bail!(err.user_message("Failed to delete goal"));
    }
    println!("Deleted goal {id}");
    Ok(())
}

pub fn render(goals: &[Goal]) {
    if goals.is_empty() {
        println!("No goals yet.");
        return;
    }
    for goal in goals {
        println!(
            "{:>5}  {:>3}%  due {}  {}",
            goal.id, goal.progress, goal.due_date, goal.text
        );
    }
}
