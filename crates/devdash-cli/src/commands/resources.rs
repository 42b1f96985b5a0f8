//! Resource commands: list, add, edit, rm.

use crate::context::AppContext;
use anyhow::{Result, bail};
use devdash_core::collection::CollectionStore;
use devdash_core::resource::{Resource, ResourceDraft};
use devdash_infrastructure::ResourceEndpoint;
use std::sync::Arc;

fn store(ctx: &AppContext) -> CollectionStore<ResourceEndpoint> {
    CollectionStore::new(Arc::new(ResourceEndpoint::new(ctx.client.clone())))
}

/// Fetches the current list, failing the command when the fetch failed.
async fn fetch(ctx: &AppContext) -> Result<CollectionStore<ResourceEndpoint>> {
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

pub async fn add(ctx: &AppContext, title: &str, url: &str, category: &str) -> Result<()> {
    ctx.ensure_session()?;
    let mut store = store(ctx);
    let draft = ResourceDraft {
        title: title.to_string(),
        url: url.to_string(),
        category: category.to_string(),
    };
    if let Err(err) = store.create(&draft).await {
        bail!(err.user_message("Failed to create resource"));
    }
    let created = &store.records()[0];
    println!("Created resource {} ({})", created.id, created.title);
    Ok(())
}

pub async fn edit(ctx: &AppContext, id: i64, title: &str, url: &str, category: &str) -> Result<()> {
    ctx.ensure_session()?;
    let mut store = fetch(ctx).await?;
    let draft = ResourceDraft {
        title: title.to_string(),
        url: url.to_string(),
        category: category.to_string(),
    };
    if let Err(err) = store.update(id, &draft).await {
        bail!(err.user_message("Failed to update resource"));
    }
    println!("Updated resource {id}");
    Ok(())
}

pub async fn rm(ctx: &AppContext, id: i64) -> Result<()> {
    ctx.ensure_session()?;
    let mut store = fetch(ctx).await?;
    if let Err(err) = store.remove(id).await {
        bail!(err.user_message("Failed to delete resource"));
    }
    println!("Deleted resource {id}");
    Ok(())
}

pub fn render(resources: &[Resource]) {
    if resources.is_empty() {
        println!("No resources yet.");
        return;
    }
    for resource in resources {
        println!(
            "{:>5}  [{}] {}  {}",
            resource.id, resource.category, resource.title, resource.url
        );
    }
}
