use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;

use context::AppContext;

#[derive(Parser)]
#[command(name = "devdash")]
#[command(about = "devdash - personal developer productivity dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and start a session
    Signup {
        name: String,
        email: String,
        password: String,
    },
    /// Start a session with existing credentials
    Login { email: String, password: String },
    /// End the current session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Show the full dashboard
    Dashboard,
    /// Manage bookmarked resources
    Resource {
        #[command(subcommand)]
        action: ResourceAction,
    },
    /// Manage goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },
    /// List public repositories of the configured account
    Repos {
        #[arg(long)]
        username: Option<String>,
    },
}

#[derive(Subcommand)]
enum ResourceAction {
    /// List resources
    List,
    /// Add a resource
    Add {
        title: String,
        url: String,
        category: String,
    },
    /// Edit a resource (all fields are resubmitted)
    Edit {
        id: i64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        category: String,
    },
    /// Delete a resource
    Rm { id: i64 },
}

#[derive(Subcommand)]
enum GoalAction {
    /// List goals
    List,
    /// Add a goal
    Add {
        text: String,
        #[arg(long, default_value_t = 0)]
        progress: i64,
        #[arg(long)]
        due_date: String,
    },
    /// Edit a goal (all fields are resubmitted)
    Edit {
        id: i64,
        #[arg(long)]
        text: String,
        #[arg(long)]
        progress: i64,
        #[arg(long)]
        due_date: String,
    },
    /// Delete a goal
    Rm { id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let mut ctx = AppContext::init()?;

    match cli.command {
        Commands::Signup {
            name,
            email,
            password,
        } => commands::auth::signup(&mut ctx, &name, &email, &password).await?,
        Commands::Login { email, password } => {
            commands::auth::login(&mut ctx, &email, &password).await?
        }
        Commands::Logout => commands::auth::logout(&mut ctx),
        Commands::Whoami => commands::auth::whoami(&ctx),
        Commands::Dashboard => commands::dashboard::show(&ctx).await?,
        Commands::Resource { action } => match action {
            ResourceAction::List => commands::resources::list(&ctx).await?,
            ResourceAction::Add {
                title,
                url,
                category,
            } => commands::resources::add(&ctx, &title, &url, &category).await?,
            ResourceAction::Edit {
                id,
                title,
                url,
                category,
            } => commands::resources::edit(&ctx, id, &title, &url, &category).await?,
            ResourceAction::Rm { id } => commands::resources::rm(&ctx, id).await?,
        },
        Commands::Goal { action } => match action {
            GoalAction::List => commands::goals::list(&ctx).await?,
            GoalAction::Add {
                text,
                progress,
                due_date,
            } => commands::goals::add(&ctx, &text, progress, &due_date).await?,
            GoalAction::Edit {
                id,
                text,
                progress,
                due_date,
            } => commands::goals::edit(&ctx, id, &text, progress, &due_date).await?,
            GoalAction::Rm { id } => commands::goals::rm(&ctx, id).await?,
        },
        Commands::Repos { username } => commands::repos::show(&ctx, username.as_deref()).await?,
    }

    Ok(())
}
