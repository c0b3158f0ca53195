//! CLI administration tool for the OptiWaste login service.
//!
//! User accounts are never created through the web UI; this tool is the
//! administration side of the user lifecycle, plus session housekeeping and
//! database diagnostics.
//!
//! # Usage
//!
//! ```bash
//! # Create a user account
//! cargo run --bin admin -- user create
//!
//! # List all accounts
//! cargo run --bin admin -- user list
//!
//! # Delete an account (and its sessions)
//! cargo run --bin admin -- user delete jdoe
//!
//! # Remove expired sessions
//! cargo run --bin admin -- session purge
//!
//! # View counts
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use optiwaste::application::services::hash_password;
use optiwaste::domain::entities::NewUser;
use optiwaste::domain::repositories::{SessionRepository, UserRepository};
use optiwaste::infrastructure::persistence::{PgSessionRepository, PgUserRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the OptiWaste login service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage login sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user account
    Create {
        /// Login name (e.g., "jdoe")
        #[arg(short, long)]
        username: Option<String>,

        /// First name
        #[arg(short, long)]
        first_name: Option<String>,

        /// Last name
        #[arg(short, long)]
        last_name: Option<String>,
    },

    /// List all user accounts
    List,

    /// Delete a user account and its sessions
    Delete {
        /// Username to delete
        username: String,
    },
}

/// Session housekeeping subcommands.
#[derive(Subcommand)]
enum SessionAction {
    /// Remove expired sessions
    Purge,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Session { action } => handle_session_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            username,
            first_name,
            last_name,
        } => {
            create_user(repo, username, first_name, last_name).await?;
        }
        UserAction::List => {
            list_users(repo).await?;
        }
        UserAction::Delete { username } => {
            delete_user(repo, username).await?;
        }
    }

    Ok(())
}

/// Creates a new user account with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for any field not passed as a flag
/// 2. Read the password twice (hidden input, confirmation)
/// 3. Hash with a fresh random salt
/// 4. Store in database
///
/// # Security
///
/// Only the salted hash is stored; the password is never echoed or persisted.
async fn create_user(
    repo: Arc<PgUserRepository>,
    username: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let first_name = match first_name {
        Some(f) => f,
        None => Input::new().with_prompt("First name").interact_text()?,
    };

    let last_name = match last_name {
        Some(l) => l,
        None => Input::new().with_prompt("Last name").interact_text()?,
    };

    let password = Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()?;

    let new_user = NewUser {
        username,
        first_name,
        last_name,
        password_hash: hash_password(&password),
    };

    let user = repo
        .create_user(&new_user)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!("{}", "✅ User created successfully!".green().bold());
    println!();
    println!("  Username: {}", user.username.cyan());
    println!("  Name:     {}", user.display_name().bright_white());
    println!();

    Ok(())
}

/// Lists all user accounts.
///
/// # Output Format
///
/// ```text
/// 📋 Users
///
///   ID  Username             Name                      Created
///   ─────────────────────────────────────────────────────────────────
///   1   jdoe                 Jane Doe                  2026-08-01 10:30
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<20} {:<25} {:<20}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for user in &users {
        println!(
            "  {:<3} {:<20} {:<25} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.display_name(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Deletes a user account after confirmation.
///
/// # Safety
///
/// - Requires confirmation (default: No)
/// - The user's sessions are removed by the schema cascade
async fn delete_user(repo: Arc<PgUserRepository>, username: String) -> Result<()> {
    println!("{}", "🗑  Delete User".bright_blue().bold());
    println!();

    let user = repo
        .find_by_username(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("User not found")?;

    println!("  Username: {}", user.username.cyan());
    println!("  Name:     {}", user.display_name());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this user and all their sessions?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.delete_user(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!();
    println!("{}", "✅ User deleted".green().bold());
    println!();

    Ok(())
}

/// Dispatches session housekeeping commands.
async fn handle_session_action(action: SessionAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgSessionRepository::new(Arc::new(pool.clone())));

    match action {
        SessionAction::Purge => {
            let removed = repo
                .delete_expired()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to purge sessions: {}", e))?;

            println!(
                "{} removed {} expired sessions",
                "✅".green(),
                removed.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Displays system statistics.
///
/// Shows:
/// - Total number of user accounts
/// - Number of active (non-expired) sessions
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let sessions_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE expires_at > NOW()")
            .fetch_one(pool)
            .await?;

    println!(
        "  Users:           {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Active sessions: {}",
        sessions_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
