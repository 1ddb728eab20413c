//! CLI administration tool for the site.
//!
//! Checks the content document and the backend API without starting the
//! server.
//!
//! # Usage
//!
//! ```bash
//! # Validate the bundled content document (or a replacement file)
//! cargo run --bin admin -- content check
//! cargo run --bin admin -- content check --path ./content/site.json
//!
//! # List every URL the site serves
//! cargo run --bin admin -- content routes
//!
//! # Check the backend API is reachable
//! cargo run --bin admin -- backend ping --url https://api.example.com
//! ```
//!
//! # Environment Variables
//!
//! - `CONTENT_PATH` (optional): default for `content --path`
//! - `BACKEND_URL` (optional): default for `backend ping --url`

use mstatili_site::domain::content::ContentDocument;
use mstatili_site::infrastructure::api_client::ApiClient;
use mstatili_site::infrastructure::content::load_document;
use mstatili_site::web::routes::PAGE_PATHS;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use serde_json::Value;
use std::path::PathBuf;

/// CLI tool for managing the site.
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
    /// Content document tools
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },

    /// Backend API tools
    Backend {
        #[command(subcommand)]
        action: BackendAction,
    },
}

/// Content subcommands.
#[derive(Subcommand)]
enum ContentAction {
    /// Validate the content document
    Check {
        /// Replacement document (defaults to CONTENT_PATH, then the bundled one)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// List every page and detail URL
    Routes {
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

/// Backend subcommands.
#[derive(Subcommand)]
enum BackendAction {
    /// Call `GET /api/` on the backend
    Ping {
        /// Backend base URL (defaults to BACKEND_URL, then http://localhost:3000)
        #[arg(short, long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Content { action } => handle_content_action(action)?,
        Commands::Backend { action } => handle_backend_action(action).await?,
    }

    Ok(())
}

/// Resolves `--path`, falling back to `CONTENT_PATH`.
fn content_path(path: Option<PathBuf>) -> Option<PathBuf> {
    path.or_else(|| {
        std::env::var("CONTENT_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    })
}

/// Dispatches content commands.
fn handle_content_action(action: ContentAction) -> Result<()> {
    match action {
        ContentAction::Check { path } => {
            let path = content_path(path);
            let source = path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "bundled".to_string());

            println!("{}", format!("Checking content ({source})...").bright_blue());

            match load_document(path.as_deref(), PAGE_PATHS) {
                Ok(document) => {
                    println!();
                    println!(
                        "  Services:     {}",
                        document.services.len().to_string().bright_green().bold()
                    );
                    println!(
                        "  Case studies: {}",
                        document.case_studies.len().to_string().bright_green().bold()
                    );
                    println!(
                        "  Posts:        {}",
                        document.posts.len().to_string().bright_green().bold()
                    );
                    println!();
                    println!("{}", "Content document OK".green().bold());
                }
                Err(e) => {
                    println!("{}", format!("Content document invalid: {e}").red().bold());
                    anyhow::bail!("content check failed");
                }
            }
        }
        ContentAction::Routes { path } => {
            let path = content_path(path);
            let document =
                load_document(path.as_deref(), PAGE_PATHS).context("Failed to load content")?;

            println!("{}", "Routes".bright_blue().bold());
            println!();
            for route in routes(&document) {
                println!("  {}", route.cyan());
            }
            println!();
        }
    }

    Ok(())
}

/// Static pages followed by one URL per record.
fn routes(document: &ContentDocument) -> Vec<String> {
    let mut routes: Vec<String> = PAGE_PATHS.iter().map(|p| p.to_string()).collect();

    routes.extend(document.services.iter().map(|s| format!("/services/{}", s.slug)));
    routes.extend(
        document
            .case_studies
            .iter()
            .map(|c| format!("/case-studies/{}", c.slug)),
    );
    routes.extend(document.posts.iter().map(|p| format!("/insights/{}", p.slug)));

    routes
}

/// Dispatches backend commands.
async fn handle_backend_action(action: BackendAction) -> Result<()> {
    match action {
        BackendAction::Ping { url } => {
            let url = url
                .or_else(|| std::env::var("BACKEND_URL").ok())
                .unwrap_or_else(|| "http://localhost:3000".to_string());

            let client = ApiClient::new(&url)?;
            println!(
                "{}",
                format!("Pinging {}...", client.base_url()).bright_blue()
            );

            match client.get::<Value>("/api/").await {
                Ok(body) => {
                    let message = body
                        .get("message")
                        .and_then(Value::as_str)
                        .unwrap_or("(no message)");
                    println!("  {}", message.bright_white());
                    println!("{}", "Backend reachable".green().bold());
                }
                Err(e) => {
                    println!("{}", format!("Backend unreachable: {e}").red().bold());
                    anyhow::bail!("backend ping failed");
                }
            }
        }
    }

    Ok(())
}
