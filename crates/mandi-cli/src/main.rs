mod catalog;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mandi_core::{AppConfig, EnquiryLinks};
use mandi_store::ContentStore;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mandi-cli")]
#[command(about = "Mal's Mandi catalog tools")]
struct Cli {
    /// Content root; overrides `MANDI_CONTENT_DIR`
    #[arg(long, global = true)]
    content_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check every content file against the catalog schema
    Validate {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the category tree with product counts
    Tree,
    /// Search active products by name and description
    Search {
        query: String,
        /// Match names only, like the storefront's type-ahead box
        #[arg(long)]
        suggest: bool,
        /// Maximum number of results (suggestions default to 5)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print every pre-renderable page path
    Paths {
        /// Print slugs and URLs as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the WhatsApp enquiry link for a product
    Enquiry { slug: String },
    /// Print the CMS file-name slug for a title
    Slugify {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| {
        let level = std::env::var("MANDI_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        EnvFilter::try_new(level)
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("mandi-cli: run with --help for available commands");
        return Ok(());
    };

    let content_dir = cli.content_dir;

    match command {
        Commands::Validate { json } => {
            let (_, store) = open_store(content_dir)?;
            catalog::run_validate(&store, json)
        }
        Commands::Tree => {
            let (_, store) = open_store(content_dir)?;
            print!("{}", catalog::render_tree(&store));
            Ok(())
        }
        Commands::Search {
            query,
            suggest,
            limit,
        } => {
            let (_, store) = open_store(content_dir)?;
            print!("{}", catalog::render_search(&store, &query, suggest, limit));
            Ok(())
        }
        Commands::Paths { json } => {
            let (_, store) = open_store(content_dir)?;
            catalog::run_paths(&store, json)
        }
        Commands::Enquiry { slug } => {
            let (config, store) = open_store(content_dir)?;
            let links = EnquiryLinks::from_config(&config);
            println!("{}", catalog::enquiry_link(&store, &links, &slug)?);
            Ok(())
        }
        Commands::Slugify { text } => {
            println!("{}", mandi_core::slugify(&text.join(" ")));
            Ok(())
        }
    }
}

/// Load configuration and open the content root, preferring `--content-dir`.
fn open_store(content_dir: Option<PathBuf>) -> anyhow::Result<(AppConfig, ContentStore)> {
    let config = mandi_core::load_app_config()?;
    let root = content_dir.unwrap_or_else(|| config.content_dir.clone());
    if !root.is_dir() {
        tracing::warn!(content_dir = %root.display(), "content directory does not exist");
    }
    Ok((config, ContentStore::new(root)))
}

#[cfg(test)]
mod tests;
