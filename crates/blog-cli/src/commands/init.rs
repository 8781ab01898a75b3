//! Init command
//!
//! Create the configuration file and data directory, optionally with demo
//! users and posts.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use clap::Args;

use super::app::{open_storage, Paths};
use blog_core::config::Config;
use blog_core::post::PostBuilder;
use blog_core::storage::BlogStorage;
use blog_core::types::Username;
use blog_core::user::{Role, User};

/// Arguments for the init command
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Seed demo users and posts
    #[arg(long)]
    pub demo: bool,

    /// Force overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

/// Execute the init command
pub fn execute(args: InitArgs, paths: &Paths) -> Result<()> {
    use colored::Colorize;

    if paths.config.exists() && !args.force {
        eprintln!(
            "{} Blog already initialized. Use --force to reinitialize.",
            "⚠".yellow()
        );
        return Ok(());
    }

    Config::default()
        .save(&paths.config)
        .with_context(|| format!("Failed to write {}", paths.config.display()))?;
    println!(
        "{} Generated {}",
        "✓".green(),
        paths.config.display()
    );

    let storage = open_storage(&paths.data_dir)?;
    println!(
        "{} Created data directory {}",
        "✓".green(),
        paths.data_dir.display()
    );

    if args.demo {
        let posts = seed_demo(&storage)?;
        println!(
            "{} Added demo users {} and {} with {} posts",
            "✓".green(),
            "lea".cyan(),
            "bruno".cyan(),
            posts
        );
    }

    println!("\n{}", "Next steps:".bold());
    println!("  {}", "blog post list".cyan());
    println!("  {}", "blog user add <name> --email <email> [--admin]".cyan());

    Ok(())
}

/// Demo post titles, newest first
const DEMO_TITLES: &[&str] = &[
    "PHP, a language loved by developers",
    "Getting started with Rust",
    "Why we paginate listings",
    "Writing your first blog post",
    "Ownership explained",
    "Traits at the seams",
    "Testing without a database",
    "Event-driven side effects",
    "Choosing a page size",
    "Command-line blogging",
    "Notifications done simply",
    "Structured logging",
    "Configuration files with TOML",
];

/// Seed users and posts, returning the number of posts created
pub fn seed_demo(storage: &dyn BlogStorage) -> Result<usize> {
    let lea = User::new(Username::new("lea")?, "Léa Dupont", "lea@blog.test").with_role(Role::Admin);
    let bruno = User::new(Username::new("bruno")?, "Bruno Martin", "bruno@blog.test");
    storage.save_user(&lea)?;
    storage.save_user(&bruno)?;

    let now = Utc::now();
    for (i, title) in DEMO_TITLES.iter().enumerate() {
        let post = PostBuilder::new(lea.username.clone())
            .title(*title)
            .summary(format!("A short introduction to \"{}\".", title))
            .content(format!(
                "This is the demo article \"{}\". Edit or delete it from the admin commands.",
                title
            ))
            .tag(if i % 2 == 0 { "news" } else { "tutorial" })
            .published_at(now - Duration::hours(i as i64 + 1))
            .build()?;
        storage.save_post(&post)?;
    }

    Ok(DEMO_TITLES.len())
}
