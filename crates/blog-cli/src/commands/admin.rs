//! Admin command
//!
//! Post CRUD for administrators. Every subcommand acts as the user given
//! with `--as`; only admins get through, and only a post's author may
//! show, edit or delete it.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use super::App;
use blog_core::service::{PostChanges, PostDraft};
use blog_core::types::PostId;

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// List your posts, including scheduled ones
    List {
        /// Acting username
        #[arg(long = "as", value_name = "USERNAME")]
        actor: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a post
    New {
        /// Acting username
        #[arg(long = "as", value_name = "USERNAME")]
        actor: String,

        #[arg(long)]
        title: String,

        #[arg(long)]
        summary: String,

        #[arg(long)]
        content: String,

        /// Tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Show one of your posts
    Show {
        /// Acting username
        #[arg(long = "as", value_name = "USERNAME")]
        actor: String,

        /// Post ID
        id: String,
    },

    /// Edit one of your posts
    Edit {
        /// Acting username
        #[arg(long = "as", value_name = "USERNAME")]
        actor: String,

        /// Post ID
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        summary: Option<String>,

        #[arg(long)]
        content: Option<String>,

        /// Replace the tags (repeatable)
        #[arg(long = "tag")]
        tags: Option<Vec<String>>,
    },

    /// Delete one of your posts and its comments
    Delete {
        /// Acting username
        #[arg(long = "as", value_name = "USERNAME")]
        actor: String,

        /// Post ID
        id: String,

        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

/// Execute the admin command
pub fn execute(cmd: AdminCommand, app: &App) -> Result<()> {
    let admin = app.admin();

    match cmd {
        AdminCommand::List { actor, json } => {
            let actor = app.user(&actor)?;
            let posts = admin.list(&actor)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&posts)?);
                return Ok(());
            }
            if posts.is_empty() {
                println!("No posts found.");
                return Ok(());
            }
            for post in &posts {
                println!(
                    "  {} {} {}",
                    post.id.to_string().dimmed(),
                    post.published_at.format("%Y-%m-%d"),
                    post.title.green()
                );
            }
            Ok(())
        }
        AdminCommand::New {
            actor,
            title,
            summary,
            content,
            tags,
        } => {
            let actor = app.user(&actor)?;
            let draft = PostDraft {
                title,
                summary,
                content,
                tags,
                published_at: None,
            };
            let post = admin.create(&actor, draft)?;
            println!(
                "{} Created post {} ({})",
                "✓".green(),
                post.slug.to_string().cyan(),
                post.id
            );
            Ok(())
        }
        AdminCommand::Show { actor, id } => {
            let actor = app.user(&actor)?;
            let post = admin.show(&actor, &parse_id(&id)?)?;
            println!("{}", serde_json::to_string_pretty(&post)?);
            Ok(())
        }
        AdminCommand::Edit {
            actor,
            id,
            title,
            summary,
            content,
            tags,
        } => {
            let actor = app.user(&actor)?;
            let changes = PostChanges {
                title,
                summary,
                content,
                tags,
                published_at: None,
            };
            if changes.is_empty() {
                println!("Nothing to change.");
                return Ok(());
            }
            let post = admin.update(&actor, &parse_id(&id)?, changes)?;
            println!("{} Updated post {}", "✓".green(), post.slug.to_string().cyan());
            Ok(())
        }
        AdminCommand::Delete { actor, id, yes } => {
            let actor = app.user(&actor)?;
            let id = parse_id(&id)?;
            let post = admin.show(&actor, &id)?;

            if !yes {
                use dialoguer::Confirm;

                println!("Post: {}", post.title.green());
                println!("  {} comments", post.comment_count());

                let confirmed = Confirm::new()
                    .with_prompt("Delete this post?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("Deletion cancelled.");
                    return Ok(());
                }
            }

            admin.delete(&actor, &id)?;
            println!("{} Post '{}' deleted.", "✓".green(), post.title);
            Ok(())
        }
    }
}

fn parse_id(id: &str) -> Result<PostId> {
    PostId::from_string(id).with_context(|| format!("Invalid post ID: {}", id))
}
