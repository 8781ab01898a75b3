//! Comment command
//!
//! Add comments to published posts. Each new comment is announced on the
//! comment-created channel, which mails the post author when notifications
//! are enabled.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use super::App;

/// Comment subcommands
#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    /// Comment on a post
    Add {
        /// Post slug
        slug: String,

        /// Comment text
        content: String,

        /// Username of the commenter
        #[arg(long = "as", value_name = "USERNAME")]
        author: String,

        /// Output the new comment as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the comment command
pub fn execute(cmd: CommentCommand, app: &App) -> Result<()> {
    match cmd {
        CommentCommand::Add {
            slug,
            content,
            author,
            json,
        } => {
            let user = app.user(&author)?;
            let comment = app
                .blog()?
                .add_comment(&slug, &user, &content)
                .with_context(|| format!("Failed to comment on '{}'", slug))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&comment)?);
            } else {
                println!(
                    "{} Comment {} added to '{}'",
                    "✓".green(),
                    comment.id.to_string().dimmed(),
                    slug
                );
            }
            Ok(())
        }
    }
}
