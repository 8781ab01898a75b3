//! Post command
//!
//! Browse the public side of the blog: listing, feed, single posts and search.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use super::App;
use blog_core::pagination::Page;
use blog_core::post::PostSummary;

/// Post subcommands
#[derive(Debug, Subcommand)]
pub enum PostCommand {
    /// List published posts, newest first
    List {
        /// Page number (out-of-range values are clamped)
        #[arg(long, short, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Only posts with this tag
        #[arg(long, short)]
        tag: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the feed entries (one page of the latest posts)
    Feed {
        /// Page number
        #[arg(long, short, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post and its comments
    Show {
        /// Post slug
        slug: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search post titles
    Search {
        /// Search terms
        query: String,

        /// Maximum number of results
        #[arg(long, short)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the post command
pub fn execute(cmd: PostCommand, app: &App) -> Result<()> {
    let blog = app.blog()?;

    match cmd {
        PostCommand::List { page, tag, json } => {
            let page = blog.latest_posts(page, tag.as_deref())?;
            print_page(&page, json)
        }
        PostCommand::Feed { page, json } => {
            let page = blog.feed(page)?;
            if !json {
                println!("{}", app.config.blog.title.bold());
                println!("{}", app.config.blog.description.dimmed());
                println!();
            }
            print_page(&page, json)
        }
        PostCommand::Show { slug, json } => {
            let post = blog
                .find_by_slug(&slug)
                .with_context(|| format!("Post '{}' not found", slug))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&post)?);
                return Ok(());
            }

            println!("{}", post.title.bold().underline());
            println!(
                "{} by {}",
                post.published_at.format("%Y-%m-%d %H:%M"),
                post.author.to_string().cyan()
            );
            if !post.tags.is_empty() {
                println!("Tags: {}", post.tags.join(", ").yellow());
            }
            println!();
            println!("{}", post.content);
            println!();
            println!("{} ({})", "Comments".bold(), post.comment_count());
            for comment in &post.comments {
                println!(
                    "  {} {}: {}",
                    comment.published_at.format("%Y-%m-%d").to_string().dimmed(),
                    comment.author.to_string().cyan(),
                    comment.content
                );
            }
            Ok(())
        }
        PostCommand::Search { query, limit, json } => {
            let results = blog.search(&query, limit)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
                return Ok(());
            }

            if results.is_empty() {
                println!("No posts match '{}'.", query);
                return Ok(());
            }
            for result in &results {
                println!(
                    "  {} {} ({}, {})",
                    result.url.dimmed(),
                    result.title.green(),
                    result.author,
                    result.date
                );
            }
            Ok(())
        }
    }
}

fn print_page(page: &Page<PostSummary>, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(page)?);
        return Ok(());
    }

    if page.is_empty() {
        println!("No posts found.");
        return Ok(());
    }

    for post in &page.results {
        println!(
            "  {} {} ({} comments)",
            post.published_at.format("%Y-%m-%d").to_string().dimmed(),
            post.title.green(),
            post.comment_count.to_string().yellow()
        );
        println!("      {}", post.slug.to_string().dimmed());
    }

    let window = &page.window;
    if window.has_to_paginate() {
        let mut nav = format!("Page {} of {}", window.current_page, window.last_page);
        if let Some(previous) = window.previous_page() {
            nav.push_str(&format!(" | previous: --page {}", previous));
        }
        if let Some(next) = window.next_page() {
            nav.push_str(&format!(" | next: --page {}", next));
        }
        println!("\n  {} {}", "ℹ".blue(), nav);
    }

    Ok(())
}
