//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod admin;
mod app;
pub mod comment;
pub mod config;
pub mod init;
pub mod post;
pub mod user;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use app::App;

/// blog - a small blog engine with comment notifications
#[derive(Debug, Parser)]
#[command(name = "blog")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Data directory holding posts and users
    #[arg(long, global = true, env = "BLOG_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a blog in the current directory
    Init(init::InitArgs),

    /// Browse published posts
    #[command(subcommand)]
    Post(post::PostCommand),

    /// Comment on posts
    #[command(subcommand)]
    Comment(comment::CommentCommand),

    /// Manage posts (administrators only)
    #[command(subcommand)]
    Admin(admin::AdminCommand),

    /// Manage users
    #[command(subcommand)]
    User(user::UserCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let local = matches!(cli.command, Commands::Init(_)) || app::in_blog_project();
    let paths = app::Paths::resolve(cli.config, cli.data_dir, local);

    // Dispatch to command handler
    match cli.command {
        Commands::Init(args) => init::execute(args, &paths),
        Commands::Config(cmd) => config::execute(cmd, &paths),
        Commands::Post(cmd) => post::execute(cmd, &App::open(&paths)?),
        Commands::Comment(cmd) => comment::execute(cmd, &App::open(&paths)?),
        Commands::Admin(cmd) => admin::execute(cmd, &App::open(&paths)?),
        Commands::User(cmd) => user::execute(cmd, &App::open(&paths)?),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
