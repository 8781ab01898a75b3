//! User command
//!
//! Register, edit and list blog users.

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use super::App;
use blog_core::service::ProfileChanges;
use blog_core::storage::BlogStorage;
use blog_core::types::Username;
use blog_core::user::{Role, User};

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a new user
    Add {
        /// Login name
        username: String,

        /// Email address used for notifications
        #[arg(long)]
        email: String,

        /// Display name (defaults to the username)
        #[arg(long)]
        name: Option<String>,

        /// Grant the admin role
        #[arg(long)]
        admin: bool,
    },

    /// Edit your own profile
    Edit {
        /// Acting user
        #[arg(long = "as", value_name = "USERNAME")]
        actor: String,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New display name
        #[arg(long)]
        name: Option<String>,
    },

    /// List users
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the user command
pub fn execute(cmd: UserCommand, app: &App) -> Result<()> {
    match cmd {
        UserCommand::Add {
            username,
            email,
            name,
            admin,
        } => {
            let username = Username::new(username)?;
            let full_name = name.unwrap_or_else(|| username.to_string());
            let mut user = User::new(username, full_name, email);
            if admin {
                user = user.with_role(Role::Admin);
            }

            let user = app.accounts().register(user)?;
            println!("{} Saved user {}", "✓".green(), user.username.to_string().cyan());
            Ok(())
        }
        UserCommand::Edit { actor, email, name } => {
            let changes = ProfileChanges {
                full_name: name,
                email,
            };
            if changes.is_empty() {
                println!("Nothing to change. Use --email or --name.");
                return Ok(());
            }

            let actor = app.user(&actor)?;
            let user = app.accounts().update_profile(&actor, changes)?;
            println!(
                "{} Updated {} <{}>",
                "✓".green(),
                user.full_name.cyan(),
                user.email
            );
            Ok(())
        }
        UserCommand::List { json } => {
            let mut users = app.storage().list_users()?;
            users.sort_by(|a, b| a.username.cmp(&b.username));

            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
                return Ok(());
            }

            if users.is_empty() {
                println!("No users found.");
                return Ok(());
            }
            for user in &users {
                let roles: Vec<String> = user.roles.iter().map(|r| r.to_string()).collect();
                println!(
                    "  {} {} <{}> [{}]",
                    user.username.to_string().green(),
                    user.full_name,
                    user.email,
                    roles.join(", ").dimmed()
                );
            }
            Ok(())
        }
    }
}
