//! Config command
//!
//! Manage blog configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use std::fs;

use super::app::Paths;
use blog_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit configuration in editor
    Edit,

    /// Reset to default configuration
    Reset {
        /// Force reset without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration
    Validate,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, paths: &Paths) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(paths, json),
        ConfigCommand::Edit => edit_config(paths),
        ConfigCommand::Reset { force } => reset_config(paths, force),
        ConfigCommand::Validate => validate_config(paths),
    }
}

fn show_config(paths: &Paths, as_json: bool) -> Result<()> {
    let config = Config::load_or_default(&paths.config)
        .with_context(|| format!("Failed to load {}", paths.config.display()))?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    if paths.config.exists() {
        println!("{}", paths.config.display().to_string().dimmed());
    } else {
        println!("{}", "(defaults, no configuration file)".dimmed());
    }
    println!();
    println!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}

fn edit_config(paths: &Paths) -> Result<()> {
    if !paths.config.exists() {
        eprintln!(
            "{} Configuration not found. Run '{}' to create.",
            "⚠".yellow(),
            "blog init".cyan()
        );
        return Ok(());
    }

    // Get editor from environment
    let editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "vi".to_string()
            }
        });

    println!("Opening {} in {}...", paths.config.display(), editor.cyan());

    let status = std::process::Command::new(&editor)
        .arg(&paths.config)
        .status()
        .with_context(|| format!("Failed to open editor: {}", editor))?;

    if status.success() {
        match Config::load(&paths.config) {
            Ok(_) => println!("{} Configuration saved and validated.", "✓".green()),
            Err(e) => eprintln!("{} Configuration has errors: {}", "✗".red(), e),
        }
    }

    Ok(())
}

fn reset_config(paths: &Paths, force: bool) -> Result<()> {
    if !force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt("Reset configuration to defaults?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    // Backup existing
    if paths.config.exists() {
        let backup_path = format!(
            "{}.backup-{}",
            paths.config.display(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        fs::copy(&paths.config, &backup_path)?;
        println!("{} Backed up to {}", "✓".green(), backup_path);
    }

    Config::default().save(&paths.config)?;
    println!("{} Configuration reset to defaults.", "✓".green());

    Ok(())
}

fn validate_config(paths: &Paths) -> Result<()> {
    if !paths.config.exists() {
        eprintln!(
            "{} Configuration not found at {}",
            "✗".red(),
            paths.config.display()
        );
        return Ok(());
    }

    let content = fs::read_to_string(&paths.config)?;
    let raw: toml::Value = match toml::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{} Invalid TOML: {}", "✗".red(), e);
            return Ok(());
        }
    };
    println!("{} Configuration is valid TOML", "✓".green());

    for section in ["blog", "pagination", "comments", "notification"] {
        if raw.get(section).is_none() {
            println!("{} [{}] section not found, using defaults", "⚠".yellow(), section);
        }
    }

    match Config::load(&paths.config) {
        Ok(_) => println!("{} All values are valid", "✓".green()),
        Err(e) => eprintln!("{} {}", "✗".red(), e),
    }

    Ok(())
}
