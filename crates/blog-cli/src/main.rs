//! blog - blogline command-line front end
//!
//! ## Quick Start
//!
//! ```bash
//! # Create .blog/ with a config file and demo content
//! blog init --demo
//!
//! # Browse the blog
//! blog post list --page 2
//! blog post search rust
//!
//! # Comment as a user (the post author gets notified)
//! blog comment add hello-world --as bruno "Nice article!"
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
