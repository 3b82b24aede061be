use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sql-broker-cli", about = "Scaffold and provision MySQL databases")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply the configured script sections in order: tables, primers,
    /// views, procedures
    Scaffold {
        #[arg(long, default_value = "sql-broker.json")]
        config: PathBuf,
    },
    /// Execute a single SQL script file
    Run {
        script: PathBuf,
        #[arg(long, default_value = "sql-broker.json")]
        config: PathBuf,
    },
    /// Create a database and its default admin user with a generated
    /// password
    Build {
        database: String,
        user: String,
        #[arg(long, default_value = "sql-broker.json")]
        config: PathBuf,
    },
    /// Create a user, prompting for its password
    Adduser {
        user: String,
        #[arg(long, default_value = "sql-broker.json")]
        config: PathBuf,
    },
    /// Grant a role's permissions on a database to a user
    Grant {
        user: String,
        database: String,
        role: String,
        #[arg(long, default_value = "sql-broker.json")]
        config: PathBuf,
    },
}
