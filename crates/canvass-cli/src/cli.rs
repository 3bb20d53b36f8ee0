//! Argument tree for `cnv`.

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "cnv", version, about = "Project-scoped market research workspace")]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Override the database path from config.
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage projects (the parent scope for research).
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Manage a project's market research entries.
    #[command(subcommand)]
    Research(ResearchCommands),
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// List projects, newest first.
    List,
}

#[derive(Debug, Subcommand)]
pub enum ResearchCommands {
    /// List a project's research entries, newest first.
    List {
        #[arg(long)]
        project: String,
    },
    /// Show one research entry in full.
    Show { id: String },
    /// Create a research entry.
    Create {
        #[arg(long)]
        project: String,
        #[arg(long)]
        title: String,
        #[arg(long = "market-size")]
        market_size: Option<String>,
        #[arg(long = "market-trends")]
        market_trends: Option<String>,
        #[arg(long)]
        competitors: Option<String>,
        #[arg(long)]
        positioning: Option<String>,
        /// Add a target segment by name (repeatable, order preserved).
        #[arg(long = "segment")]
        segments: Vec<String>,
    },
    /// Edit a research entry; unspecified flags keep their stored values.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long = "market-size")]
        market_size: Option<String>,
        #[arg(long = "market-trends")]
        market_trends: Option<String>,
        #[arg(long)]
        competitors: Option<String>,
        #[arg(long)]
        positioning: Option<String>,
        /// Append a target segment by name (repeatable).
        #[arg(long = "segment")]
        segments: Vec<String>,
    },
    /// Delete a research entry (prompts unless --yes).
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
}
