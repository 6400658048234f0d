use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "syazai")]
#[command(version, about = "Copy-ready apology templates for every situation")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to $SYAZAI_CONFIG or the nearest .syazai.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List categories and the situations filed under them
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List situations
    List {
        /// Only situations in this category
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a situation: checklist, suggestions and available templates
    Show {
        /// Situation slug (e.g. "delay-meeting")
        slug: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the apology text for a situation
    Resolve {
        /// Situation slug (e.g. "delay-meeting")
        slug: String,

        /// Recipient (client, boss, customer, friend)
        #[arg(long = "to", short = 't', value_name = "RECIPIENT")]
        recipient: Option<String>,

        /// Delivery method (email, chat, phone)
        #[arg(long = "via", short = 'v', value_name = "METHOD")]
        method: Option<String>,

        /// Excuse (none, health, system, traffic, family)
        #[arg(long, short = 'e', default_value = "none")]
        excuse: String,

        /// Print only this subject line (1-based)
        #[arg(long, value_name = "N")]
        subject: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search situations by title, description or slug
    Search {
        /// Search text
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the catalog for consistency problems
    Check {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
