use crate::core::client::{DEFAULT_LIMIT, DEFAULT_SKIP};
use crate::core::ConfigProvider;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "polly")]
#[command(about = "Command line client for the polling service")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Base URL of the polling service")]
    pub base_url: Option<String>,

    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Register a new user
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Log in and print the access token
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    /// List polls
    List {
        #[arg(long, default_value_t = DEFAULT_SKIP)]
        skip: u32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Create a poll (repeat --option for each choice)
    Create {
        #[arg(long)]
        question: String,
        #[arg(long = "option")]
        options: Vec<String>,
        #[arg(long)]
        token: String,
    },
    /// Vote for an option of a poll
    Vote {
        #[arg(long)]
        poll_id: i64,
        #[arg(long)]
        option_id: i64,
        #[arg(long)]
        token: String,
    },
    /// Show the results of a poll
    Results {
        #[arg(long)]
        poll_id: i64,
    },
    /// Delete a poll you own
    Delete {
        #[arg(long)]
        poll_id: i64,
        #[arg(long)]
        token: String,
    },
    /// Run register, login, create, vote, results and delete against the server
    Walkthrough {
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}
