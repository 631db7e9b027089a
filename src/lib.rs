pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use app::walkthrough::{Walkthrough, WalkthroughReport};
pub use config::{toml_config::TomlConfig, Settings};
pub use core::{client::PollClient, PollApi};
pub use domain::model::{AccessToken, Credentials, Poll, PollDraft, PollOption, ResultSet, User, Vote};
pub use utils::error::{PollError, Result};
