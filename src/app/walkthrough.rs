use crate::core::client::{DEFAULT_LIMIT, DEFAULT_SKIP};
use crate::core::{Credentials, PollApi, PollDraft};
use crate::utils::error::{PollError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const DEFAULT_PASSWORD: &str = "testpass";
pub const SAMPLE_QUESTION: &str = "Test question?";
pub const SAMPLE_OPTIONS: [&str; 2] = ["Option A", "Option B"];

/// `testuser` plus a four digit suffix taken from the clock.
pub fn default_username(now: DateTime<Utc>) -> String {
    format!("testuser{}", 1000 + now.timestamp_subsec_micros() % 9000)
}

/// Picks each field separately: flag, then config file, then default.
pub fn resolve_credentials(
    username: Option<String>,
    password: Option<String>,
    from_file: Option<&Credentials>,
    now: DateTime<Utc>,
) -> Credentials {
    let username = username
        .or_else(|| from_file.map(|c| c.username.clone()))
        .unwrap_or_else(|| default_username(now));
    let password = password
        .or_else(|| from_file.map(|c| c.password.clone()))
        .unwrap_or_else(|| DEFAULT_PASSWORD.to_string());
    Credentials::new(username, password)
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WalkthroughReport {
    pub username: String,
    pub user_id: Option<i64>,
    pub polls_listed: usize,
    pub poll_id: i64,
    pub option_ids: Vec<i64>,
    pub vote_id: i64,
    pub results_question: Option<String>,
    pub delete_status: u16,
    pub started_at: DateTime<Utc>,
}

/// Exercises every endpoint once, in order, against a live service.
pub struct Walkthrough<A: PollApi> {
    api: A,
}

impl<A: PollApi> Walkthrough<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn run(&self, credentials: &Credentials) -> Result<WalkthroughReport> {
        let started_at = Utc::now();
        tracing::info!("🚀 Starting walkthrough as {}", credentials.username);

        let user = self.api.register(credentials).await?;
        tracing::info!("Register: user id {:?}", user.id);

        let token = self.api.login(credentials).await?;

        let polls = self.api.list_polls(DEFAULT_SKIP, DEFAULT_LIMIT).await?;
        tracing::info!("Get polls: {} found", polls.len());

        let draft = PollDraft::new(SAMPLE_QUESTION, SAMPLE_OPTIONS);
        let poll = self.api.create_poll(&draft, &token).await?;
        tracing::info!("Create poll: id {}", poll.id);

        let first_option = poll.options.first().ok_or_else(|| {
            PollError::validation("options", format!("Poll {} came back without options", poll.id))
        })?;
        let vote = self
            .api
            .vote_on_poll(poll.id, first_option.id, &token)
            .await?;
        tracing::info!("Vote: id {}", vote.id);

        let results = self.api.get_poll_results(poll.id).await?;
        tracing::info!("Results: {:?}", results.question());

        let delete_status = self.api.delete_poll(poll.id, &token).await?;
        tracing::info!("Delete poll: {}", delete_status);

        tracing::info!("✅ All steps completed");

        Ok(WalkthroughReport {
            username: credentials.username.clone(),
            user_id: user.id,
            polls_listed: polls.len(),
            poll_id: poll.id,
            option_ids: poll.options.iter().map(|o| o.id).collect(),
            vote_id: vote.id,
            results_question: results.question().map(str::to_string),
            delete_status,
            started_at,
        })
    }
}
