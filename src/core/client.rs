use crate::core::{
    AccessToken, Credentials, LoginResponse, Poll, PollApi, PollDraft, ResultSet, User, Vote,
    VoteRequest,
};
use crate::utils::error::{PollError, Result};
use crate::utils::validation::{validate_positive_number, validate_url};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SKIP: u32 = 0;
pub const DEFAULT_LIMIT: u32 = 10;

/// Client for the polling service.
///
/// Holds no session state: tokens are passed in per call and nothing from a
/// response is remembered. Clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct PollClient {
    client: Client,
    base_url: String,
}

impl PollClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        validate_url("base_url", base_url)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Same client, pointed at another server.
    pub fn at(&self, base_url: &str) -> Result<Self> {
        Self::with_client(self.client.clone(), base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request and turns any transport failure or non-2xx status into an error.
    async fn execute(
        &self,
        operation: &'static str,
        subject: &str,
        request: RequestBuilder,
    ) -> Result<Response> {
        tracing::debug!(operation, subject, "📡 Sending {} request", operation);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(operation, subject, error = %e, "❌ {} failed for {}: {}", operation, subject, e);
                return Err(PollError::ApiError(e));
            }
        };

        let status = response.status();
        tracing::debug!(operation, subject, %status, "📡 API response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::error!(
            operation,
            subject,
            %status,
            "❌ {} failed for {}: status {} {}",
            operation,
            subject,
            status,
            body
        );
        Err(PollError::HttpStatusError {
            operation,
            status,
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(
        operation: &'static str,
        subject: &str,
        response: Response,
    ) -> Result<T> {
        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(operation, subject, error = %e, "❌ {}: response body for {} was cut off: {}", operation, subject, e);
            PollError::ApiError(e)
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!(operation, subject, error = %e, "❌ {}: unreadable response for {}: {}", operation, subject, e);
            PollError::SerializationError(e)
        })
    }
}

impl Default for PollClient {
    fn default() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl PollApi for PollClient {
    async fn register(&self, credentials: &Credentials) -> Result<User> {
        credentials.validate()?;
        let subject = format!("user {}", credentials.username);

        let request = self.client.post(self.endpoint("/register")).json(credentials);
        let response = self.execute("register", &subject, request).await?;
        let user: User = Self::decode("register", &subject, response).await?;

        tracing::info!("👤 Registered {} (id: {:?})", credentials.username, user.id);
        Ok(user)
    }

    async fn login(&self, credentials: &Credentials) -> Result<AccessToken> {
        let subject = format!("user {}", credentials.username);

        let request = self.client.post(self.endpoint("/login")).form(credentials);
        let response = self.execute("login", &subject, request).await?;
        let body: LoginResponse = Self::decode("login", &subject, response).await?;

        let token = body.into_token().inspect_err(|_| {
            tracing::error!(operation = "login", subject = %subject, "❌ Login response missing access_token");
        })?;

        tracing::info!("🔑 Logged in as {}", credentials.username);
        Ok(token)
    }

    async fn list_polls(&self, skip: u32, limit: u32) -> Result<Vec<Poll>> {
        validate_positive_number("limit", limit, 1)?;
        let subject = format!("skip={} limit={}", skip, limit);

        let request = self
            .client
            .get(self.endpoint("/polls"))
            .query(&[("skip", skip), ("limit", limit)]);
        let response = self.execute("list_polls", &subject, request).await?;
        let polls: Vec<Poll> = Self::decode("list_polls", &subject, response).await?;

        tracing::info!("📋 Fetched {} polls", polls.len());
        Ok(polls)
    }

    async fn create_poll(&self, draft: &PollDraft, token: &AccessToken) -> Result<Poll> {
        draft.validate()?;
        let subject = format!("question '{}'", draft.question);

        let request = self
            .client
            .post(self.endpoint("/polls"))
            .bearer_auth(token.as_str())
            .json(draft);
        let response = self.execute("create_poll", &subject, request).await?;
        let poll: Poll = Self::decode("create_poll", &subject, response).await?;

        tracing::info!("🗳️ Created poll {} with {} options", poll.id, poll.options.len());
        Ok(poll)
    }

    async fn vote_on_poll(
        &self,
        poll_id: i64,
        option_id: i64,
        token: &AccessToken,
    ) -> Result<Vote> {
        let subject = format!("poll {}", poll_id);

        let request = self
            .client
            .post(self.endpoint(&format!("/polls/{}/vote", poll_id)))
            .bearer_auth(token.as_str())
            .json(&VoteRequest { option_id });
        let response = self.execute("vote_on_poll", &subject, request).await?;
        let vote: Vote = Self::decode("vote_on_poll", &subject, response).await?;

        tracing::info!("✅ Vote {} cast on poll {} for option {}", vote.id, poll_id, option_id);
        Ok(vote)
    }

    async fn get_poll_results(&self, poll_id: i64) -> Result<ResultSet> {
        let subject = format!("poll {}", poll_id);

        let request = self
            .client
            .get(self.endpoint(&format!("/polls/{}/results", poll_id)));
        let response = self.execute("get_poll_results", &subject, request).await?;
        Self::decode("get_poll_results", &subject, response).await
    }

    async fn delete_poll(&self, poll_id: i64, token: &AccessToken) -> Result<u16> {
        let subject = format!("poll {}", poll_id);

        let request = self
            .client
            .delete(self.endpoint(&format!("/polls/{}", poll_id)))
            .bearer_auth(token.as_str());
        let response = self.execute("delete_poll", &subject, request).await?;

        tracing::info!("🗑️ Deleted poll {}", poll_id);
        Ok(response.status().as_u16())
    }
}
