use crate::domain::model::{AccessToken, Credentials, Poll, PollDraft, ResultSet, User, Vote};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> Option<&str>;
    fn verbose(&self) -> bool;
    fn json_logs(&self) -> bool;
}

#[async_trait]
pub trait PollApi: Send + Sync {
    async fn register(&self, credentials: &Credentials) -> Result<User>;
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken>;
    async fn list_polls(&self, skip: u32, limit: u32) -> Result<Vec<Poll>>;
    async fn create_poll(&self, draft: &PollDraft, token: &AccessToken) -> Result<Poll>;
    async fn vote_on_poll(&self, poll_id: i64, option_id: i64, token: &AccessToken)
        -> Result<Vote>;
    async fn get_poll_results(&self, poll_id: i64) -> Result<ResultSet>;
    /// Returns the HTTP status code of the successful delete.
    async fn delete_poll(&self, poll_id: i64, token: &AccessToken) -> Result<u16>;
}
