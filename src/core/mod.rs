pub mod client;

pub use crate::domain::model::{
    AccessToken, Credentials, LoginResponse, Poll, PollDraft, PollOption, ResultSet, User, Vote,
    VoteRequest,
};
pub use crate::domain::ports::{ConfigProvider, PollApi};
pub use crate::utils::error::Result;
