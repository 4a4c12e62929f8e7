//! Slack Web API client

mod error;
mod slack;
pub mod types;

pub use error::ClientError;
pub use slack::{SlackClient, SlackClientBuilder, connect};
