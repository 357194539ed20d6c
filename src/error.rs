//! Errors returned by this crate

use thiserror::Error;

use crate::DateKey;

/// Errors surfaced by the [`TaskClient`](crate::client::TaskClient) and the [`Planner`](crate::planner::Planner)
#[derive(Error, Debug)]
pub enum Error {
    /// The request was rejected, the server was unreachable, or its reply could not be parsed
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The server replied successfully, but had no task for this key
    #[error("no task is stored for this key")]
    EmptyResult,

    #[error("invalid task: {0}")]
    InvalidTask(String),

    #[error("invalid date key {0:?}")]
    InvalidKey(String),

    #[error("no task at index {index} for {key}")]
    NoSuchTask { key: DateKey, index: usize },

    #[error("session file error: {0}")]
    Session(String),
}

impl Error {
    pub(crate) fn network<E: std::fmt::Display>(err: E) -> Self {
        Error::NetworkFailure(err.to_string())
    }
}
