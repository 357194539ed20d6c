//! This crate provides a way to manage a daily to-do calendar.
//!
//! Task lists are stored on a REST server, one list per day (see [`DateKey`]). A list of "shared default tasks" applies to every day:
//! it is stored once, and merged with the date-specific tasks of every day (see the [`merge`] module).
//!
//! The [`client`] module reads and writes lists from a [`TaskStore`](traits::TaskStore) and handles this merge. \
//! Because the connection to the server may be slow, resolved lists are kept in a [`TaskCache`](cache::TaskCache). \
//! A [`Planner`](planner::Planner) combines both, and is what a calendar front-end should use.

pub mod traits;

mod task;
pub use task::Task;
mod date_key;
pub use date_key::DateKey;
mod error;
pub use error::Error;

pub mod merge;
pub mod store;
pub mod client;
pub mod cache;
pub mod planner;
pub use planner::Planner;
pub mod calendar;
pub mod session;

pub mod config;
pub mod mock_behaviour;
pub mod resource;
pub mod utils;
