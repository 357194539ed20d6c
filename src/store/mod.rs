//! Implementations of [`TaskStore`](crate::traits::TaskStore)

pub mod http_store;
#[cfg(any(test, feature = "local_store_mocks"))]
pub mod in_memory;

pub use http_store::HttpTaskStore;
#[cfg(any(test, feature = "local_store_mocks"))]
pub use in_memory::InMemoryStore;
