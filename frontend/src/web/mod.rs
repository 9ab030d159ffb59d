//! Browser adapters
//!
//! Thin wrappers over the browser APIs the app touches: `fetch`,
//! `localStorage`, the History API and the local task executor.

mod http;
pub mod route;
pub mod router;
mod storage;
pub mod task;

pub use http::{FetchTransport, HttpRequest, HttpResponse, HttpTransport};
pub use storage::{BrowserStorage, KeyValueStore, TokenStore};

#[cfg(test)]
pub use http::MockTransport;
#[cfg(test)]
pub use storage::MemoryStorage;
