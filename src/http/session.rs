//! Closable session handle over a pooled `reqwest::Client`.

use crate::error::HttpError;

use async_lock::RwLock;
use reqwest::Client;
use std::sync::Arc;

/// The one connection pool behind a client instance.
///
/// Clones share the same underlying state, so closing any clone closes them all.
#[derive(Debug, Clone)]
pub struct Session {
    inner: Arc<RwLock<Option<Client>>>,
}

impl Session {
    pub fn open(client: Client) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(client))),
        }
    }

    /// Get a handle to the pool for one request.
    ///
    /// The lock is only held while cloning the handle, so concurrent requests
    /// never wait on each other here.
    pub async fn client(&self) -> Result<Client, HttpError> {
        self.inner.read().await.clone().ok_or(HttpError::Closed)
    }

    /// Release the pool. Returns `false` if it was already released.
    pub async fn close(&self) -> bool {
        self.inner.write().await.take().is_some()
    }

    pub async fn is_closed(&self) -> bool {
        self.inner.read().await.is_none()
    }
}
