//! Async wrapper running blocking core calls off the runtime threads.

use crate::client::Client;
use crate::error::SdkResult;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::error::Elapsed;
use tracing::warn;
use vaultwire_engine::TransportError;

/// Shares one [`Client`] between tasks.
///
/// Each call runs on the blocking pool. The core has no interrupt, so a
/// timed-out call keeps running natively; only the wait is abandoned. Avoid
/// timeouts around non-idempotent commands unless a duplicate is acceptable.
#[derive(Debug, Clone)]
pub struct AsyncClient {
    client: Arc<Client>,
}

impl AsyncClient {
    pub fn new(client: Client) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    pub fn from_shared(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<Client> {
        &self.client
    }

    /// Runs `f` against the client on the blocking pool.
    pub async fn call<F, T>(&self, f: F) -> SdkResult<T>
    where
        F: FnOnce(&Client) -> SdkResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let client = Arc::clone(&self.client);
        match tokio::task::spawn_blocking(move || f(&client)).await {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "blocking client call aborted");
                Err(TransportError::Aborted(e.to_string()).into())
            }
        }
    }

    /// Like [`call`](Self::call), but stops waiting after `timeout`.
    pub async fn call_with_timeout<F, T>(
        &self,
        timeout: Duration,
        f: F,
    ) -> Result<SdkResult<T>, Elapsed>
    where
        F: FnOnce(&Client) -> SdkResult<T> + Send + 'static,
        T: Send + 'static,
    {
        tokio::time::timeout(timeout, self.call(f)).await
    }

    pub async fn close(&self) -> SdkResult<()> {
        self.call(|client| client.close()).await
    }
}
