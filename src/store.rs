use std::sync::Arc;

use tokio::sync::Mutex;

/// Process-wide single-slot holder for the current bearer token.
///
/// The store is cloned into every request handler through an axum
/// `Extension` layer; clones share the same slot. The mutex guards each
/// individual `set`/`get`/`clear` call only. There is no atomicity across a
/// read-then-use sequence: a handler may read a token that a concurrent
/// logout clears a moment later, and concurrent logins resolve as last
/// write wins.
#[derive(Clone, Default)]
pub struct TokenStore {
    inner: Arc<Mutex<Option<String>>>,
}

impl TokenStore {
    /// Creates an empty store. No user is logged in until `set` is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the current token with `token`.
    pub async fn set(&self, token: String) {
        let mut slot = self.inner.lock().await;
        *slot = Some(token);
    }

    /// Returns a copy of the current token, or `None` when logged out.
    pub async fn get(&self) -> Option<String> {
        self.inner.lock().await.clone()
    }

    /// Sets the slot back to absent.
    pub async fn clear(&self) {
        let mut slot = self.inner.lock().await;
        *slot = None;
    }
}
