// # Flash Notices
//
// One-shot notices shown after a successful mutation. The handler that
// performs the mutation stashes a message and redirects with the returned
// token; the page that renders next takes the message by token, which
// removes it, so a reload of the same URL shows nothing.
//
// Entries that are never collected (the client dropped the redirect, say)
// are pruned once their time-to-live passes.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use tokio::sync::RwLock;

use crate::config::{FlashConfig, MAX_FLASH_TTL_SECS};

/// Length of a flash token in characters
const TOKEN_LEN: usize = 16;

/// A stashed notice awaiting collection
#[derive(Debug, Clone)]
struct FlashEntry {
    message: String,
    created_at: DateTime<Utc>,
}

/// In-memory store of pending flash notices, keyed by random token
///
/// Cloning is cheap and clones share the same entries, so one store can be
/// handed to every request handler.
#[derive(Debug, Clone)]
pub struct FlashStore {
    entries: Arc<RwLock<HashMap<String, FlashEntry>>>,
    ttl: Duration,
}

impl FlashStore {
    /// Create a store with the configured time-to-live
    ///
    /// `ttl_secs` is clamped to the range [`FlashConfig::validate`]
    /// accepts, so an unvalidated config still yields a working store
    /// rather than a panic inside the duration conversion.
    pub fn new(config: &FlashConfig) -> Self {
        let ttl_secs = config.ttl_secs.clamp(1, MAX_FLASH_TTL_SECS);
        Self::with_ttl(Duration::seconds(ttl_secs as i64))
    }

    /// Create a store with an explicit time-to-live
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Stash a notice and return the token that redeems it
    pub async fn stash(&self, message: impl Into<String>) -> String {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LEN)
            .map(char::from)
            .collect();

        let mut entries = self.entries.write().await;
        Self::prune(&mut entries, self.ttl);
        entries.insert(
            token.clone(),
            FlashEntry {
                message: message.into(),
                created_at: Utc::now(),
            },
        );

        token
    }

    /// Redeem a token, removing the notice
    ///
    /// Returns `None` for unknown, already-collected, and expired tokens.
    pub async fn take(&self, token: &str) -> Option<String> {
        let mut entries = self.entries.write().await;
        Self::prune(&mut entries, self.ttl);
        entries.remove(token).map(|e| e.message)
    }

    /// Number of notices currently pending
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// True when no notices are pending
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drop entries older than the time-to-live
    fn prune(entries: &mut HashMap<String, FlashEntry>, ttl: Duration) {
        let now = Utc::now();
        entries.retain(|_, e| now - e.created_at <= ttl);
    }
}
