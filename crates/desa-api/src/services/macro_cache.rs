use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::dto::MacroResponse;

struct CachedMacro {
    response: Arc<MacroResponse>,
    expires_at: DateTime<Utc>,
}

/// Time-bounded cache of the regional overview
pub struct MacroCache {
    ttl: Duration,
    entry: RwLock<Option<CachedMacro>>,
}

impl MacroCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Cached response if it has not expired yet
    pub async fn get(&self) -> Option<Arc<MacroResponse>> {
        self.get_at(Utc::now()).await
    }

    pub async fn put(&self, response: Arc<MacroResponse>) {
        self.put_at(response, Utc::now()).await
    }

    async fn get_at(&self, now: DateTime<Utc>) -> Option<Arc<MacroResponse>> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|cached| now < cached.expires_at)
            .map(|cached| Arc::clone(&cached.response))
    }

    async fn put_at(&self, response: Arc<MacroResponse>, now: DateTime<Utc>) {
        let ttl = chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::MAX);
        let expires_at = now
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        *self.entry.write().await = Some(CachedMacro {
            response,
            expires_at,
        });
    }
}
