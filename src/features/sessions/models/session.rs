use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::features::addresses::models::AddressRecord;

/// Ordered search results shared between the session cache and its readers
pub type ResultSet = Arc<[Arc<AddressRecord>]>;

/// Per-user cache of the last search and the last selected record
#[derive(Debug, Clone)]
pub struct Session {
    pub results: ResultSet,
    pub selected: Option<Arc<AddressRecord>>,
    pub last_touched: Instant,
}

impl Session {
    pub fn new(results: ResultSet, now: Instant) -> Self {
        Self {
            results,
            selected: None,
            last_touched: now,
        }
    }

    /// A session is live while `now - last_touched <= ttl`
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_touched) > ttl
    }
}
