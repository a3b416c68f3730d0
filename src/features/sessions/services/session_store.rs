use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::features::addresses::models::AddressRecord;
use crate::features::sessions::models::{ResultSet, Session};
use crate::shared::constants::SESSION_ENDED_MESSAGE;
use crate::shared::pagination::resolve_global_number;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("{}", SESSION_ENDED_MESSAGE)]
    Expired,

    #[error("Data tidak tersedia")]
    NotAvailable,
}

/// TTL-bounded, per-user cache of search results and selections.
///
/// One mutex guards the whole map. Every operation is a single map lookup
/// under that lock and none of them await anything else while holding it.
/// Expiry is checked on access and by [`SessionStore::sweep`]; both use
/// [`Session::is_expired`] so a session the sweep would drop already reads
/// as absent.
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create or replace the user's session with a fresh result set.
    ///
    /// Clears any previous selection.
    pub async fn save_results(&self, user_id: &str, results: Vec<Arc<AddressRecord>>) -> ResultSet {
        let results: ResultSet = results.into();
        let mut sessions = self.sessions.lock().await;
        sessions.insert(
            user_id.to_string(),
            Session::new(Arc::clone(&results), Instant::now()),
        );
        results
    }

    /// Cached results for the user, or `None` when absent or expired.
    ///
    /// Reading does not extend the session.
    pub async fn get_results(&self, user_id: &str) -> Option<ResultSet> {
        let mut sessions = self.sessions.lock().await;
        Self::live_session(&mut sessions, user_id, self.ttl).map(|s| Arc::clone(&s.results))
    }

    /// Remember the selected record and extend the session.
    ///
    /// Returns `false` (and stores nothing) when the user has no live session.
    pub async fn save_selected_address(&self, user_id: &str, record: Arc<AddressRecord>) -> bool {
        let mut sessions = self.sessions.lock().await;
        Self::store_selection(&mut sessions, user_id, self.ttl, record)
    }

    /// Last selected record, with the same expiry rules as [`Self::get_results`]
    pub async fn get_selected_address(&self, user_id: &str) -> Option<Arc<AddressRecord>> {
        let mut sessions = self.sessions.lock().await;
        Self::live_session(&mut sessions, user_id, self.ttl).and_then(|s| s.selected.clone())
    }

    /// Resolve a 1-based result number against the cached results and store
    /// it as the selection, in one critical section.
    pub async fn select_result(
        &self,
        user_id: &str,
        number: usize,
    ) -> Result<Arc<AddressRecord>, SessionError> {
        let mut sessions = self.sessions.lock().await;
        let session =
            Self::live_session(&mut sessions, user_id, self.ttl).ok_or(SessionError::Expired)?;

        let index = resolve_global_number(number, session.results.len())
            .ok_or(SessionError::NotAvailable)?;
        let record = Arc::clone(&session.results[index]);

        if !Self::store_selection(&mut sessions, user_id, self.ttl, Arc::clone(&record)) {
            return Err(SessionError::Expired);
        }
        Ok(record)
    }

    /// Drop every expired session, returning how many were removed
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now, self.ttl));
        before - sessions.len()
    }

    /// Number of sessions currently held, including expired ones not yet swept
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Set the selection and refresh the session, if it is still live
    fn store_selection(
        sessions: &mut HashMap<String, Session>,
        user_id: &str,
        ttl: Duration,
        record: Arc<AddressRecord>,
    ) -> bool {
        match Self::live_session(sessions, user_id, ttl) {
            Some(session) => {
                session.selected = Some(record);
                session.last_touched = Instant::now();
                true
            }
            None => false,
        }
    }

    fn live_session<'a>(
        sessions: &'a mut HashMap<String, Session>,
        user_id: &str,
        ttl: Duration,
    ) -> Option<&'a mut Session> {
        let expired = sessions
            .get(user_id)
            .map(|session| session.is_expired(Instant::now(), ttl))?;

        if expired {
            sessions.remove(user_id);
            return None;
        }

        sessions.get_mut(user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::sample_directory;

    const TTL: Duration = Duration::from_secs(300);

    fn results() -> Vec<Arc<AddressRecord>> {
        sample_directory().search("provinsi:a")
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_and_get_results() {
        let store = SessionStore::new(TTL);
        assert!(store.get_results("42").await.is_none());

        store.save_results("42", results()).await;
        let cached = store.get_results("42").await.unwrap();
        assert_eq!(cached.len(), 7);
        assert_eq!(cached[0].kelurahan, "Keude Bakongan");

        // Other users are unaffected
        assert!(store.get_results("43").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_expire_without_sweep() {
        let store = SessionStore::new(TTL);
        store.save_results("42", results()).await;

        tokio::time::advance(TTL).await;
        assert!(store.get_results("42").await.is_some());

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(store.get_results("42").await.is_none());
        assert!(store.get_selected_address("42").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reading_results_does_not_refresh() {
        let store = SessionStore::new(TTL);
        store.save_results("42", results()).await;

        tokio::time::advance(Duration::from_secs(200)).await;
        assert!(store.get_results("42").await.is_some());

        tokio::time::advance(Duration::from_secs(101)).await;
        assert!(store.get_results("42").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_selection_refreshes_session() {
        let store = SessionStore::new(TTL);
        let results = results();
        store.save_results("42", results.clone()).await;

        tokio::time::advance(Duration::from_secs(200)).await;
        assert!(store.save_selected_address("42", results[1].clone()).await);

        tokio::time::advance(Duration::from_secs(200)).await;
        let selected = store.get_selected_address("42").await.unwrap();
        assert_eq!(selected.kelurahan, "Lamteumen Barat");
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_result_refreshes_like_save_selected() {
        let store = SessionStore::new(TTL);
        store.save_results("42", results()).await;
        store.save_results("43", results()).await;

        tokio::time::advance(Duration::from_secs(200)).await;
        let by_number = store.select_result("42", 2).await.unwrap();
        assert!(store.save_selected_address("43", by_number.clone()).await);

        // Both sessions were refreshed at 200s and outlive the original TTL
        tokio::time::advance(Duration::from_secs(250)).await;
        assert_eq!(store.get_selected_address("42").await, Some(by_number.clone()));
        assert_eq!(store.get_selected_address("43").await, Some(by_number));

        tokio::time::advance(Duration::from_secs(51)).await;
        assert!(store.get_selected_address("42").await.is_none());
        assert_eq!(
            store.select_result("43", 1).await,
            Err(SessionError::Expired)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_save_selected_without_session_is_noop() {
        let store = SessionStore::new(TTL);
        let record = results().remove(0);

        assert!(!store.save_selected_address("42", record.clone()).await);
        assert!(store.get_selected_address("42").await.is_none());
        assert_eq!(store.len().await, 0);

        store.save_results("42", results()).await;
        tokio::time::advance(TTL + Duration::from_secs(1)).await;
        assert!(!store.save_selected_address("42", record).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_search_clears_selection() {
        let store = SessionStore::new(TTL);
        store.save_results("42", results()).await;
        store.select_result("42", 1).await.unwrap();
        assert!(store.get_selected_address("42").await.is_some());

        store.save_results("42", results()).await;
        assert!(store.get_selected_address("42").await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_result_by_global_number() {
        let store = SessionStore::new(TTL);
        store.save_results("42", results()).await;

        // Number 6 is the first entry of page 2, index 5
        let selected = store.select_result("42", 6).await.unwrap();
        assert_eq!(selected.kelurahan, "Cipedes");
        assert_eq!(
            store.get_selected_address("42").await.unwrap().kelurahan,
            "Cipedes"
        );

        assert_eq!(
            store.select_result("42", 8).await,
            Err(SessionError::NotAvailable)
        );
        assert_eq!(
            store.select_result("42", 0).await,
            Err(SessionError::NotAvailable)
        );
        assert_eq!(
            store.select_result("7", 1).await,
            Err(SessionError::Expired)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_removes_only_expired_sessions() {
        let store = SessionStore::new(TTL);
        store.save_results("old", results()).await;

        tokio::time::advance(Duration::from_secs(200)).await;
        store.save_results("fresh", results()).await;

        tokio::time::advance(Duration::from_secs(150)).await;
        assert_eq!(store.sweep().await, 1);
        assert_eq!(store.len().await, 1);
        assert!(store.get_results("old").await.is_none());
        assert!(store.get_results("fresh").await.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweep_and_reads_agree_at_boundary() {
        let store = SessionStore::new(TTL);
        store.save_results("42", results()).await;

        tokio::time::advance(TTL).await;
        assert_eq!(store.sweep().await, 0);
        assert!(store.get_results("42").await.is_some());

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(store.get_results("42").await.is_none());
        assert_eq!(store.sweep().await, 0);
    }

    #[tokio::test]
    async fn test_concurrent_users() {
        let store = Arc::new(SessionStore::new(TTL));

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    let user = i.to_string();
                    store.save_results(&user, results()).await;
                    store.select_result(&user, (i % 7) + 1).await.unwrap()
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 32);
        let expected = results();
        for i in 0..32usize {
            let selected = store.get_selected_address(&i.to_string()).await.unwrap();
            assert_eq!(selected, expected[i % 7]);
        }
    }
}
