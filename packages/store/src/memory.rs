use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::models::UserRecord;
use crate::source::UserSource;

/// In-memory UserSource for tests.
#[derive(Clone, Debug)]
pub struct MemorySource {
    outcome: Result<Vec<UserRecord>, String>,
    fetches: Arc<AtomicUsize>,
}

impl MemorySource {
    /// A source that always succeeds with `users`.
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self {
            outcome: Ok(users),
            fetches: Arc::default(),
        }
    }

    /// A source that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
            fetches: Arc::default(),
        }
    }

    /// How many times `fetch_users` has been awaited.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl UserSource for MemorySource {
    type Error = String;

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::Directory;
    use crate::source::LoadState;

    fn sample_users() -> Vec<UserRecord> {
        ["Leanne Graham", "Ervin Howell", "Clementine Bauch"]
            .iter()
            .enumerate()
            .map(|(i, name)| UserRecord {
                id: i as u64 + 1,
                name: name.to_string(),
                email: format!("user{}@example.com", i + 1),
                phone: format!("555-000{}", i + 1),
                website: format!("user{}.example", i + 1),
            })
            .collect()
    }

    #[tokio::test]
    async fn test_successful_load_fills_directory() {
        let source = MemorySource::new(sample_users());
        let mut directory = Directory::new();

        let state = directory.finish_load(source.fetch_users().await);

        assert_eq!(state, LoadState::Ready);
        assert_eq!(directory.users().len(), 3);
        let loaded: Vec<UserRecord> = directory.users().iter().cloned().collect();
        assert_eq!(loaded, sample_users());
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_carries_message() {
        let source = MemorySource::failing("Failed to fetch");
        let mut directory = Directory::new();

        let state = directory.finish_load(source.fetch_users().await);

        assert_eq!(state, LoadState::Failed("Failed to fetch".to_string()));
        assert!(directory.users().is_empty());
    }
}
