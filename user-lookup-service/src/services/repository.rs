use crate::models::UserRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Read-only access to user records by identifier.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Single point read. `Ok(None)` means no record has this identifier.
    async fn get_user(&self, user_id: &str) -> Result<Option<UserRecord>, anyhow::Error>;
}

/// In-memory store with a switchable failure, for tests and local runs.
pub struct MockUserStore {
    pub users: Mutex<HashMap<String, UserRecord>>,
    pub failure: Mutex<Option<String>>,
    lookups: AtomicUsize,
}

impl Default for MockUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockUserStore {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            failure: Mutex::new(None),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn insert(&self, user_id: &str, record: UserRecord) -> Result<(), anyhow::Error> {
        self.users
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?
            .insert(user_id.to_string(), record);
        Ok(())
    }

    /// Make every following lookup fail with `message`.
    pub fn fail_with(&self, message: &str) -> Result<(), anyhow::Error> {
        *self
            .failure
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))? =
            Some(message.to_string());
        Ok(())
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn get_user(&self, user_id: &str) -> Result<Option<UserRecord>, anyhow::Error> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = self
            .failure
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?
            .clone()
        {
            return Err(anyhow::anyhow!(message));
        }

        let record = self
            .users
            .lock()
            .map_err(|e| anyhow::anyhow!("Mock store mutex poisoned: {}", e))?
            .get(user_id)
            .cloned();
        Ok(record)
    }
}
