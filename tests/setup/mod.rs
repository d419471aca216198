use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use user_service::app::resource::UserRequest;
use user_service::domain::entity::User;
use user_service::domain::repository::UserRepository;
use user_service::error::persistence::PersistenceError;

/// In-memory stand-in for the Postgres adapter, with the same save/delete
/// contract: ids are assigned from a sequence on first save and rows are
/// keyed by id.
pub struct MemoryUserRepository {
    rows: Mutex<HashMap<i64, User>>,
    sequence: AtomicI64,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
            sequence: AtomicI64::new(1),
        }
    }

    pub fn stored_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.rows.lock().unwrap().keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, PersistenceError> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, PersistenceError> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn save(&self, mut user: User) -> Result<User, PersistenceError> {
        let id = match user.id {
            Some(id) => id,
            None => self.sequence.fetch_add(1, Ordering::SeqCst),
        };
        user.id = Some(id);
        self.rows.lock().unwrap().insert(id, user.clone());
        Ok(user)
    }

    async fn delete(&self, user: &User) -> Result<(), PersistenceError> {
        if let Some(id) = user.id {
            self.rows.lock().unwrap().remove(&id);
        }
        Ok(())
    }
}

pub fn request(first_name: &str, last_name: &str, email: &str, phone: Option<&str>) -> UserRequest {
    UserRequest {
        first_name: first_name.into(),
        last_name: last_name.into(),
        email: email.into(),
        phone_number: phone.map(Into::into),
    }
}
