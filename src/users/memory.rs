//! In-memory stores used by router tests.

use std::sync::{
    atomic::{AtomicI64, Ordering},
    Mutex,
};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::users::{
    repo::UserStore,
    repo_types::{DeleteOutcome, User},
};

#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl MemoryUserStore {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(rows)
    }

    async fn create(&self, name: &str) -> anyhow::Result<User> {
        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: name.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        self.rows.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<DeleteOutcome> {
        let mut rows = self.rows.lock().unwrap();
        Ok(match rows.iter().position(|u| u.id == id) {
            Some(idx) => DeleteOutcome::Deleted(rows.remove(idx)),
            None => DeleteOutcome::NotFound,
        })
    }
}

/// Fails every call the way an unreachable database would.
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        anyhow::bail!("connection refused (os error 111)")
    }

    async fn create(&self, _name: &str) -> anyhow::Result<User> {
        anyhow::bail!("connection refused (os error 111)")
    }

    async fn delete(&self, _id: i64) -> anyhow::Result<DeleteOutcome> {
        anyhow::bail!("connection refused (os error 111)")
    }
}

/// Panics on every call.
pub struct PanickingUserStore;

#[async_trait]
impl UserStore for PanickingUserStore {
    async fn list(&self) -> anyhow::Result<Vec<User>> {
        panic!("store exploded")
    }

    async fn create(&self, _name: &str) -> anyhow::Result<User> {
        panic!("store exploded")
    }

    async fn delete(&self, _id: i64) -> anyhow::Result<DeleteOutcome> {
        panic!("store exploded")
    }
}
