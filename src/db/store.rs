use crate::models;
use crate::models::Role;
use std::sync::{Mutex, MutexGuard};
use uuid::uuid;

/// Process-wide user collection. One lock guards every operation so
/// concurrent requests observe the same effectively serial semantics.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Vec<models::User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::with_users(Vec::new())
    }

    pub fn with_users(users: Vec<models::User>) -> Self {
        UserStore {
            users: Mutex::new(users),
        }
    }

    /// The three records present at process start.
    pub fn seeded() -> Self {
        Self::with_users(vec![
            models::User {
                id: uuid!("caad4458-72e3-4703-adce-c9fe80ffe723"),
                first_name: "Ana".to_string(),
                last_name: "Maria".to_string(),
                email: "email@gmail.com".to_string(),
                role: vec![Role::Role1],
            },
            models::User {
                id: uuid!("cbc7d7e4-89a9-4bcb-ac77-564ee3c466c5"),
                first_name: "Cynthia".to_string(),
                last_name: "Zanoni".to_string(),
                email: "email@gmail.com".to_string(),
                role: vec![Role::Role2],
            },
            models::User {
                id: uuid!("dacbc6b5-d88a-4ec7-a8c1-2312282bb347"),
                first_name: "Camila".to_string(),
                last_name: "Silva".to_string(),
                email: "email@gmail.com".to_string(),
                role: vec![Role::Role3],
            },
        ])
    }

    pub(crate) fn lock(&self) -> Result<MutexGuard<'_, Vec<models::User>>, String> {
        self.users.lock().map_err(|err| {
            tracing::error!("Failed to lock the user collection: {:?}", err);
            "".to_string()
        })
    }
}
