use crate::models;
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Vec<models::Role>,
}

impl From<User> for models::User {
    fn from(form: User) -> Self {
        models::User {
            id: form.id,
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            role: form.role,
        }
    }
}
