use crate::models::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid, // assigned by the caller, not generated here
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Vec<Role>,
}
