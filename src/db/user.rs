use crate::db::UserStore;
use crate::models;
use uuid::Uuid;

// Duplicate ids are not rejected on insert; lookups and removals take the
// first record in insertion order.

pub async fn fetch_all(store: &UserStore) -> Result<Vec<models::User>, String> {
    let users = store.lock()?;
    Ok(users.clone())
}

pub async fn fetch(store: &UserStore, id: Uuid) -> Result<Option<models::User>, String> {
    let users = store.lock()?;
    Ok(users.iter().find(|user| user.id == id).cloned())
}

pub async fn insert(store: &UserStore, user: models::User) -> Result<models::User, String> {
    let mut users = store.lock()?;
    users.push(user.clone());
    tracing::info!("User {} has been added to the collection", user.id);
    Ok(user)
}

pub async fn delete(store: &UserStore, id: Uuid) -> Result<Option<models::User>, String> {
    let mut users = store.lock()?;
    match users.iter().position(|user| user.id == id) {
        Some(index) => {
            let user = users.remove(index);
            tracing::info!("User {} has been removed from the collection", user.id);
            Ok(Some(user))
        }
        None => Ok(None),
    }
}
