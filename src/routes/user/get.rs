use crate::db;
use crate::db::UserStore;
use crate::helpers::JsonMessage;
use actix_web::{error, get, web, HttpResponse, Responder, Result};
use uuid::Uuid;

#[tracing::instrument(name = "List users.")]
#[get("")]
pub async fn list_handler(store: web::Data<UserStore>) -> Result<impl Responder> {
    db::user::fetch_all(store.get_ref())
        .await
        .map(web::Json)
        .map_err(error::ErrorInternalServerError)
}

#[tracing::instrument(name = "Get user.")]
#[get("/{id}")]
pub async fn item_handler(
    path: web::Path<(Uuid,)>,
    store: web::Data<UserStore>,
) -> Result<impl Responder> {
    let user_id = path.0;
    db::user::fetch(store.get_ref(), user_id)
        .await
        .map(|user| match user {
            Some(user) => HttpResponse::Ok().json(user),
            None => HttpResponse::Ok().json(JsonMessage::new("user not found")),
        })
        .map_err(error::ErrorInternalServerError)
}
