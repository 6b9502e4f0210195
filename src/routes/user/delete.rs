use crate::db;
use crate::db::UserStore;
use crate::helpers::JsonMessage;
use actix_web::{delete, error, web, HttpResponse, Responder, Result};
use uuid::Uuid;

#[tracing::instrument(name = "Delete user.")]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(Uuid,)>,
    store: web::Data<UserStore>,
) -> Result<impl Responder> {
    let user_id = path.0;
    db::user::delete(store.get_ref(), user_id)
        .await
        .map(|removed| match removed {
            Some(_) => HttpResponse::Ok().json(JsonMessage::new("user removed")),
            None => HttpResponse::Ok().json(JsonMessage::new("user not found")),
        })
        .map_err(error::ErrorInternalServerError)
}
