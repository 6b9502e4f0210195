use crate::db;
use crate::db::UserStore;
use crate::forms;
use crate::models;
use actix_web::{error, post, web, Responder, Result};

#[tracing::instrument(name = "Add user.")]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::User>,
    store: web::Data<UserStore>,
) -> Result<impl Responder> {
    let user: models::User = form.into_inner().into();
    db::user::insert(store.get_ref(), user)
        .await
        .map(web::Json)
        .map_err(error::ErrorInternalServerError)
}
