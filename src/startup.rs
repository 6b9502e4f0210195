use crate::db::UserStore;
use crate::routes;
use actix_cors::Cors;
use actix_web::{dev::Server, error, http, web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub async fn run(listener: TcpListener, store: UserStore) -> Result<Server, std::io::Error> {
    let store = web::Data::new(store);

    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let msg: String = match err {
            error::JsonPayloadError::Deserialize(err) => format!(
                "{{\"kind\":\"deserialize\",\"line\":{}, \"column\":{}, \"msg\":\"{}\"}}",
                err.line(),
                err.column(),
                err
            ),
            _ => format!("{{\"kind\":\"other\",\"msg\":\"{}\"}}", err),
        };
        error::InternalError::new(msg, http::StatusCode::BAD_REQUEST).into()
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(web::scope("/health_check").service(routes::health_check))
            .service(
                web::scope("/api/users")
                    .service(routes::user::list_handler)
                    .service(routes::user::item_handler)
                    .service(routes::user::add_handler)
                    .service(routes::user::delete_handler),
            )
            .app_data(json_config.clone())
            .app_data(store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
