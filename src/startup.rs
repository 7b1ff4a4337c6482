use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::email_client::EmailClient;
use crate::routes;

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    max_payload_bytes: usize,
) -> Result<Server, std::io::Error> {
    let email_client = Data::new(email_client);
    let payload_config = web::PayloadConfig::new(max_payload_bytes);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check::health_check))
            .route("/api/send-email", web::post().to(routes::send_email::send_email))
            .app_data(email_client.clone())
            .app_data(payload_config.clone())
    })
        .listen(listener)?
        .run();
    Ok(server)
}
