use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{get, HttpResponse, Responder};
use actix_web::{web, App, HttpServer};

use tracing_actix_web::TracingLogger;

use crate::auth::{AdminPassword, SessionTtl};
use crate::controller::{admin, submissions};
use crate::crypto::SigningKey;
use crate::repo::SubmissionStore;

/// Simple health-check endpoint
#[tracing::instrument(name = "Health check")]
#[get("/health_check")]
async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}

/// Run the application on a specified TCP listener
pub fn run(
    listener: TcpListener,
    store: Arc<dyn SubmissionStore>,
    admin_password: AdminPassword,
    signing_key: SigningKey,
    session_ttl: SessionTtl,
) -> anyhow::Result<Server> {
    // Wrap application data
    let store: web::Data<dyn SubmissionStore> = web::Data::from(store);
    let admin_password = web::Data::new(admin_password);
    let signing_key = web::Data::new(signing_key);
    let session_ttl = web::Data::new(session_ttl);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(store.clone())
            .app_data(admin_password.clone())
            .app_data(signing_key.clone())
            .app_data(session_ttl.clone())
            .service(health_check)
            .service(admin::scope())
            .configure(submissions::configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
