use actix_web::dev::HttpServiceFactory;
use actix_web::http::header::{self, ContentType};
use actix_web::{delete, get, post, web, HttpResponse, Responder};

use secrecy::Secret;

use serde::Deserialize;
use serde_json::json;

use uuid::Uuid;

use crate::auth::{self, AdminPassword, Administrator, SessionTtl};
use crate::crypto::{SessionToken, SigningKey};
use crate::error::{RestError, RestResult};
use crate::repo::SubmissionStore;
use crate::telemetry::spawn_blocking_with_tracing;
use crate::templates;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    password: Secret<String>,
}

/// Dashboard for a logged-in admin, login form for everyone else
#[get("")]
async fn dashboard(admin: Option<Administrator>) -> impl Responder {
    let page = match admin {
        Some(_) => templates::render_admin_page(),
        None => templates::render_login_page(),
    };
    HttpResponse::Ok().content_type(ContentType::html()).body(page)
}

#[tracing::instrument(name = "Admin login", skip_all)]
#[post("/login")]
async fn login(
    admin_password: web::Data<AdminPassword>,
    signing_key: web::Data<SigningKey>,
    session_ttl: web::Data<SessionTtl>,
    form: web::Form<LoginForm>,
) -> RestResult<impl Responder> {
    let candidate = form.into_inner().password;
    let admin_password = admin_password.into_inner();

    let verified = spawn_blocking_with_tracing(move || admin_password.verify(&candidate)).await?;
    if let Err(e) = verified {
        tracing::warn!(error = %e, "Rejected admin login");
        return Ok(HttpResponse::Unauthorized()
            .content_type(ContentType::html())
            .body(templates::render_login_failed_page()));
    }

    let token = SessionToken::issue(&signing_key, session_ttl.0).map_err(|e| {
        tracing::error!(error.cause_chain = ?e, "Failed to issue session token");
        RestError::InternalError("Session error".into())
    })?;
    tracing::info!("Admin logged in");

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/admin"))
        .cookie(auth::session_cookie(&token, session_ttl.cookie_max_age()))
        .finish())
}

#[post("/logout")]
async fn logout() -> impl Responder {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/admin"))
        .cookie(auth::expired_session_cookie())
        .finish()
}

#[tracing::instrument(name = "List submissions", skip_all)]
#[get("/api/messages")]
async fn messages(
    _admin: Administrator,
    store: web::Data<dyn SubmissionStore>,
) -> RestResult<impl Responder> {
    let store = store.into_inner();
    let records = spawn_blocking_with_tracing(move || store.load_all()).await?;

    Ok(HttpResponse::Ok().json(records))
}

#[tracing::instrument(name = "Toggle submission status", skip(_admin, store))]
#[post("/api/mark/{id}")]
async fn mark(
    _admin: Administrator,
    store: web::Data<dyn SubmissionStore>,
    path: web::Path<String>,
) -> RestResult<impl Responder> {
    if let Some(id) = parse_id(&path) {
        let store = store.into_inner();
        let status = spawn_blocking_with_tracing(move || store.toggle_status(id)).await??;
        match status {
            Some(status) => tracing::info!(%status, "Toggled submission status"),
            None => tracing::debug!("No submission with that id"),
        }
    }

    Ok(ok())
}

#[tracing::instrument(name = "Delete submission", skip(_admin, store))]
#[delete("/api/delete/{id}")]
async fn remove(
    _admin: Administrator,
    store: web::Data<dyn SubmissionStore>,
    path: web::Path<String>,
) -> RestResult<impl Responder> {
    if let Some(id) = parse_id(&path) {
        let store = store.into_inner();
        if spawn_blocking_with_tracing(move || store.delete_by_id(id)).await?? {
            tracing::info!("Deleted submission");
        }
    }

    Ok(ok())
}

/// Ids that are not UUIDs cannot match a record, so they are treated as unknown
fn parse_id(raw: &str) -> Option<Uuid> {
    raw.parse().ok()
}

fn ok() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "ok": true }))
}

/// Admin endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/admin")
        .service(dashboard)
        .service(login)
        .service(logout)
        .service(messages)
        .service(mark)
        .service(remove)
}
