use std::future::{ready, Ready};

use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::{dev, web, FromRequest, HttpRequest};

use anyhow::Context;

use crate::crypto::{SessionToken, SigningKey};
use crate::error::RestError;

pub const SESSION_COOKIE: &str = "admin_session";

/// Lifetime of a login, shared as application data
#[derive(Debug, Clone, Copy)]
pub struct SessionTtl(pub chrono::Duration);

impl SessionTtl {
    pub fn cookie_max_age(&self) -> time::Duration {
        time::Duration::seconds(self.0.num_seconds())
    }
}

/// Request guard for admin-only endpoints
///
/// Extracting it succeeds only when the request carries a valid, unexpired
/// session cookie. Use `Option<Administrator>` to branch instead of rejecting.
#[derive(Debug)]
pub struct Administrator;

impl FromRequest for Administrator {
    type Error = RestError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut dev::Payload) -> Self::Future {
        ready(authenticate(req))
    }
}

fn authenticate(req: &HttpRequest) -> Result<Administrator, RestError> {
    // NOTE: Must be registered with the application at startup
    let key = req
        .app_data::<web::Data<SigningKey>>()
        .context("SigningKey not registered for application")?;

    let cookie = req.cookie(SESSION_COOKIE).ok_or(RestError::Unauthorized)?;
    let token: SessionToken = cookie
        .value()
        .parse()
        .map_err(|_| RestError::Unauthorized)?;

    match token.verify(key) {
        Ok(_) => Ok(Administrator),
        Err(e) => {
            tracing::debug!(error = %e, "Rejected admin session");
            Err(RestError::Unauthorized)
        }
    }
}

/// Cookie carrying a freshly issued session token
pub fn session_cookie(token: &SessionToken, max_age: time::Duration) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.as_ref().to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(max_age)
        .finish()
}

/// Cookie that makes the browser drop the session
pub fn expired_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SESSION_COOKIE, "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}
