mod admin_guard;
mod password;

pub use admin_guard::{
    expired_session_cookie, session_cookie, Administrator, SessionTtl, SESSION_COOKIE,
};
pub use password::AdminPassword;
