/// Admin login, dashboard and review API
pub mod admin;
/// Public submission form
pub mod submissions;
