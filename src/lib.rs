/// Basic application code
pub mod app;
/// Admin authentication
pub mod auth;
/// Controllers for HTTP endpoints
pub mod controller;
/// Session token signing
pub mod crypto;
/// Validated user input
pub mod domain;
/// Error enums
pub mod error;
/// Stored records
pub mod model;
/// Submission stores
pub mod repo;
/// Application settings
pub mod settings;
/// Application telemetry for tracing and logging
pub mod telemetry;
/// HTML pages
pub mod templates;
