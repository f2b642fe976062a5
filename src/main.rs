use std::net::TcpListener;
use std::sync::Arc;

use anyhow::Context;

use voucher_desk::app;
use voucher_desk::auth::{AdminPassword, SessionTtl};
use voucher_desk::crypto::SigningKey;
use voucher_desk::repo::JsonFileStore;
use voucher_desk::settings::Settings;
use voucher_desk::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = telemetry::create_subscriber("info", std::io::stdout);
    telemetry::set_subscriber(subscriber)?;

    let settings = Settings::load()?;

    let store = JsonFileStore::open(settings.store.path()).with_context(|| {
        format!(
            "Failed to open submission store at {}",
            settings.store.path().display()
        )
    })?;
    let admin_password = AdminPassword::new(settings.admin.password())?;
    let signing_key = SigningKey::new(settings.app.secret_key())?;
    let session_ttl = SessionTtl(settings.app.session_ttl());

    let listener = TcpListener::bind(settings.app.addr())?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    app::run(
        listener,
        Arc::new(store),
        admin_password,
        signing_key,
        session_ttl,
    )?
    .await
    .context("Failed to run app")
}
