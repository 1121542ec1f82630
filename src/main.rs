use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reel_dashboard::{
    config::Config,
    services::{authenticate, GuardOutcome, HttpBackend},
    store::FileSessionStore,
    Dashboard,
};

fn init_logging() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("reel_dashboard=info".parse()?))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env()?;
    let store = FileSessionStore::new(config.session_file());

    let session = match authenticate(&store, &config.login_url) {
        GuardOutcome::Authenticated(session) => session,
        GuardOutcome::Redirect { location } => {
            println!("Not signed in, continue at {}", location);
            return Ok(());
        }
    };

    let backend = HttpBackend::with_timeout(&config.api_base_url, config.request_timeout())?;
    let dashboard = Dashboard::new(Arc::new(backend), session, config.settings());

    dashboard.start().await;

    println!("{}", *dashboard.state().read().await);
    Ok(())
}
