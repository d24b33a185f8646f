use plant_guide::{Config, State};
use std::{
    net::{Ipv4Addr, SocketAddr},
    process::ExitCode,
};
use tokio::net::TcpListener;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_line_number(true).with_filter(env_filter))
        .init();

    plant_guide::panic::set_hook();

    if let Err(err) = run().await {
        error!("{err:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));

    let listener = TcpListener::bind(addr).await?;
    let state = State::new(&config).await?;

    plant_guide::run(listener, state).await
}
