#[macro_use]
extern crate tracing;

pub mod config;
pub mod error;
mod extractors;
mod handlers;
mod middlewares;
mod state;
pub mod utils;

use crate::{middlewares::middlewares, utils::ShutdownSignal};
pub use config::Config;
use error::Error;
pub use state::*;
use tokio::net::TcpListener;
pub use utils::panic;

pub async fn run<S: StateTrait>(listener: TcpListener, state: S) -> anyhow::Result<()> {
    info!("listening on {}", listener.local_addr()?);

    let routes = handlers::routes::<S>(&state);
    let app = middlewares(state, routes);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(ShutdownSignal::new())
        .await?;

    Ok(())
}
