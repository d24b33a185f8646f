mod plants;

use crate::{error, state::StateTrait, Error};
use axum::{
    extract::State,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    routing::get,
    Router,
};
use sea_orm::ConnectionTrait;
use tower_http::services::ServeDir;

pub fn routes<S: StateTrait>(state: &S) -> Router<S> {
    let public_files = ServeDir::new(state.photos().public_dir())
        .call_fallback_on_method_not_allowed(true)
        .fallback(not_found.into_service());

    Router::new()
        .route("/", get(plants::list_plants::<S>))
        .nest("/Plants", plants::routes::<S>(state))
        .route("/livez", get(liveness::<S>))
        .route("/readyz", get(|| async {}))
        .fallback_service(public_files)
}

async fn liveness<S: StateTrait>(State(state): State<S>) -> StatusCode {
    if let Err(err) = state.db().execute_unprepared("select 1").await {
        error!("liveness probe failed: {err}");
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    StatusCode::OK
}

async fn not_found() -> Error<'static> {
    error::NOT_FOUND
}
