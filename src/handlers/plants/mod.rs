mod create;
mod delete;
mod edit;
mod form;
mod get;
mod list;

use crate::{
    error::{self, Result},
    StateTrait,
};
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use entity::plants;
use sea_orm::{ConnectionTrait, EntityTrait};

/// Where every successful mutation sends the client.
const INDEX_PATH: &str = "/Plants";

/// Routes for the plant catalogue
///
/// GET  /Plants
/// GET  /Plants/Index
/// GET  /Plants/Details/{id}
/// GET  /Plants/Create
/// POST /Plants/Create
/// GET  /Plants/Edit/{id}
/// POST /Plants/Edit/{id}
/// GET  /Plants/Delete/{id}
/// POST /Plants/Delete/{id}
pub fn routes<S: StateTrait>(state: &S) -> Router<S> {
    Router::new()
        .route("/", get(list::list_plants::<S>))
        .route("/Index", get(list::list_plants::<S>))
        .route("/Details/{id}", get(get::get_plant::<S>))
        .route(
            "/Create",
            get(create::create_form).post(create::create_plant::<S>),
        )
        .route(
            "/Edit/{id}",
            get(edit::edit_form::<S>).post(edit::edit_plant::<S>),
        )
        .route(
            "/Delete/{id}",
            get(delete::delete_confirmation::<S>).post(delete::delete_plant::<S>),
        )
        .layer(DefaultBodyLimit::max(state.max_upload_size()))
}

pub(super) use list::list_plants;

/// Route ids that are not integers cannot match any plant.
fn parse_id(id: &str) -> Result<i32> {
    id.parse().map_err(|_| error::PLANT_NOT_FOUND)
}

async fn find_plant<C: ConnectionTrait>(db: &C, id: i32) -> Result<plants::Model> {
    plants::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or(error::PLANT_NOT_FOUND)
}
