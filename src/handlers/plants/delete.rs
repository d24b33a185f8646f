use crate::{error::Result, StateTrait};
use axum::{
    extract::{Path, State},
    response::Redirect,
    Json,
};
use entity::plants;
use sea_orm::EntityTrait;

pub async fn delete_confirmation<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<plants::Model>> {
    let id = super::parse_id(&id)?;
    let plant = super::find_plant(state.db(), id).await?;

    Ok(Json(plant))
}

/// Deleting a plant that does not exist is not an error.
pub async fn delete_plant<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Redirect> {
    let Ok(id) = super::parse_id(&id) else {
        return Ok(Redirect::to(super::INDEX_PATH));
    };

    let res = plants::Entity::delete_by_id(id).exec(state.db()).await?;

    if res.rows_affected > 0 {
        info!("deleted plant {id}");
    }

    Ok(Redirect::to(super::INDEX_PATH))
}
