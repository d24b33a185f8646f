use crate::{error::Result, StateTrait};
use axum::{
    extract::{Path, State},
    Json,
};
use entity::plants;

pub async fn get_plant<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<plants::Model>> {
    let id = super::parse_id(&id)?;
    let plant = super::find_plant(state.db(), id).await?;

    Ok(Json(plant))
}
