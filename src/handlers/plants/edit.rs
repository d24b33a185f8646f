use super::form::{validate_plant, FormView, PlantField, PlantInput};
use crate::{
    error::{self, Result},
    extractors::PlantForm,
    StateTrait,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use entity::plants;
use sea_orm::{ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, Set};

pub async fn edit_form<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
) -> Result<Json<FormView>> {
    let id = super::parse_id(&id)?;
    let plant = super::find_plant(state.db(), id).await?;

    Ok(Json(FormView::new(plant.into())))
}

pub async fn edit_plant<S: StateTrait>(
    State(state): State<S>,
    Path(id): Path<String>,
    form: PlantForm,
) -> Result<Response> {
    let id = super::parse_id(&id)?;
    let mut plant = PlantInput::from_form(&form);

    if plant.id != Some(id) {
        return Err(error::PLANT_NOT_FOUND);
    }

    let existing = super::find_plant(state.db(), id).await?;
    plant.photo_path.clone_from(&existing.photo_path);

    if let Err(errors) = validate_plant(&plant, &[PlantField::PhotoPath]) {
        debug!("rejected edit of plant {id}: {errors:?}");

        let view = FormView::with_errors(plant, errors);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response());
    }

    if let Some(upload) = form.photo() {
        plant.photo_path = Some(state.photos().save(upload).await?);
    }

    let mut model = existing.into_active_model();
    model.name = Set(plant.name);
    model.scientific_name = Set(plant.scientific_name);
    model.description = Set(plant.description);
    model.care_instructions = Set(plant.care_instructions);
    model.photo_path = Set(plant.photo_path);

    update_plant(state.db(), id, model).await?;

    info!("updated plant {id}");

    Ok(Redirect::to(super::INDEX_PATH).into_response())
}

/// Writes `model` back. A row that vanished since it was loaded is reported as not found.
async fn update_plant<C: ConnectionTrait>(
    db: &C,
    id: i32,
    model: plants::ActiveModel,
) -> Result<plants::Model> {
    match plants::Entity::update(model).exec(db).await {
        Ok(updated) => Ok(updated),
        Err(DbErr::RecordNotUpdated) => {
            if plants::Entity::find_by_id(id).one(db).await?.is_none() {
                warn!("plant {id} was deleted while being edited");
                return Err(error::PLANT_NOT_FOUND);
            }

            Err(DbErr::RecordNotUpdated.into())
        }
        Err(err) => Err(err.into()),
    }
}
