use super::form::{validate_plant, FormView, PlantField, PlantInput};
use crate::{error::Result, extractors::PlantForm, utils::DEFAULT_PHOTO_PATH, StateTrait};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use entity::plants;
use sea_orm::{EntityTrait, Set};

pub async fn create_form() -> Json<FormView> {
    Json(FormView::default())
}

pub async fn create_plant<S: StateTrait>(
    State(state): State<S>,
    form: PlantForm,
) -> Result<Response> {
    let mut plant = PlantInput::from_form(&form);
    plant.id = None;

    if let Err(errors) = validate_plant(&plant, &[PlantField::PhotoPath]) {
        debug!("rejected new plant: {errors:?}");

        let view = FormView::with_errors(plant, errors);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(view)).into_response());
    }

    let photo_path = match form.photo() {
        Some(upload) => state.photos().save(upload).await?,
        None => DEFAULT_PHOTO_PATH.to_owned(),
    };

    let model = plants::ActiveModel {
        name: Set(plant.name),
        scientific_name: Set(plant.scientific_name),
        description: Set(plant.description),
        care_instructions: Set(plant.care_instructions),
        photo_path: Set(Some(photo_path)),
        ..Default::default()
    };

    let res = plants::Entity::insert(model).exec(state.db()).await?;

    info!("created plant {}", res.last_insert_id);

    Ok(Redirect::to(super::INDEX_PATH).into_response())
}
