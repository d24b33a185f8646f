use crate::{
    error::Result,
    utils::{contains_ignore_ascii_case, contains_ignore_case},
    StateTrait,
};
use axum::{
    extract::{Query, State},
    Json,
};
use entity::plants;
use sea_orm::{Condition, EntityTrait, QueryFilter, QueryOrder, Select};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    search: Option<String>,
    care_filter: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    search: Option<String>,
    care_filter: Option<String>,
    plants: Vec<plants::Model>,
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// SQLite can only fold ASCII, other terms are matched after loading.
fn filters_in_sql(term: &&str) -> bool {
    term.is_ascii()
}

/// Plants matching both filters, ordered by name. Absent filters match everything.
///
/// Terms with non-ASCII characters are left out here and applied by `matches`.
pub fn build_query(search: Option<&str>, care_filter: Option<&str>) -> Select<plants::Entity> {
    let mut query = plants::Entity::find();

    if let Some(search) = search.filter(filters_in_sql) {
        query = query.filter(
            Condition::any()
                .add(contains_ignore_ascii_case(plants::Column::Name, search))
                .add(contains_ignore_ascii_case(plants::Column::ScientificName, search))
                .add(contains_ignore_ascii_case(plants::Column::Description, search)),
        );
    }

    if let Some(care_filter) = care_filter.filter(filters_in_sql) {
        query = query.filter(contains_ignore_ascii_case(
            plants::Column::CareInstructions,
            care_filter,
        ));
    }

    query.order_by_asc(plants::Column::Name)
}

/// Whether `plant` matches both filters, ignoring case by Unicode rules.
fn matches(plant: &plants::Model, search: Option<&str>, care_filter: Option<&str>) -> bool {
    let search_matches = search.map_or(true, |search| {
        contains_ignore_case(Some(plant.name.as_str()), search)
            || contains_ignore_case(plant.scientific_name.as_deref(), search)
            || contains_ignore_case(plant.description.as_deref(), search)
    });

    let care_matches = care_filter.map_or(true, |care_filter| {
        contains_ignore_case(plant.care_instructions.as_deref(), care_filter)
    });

    search_matches && care_matches
}

pub async fn list_plants<S: StateTrait>(
    State(state): State<S>,
    Query(filter): Query<Filter>,
) -> Result<Json<Response>> {
    let search = normalize(filter.search);
    let care_filter = normalize(filter.care_filter);

    let mut plants = build_query(search.as_deref(), care_filter.as_deref())
        .all(state.db())
        .await?;

    plants.retain(|plant| matches(plant, search.as_deref(), care_filter.as_deref()));

    Ok(Json(Response {
        search,
        care_filter,
        plants,
    }))
}
