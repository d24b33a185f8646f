use sea_orm::entity::prelude::*;
use serde::Serialize;

pub const NAME_MAX_LENGTH: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "plants")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub scientific_name: Option<String>,
    pub description: Option<String>,
    pub care_instructions: Option<String>,
    pub photo_path: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
