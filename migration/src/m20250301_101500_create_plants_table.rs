use entity::plants;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(plants::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(plants::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(plants::Column::Name)
                            .string_len(plants::NAME_MAX_LENGTH)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(plants::Column::ScientificName)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(plants::Column::Description).text().null())
                    .col(
                        ColumnDef::new(plants::Column::CareInstructions)
                            .text()
                            .null(),
                    )
                    .col(ColumnDef::new(plants::Column::PhotoPath).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("IX_plants_name")
                    .table(plants::Entity)
                    .col(plants::Column::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(plants::Entity).to_owned())
            .await
    }
}
