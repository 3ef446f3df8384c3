use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestaurantTables::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RestaurantTables::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RestaurantTables::TableNumber)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(RestaurantTables::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(RestaurantTables::Occupied)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RestaurantTables::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RestaurantTables {
    Table,
    Id,
    TableNumber,
    Capacity,
    Occupied,
}
