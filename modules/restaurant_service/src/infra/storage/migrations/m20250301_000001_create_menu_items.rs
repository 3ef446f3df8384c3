use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(MenuItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(MenuItems::Name).string().not_null())
                    .col(ColumnDef::new(MenuItems::Description).text())
                    .col(ColumnDef::new(MenuItems::Price).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(MenuItems::Category).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menu_items_category")
                    .table(MenuItems::Table)
                    .col(MenuItems::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MenuItems {
    Table,
    Id,
    Name,
    Description,
    Price,
    Category,
}
