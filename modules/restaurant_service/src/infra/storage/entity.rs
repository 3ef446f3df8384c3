//! SeaORM entities for database tables

/// Menu items table
pub mod menu_item {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "menu_items")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub name: String,

        pub description: Option<String>,

        #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
        pub price: Decimal,

        pub category: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Dining tables (`table` is reserved in SQL, hence the prefix)
pub mod dining_table {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "restaurant_tables")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        /// Unique across tables
        #[sea_orm(unique)]
        pub table_number: i32,

        pub capacity: i32,

        pub occupied: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Orders table
pub mod order {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "orders")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub table_id: i32,

        pub created_at: DateTimeUtc,

        #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
        pub total_amount: Decimal,

        /// Upper-case status name (PENDING, PREPARING, READY, DELIVERED, PAID)
        pub status: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::dining_table::Entity",
            from = "Column::TableId",
            to = "super::dining_table::Column::Id"
        )]
        DiningTable,
        #[sea_orm(has_many = "super::order_line::Entity")]
        OrderLines,
    }

    impl Related<super::order_line::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::OrderLines.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Order lines; deleted together with their order
pub mod order_line {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "order_lines")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,

        pub order_id: i32,

        pub menu_item_id: i32,

        /// Item name at order time
        pub menu_item_name: String,

        /// Item price at order time
        #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
        pub unit_price: Decimal,

        pub quantity: i32,

        pub special_instructions: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::order::Entity",
            from = "Column::OrderId",
            to = "super::order::Column::Id",
            on_delete = "Cascade"
        )]
        Order,
        #[sea_orm(
            belongs_to = "super::menu_item::Entity",
            from = "Column::MenuItemId",
            to = "super::menu_item::Column::Id"
        )]
        MenuItem,
    }

    impl Related<super::order::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Order.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
