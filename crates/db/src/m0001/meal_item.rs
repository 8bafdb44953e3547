use sea_query::{ColumnDef, Index, Table, TableCreateStatement, TableDropStatement};

use crate::table::MealItem;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MealItem::Table)
        .col(
            ColumnDef::new(MealItem::MealId)
                .string()
                .not_null()
                .string_len(36),
        )
        .col(
            ColumnDef::new(MealItem::IngredientId)
                .string()
                .not_null()
                .string_len(36),
        )
        .col(ColumnDef::new(MealItem::Grams).double().not_null())
        .primary_key(
            Index::create()
                .col(MealItem::MealId)
                .col(MealItem::IngredientId),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MealItem::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
