use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::MealAlternative;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(MealAlternative::Table)
        .col(
            ColumnDef::new(MealAlternative::MealId)
                .string()
                .not_null()
                .string_len(36)
                .primary_key(),
        )
        .col(
            ColumnDef::new(MealAlternative::Alt1MealId)
                .string()
                .string_len(36),
        )
        .col(
            ColumnDef::new(MealAlternative::Alt2MealId)
                .string()
                .string_len(36),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(MealAlternative::Table).to_owned()
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
