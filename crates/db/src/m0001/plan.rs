use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Plan;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Plan::Table)
        .col(
            ColumnDef::new(Plan::Id)
                .string()
                .not_null()
                .string_len(36)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Plan::UserId)
                .string()
                .not_null()
                .string_len(36),
        )
        .col(
            ColumnDef::new(Plan::WeekStart)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(Plan::GoalTag)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(ColumnDef::new(Plan::TariffMode).string().string_len(15))
        .col(ColumnDef::new(Plan::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Plan::Table).to_owned()
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
