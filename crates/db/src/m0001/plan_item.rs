use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::PlanItem;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(PlanItem::Table)
        .col(
            ColumnDef::new(PlanItem::Id)
                .string()
                .not_null()
                .string_len(36)
                .primary_key(),
        )
        .col(
            ColumnDef::new(PlanItem::PlanId)
                .string()
                .not_null()
                .string_len(36),
        )
        .col(ColumnDef::new(PlanItem::DayOfWeek).integer().not_null())
        .col(
            ColumnDef::new(PlanItem::MealType)
                .string()
                .not_null()
                .string_len(25),
        )
        .col(
            ColumnDef::new(PlanItem::SlotPosition)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(PlanItem::MealId)
                .string()
                .not_null()
                .string_len(36),
        )
        .col(ColumnDef::new(PlanItem::Alt1MealId).string().string_len(36))
        .col(ColumnDef::new(PlanItem::Alt2MealId).string().string_len(36))
        .col(
            ColumnDef::new(PlanItem::IsConsumed)
                .boolean()
                .not_null()
                .default(false),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(PlanItem::Table).to_owned()
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

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_plan_item_n2Wd7c")
        .table(PlanItem::Table)
        .col(PlanItem::PlanId)
        .col(PlanItem::DayOfWeek)
        .col(PlanItem::SlotPosition)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_plan_item_n2Wd7c")
        .table(PlanItem::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
