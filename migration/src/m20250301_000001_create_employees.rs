use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::Name).string().not_null())
                    .col(ColumnDef::new(Employees::Address).string())
                    .col(ColumnDef::new(Employees::Extension).string())
                    .col(ColumnDef::new(Employees::WorkEmail).string())
                    .col(ColumnDef::new(Employees::Department).string())
                    .col(ColumnDef::new(Employees::Salary).double())
                    .col(ColumnDef::new(Employees::AdmissionDate).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // NULLs never collide, so employees without a work email are unaffected
        manager
            .create_index(
                Index::create()
                    .name("idx_employees_work_email")
                    .table(Employees::Table)
                    .col(Employees::WorkEmail)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_employees_department")
                    .table(Employees::Table)
                    .col(Employees::Department)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    Name,
    Address,
    Extension,
    WorkEmail,
    Department,
    Salary,
    AdmissionDate,
}
