use sea_orm::entity::prelude::*;

/// SeaORM entity for the employees table (system of record)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub extension: Option<String>,
    #[sea_orm(unique)]
    pub work_email: Option<String>,
    pub department: Option<String>,
    pub salary: Option<f64>,
    pub admission_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
