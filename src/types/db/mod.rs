// Database entities - SeaORM models
pub mod employee;
