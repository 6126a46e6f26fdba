use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202406010001_create_users::Migration),
            Box::new(migrations::m202406010002_create_apartments::Migration),
            Box::new(migrations::m202406010003_create_bookings::Migration),
            Box::new(migrations::m202406010004_create_reviews::Migration),
        ]
    }
}
