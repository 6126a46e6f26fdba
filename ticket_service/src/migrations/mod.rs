//! Schema of the ticket database, applied by [`TicketMigrator`] at startup.

use sea_orm_migration::prelude::*;

mod m202406150001_create_tickets;
mod m202406150002_create_ticket_replies;

pub struct TicketMigrator;

#[async_trait::async_trait]
impl MigratorTrait for TicketMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m202406150001_create_tickets::Migration),
            Box::new(m202406150002_create_ticket_replies::Migration),
        ]
    }
}
