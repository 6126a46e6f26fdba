use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A support ticket. `user_email` is a snapshot taken from the token when the
/// ticket is opened; the ticket service never reads the booking database.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub user_email: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "ticket_status")]
#[strum(ascii_case_insensitive)]
pub enum TicketStatus {
    #[sea_orm(string_value = "Open")]
    Open,
    #[sea_orm(string_value = "InProgress")]
    InProgress,
    #[sea_orm(string_value = "CustomerReply")]
    CustomerReply,
    #[sea_orm(string_value = "Closed")]
    Closed,
}

impl TicketStatus {
    /// Status after a reply, `None` when the ticket does not accept replies.
    ///
    /// Staff replies move a ticket into `InProgress`; an owner answering staff
    /// moves it into `CustomerReply`. Owner replies to an untouched ticket keep
    /// it `Open`.
    pub fn after_reply(self, by_staff: bool) -> Option<TicketStatus> {
        match (self, by_staff) {
            (TicketStatus::Closed, _) => None,
            (_, true) => Some(TicketStatus::InProgress),
            (TicketStatus::Open, false) => Some(TicketStatus::Open),
            (TicketStatus::InProgress | TicketStatus::CustomerReply, false) => {
                Some(TicketStatus::CustomerReply)
            }
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ticket_reply::Entity")]
    Replies,
}

impl Related<super::ticket_reply::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Replies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}
