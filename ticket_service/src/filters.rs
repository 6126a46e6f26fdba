use crate::models::ticket::TicketStatus;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub user_id: Option<i64>,
    pub status: Option<TicketStatus>,
    /// Case-insensitive match on subject, description or user email.
    pub query: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
}

impl TicketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_query(mut self, query: String) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_created_after(mut self, at: DateTime<Utc>) -> Self {
        self.created_after = Some(at);
        self
    }

    pub fn with_created_before(mut self, at: DateTime<Utc>) -> Self {
        self.created_before = Some(at);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct TicketReplyFilter {
    pub ticket_id: Option<i64>,
}
