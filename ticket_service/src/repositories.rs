//! Ticket queries on top of the shared [`Repository`] layer.

use crate::filters::{TicketFilter, TicketReplyFilter};
use crate::models::{ticket, ticket_reply};
use db::repositories::repository::{Repository, ilike};
use sea_orm::{ColumnTrait, Condition, QueryFilter, Select};

pub struct TicketRepository;

impl Repository<ticket::Entity, TicketFilter> for TicketRepository {
    const DEFAULT_SORT: &'static str = "-created_at";

    fn apply_filter(query: Select<ticket::Entity>, filter: &TicketFilter) -> Select<ticket::Entity> {
        use ticket::Column;

        let mut condition = Condition::all();
        if let Some(user_id) = filter.user_id {
            condition = condition.add(Column::UserId.eq(user_id));
        }
        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status));
        }
        if let Some(q) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            condition = condition.add(
                Condition::any()
                    .add(ilike(Column::Subject, q))
                    .add(ilike(Column::Description, q))
                    .add(ilike(Column::UserEmail, q)),
            );
        }
        if let Some(after) = filter.created_after {
            condition = condition.add(Column::CreatedAt.gte(after));
        }
        if let Some(before) = filter.created_before {
            condition = condition.add(Column::CreatedAt.lte(before));
        }
        query.filter(condition)
    }

    fn sort_column(field: &str) -> Option<ticket::Column> {
        use ticket::Column;

        match field {
            "id" => Some(Column::Id),
            "subject" => Some(Column::Subject),
            "status" => Some(Column::Status),
            "created_at" => Some(Column::CreatedAt),
            "updated_at" => Some(Column::UpdatedAt),
            "user_email" => Some(Column::UserEmail),
            _ => None,
        }
    }
}

pub struct TicketReplyRepository;

impl Repository<ticket_reply::Entity, TicketReplyFilter> for TicketReplyRepository {
    const DEFAULT_SORT: &'static str = "created_at";

    fn apply_filter(
        query: Select<ticket_reply::Entity>,
        filter: &TicketReplyFilter,
    ) -> Select<ticket_reply::Entity> {
        match filter.ticket_id {
            Some(ticket_id) => query.filter(ticket_reply::Column::TicketId.eq(ticket_id)),
            None => query,
        }
    }

    fn sort_column(field: &str) -> Option<ticket_reply::Column> {
        match field {
            "id" => Some(ticket_reply::Column::Id),
            "created_at" => Some(ticket_reply::Column::CreatedAt),
            _ => None,
        }
    }
}
