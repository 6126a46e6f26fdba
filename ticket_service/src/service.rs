use crate::filters::{TicketFilter, TicketReplyFilter};
use crate::models::{
    ticket::{self, TicketStatus},
    ticket_reply,
};
use crate::repositories::{TicketReplyRepository, TicketRepository};
use chrono::{DateTime, Utc};
use db::repositories::Repository;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set, TransactionTrait,
};
use serde::Deserialize;
use services::{
    ServiceError, ServiceResult,
    service::{Page, ToActiveModel, check_paging, not_blank},
};
use util::jwt::Claims;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTicket {
    #[validate(
        custom(function = "not_blank", message = "Subject is required"),
        length(max = 200, message = "Subject must be at most 200 characters")
    )]
    pub subject: String,
    #[validate(
        custom(function = "not_blank", message = "Description is required"),
        length(max = 5000, message = "Description must be at most 5000 characters")
    )]
    pub description: String,
    #[serde(skip)]
    pub user_id: i64,
    #[serde(skip)]
    pub user_email: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReply {
    #[validate(
        custom(function = "not_blank", message = "Message is required"),
        length(max = 5000, message = "Message must be at most 5000 characters")
    )]
    pub message: String,
}

impl ToActiveModel<ticket::Entity> for CreateTicket {
    fn into_active_model(self) -> ServiceResult<ticket::ActiveModel> {
        let now = Utc::now();
        Ok(ticket::ActiveModel {
            user_id: Set(self.user_id),
            user_email: Set(self.user_email),
            subject: Set(self.subject.trim().to_owned()),
            description: Set(self.description.trim().to_owned()),
            status: Set(TicketStatus::Open),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
    }
}

/// Listing options; `user_id` is only honoured for admins.
#[derive(Debug, Clone, Default)]
pub struct TicketQuery {
    pub user_id: Option<i64>,
    pub status: Option<TicketStatus>,
    pub query: Option<String>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub sort: Option<String>,
}

pub struct TicketService;

impl TicketService {
    pub async fn create(
        db: &DatabaseConnection,
        actor: &Claims,
        mut input: CreateTicket,
    ) -> ServiceResult<ticket::Model> {
        input.validate()?;
        input.user_id = actor.user_id();
        input.user_email = actor.email.clone();

        let ticket = input.into_active_model()?.insert(db).await?;
        tracing::info!(ticket_id = ticket.id, user_id = ticket.user_id, "ticket opened");
        Ok(ticket)
    }

    pub async fn list(
        db: &DatabaseConnection,
        actor: &Claims,
        query: TicketQuery,
    ) -> ServiceResult<Page<ticket::Model>> {
        let (page, per_page) = check_paging(query.page, query.per_page)?;

        let user_id = if actor.is_admin() { query.user_id } else { Some(actor.user_id()) };
        let filter = TicketFilter {
            user_id,
            status: query.status,
            query: query.query,
            created_after: query.created_after,
            created_before: query.created_before,
        };

        let (items, total) =
            TicketRepository::filter(db, &filter, page, per_page, query.sort.as_deref()).await?;
        Ok(Page { items, page, per_page, total })
    }

    /// The ticket if the caller owns it or is an admin.
    pub async fn get(db: &DatabaseConnection, actor: &Claims, id: i64) -> ServiceResult<ticket::Model> {
        let ticket = TicketRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Ticket", id))?;
        if !actor.can_access(ticket.user_id) {
            return Err(ServiceError::Forbidden("You do not have access to this ticket".into()));
        }
        Ok(ticket)
    }

    /// Replies of a ticket, oldest first.
    pub async fn replies(db: &DatabaseConnection, ticket_id: i64) -> ServiceResult<Vec<ticket_reply::Model>> {
        let filter = TicketReplyFilter { ticket_id: Some(ticket_id) };
        Ok(TicketReplyRepository::find_all(db, &filter, None).await?)
    }

    /// Stores a reply and moves the ticket to its next status.
    pub async fn reply(
        db: &DatabaseConnection,
        actor: &Claims,
        ticket_id: i64,
        input: CreateReply,
    ) -> ServiceResult<(ticket_reply::Model, TicketStatus)> {
        input.validate()?;
        let ticket = Self::get(db, actor, ticket_id).await?;
        let next = ticket
            .status
            .after_reply(actor.is_admin())
            .ok_or_else(|| ServiceError::Conflict("Cannot reply to a closed ticket".into()))?;

        let now = Utc::now();
        let txn = db.begin().await?;

        let reply = ticket_reply::ActiveModel {
            ticket_id: Set(ticket.id),
            replier_id: Set(actor.user_id()),
            replier_email: Set(actor.email.clone()),
            message: Set(input.message.trim().to_owned()),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut active = ticket.into_active_model();
        active.status = Set(next);
        active.updated_at = Set(now);
        active.update(&txn).await?;

        txn.commit().await?;
        tracing::info!(ticket_id, replier = actor.user_id(), status = %next, "ticket reply added");
        Ok((reply, next))
    }

    pub async fn close(db: &DatabaseConnection, actor: &Claims, id: i64) -> ServiceResult<ticket::Model> {
        let ticket = Self::get(db, actor, id).await?;
        Self::set_status(db, ticket, TicketStatus::Closed).await
    }

    /// Reopens a ticket. Admin only.
    pub async fn reopen(db: &DatabaseConnection, actor: &Claims, id: i64) -> ServiceResult<ticket::Model> {
        if !actor.is_admin() {
            return Err(ServiceError::Forbidden("Admin access required".into()));
        }
        let ticket = Self::get(db, actor, id).await?;
        Self::set_status(db, ticket, TicketStatus::Open).await
    }

    /// Removes a ticket and its replies. Admin only.
    pub async fn delete(db: &DatabaseConnection, actor: &Claims, id: i64) -> ServiceResult<()> {
        if !actor.is_admin() {
            return Err(ServiceError::Forbidden("Admin access required".into()));
        }
        let ticket = Self::get(db, actor, id).await?;
        ticket::Entity::delete_by_id(ticket.id).exec(db).await?;
        tracing::info!(ticket_id = id, "ticket deleted");
        Ok(())
    }

    async fn set_status(
        db: &DatabaseConnection,
        ticket: ticket::Model,
        status: TicketStatus,
    ) -> ServiceResult<ticket::Model> {
        let mut active = ticket.into_active_model();
        active.status = Set(status);
        active.updated_at = Set(Utc::now());
        Ok(active.update(db).await?)
    }
}
