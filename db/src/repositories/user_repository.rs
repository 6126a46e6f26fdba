use crate::filters::UserFilter;
use crate::models::user::{Column, Entity};
use crate::repositories::repository::{Repository, ilike};
use sea_orm::{ColumnTrait, Condition, QueryFilter, Select};

pub struct UserRepository;

impl Repository<Entity, UserFilter> for UserRepository {
    fn apply_filter(query: Select<Entity>, filter: &UserFilter) -> Select<Entity> {
        let mut condition = Condition::all();
        if let Some(email) = &filter.email {
            condition = condition.add(Column::Email.eq(email.trim().to_lowercase()));
        }
        if let Some(role) = filter.role {
            condition = condition.add(Column::Role.eq(role));
        }
        if let Some(q) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            condition = condition.add(
                Condition::any()
                    .add(ilike(Column::Name, q))
                    .add(ilike(Column::Email, q)),
            );
        }
        query.filter(condition)
    }

    fn sort_column(field: &str) -> Option<Column> {
        match field {
            "id" => Some(Column::Id),
            "name" => Some(Column::Name),
            "email" => Some(Column::Email),
            "role" => Some(Column::Role),
            "created_at" => Some(Column::CreatedAt),
            _ => None,
        }
    }
}
