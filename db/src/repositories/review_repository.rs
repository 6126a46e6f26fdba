use crate::filters::ReviewFilter;
use crate::models::review::{Column, Entity};
use crate::repositories::repository::Repository;
use sea_orm::{ColumnTrait, Condition, QueryFilter, Select};

pub struct ReviewRepository;

impl Repository<Entity, ReviewFilter> for ReviewRepository {
    const DEFAULT_SORT: &'static str = "-reviewed_at";

    fn apply_filter(query: Select<Entity>, filter: &ReviewFilter) -> Select<Entity> {
        let mut condition = Condition::all();
        if let Some(apartment_id) = filter.apartment_id {
            condition = condition.add(Column::ApartmentId.eq(apartment_id));
        }
        if let Some(user_id) = filter.user_id {
            condition = condition.add(Column::UserId.eq(user_id));
        }
        query.filter(condition)
    }

    fn sort_column(field: &str) -> Option<Column> {
        match field {
            "id" => Some(Column::Id),
            "rating" => Some(Column::Rating),
            "reviewed_at" => Some(Column::ReviewedAt),
            _ => None,
        }
    }
}
