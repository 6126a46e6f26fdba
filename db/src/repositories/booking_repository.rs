use crate::filters::BookingFilter;
use crate::models::booking::{Column, Entity};
use crate::repositories::repository::Repository;
use sea_orm::{ColumnTrait, Condition, QueryFilter, Select};

pub struct BookingRepository;

impl Repository<Entity, BookingFilter> for BookingRepository {
    const DEFAULT_SORT: &'static str = "check_in";

    fn apply_filter(query: Select<Entity>, filter: &BookingFilter) -> Select<Entity> {
        let mut condition = Condition::all();
        if let Some(user_id) = filter.user_id {
            condition = condition.add(Column::UserId.eq(user_id));
        }
        if let Some(apartment_id) = filter.apartment_id {
            condition = condition.add(Column::ApartmentId.eq(apartment_id));
        }
        // [check_in, check_out) intersects [from, to)
        if let Some(from) = filter.from {
            condition = condition.add(Column::CheckOut.gt(from));
        }
        if let Some(to) = filter.to {
            condition = condition.add(Column::CheckIn.lt(to));
        }
        if let Some(exclude_id) = filter.exclude_id {
            condition = condition.add(Column::Id.ne(exclude_id));
        }
        query.filter(condition)
    }

    fn sort_column(field: &str) -> Option<Column> {
        match field {
            "id" => Some(Column::Id),
            "check_in" => Some(Column::CheckIn),
            "check_out" => Some(Column::CheckOut),
            "total_price" => Some(Column::TotalPrice),
            "booked_at" => Some(Column::BookedAt),
            _ => None,
        }
    }
}
