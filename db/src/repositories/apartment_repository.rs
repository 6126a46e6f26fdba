use crate::filters::ApartmentFilter;
use crate::models::apartment::{Column, Entity};
use crate::repositories::repository::{Repository, ilike};
use sea_orm::{ColumnTrait, Condition, QueryFilter, Select};

pub struct ApartmentRepository;

impl Repository<Entity, ApartmentFilter> for ApartmentRepository {
    fn apply_filter(query: Select<Entity>, filter: &ApartmentFilter) -> Select<Entity> {
        let mut condition = Condition::all();
        if let Some(q) = filter.query.as_deref().filter(|q| !q.trim().is_empty()) {
            condition = condition.add(
                Condition::any()
                    .add(ilike(Column::Name, q))
                    .add(ilike(Column::Description, q))
                    .add(ilike(Column::Location, q)),
            );
        }
        if let Some(location) = filter.location.as_deref().filter(|l| !l.trim().is_empty()) {
            condition = condition.add(ilike(Column::Location, location));
        }
        if let Some(min_price) = filter.min_price {
            condition = condition.add(Column::PricePerNight.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            condition = condition.add(Column::PricePerNight.lte(max_price));
        }
        if let Some(min_bedrooms) = filter.min_bedrooms {
            condition = condition.add(Column::Bedrooms.gte(min_bedrooms));
        }
        if let Some(bathrooms) = filter.bathrooms {
            condition = condition.add(Column::Bathrooms.eq(bathrooms));
        }
        if let Some(amenity) = filter.amenity.as_deref().filter(|a| !a.trim().is_empty()) {
            // amenities is a JSON array of strings; match one whole element
            condition = condition.add(ilike(Column::Amenities, &format!("\"{}\"", amenity.trim())));
        }
        if let Some(available) = filter.available {
            condition = condition.add(Column::IsAvailable.eq(available));
        }
        query.filter(condition)
    }

    fn sort_column(field: &str) -> Option<Column> {
        match field {
            "id" => Some(Column::Id),
            "name" => Some(Column::Name),
            "location" => Some(Column::Location),
            "price" | "price_per_night" => Some(Column::PricePerNight),
            "bedrooms" => Some(Column::Bedrooms),
            "bathrooms" => Some(Column::Bathrooms),
            "created_at" => Some(Column::CreatedAt),
            _ => None,
        }
    }
}
