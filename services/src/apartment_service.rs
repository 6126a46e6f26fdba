use crate::error::{ServiceError, ServiceResult};
use crate::review_service::{RatingSummary, ReviewService};
use crate::service::{check_paging, not_blank, ApplyChanges, Page, ToActiveModel};
use chrono::Utc;
use db::{
    filters::ApartmentFilter,
    models::{
        apartment::{self, ActiveModel, Amenities, Model},
        booking, review,
    },
    repositories::{apartment_repository::ApartmentRepository, Repository},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter, Set,
    TransactionTrait,
};
use serde::Deserialize;
use util::relay::{resolve_window, ConnectionArgs, Window};
use validator::Validate;

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateApartment {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(custom(function = "not_blank", message = "Location is required"))]
    pub location: String,
    #[validate(range(min = 0, message = "Bedrooms must not be negative"))]
    pub bedrooms: i32,
    #[validate(range(min = 0, message = "Bathrooms must not be negative"))]
    pub bathrooms: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default = "default_available")]
    pub is_available: bool,
    #[validate(range(exclusive_min = 0.0, message = "Price per night must be greater than zero"))]
    pub price_per_night: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateApartment {
    #[validate(custom(function = "not_blank", message = "Name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(custom(function = "not_blank", message = "Location must not be empty"))]
    pub location: Option<String>,
    #[validate(range(min = 0, message = "Bedrooms must not be negative"))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0, message = "Bathrooms must not be negative"))]
    pub bathrooms: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub is_available: Option<bool>,
    #[validate(range(exclusive_min = 0.0, message = "Price per night must be greater than zero"))]
    pub price_per_night: Option<f64>,
}

impl ToActiveModel<apartment::Entity> for CreateApartment {
    fn into_active_model(self) -> ServiceResult<ActiveModel> {
        let now = Utc::now();
        Ok(ActiveModel {
            name: Set(self.name.trim().to_owned()),
            description: Set(self.description.trim().to_owned()),
            location: Set(self.location.trim().to_owned()),
            bedrooms: Set(self.bedrooms),
            bathrooms: Set(self.bathrooms),
            amenities: Set(Amenities::normalized(self.amenities)),
            is_available: Set(self.is_available),
            price_per_night: Set(self.price_per_night),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
    }
}

impl ApplyChanges<apartment::Entity> for UpdateApartment {
    fn apply_changes(self, active: &mut ActiveModel) -> ServiceResult<()> {
        if let Some(name) = self.name {
            active.name = Set(name.trim().to_owned());
        }
        if let Some(description) = self.description {
            active.description = Set(description.trim().to_owned());
        }
        if let Some(location) = self.location {
            active.location = Set(location.trim().to_owned());
        }
        if let Some(bedrooms) = self.bedrooms {
            active.bedrooms = Set(bedrooms);
        }
        if let Some(bathrooms) = self.bathrooms {
            active.bathrooms = Set(bathrooms);
        }
        if let Some(amenities) = self.amenities {
            active.amenities = Set(Amenities::normalized(amenities));
        }
        if let Some(is_available) = self.is_available {
            active.is_available = Set(is_available);
        }
        if let Some(price) = self.price_per_night {
            active.price_per_night = Set(price);
        }
        Ok(())
    }
}

/// An apartment with its review statistics.
#[derive(Debug, Clone)]
pub struct ApartmentDetails {
    pub apartment: Model,
    pub rating: RatingSummary,
}

/// A Relay window over the filtered, sorted apartments.
#[derive(Debug, Clone)]
pub struct ApartmentSlice {
    pub items: Vec<Model>,
    pub window: Window,
    pub total: u64,
}

pub struct ApartmentService;

impl ApartmentService {
    pub async fn create(db: &DatabaseConnection, input: CreateApartment) -> ServiceResult<Model> {
        input.validate()?;
        let apartment = input.into_active_model()?.insert(db).await?;
        tracing::info!(apartment_id = apartment.id, "apartment created");
        Ok(apartment)
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> ServiceResult<Model> {
        ApartmentRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Apartment", id))
    }

    pub async fn details(db: &DatabaseConnection, id: i64) -> ServiceResult<ApartmentDetails> {
        let apartment = Self::get(db, id).await?;
        let rating = ReviewService::rating_summary(db, id).await?;
        Ok(ApartmentDetails { apartment, rating })
    }

    pub async fn update(db: &DatabaseConnection, id: i64, input: UpdateApartment) -> ServiceResult<Model> {
        input.validate()?;
        let mut active = Self::get(db, id).await?.into_active_model();
        input.apply_changes(&mut active)?;
        active.updated_at = Set(Utc::now());
        Ok(active.update(db).await?)
    }

    /// Removes the apartment; its bookings and reviews go with it.
    pub async fn delete(db: &DatabaseConnection, id: i64) -> ServiceResult<()> {
        let apartment = Self::get(db, id).await?;
        let txn = db.begin().await?;
        booking::Entity::delete_many()
            .filter(booking::Column::ApartmentId.eq(apartment.id))
            .exec(&txn)
            .await?;
        review::Entity::delete_many()
            .filter(review::Column::ApartmentId.eq(apartment.id))
            .exec(&txn)
            .await?;
        apartment::Entity::delete_by_id(apartment.id).exec(&txn).await?;
        txn.commit().await?;
        tracing::info!(apartment_id = id, "apartment deleted");
        Ok(())
    }

    pub async fn list(
        db: &DatabaseConnection,
        filter: &ApartmentFilter,
        page: Option<u64>,
        per_page: Option<u64>,
        sort: Option<&str>,
    ) -> ServiceResult<Page<Model>> {
        Self::check_filter(filter)?;
        let (page, per_page) = check_paging(page, per_page)?;
        let (items, total) = ApartmentRepository::filter(db, filter, page, per_page, sort).await?;
        Ok(Page { items, page, per_page, total })
    }

    /// Resolves Relay connection arguments against the filtered set.
    pub async fn connection(
        db: &DatabaseConnection,
        filter: &ApartmentFilter,
        sort: Option<&str>,
        args: &ConnectionArgs,
    ) -> ServiceResult<ApartmentSlice> {
        Self::check_filter(filter)?;
        let total = ApartmentRepository::count(db, filter).await?;
        let window = resolve_window(total, args)?;
        let items = ApartmentRepository::slice(db, filter, sort, window.offset, window.limit).await?;
        Ok(ApartmentSlice { items, window, total })
    }

    fn check_filter(filter: &ApartmentFilter) -> ServiceResult<()> {
        if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
            if min > max {
                return Err(ServiceError::validation("min_price must not exceed max_price"));
            }
        }
        Ok(())
    }
}
