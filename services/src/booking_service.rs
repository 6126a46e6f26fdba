use crate::apartment_service::ApartmentService;
use crate::error::{ServiceError, ServiceResult};
use crate::service::{check_paging, Page};
use chrono::{NaiveDate, Utc};
use db::{
    filters::BookingFilter,
    models::{
        apartment,
        booking::{self, nights_between, ActiveModel, Model},
    },
    repositories::{booking_repository::BookingRepository, Repository},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use util::jwt::Claims;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub apartment_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBooking {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

/// Listing options; `user_id` is only honoured for admins.
#[derive(Debug, Clone, Default)]
pub struct BookingQuery {
    pub user_id: Option<i64>,
    pub apartment_id: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub sort: Option<String>,
}

fn check_dates(check_in: NaiveDate, check_out: NaiveDate) -> ServiceResult<i64> {
    let nights = nights_between(check_in, check_out);
    if nights < 1 {
        return Err(ServiceError::validation("Check-out must be after check-in"));
    }
    Ok(nights)
}

/// Serializes the overlap check and the write per apartment, so two requests
/// for the same dates cannot both pass the check.
static APARTMENT_LOCKS: OnceLock<Mutex<HashMap<i64, Arc<tokio::sync::Mutex<()>>>>> = OnceLock::new();

fn apartment_lock(apartment_id: i64) -> Arc<tokio::sync::Mutex<()>> {
    let locks = APARTMENT_LOCKS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut locks = match locks.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    locks.entry(apartment_id).or_default().clone()
}

fn ensure_available(apartment: &apartment::Model) -> ServiceResult<()> {
    if !apartment.is_available {
        return Err(ServiceError::Conflict("Apartment is not available for booking".into()));
    }
    Ok(())
}

pub struct BookingService;

impl BookingService {
    pub async fn create(db: &DatabaseConnection, actor: &Claims, input: CreateBooking) -> ServiceResult<Model> {
        let nights = check_dates(input.check_in, input.check_out)?;
        let lock = apartment_lock(input.apartment_id);
        let _held = lock.lock().await;

        let apartment = ApartmentService::get(db, input.apartment_id).await?;
        ensure_available(&apartment)?;
        Self::ensure_free(db, apartment.id, input.check_in, input.check_out, None).await?;

        let booking = ActiveModel {
            apartment_id: Set(apartment.id),
            user_id: Set(actor.user_id()),
            check_in: Set(input.check_in),
            check_out: Set(input.check_out),
            total_price: Set(apartment.price_for(nights)),
            booked_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        tracing::info!(
            booking_id = booking.id,
            apartment_id = booking.apartment_id,
            user_id = booking.user_id,
            nights,
            "booking created"
        );
        Ok(booking)
    }

    /// Fetches a booking visible to `actor` (its guest or an admin).
    pub async fn get(db: &DatabaseConnection, actor: &Claims, id: i64) -> ServiceResult<Model> {
        let booking = BookingRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Booking", id))?;
        if !actor.can_access(booking.user_id) {
            return Err(ServiceError::Forbidden("You do not have access to this booking".into()));
        }
        Ok(booking)
    }

    pub async fn list(db: &DatabaseConnection, actor: &Claims, query: BookingQuery) -> ServiceResult<Page<Model>> {
        let (page, per_page) = check_paging(query.page, query.per_page)?;
        if let (Some(from), Some(to)) = (query.from, query.to) {
            if from > to {
                return Err(ServiceError::validation("from must not be after to"));
            }
        }

        let mut filter = BookingFilter::new();
        filter.user_id = if actor.is_admin() { query.user_id } else { Some(actor.user_id()) };
        filter.apartment_id = query.apartment_id;
        filter.from = query.from;
        filter.to = query.to;

        let (items, total) =
            BookingRepository::filter(db, &filter, page, per_page, query.sort.as_deref()).await?;
        Ok(Page { items, page, per_page, total })
    }

    pub async fn for_user(db: &DatabaseConnection, user_id: i64) -> ServiceResult<Vec<Model>> {
        let filter = BookingFilter::new().with_user_id(user_id);
        Ok(BookingRepository::find_all(db, &filter, None).await?)
    }

    /// Moves a booking to new dates, re-checking availability and price.
    pub async fn update(
        db: &DatabaseConnection,
        actor: &Claims,
        id: i64,
        input: UpdateBooking,
    ) -> ServiceResult<Model> {
        let booking = Self::get(db, actor, id).await?;
        let check_in = input.check_in.unwrap_or(booking.check_in);
        let check_out = input.check_out.unwrap_or(booking.check_out);
        let nights = check_dates(check_in, check_out)?;

        let lock = apartment_lock(booking.apartment_id);
        let _held = lock.lock().await;

        let apartment = ApartmentService::get(db, booking.apartment_id).await?;
        ensure_available(&apartment)?;
        Self::ensure_free(db, apartment.id, check_in, check_out, Some(booking.id)).await?;

        let mut active = booking.into_active_model();
        active.check_in = Set(check_in);
        active.check_out = Set(check_out);
        active.total_price = Set(apartment.price_for(nights));
        Ok(active.update(db).await?)
    }

    pub async fn cancel(db: &DatabaseConnection, actor: &Claims, id: i64) -> ServiceResult<()> {
        let booking = Self::get(db, actor, id).await?;
        booking::Entity::delete_by_id(booking.id).exec(db).await?;
        tracing::info!(booking_id = id, by = actor.user_id(), "booking cancelled");
        Ok(())
    }

    async fn ensure_free(
        db: &DatabaseConnection,
        apartment_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
        ignore: Option<i64>,
    ) -> ServiceResult<()> {
        let mut filter = BookingFilter::new()
            .with_apartment_id(apartment_id)
            .overlapping(check_in, check_out);
        if let Some(id) = ignore {
            filter = filter.excluding(id);
        }
        if BookingRepository::exists(db, &filter).await? {
            return Err(ServiceError::Conflict(
                "Apartment is already booked for the selected dates".into(),
            ));
        }
        Ok(())
    }
}
