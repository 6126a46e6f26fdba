use crate::graphql::context::{db, service_error};
use async_graphql::{Context, ID, Object, Result, SimpleObject, Union};
use chrono::{DateTime, NaiveDate, Utc};
use db::models::{apartment, booking, review, user};
use services::{
    apartment_service::ApartmentService, review_service::ReviewService, user_service::UserService,
};
use util::relay::encode_global_id;

pub const APARTMENT: &str = "Apartment";
pub const BOOKING: &str = "Booking";
pub const REVIEW: &str = "Review";
pub const USER: &str = "User";

#[derive(Clone)]
pub struct Apartment(pub apartment::Model);

#[Object]
impl Apartment {
    /// Relay global id.
    async fn id(&self) -> ID {
        ID(encode_global_id(APARTMENT, self.0.id))
    }

    async fn database_id(&self) -> i64 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn description(&self) -> &str {
        &self.0.description
    }

    async fn location(&self) -> &str {
        &self.0.location
    }

    async fn bedrooms(&self) -> i32 {
        self.0.bedrooms
    }

    async fn bathrooms(&self) -> i32 {
        self.0.bathrooms
    }

    async fn amenities(&self) -> Vec<String> {
        self.0.amenities.0.clone()
    }

    async fn is_available(&self) -> bool {
        self.0.is_available
    }

    async fn price_per_night(&self) -> f64 {
        self.0.price_per_night
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }

    async fn updated_at(&self) -> DateTime<Utc> {
        self.0.updated_at
    }

    /// Newest first.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let reviews = ReviewService::for_apartment(db(ctx)?, self.0.id)
            .await
            .map_err(service_error)?;
        Ok(reviews.into_iter().map(Review).collect())
    }

    /// Mean rating rounded to one decimal, null without reviews.
    async fn average_rating(&self, ctx: &Context<'_>) -> Result<Option<f64>> {
        let summary = ReviewService::rating_summary(db(ctx)?, self.0.id)
            .await
            .map_err(service_error)?;
        Ok(summary.average)
    }

    async fn review_count(&self, ctx: &Context<'_>) -> Result<u64> {
        let summary = ReviewService::rating_summary(db(ctx)?, self.0.id)
            .await
            .map_err(service_error)?;
        Ok(summary.count)
    }
}

#[derive(Clone)]
pub struct Booking(pub booking::Model);

#[Object]
impl Booking {
    async fn id(&self) -> ID {
        ID(encode_global_id(BOOKING, self.0.id))
    }

    async fn database_id(&self) -> i64 {
        self.0.id
    }

    async fn check_in(&self) -> NaiveDate {
        self.0.check_in
    }

    async fn check_out(&self) -> NaiveDate {
        self.0.check_out
    }

    async fn nights(&self) -> i64 {
        self.0.nights()
    }

    async fn total_price(&self) -> f64 {
        self.0.total_price
    }

    async fn booked_at(&self) -> DateTime<Utc> {
        self.0.booked_at
    }

    async fn user_id(&self) -> ID {
        ID(encode_global_id(USER, self.0.user_id))
    }

    async fn apartment(&self, ctx: &Context<'_>) -> Result<Apartment> {
        let apartment = ApartmentService::get(db(ctx)?, self.0.apartment_id)
            .await
            .map_err(service_error)?;
        Ok(Apartment(apartment))
    }
}

#[derive(Clone)]
pub struct Review(pub review::Model);

#[Object]
impl Review {
    async fn id(&self) -> ID {
        ID(encode_global_id(REVIEW, self.0.id))
    }

    async fn database_id(&self) -> i64 {
        self.0.id
    }

    async fn rating(&self) -> i32 {
        self.0.rating
    }

    async fn comment(&self) -> &str {
        &self.0.comment
    }

    async fn reviewed_at(&self) -> DateTime<Utc> {
        self.0.reviewed_at
    }

    async fn user_id(&self) -> ID {
        ID(encode_global_id(USER, self.0.user_id))
    }

    /// Display name of the reviewer, null if the account is gone.
    async fn author_name(&self, ctx: &Context<'_>) -> Result<Option<String>> {
        match UserService::get(db(ctx)?, self.0.user_id).await {
            Ok(user) => Ok(Some(user.name)),
            Err(services::ServiceError::NotFound(_)) => Ok(None),
            Err(e) => Err(service_error(e)),
        }
    }

    async fn apartment(&self, ctx: &Context<'_>) -> Result<Apartment> {
        let apartment = ApartmentService::get(db(ctx)?, self.0.apartment_id)
            .await
            .map_err(service_error)?;
        Ok(Apartment(apartment))
    }
}

#[derive(Clone)]
pub struct User(pub user::Model);

#[Object]
impl User {
    async fn id(&self) -> ID {
        ID(encode_global_id(USER, self.0.id))
    }

    async fn database_id(&self) -> i64 {
        self.0.id
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    /// `Admin` or `User`.
    async fn role(&self) -> String {
        self.0.role.to_string()
    }

    async fn created_at(&self) -> DateTime<Utc> {
        self.0.created_at
    }
}

/// Anything addressable by a Relay global id.
#[derive(Union)]
pub enum Node {
    Apartment(Apartment),
    Booking(Booking),
    Review(Review),
    User(User),
}

#[derive(SimpleObject)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

#[derive(SimpleObject)]
pub struct ApartmentEdge {
    pub cursor: String,
    pub node: Apartment,
}

#[derive(SimpleObject)]
pub struct ApartmentConnection {
    pub edges: Vec<ApartmentEdge>,
    pub nodes: Vec<Apartment>,
    pub page_info: PageInfo,
    pub total_count: u64,
}
