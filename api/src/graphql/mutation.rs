use crate::graphql::context::{admin, db, relay_error, service_error, viewer};
use crate::graphql::inputs::{AddReviewInput, CreateApartmentInput, CreateBookingInput, UpdateApartmentInput};
use crate::graphql::types::{APARTMENT, Apartment, BOOKING, Booking, REVIEW, Review};
use crate::services::review_proxy::forward_in_background;
use async_graphql::{Context, ID, Object, Result};
use services::{
    apartment_service::ApartmentService,
    booking_service::{BookingService, CreateBooking},
    review_service::{CreateReview, ReviewService},
};
use util::relay::expect_type;

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Admin only.
    async fn create_apartment(&self, ctx: &Context<'_>, input: CreateApartmentInput) -> Result<Apartment> {
        admin(ctx)?;
        let apartment = ApartmentService::create(db(ctx)?, input.into())
            .await
            .map_err(service_error)?;
        Ok(Apartment(apartment))
    }

    /// Admin only. Omitted fields keep their value.
    async fn update_apartment(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateApartmentInput,
    ) -> Result<Apartment> {
        admin(ctx)?;
        let id = expect_type(&id, APARTMENT).map_err(relay_error)?;
        let apartment = ApartmentService::update(db(ctx)?, id, input.into())
            .await
            .map_err(service_error)?;
        Ok(Apartment(apartment))
    }

    /// Admin only. Returns the id of the removed apartment.
    async fn delete_apartment(&self, ctx: &Context<'_>, id: ID) -> Result<ID> {
        admin(ctx)?;
        let apartment_id = expect_type(&id, APARTMENT).map_err(relay_error)?;
        ApartmentService::delete(db(ctx)?, apartment_id)
            .await
            .map_err(service_error)?;
        Ok(id)
    }

    async fn create_booking(&self, ctx: &Context<'_>, input: CreateBookingInput) -> Result<Booking> {
        let claims = viewer(ctx)?;
        let apartment_id = expect_type(&input.apartment_id, APARTMENT).map_err(relay_error)?;
        let booking = BookingService::create(
            db(ctx)?,
            claims,
            CreateBooking { apartment_id, check_in: input.check_in, check_out: input.check_out },
        )
        .await
        .map_err(service_error)?;
        Ok(Booking(booking))
    }

    async fn cancel_booking(&self, ctx: &Context<'_>, id: ID) -> Result<ID> {
        let claims = viewer(ctx)?;
        let booking_id = expect_type(&id, BOOKING).map_err(relay_error)?;
        BookingService::cancel(db(ctx)?, claims, booking_id)
            .await
            .map_err(service_error)?;
        Ok(id)
    }

    async fn add_review(&self, ctx: &Context<'_>, input: AddReviewInput) -> Result<Review> {
        let claims = viewer(ctx)?;
        let apartment_id = expect_type(&input.apartment_id, APARTMENT).map_err(relay_error)?;
        let review = ReviewService::create(
            db(ctx)?,
            CreateReview {
                apartment_id,
                user_id: claims.user_id(),
                rating: input.rating,
                comment: input.comment,
            },
        )
        .await
        .map_err(service_error)?;

        forward_in_background(review.clone());
        Ok(Review(review))
    }

    async fn delete_review(&self, ctx: &Context<'_>, id: ID) -> Result<ID> {
        let claims = viewer(ctx)?;
        let review_id = expect_type(&id, REVIEW).map_err(relay_error)?;
        ReviewService::delete(db(ctx)?, claims, review_id)
            .await
            .map_err(service_error)?;
        Ok(id)
    }
}
