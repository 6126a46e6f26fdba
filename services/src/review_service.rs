use crate::error::{ServiceError, ServiceResult};
use crate::service::{ApplyChanges, ToActiveModel};
use chrono::Utc;
use db::{
    filters::ReviewFilter,
    models::{
        apartment,
        review::{self, ActiveModel, Model},
    },
    repositories::{review_repository::ReviewRepository, Repository},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, NotSet, Set};
use serde::{Deserialize, Serialize};
use util::jwt::Claims;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReview {
    #[serde(skip)]
    pub apartment_id: i64,
    #[serde(skip)]
    pub user_id: i64,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[serde(default)]
    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub comment: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReview {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub comment: Option<String>,
}

impl ToActiveModel<review::Entity> for CreateReview {
    fn into_active_model(self) -> ServiceResult<ActiveModel> {
        Ok(ActiveModel {
            id: NotSet,
            apartment_id: Set(self.apartment_id),
            user_id: Set(self.user_id),
            rating: Set(self.rating),
            comment: Set(self.comment.trim().to_owned()),
            reviewed_at: Set(Utc::now()),
        })
    }
}

impl ApplyChanges<review::Entity> for UpdateReview {
    fn apply_changes(self, active: &mut ActiveModel) -> ServiceResult<()> {
        if let Some(rating) = self.rating {
            active.rating = Set(rating);
        }
        if let Some(comment) = self.comment {
            active.comment = Set(comment.trim().to_owned());
        }
        Ok(())
    }
}

/// Average rating (rounded to one decimal) and number of reviews.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingSummary {
    pub average: Option<f64>,
    pub count: u64,
}

impl RatingSummary {
    pub fn of(ratings: &[i32]) -> Self {
        if ratings.is_empty() {
            return Self { average: None, count: 0 };
        }
        let sum: i64 = ratings.iter().map(|r| *r as i64).sum();
        let average = sum as f64 / ratings.len() as f64;
        Self {
            average: Some((average * 10.0).round() / 10.0),
            count: ratings.len() as u64,
        }
    }
}

pub struct ReviewService;

impl ReviewService {
    pub async fn create(db: &DatabaseConnection, input: CreateReview) -> ServiceResult<Model> {
        input.validate()?;
        if apartment::Entity::find_by_id(input.apartment_id).one(db).await?.is_none() {
            return Err(ServiceError::not_found("Apartment", input.apartment_id));
        }
        let review = input.into_active_model()?.insert(db).await?;
        tracing::info!(review_id = review.id, apartment_id = review.apartment_id, "review added");
        Ok(review)
    }

    pub async fn get(db: &DatabaseConnection, id: i64) -> ServiceResult<Model> {
        ReviewRepository::find_by_id(db, id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Review", id))
    }

    pub async fn update(
        db: &DatabaseConnection,
        actor: &Claims,
        id: i64,
        input: UpdateReview,
    ) -> ServiceResult<Model> {
        input.validate()?;
        let review = Self::owned(db, actor, id).await?;
        let mut active = review.into_active_model();
        input.apply_changes(&mut active)?;
        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, actor: &Claims, id: i64) -> ServiceResult<()> {
        let review = Self::owned(db, actor, id).await?;
        review::Entity::delete_by_id(review.id).exec(db).await?;
        Ok(())
    }

    /// Reviews of one apartment, newest first.
    pub async fn for_apartment(db: &DatabaseConnection, apartment_id: i64) -> ServiceResult<Vec<Model>> {
        if apartment::Entity::find_by_id(apartment_id).one(db).await?.is_none() {
            return Err(ServiceError::not_found("Apartment", apartment_id));
        }
        let filter = ReviewFilter::new().with_apartment_id(apartment_id);
        Ok(ReviewRepository::find_all(db, &filter, None).await?)
    }

    pub async fn for_user(db: &DatabaseConnection, user_id: i64) -> ServiceResult<Vec<Model>> {
        let filter = ReviewFilter::new().with_user_id(user_id);
        Ok(ReviewRepository::find_all(db, &filter, None).await?)
    }

    pub async fn rating_summary(db: &DatabaseConnection, apartment_id: i64) -> ServiceResult<RatingSummary> {
        let filter = ReviewFilter::new().with_apartment_id(apartment_id);
        let ratings: Vec<i32> = ReviewRepository::find_all(db, &filter, None)
            .await?
            .into_iter()
            .map(|r| r.rating)
            .collect();
        Ok(RatingSummary::of(&ratings))
    }

    async fn owned(db: &DatabaseConnection, actor: &Claims, id: i64) -> ServiceResult<Model> {
        let review = Self::get(db, id).await?;
        if !actor.can_access(review.user_id) {
            return Err(ServiceError::Forbidden("You can only change your own reviews".into()));
        }
        Ok(review)
    }
}
