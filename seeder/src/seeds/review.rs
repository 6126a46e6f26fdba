use crate::seed::Seeder;
use db::models::{apartment, user};
use sea_orm::{DatabaseConnection, EntityTrait};
use services::review_service::{CreateReview, ReviewService};

pub struct ReviewSeeder;

const COMMENTS: &[&str] = &[
    "Wonderful stay, would book again.",
    "Great location but a little noisy at night.",
    "Exactly as described.",
    "Spotless and comfortable.",
    "Check-in was slow, otherwise fine.",
    "",
];

#[async_trait::async_trait]
impl Seeder for ReviewSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        let apartments = apartment::Entity::find().all(db).await?;
        let users = user::Entity::find().all(db).await?;
        if users.is_empty() {
            anyhow::bail!("reviews need users to be seeded first");
        }

        for apartment in &apartments {
            for _ in 0..fastrand::usize(0..=5) {
                let author = &users[fastrand::usize(..users.len())];
                let review = CreateReview {
                    apartment_id: apartment.id,
                    user_id: author.id,
                    rating: fastrand::i32(2..=5),
                    comment: COMMENTS[fastrand::usize(..COMMENTS.len())].to_string(),
                };
                ReviewService::create(db, review).await?;
            }
        }
        Ok(())
    }
}
