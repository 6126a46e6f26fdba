use crate::seed::Seeder;
use chrono::{Days, Utc};
use db::models::{apartment, user};
use sea_orm::{DatabaseConnection, EntityTrait};
use services::booking_service::{BookingService, CreateBooking};
use util::jwt::Claims;

pub struct BookingSeeder;

#[async_trait::async_trait]
impl Seeder for BookingSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        let apartments = apartment::Entity::find().all(db).await?;
        let guests: Vec<_> = user::Entity::find()
            .all(db)
            .await?
            .into_iter()
            .filter(|u| !u.is_admin())
            .collect();
        if apartments.is_empty() || guests.is_empty() {
            anyhow::bail!("bookings need apartments and users to be seeded first");
        }

        let today = Utc::now().date_naive();
        for apartment in &apartments {
            // Stays follow each other with gaps, so they never overlap.
            let mut start = today + Days::new(fastrand::u64(1..10));
            for _ in 0..fastrand::usize(1..=4) {
                let guest = &guests[fastrand::usize(..guests.len())];
                let check_out = start + Days::new(fastrand::u64(1..=7));
                let actor = Claims {
                    sub: guest.id,
                    email: guest.email.clone(),
                    admin: false,
                    exp: 0,
                };
                BookingService::create(
                    db,
                    &actor,
                    CreateBooking { apartment_id: apartment.id, check_in: start, check_out },
                )
                .await?;
                start = check_out + Days::new(fastrand::u64(0..5));
            }
        }
        Ok(())
    }
}
