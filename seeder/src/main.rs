use crate::seed::{Seeder, run_seeder};
use crate::seeds::{
    apartment::ApartmentSeeder, booking::BookingSeeder, review::ReviewSeeder, user::UserSeeder,
};
use migration::{Migrator, MigratorTrait};

mod seed;
mod seeds;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let db = db::connect().await?;
    Migrator::up(&db, None).await?;

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(ApartmentSeeder), "Apartment"),
        (Box::new(BookingSeeder), "Booking"),
        (Box::new(ReviewSeeder), "Review"),
    ] {
        run_seeder(&*seeder, name, &db).await;
    }
    Ok(())
}
