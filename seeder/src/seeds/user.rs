use crate::seed::Seeder;
use db::models::user::{Model, UserRole};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use sea_orm::DatabaseConnection;

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        // Fixed admin user
        Model::create(db, "Admin", "admin@example.com", "password123", UserRole::Admin).await?;

        // Fixed normal user
        Model::create(db, "Guest", "user@example.com", "password123", UserRole::User).await?;

        // Random users; duplicate fake emails are skipped
        for _ in 0..10 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            if Model::find_by_email(db, &email).await?.is_some() {
                continue;
            }
            Model::create(db, &name, &email, "password123", UserRole::User).await?;
        }
        Ok(())
    }
}
