use crate::seed::Seeder;
use db::models::apartment::Model;
use sea_orm::DatabaseConnection;

pub struct ApartmentSeeder;

type ApartmentRow = (&'static str, &'static str, &'static str, i32, i32, &'static [&'static str], f64);

const APARTMENTS: &[ApartmentRow] = &[
    ("Sea View Loft", "Bright loft above the harbour", "Lisbon", 2, 1, &["WiFi", "Balcony", "Kitchen"], 120.0),
    ("Old Town Studio", "Compact studio next to the cathedral", "Porto", 1, 1, &["WiFi"], 65.0),
    ("Canal House", "Three floors on a quiet canal", "Amsterdam", 3, 2, &["WiFi", "Bikes", "Washer"], 210.0),
    ("Alpine Chalet", "Wooden chalet with mountain views", "Innsbruck", 4, 2, &["Fireplace", "Parking", "Sauna"], 260.0),
    ("Garden Flat", "Ground floor flat with a private garden", "Berlin", 2, 1, &["WiFi", "Garden", "Pets allowed"], 95.0),
    ("Rooftop Penthouse", "Top floor with a terrace over the city", "Barcelona", 3, 3, &["WiFi", "Terrace", "Air conditioning"], 340.0),
    ("Harbour Cabin", "Small cabin by the fishing port", "Bergen", 1, 1, &["Parking"], 80.0),
    ("Vineyard Cottage", "Stone cottage among the vines", "Bordeaux", 2, 2, &["Kitchen", "Parking", "Pool"], 150.0),
];

#[async_trait::async_trait]
impl Seeder for ApartmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> anyhow::Result<()> {
        for (name, description, location, bedrooms, bathrooms, amenities, price) in APARTMENTS {
            let amenities = amenities.iter().map(|a| a.to_string()).collect();
            Model::create(db, name, description, location, *bedrooms, *bathrooms, amenities, *price).await?;
        }
        Ok(())
    }
}
