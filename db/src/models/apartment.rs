use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A rentable apartment in the `apartments` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "apartments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub location: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    #[sea_orm(column_type = "Json")]
    pub amenities: Amenities,
    pub is_available: bool,
    #[sea_orm(column_type = "Double")]
    pub price_per_night: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Amenity names, persisted as a JSON array.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct Amenities(pub Vec<String>);

impl Amenities {
    /// Trims names, drops blanks and duplicates while keeping the given order.
    pub fn normalized(names: Vec<String>) -> Self {
        let mut out: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.trim();
            if name.is_empty() || out.iter().any(|n| n.eq_ignore_ascii_case(name)) {
                continue;
            }
            out.push(name.to_string());
        }
        Self(out)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        description: &str,
        location: &str,
        bedrooms: i32,
        bathrooms: i32,
        amenities: Vec<String>,
        price_per_night: f64,
    ) -> Result<Self, DbErr> {
        let now = Utc::now();
        ActiveModel {
            name: Set(name.trim().to_owned()),
            description: Set(description.to_owned()),
            location: Set(location.trim().to_owned()),
            bedrooms: Set(bedrooms),
            bathrooms: Set(bathrooms),
            amenities: Set(Amenities::normalized(amenities)),
            is_available: Set(true),
            price_per_night: Set(price_per_night),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Price of a stay of `nights` nights.
    pub fn price_for(&self, nights: i64) -> f64 {
        let total = self.price_per_night * nights as f64;
        (total * 100.0).round() / 100.0
    }
}
