use async_graphql::{Enum, ID, InputObject};
use chrono::NaiveDate;
use db::filters::ApartmentFilter;
use services::apartment_service::{CreateApartment, UpdateApartment};

#[derive(InputObject, Default)]
pub struct ApartmentFilterInput {
    /// Case-insensitive match on name, description or location.
    pub query: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub amenity: Option<String>,
    pub is_available: Option<bool>,
}

impl From<ApartmentFilterInput> for ApartmentFilter {
    fn from(input: ApartmentFilterInput) -> Self {
        ApartmentFilter {
            query: input.query,
            location: input.location,
            min_price: input.min_price,
            max_price: input.max_price,
            min_bedrooms: input.min_bedrooms,
            bathrooms: input.bathrooms,
            amenity: input.amenity,
            available: input.is_available,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum ApartmentSortField {
    Name,
    Location,
    PricePerNight,
    Bedrooms,
    Bathrooms,
    CreatedAt,
}

impl ApartmentSortField {
    fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Location => "location",
            Self::PricePerNight => "price_per_night",
            Self::Bedrooms => "bedrooms",
            Self::Bathrooms => "bathrooms",
            Self::CreatedAt => "created_at",
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(InputObject)]
pub struct ApartmentSortInput {
    pub field: ApartmentSortField,
    #[graphql(default)]
    pub direction: SortDirection,
}

/// Turns sort inputs into the `field,-field` form the repositories accept.
pub fn sort_param(order: &[ApartmentSortInput]) -> Option<String> {
    if order.is_empty() {
        return None;
    }
    let parts: Vec<String> = order
        .iter()
        .map(|s| match s.direction {
            SortDirection::Asc => s.field.column().to_string(),
            SortDirection::Desc => format!("-{}", s.field.column()),
        })
        .collect();
    Some(parts.join(","))
}

#[derive(InputObject)]
pub struct CreateApartmentInput {
    pub name: String,
    #[graphql(default)]
    pub description: String,
    pub location: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    #[graphql(default)]
    pub amenities: Vec<String>,
    #[graphql(default = true)]
    pub is_available: bool,
    pub price_per_night: f64,
}

impl From<CreateApartmentInput> for CreateApartment {
    fn from(input: CreateApartmentInput) -> Self {
        CreateApartment {
            name: input.name,
            description: input.description,
            location: input.location,
            bedrooms: input.bedrooms,
            bathrooms: input.bathrooms,
            amenities: input.amenities,
            is_available: input.is_available,
            price_per_night: input.price_per_night,
        }
    }
}

#[derive(InputObject, Default)]
pub struct UpdateApartmentInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub amenities: Option<Vec<String>>,
    pub is_available: Option<bool>,
    pub price_per_night: Option<f64>,
}

impl From<UpdateApartmentInput> for UpdateApartment {
    fn from(input: UpdateApartmentInput) -> Self {
        UpdateApartment {
            name: input.name,
            description: input.description,
            location: input.location,
            bedrooms: input.bedrooms,
            bathrooms: input.bathrooms,
            amenities: input.amenities,
            is_available: input.is_available,
            price_per_night: input.price_per_night,
        }
    }
}

#[derive(InputObject)]
pub struct CreateBookingInput {
    /// Global id of the apartment.
    pub apartment_id: ID,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(InputObject)]
pub struct AddReviewInput {
    pub apartment_id: ID,
    pub rating: i32,
    #[graphql(default)]
    pub comment: String,
}
