use crate::models::user::UserRole;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct ApartmentFilter {
    pub query: Option<String>,
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub amenity: Option<String>,
    pub available: Option<bool>,
}

impl ApartmentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: String) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_min_bedrooms(mut self, min_bedrooms: i32) -> Self {
        self.min_bedrooms = Some(min_bedrooms);
        self
    }

    pub fn with_bathrooms(mut self, bathrooms: i32) -> Self {
        self.bathrooms = Some(bathrooms);
        self
    }

    pub fn with_amenity(mut self, amenity: String) -> Self {
        self.amenity = Some(amenity);
        self
    }
}

/// `from`/`to` select bookings whose stay intersects `[from, to)`.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub user_id: Option<i64>,
    pub apartment_id: Option<i64>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub exclude_id: Option<i64>,
}

impl BookingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_apartment_id(mut self, apartment_id: i64) -> Self {
        self.apartment_id = Some(apartment_id);
        self
    }

    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }

    /// Restricts to stays sharing at least one night with `[check_in, check_out)`.
    pub fn overlapping(self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.with_from(check_in).with_to(check_out)
    }

    pub fn excluding(mut self, id: i64) -> Self {
        self.exclude_id = Some(id);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReviewFilter {
    pub apartment_id: Option<i64>,
    pub user_id: Option<i64>,
}

impl ReviewFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_apartment_id(mut self, apartment_id: i64) -> Self {
        self.apartment_id = Some(apartment_id);
        self
    }

    pub fn with_user_id(mut self, user_id: i64) -> Self {
        self.user_id = Some(user_id);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub query: Option<String>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_email(mut self, email: String) -> Self {
        self.email = Some(email);
        self
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn with_query(mut self, query: String) -> Self {
        self.query = Some(query);
        self
    }
}
