//! ==============================================================================
//! models.rs - backend payloads
//! ==============================================================================
//!
//! purpose:
//!     serde mirrors of the json the rental backend sends and accepts.
//!     timestamps stay as strings here; `present` formats them.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

use crate::money::Amount;

// ==============================================================================
// catalog types
// ==============================================================================

/// response of `GET /`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerStatus {
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Customer {
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Film {
    pub film_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_year: Option<i32>,
    pub rental_rate: Amount,
    /// days a copy may be kept at the base rate
    pub rental_duration: i32,
}

/// copy counts for one film
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Availability {
    pub film_id: i32,
    pub total_copies: u32,
    #[serde(default)]
    pub rented_copies: u32,
    pub available_copies: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Staff {
    pub staff_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

// ==============================================================================
// rental types
// ==============================================================================

/// body of `POST /rentals`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRental {
    pub customer_id: i32,
    pub film_id: i32,
    pub staff_id: i32,
    pub days: u32,
}

/// rental row returned by create and return
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rental {
    pub rental_id: i32,
    pub rental_date: String,
    pub customer_id: i32,
    pub staff_id: i32,
    #[serde(default)]
    pub return_date: Option<String>,
}

/// response of `DELETE /rentals/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CancelReceipt {
    pub message: String,
    pub rental_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RentalStatus {
    #[serde(rename = "ACTIVO")]
    Active,
    #[serde(rename = "DEVUELTO")]
    Returned,
    #[serde(other)]
    Unknown,
}

/// entry of `GET /rentals`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RentalRecord {
    pub rental_id: i32,
    pub customer_name: String,
    pub film_title: String,
    pub rental_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    pub status: RentalStatus,
}

// ==============================================================================
// report types
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UnreturnedReport {
    #[serde(default)]
    pub total_unreturned: usize,
    #[serde(default)]
    pub rentals: Vec<UnreturnedRental>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnreturnedRental {
    pub rental_id: i32,
    pub film_title: String,
    pub customer_name: String,
    pub rental_date: String,
    pub expected_return_date: String,
    #[serde(default)]
    pub days_rented: i64,
    /// days past the expected return date, computed by the backend
    #[serde(default)]
    pub days_late: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MostRentedReport {
    #[serde(default)]
    pub total_films: usize,
    #[serde(default)]
    pub films: Vec<FilmPopularity>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FilmPopularity {
    pub film_id: i32,
    pub title: String,
    #[serde(default)]
    pub release_year: Option<i32>,
    pub rental_count: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StaffEarningsReport {
    #[serde(default)]
    pub total_staff: usize,
    #[serde(default)]
    pub staff: Vec<StaffEarnings>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StaffEarnings {
    pub staff_id: i32,
    pub staff_name: String,
    pub total_transactions: u64,
    pub total_earnings: Amount,
}

/// response of `GET /reports/customer/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomerHistory {
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    #[serde(default)]
    pub total_rentals: usize,
    #[serde(default)]
    pub rentals: Vec<CustomerRental>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CustomerRental {
    pub rental_id: i32,
    pub film_title: String,
    pub rental_date: String,
    #[serde(default)]
    pub return_date: Option<String>,
    pub status: RentalStatus,
    pub amount: Amount,
}

// ==============================================================================
// tests
// ==============================================================================
