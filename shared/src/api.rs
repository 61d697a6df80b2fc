//! ==============================================================================
//! api.rs - backend endpoints and the client seam
//! ==============================================================================
//!
//! purpose:
//!     `Endpoint` names every call the console makes. `RentalApi` is the
//!     seam the workflows are written against: the dashboard implements
//!     it with gloo-net, tests implement it with a recording mock.
//!
//! ==============================================================================

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{
    Availability, CancelReceipt, Customer, CustomerHistory, Film, MostRentedReport, NewRental,
    Rental, RentalRecord, ServerStatus, Staff, StaffEarningsReport, UnreturnedReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// one backend call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// connectivity probe
    Status,
    Customers { limit: usize },
    CustomerHistory { customer_id: i32 },
    Films { limit: usize },
    Availability { film_id: i32 },
    Staff,
    Rentals { limit: usize },
    CreateRental,
    ReturnRental { rental_id: i32 },
    CancelRental { rental_id: i32 },
    Unreturned,
    MostRented { limit: usize },
    StaffEarnings,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::CreateRental => Method::Post,
            Endpoint::ReturnRental { .. } => Method::Put,
            Endpoint::CancelRental { .. } => Method::Delete,
            _ => Method::Get,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Status => "/".to_string(),
            Endpoint::Customers { limit } => format!("/customers?limit={}", limit),
            Endpoint::CustomerHistory { customer_id } => format!("/reports/customer/{}", customer_id),
            Endpoint::Films { limit } => format!("/films?limit={}", limit),
            Endpoint::Availability { film_id } => format!("/films/{}/availability", film_id),
            Endpoint::Staff => "/staff".to_string(),
            Endpoint::Rentals { limit } => format!("/rentals?limit={}", limit),
            Endpoint::CreateRental => "/rentals".to_string(),
            Endpoint::ReturnRental { rental_id } => format!("/rentals/{}/return", rental_id),
            Endpoint::CancelRental { rental_id } => format!("/rentals/{}", rental_id),
            Endpoint::Unreturned => "/reports/unreturned".to_string(),
            Endpoint::MostRented { limit } => format!("/reports/most-rented?limit={}", limit),
            Endpoint::StaffEarnings => "/reports/staff-earnings".to_string(),
        }
    }
}

/// the rental backend, as seen by the console
///
/// futures are not `Send`: the browser client holds `JsValue`s across awaits.
#[async_trait(?Send)]
pub trait RentalApi {
    async fn status(&self) -> Result<ServerStatus, ApiError>;

    async fn customers(&self, limit: usize) -> Result<Vec<Customer>, ApiError>;

    async fn customer_history(&self, customer_id: i32) -> Result<CustomerHistory, ApiError>;

    async fn films(&self, limit: usize) -> Result<Vec<Film>, ApiError>;

    async fn availability(&self, film_id: i32) -> Result<Availability, ApiError>;

    async fn staff(&self) -> Result<Vec<Staff>, ApiError>;

    async fn rentals(&self, limit: usize) -> Result<Vec<RentalRecord>, ApiError>;

    async fn create_rental(&self, rental: &NewRental) -> Result<Rental, ApiError>;

    async fn return_rental(&self, rental_id: i32) -> Result<Rental, ApiError>;

    async fn cancel_rental(&self, rental_id: i32) -> Result<CancelReceipt, ApiError>;

    async fn unreturned(&self) -> Result<UnreturnedReport, ApiError>;

    async fn most_rented(&self, limit: usize) -> Result<MostRentedReport, ApiError>;

    async fn staff_earnings(&self) -> Result<StaffEarningsReport, ApiError>;
}

/// yes/no confirmation before a destructive action
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, message: &str) -> bool;
}

// ==============================================================================
// tests
// ==============================================================================
