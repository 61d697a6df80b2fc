//! ==============================================================================
//! api.rs - gloo-net client for the rental backend
//! ==============================================================================
//!
//! purpose:
//!     browser implementation of `shared::RentalApi`. every call goes
//!     through `HttpApi::call`, which maps gloo-net failures to
//!     `ApiError::Transport`, non-2xx statuses to `ApiError::Rejected`
//!     (with the body's `detail`) and schema mismatches to `ApiError::Decode`.
//!
//! ==============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use shared::models::{
    Availability, CancelReceipt, Customer, CustomerHistory, Film, MostRentedReport, NewRental,
    Rental, RentalRecord, ServerStatus, Staff, StaffEarningsReport, UnreturnedReport,
};
use shared::{ApiError, Confirm, ConsoleConfig, Endpoint, Method, RentalApi};

fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[derive(Debug, Clone, Copy)]
pub struct HttpApi {
    config: ConsoleConfig,
}

impl HttpApi {
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    fn builder(&self, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.config.endpoint_url(&endpoint.path());
        debug!(method = endpoint.method().as_str(), %url, "request");
        match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
    }

    async fn call<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        self.call_with::<T, ()>(endpoint, None).await
    }

    async fn call_with<T, B>(&self, endpoint: Endpoint, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let builder = self.builder(&endpoint);
        let response = match body {
            Some(body) => builder.json(body).map_err(transport)?.send().await,
            None => builder.send().await,
        }
        .map_err(transport)?;

        let ok = response.ok();
        let status = response.status();
        let text = response.text().await.map_err(transport)?;

        if !ok {
            return Err(ApiError::rejected(status, &text));
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl RentalApi for HttpApi {
    async fn status(&self) -> Result<ServerStatus, ApiError> {
        self.call(Endpoint::Status).await
    }

    async fn customers(&self, limit: usize) -> Result<Vec<Customer>, ApiError> {
        self.call(Endpoint::Customers { limit }).await
    }

    async fn customer_history(&self, customer_id: i32) -> Result<CustomerHistory, ApiError> {
        self.call(Endpoint::CustomerHistory { customer_id }).await
    }

    async fn films(&self, limit: usize) -> Result<Vec<Film>, ApiError> {
        self.call(Endpoint::Films { limit }).await
    }

    async fn availability(&self, film_id: i32) -> Result<Availability, ApiError> {
        self.call(Endpoint::Availability { film_id }).await
    }

    async fn staff(&self) -> Result<Vec<Staff>, ApiError> {
        self.call(Endpoint::Staff).await
    }

    async fn rentals(&self, limit: usize) -> Result<Vec<RentalRecord>, ApiError> {
        self.call(Endpoint::Rentals { limit }).await
    }

    async fn create_rental(&self, rental: &NewRental) -> Result<Rental, ApiError> {
        self.call_with(Endpoint::CreateRental, Some(rental)).await
    }

    async fn return_rental(&self, rental_id: i32) -> Result<Rental, ApiError> {
        self.call(Endpoint::ReturnRental { rental_id }).await
    }

    async fn cancel_rental(&self, rental_id: i32) -> Result<CancelReceipt, ApiError> {
        self.call(Endpoint::CancelRental { rental_id }).await
    }

    async fn unreturned(&self) -> Result<UnreturnedReport, ApiError> {
        self.call(Endpoint::Unreturned).await
    }

    async fn most_rented(&self, limit: usize) -> Result<MostRentedReport, ApiError> {
        self.call(Endpoint::MostRented { limit }).await
    }

    async fn staff_earnings(&self) -> Result<StaffEarningsReport, ApiError> {
        self.call(Endpoint::StaffEarnings).await
    }
}

/// `window.confirm`; a missing window counts as "no"
pub struct BrowserConfirm;

#[async_trait(?Send)]
impl Confirm for BrowserConfirm {
    async fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
