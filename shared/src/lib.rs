//! ==============================================================================
//! lib.rs - shared core for the dvd rental console
//! ==============================================================================
//!
//! purpose:
//!     everything the rental console does that does not need a browser.
//!     the dashboard crate only wires these pieces to leptos signals,
//!     gloo-net requests and timers.
//!
//! relationships:
//!     - used by: dashboard (all loaders, actions and view-models)
//!     - talks to: the rental backend, only through the `RentalApi` trait
//!
//! layout:
//!     - models:   json payloads exchanged with the backend
//!     - money:    fixed-point amounts for prices and earnings
//!     - error:    request and form failures
//!     - config:   backend address and page limits
//!     - api:      endpoint catalog plus the `RentalApi` / `Confirm` seams
//!     - views:    active tab state and load generations
//!     - notify:   toast stack
//!     - present:  view-models for every rendered fragment
//!     - workflow: loaders and user actions
//!
//! ==============================================================================

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod money;
pub mod notify;
pub mod present;
pub mod views;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use api::{Confirm, Endpoint, Method, RentalApi};
pub use config::ConsoleConfig;
pub use error::{ApiError, FormError};
pub use money::Amount;
pub use notify::{Notice, NotificationCenter, Severity};
pub use views::{Generations, LoadSlot, LoadTicket, Report, View, ViewState};
