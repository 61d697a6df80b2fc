//! ==============================================================================
//! workflow.rs - loaders and user actions
//! ==============================================================================
//!
//! purpose:
//!     every sequence of backend calls the console performs, written
//!     against `RentalApi` so it runs the same in the browser and in tests.
//!
//! failure model:
//!     - view loaders (catalog, rent, return) fail with a single warning notice
//!     - report loaders fail with the `ApiError`; the caller shows the
//!       inline report error in that region only
//!     - actions always produce a notice: success, backend `detail`, or the
//!       generic connectivity warning
//!     nothing is retried; a new user action starts over.
//!
//! ==============================================================================

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, warn};

use crate::api::{Confirm, RentalApi};
use crate::config::ConsoleConfig;
use crate::error::{ApiError, FormError};
use crate::models::{Availability, Film, NewRental, RentalStatus};
use crate::notify::Notice;
use crate::present::{
    rank_films, CatalogCard, EarningsTable, HistoryView, RankedFilm, ReturnRow, SelectOption,
    SummaryStats,
};

pub const MSG_INCOMPLETE_FORM: &str = "⚠️ Por favor complete todos los campos";
pub const MSG_RENTAL_CREATED: &str = "✅ Renta registrada exitosamente!";
pub const MSG_RENTAL_RETURNED: &str = "✅ DVD devuelto exitosamente!";
pub const MSG_RENTAL_CANCELLED: &str = "✅ Renta cancelada exitosamente!";
pub const MSG_ACTION_OFFLINE: &str = "❌ Error al conectar con el servidor";
pub const MSG_RENT_LOAD_FAILED: &str = "⚠️ Error al conectar con el servidor";
pub const MSG_RETURN_LOAD_FAILED: &str = "⚠️ Error al cargar rentas activas";
pub const MSG_CATALOG_LOAD_FAILED: &str = "⚠️ Error al cargar catálogo";
pub const MSG_BACKEND_UNREACHABLE: &str = "⚠️ No se pudo conectar con el servidor";
pub const MSG_INVALID_CUSTOMER: &str = "⚠️ Ingrese un ID de cliente válido";

pub const CONFIRM_RETURN: &str = "¿Confirmar devolución del DVD?\n\nEl DVD será marcado como devuelto.";

pub fn confirm_cancel_message(rental_id: i32) -> String {
    format!(
        "¿Cancelar la renta #{}?\n\nSe eliminarán la renta y su pago asociado.",
        rental_id
    )
}

/// result of a user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub notice: Notice,
    pub succeeded: bool,
}

impl Outcome {
    fn success(message: &str) -> Self {
        Self { notice: Notice::success(message), succeeded: true }
    }

    fn failure(error: &ApiError) -> Self {
        let notice = match error.detail() {
            Some(detail) => Notice::warning(format!("❌ Error: {}", detail)),
            None => Notice::warning(MSG_ACTION_OFFLINE),
        };
        Self { notice, succeeded: false }
    }
}

// ==============================================================================
// startup
// ==============================================================================

/// hit `GET /`; a notice only comes back when the backend is unreachable
pub async fn probe<A: RentalApi + ?Sized>(api: &A) -> Option<Notice> {
    match api.status().await {
        Ok(status) => {
            info!(server = %status.message, status = %status.status, "backend connected");
            None
        }
        Err(e) => {
            warn!(error = %e, "backend probe failed");
            Some(Notice::warning(MSG_BACKEND_UNREACHABLE))
        }
    }
}

// ==============================================================================
// availability
// ==============================================================================

/// films plus their copy counts, fetched with bounded concurrency in film order
async fn films_with_availability<A: RentalApi + ?Sized>(
    api: &A,
    config: &ConsoleConfig,
) -> Result<Vec<(Film, Availability)>, ApiError> {
    let films = api.films(config.film_limit).await?;
    debug!(films = films.len(), "fetching availability");

    stream::iter(films)
        .map(move |film| async move {
            let availability = api.availability(film.film_id).await?;
            Ok::<_, ApiError>((film, availability))
        })
        .buffered(config.availability_concurrency.max(1))
        .try_collect()
        .await
}

// ==============================================================================
// catalog
// ==============================================================================

pub async fn load_catalog<A: RentalApi + ?Sized>(
    api: &A,
    config: &ConsoleConfig,
) -> Result<Vec<CatalogCard>, Notice> {
    match films_with_availability(api, config).await {
        Ok(films) => Ok(films
            .iter()
            .map(|(film, availability)| CatalogCard::new(film, availability))
            .collect()),
        Err(e) => {
            warn!(error = %e, "catalog load failed");
            Err(Notice::warning(MSG_CATALOG_LOAD_FAILED))
        }
    }
}

// ==============================================================================
// rent
// ==============================================================================

/// select contents; `None` means "not fetched, keep what is shown"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RentOptions {
    pub customers: Option<Vec<SelectOption>>,
    pub films: Option<Vec<SelectOption>>,
    pub staff: Option<Vec<SelectOption>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RentLoad {
    pub options: RentOptions,
    pub failure: Option<Notice>,
}

/// customers, then films with availability, then staff.
/// the first failure stops the remaining stages.
pub async fn load_rent_options<A: RentalApi + ?Sized>(api: &A, config: &ConsoleConfig) -> RentLoad {
    let mut load = RentLoad::default();
    if let Err(e) = fill_rent_options(api, config, &mut load.options).await {
        warn!(error = %e, "rent form load failed");
        load.failure = Some(Notice::warning(MSG_RENT_LOAD_FAILED));
    }
    load
}

async fn fill_rent_options<A: RentalApi + ?Sized>(
    api: &A,
    config: &ConsoleConfig,
    options: &mut RentOptions,
) -> Result<(), ApiError> {
    let customers = api.customers(config.customer_limit).await?;
    options.customers = Some(customers.iter().map(SelectOption::customer).collect());

    let films = films_with_availability(api, config).await?;
    options.films = Some(films.iter().map(|(f, a)| SelectOption::film(f, a)).collect());

    let staff = api.staff().await?;
    options.staff = Some(staff.iter().map(SelectOption::staff).collect());
    Ok(())
}

/// raw select/input values of the rent form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalForm {
    pub customer: String,
    pub film: String,
    pub staff: String,
    pub days: String,
}

impl RentalForm {
    pub fn new(default_days: u32) -> Self {
        Self {
            customer: String::new(),
            film: String::new(),
            staff: String::new(),
            days: default_days.to_string(),
        }
    }

    /// clear the selections and put the duration back to its default
    pub fn reset(&mut self, default_days: u32) {
        *self = Self::new(default_days);
    }

    /// a select whose options were rebuilt shows its placeholder again,
    /// so its value goes back to "nothing selected"
    pub fn clear_replaced(&mut self, options: &RentOptions) {
        if options.customers.is_some() {
            self.customer.clear();
        }
        if options.films.is_some() {
            self.film.clear();
        }
        if options.staff.is_some() {
            self.staff.clear();
        }
    }

    pub fn validate(&self, default_days: u32) -> Result<NewRental, FormError> {
        let customer = parse_id(&self.customer);
        let film = parse_id(&self.film);
        let staff = parse_id(&self.staff);

        let missing: Vec<&'static str> = [("customer", customer), ("film", film), ("staff", staff)]
            .into_iter()
            .filter(|(_, id)| id.is_none())
            .map(|(name, _)| name)
            .collect();

        match (customer, film, staff) {
            (Some(customer_id), Some(film_id), Some(staff_id)) => Ok(NewRental {
                customer_id,
                film_id,
                staff_id,
                days: self
                    .days
                    .trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|d| *d > 0)
                    .unwrap_or(default_days),
            }),
            _ => Err(FormError::Incomplete(missing)),
        }
    }
}

/// positive integer ids only; blanks and zero mean "nothing selected"
fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse::<i32>().ok().filter(|id| *id > 0)
}

/// validate locally, then `POST /rentals`.
/// on success the caller resets the form.
pub async fn submit_rental<A: RentalApi + ?Sized>(
    api: &A,
    form: &RentalForm,
    config: &ConsoleConfig,
) -> Outcome {
    let rental = match form.validate(config.default_rental_days) {
        Ok(rental) => rental,
        Err(e) => {
            debug!(error = %e, "rental form rejected locally");
            return Outcome { notice: Notice::warning(MSG_INCOMPLETE_FORM), succeeded: false };
        }
    };

    match api.create_rental(&rental).await {
        Ok(created) => {
            info!(rental_id = created.rental_id, film_id = rental.film_id, "rental created");
            Outcome::success(MSG_RENTAL_CREATED)
        }
        Err(e) => {
            warn!(error = %e, "rental creation failed");
            Outcome::failure(&e)
        }
    }
}

// ==============================================================================
// return
// ==============================================================================

pub async fn load_active_rentals<A: RentalApi + ?Sized>(api: &A) -> Result<Vec<ReturnRow>, Notice> {
    match api.unreturned().await {
        Ok(report) => Ok(report.rentals.iter().map(ReturnRow::new).collect()),
        Err(e) => {
            warn!(error = %e, "active rentals load failed");
            Err(Notice::warning(MSG_RETURN_LOAD_FAILED))
        }
    }
}

/// `None` when the user declined; no request is made in that case.
/// on success the caller reloads the return view.
pub async fn return_rental<A, C>(api: &A, confirm: &C, rental_id: i32) -> Option<Outcome>
where
    A: RentalApi + ?Sized,
    C: Confirm + ?Sized,
{
    if !confirm.confirm(CONFIRM_RETURN).await {
        debug!(rental_id, "return declined");
        return None;
    }

    Some(match api.return_rental(rental_id).await {
        Ok(_) => {
            info!(rental_id, "rental returned");
            Outcome::success(MSG_RENTAL_RETURNED)
        }
        Err(e) => {
            warn!(rental_id, error = %e, "return failed");
            Outcome::failure(&e)
        }
    })
}

/// same contract as `return_rental`, deleting the rental instead
pub async fn cancel_rental<A, C>(api: &A, confirm: &C, rental_id: i32) -> Option<Outcome>
where
    A: RentalApi + ?Sized,
    C: Confirm + ?Sized,
{
    if !confirm.confirm(&confirm_cancel_message(rental_id)).await {
        debug!(rental_id, "cancel declined");
        return None;
    }

    Some(match api.cancel_rental(rental_id).await {
        Ok(receipt) => {
            info!(rental_id = receipt.rental_id, "rental cancelled");
            Outcome::success(MSG_RENTAL_CANCELLED)
        }
        Err(e) => {
            warn!(rental_id, error = %e, "cancel failed");
            Outcome::failure(&e)
        }
    })
}

// ==============================================================================
// reports
// ==============================================================================

pub async fn load_summary<A: RentalApi + ?Sized>(
    api: &A,
    config: &ConsoleConfig,
) -> Result<SummaryStats, ApiError> {
    let rentals = api.rentals(config.rental_stats_limit).await?;
    let earnings = api.staff_earnings().await?;

    Ok(SummaryStats {
        total_rentals: rentals.len(),
        active_rentals: rentals.iter().filter(|r| r.status == RentalStatus::Active).count(),
        total_earnings: earnings.staff.iter().map(|s| s.total_earnings).sum(),
    })
}

pub async fn load_most_rented<A: RentalApi + ?Sized>(
    api: &A,
    config: &ConsoleConfig,
) -> Result<Vec<RankedFilm>, ApiError> {
    let report = api.most_rented(config.most_rented_limit).await?;
    Ok(rank_films(&report.films))
}

pub async fn load_staff_earnings<A: RentalApi + ?Sized>(api: &A) -> Result<EarningsTable, ApiError> {
    let report = api.staff_earnings().await?;
    Ok(EarningsTable::new(&report.staff))
}

pub fn parse_customer_id(raw: &str) -> Result<i32, FormError> {
    parse_id(raw).ok_or(FormError::InvalidCustomer)
}

pub async fn load_customer_history<A: RentalApi + ?Sized>(
    api: &A,
    customer_id: i32,
) -> Result<HistoryView, ApiError> {
    let history = api.customer_history(customer_id).await?;
    Ok(HistoryView::new(&history))
}

// ==============================================================================
// tests
// ==============================================================================
