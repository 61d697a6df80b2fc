//! ==============================================================================
//! present.rs - view-models
//! ==============================================================================
//!
//! purpose:
//!     turns backend payloads into exactly what each fragment shows:
//!     option labels, catalog cards, return rows, ranked tables and the
//!     summary slots. components render these without further logic.
//!
//! ==============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::models::{
    Availability, Customer, CustomerHistory, Film, FilmPopularity, RentalStatus, Staff,
    StaffEarnings, UnreturnedRental,
};
use crate::money::Amount;

pub const NO_EMAIL: &str = "Sin email";
pub const NO_YEAR: &str = "N/A";
pub const NO_DATA: &str = "No hay datos disponibles";
pub const NO_ACTIVE_RENTALS: &str = "No hay rentas activas";
pub const NOT_RETURNED: &str = "Pendiente";
pub const REPORT_ERROR: &str = "Error al cargar reporte";

/// columns of the return table, used by the empty placeholder row
pub const RETURN_COLUMNS: usize = 6;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

// ==============================================================================
// formatting
// ==============================================================================

/// `DD/MM/YYYY` for any timestamp shape the backend emits; raw text otherwise
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%d/%m/%Y").to_string();
    }
    for pattern in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return dt.format("%d/%m/%Y").to_string();
        }
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

fn year_label(year: Option<i32>) -> String {
    match year {
        Some(y) if y > 0 => y.to_string(),
        _ => NO_YEAR.to_string(),
    }
}

/// medal for the first three places, 1-based number after that
pub fn rank_label(index: usize) -> String {
    match MEDALS.get(index) {
        Some(medal) => medal.to_string(),
        None => (index + 1).to_string(),
    }
}

pub fn status_label(status: RentalStatus) -> &'static str {
    match status {
        RentalStatus::Active => "Activo",
        RentalStatus::Returned => "Devuelto",
        RentalStatus::Unknown => "Desconocido",
    }
}

// ==============================================================================
// rent form options
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub id: i32,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn customer(customer: &Customer) -> Self {
        let email = customer
            .email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or(NO_EMAIL);
        Self {
            id: customer.customer_id,
            label: format!("{} {} - {}", customer.first_name, customer.last_name, email),
            disabled: false,
        }
    }

    /// out-of-stock films are listed but cannot be picked
    pub fn film(film: &Film, availability: &Availability) -> Self {
        Self {
            id: film.film_id,
            label: format!(
                "{} - ${} ({} disponibles)",
                film.title, film.rental_rate, availability.available_copies
            ),
            disabled: availability.available_copies == 0,
        }
    }

    pub fn staff(staff: &Staff) -> Self {
        Self {
            id: staff.staff_id,
            label: format!("{} {}", staff.first_name, staff.last_name),
            disabled: false,
        }
    }
}

// ==============================================================================
// catalog
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogCard {
    pub film_id: i32,
    pub title: String,
    pub year: String,
    pub rental_days: i32,
    /// two decimals, no currency sign
    pub price: String,
    pub available: u32,
    pub total: u32,
}

impl CatalogCard {
    pub fn new(film: &Film, availability: &Availability) -> Self {
        Self {
            film_id: film.film_id,
            title: film.title.clone(),
            year: year_label(film.release_year),
            rental_days: film.rental_duration,
            price: film.rental_rate.to_string(),
            available: availability.available_copies,
            total: availability.total_copies,
        }
    }

    pub fn status_class(&self) -> &'static str {
        if self.available > 0 {
            "status available"
        } else {
            "status rented"
        }
    }

    pub fn status_text(&self) -> String {
        format!("{} de {} disponibles", self.available, self.total)
    }
}

// ==============================================================================
// return view
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnRow {
    pub rental_id: i32,
    pub customer_name: String,
    pub film_title: String,
    pub rental_date: String,
    pub expected_return: String,
    pub days_late: i64,
}

impl ReturnRow {
    pub fn new(rental: &UnreturnedRental) -> Self {
        Self {
            rental_id: rental.rental_id,
            customer_name: rental.customer_name.clone(),
            film_title: rental.film_title.clone(),
            rental_date: format_date(&rental.rental_date),
            expected_return: format_date(&rental.expected_return_date),
            days_late: rental.days_late,
        }
    }

    pub fn is_late(&self) -> bool {
        self.days_late > 0
    }

    pub fn row_class(&self) -> &'static str {
        if self.is_late() {
            "late"
        } else {
            ""
        }
    }

    pub fn late_note(&self) -> Option<String> {
        self.is_late()
            .then(|| format!("({} días de retraso)", self.days_late))
    }

    pub fn id_label(&self) -> String {
        format!("#{}", self.rental_id)
    }
}

// ==============================================================================
// reports
// ==============================================================================

/// semantic slot of a summary number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatSlot {
    TotalRentals,
    ActiveRentals,
    TotalEarnings,
}

impl StatSlot {
    pub const ALL: [StatSlot; 3] =
        [StatSlot::TotalRentals, StatSlot::ActiveRentals, StatSlot::TotalEarnings];

    pub fn id(self) -> &'static str {
        match self {
            StatSlot::TotalRentals => "stat-total-rentals",
            StatSlot::ActiveRentals => "stat-active-rentals",
            StatSlot::TotalEarnings => "stat-total-earnings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatSlot::TotalRentals => "Rentas totales",
            StatSlot::ActiveRentals => "Rentas activas",
            StatSlot::TotalEarnings => "Ganancias totales",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryStats {
    pub total_rentals: usize,
    pub active_rentals: usize,
    pub total_earnings: Amount,
}

impl SummaryStats {
    pub fn value(&self, slot: StatSlot) -> String {
        match slot {
            StatSlot::TotalRentals => self.total_rentals.to_string(),
            StatSlot::ActiveRentals => self.active_rentals.to_string(),
            StatSlot::TotalEarnings => self.total_earnings.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedFilm {
    pub rank: String,
    pub title: String,
    pub year: String,
    pub rental_count: u64,
}

pub fn rank_films(films: &[FilmPopularity]) -> Vec<RankedFilm> {
    films
        .iter()
        .enumerate()
        .map(|(index, film)| RankedFilm {
            rank: rank_label(index),
            title: film.title.clone(),
            year: year_label(film.release_year),
            rental_count: film.rental_count,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarningsRow {
    pub staff_name: String,
    pub transactions: u64,
    pub earnings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarningsTable {
    pub rows: Vec<EarningsRow>,
    /// grand total, summed before rounding
    pub total: String,
}

impl EarningsTable {
    pub fn new(staff: &[StaffEarnings]) -> Self {
        let rows = staff
            .iter()
            .map(|s| EarningsRow {
                staff_name: s.staff_name.clone(),
                transactions: s.total_transactions,
                earnings: s.total_earnings.to_string(),
            })
            .collect();
        let total: Amount = staff.iter().map(|s| s.total_earnings).sum();
        Self { rows, total: total.to_string() }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub rental_id: i32,
    pub film_title: String,
    pub rental_date: String,
    pub return_date: String,
    pub status: &'static str,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryView {
    pub customer_name: String,
    pub customer_email: String,
    pub total_rentals: usize,
    pub rows: Vec<HistoryRow>,
}

impl HistoryView {
    pub fn new(history: &CustomerHistory) -> Self {
        let rows = history
            .rentals
            .iter()
            .map(|r| HistoryRow {
                rental_id: r.rental_id,
                film_title: r.film_title.clone(),
                rental_date: format_date(&r.rental_date),
                return_date: r
                    .return_date
                    .as_deref()
                    .map(format_date)
                    .unwrap_or_else(|| NOT_RETURNED.to_string()),
                status: status_label(r.status),
                amount: r.amount.to_string(),
            })
            .collect();
        Self {
            customer_name: history.customer_name.clone(),
            customer_email: history.customer_email.clone().unwrap_or_else(|| NO_EMAIL.to_string()),
            total_rentals: history.total_rentals.max(history.rentals.len()),
            rows,
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CustomerRental;

    fn film(id: i32, year: Option<i32>) -> Film {
        Film {
            film_id: id,
            title: format!("Film {}", id),
            description: None,
            release_year: year,
            rental_rate: Amount::from_cents(499),
            rental_duration: 3,
        }
    }

    fn availability(id: i32, available: u32, total: u32) -> Availability {
        Availability {
            film_id: id,
            total_copies: total,
            rented_copies: total - available,
            available_copies: available,
        }
    }

    fn late_rental(days_late: i64) -> UnreturnedRental {
        UnreturnedRental {
            rental_id: 9,
            film_title: "Alien Center".into(),
            customer_name: "Mary Smith".into(),
            rental_date: "2024-03-01T09:30:00".into(),
            expected_return_date: "2024-03-08T09:30:00".into(),
            days_rented: 10,
            days_late,
        }
    }

    #[test]
    fn test_format_date_shapes() {
        assert_eq!(format_date("2024-03-08T09:30:00"), "08/03/2024");
        assert_eq!(format_date("2024-03-08T09:30:00.123456"), "08/03/2024");
        assert_eq!(format_date("2024-03-08 09:30:00"), "08/03/2024");
        assert_eq!(format_date("2024-03-08T09:30:00+00:00"), "08/03/2024");
        assert_eq!(format_date("2024-03-08"), "08/03/2024");
        assert_eq!(format_date("mañana"), "mañana");
    }

    #[test]
    fn test_customer_label_placeholder() {
        let mut customer = Customer {
            customer_id: 1,
            first_name: "Mary".into(),
            last_name: "Smith".into(),
            email: Some("mary@example.com".into()),
        };
        assert_eq!(SelectOption::customer(&customer).label, "Mary Smith - mary@example.com");
        customer.email = None;
        assert_eq!(SelectOption::customer(&customer).label, "Mary Smith - Sin email");
    }

    #[test]
    fn test_film_option_disabled_without_copies() {
        let option = SelectOption::film(&film(1, Some(2006)), &availability(1, 0, 4));
        assert!(option.disabled);
        assert_eq!(option.label, "Film 1 - $4.99 (0 disponibles)");
        assert!(!SelectOption::film(&film(1, None), &availability(1, 2, 4)).disabled);
    }

    #[test]
    fn test_catalog_card_rented_when_none_available() {
        let card = CatalogCard::new(&film(1, None), &availability(1, 0, 3));
        assert_eq!(card.status_class(), "status rented");
        assert_eq!(card.status_text(), "0 de 3 disponibles");
        assert_eq!(card.year, "N/A");
        assert_eq!(card.price, "4.99");

        let card = CatalogCard::new(&film(2, Some(2006)), &availability(2, 2, 3));
        assert_eq!(card.status_class(), "status available");
        assert_eq!(card.year, "2006");
    }

    #[test]
    fn test_return_row_lateness() {
        let late = ReturnRow::new(&late_rental(3));
        assert!(late.is_late());
        assert_eq!(late.row_class(), "late");
        assert_eq!(late.late_note().as_deref(), Some("(3 días de retraso)"));
        assert_eq!(late.expected_return, "08/03/2024");

        let on_time = ReturnRow::new(&late_rental(0));
        assert!(!on_time.is_late());
        assert_eq!(on_time.row_class(), "");
        assert_eq!(on_time.late_note(), None);
    }

    #[test]
    fn test_medals_only_for_present_ranks() {
        let films: Vec<FilmPopularity> = (0..2)
            .map(|i| FilmPopularity {
                film_id: i,
                title: format!("F{}", i),
                release_year: None,
                rental_count: 10 - i as u64,
            })
            .collect();
        let ranked = rank_films(&films);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].rank, "🥇");
        assert_eq!(ranked[1].rank, "🥈");
        assert!(ranked.iter().all(|r| r.rank != "🥉"));
        assert_eq!(rank_label(3), "4");
    }

    #[test]
    fn test_earnings_total_sums_before_rounding() {
        let staff = vec![
            StaffEarnings {
                staff_id: 1,
                staff_name: "A".into(),
                total_transactions: 2,
                total_earnings: Amount::from_f64(10.005).unwrap(),
            },
            StaffEarnings {
                staff_id: 2,
                staff_name: "B".into(),
                total_transactions: 1,
                total_earnings: Amount::from_f64(5.0).unwrap(),
            },
        ];
        let table = EarningsTable::new(&staff);
        assert_eq!(table.total, "15.01");
        assert_eq!(table.rows[0].earnings, "10.01");
        assert_eq!(table.rows[1].earnings, "5.00");
        assert!(table.rows.iter().all(|r| r.earnings.split('.').nth(1).map(str::len) == Some(2)));
    }

    #[test]
    fn test_summary_values_by_slot() {
        let stats = SummaryStats {
            total_rentals: 12,
            active_rentals: 4,
            total_earnings: Amount::from_cents(1999),
        };
        assert_eq!(stats.value(StatSlot::TotalRentals), "12");
        assert_eq!(stats.value(StatSlot::ActiveRentals), "4");
        assert_eq!(stats.value(StatSlot::TotalEarnings), "19.99");
    }

    #[test]
    fn test_history_pending_return() {
        let history = CustomerHistory {
            customer_name: "Mary Smith".into(),
            customer_email: None,
            total_rentals: 1,
            rentals: vec![CustomerRental {
                rental_id: 5,
                film_title: "Alien Center".into(),
                rental_date: "2024-03-01T09:30:00".into(),
                return_date: None,
                status: RentalStatus::Active,
                amount: Amount::from_f64(2.99).unwrap(),
            }],
        };
        let view = HistoryView::new(&history);
        assert_eq!(view.customer_email, NO_EMAIL);
        assert_eq!(view.rows[0].return_date, NOT_RETURNED);
        assert_eq!(view.rows[0].status, "Activo");
        assert_eq!(view.rows[0].amount, "2.99");
    }
}
