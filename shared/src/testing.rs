//! in-memory `RentalApi` and `Confirm` for workflow tests

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;

use crate::api::{Confirm, Endpoint, RentalApi};
use crate::error::ApiError;
use crate::models::*;
use crate::money::Amount;

/// canned backend that records every endpoint it is asked for
pub struct MockApi {
    customers: Vec<Customer>,
    films: Vec<Film>,
    availability: Vec<Availability>,
    staff: Vec<Staff>,
    rentals: Vec<RentalRecord>,
    unreturned: UnreturnedReport,
    most_rented: MostRentedReport,
    earnings: StaffEarningsReport,
    histories: Vec<(i32, CustomerHistory)>,
    failures: Vec<(Endpoint, ApiError)>,
    /// executor turns each film's availability stays pending
    availability_yields: Vec<(i32, usize)>,
    in_flight: Cell<usize>,
    peak_in_flight: Cell<usize>,
    completed: RefCell<Vec<i32>>,
    calls: RefCell<Vec<Endpoint>>,
    created: RefCell<Vec<NewRental>>,
}

impl MockApi {
    pub fn sample() -> Self {
        let mary = Customer {
            customer_id: 1,
            first_name: "Mary".into(),
            last_name: "Smith".into(),
            email: Some("mary@example.com".into()),
        };
        let patricia = Customer {
            customer_id: 2,
            first_name: "Patricia".into(),
            last_name: "Johnson".into(),
            email: None,
        };

        Self {
            customers: vec![mary, patricia],
            films: vec![
                Film {
                    film_id: 1,
                    title: "Academy Dinosaur".into(),
                    description: None,
                    release_year: Some(2006),
                    rental_rate: Amount::from_cents(99),
                    rental_duration: 6,
                },
                Film {
                    film_id: 2,
                    title: "Alien Center".into(),
                    description: None,
                    release_year: None,
                    rental_rate: Amount::from_cents(299),
                    rental_duration: 3,
                },
            ],
            availability: vec![
                Availability { film_id: 1, total_copies: 4, rented_copies: 1, available_copies: 3 },
                Availability { film_id: 2, total_copies: 2, rented_copies: 2, available_copies: 0 },
            ],
            staff: vec![
                Staff { staff_id: 1, first_name: "Mike".into(), last_name: "Hillyer".into(), email: None },
                Staff { staff_id: 2, first_name: "Jon".into(), last_name: "Stephens".into(), email: None },
            ],
            rentals: vec![
                record(11, RentalStatus::Active),
                record(12, RentalStatus::Active),
                record(13, RentalStatus::Returned),
            ],
            unreturned: UnreturnedReport {
                total_unreturned: 2,
                rentals: vec![unreturned(11, 2), unreturned(12, 0)],
            },
            most_rented: MostRentedReport {
                total_films: 4,
                films: (1..=4)
                    .map(|i| FilmPopularity {
                        film_id: i,
                        title: format!("Film {}", i),
                        release_year: Some(2006),
                        rental_count: 40 - i as u64,
                    })
                    .collect(),
            },
            earnings: StaffEarningsReport {
                total_staff: 2,
                staff: vec![
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
                ],
            },
            histories: vec![(
                1,
                CustomerHistory {
                    customer_name: "Mary Smith".into(),
                    customer_email: Some("mary@example.com".into()),
                    total_rentals: 1,
                    rentals: vec![CustomerRental {
                        rental_id: 11,
                        film_title: "Academy Dinosaur".into(),
                        rental_date: "2024-03-01T09:30:00".into(),
                        return_date: None,
                        status: RentalStatus::Active,
                        amount: Amount::from_cents(99),
                    }],
                },
            )],
            failures: Vec::new(),
            availability_yields: Vec::new(),
            in_flight: Cell::new(0),
            peak_in_flight: Cell::new(0),
            completed: RefCell::new(Vec::new()),
            calls: RefCell::new(Vec::new()),
            created: RefCell::new(Vec::new()),
        }
    }

    /// make `endpoint` fail with `error` instead of answering
    pub fn failing(mut self, endpoint: Endpoint, error: ApiError) -> Self {
        self.failures.push((endpoint, error));
        self
    }

    /// replace the catalog with `count` films whose availability answers
    /// arrive in reverse order: film 1 is the slowest
    pub fn with_films(mut self, count: i32) -> Self {
        self.films = (1..=count)
            .map(|i| Film {
                film_id: i,
                title: format!("Film {}", i),
                description: None,
                release_year: Some(2006),
                rental_rate: Amount::from_cents(99),
                rental_duration: 3,
            })
            .collect();
        self.availability = (1..=count)
            .map(|i| Availability { film_id: i, total_copies: 2, rented_copies: 0, available_copies: 2 })
            .collect();
        self.availability_yields = (1..=count).map(|i| (i, (count - i) as usize)).collect();
        self
    }

    /// film ids in the order their availability answers resolved
    pub fn completed(&self) -> Vec<i32> {
        self.completed.borrow().clone()
    }

    /// most availability requests that were pending at the same time
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.get()
    }

    pub fn calls(&self) -> Vec<Endpoint> {
        self.calls.borrow().clone()
    }

    pub fn created(&self) -> Vec<NewRental> {
        self.created.borrow().clone()
    }

    fn hit(&self, endpoint: Endpoint) -> Result<(), ApiError> {
        let failure = self
            .failures
            .iter()
            .find(|(e, _)| *e == endpoint)
            .map(|(_, err)| err.clone());
        self.calls.borrow_mut().push(endpoint);
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// pending once, then ready, so other futures get polled in between
#[derive(Default)]
struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

fn not_found(what: &str) -> ApiError {
    ApiError::Rejected { status: 404, detail: format!("{} no encontrada", what) }
}

fn record(rental_id: i32, status: RentalStatus) -> RentalRecord {
    RentalRecord {
        rental_id,
        customer_name: "Mary Smith".into(),
        film_title: "Academy Dinosaur".into(),
        rental_date: "2024-03-01T09:30:00".into(),
        return_date: None,
        status,
    }
}

fn unreturned(rental_id: i32, days_late: i64) -> UnreturnedRental {
    UnreturnedRental {
        rental_id,
        film_title: "Academy Dinosaur".into(),
        customer_name: "Mary Smith".into(),
        rental_date: "2024-03-01T09:30:00".into(),
        expected_return_date: "2024-03-07T09:30:00".into(),
        days_rented: 6 + days_late,
        days_late,
    }
}

fn rental(rental_id: i32, customer_id: i32, staff_id: i32) -> Rental {
    Rental {
        rental_id,
        rental_date: "2024-03-01T09:30:00".into(),
        customer_id,
        staff_id,
        return_date: None,
    }
}

#[async_trait(?Send)]
impl RentalApi for MockApi {
    async fn status(&self) -> Result<ServerStatus, ApiError> {
        self.hit(Endpoint::Status)?;
        Ok(ServerStatus {
            message: "DVD Rental System API".into(),
            status: "running".into(),
            database: Some("dvdrental".into()),
        })
    }

    async fn customers(&self, limit: usize) -> Result<Vec<Customer>, ApiError> {
        self.hit(Endpoint::Customers { limit })?;
        Ok(self.customers.iter().take(limit).cloned().collect())
    }

    async fn customer_history(&self, customer_id: i32) -> Result<CustomerHistory, ApiError> {
        self.hit(Endpoint::CustomerHistory { customer_id })?;
        self.histories
            .iter()
            .find(|(id, _)| *id == customer_id)
            .map(|(_, h)| h.clone())
            .ok_or_else(|| not_found("Cliente"))
    }

    async fn films(&self, limit: usize) -> Result<Vec<Film>, ApiError> {
        self.hit(Endpoint::Films { limit })?;
        Ok(self.films.iter().take(limit).cloned().collect())
    }

    async fn availability(&self, film_id: i32) -> Result<Availability, ApiError> {
        self.hit(Endpoint::Availability { film_id })?;

        self.in_flight.set(self.in_flight.get() + 1);
        self.peak_in_flight.set(self.peak_in_flight.get().max(self.in_flight.get()));
        let yields = self
            .availability_yields
            .iter()
            .find(|(id, _)| *id == film_id)
            .map_or(0, |(_, n)| *n);
        for _ in 0..yields {
            YieldNow::default().await;
        }
        self.in_flight.set(self.in_flight.get() - 1);
        self.completed.borrow_mut().push(film_id);

        self.availability
            .iter()
            .find(|a| a.film_id == film_id)
            .cloned()
            .ok_or_else(|| not_found("Película"))
    }

    async fn staff(&self) -> Result<Vec<Staff>, ApiError> {
        self.hit(Endpoint::Staff)?;
        Ok(self.staff.clone())
    }

    async fn rentals(&self, limit: usize) -> Result<Vec<RentalRecord>, ApiError> {
        self.hit(Endpoint::Rentals { limit })?;
        Ok(self.rentals.iter().take(limit).cloned().collect())
    }

    async fn create_rental(&self, new_rental: &NewRental) -> Result<Rental, ApiError> {
        self.hit(Endpoint::CreateRental)?;
        self.created.borrow_mut().push(new_rental.clone());
        Ok(rental(100, new_rental.customer_id, new_rental.staff_id))
    }

    async fn return_rental(&self, rental_id: i32) -> Result<Rental, ApiError> {
        self.hit(Endpoint::ReturnRental { rental_id })?;
        let mut returned = rental(rental_id, 1, 1);
        returned.return_date = Some("2024-03-09T10:00:00".into());
        Ok(returned)
    }

    async fn cancel_rental(&self, rental_id: i32) -> Result<CancelReceipt, ApiError> {
        self.hit(Endpoint::CancelRental { rental_id })?;
        Ok(CancelReceipt { message: "Renta cancelada exitosamente".into(), rental_id })
    }

    async fn unreturned(&self) -> Result<UnreturnedReport, ApiError> {
        self.hit(Endpoint::Unreturned)?;
        Ok(self.unreturned.clone())
    }

    async fn most_rented(&self, limit: usize) -> Result<MostRentedReport, ApiError> {
        self.hit(Endpoint::MostRented { limit })?;
        let mut report = self.most_rented.clone();
        report.films.truncate(limit);
        Ok(report)
    }

    async fn staff_earnings(&self) -> Result<StaffEarningsReport, ApiError> {
        self.hit(Endpoint::StaffEarnings)?;
        Ok(self.earnings.clone())
    }
}

/// answers every prompt the same way and remembers the questions
pub struct ScriptedConfirm {
    answer: bool,
    asked: RefCell<Vec<String>>,
}

impl ScriptedConfirm {
    pub fn answering(answer: bool) -> Self {
        Self { answer, asked: RefCell::new(Vec::new()) }
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Confirm for ScriptedConfirm {
    async fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answer
    }
}
