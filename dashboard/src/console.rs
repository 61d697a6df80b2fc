//! ==============================================================================
//! console.rs - the rental console controller
//! ==============================================================================
//!
//! purpose:
//!     owns every signal the tabs render from and runs the shared
//!     workflows against the http client. provided as leptos context;
//!     all fields are `Copy`, so handlers capture it by value.
//!
//! staleness:
//!     each loader takes a ticket before its first request and drops its
//!     result if a newer run (or a tab switch away) invalidated it.
//!     leaving a tab also puts its still-loading regions back to idle.
//!
//! ==============================================================================

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::config::{NOTICE_DISPLAY_MS, NOTICE_EXIT_MS};
use shared::present::{CatalogCard, EarningsTable, HistoryView, RankedFilm, ReturnRow, SelectOption, SummaryStats};
use shared::workflow::{self, RentalForm};
use shared::{
    ConsoleConfig, Generations, LoadSlot, LoadTicket, Notice, NotificationCenter, Report, View,
    ViewState,
};

use crate::api::{BrowserConfirm, HttpApi};

#[derive(Clone, Copy)]
pub struct Console {
    pub config: ConsoleConfig,
    pub view: RwSignal<ViewState>,
    pub toasts: RwSignal<NotificationCenter>,

    pub catalog: RwSignal<Vec<CatalogCard>>,

    pub customers: RwSignal<Vec<SelectOption>>,
    pub films: RwSignal<Vec<SelectOption>>,
    pub staff: RwSignal<Vec<SelectOption>>,
    pub form: RwSignal<RentalForm>,

    /// keeps the last good rows while a refresh runs or fails
    pub active_rentals: RwSignal<Report<Vec<ReturnRow>>>,

    pub summary: RwSignal<Report<SummaryStats>>,
    pub most_rented: RwSignal<Report<Vec<RankedFilm>>>,
    pub earnings: RwSignal<Report<EarningsTable>>,
    pub history: RwSignal<Report<HistoryView>>,

    generations: StoredValue<Generations>,
}

impl Console {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config,
            view: RwSignal::new(ViewState::default()),
            toasts: RwSignal::new(NotificationCenter::new()),
            catalog: RwSignal::new(Vec::new()),
            customers: RwSignal::new(Vec::new()),
            films: RwSignal::new(Vec::new()),
            staff: RwSignal::new(Vec::new()),
            form: RwSignal::new(RentalForm::new(config.default_rental_days)),
            active_rentals: RwSignal::new(Report::Idle),
            summary: RwSignal::new(Report::Idle),
            most_rented: RwSignal::new(Report::Idle),
            earnings: RwSignal::new(Report::Idle),
            history: RwSignal::new(Report::Idle),
            generations: StoredValue::new(Generations::new()),
        }
    }

    fn api(&self) -> HttpApi {
        HttpApi::new(self.config)
    }

    fn begin(&self, slot: LoadSlot) -> LoadTicket {
        self.generations.with_value(|g| g.begin(slot))
    }

    fn is_current(&self, ticket: &LoadTicket) -> bool {
        let current = self.generations.with_value(|g| g.is_current(ticket));
        if !current {
            tracing::debug!(slot = ?ticket.slot(), "discarding stale load");
        }
        current
    }

    // ==========================================================================
    // startup and navigation
    // ==========================================================================

    pub fn start(&self) {
        self.load_rent();
        self.load_catalog();

        let console = *self;
        spawn_local(async move {
            if let Some(notice) = workflow::probe(&console.api()).await {
                console.notify(notice);
            }
        });
    }

    /// activate `view` and run its loader once
    pub fn switch(&self, view: View) {
        let left = self.view.try_update(|state| state.switch(view)).unwrap_or(view);
        if left != view {
            self.generations.with_value(|g| g.leave(left));
            self.abandon(left);
        }

        match view {
            View::Catalog => self.load_catalog(),
            View::Rent => self.load_rent(),
            View::Return => self.load_returns(),
            View::Reports => self.load_summary(),
        }
    }

    /// runs of `view` were just invalidated; nothing will settle its spinners
    fn abandon(&self, view: View) {
        match view {
            View::Return => self.active_rentals.update(Report::abandon),
            View::Reports => {
                self.summary.update(Report::abandon);
                self.most_rented.update(Report::abandon);
                self.earnings.update(Report::abandon);
                self.history.update(Report::abandon);
            }
            View::Catalog | View::Rent => {}
        }
    }

    // ==========================================================================
    // notifications
    // ==========================================================================

    pub fn notify(&self, notice: Notice) {
        let Some(id) = self.toasts.try_update(|t| t.push(notice)) else {
            return;
        };
        let console = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_DISPLAY_MS).await;
            console.dismiss(id);
        });
    }

    /// run the exit transition, then remove; a no-op if already leaving
    pub fn dismiss(&self, id: u64) {
        if self.toasts.try_update(|t| t.begin_exit(id)) != Some(true) {
            return;
        }
        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_EXIT_MS).await;
            toasts.update(|t| {
                t.dismiss(id);
            });
        });
    }

    // ==========================================================================
    // loaders
    // ==========================================================================

    pub fn load_catalog(&self) {
        let console = *self;
        let ticket = self.begin(LoadSlot::Catalog);
        spawn_local(async move {
            let result = workflow::load_catalog(&console.api(), &console.config).await;
            if !console.is_current(&ticket) {
                return;
            }
            match result {
                Ok(cards) => console.catalog.set(cards),
                Err(notice) => console.notify(notice),
            }
        });
    }

    pub fn load_rent(&self) {
        let console = *self;
        let ticket = self.begin(LoadSlot::Rent);
        spawn_local(async move {
            let load = workflow::load_rent_options(&console.api(), &console.config).await;
            if !console.is_current(&ticket) {
                return;
            }
            console.form.update(|f| f.clear_replaced(&load.options));
            if let Some(customers) = load.options.customers {
                console.customers.set(customers);
            }
            if let Some(films) = load.options.films {
                console.films.set(films);
            }
            if let Some(staff) = load.options.staff {
                console.staff.set(staff);
            }
            if let Some(notice) = load.failure {
                console.notify(notice);
            }
        });
    }

    pub fn load_returns(&self) {
        let console = *self;
        let ticket = self.begin(LoadSlot::Return);
        self.active_rentals.update(Report::refresh);
        spawn_local(async move {
            let result = workflow::load_active_rentals(&console.api()).await;
            if !console.is_current(&ticket) {
                return;
            }
            match result {
                Ok(rows) => console.active_rentals.set(Report::Ready(rows)),
                Err(notice) => {
                    console.active_rentals.update(Report::fail_keeping_content);
                    console.notify(notice);
                }
            }
        });
    }

    pub fn load_summary(&self) {
        let console = *self;
        let ticket = self.begin(LoadSlot::Summary);
        self.summary.set(Report::Loading);
        spawn_local(async move {
            let result = workflow::load_summary(&console.api(), &console.config).await;
            if console.is_current(&ticket) {
                console.summary.set(report(result, "summary"));
            }
        });
    }

    pub fn load_most_rented(&self) {
        let console = *self;
        let ticket = self.begin(LoadSlot::MostRented);
        self.most_rented.set(Report::Loading);
        spawn_local(async move {
            let result = workflow::load_most_rented(&console.api(), &console.config).await;
            if console.is_current(&ticket) {
                console.most_rented.set(report(result, "most-rented"));
            }
        });
    }

    pub fn load_staff_earnings(&self) {
        let console = *self;
        let ticket = self.begin(LoadSlot::StaffEarnings);
        self.earnings.set(Report::Loading);
        spawn_local(async move {
            let result = workflow::load_staff_earnings(&console.api()).await;
            if console.is_current(&ticket) {
                console.earnings.set(report(result, "staff-earnings"));
            }
        });
    }

    pub fn load_history(&self, raw_customer_id: &str) {
        let customer_id = match workflow::parse_customer_id(raw_customer_id) {
            Ok(id) => id,
            Err(_) => {
                self.notify(Notice::warning(workflow::MSG_INVALID_CUSTOMER));
                return;
            }
        };

        let console = *self;
        let ticket = self.begin(LoadSlot::CustomerHistory);
        self.history.set(Report::Loading);
        spawn_local(async move {
            let result = workflow::load_customer_history(&console.api(), customer_id).await;
            if console.is_current(&ticket) {
                console.history.set(report(result, "customer-history"));
            }
        });
    }

    // ==========================================================================
    // actions
    // ==========================================================================

    pub fn submit_rental(&self) {
        let console = *self;
        let form = self.form.get_untracked();
        spawn_local(async move {
            let outcome = workflow::submit_rental(&console.api(), &form, &console.config).await;
            if outcome.succeeded {
                let days = console.config.default_rental_days;
                console.form.update(|f| f.reset(days));
                console.load_rent();
            }
            console.notify(outcome.notice);
        });
    }

    pub fn return_rental(&self, rental_id: i32) {
        let console = *self;
        spawn_local(async move {
            let outcome = workflow::return_rental(&console.api(), &BrowserConfirm, rental_id).await;
            console.finish_return_action(outcome);
        });
    }

    pub fn cancel_rental(&self, rental_id: i32) {
        let console = *self;
        spawn_local(async move {
            let outcome = workflow::cancel_rental(&console.api(), &BrowserConfirm, rental_id).await;
            console.finish_return_action(outcome);
        });
    }

    fn finish_return_action(&self, outcome: Option<workflow::Outcome>) {
        // declined: nothing was sent, nothing changes
        let Some(outcome) = outcome else {
            return;
        };
        let succeeded = outcome.succeeded;
        self.notify(outcome.notice);
        if succeeded {
            self.load_returns();
        }
    }
}

fn report<T>(result: Result<T, shared::ApiError>, name: &'static str) -> Report<T> {
    match result {
        Ok(value) => Report::Ready(value),
        Err(e) => {
            tracing::warn!(report = name, error = %e, "report failed");
            Report::Failed
        }
    }
}
