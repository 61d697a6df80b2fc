//! ==============================================================================
//! views.rs - active tab and load generations
//! ==============================================================================
//!
//! purpose:
//!     `ViewState` is the single source of which tab is visible.
//!     `Generations` tags every loader run so a response that resolves
//!     after a newer run (or after its view was left) is dropped instead
//!     of repainting over fresher content. `Report` is the render state
//!     of a region filled by one of those loaders.
//!
//! ==============================================================================

use std::sync::atomic::{AtomicU64, Ordering};

/// one of the four user-selectable panels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Catalog,
    Rent,
    Return,
    Reports,
}

impl View {
    pub const ALL: [View; 4] = [View::Catalog, View::Rent, View::Return, View::Reports];

    /// stable dom id of the panel
    pub fn id(self) -> &'static str {
        match self {
            View::Catalog => "catalogo",
            View::Rent => "rentar",
            View::Return => "devolver",
            View::Reports => "reportes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            View::Catalog => "📀 Catálogo",
            View::Rent => "🎬 Rentar DVD",
            View::Return => "↩️ Devolver DVD",
            View::Reports => "📊 Reportes",
        }
    }

    /// load slots whose results belong to this view
    pub fn slots(self) -> &'static [LoadSlot] {
        match self {
            View::Catalog => &[LoadSlot::Catalog],
            View::Rent => &[LoadSlot::Rent],
            View::Return => &[LoadSlot::Return],
            View::Reports => &[
                LoadSlot::Summary,
                LoadSlot::MostRented,
                LoadSlot::StaffEarnings,
                LoadSlot::CustomerHistory,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    active: View,
}

impl ViewState {
    pub fn is_active(&self, view: View) -> bool {
        self.active == view
    }

    /// make `view` the only active view, returning the one that was left
    pub fn switch(&mut self, view: View) -> View {
        std::mem::replace(&mut self.active, view)
    }

    pub fn tab_class(&self, view: View) -> &'static str {
        if self.is_active(view) {
            "tab active"
        } else {
            "tab"
        }
    }

    pub fn panel_class(&self, view: View) -> &'static str {
        if self.is_active(view) {
            "tab-content active"
        } else {
            "tab-content"
        }
    }
}

// ==============================================================================
// load generations
// ==============================================================================

/// independently reloadable region of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadSlot {
    Catalog,
    Rent,
    Return,
    Summary,
    MostRented,
    StaffEarnings,
    CustomerHistory,
}

impl LoadSlot {
    const COUNT: usize = 7;

    fn index(self) -> usize {
        match self {
            LoadSlot::Catalog => 0,
            LoadSlot::Rent => 1,
            LoadSlot::Return => 2,
            LoadSlot::Summary => 3,
            LoadSlot::MostRented => 4,
            LoadSlot::StaffEarnings => 5,
            LoadSlot::CustomerHistory => 6,
        }
    }
}

/// proof that a loader run was started; compare with `Generations::is_current`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    slot: LoadSlot,
    generation: u64,
}

impl LoadTicket {
    pub fn slot(&self) -> LoadSlot {
        self.slot
    }
}

/// per-slot generation counters
#[derive(Debug, Default)]
pub struct Generations {
    counters: [AtomicU64; LoadSlot::COUNT],
}

impl Generations {
    pub fn new() -> Self {
        Self::default()
    }

    /// start a run for `slot`, invalidating any run still in flight
    pub fn begin(&self, slot: LoadSlot) -> LoadTicket {
        let generation = self.counters[slot.index()].fetch_add(1, Ordering::Relaxed) + 1;
        LoadTicket { slot, generation }
    }

    /// drop every in-flight run of `slot` without starting a new one
    pub fn invalidate(&self, slot: LoadSlot) {
        self.counters[slot.index()].fetch_add(1, Ordering::Relaxed);
    }

    /// invalidate all slots owned by `view`
    pub fn leave(&self, view: View) {
        for slot in view.slots() {
            self.invalidate(*slot);
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.counters[ticket.slot.index()].load(Ordering::Relaxed) == ticket.generation
    }
}

// ==============================================================================
// region state
// ==============================================================================

/// what a loader-filled region currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Report<T> {
    Idle,
    Loading,
    Ready(T),
    Failed,
}

impl<T> Report<T> {
    /// refresh without blanking: only a region with nothing to show spins
    pub fn refresh(&mut self) {
        if !matches!(self, Report::Ready(_)) {
            *self = Report::Loading;
        }
    }

    /// a failed refresh keeps content that is already on screen
    pub fn fail_keeping_content(&mut self) {
        if !matches!(self, Report::Ready(_)) {
            *self = Report::Failed;
        }
    }

    /// the run filling this region was invalidated; stop spinning
    pub fn abandon(&mut self) {
        if matches!(self, Report::Loading) {
            *self = Report::Idle;
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_active_after_switch() {
        let mut state = ViewState::default();
        for target in View::ALL {
            state.switch(target);
            let active_panels = View::ALL
                .iter()
                .filter(|v| state.panel_class(**v) == "tab-content active")
                .count();
            let active_tabs = View::ALL
                .iter()
                .filter(|v| state.tab_class(**v) == "tab active")
                .count();
            assert_eq!(active_panels, 1);
            assert_eq!(active_tabs, 1);
            assert!(state.is_active(target));
        }
    }

    #[test]
    fn test_switch_returns_previous() {
        let mut state = ViewState::default();
        assert_eq!(state.switch(View::Reports), View::Catalog);
        assert!(state.is_active(View::Reports));
    }

    #[test]
    fn test_newer_run_invalidates_older() {
        let generations = Generations::new();
        let first = generations.begin(LoadSlot::Catalog);
        let second = generations.begin(LoadSlot::Catalog);
        assert!(!generations.is_current(&first));
        assert!(generations.is_current(&second));
    }

    #[test]
    fn test_slots_are_independent() {
        let generations = Generations::new();
        let catalog = generations.begin(LoadSlot::Catalog);
        let rent = generations.begin(LoadSlot::Rent);
        generations.begin(LoadSlot::Summary);
        assert!(generations.is_current(&catalog));
        assert!(generations.is_current(&rent));
    }

    #[test]
    fn test_leaving_a_view_drops_its_runs() {
        let generations = Generations::new();
        let most_rented = generations.begin(LoadSlot::MostRented);
        let catalog = generations.begin(LoadSlot::Catalog);
        generations.leave(View::Reports);
        assert!(!generations.is_current(&most_rented));
        assert!(generations.is_current(&catalog));
    }

    #[test]
    fn test_left_view_stops_spinning() {
        let generations = Generations::new();
        let mut most_rented: Report<Vec<u64>> = Report::Loading;
        let mut earnings: Report<Vec<u64>> = Report::Ready(vec![3]);
        let ticket = generations.begin(LoadSlot::MostRented);

        generations.leave(View::Reports);
        most_rented.abandon();
        earnings.abandon();

        assert!(!generations.is_current(&ticket));
        assert_eq!(most_rented, Report::Idle);
        assert_eq!(earnings, Report::Ready(vec![3]));
    }

    #[test]
    fn test_refresh_keeps_shown_content() {
        let mut rows: Report<Vec<i32>> = Report::Idle;
        rows.refresh();
        assert_eq!(rows, Report::Loading);
        rows.fail_keeping_content();
        assert_eq!(rows, Report::Failed);

        let mut rows = Report::Ready(vec![11]);
        rows.refresh();
        rows.fail_keeping_content();
        assert_eq!(rows, Report::Ready(vec![11]));
    }
}
