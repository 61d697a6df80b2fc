//! ==============================================================================
//! lib.rs - DVD Rental Console
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm front end for the dvd rental backend. four tabs:
//!     catalog, rent, return and reports, plus a toast stack.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - calls the rental api via gloo-net
//!     - all fetch/validate/format logic lives in the `shared` crate
//!
//! ==============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen::prelude::*;

mod api;
mod components;
mod console;
mod logging;

use components::{CatalogTab, Header, RentTab, ReportsTab, ReturnTab, TabNav, Toasts};
use console::Console;
use shared::{ConsoleConfig, View};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    tracing::info!("🎬 Sistema de Renta de DVDs - Cargado");
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    let console = Console::new(ConsoleConfig::from_env());
    provide_context(console);
    console.start();

    let panel = move |view: View| console.view.with(|s| s.panel_class(view));

    view! {
        <Title text="Sistema de Renta de DVDs" />
        <Header />
        <div class="container">
            <TabNav />

            <div id=View::Catalog.id() class=move || panel(View::Catalog)>
                <CatalogTab />
            </div>
            <div id=View::Rent.id() class=move || panel(View::Rent)>
                <RentTab />
            </div>
            <div id=View::Return.id() class=move || panel(View::Return)>
                <ReturnTab />
            </div>
            <div id=View::Reports.id() class=move || panel(View::Reports)>
                <ReportsTab />
            </div>
        </div>
        <Toasts />
    }
}
