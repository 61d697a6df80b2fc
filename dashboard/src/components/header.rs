//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"🎬 Sistema de Renta de DVDs"</h1>
                <p class="subtitle">"Catálogo, rentas, devoluciones y reportes"</p>
            </div>
        </header>
    }
}
