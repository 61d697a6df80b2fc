//! Catalog tab component

use leptos::prelude::*;

use crate::console::Console;

#[component]
pub fn CatalogTab() -> impl IntoView {
    let console = expect_context::<Console>();

    view! {
        <div class="card">
            <h2>"📀 Catálogo de DVDs"</h2>
            <button on:click=move |_| console.load_catalog()>"🔄 Actualizar"</button>

            <div class="catalog-grid">
                {move || console.catalog.get().into_iter().map(|card| {
                    let status_class = card.status_class();
                    let status_text = card.status_text();
                    view! {
                        <div class="dvd-card">
                            <div class="dvd-title">{card.title}</div>
                            <div class="dvd-info">"📅 Año: "{card.year}</div>
                            <div class="dvd-info">"⏱️ Duración renta: "{card.rental_days}" días"</div>
                            <div class="price">"$"{card.price}</div>
                            <span class=status_class>{status_text}</span>
                        </div>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
