//! Rent tab component

use leptos::prelude::*;
use shared::present::SelectOption;

use crate::console::Console;

fn options(list: Vec<SelectOption>) -> Vec<AnyView> {
    list.into_iter()
        .map(|opt| {
            view! {
                <option value=opt.id.to_string() disabled=opt.disabled>{opt.label}</option>
            }
            .into_any()
        })
        .collect()
}

#[component]
pub fn RentTab() -> impl IntoView {
    let console = expect_context::<Console>();
    let form = console.form;

    view! {
        <div class="card">
            <h2>"🎬 Nueva Renta"</h2>

            <label for="cliente">"Cliente"</label>
            <select
                id="cliente"
                prop:value=move || form.with(|f| f.customer.clone())
                on:change=move |ev| form.update(|f| f.customer = event_target_value(&ev))
            >
                <option value="">"Seleccione un cliente..."</option>
                {move || options(console.customers.get())}
            </select>

            <label for="dvd">"DVD"</label>
            <select
                id="dvd"
                prop:value=move || form.with(|f| f.film.clone())
                on:change=move |ev| form.update(|f| f.film = event_target_value(&ev))
            >
                <option value="">"Seleccione un DVD..."</option>
                {move || options(console.films.get())}
            </select>

            <label for="staff">"Personal"</label>
            <select
                id="staff"
                prop:value=move || form.with(|f| f.staff.clone())
                on:change=move |ev| form.update(|f| f.staff = event_target_value(&ev))
            >
                <option value="">"Seleccione personal..."</option>
                {move || options(console.staff.get())}
            </select>

            <label for="dias">"Días de renta"</label>
            <input
                id="dias"
                type="number"
                min="1"
                prop:value=move || form.with(|f| f.days.clone())
                on:input=move |ev| form.update(|f| f.days = event_target_value(&ev))
            />

            <button class="btn" on:click=move |_| console.submit_rental()>
                "✅ Registrar Renta"
            </button>
        </div>
    }
}
