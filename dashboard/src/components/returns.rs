//! Return tab component

use leptos::prelude::*;
use shared::present::{ReturnRow, NO_ACTIVE_RENTALS, RETURN_COLUMNS};
use shared::Report;

use crate::console::Console;

fn return_rows(console: Console, rows: Vec<ReturnRow>) -> AnyView {
    rows.into_iter()
        .map(|row| {
            let id = row.rental_id;
            let late_class = if row.is_late() { "late-date" } else { "" };
            view! {
                <tr class=row.row_class()>
                    <td>{row.id_label()}</td>
                    <td>{row.customer_name.clone()}</td>
                    <td>{row.film_title.clone()}</td>
                    <td>{row.rental_date.clone()}</td>
                    <td class=late_class>
                        {row.expected_return.clone()}
                        {row.late_note().map(|note| view! { <br/><small>{note}</small> })}
                    </td>
                    <td>
                        <button class="btn" on:click=move |_| console.return_rental(id)>
                            "✓ Devolver"
                        </button>
                        <button class="btn danger" on:click=move |_| console.cancel_rental(id)>
                            "✗ Cancelar"
                        </button>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>()
        .into_any()
}

#[component]
pub fn ReturnTab() -> impl IntoView {
    let console = expect_context::<Console>();

    let rows = move || match console.active_rentals.get() {
        Report::Idle | Report::Failed => ().into_any(),
        Report::Loading => view! {
            <tr>
                <td colspan=RETURN_COLUMNS.to_string() class="empty"><span class="spinner"></span></td>
            </tr>
        }
        .into_any(),
        Report::Ready(rows) if rows.is_empty() => view! {
            <tr>
                <td colspan=RETURN_COLUMNS.to_string() class="empty">{NO_ACTIVE_RENTALS}</td>
            </tr>
        }
        .into_any(),
        Report::Ready(rows) => return_rows(console, rows),
    };


    view! {
        <div class="card">
            <h2>"↩️ Rentas Activas"</h2>
            <button on:click=move |_| console.load_returns()>"🔄 Actualizar"</button>

            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Cliente"</th>
                        <th>"Película"</th>
                        <th>"Fecha renta"</th>
                        <th>"Devolución esperada"</th>
                        <th>"Acción"</th>
                    </tr>
                </thead>
                <tbody id="tabla-devolver">{rows}</tbody>
            </table>
        </div>
    }
}
