//! Reports tab component
//!
//! four regions that load and fail independently: summary numbers,
//! most-rented ranking, staff earnings and one customer's history.

use leptos::prelude::*;
use shared::present::{StatSlot, NO_DATA, REPORT_ERROR};
use shared::Report;

use crate::console::Console;

fn placeholder() -> AnyView {
    view! { <p class="placeholder">{NO_DATA}</p> }.into_any()
}

fn inline_error() -> AnyView {
    view! { <p class="report-error">{REPORT_ERROR}</p> }.into_any()
}

fn loading() -> AnyView {
    view! { <span class="spinner"></span> }.into_any()
}

#[component]
pub fn ReportsTab() -> impl IntoView {
    let console = expect_context::<Console>();
    let (customer_input, set_customer_input) = signal(String::new());

    // summary cards, keyed by slot id
    let summary = move || {
        let state = console.summary.get();
        StatSlot::ALL
            .into_iter()
            .map(|slot| {
                let value = match &state {
                    Report::Ready(stats) => stats.value(slot),
                    Report::Failed => "—".to_string(),
                    Report::Idle | Report::Loading => "…".to_string(),
                };
                view! {
                    <div class="stat-card" id=slot.id()>
                        <div class="stat-number">{value}</div>
                        <div class="stat-label">{slot.label()}</div>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    let summary_error = move || {
        matches!(console.summary.get(), Report::Failed).then(inline_error)
    };

    let most_rented = move || match console.most_rented.get() {
        Report::Idle => ().into_any(),
        Report::Loading => loading(),
        Report::Failed => inline_error(),
        Report::Ready(films) if films.is_empty() => placeholder(),
        Report::Ready(films) => view! {
            <table>
                <tr>
                    <th>"Posición"</th>
                    <th>"Película"</th>
                    <th>"Año"</th>
                    <th>"Veces Rentado"</th>
                </tr>
                {films.into_iter().map(|film| view! {
                    <tr>
                        <td><b>{film.rank}</b></td>
                        <td>{film.title}</td>
                        <td>{film.year}</td>
                        <td><b>{film.rental_count}</b></td>
                    </tr>
                }).collect::<Vec<_>>()}
            </table>
        }
        .into_any(),
    };

    let earnings = move || match console.earnings.get() {
        Report::Idle => ().into_any(),
        Report::Loading => loading(),
        Report::Failed => inline_error(),
        Report::Ready(table) if table.is_empty() => placeholder(),
        Report::Ready(table) => view! {
            <table>
                <tr>
                    <th>"Personal"</th>
                    <th>"Transacciones"</th>
                    <th>"Ganancias"</th>
                </tr>
                {table.rows.into_iter().map(|row| view! {
                    <tr>
                        <td><b>{row.staff_name}</b></td>
                        <td>{row.transactions}</td>
                        <td><b>"$"{row.earnings}</b></td>
                    </tr>
                }).collect::<Vec<_>>()}
                <tr class="total-row">
                    <td class="align-right"><b>"TOTAL GENERAL:"</b></td>
                    <td></td>
                    <td><b>"$"{table.total}</b></td>
                </tr>
            </table>
        }
        .into_any(),
    };

    let history = move || match console.history.get() {
        Report::Idle => ().into_any(),
        Report::Loading => loading(),
        Report::Failed => inline_error(),
        Report::Ready(history) => {
            let rows = if history.rows.is_empty() {
                placeholder()
            } else {
                view! {
                    <table>
                        <tr>
                            <th>"ID"</th>
                            <th>"Película"</th>
                            <th>"Fecha renta"</th>
                            <th>"Devolución"</th>
                            <th>"Estado"</th>
                            <th>"Monto"</th>
                        </tr>
                        {history.rows.into_iter().map(|row| view! {
                            <tr>
                                <td>"#"{row.rental_id}</td>
                                <td>{row.film_title}</td>
                                <td>{row.rental_date}</td>
                                <td>{row.return_date}</td>
                                <td>{row.status}</td>
                                <td>"$"{row.amount}</td>
                            </tr>
                        }).collect::<Vec<_>>()}
                    </table>
                }
                .into_any()
            };
            view! {
                <p>
                    <b>{history.customer_name}</b>" · "{history.customer_email}
                    " · "{history.total_rentals}" rentas"
                </p>
                {rows}
            }
            .into_any()
        }
    };

    view! {
        <div class="card">
            <h2>"📊 Estadísticas"</h2>
            <button on:click=move |_| console.load_summary()>"🔄 Actualizar"</button>
            <div class="stats-row">{summary}</div>
            {summary_error}
        </div>

        <div class="card">
            <h2>"🏆 Películas más rentadas"</h2>
            <button on:click=move |_| console.load_most_rented()>"Ver reporte"</button>
            <div id="reporte-mas-rentados">{most_rented}</div>
        </div>

        <div class="card">
            <h2>"💰 Ganancias por personal"</h2>
            <button on:click=move |_| console.load_staff_earnings()>"Ver reporte"</button>
            <div id="reporte-staff">{earnings}</div>
        </div>

        <div class="card">
            <h2>"👤 Historial de cliente"</h2>
            <div class="input-group">
                <input
                    type="number"
                    min="1"
                    placeholder="ID de cliente"
                    prop:value=move || customer_input.get()
                    on:input=move |ev| set_customer_input.set(event_target_value(&ev))
                />
                <button on:click=move |_| console.load_history(&customer_input.get_untracked())>
                    "Ver historial"
                </button>
            </div>
            <div id="reporte-cliente">{history}</div>
        </div>
    }
}
