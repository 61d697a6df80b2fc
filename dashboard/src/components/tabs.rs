//! Tab navigation component

use leptos::prelude::*;
use shared::View;

use crate::console::Console;

#[component]
pub fn TabNav() -> impl IntoView {
    let console = expect_context::<Console>();

    view! {
        <div class="tabs">
            {View::ALL
                .into_iter()
                .map(|view| {
                    view! {
                        <button
                            class=move || console.view.with(|s| s.tab_class(view))
                            on:click=move |_| console.switch(view)
                        >
                            {view.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
