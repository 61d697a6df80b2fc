//! Notification stack

use leptos::prelude::*;

use crate::console::Console;

#[component]
pub fn Toasts() -> impl IntoView {
    let console = expect_context::<Console>();

    view! {
        <div class="toasts">
            {move || console.toasts.get().items().iter().map(|n| {
                let id = n.id;
                view! {
                    <div class=n.class() on:click=move |_| console.dismiss(id)>
                        {n.notice.message.clone()}
                    </div>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}
