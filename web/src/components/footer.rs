//! Footer Component
//!
//! Items-left counter, filter buttons and the clear-completed button.

use leptos::prelude::*;
use todos::{Filter, TodoAction, TodoView};

use crate::context::use_todos;

/// Counter, filters and bulk actions under the list
#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_todos();

    view! {
        <div class="footer">
            <span class="items-left">{move || ctx.view.with(TodoView::items_left_label)}</span>
            <div class="filters">
                {Filter::ALL
                    .into_iter()
                    .map(|filter| {
                        let selected = move || ctx.view.with(|view| view.filter == filter);
                        view! {
                            <button
                                class=move || if selected() { "filter-btn active" } else { "filter-btn" }
                                aria-pressed=move || selected().to_string()
                                on:click=move |_| ctx.send(TodoAction::ChangeFilter { filter })
                            >
                                {filter.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || ctx.view.with(TodoView::show_clear_completed)>
                <button class="clear-btn" on:click=move |_| ctx.send(TodoAction::ClearCompleted)>
                    "Clear completed"
                </button>
            </Show>
        </div>
    }
}
