//! Todo List Component
//!
//! Rows for the items passing the active filter, keyed by id.

use leptos::prelude::*;
use todos::TodoId;

use super::TodoRow;
use crate::context::use_todos;

/// The filtered list of todos
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todos();
    let visible_ids = Memo::new(move |_| {
        ctx.view
            .with(|view| view.visible.iter().map(|item| item.id).collect::<Vec<TodoId>>())
    });

    view! {
        <ul class="todo-list" role="list" aria-label="Todo list">
            <For
                each=move || visible_ids.get()
                key=|id| *id
                children=move |id| view! { <TodoRow id=id /> }
            />
        </ul>
    }
}
