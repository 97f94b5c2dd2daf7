//! New Todo Input Component
//!
//! Text field composing the draft; Enter commits it.

use leptos::prelude::*;
use todos::TodoAction;

use crate::context::use_todos;

/// Input for composing new todos
#[component]
pub fn NewTodoInput(#[prop(into)] placeholder: String) -> impl IntoView {
    let ctx = use_todos();

    view! {
        <input
            type="text"
            class="new-todo"
            placeholder=placeholder
            aria-label="New todo input"
            prop:value=move || ctx.snapshot.with(|state| state.draft.clone())
            on:input=move |ev| {
                ctx.send(TodoAction::ChangeDraft { text: event_target_value(&ev) });
            }
            on:keydown=move |ev| {
                if ev.key() == "Enter" {
                    let text = ctx.snapshot.with_untracked(|state| state.draft.clone());
                    ctx.send(TodoAction::CommitDraft { text });
                }
            }
        />
    }
}
