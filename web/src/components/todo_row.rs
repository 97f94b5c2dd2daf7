//! Todo Row Component
//!
//! One list entry: completion checkbox, title with inline editing, delete
//! button.

use leptos::html;
use leptos::prelude::*;
use todos::view::{delete_label, edit_label, toggle_label};
use todos::{TodoAction, TodoId, TodoItem};

use crate::context::use_todos;

/// A single todo in the list
#[component]
pub fn TodoRow(id: TodoId) -> impl IntoView {
    let ctx = use_todos();
    let (editing, set_editing) = signal(false);
    let edit_input = NodeRef::<html::Input>::new();

    let item = Memo::new(move |_| ctx.snapshot.with(|state| state.get(&id).cloned()));
    let title = move || item.with(|item| item.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let completed = move || item.with(|item| item.as_ref().is_some_and(|t| t.completed));
    let label = move |describe: fn(&TodoItem) -> String| {
        item.with(|item| item.as_ref().map(describe).unwrap_or_default())
    };

    // Focus the editor once it is mounted
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = edit_input.get() {
                if let Err(error) = input.focus() {
                    tracing::debug!(%id, ?error, "Could not focus the todo editor");
                }
            }
        }
    });

    let toggle = move |_| {
        if let Some(item) = ctx.item(id) {
            ctx.send(TodoAction::MarkItem {
                id,
                mark: item.toggle_mark(),
            });
        }
    };

    view! {
        <li class="todo-row">
            <div class="todo-main">
                <input
                    type="checkbox"
                    aria-label=move || label(toggle_label)
                    prop:checked=completed
                    on:change=toggle
                />
                <Show
                    when=move || editing.get()
                    fallback=move || {
                        view! {
                            <span
                                class=move || if completed() { "todo-title completed" } else { "todo-title" }
                                on:dblclick=move |_| set_editing.set(true)
                            >
                                {title}
                            </span>
                        }
                    }
                >
                    <input
                        type="text"
                        class="edit-todo"
                        aria-label=move || label(edit_label)
                        node_ref=edit_input
                        prop:value=title
                        on:input=move |ev| {
                            if let Some(item) = ctx.item(id) {
                                ctx.send(TodoAction::CommitItem {
                                    item: item.retitled(event_target_value(&ev)),
                                });
                            }
                        }
                        on:blur=move |_| set_editing.set(false)
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                set_editing.set(false);
                            }
                        }
                    />
                </Show>
            </div>
            <button
                class="delete-btn"
                aria-label=move || label(delete_label)
                on:click=move |_| ctx.send(TodoAction::DeleteItem { id })
            >
                "×"
            </button>
        </li>
    }
}
