//! Main Application Component
//!
//! Owns the store, mirrors each published snapshot into a signal, and lays out
//! the page.

use leptos::prelude::*;
use todos::config::AppConfig;
use todos::{TodoState, TodoView};

use crate::components::{Footer, NewTodoInput, TodoList};
use crate::context::TodoContext;

/// Root component
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = todos::new_store(&config);

    let (snapshot, set_snapshot) = signal(store.state(TodoState::clone));
    let subscription = store.subscribe(move |state: &TodoState| set_snapshot.set(state.clone()));
    let todo_view = Memo::new(move |_| snapshot.with(TodoView::derive));

    provide_context(TodoContext::new(store.clone(), snapshot, todo_view));
    on_cleanup(move || {
        store.unsubscribe(subscription);
    });

    let AppConfig {
        title, placeholder, ..
    } = config;

    view! {
        <main class="page">
            <div class="card">
                <h1>{title}</h1>
                <NewTodoInput placeholder=placeholder />
                <TodoList />
                <Footer />
            </div>
        </main>
    }
}
