//! The user directory page.
//!
//! Owns the page state in two signals: the [`Directory`] (records + form) and
//! the [`LoadState`] of the one initial fetch. Child components receive plain
//! props and report back through event handlers; every mutation goes through
//! `Directory` so the transitions stay host-testable in the `store` crate.

use dioxus::prelude::*;
use store::{Directory, DirectoryConfig, Field, LoadState, SubmitOutcome, UserRecord, UserSource};

use crate::navbar::Navbar;
use crate::sidebar::Sidebar;
use crate::source::make_source;
use crate::status::{ErrorView, LoadingView};
use crate::user_card::{card_key, UserCard};
use crate::user_form::UserForm;

#[component]
pub fn UserDirectory(config: DirectoryConfig) -> Element {
    let mut directory = use_signal(Directory::new);
    let mut load_state = use_signal(LoadState::default);

    // Fetch once on mount. A resource re-runs only when a signal it read
    // changes; `write()` and `peek()` do not subscribe, so this one never does.
    let source_config = config.source.clone();
    let _loader = use_resource(move || {
        let source = make_source(&source_config);
        async move {
            let result = source.fetch_users().await;
            let state = directory.write().finish_load(result);
            match &state {
                LoadState::Ready => {
                    tracing::info!("Loaded {} users", directory.peek().users().len());
                }
                LoadState::Failed(message) => {
                    tracing::error!("Failed to load users: {}", message);
                }
                LoadState::Loading => {}
            }
            load_state.set(state);
        }
    });

    let on_input = move |(field, value): (Field, String)| {
        directory.write().set_field(field, value);
    };

    let on_submit = move |_| match directory.write().submit() {
        SubmitOutcome::Created(id) => tracing::debug!("Created user {}", id),
        SubmitOutcome::Updated(id) => tracing::debug!("Updated user {}", id),
        SubmitOutcome::Rejected => tracing::warn!("Submit ignored: all fields are required"),
    };

    let on_edit = move |user: UserRecord| {
        tracing::debug!("Editing user {}", user.id);
        directory.write().start_edit(&user);
    };

    let on_delete = move |id: u64| {
        if directory.write().delete(id) {
            tracing::debug!("Deleted user {}", id);
        }
    };

    match load_state() {
        LoadState::Loading => return rsx! { LoadingView {} },
        LoadState::Failed(message) => return rsx! { ErrorView { message } },
        LoadState::Ready => {}
    }

    let current = directory();
    let form = current.form();

    rsx! {
        div {
            class: "app",
            Navbar { title: config.display.title.clone() }

            div {
                class: "main-container",
                Sidebar {}

                div {
                    class: "content",
                    h1 { "{config.display.heading}" }

                    UserForm {
                        draft: form.draft.clone(),
                        editing: form.is_editing(),
                        on_input: on_input,
                        on_submit: on_submit,
                    }

                    div {
                        class: "grid",
                        for (position, user) in current.users().iter().enumerate() {
                            UserCard {
                                key: "{card_key(position, user.id)}",
                                user: user.clone(),
                                on_edit: on_edit,
                                on_delete: on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}
