//! # Directory — page state behind the user grid
//!
//! [`Directory`] owns the two pieces of mutable state the page has: the
//! [`UserList`] shown as cards and the [`FormState`] behind the create/edit
//! form. The UI keeps one `Directory` in a signal and calls into it from its
//! event handlers; nothing here touches the DOM, so every transition is unit
//! tested on the host.
//!
//! ## Form controller
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`set_field`](Directory::set_field) | Overwrites one draft field. |
//! | [`submit`](Directory::submit) | `Creating`: appends a record. `Editing(id)`: replaces that record's fields. Clears the draft and returns to `Creating` either way. An incomplete draft is rejected untouched. |
//!
//! ## List reducer
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`start_edit`](Directory::start_edit) | Copies a record into the draft and switches to `Editing(record.id)`. |
//! | [`delete`](Directory::delete) | Removes the record with that id. No confirmation, no undo. |
//! | [`finish_load`](Directory::finish_load) | Folds the one fetch result into the list and reports the [`LoadState`]. |

use std::fmt::Display;

use crate::list::UserList;
use crate::models::{Draft, Field, UserRecord};
use crate::source::LoadState;

/// Whether submit creates a new record or updates an existing one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(u64),
}

/// The form's draft plus its editing flag and target id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub draft: Draft,
    pub mode: FormMode,
}

impl FormState {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    /// Back to an empty draft in `Creating` mode.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What a submit did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(u64),
    Updated(u64),
    /// At least one field was empty; nothing changed.
    Rejected,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Directory {
    users: UserList,
    form: FormState,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &UserList {
        &self.users
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Apply the result of the initial fetch.
    ///
    /// On success the record sequence is replaced wholesale. On failure the
    /// records are left as they were and the error's display text is kept.
    pub fn finish_load<E: Display>(&mut self, result: Result<Vec<UserRecord>, E>) -> LoadState {
        match result {
            Ok(users) => {
                self.users.replace_all(users);
                LoadState::Ready
            }
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.draft.set(field, value);
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.form.draft.is_complete() {
            return SubmitOutcome::Rejected;
        }

        let outcome = match self.form.mode {
            FormMode::Editing(id) => {
                // A target deleted mid-edit matches nothing; the list stays as is.
                self.users.update(id, &self.form.draft);
                SubmitOutcome::Updated(id)
            }
            FormMode::Creating => SubmitOutcome::Created(self.users.create(&self.form.draft)),
        };
        self.form.reset();
        outcome
    }

    pub fn start_edit(&mut self, record: &UserRecord) {
        self.form.draft = Draft::from_record(record);
        self.form.mode = FormMode::Editing(record.id);
    }

    /// Remove the record with `id`. Returns whether one was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        self.users.delete(id) > 0
    }
}
