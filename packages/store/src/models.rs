//! # Domain models for user records and the edit form
//!
//! Defines the data shown on each card and the values held by the form while
//! a user is typing. These types are `Serialize + Deserialize` so records can
//! be decoded straight from the remote JSON array.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserRecord`] | One user entry: integer `id` plus four display fields. Unknown JSON keys (`username`, `address`, `company`, ...) are ignored on decode. |
//! | [`Draft`] | The four editable fields of the form, all plain strings. |
//! | [`Field`] | Names one of the four fields; carries the input `name` attribute, placeholder, and HTML input type the form renders. |

use serde::{Deserialize, Serialize};

/// A single user as shown in the card grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-assigned on fetch, client-assigned on local create.
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl UserRecord {
    /// Build a record from a draft under the given id.
    pub fn from_draft(id: u64, draft: &Draft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            website: draft.website.clone(),
        }
    }

    /// Overwrite the four display fields, keeping `id`.
    pub fn apply(&mut self, draft: &Draft) {
        self.name = draft.name.clone();
        self.email = draft.email.clone();
        self.phone = draft.phone.clone();
        self.website = draft.website.clone();
    }
}

/// In-progress form values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
}

impl Draft {
    /// Copy the editable fields out of an existing record.
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            website: record.website.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Website => &self.website,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Website => self.website = value,
        }
    }

    /// True when every field is non-empty, matching `required` on each input.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.get(*f).is_empty())
    }
}

/// One of the four editable fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Website,
}

impl Field {
    /// Render order of the form inputs.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Website];

    /// Value of the input's `name` attribute.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Website => "website",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Website => "Website",
        }
    }

    /// HTML input type.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }
}
