use dioxus::prelude::*;
use store::{Draft, Field};

/// Create/edit form. Every input is `required`, so the browser blocks a
/// submit with blank fields before `on_submit` fires.
#[component]
pub fn UserForm(
    draft: Draft,
    editing: bool,
    on_input: EventHandler<(Field, String)>,
    on_submit: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "user-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            for field in Field::ALL {
                FormField {
                    key: "{field.input_name()}",
                    field: field,
                    value: draft.get(field).to_string(),
                    on_input: on_input,
                }
            }
            button {
                r#type: "submit",
                if editing { "Update User" } else { "Create User" }
            }
        }
    }
}

/// One text input bound to a single draft field.
#[component]
pub fn FormField(field: Field, value: String, on_input: EventHandler<(Field, String)>) -> Element {
    rsx! {
        input {
            r#type: field.input_type(),
            name: field.input_name(),
            placeholder: field.placeholder(),
            required: true,
            value: "{value}",
            oninput: move |evt: FormEvent| on_input.call((field, evt.value())),
        }
    }
}
