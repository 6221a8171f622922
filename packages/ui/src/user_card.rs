use dioxus::prelude::*;
use store::UserRecord;

use crate::icons::{FaPen, FaTrashCan};
use crate::Icon;

/// Fetched data may repeat an id, so position keeps keys unique.
pub(crate) fn card_key(position: usize, id: u64) -> String {
    format!("{position}-{id}")
}

#[component]
pub fn UserCard(
    user: UserRecord,
    on_edit: EventHandler<UserRecord>,
    on_delete: EventHandler<u64>,
) -> Element {
    let id = user.id;
    let edit_target = user.clone();

    rsx! {
        div {
            class: "card",
            h3 { class: "card-title", "{user.name}" }
            p { class: "card-email", "{user.email}" }
            p { class: "card-phone", "{user.phone}" }
            p { class: "card-website", "{user.website}" }
            div {
                class: "card-actions",
                button {
                    title: "Edit user",
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    Icon { icon: FaPen, width: 12, height: 12 }
                    " Edit"
                }
                button {
                    class: "danger",
                    title: "Delete user",
                    onclick: move |_| on_delete.call(id),
                    Icon { icon: FaTrashCan, width: 12, height: 12 }
                    " Delete"
                }
            }
        }
    }
}
