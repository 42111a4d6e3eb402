use dioxus::prelude::*;
use tracing::{debug, info};

use crate::components::controls::{BackButton, SkipButton};
use crate::components::permission_dialog::PermissionDialog;
use crate::components::{use_flow, use_flow_config};
use crate::core::catalog::{matches_query, Contact, Friend, CONTACTS, SUGGESTED_FRIENDS};
use crate::core::flow::Screen;
use crate::core::invite::{InviteAction, InviteStep};
use crate::core::permissions::{self, PermissionKind};
use crate::core::selection::Selection;
use crate::t;

#[component]
pub fn FriendsScreen() -> Element {
    let flow = use_flow();
    let config = use_flow_config();
    let mut step = use_signal(InviteStep::default);
    let mut show_permission = use_signal(|| false);
    let mut query = use_signal(String::new);
    let added = use_signal(Selection::<u32>::default);
    let invited = use_signal(Selection::<u32>::default);

    let advance = move |_: MouseEvent| {
        let action = step().on_invite();
        debug!(?action, "invite pressed");
        match action {
            InviteAction::ShowContactsPermission => show_permission.set(true),
            InviteAction::Advance(next) => step.set(next),
            InviteAction::Finish => {
                info!(
                    added = added.peek().len(),
                    invited = invited.peek().len(),
                    "friends step done"
                );
                flow.navigate(Screen::PhotoCapture);
            }
        }
    };

    let allow = move |_: ()| {
        show_permission.set(false);
        spawn(async move {
            permissions::request(PermissionKind::Contacts, config.timings.permission_prompt_ms)
                .await;
            step.set(InviteStep::after_contacts_allowed());
        });
    };

    let deny = move |_: ()| {
        show_permission.set(false);
        permissions::decline(PermissionKind::Contacts);
    };

    let current = step();
    let filter = query();
    let friends: Vec<Friend> = SUGGESTED_FRIENDS
        .iter()
        .copied()
        .filter(|f| matches_query(f.name, &filter))
        .collect();
    let contacts: Vec<Contact> = CONTACTS
        .iter()
        .copied()
        .filter(|c| matches_query(c.name, &filter))
        .collect();
    let cta = if current == InviteStep::Invite {
        t!("common-done")
    } else {
        t!("friends-invite")
    };

    rsx! {
        section { class: "page page-friends",
            header { class: "page__header",
                BackButton { to: Screen::Location }
                SkipButton { to: Screen::PhotoCapture }
            }
            h1 { class: "page__title", {t!("friends-title")} }
            p { class: "page__subtitle", {t!("friends-subtitle")} }

            if current == InviteStep::Main {
                div { class: "friend-grid",
                    for friend in friends {
                        FriendCard { key: "{friend.id}", friend, added }
                    }
                }
                p { class: "friends__more", {t!("friends-view-more")} }
            } else {
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: t!("friends-search"),
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                h2 { class: "section-title", {t!("friends-on-tempo")} }
                ul { class: "people",
                    for friend in friends {
                        FriendRow { key: "{friend.id}", friend, added }
                    }
                }
                if current == InviteStep::Invite {
                    h2 { class: "section-title", {t!("friends-from-contacts")} }
                    ul { class: "people",
                        for contact in contacts {
                            ContactRow { key: "{contact.id}", contact, invited }
                        }
                    }
                }
            }

            div { class: "page__footer",
                button {
                    r#type: "button",
                    class: "button button--primary button--block",
                    onclick: advance,
                    "{cta}"
                }
            }

            if show_permission() {
                PermissionDialog {
                    title: t!("friends-contacts-dialog-title"),
                    body: t!("friends-contacts-dialog-body"),
                    on_allow: allow,
                    on_deny: deny,
                }
            }
        }
    }
}

#[component]
fn FriendCard(friend: Friend, added: Signal<Selection<u32>>) -> Element {
    let mut added = added;
    let is_added = added.read().contains(&friend.id);

    rsx! {
        div { class: "friend-card",
            div { class: "avatar", aria_hidden: "true", "{friend.avatar}" }
            p { class: "friend-card__name", "{friend.name}" }
            p { class: "friend-card__handle", "{friend.handle}" }
            button {
                r#type: "button",
                class: if is_added { "pill pill--done" } else { "pill" },
                onclick: move |_| {
                    added.write().toggle(friend.id);
                },
                if is_added {
                    {t!("friends-added")}
                } else {
                    {t!("friends-add")}
                }
            }
        }
    }
}

#[component]
fn FriendRow(friend: Friend, added: Signal<Selection<u32>>) -> Element {
    let mut added = added;
    let is_added = added.read().contains(&friend.id);

    rsx! {
        li { class: "person",
            div { class: "avatar", aria_hidden: "true", "{friend.avatar}" }
            div { class: "person__text",
                p { class: "person__name", "{friend.name}" }
                p { class: "person__detail", "{friend.handle}" }
            }
            button {
                r#type: "button",
                class: if is_added { "pill pill--done" } else { "pill" },
                onclick: move |_| {
                    added.write().toggle(friend.id);
                },
                if is_added {
                    {t!("friends-added")}
                } else {
                    {t!("friends-add")}
                }
            }
        }
    }
}

#[component]
fn ContactRow(contact: Contact, invited: Signal<Selection<u32>>) -> Element {
    let mut invited = invited;
    let is_invited = invited.read().contains(&contact.id);

    rsx! {
        li { class: "person",
            div { class: "avatar", aria_hidden: "true", "{contact.avatar}" }
            div { class: "person__text",
                p { class: "person__name", "{contact.name}" }
                p { class: "person__detail", "{contact.phone}" }
            }
            button {
                r#type: "button",
                class: if is_invited { "pill pill--done" } else { "pill" },
                onclick: move |_| {
                    invited.write().toggle(contact.id);
                },
                if is_invited {
                    {t!("friends-invited")}
                } else {
                    {t!("friends-invite-one")}
                }
            }
        }
    }
}
