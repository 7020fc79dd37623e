use leptos::{ev::MouseEvent, prelude::*};

use super::use_notifications;
use crate::links::{link_click, LinkClick};

/// Anchor for links that leave the page. A click on a link with nothing
/// behind it shows the maintenance advisory instead of navigating.
#[component]
pub fn OutboundLink(
    #[prop(into)] href: String,
    #[prop(optional)] external: bool,
    #[prop(optional)] label: Option<&'static str>,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let notifications = use_notifications();
    let click = link_click(&href);
    let on_click = move |ev: MouseEvent| {
        if let LinkClick::Notify(message) = click {
            ev.prevent_default();
            log::debug!("intercepted dead link");
            notifications.show(message);
        }
    };

    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noreferrer")
            aria-label=label
            class=class
            on:click=on_click
        >
            {children()}
        </a>
    }
}
