//! Switch notification toast
//!
//! Renders the manager's current notification, persona-styled. The
//! manager owns replacement and auto-dismiss; this component only
//! mirrors its state on each render generation.

use dioxus::prelude::*;
use portfolio_core::{Persona, ThemeNotification};

use crate::context::{use_generation, use_manager, use_manager_ready};

/// Notification toast component.
#[component]
pub fn NotificationToast() -> Element {
    let manager = use_manager();
    let manager_ready = use_manager_ready();
    let generation = use_generation();
    let mut current: Signal<Option<ThemeNotification>> = use_signal(|| None);

    // Mirror the presenter state whenever a theme event lands.
    use_effect(move || {
        let _generation = generation();
        if !manager_ready() {
            return;
        }
        spawn(async move {
            let shared = manager();
            let guard = shared.read().await;
            let notification = guard.as_ref().and_then(|mgr| mgr.notification());
            current.set(notification);
        });
    });

    let Some(notification) = current() else {
        return rsx! {};
    };

    let toast_class = match notification.persona {
        Persona::Ai => "theme-notification ai",
        Persona::Cyber => "theme-notification cyber",
    };
    let icon = match notification.persona {
        Persona::Ai => "🤖",
        Persona::Cyber => "🔥",
    };

    rsx! {
        div { class: "{toast_class}",
            div { style: "font-size: 1.4rem;", "{icon}" }
            div {
                div { class: "notification-main", "{notification.main_text}" }
                div { class: "notification-sub", "{notification.sub_text}" }
            }
            div { class: "notification-dot" }
        }
    }
}
