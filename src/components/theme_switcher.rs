//! Theme switcher control
//!
//! Fixed pill in the top-right corner: two labeled personas around a
//! sliding toggle. Clicking the toggle flips the persona through the
//! theme manager; everything else follows from the manager's updates.

use dioxus::prelude::*;
use portfolio_core::{targets, Persona};

use crate::context::{use_document_model, use_generation, use_manager};

/// Theme switcher component.
#[component]
pub fn ThemeSwitcher() -> Element {
    let manager = use_manager();
    let model = use_document_model();
    let generation = use_generation();

    // Re-render on theme events.
    let _generation = generation();
    let cyber = model().has_class(targets::ROOT, targets::CYBER_THEME_CLASS);

    let toggle = move |_| {
        spawn(async move {
            let shared = manager();
            let mut guard = shared.write().await;
            if let Some(mgr) = guard.as_mut() {
                mgr.toggle();
            }
        });
    };

    let ai_label = if cyber { "theme-label" } else { "theme-label active" };
    let cyber_label = if cyber { "theme-label active" } else { "theme-label" };
    let toggle_class = if cyber { "theme-toggle cybersecurity" } else { "theme-toggle" };

    rsx! {
        div { class: "theme-switcher",
            span {
                class: "{ai_label}",
                onclick: move |_| set_persona(manager, Persona::Ai),
                "🤖 AI Engineer"
            }
            div {
                class: "{toggle_class}",
                onclick: toggle,
                "aria-label": "Switch persona",
                div { class: "toggle-slider" }
            }
            span {
                class: "{cyber_label}",
                onclick: move |_| set_persona(manager, Persona::Cyber),
                "🔐 Cybersecurity"
            }
        }
    }
}

fn set_persona(manager: Signal<crate::context::SharedManager>, persona: Persona) {
    spawn(async move {
        let shared = manager();
        let mut guard = shared.write().await;
        if let Some(mgr) = guard.as_mut() {
            mgr.set_persona(persona);
        }
    });
}
