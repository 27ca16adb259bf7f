//! Welcome page - the entry gate in front of the portfolio.
//!
//! Three ways in: the generic "Enter Portfolio" button (keeps the saved
//! persona), or one of the two persona cards (switches persona, then
//! enters). Enter/Space triggers the generic entry. The gate is
//! single-use: once the reveal starts, further clicks do nothing.

use dioxus::prelude::*;
use portfolio_core::Persona;

use crate::app::Route;
use crate::context::{use_entry_gate, use_manager, use_manager_ready};

/// Welcome screen component.
#[component]
pub fn Welcome() -> Element {
    let navigator = use_navigator();
    let manager = use_manager();
    let manager_ready = use_manager_ready();
    let gate = use_entry_gate();
    let mut transitioning = use_signal(|| false);

    // One entry path for all three triggers. The gate decides whether
    // anything actually happens.
    let begin_enter = move |persona: Option<Persona>| {
        if !manager_ready() {
            return;
        }
        spawn(async move {
            let gate = gate();
            let entered = match persona {
                Some(target) => {
                    let shared = manager();
                    let mut guard = shared.write().await;
                    match guard.as_mut() {
                        Some(mgr) => gate.enter_with(target, mgr),
                        None => false,
                    }
                }
                None => gate.enter(),
            };

            if entered {
                transitioning.set(true);
                gate.finish_transition().await;
                navigator.push(Route::Portfolio {});
            }
        });
    };

    let screen_class = if transitioning() {
        "welcome-screen transitioning"
    } else {
        "welcome-screen"
    };

    rsx! {
        div {
            class: "app-root",
            main {
                class: "{screen_class}",
                tabindex: "0",
                autofocus: true,
                onkeydown: move |e| {
                    match e.key() {
                        Key::Enter => begin_enter(None),
                        Key::Character(c) if c == " " => begin_enter(None),
                        _ => {}
                    }
                },

                h1 { class: "page-title", "Portfolio" }
                p { class: "body-text", "AI Engineering × Cybersecurity" }

                div { class: "theme-indicators",
                    div {
                        class: "theme-indicator ai",
                        onclick: move |_| begin_enter(Some(Persona::Ai)),
                        div { class: "indicator-icon", "🤖" }
                        div { class: "indicator-name", "AI Engineer" }
                        p { class: "body-text", "ML systems, generative AI, cloud architecture" }
                    }
                    div {
                        class: "theme-indicator cyber",
                        onclick: move |_| begin_enter(Some(Persona::Cyber)),
                        div { class: "indicator-icon", "🔐" }
                        div { class: "indicator-name", "Cybersecurity" }
                        p { class: "body-text", "Pentesting, forensics, security research" }
                    }
                }

                button {
                    class: "btn-enter",
                    onclick: move |_| begin_enter(None),
                    if transitioning() { "Loading..." } else { "Enter Portfolio" }
                }
            }
        }
    }
}
