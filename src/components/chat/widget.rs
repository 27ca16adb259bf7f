//! Scripted chat widget
//!
//! Floating bubble that opens the chat window. Sending pushes the user
//! message immediately, shows the typing indicator briefly, then
//! resolves the reply through the scripted responder with the persona
//! that is active at resolution time.

use std::time::Duration;

use dioxus::prelude::*;
use portfolio_core::{targets, Persona, ScriptedResponder};

use super::MessageBubble;
use crate::context::{
    use_chat_session, use_document_model, use_generation, use_typing_guard, TypingGuard,
};

/// Artificial delay before the scripted reply lands, so the typing
/// indicator reads as typing.
const REPLY_DELAY: Duration = Duration::from_millis(600);

/// Quick prompts offered above the input, per persona.
fn quick_actions(persona: Persona) -> &'static [&'static str] {
    match persona {
        Persona::Ai => &["What's the experience with AI?", "Tell me about the AI projects"],
        Persona::Cyber => &[
            "Tell me about the security projects",
            "What about incident response?",
        ],
    }
}

/// Chat widget component.
#[component]
pub fn ChatWidget() -> Element {
    let mut chat = use_chat_session();
    let model = use_document_model();
    let generation = use_generation();
    let mut typing_guard = use_typing_guard();
    let mut draft = use_signal(String::new);

    let _generation = generation();
    let cyber = model().has_class(targets::ROOT, targets::CYBER_THEME_CLASS);
    let persona = if cyber { Persona::Cyber } else { Persona::Ai };

    // Session not ready yet: render nothing.
    let Some((window, pending, messages)) = chat
        .read()
        .as_ref()
        .map(|s| (s.window(), s.is_pending(), s.messages().to_vec()))
    else {
        return rsx! {};
    };

    let send_text = move |text: String| {
        let accepted = chat.with_mut(|session| {
            session
                .as_mut()
                .map(|s| s.submit(&text))
                .unwrap_or(false)
        });
        if !accepted {
            return;
        }
        spawn(async move {
            tokio::time::sleep(REPLY_DELAY).await;
            // The persona that is active when the reply lands, not when
            // the message was sent.
            let cyber = model().has_class(targets::ROOT, targets::CYBER_THEME_CLASS);
            let persona = if cyber { Persona::Cyber } else { Persona::Ai };
            chat.with_mut(|session| {
                if let Some(s) = session.as_mut() {
                    s.resolve(persona, &ScriptedResponder::new());
                }
            });
        });
    };

    let mut send_draft = move || {
        let text = draft();
        if text.trim().is_empty() {
            return;
        }
        draft.set(String::new());
        send_text(text);
    };

    rsx! {
        div {
            class: "chatbot-bubble",
            "aria-label": "Open chat",
            onclick: move |_| {
                chat.with_mut(|session| {
                    if let Some(s) = session.as_mut() {
                        s.window_mut().toggle();
                    }
                });
            },
            "💬"
        }

        if window.open {
            div {
                class: if window.maximized { "chatbot-window maximized" } else { "chatbot-window" },

                div { class: "chatbot-header",
                    span { "Portfolio Assistant" }
                    div {
                        button {
                            "aria-label": "Maximize chat",
                            onclick: move |_| {
                                chat.with_mut(|session| {
                                    if let Some(s) = session.as_mut() {
                                        s.window_mut().toggle_maximized();
                                    }
                                });
                            },
                            "⛶"
                        }
                        button {
                            "aria-label": "Close chat",
                            onclick: move |_| {
                                chat.with_mut(|session| {
                                    if let Some(s) = session.as_mut() {
                                        s.window_mut().close();
                                    }
                                });
                            },
                            "✕"
                        }
                    }
                }

                div { class: "chatbot-messages",
                    for message in messages {
                        MessageBubble { key: "{message.id}", message }
                    }
                }

                if pending {
                    div { class: "typing-indicator", "Assistant is typing…" }
                }

                div { class: "chat-quick-actions",
                    for action in quick_actions(persona) {
                        button {
                            key: "{action}",
                            class: "chat-quick-action",
                            onclick: move |_| send_text(action.to_string()),
                            "{action}"
                        }
                    }
                }

                div { class: "chatbot-input-row",
                    textarea {
                        rows: "2",
                        placeholder: "Ask me anything...",
                        value: "{draft}",
                        oninput: move |e| draft.set(e.value()),
                        onfocusin: move |_| typing_guard.set(TypingGuard(true)),
                        onfocusout: move |_| typing_guard.set(TypingGuard(false)),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter && !e.modifiers().shift() {
                                e.prevent_default();
                                send_draft();
                            }
                        },
                    }
                    button {
                        onclick: move |_| send_draft(),
                        disabled: pending,
                        "Send"
                    }
                }
            }
        }
    }
}
