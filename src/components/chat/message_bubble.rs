//! Chat message bubbles
//!
//! User messages render as plain text (input is never treated as
//! markup); assistant messages render their markdown.

use dioxus::prelude::*;
use portfolio_core::{ChatMessage, ChatRole};
use pulldown_cmark::{html, Parser};

/// Render assistant markdown to HTML.
fn render_markdown(content: &str) -> String {
    let parser = Parser::new(content);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Individual message bubble component.
#[component]
pub fn MessageBubble(message: ChatMessage) -> Element {
    let mine = message.role == ChatRole::User;

    let row_class = if mine { "message-row user" } else { "message-row assistant" };
    let bubble_class = match (mine, message.is_error) {
        (true, _) => "message-bubble user",
        (false, false) => "message-bubble assistant",
        (false, true) => "message-bubble assistant error",
    };
    let body = if mine {
        None
    } else {
        Some(render_markdown(&message.content))
    };
    let time = message.relative_time();

    rsx! {
        div { class: "{row_class}",
            div { class: "{bubble_class}",
                if let Some(body) = body {
                    div { dangerous_inner_html: "{body}" }
                } else {
                    div { "{message.content}" }
                }
                div { class: "message-time", "{time}" }
            }
        }
    }
}
