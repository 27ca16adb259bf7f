//! Credential cards and detail modal
//!
//! Studies and certifications render as cards; clicking one opens the
//! shared modal. At most one modal is open; opening another credential
//! replaces it, the overlay or close button dismisses it.

use dioxus::prelude::*;
use portfolio_core::{Credential, CredentialModal, CERTIFICATIONS, STUDIES};

#[derive(Props, Clone, PartialEq)]
pub struct CredentialProps {
    pub modal: Signal<CredentialModal>,
}

/// Credentials section component.
#[component]
pub fn CredentialSection(props: CredentialProps) -> Element {
    let mut modal = props.modal;

    rsx! {
        h3 { class: "text-highlight", "Studies" }
        div { class: "credential-row",
            for credential in STUDIES {
                CredentialCard { credential, modal }
            }
        }

        h3 { class: "text-highlight", style: "margin-top: 2rem;", "Certifications" }
        div { class: "credential-row",
            for credential in CERTIFICATIONS {
                CredentialCard { credential, modal }
            }
        }

        if let Some(open) = modal().current() {
            div {
                class: "modal-overlay",
                onclick: move |_| modal.with_mut(|m| m.close()),
                div {
                    class: "modal-content",
                    // Keep clicks inside the dialog from closing it.
                    onclick: move |e| e.stop_propagation(),

                    h2 { class: "section-header", "{open.title}" }
                    p { class: "credential-issuer", "{open.issuer} · {open.period} · {open.standing}" }
                    p { class: "body-text", style: "margin-top: 1rem;", "{open.description}" }

                    div { class: "skill-tag-row",
                        for skill in open.skills {
                            span { class: "tech-tag", "{skill}" }
                        }
                    }

                    button {
                        class: "timeline-expand-btn",
                        style: "margin-top: 1.5rem;",
                        onclick: move |_| modal.with_mut(|m| m.close()),
                        "Close"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct CardProps {
    credential: &'static Credential,
    modal: Signal<CredentialModal>,
}

#[component]
fn CredentialCard(props: CardProps) -> Element {
    let mut modal = props.modal;
    let credential = props.credential;

    rsx! {
        div {
            class: "credential-card",
            key: "{credential.id}",
            onclick: move |_| modal.with_mut(|m| m.open(credential.id)),
            h3 { "{credential.title}" }
            p { class: "credential-issuer", "{credential.issuer}" }
            p { class: "timeline-period", "{credential.standing}" }
        }
    }
}
