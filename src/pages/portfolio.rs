//! Portfolio page - the revealed content.
//!
//! Everything themed on this page reads its rendered value from the
//! document model the theme manager writes into; the page re-renders
//! when the render generation bumps on a theme event.
//!
//! Global shortcuts (suppressed while typing in the chat input):
//! - Ctrl+T  toggle persona
//! - Ctrl+/  toggle chat window
//! - Alt+1-4 jump to skills / projects / experience / contact
//! - Escape  close sidebar and credential modal

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::{
    targets, CredentialModal, Persona, Section, SidebarState, TimelineState, SKILL_CATEGORIES,
};

use crate::components::chat::ChatWidget;
use crate::components::credential_cards::CredentialSection;
use crate::components::notification::NotificationToast;
use crate::components::particle_field::ParticleField;
use crate::components::sidebar::Sidebar;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::components::timeline::TimelineSection;
use crate::context::{use_chat_session, use_document_model, use_generation, use_manager, use_typing_guard};

/// A project card, shown when its persona is active.
struct Project {
    title: &'static str,
    description: &'static str,
    tech: &'static [&'static str],
    persona: Persona,
}

static PROJECTS: &[Project] = &[
    Project {
        title: "Enterprise RAG Platform",
        description: "Retrieval-augmented generation service with hybrid search, \
                      evaluation harness, and multi-tenant serving.",
        tech: &["Python", "PyTorch", "Azure", "LangChain"],
        persona: Persona::Ai,
    },
    Project {
        title: "Demand Forecasting Pipeline",
        description: "End-to-end forecasting for retail: feature store, training \
                      orchestration, drift monitoring.",
        tech: &["Spark", "Airflow", "TensorFlow"],
        persona: Persona::Ai,
    },
    Project {
        title: "LLM Evaluation Harness",
        description: "Automated regression suite for model rollouts: golden sets, \
                      judge models, cost tracking.",
        tech: &["Python", "OpenAI", "Grafana"],
        persona: Persona::Ai,
    },
    Project {
        title: "Network Exposure Scanner",
        description: "Continuous attack-surface mapping with differential reporting \
                      for enterprise perimeters.",
        tech: &["Rust", "Nmap", "PostgreSQL"],
        persona: Persona::Cyber,
    },
    Project {
        title: "Forensics Timeline Builder",
        description: "Evidence ingestion and unified timeline reconstruction for \
                      incident response engagements.",
        tech: &["Python", "Volatility", "Elastic"],
        persona: Persona::Cyber,
    },
];

/// Display skills per category id (category visibility comes from the model).
static SKILL_ITEMS: &[(&str, &[&str])] = &[
    ("programming", &["Python", "Rust", "SQL", "TypeScript"]),
    ("ml-deep-learning", &["PyTorch", "TensorFlow", "scikit-learn", "XGBoost"]),
    ("generative-ai", &["Transformers", "LangChain", "RAG", "Fine-tuning"]),
    ("ai-infrastructure", &["Kubernetes", "MLflow", "Airflow", "Docker"]),
    ("cloud", &["Azure", "AWS", "GCP"]),
    ("visualization", &["Grafana", "Plotly", "Power BI"]),
    ("backend", &["FastAPI", "PostgreSQL", "Redis"]),
    ("cybersecurity", &["OSINT", "Threat Intel", "Incident Response", "Forensics"]),
    ("pentesting", &["Burp Suite", "Metasploit", "Nmap", "Wireshark"]),
];

fn scroll_to(section: Section) {
    let js = format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
        section.anchor()
    );
    let _ = document::eval(&js);
}

/// Portfolio page component.
#[component]
pub fn Portfolio() -> Element {
    let manager = use_manager();
    let model = use_document_model();
    let generation = use_generation();
    let typing = use_typing_guard();
    let mut chat = use_chat_session();

    let mut sidebar: Signal<SidebarState> = use_signal(SidebarState::new);
    let timeline: Signal<TimelineState> = use_signal(TimelineState::new);
    let mut modal: Signal<CredentialModal> = use_signal(CredentialModal::new);

    // Reading the generation subscribes this page to theme events.
    let _generation = generation();
    let model = model();

    let cyber_active = model.has_class(targets::ROOT, targets::CYBER_THEME_CLASS);
    let active_persona = if cyber_active { Persona::Cyber } else { Persona::Ai };

    let root_class = if cyber_active {
        "app-root cybersecurity-theme"
    } else {
        "app-root"
    };

    let toggle_persona = move || {
        spawn(async move {
            let shared = manager();
            let mut guard = shared.write().await;
            if let Some(mgr) = guard.as_mut() {
                mgr.toggle();
            }
        });
    };

    let on_keydown = move |e: KeyboardEvent| {
        // Input-aware: global shortcuts stay quiet while typing.
        if typing().0 {
            return;
        }
        let mods = e.modifiers();
        match e.key() {
            Key::Character(c) if mods.ctrl() && (c == "t" || c == "T") => {
                e.prevent_default();
                toggle_persona();
            }
            Key::Character(c) if mods.ctrl() && c == "/" => {
                e.prevent_default();
                chat.with_mut(|session| {
                    if let Some(session) = session.as_mut() {
                        session.window_mut().toggle();
                    }
                });
            }
            Key::Character(c) if mods.alt() => {
                let section = match c.as_str() {
                    "1" => Some(Section::Skills),
                    "2" => Some(Section::Projects),
                    "3" => Some(Section::Timeline),
                    "4" => Some(Section::Contact),
                    _ => None,
                };
                if let Some(section) = section {
                    e.prevent_default();
                    sidebar.with_mut(|s| s.navigate(section));
                    scroll_to(section);
                }
            }
            Key::Escape => {
                sidebar.with_mut(|s| s.close());
                modal.with_mut(|m| m.close());
            }
            _ => {}
        }
    };

    let text = |target: &str| model.text(target).unwrap_or_default();
    let banner_title = text(targets::BANNER_TITLE);
    let hero_subtitle = text(targets::HERO_SUBTITLE);
    let hero_description = text(targets::HERO_DESCRIPTION);
    let skills_title = text(targets::SKILLS_TITLE);
    let projects_title = text(targets::PROJECTS_TITLE);
    let contact_title = text(targets::CONTACT_TITLE);
    let contact_text = text(targets::CONTACT_TEXT);
    let (hero_src, hero_alt) = model.image(targets::HERO_IMAGE).unwrap_or_default();

    rsx! {
        div {
            class: "{root_class}",
            tabindex: "0",
            autofocus: true,
            onkeydown: on_keydown,

            ParticleField {}
            ThemeSwitcher {}
            Sidebar { sidebar }
            NotificationToast {}

            main { class: "portfolio-content",
                // Hero
                section { class: "hero", id: "hero",
                    div { class: "hero-copy",
                        h1 { class: "page-title", "{banner_title}" }
                        p { class: "text-highlight", "{hero_subtitle}" }
                        p { class: "body-text", "{hero_description}" }
                    }
                    div { class: "hero-banner-image",
                        img { src: "{hero_src}", alt: "{hero_alt}" }
                    }
                }

                // Skills (categories filtered by the active persona)
                section { class: "section", id: "skills",
                    h2 { class: "section-header", "{skills_title}" }
                    div { class: "skill-grid",
                        for category in SKILL_CATEGORIES {
                            if model.is_visible(&targets::skill_category(category.id)) {
                                div { class: "skill-category", key: "{category.id}",
                                    h3 { "{category.name}" }
                                    div { class: "skill-tag-row",
                                        for skill in skills_for(category.id) {
                                            span { class: "tech-tag", "{skill}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                // Projects
                section { class: "section", id: "projects",
                    h2 { class: "section-header", "{projects_title}" }
                    div { class: "credential-row",
                        for project in PROJECTS.iter().filter(|p| p.persona == active_persona) {
                            div { class: "credential-card", key: "{project.title}",
                                h3 { "{project.title}" }
                                p { class: "body-text", "{project.description}" }
                                div { class: "skill-tag-row",
                                    for tech in project.tech {
                                        span { class: "tech-tag", "{tech}" }
                                    }
                                }
                            }
                        }
                    }
                }

                // Experience timeline
                section { class: "section", id: "timeline",
                    h2 { class: "section-header", "Experience" }
                    TimelineSection { timeline }
                }

                // Credentials
                section { class: "section", id: "credentials",
                    h2 { class: "section-header", "Education & Certifications" }
                    CredentialSection { modal }
                }

                // Contact
                section { class: "section", id: "contact",
                    h2 { class: "section-header", "{contact_title}" }
                    p { class: "body-text", "{contact_text}" }
                }
            }

            ChatWidget {}
        }
    }
}

fn skills_for(category_id: &str) -> &'static [&'static str] {
    SKILL_ITEMS
        .iter()
        .find(|(id, _)| *id == category_id)
        .map(|(_, skills)| *skills)
        .unwrap_or(&[])
}
