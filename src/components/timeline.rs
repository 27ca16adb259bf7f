//! Collapsible experience timeline
//!
//! Each entry starts collapsed; "View full details" expands it in place
//! without touching the other entries.

use dioxus::prelude::*;
use portfolio_core::{TimelineState, TIMELINE_ENTRIES};

#[derive(Props, Clone, PartialEq)]
pub struct TimelineProps {
    pub timeline: Signal<TimelineState>,
}

/// Timeline section component.
#[component]
pub fn TimelineSection(props: TimelineProps) -> Element {
    let mut timeline = props.timeline;
    let state = timeline();

    let rows: Vec<(&'static portfolio_core::TimelineEntry, bool)> = TIMELINE_ENTRIES
        .iter()
        .map(|entry| (entry, state.is_expanded(entry.id)))
        .collect();

    rsx! {
        div {
            for (entry, expanded) in rows {
                div { class: "timeline-item", id: "timeline-{entry.id}", key: "{entry.id}",
                    h3 { "{entry.role}" }
                    p { class: "text-highlight", "{entry.organization}" }
                    p { class: "timeline-period", "{entry.period}" }
                    p { class: "body-text", "{entry.summary}" }

                    button {
                        class: "timeline-expand-btn",
                        "aria-expanded": "{expanded}",
                        onclick: move |_| {
                            timeline.with_mut(|t| { t.toggle(entry.id); });
                        },
                        if expanded { "Hide details ▲" } else { "View full details ▼" }
                    }

                    if expanded {
                        div { class: "timeline-details",
                            for achievement in entry.achievements {
                                div { class: "achievement-card", "{achievement}" }
                            }
                            div { class: "skill-tag-row",
                                for tech in entry.tech_stack {
                                    span { class: "tech-tag", "{tech}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
