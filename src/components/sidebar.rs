//! Slide-out navigation sidebar
//!
//! Hamburger button toggles the panel; picking a section closes the
//! panel, marks the link active, and smooth-scrolls to the anchor.
//! Clicking the overlay closes without navigating.

use dioxus::document;
use dioxus::prelude::*;
use portfolio_core::{Section, SidebarState};

#[derive(Props, Clone, PartialEq)]
pub struct SidebarProps {
    pub sidebar: Signal<SidebarState>,
}

/// Sidebar navigation component.
#[component]
pub fn Sidebar(props: SidebarProps) -> Element {
    let mut sidebar = props.sidebar;
    let state = sidebar();

    let navigate = move |section: Section| {
        sidebar.with_mut(|s| s.navigate(section));
        let js = format!(
            "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
            section.anchor()
        );
        let _ = document::eval(&js);
    };

    let panel_class = if state.open { "sidebar-nav active" } else { "sidebar-nav" };

    rsx! {
        button {
            class: "hamburger-btn",
            "aria-label": "Toggle navigation",
            "aria-expanded": "{state.open}",
            onclick: move |_| sidebar.with_mut(|s| s.toggle()),
            "☰"
        }

        if state.open {
            div {
                class: "sidebar-overlay",
                onclick: move |_| sidebar.with_mut(|s| s.close()),
            }
        }

        nav { class: "{panel_class}",
            for section in Section::ALL {
                button {
                    key: "{section.anchor()}",
                    class: if state.is_active(section) { "sidebar-menu-link active" } else { "sidebar-menu-link" },
                    onclick: move |_| navigate(section),
                    "{section.display_name()}"
                }
            }
        }
    }
}
