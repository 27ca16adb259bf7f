//! Slide-out sidebar navigation state

/// Navigable portfolio sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Skills,
    Projects,
    Timeline,
    Contact,
}

impl Section {
    /// All sections in page order.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Skills,
        Section::Projects,
        Section::Timeline,
        Section::Contact,
    ];

    /// Display name shown in the sidebar menu.
    pub fn display_name(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Timeline => "Experience",
            Section::Contact => "Contact",
        }
    }

    /// Anchor id of the section in the page.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Timeline => "timeline",
            Section::Contact => "contact",
        }
    }
}

/// Open/close state of the hamburger sidebar.
///
/// Navigation closes the sidebar and records the chosen section as
/// active (there is no scroll-spy; active tracks explicit navigation).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub open: bool,
    pub active: Option<Section>,
}

impl SidebarState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Navigate to a section: mark it active and close the sidebar.
    pub fn navigate(&mut self, section: Section) {
        self.active = Some(section);
        self.close();
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == Some(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_with_no_active_section() {
        let state = SidebarState::new();
        assert!(!state.open);
        assert!(state.active.is_none());
    }

    #[test]
    fn test_toggle() {
        let mut state = SidebarState::new();
        state.toggle();
        assert!(state.open);
        state.toggle();
        assert!(!state.open);
    }

    #[test]
    fn test_navigate_closes_and_activates() {
        let mut state = SidebarState::new();
        state.open();
        state.navigate(Section::Timeline);

        assert!(!state.open);
        assert!(state.is_active(Section::Timeline));
        assert!(!state.is_active(Section::Skills));
    }

    #[test]
    fn test_anchors_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for section in Section::ALL {
            assert!(seen.insert(section.anchor()));
        }
    }
}
