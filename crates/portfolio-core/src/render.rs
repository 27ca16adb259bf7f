//! Presentation port - the seam between theme state and the render surface
//!
//! The theme manager and content updaters never touch a real document
//! directly. They write presentational fields (text, imagery, class
//! membership, visibility, color lists) through [`PresentationPort`],
//! keyed by the stable target ids in [`targets`]. A write to a target the
//! surface does not know is skipped silently: a partial render surface is
//! not an error condition.
//!
//! Two implementations ship with the crate: [`DocumentModel`], the real
//! render state the desktop shell reads from, and [`RecordingPort`], a
//! test fake that records every call.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::persona::SKILL_CATEGORIES;

/// Stable render target ids.
pub mod targets {
    /// Document root (theme class carrier)
    pub const ROOT: &str = "root";
    /// Hero subtitle line
    pub const HERO_SUBTITLE: &str = "hero-subtitle";
    /// Hero description paragraph
    pub const HERO_DESCRIPTION: &str = "hero-description";
    /// Hero banner image
    pub const HERO_IMAGE: &str = "hero-image";
    /// Banner headline
    pub const BANNER_TITLE: &str = "banner-title";
    /// Banner supporting paragraph
    pub const BANNER_SUBTITLE: &str = "banner-subtitle";
    /// Skills section title
    pub const SKILLS_TITLE: &str = "skills-title";
    /// Projects section title
    pub const PROJECTS_TITLE: &str = "projects-title";
    /// Contact section title
    pub const CONTACT_TITLE: &str = "contact-title";
    /// Contact call-to-action line
    pub const CONTACT_TEXT: &str = "contact-text";
    /// Ambient particle field
    pub const PARTICLE_FIELD: &str = "particle-field";

    /// The class carried on [`ROOT`] while the Cybersecurity persona is active.
    pub const CYBER_THEME_CLASS: &str = "cybersecurity-theme";
    /// Signature effect class for the AI persona (circuit particles)
    pub const SIGNATURE_CIRCUIT_CLASS: &str = "signature-circuit";
    /// Signature effect class for the Cybersecurity persona (matrix drops)
    pub const SIGNATURE_MATRIX_CLASS: &str = "signature-matrix";

    /// Render target id for a skill category.
    pub fn skill_category(id: &str) -> String {
        format!("skill-category-{id}")
    }
}

/// Write access to a presentation surface.
///
/// Implementations use interior mutability so a single shared handle can be
/// written by the manager and read by the shell. All methods are expected
/// to tolerate unknown targets by skipping the write.
pub trait PresentationPort: Send + Sync {
    /// Set the text content of a target.
    fn set_text(&self, target: &str, value: &str);

    /// Set the image source and alt text of a target.
    fn set_image(&self, target: &str, src: &str, alt: &str);

    /// Add or remove a class on a target.
    fn set_class(&self, target: &str, class: &str, on: bool);

    /// Whether a target currently carries a class.
    fn has_class(&self, target: &str, class: &str) -> bool;

    /// Show or hide a target.
    fn set_visible(&self, target: &str, on: bool);

    /// Replace the ordered color list of a target.
    fn set_colors(&self, target: &str, colors: &[&'static str]);
}

#[derive(Default)]
struct DocumentState {
    texts: HashMap<String, String>,
    images: HashMap<String, (String, String)>,
    classes: HashMap<String, BTreeSet<String>>,
    visible: HashMap<String, bool>,
    colors: HashMap<String, Vec<&'static str>>,
}

/// The application's render state.
///
/// Registered targets accept writes; anything else is skipped (debug
/// logged). The desktop shell holds a clone of the handle and reads the
/// rendered fields when building its view.
#[derive(Clone)]
pub struct DocumentModel {
    registered: Arc<BTreeSet<String>>,
    state: Arc<RwLock<DocumentState>>,
}

impl DocumentModel {
    /// Create a model with every standard target registered.
    pub fn new() -> Self {
        let mut registered: BTreeSet<String> = [
            targets::ROOT,
            targets::HERO_SUBTITLE,
            targets::HERO_DESCRIPTION,
            targets::HERO_IMAGE,
            targets::BANNER_TITLE,
            targets::BANNER_SUBTITLE,
            targets::SKILLS_TITLE,
            targets::PROJECTS_TITLE,
            targets::CONTACT_TITLE,
            targets::CONTACT_TEXT,
            targets::PARTICLE_FIELD,
        ]
        .into_iter()
        .map(String::from)
        .collect();

        for category in SKILL_CATEGORIES {
            registered.insert(targets::skill_category(category.id));
        }

        Self {
            registered: Arc::new(registered),
            state: Arc::new(RwLock::new(DocumentState::default())),
        }
    }

    /// Create a model with only the given targets registered.
    ///
    /// Used to exercise partial render surfaces.
    pub fn with_targets<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            registered: Arc::new(targets.into_iter().map(Into::into).collect()),
            state: Arc::new(RwLock::new(DocumentState::default())),
        }
    }

    fn known(&self, target: &str) -> bool {
        if self.registered.contains(target) {
            true
        } else {
            tracing::debug!(target_id = target, "skipping write to unknown render target");
            false
        }
    }

    /// Rendered text of a target, if any.
    pub fn text(&self, target: &str) -> Option<String> {
        self.state.read().texts.get(target).cloned()
    }

    /// Rendered image `(src, alt)` of a target, if any.
    pub fn image(&self, target: &str) -> Option<(String, String)> {
        self.state.read().images.get(target).cloned()
    }

    /// Whether a target is visible. Targets default to visible.
    pub fn is_visible(&self, target: &str) -> bool {
        self.state.read().visible.get(target).copied().unwrap_or(true)
    }

    /// Ordered color list of a target.
    pub fn colors(&self, target: &str) -> Vec<&'static str> {
        self.state.read().colors.get(target).cloned().unwrap_or_default()
    }
}

impl Default for DocumentModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PresentationPort for DocumentModel {
    fn set_text(&self, target: &str, value: &str) {
        if self.known(target) {
            self.state.write().texts.insert(target.to_string(), value.to_string());
        }
    }

    fn set_image(&self, target: &str, src: &str, alt: &str) {
        if self.known(target) {
            self.state
                .write()
                .images
                .insert(target.to_string(), (src.to_string(), alt.to_string()));
        }
    }

    fn set_class(&self, target: &str, class: &str, on: bool) {
        if self.known(target) {
            let mut state = self.state.write();
            let classes = state.classes.entry(target.to_string()).or_default();
            if on {
                classes.insert(class.to_string());
            } else {
                classes.remove(class);
            }
        }
    }

    fn has_class(&self, target: &str, class: &str) -> bool {
        self.state
            .read()
            .classes
            .get(target)
            .is_some_and(|classes| classes.contains(class))
    }

    fn set_visible(&self, target: &str, on: bool) {
        if self.known(target) {
            self.state.write().visible.insert(target.to_string(), on);
        }
    }

    fn set_colors(&self, target: &str, colors: &[&'static str]) {
        if self.known(target) {
            self.state.write().colors.insert(target.to_string(), colors.to_vec());
        }
    }
}

/// A single recorded port call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCall {
    Text { target: String, value: String },
    Image { target: String, src: String, alt: String },
    Class { target: String, class: String, on: bool },
    Visible { target: String, on: bool },
    Colors { target: String, colors: Vec<&'static str> },
}

/// Recording test fake for [`PresentationPort`].
///
/// Records every call in order and answers `has_class` from the calls seen
/// so far, so ordering-dependent updaters behave as they would against a
/// real surface.
#[derive(Default)]
pub struct RecordingPort {
    calls: Mutex<Vec<RenderCall>>,
    classes: Mutex<HashMap<String, BTreeSet<String>>>,
}

impl RecordingPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded so far, in order.
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }

    /// Number of calls recorded so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// The last text written to a target, if any.
    pub fn last_text(&self, target: &str) -> Option<String> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                RenderCall::Text { target: t, value } if t == target => Some(value.clone()),
                _ => None,
            })
    }

    /// The last image written to a target, if any.
    pub fn last_image(&self, target: &str) -> Option<(String, String)> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                RenderCall::Image { target: t, src, alt } if t == target => {
                    Some((src.clone(), alt.clone()))
                }
                _ => None,
            })
    }

    /// The last visibility written to a target, if any.
    pub fn last_visible(&self, target: &str) -> Option<bool> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                RenderCall::Visible { target: t, on } if t == target => Some(*on),
                _ => None,
            })
    }

    /// The last color list written to a target, if any.
    pub fn last_colors(&self, target: &str) -> Option<Vec<&'static str>> {
        self.calls
            .lock()
            .iter()
            .rev()
            .find_map(|call| match call {
                RenderCall::Colors { target: t, colors } if t == target => Some(colors.clone()),
                _ => None,
            })
    }

    /// Forget everything recorded so far.
    pub fn reset(&self) {
        self.calls.lock().clear();
        self.classes.lock().clear();
    }
}

impl PresentationPort for RecordingPort {
    fn set_text(&self, target: &str, value: &str) {
        self.calls.lock().push(RenderCall::Text {
            target: target.to_string(),
            value: value.to_string(),
        });
    }

    fn set_image(&self, target: &str, src: &str, alt: &str) {
        self.calls.lock().push(RenderCall::Image {
            target: target.to_string(),
            src: src.to_string(),
            alt: alt.to_string(),
        });
    }

    fn set_class(&self, target: &str, class: &str, on: bool) {
        let mut classes = self.classes.lock();
        let entry = classes.entry(target.to_string()).or_default();
        if on {
            entry.insert(class.to_string());
        } else {
            entry.remove(class);
        }
        drop(classes);
        self.calls.lock().push(RenderCall::Class {
            target: target.to_string(),
            class: class.to_string(),
            on,
        });
    }

    fn has_class(&self, target: &str, class: &str) -> bool {
        self.classes
            .lock()
            .get(target)
            .is_some_and(|classes| classes.contains(class))
    }

    fn set_visible(&self, target: &str, on: bool) {
        self.calls.lock().push(RenderCall::Visible {
            target: target.to_string(),
            on,
        });
    }

    fn set_colors(&self, target: &str, colors: &[&'static str]) {
        self.calls.lock().push(RenderCall::Colors {
            target: target.to_string(),
            colors: colors.to_vec(),
        });
    }
}
