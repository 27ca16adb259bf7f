//! Content updaters - pure re-render procedures per visual subsystem
//!
//! Each updater projects the active [`Persona`]'s profile onto one visual
//! subsystem through the [`PresentationPort`]. Updaters are idempotent,
//! total over both personas, and hold no state of their own. They run in
//! the fixed order returned by [`standard_updaters`]: content text first,
//! then imagery, then palette/particle concerns, so a later updater may
//! read classed state an earlier one just wrote (the palette updater keys
//! off the freshly-set theme class).

use crate::persona::{profile, Persona, SignatureEffect, SKILL_CATEGORIES};
use crate::render::{targets, PresentationPort};

/// A pure re-render procedure bound to one visual subsystem.
pub trait ContentUpdater: Send + Sync {
    /// Stable name, used for logging and ordering assertions.
    fn name(&self) -> &'static str;

    /// Re-render the subsystem to match `persona`.
    fn apply(&self, persona: Persona, port: &dyn PresentationPort);
}

/// The full updater set in its fixed invocation order.
pub fn standard_updaters() -> Vec<Box<dyn ContentUpdater>> {
    vec![
        Box::new(ThemeClassUpdater),
        Box::new(HeroTextUpdater),
        Box::new(SectionTitleUpdater),
        Box::new(HeroImageUpdater),
        Box::new(SkillFilterUpdater),
        Box::new(ParticlePaletteUpdater),
        Box::new(AmbientCadenceUpdater),
    ]
}

/// Carries the theme class on the document root.
///
/// Runs first: every later updater may key off the root class.
pub struct ThemeClassUpdater;

impl ContentUpdater for ThemeClassUpdater {
    fn name(&self) -> &'static str {
        "theme-class"
    }

    fn apply(&self, persona: Persona, port: &dyn PresentationPort) {
        port.set_class(
            targets::ROOT,
            targets::CYBER_THEME_CLASS,
            persona == Persona::Cyber,
        );
    }
}

/// Hero copy: subtitle, description, banner headline/paragraph, contact text.
pub struct HeroTextUpdater;

impl ContentUpdater for HeroTextUpdater {
    fn name(&self) -> &'static str {
        "hero-text"
    }

    fn apply(&self, persona: Persona, port: &dyn PresentationPort) {
        let p = profile(persona);
        port.set_text(targets::HERO_SUBTITLE, p.subtitle);
        port.set_text(targets::HERO_DESCRIPTION, p.hero_description);
        port.set_text(targets::BANNER_TITLE, p.banner_title);
        port.set_text(targets::BANNER_SUBTITLE, p.banner_subtitle);
        port.set_text(targets::CONTACT_TEXT, p.contact_text);
    }
}

/// Themed section titles (skills, projects, contact).
pub struct SectionTitleUpdater;

impl ContentUpdater for SectionTitleUpdater {
    fn name(&self) -> &'static str {
        "section-titles"
    }

    fn apply(&self, persona: Persona, port: &dyn PresentationPort) {
        let p = profile(persona);
        port.set_text(targets::SKILLS_TITLE, p.skills_title);
        port.set_text(targets::PROJECTS_TITLE, p.projects_title);
        port.set_text(targets::CONTACT_TITLE, p.contact_title);
    }
}

/// Hero banner imagery.
pub struct HeroImageUpdater;

impl ContentUpdater for HeroImageUpdater {
    fn name(&self) -> &'static str {
        "hero-image"
    }

    fn apply(&self, persona: Persona, port: &dyn PresentationPort) {
        let p = profile(persona);
        port.set_image(targets::HERO_IMAGE, p.hero_image, p.hero_image_alt);
    }
}

/// Shows the active persona's skill categories, hides the rest.
pub struct SkillFilterUpdater;

impl ContentUpdater for SkillFilterUpdater {
    fn name(&self) -> &'static str {
        "skill-filter"
    }

    fn apply(&self, persona: Persona, port: &dyn PresentationPort) {
        let p = profile(persona);
        for category in SKILL_CATEGORIES {
            let target = targets::skill_category(category.id);
            port.set_visible(&target, p.includes_category(category));
        }
    }
}

/// Publishes the particle palette for the active theme.
///
/// Reads the theme class set by [`ThemeClassUpdater`] rather than the
/// persona argument, matching the original surface where particle color
/// selection keyed off the document's theme class.
pub struct ParticlePaletteUpdater;

impl ContentUpdater for ParticlePaletteUpdater {
    fn name(&self) -> &'static str {
        "particle-palette"
    }

    fn apply(&self, _persona: Persona, port: &dyn PresentationPort) {
        let themed = if port.has_class(targets::ROOT, targets::CYBER_THEME_CLASS) {
            Persona::Cyber
        } else {
            Persona::Ai
        };
        port.set_colors(targets::PARTICLE_FIELD, profile(themed).particle_palette);
    }
}

/// Marks the particle field with the persona's signature effect class.
///
/// The actual timer cadence lives in the effect registry; this updater
/// only publishes which signature effect the field should style.
pub struct AmbientCadenceUpdater;

impl ContentUpdater for AmbientCadenceUpdater {
    fn name(&self) -> &'static str {
        "ambient-cadence"
    }

    fn apply(&self, persona: Persona, port: &dyn PresentationPort) {
        let signature = profile(persona).signature;
        port.set_class(
            targets::PARTICLE_FIELD,
            targets::SIGNATURE_CIRCUIT_CLASS,
            signature == SignatureEffect::Circuit,
        );
        port.set_class(
            targets::PARTICLE_FIELD,
            targets::SIGNATURE_MATRIX_CLASS,
            signature == SignatureEffect::MatrixDrop,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::RecordingPort;

    fn run_all(persona: Persona, port: &RecordingPort) {
        for updater in standard_updaters() {
            updater.apply(persona, port);
        }
    }

    #[test]
    fn test_updater_order_is_text_before_imagery_before_palette() {
        let names: Vec<_> = standard_updaters().iter().map(|u| u.name()).collect();
        let pos = |name: &str| names.iter().position(|n| *n == name).unwrap();

        assert_eq!(pos("theme-class"), 0);
        assert!(pos("hero-text") < pos("hero-image"));
        assert!(pos("section-titles") < pos("hero-image"));
        assert!(pos("hero-image") < pos("particle-palette"));
        assert!(pos("particle-palette") < pos("ambient-cadence"));
    }

    #[test]
    fn test_updaters_are_total() {
        for persona in [Persona::Ai, Persona::Cyber] {
            let port = RecordingPort::new();
            run_all(persona, &port);

            let p = profile(persona);
            assert_eq!(port.last_text(targets::HERO_SUBTITLE).as_deref(), Some(p.subtitle));
            assert_eq!(port.last_text(targets::SKILLS_TITLE).as_deref(), Some(p.skills_title));
            assert_eq!(
                port.last_image(targets::HERO_IMAGE),
                Some((p.hero_image.to_string(), p.hero_image_alt.to_string()))
            );
            assert_eq!(
                port.last_colors(targets::PARTICLE_FIELD).as_deref(),
                Some(p.particle_palette)
            );
        }
    }

    #[test]
    fn test_updaters_are_idempotent() {
        let port = RecordingPort::new();
        run_all(Persona::Cyber, &port);
        let first: Vec<_> = port.calls();

        port.reset();
        // Re-running from the reached state must produce the same writes.
        run_all(Persona::Cyber, &port);
        // has_class starts false after reset, but the theme-class updater
        // runs first and restores it, so later reads still see cyber.
        run_all(Persona::Cyber, &port);
        let repeated = port.calls();

        assert_eq!(&repeated[..first.len()], &first[..]);
        assert_eq!(&repeated[first.len()..], &first[..]);
    }

    #[test]
    fn test_palette_follows_theme_class() {
        let port = RecordingPort::new();
        // Theme class says cyber even though the argument says ai: the
        // palette updater must follow the classed state.
        ThemeClassUpdater.apply(Persona::Cyber, &port);
        ParticlePaletteUpdater.apply(Persona::Ai, &port);

        assert_eq!(
            port.last_colors(targets::PARTICLE_FIELD).as_deref(),
            Some(profile(Persona::Cyber).particle_palette)
        );
    }

    #[test]
    fn test_skill_filter_shows_only_active_categories() {
        let port = RecordingPort::new();
        SkillFilterUpdater.apply(Persona::Cyber, &port);

        for category in SKILL_CATEGORIES {
            let target = targets::skill_category(category.id);
            let expected = category.persona == Persona::Cyber;
            assert_eq!(port.last_visible(&target), Some(expected), "category {}", category.id);
        }
    }

    #[test]
    fn test_signature_classes_are_exclusive() {
        let port = RecordingPort::new();
        AmbientCadenceUpdater.apply(Persona::Ai, &port);
        assert!(port.has_class(targets::PARTICLE_FIELD, targets::SIGNATURE_CIRCUIT_CLASS));
        assert!(!port.has_class(targets::PARTICLE_FIELD, targets::SIGNATURE_MATRIX_CLASS));

        AmbientCadenceUpdater.apply(Persona::Cyber, &port);
        assert!(!port.has_class(targets::PARTICLE_FIELD, targets::SIGNATURE_CIRCUIT_CLASS));
        assert!(port.has_class(targets::PARTICLE_FIELD, targets::SIGNATURE_MATRIX_CLASS));
    }
}
