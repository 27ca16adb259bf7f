//! Persona model for the dual-theme portfolio
//!
//! A [`Persona`] is the single piece of durable application state: which of
//! the two presentation modes is active. Every themed subsystem (hero copy,
//! imagery, section titles, skill filtering, particle palette, ambient
//! cadence) derives its output from the static [`PersonaProfile`] of the
//! active persona.

use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// The active presentation mode.
///
/// Exactly one persona is active at any time. The string forms `"ai"` and
/// `"cyber"` are the persisted literals and the value carried on outbound
/// chat requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// AI Engineer presentation
    #[default]
    Ai,
    /// Cybersecurity presentation
    Cyber,
}

impl Persona {
    /// The persisted/wire identifier for this persona.
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Ai => "ai",
            Persona::Cyber => "cyber",
        }
    }

    /// Parse a persisted/wire identifier.
    pub fn parse(s: &str) -> Result<Self, PortfolioError> {
        match s {
            "ai" => Ok(Persona::Ai),
            "cyber" => Ok(Persona::Cyber),
            other => Err(PortfolioError::UnknownPersona(other.to_string())),
        }
    }

    /// The other persona.
    pub fn toggled(&self) -> Self {
        match self {
            Persona::Ai => Persona::Cyber,
            Persona::Cyber => Persona::Ai,
        }
    }

    /// Human-readable mode name shown in the switcher and notifications.
    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::Ai => "AI Engineer",
            Persona::Cyber => "Cybersecurity",
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The recurring ambient-effect schedule for a persona, in milliseconds.
///
/// The shared cadences are identical for both personas; only the signature
/// effect (circuit particles vs matrix drops) differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectCadence {
    /// Regular floating particles
    pub normal_ms: u64,
    /// Tiny ambience particles
    pub micro_ms: u64,
    /// Burst opportunity check
    pub burst_ms: u64,
    /// Large floating orbs
    pub orb_ms: u64,
    /// Persona signature effect
    pub signature_ms: u64,
}

/// The persona-specific signature ambient effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureEffect {
    /// Rectangular circuit particles drifting upward (AI Engineer)
    Circuit,
    /// Falling terminal glyphs (Cybersecurity)
    MatrixDrop,
}

/// Static content bundle for one persona.
///
/// Immutable and exhaustive: both personas have a complete profile, so
/// content updaters never encounter an unset field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonaProfile {
    /// The persona this profile belongs to
    pub persona: Persona,
    /// Hero subtitle line
    pub subtitle: &'static str,
    /// Long-form hero description paragraph
    pub hero_description: &'static str,
    /// Hero banner image asset path
    pub hero_image: &'static str,
    /// Alt text for the hero banner image
    pub hero_image_alt: &'static str,
    /// Banner headline
    pub banner_title: &'static str,
    /// Banner supporting paragraph
    pub banner_subtitle: &'static str,
    /// Skills section title
    pub skills_title: &'static str,
    /// Projects section title
    pub projects_title: &'static str,
    /// Contact section title
    pub contact_title: &'static str,
    /// Contact call-to-action line
    pub contact_text: &'static str,
    /// Notification headline shown after switching to this persona
    pub notification_main: &'static str,
    /// Notification subline
    pub notification_sub: &'static str,
    /// How long the switch notification stays on screen, in milliseconds
    pub notification_ms: u64,
    /// Ordered particle color palette
    pub particle_palette: &'static [&'static str],
    /// Ambient effect schedule
    pub cadence: EffectCadence,
    /// Signature ambient effect
    pub signature: SignatureEffect,
}

impl PersonaProfile {
    /// Whether a skill category belongs to this persona's presentation.
    pub fn includes_category(&self, category: &SkillCategory) -> bool {
        category.persona == self.persona
    }
}

/// A skill category shown in the skills section, owned by one persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    /// Stable id, used as the render target suffix
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// The persona this category belongs to
    pub persona: Persona,
}

/// All skill categories across both personas.
pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory { id: "programming", name: "Programming Languages", persona: Persona::Ai },
    SkillCategory { id: "ml-deep-learning", name: "ML & Deep Learning", persona: Persona::Ai },
    SkillCategory { id: "generative-ai", name: "Generative AI", persona: Persona::Ai },
    SkillCategory { id: "ai-infrastructure", name: "AI Infrastructure", persona: Persona::Ai },
    SkillCategory { id: "cloud", name: "Cloud Platforms", persona: Persona::Ai },
    SkillCategory { id: "visualization", name: "Data Visualization", persona: Persona::Ai },
    SkillCategory { id: "backend", name: "Backend Engineering", persona: Persona::Ai },
    SkillCategory { id: "cybersecurity", name: "Cybersecurity Operations", persona: Persona::Cyber },
    SkillCategory { id: "pentesting", name: "Pentesting Arsenal", persona: Persona::Cyber },
];

const AI_CADENCE: EffectCadence = EffectCadence {
    normal_ms: 1500,
    micro_ms: 200,
    burst_ms: 3000,
    orb_ms: 4000,
    signature_ms: 2500,
};

const CYBER_CADENCE: EffectCadence = EffectCadence {
    normal_ms: 1500,
    micro_ms: 200,
    burst_ms: 3000,
    orb_ms: 4000,
    signature_ms: 2000,
};

static AI_PROFILE: PersonaProfile = PersonaProfile {
    persona: Persona::Ai,
    subtitle: "AI Engineer & Machine Learning Specialist",
    hero_description: "Senior AI Engineer and Cloud Solutions Architect with proven experience \
        in enterprise-scale cloud infrastructure, machine learning systems, and data-driven \
        solutions. Specialized in designing robust and scalable architectures that drive \
        operational excellence and business innovation.",
    hero_image: "assets/images/hero-ai.png",
    hero_image_alt: "AI engineer portrait",
    banner_title: "Architecting Intelligent Cloud Solutions",
    banner_subtitle: "Senior AI Engineer and Cloud Solutions Architect with proven experience \
        in enterprise-scale cloud infrastructure, machine learning systems, and data-driven \
        solutions. Specialized in designing robust and scalable architectures that drive \
        operational excellence and business innovation.",
    skills_title: "🤖 AI & ML Technology Stack",
    projects_title: "🧠 AI Projects",
    contact_title: "🚀 Ready to Innovate?",
    contact_text: "Let's build the future with artificial intelligence",
    notification_main: "SYSTEM SECURED",
    notification_sub: "AI Engineer Mode Active",
    notification_ms: 3000,
    particle_palette: &[
        "rgba(0, 64, 255, 0.8)",
        "rgba(0, 128, 255, 0.7)",
        "rgba(0, 64, 255, 0.6)",
        "rgba(26, 117, 255, 0.8)",
        "rgba(0, 102, 255, 0.7)",
    ],
    cadence: AI_CADENCE,
    signature: SignatureEffect::Circuit,
};

static CYBER_PROFILE: PersonaProfile = PersonaProfile {
    persona: Persona::Cyber,
    subtitle: "Cybersecurity & Ethical Hacking Specialist",
    hero_description: "Cybersecurity expert specialized in penetration testing, vulnerability \
        assessment, and digital forensics. Focused on protecting digital infrastructures and \
        conducting ethical security research.",
    hero_image: "assets/images/hero-cyber.png",
    hero_image_alt: "Cybersecurity specialist portrait",
    banner_title: "Securing Digital Frontiers",
    banner_subtitle: "Cybersecurity specialist with advanced expertise in penetration testing, \
        vulnerability assessment, and digital forensics. Dedicated to protecting critical \
        infrastructures and conducting comprehensive security research in enterprise \
        environments.",
    skills_title: "🔐 Cybersecurity & Pentesting Arsenal",
    projects_title: "🛡️ Security Projects",
    contact_title: "🛡️ Secure Your Infrastructure?",
    contact_text: "Let's strengthen your digital defenses",
    notification_main: "SYSTEM COMPROMISED",
    notification_sub: "Cybersecurity Mode Active",
    notification_ms: 4000,
    particle_palette: &[
        "rgba(51, 6, 6, 0.4)",
        "rgba(102, 12, 12, 0.3)",
        "rgba(77, 9, 9, 0.2)",
        "rgba(204, 20, 20, 0.4)",
        "rgba(255, 0, 0, 0.3)",
    ],
    cadence: CYBER_CADENCE,
    signature: SignatureEffect::MatrixDrop,
};

/// Get the static profile for a persona.
pub fn profile(persona: Persona) -> &'static PersonaProfile {
    match persona {
        Persona::Ai => &AI_PROFILE,
        Persona::Cyber => &CYBER_PROFILE,
    }
}
