//! Portfolio Core Library
//!
//! Headless engine for a dual-persona portfolio: theme state, content
//! updaters, ambient effects, and the supporting widget state machines.
//!
//! ## Overview
//!
//! The portfolio presents one of two personas ("AI Engineer" or
//! "Cybersecurity"). The [`ThemeManager`] owns the active [`Persona`],
//! persists it across sessions, and on every switch re-renders each
//! dependent subsystem in a fixed order through a [`PresentationPort`],
//! restarts the ambient [`EffectRegistry`], and presents a transient
//! confirmation. The desktop shell is a thin view over this crate.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use portfolio_core::{DocumentModel, Persona, Storage, ThemeManager};
//!
//! let storage = Arc::new(Storage::new("~/.portfolio/data.redb")?);
//! let model = Arc::new(DocumentModel::new());
//! let (mut manager, particles) = ThemeManager::new(storage, model.clone());
//!
//! manager.initialize();                  // replays the saved persona
//! manager.set_persona(Persona::Cyber);   // re-renders, persists, notifies
//! assert_eq!(manager.current(), Persona::Cyber);
//! ```

pub mod chat;
pub mod credentials;
pub mod effects;
pub mod error;
pub mod gate;
pub mod manager;
pub mod nav;
pub mod notify;
pub mod persona;
pub mod render;
pub mod storage;
pub mod timeline;
pub mod updaters;

// Re-exports
pub use chat::{
    ChatMessage, ChatRequest, ChatResponder, ChatResponse, ChatRole, ChatSession, ChatTranscript,
    ChatWindow, ResponseStatus, ScriptedResponder, MAX_MESSAGES, RESTORE_VISIBLE,
};
pub use credentials::{find_credential, Credential, CredentialKind, CredentialModal, CERTIFICATIONS, STUDIES};
pub use effects::{EffectRegistry, ParticleKind, ParticleSpawn};
pub use error::{PortfolioError, PortfolioResult};
pub use gate::{EntryGate, GateState, REVEAL_TRANSITION};
pub use manager::{ThemeEvent, ThemeManager};
pub use nav::{Section, SidebarState};
pub use notify::{NotificationPresenter, ThemeNotification};
pub use persona::{profile, Persona, PersonaProfile, SkillCategory, SKILL_CATEGORIES};
pub use render::{targets, DocumentModel, PresentationPort, RecordingPort, RenderCall};
pub use storage::{MemoryStore, PreferenceStore, Storage, TranscriptStore};
pub use timeline::{TimelineEntry, TimelineState, TIMELINE_ENTRIES};
pub use updaters::{standard_updaters, ContentUpdater};
