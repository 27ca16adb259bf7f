//! Theme manager - the single source of truth for the active persona
//!
//! [`ThemeManager`] owns the authoritative persona value and is the
//! sequencing authority for everything that depends on it: on every
//! change it persists the choice, re-runs each content updater in a
//! fixed order, restarts the ambient effect registry as one step, and
//! presents the switch notification. A redundant set is a no-op.
//!
//! The manager is a single owned instance handed to whoever needs it
//! (the desktop shell wraps it in `Arc<RwLock<...>>`); there is no
//! ambient global. All mutation happens synchronously inside one call,
//! so observers never see some subsystems on the old persona and some
//! on the new one.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};

use crate::effects::{EffectRegistry, ParticleSpawn};
use crate::notify::{NotificationPresenter, ThemeNotification};
use crate::persona::Persona;
use crate::render::PresentationPort;
use crate::storage::PreferenceStore;
use crate::updaters::{standard_updaters, ContentUpdater};

/// Default capacity for the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Events emitted by the theme manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeEvent {
    /// The active persona changed
    PersonaChanged { from: Persona, to: Persona },
    /// A switch notification appeared
    NotificationShown { persona: Persona },
    /// The visible notification auto-dismissed
    NotificationDismissed,
}

/// Single source of truth for the active persona.
pub struct ThemeManager {
    current: Persona,
    store: Arc<dyn PreferenceStore>,
    port: Arc<dyn PresentationPort>,
    updaters: Vec<Box<dyn ContentUpdater>>,
    notifier: NotificationPresenter,
    effects: EffectRegistry,
    event_tx: broadcast::Sender<ThemeEvent>,
    persona_tx: watch::Sender<Persona>,
}

impl ThemeManager {
    /// Create a manager with the standard updater set.
    ///
    /// Returns the manager and the particle spawn receiver the shell
    /// drains for the decorative particle field. Nothing runs until
    /// [`initialize`](Self::initialize) is called.
    pub fn new(
        store: Arc<dyn PreferenceStore>,
        port: Arc<dyn PresentationPort>,
    ) -> (Self, mpsc::Receiver<ParticleSpawn>) {
        Self::with_updaters(store, port, standard_updaters())
    }

    /// Create a manager with a custom updater set (tests).
    pub fn with_updaters(
        store: Arc<dyn PreferenceStore>,
        port: Arc<dyn PresentationPort>,
        updaters: Vec<Box<dyn ContentUpdater>>,
    ) -> (Self, mpsc::Receiver<ParticleSpawn>) {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let (persona_tx, persona_rx) = watch::channel(Persona::default());
        let (effects, spawn_rx) = EffectRegistry::new(persona_rx);

        (
            Self {
                current: Persona::default(),
                store,
                port,
                updaters,
                notifier: NotificationPresenter::new(),
                effects,
                event_tx,
                persona_tx,
            },
            spawn_rx,
        )
    }

    /// Prime the manager from the persisted preference.
    ///
    /// Reads the preference store (absence or read failure defaults to
    /// [`Persona::Ai`], silently), sets the current persona without
    /// emitting a change event or notification, runs every updater once
    /// to bring the surface to a consistent initial state, and starts
    /// the ambient effects. Must be called within a tokio runtime.
    pub fn initialize(&mut self) {
        let persona = self.store.load().unwrap_or_default();
        self.current = persona;
        self.persona_tx.send_replace(persona);
        self.run_updaters(persona);
        self.effects.restart(persona);
        tracing::info!(persona = %persona, "theme manager initialized");
    }

    /// The active persona. Pure read.
    pub fn current(&self) -> Persona {
        self.current
    }

    /// Switch to `target`.
    ///
    /// A redundant set (`target` already active) is a no-op: no writes,
    /// no re-renders, no notification. Returns whether a switch
    /// happened. Persistence failure is logged and the switch proceeds.
    pub fn set_persona(&mut self, target: Persona) -> bool {
        if target == self.current {
            tracing::debug!(persona = %target, "redundant persona set ignored");
            return false;
        }

        let from = self.current;
        self.current = target;

        if let Err(e) = self.store.save(target) {
            tracing::warn!(error = %e, "failed to persist persona preference");
        }

        // Publish before re-rendering so fire-time readers already see
        // the new value.
        self.persona_tx.send_replace(target);

        self.run_updaters(target);
        self.effects.restart(target);
        self.notifier.present(target, &self.event_tx);

        let _ = self.event_tx.send(ThemeEvent::PersonaChanged { from, to: target });
        tracing::info!(from = %from, to = %target, "persona switched");
        true
    }

    /// Switch to the other persona. Returns the new active persona.
    pub fn toggle(&mut self) -> Persona {
        let target = self.current.toggled();
        self.set_persona(target);
        self.current
    }

    /// Subscribe to theme events.
    pub fn subscribe(&self) -> broadcast::Receiver<ThemeEvent> {
        self.event_tx.subscribe()
    }

    /// Watch the persona value (read by effect generators at fire time).
    pub fn watch_persona(&self) -> watch::Receiver<Persona> {
        self.persona_tx.subscribe()
    }

    /// The switch notification currently on screen, if any.
    pub fn notification(&self) -> Option<ThemeNotification> {
        self.notifier.current()
    }

    /// The ambient effect registry.
    pub fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    /// Stop ambient effects and clear any visible notification.
    pub fn shutdown(&mut self) {
        self.effects.cancel_all();
        self.notifier.shutdown();
    }

    fn run_updaters(&self, persona: Persona) {
        for updater in &self.updaters {
            updater.apply(persona, self.port.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PortfolioError, PortfolioResult};
    use crate::persona::profile;
    use crate::render::{targets, RecordingPort};
    use crate::storage::MemoryStore;

    /// Preference store that fails every operation.
    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Option<Persona> {
            // A read fault resolves to "no preference".
            None
        }

        fn save(&self, _persona: Persona) -> PortfolioResult<()> {
            Err(PortfolioError::Serialization("store offline".to_string()))
        }
    }

    fn manager_with(
        store: Arc<dyn PreferenceStore>,
    ) -> (ThemeManager, Arc<RecordingPort>) {
        let port = Arc::new(RecordingPort::new());
        let (manager, _spawn_rx) = ThemeManager::new(store, port.clone());
        (manager, port)
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_defaults_to_ai() {
        let (mut manager, port) = manager_with(Arc::new(MemoryStore::new()));
        manager.initialize();

        assert_eq!(manager.current(), Persona::Ai);
        assert_eq!(
            port.last_text(targets::HERO_SUBTITLE).as_deref(),
            Some(profile(Persona::Ai).subtitle)
        );
        assert!(manager.effects().is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_is_priming_not_a_change() {
        let (mut manager, _port) = manager_with(Arc::new(MemoryStore::new()));
        let mut events = manager.subscribe();
        manager.initialize();

        assert!(events.try_recv().is_err());
        assert!(manager.notification().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_replays_persisted_persona() {
        let store = Arc::new(MemoryStore::new());
        store.save(Persona::Cyber).unwrap();

        let (mut manager, port) = manager_with(store);
        manager.initialize();

        assert_eq!(manager.current(), Persona::Cyber);
        assert_eq!(
            port.last_text(targets::SKILLS_TITLE).as_deref(),
            Some(profile(Persona::Cyber).skills_title)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_initialize_survives_broken_store() {
        let (mut manager, _port) = manager_with(Arc::new(BrokenStore));
        manager.initialize();
        assert_eq!(manager.current(), Persona::Ai);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_persona_updates_everything() {
        let store = Arc::new(MemoryStore::new());
        let (mut manager, port) = manager_with(store.clone());
        manager.initialize();
        let mut events = manager.subscribe();

        assert!(manager.set_persona(Persona::Cyber));

        assert_eq!(manager.current(), Persona::Cyber);
        assert_eq!(store.load(), Some(Persona::Cyber));
        assert_eq!(
            port.last_text(targets::HERO_SUBTITLE).as_deref(),
            Some(profile(Persona::Cyber).subtitle)
        );
        assert_eq!(
            port.last_colors(targets::PARTICLE_FIELD).as_deref(),
            Some(profile(Persona::Cyber).particle_palette)
        );

        let notification = manager.notification().unwrap();
        assert_eq!(notification.persona, Persona::Cyber);

        assert_eq!(
            events.recv().await.unwrap(),
            ThemeEvent::NotificationShown { persona: Persona::Cyber }
        );
        assert_eq!(
            events.recv().await.unwrap(),
            ThemeEvent::PersonaChanged { from: Persona::Ai, to: Persona::Cyber }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_redundant_set_is_a_noop() {
        let store = Arc::new(MemoryStore::new());
        let (mut manager, port) = manager_with(store.clone());
        manager.initialize();

        let calls_before = port.call_count();
        let mut events = manager.subscribe();

        assert!(!manager.set_persona(Persona::Ai));

        assert_eq!(port.call_count(), calls_before);
        assert!(events.try_recv().is_err());
        assert!(manager.notification().is_none());
        // No redundant persisted write either.
        assert!(store.load().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_persona_proceeds_when_save_fails() {
        let (mut manager, port) = manager_with(Arc::new(BrokenStore));
        manager.initialize();

        assert!(manager.set_persona(Persona::Cyber));
        assert_eq!(manager.current(), Persona::Cyber);
        assert_eq!(
            port.last_text(targets::HERO_SUBTITLE).as_deref(),
            Some(profile(Persona::Cyber).subtitle)
        );
        assert!(manager.notification().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_is_involution() {
        let (mut manager, port) = manager_with(Arc::new(MemoryStore::new()));
        manager.initialize();

        assert_eq!(manager.toggle(), Persona::Cyber);
        assert_eq!(manager.toggle(), Persona::Ai);
        assert_eq!(manager.current(), Persona::Ai);
        assert_eq!(
            port.last_text(targets::HERO_SUBTITLE).as_deref(),
            Some(profile(Persona::Ai).subtitle)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_round_trip_persistence() {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::new());

        {
            let (mut manager, _port) = manager_with(store.clone());
            manager.initialize();
            manager.set_persona(Persona::Cyber);
            manager.shutdown();
        }

        // Simulated reload: a fresh manager over the same store.
        let (mut manager, _port) = manager_with(store);
        manager.initialize();
        assert_eq!(manager.current(), Persona::Cyber);
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_channel_tracks_current() {
        let (mut manager, _port) = manager_with(Arc::new(MemoryStore::new()));
        manager.initialize();
        let rx = manager.watch_persona();

        manager.set_persona(Persona::Cyber);
        assert_eq!(*rx.borrow(), Persona::Cyber);

        manager.toggle();
        assert_eq!(*rx.borrow(), Persona::Ai);
    }
}
