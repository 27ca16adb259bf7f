//! End-to-end theme flow tests
//!
//! These tests exercise the full switch pipeline - preference store,
//! updaters, effect registry, notifications, entry gate - against the
//! recording port and in-memory/real stores.

use std::sync::Arc;
use std::time::Duration;

use portfolio_core::{
    profile, targets, ChatRequest, ChatResponder, ChatResponse, ChatSession, EntryGate, GateState,
    MemoryStore, ParticleKind, Persona, PortfolioResult, PreferenceStore, PresentationPort,
    RecordingPort, ResponseStatus, ScriptedResponder, Storage, ThemeEvent, ThemeManager,
};

fn new_manager(
    store: Arc<dyn PreferenceStore>,
) -> (
    ThemeManager,
    Arc<RecordingPort>,
    tokio::sync::mpsc::Receiver<portfolio_core::ParticleSpawn>,
) {
    let port = Arc::new(RecordingPort::new());
    let (manager, spawn_rx) = ThemeManager::new(store, port.clone());
    (manager, port, spawn_rx)
}

// ============================================================================
// Totality
// ============================================================================

/// Every updater target reflects the initialized persona's profile exactly.
#[tokio::test(start_paused = true)]
async fn test_totality_for_both_personas() {
    for persona in [Persona::Ai, Persona::Cyber] {
        let store = Arc::new(MemoryStore::new());
        store.save(persona).unwrap();

        let (mut manager, port, _spawns) = new_manager(store);
        manager.initialize();

        let p = profile(persona);
        assert_eq!(port.last_text(targets::HERO_SUBTITLE).as_deref(), Some(p.subtitle));
        assert_eq!(
            port.last_text(targets::HERO_DESCRIPTION).as_deref(),
            Some(p.hero_description)
        );
        assert_eq!(port.last_text(targets::BANNER_TITLE).as_deref(), Some(p.banner_title));
        assert_eq!(port.last_text(targets::SKILLS_TITLE).as_deref(), Some(p.skills_title));
        assert_eq!(port.last_text(targets::PROJECTS_TITLE).as_deref(), Some(p.projects_title));
        assert_eq!(port.last_text(targets::CONTACT_TITLE).as_deref(), Some(p.contact_title));
        assert_eq!(
            port.last_image(targets::HERO_IMAGE),
            Some((p.hero_image.to_string(), p.hero_image_alt.to_string()))
        );
        assert_eq!(
            port.last_colors(targets::PARTICLE_FIELD).as_deref(),
            Some(p.particle_palette)
        );
        assert_eq!(
            port.has_class(targets::ROOT, targets::CYBER_THEME_CLASS),
            persona == Persona::Cyber
        );
    }
}

// ============================================================================
// Idempotence
// ============================================================================

/// A redundant set produces no second render, write, or notification.
#[tokio::test(start_paused = true)]
async fn test_set_persona_is_idempotent() {
    let store = Arc::new(MemoryStore::new());
    let (mut manager, port, _spawns) = new_manager(store);
    manager.initialize();
    let mut events = manager.subscribe();

    assert!(manager.set_persona(Persona::Cyber));
    let calls_after_first = port.call_count();
    let first_notification = manager.notification().unwrap();

    assert!(!manager.set_persona(Persona::Cyber));
    assert_eq!(port.call_count(), calls_after_first);
    assert_eq!(manager.notification().unwrap(), first_notification);

    // Exactly one change event and one notification event.
    let mut changed = 0;
    let mut shown = 0;
    while let Ok(event) = events.try_recv() {
        match event {
            ThemeEvent::PersonaChanged { .. } => changed += 1,
            ThemeEvent::NotificationShown { .. } => shown += 1,
            ThemeEvent::NotificationDismissed => {}
        }
    }
    assert_eq!(changed, 1);
    assert_eq!(shown, 1);
}

// ============================================================================
// Round-trip persistence
// ============================================================================

/// Switch, reload on a fresh manager over the same redb file, same persona.
#[tokio::test(start_paused = true)]
async fn test_round_trip_through_redb() {
    let temp = tempfile::TempDir::new().unwrap();
    let db_path = temp.path().join("portfolio.redb");

    {
        let store = Arc::new(Storage::new(&db_path).unwrap());
        let (mut manager, _port, _spawns) = new_manager(store);
        manager.initialize();
        assert_eq!(manager.current(), Persona::Ai);
        manager.set_persona(Persona::Cyber);
        manager.shutdown();
    }

    let store = Arc::new(Storage::new(&db_path).unwrap());
    let (mut manager, port, _spawns) = new_manager(store);
    manager.initialize();

    assert_eq!(manager.current(), Persona::Cyber);
    assert_eq!(
        port.last_text(targets::HERO_SUBTITLE).as_deref(),
        Some(profile(Persona::Cyber).subtitle)
    );
}

// ============================================================================
// Toggle involution
// ============================================================================

/// Double toggle restores the original observable state, with two
/// notifications along the way.
#[tokio::test(start_paused = true)]
async fn test_toggle_involution() {
    let store = Arc::new(MemoryStore::new());
    let (mut manager, port, _spawns) = new_manager(store);
    manager.initialize();
    let mut events = manager.subscribe();

    let baseline_subtitle = port.last_text(targets::HERO_SUBTITLE);
    let baseline_palette = port.last_colors(targets::PARTICLE_FIELD);

    manager.toggle();
    manager.toggle();

    assert_eq!(manager.current(), Persona::Ai);
    assert_eq!(port.last_text(targets::HERO_SUBTITLE), baseline_subtitle);
    assert_eq!(port.last_colors(targets::PARTICLE_FIELD), baseline_palette);

    let mut shown = 0;
    while let Ok(event) = events.try_recv() {
        if matches!(event, ThemeEvent::NotificationShown { .. }) {
            shown += 1;
        }
    }
    assert_eq!(shown, 2);
}

// ============================================================================
// Fault tolerance
// ============================================================================

struct ExplosiveStore;

impl PreferenceStore for ExplosiveStore {
    fn load(&self) -> Option<Persona> {
        None // read faults resolve to "absent"
    }

    fn save(&self, _persona: Persona) -> PortfolioResult<()> {
        Err(portfolio_core::PortfolioError::Serialization(
            "disk on fire".to_string(),
        ))
    }
}

/// A store that always fails never breaks initialization or switching.
#[tokio::test(start_paused = true)]
async fn test_broken_store_degrades_silently() {
    let (mut manager, port, _spawns) = new_manager(Arc::new(ExplosiveStore));
    manager.initialize();
    assert_eq!(manager.current(), Persona::Ai);

    assert!(manager.set_persona(Persona::Cyber));
    assert_eq!(manager.current(), Persona::Cyber);
    assert_eq!(
        port.last_text(targets::HERO_SUBTITLE).as_deref(),
        Some(profile(Persona::Cyber).subtitle)
    );
    assert!(manager.notification().is_some());
}

// ============================================================================
// Entry gate single-use
// ============================================================================

/// Two themed entries: one persona change, one reveal.
#[tokio::test(start_paused = true)]
async fn test_entry_gate_single_use() {
    let (mut manager, _port, _spawns) = new_manager(Arc::new(MemoryStore::new()));
    manager.initialize();
    let mut events = manager.subscribe();
    let gate = EntryGate::new();

    assert!(gate.enter_with(Persona::Cyber, &mut manager));
    assert!(!gate.enter_with(Persona::Cyber, &mut manager));

    assert!(gate.finish_transition().await);
    assert_eq!(gate.state(), GateState::Revealed);

    // Re-entry after reveal is still a no-op.
    assert!(!gate.enter());
    assert!(!gate.finish_transition().await);

    let mut changes = 0;
    while let Ok(event) = events.try_recv() {
        if matches!(event, ThemeEvent::PersonaChanged { .. }) {
            changes += 1;
        }
    }
    assert_eq!(changes, 1);
}

// ============================================================================
// Concrete scenario
// ============================================================================

/// Fresh load, no prior preference: ai; switch to cyber: subtitle and
/// store updated, exactly one notification that auto-removes itself.
#[tokio::test(start_paused = true)]
async fn test_fresh_load_switch_scenario() {
    let store = Arc::new(MemoryStore::new());
    let (mut manager, port, _spawns) = new_manager(store.clone());
    manager.initialize();

    assert_eq!(manager.current(), Persona::Ai);
    assert!(store.load().is_none());

    manager.set_persona(Persona::Cyber);

    assert_eq!(
        port.last_text(targets::HERO_SUBTITLE).as_deref(),
        Some(profile(Persona::Cyber).subtitle)
    );
    assert_eq!(store.load(), Some(Persona::Cyber));

    let notification = manager.notification().unwrap();
    assert_eq!(notification.persona, Persona::Cyber);
    assert_eq!(notification.duration, Duration::from_millis(4000));

    tokio::time::sleep(Duration::from_millis(4100)).await;
    assert!(manager.notification().is_none());
}

// ============================================================================
// Effects across a switch
// ============================================================================

/// After a switch, every emitted particle carries the new persona and the
/// signature generator has swapped.
#[tokio::test(start_paused = true)]
async fn test_particles_follow_the_switch() {
    let (mut manager, _port, mut spawns) = new_manager(Arc::new(MemoryStore::new()));
    manager.initialize();

    tokio::time::sleep(Duration::from_millis(2600)).await;
    let mut before = Vec::new();
    while let Ok(spawn) = spawns.try_recv() {
        before.push(spawn);
    }
    assert!(before.iter().all(|s| s.persona == Persona::Ai));
    assert!(before.iter().any(|s| s.kind == ParticleKind::Circuit));

    manager.set_persona(Persona::Cyber);

    tokio::time::sleep(Duration::from_millis(2100)).await;
    let mut after = Vec::new();
    while let Ok(spawn) = spawns.try_recv() {
        after.push(spawn);
    }
    assert!(!after.is_empty());
    assert!(after.iter().all(|s| s.persona == Persona::Cyber));
    assert!(after.iter().any(|s| s.kind == ParticleKind::MatrixDrop));
    assert!(after.iter().all(|s| s.kind != ParticleKind::Circuit));
}

// ============================================================================
// Rapid double-toggle
// ============================================================================

/// Rapid toggles never corrupt authoritative state; only one
/// notification survives.
#[tokio::test(start_paused = true)]
async fn test_rapid_double_toggle_is_consistent() {
    let (mut manager, port, _spawns) = new_manager(Arc::new(MemoryStore::new()));
    manager.initialize();

    manager.toggle();
    manager.toggle();
    manager.toggle();

    assert_eq!(manager.current(), Persona::Cyber);
    assert_eq!(
        port.last_text(targets::HERO_SUBTITLE).as_deref(),
        Some(profile(Persona::Cyber).subtitle)
    );

    let notification = manager.notification().unwrap();
    assert_eq!(notification.persona, Persona::Cyber);
}

// ============================================================================
// Chat contract
// ============================================================================

struct RecordingResponder {
    seen: parking_lot::Mutex<Vec<ChatRequest>>,
}

impl ChatResponder for RecordingResponder {
    fn respond(&self, request: &ChatRequest) -> PortfolioResult<ChatResponse> {
        self.seen.lock().push(request.clone());
        Ok(ChatResponse {
            status: ResponseStatus::Success,
            message: "ack".to_string(),
        })
    }
}

/// The manager's current persona rides along on every outbound request.
#[tokio::test(start_paused = true)]
async fn test_chat_requests_carry_current_persona() {
    let store = Arc::new(MemoryStore::new());
    let (mut manager, _port, _spawns) = new_manager(store.clone());
    manager.initialize();

    let responder = RecordingResponder {
        seen: parking_lot::Mutex::new(Vec::new()),
    };
    let mut session = ChatSession::new(store.clone(), manager.current());

    session.send("first question", manager.current(), &responder);
    manager.set_persona(Persona::Cyber);
    session.send("second question", manager.current(), &responder);

    let seen = responder.seen.lock();
    assert_eq!(seen[0].persona, Persona::Ai);
    assert_eq!(seen[1].persona, Persona::Cyber);
}

/// Scripted replies stay inside the widget and never disturb theme state.
#[tokio::test(start_paused = true)]
async fn test_scripted_chat_end_to_end() {
    let store = Arc::new(MemoryStore::new());
    let (mut manager, _port, _spawns) = new_manager(store.clone());
    manager.initialize();
    manager.set_persona(Persona::Cyber);

    let mut session = ChatSession::new(store, manager.current());
    let responder = ScriptedResponder::new();

    assert!(session.send("tell me about penetration testing", Persona::Cyber, &responder));
    let reply = session.messages().last().unwrap();
    assert!(reply.content.contains("Penetration testing"));
    assert_eq!(manager.current(), Persona::Cyber);
}
