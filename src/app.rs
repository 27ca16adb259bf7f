use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{
    ChatSession, DocumentModel, EntryGate, MemoryStore, PreferenceStore, Storage, ThemeManager,
    TranscriptStore,
};
use tokio::sync::RwLock;

use crate::components::particle_field::ParticleView;
use crate::context::{get_data_dir, SharedManager, TypingGuard};
use crate::pages::{Portfolio, Welcome};
use crate::theme::GLOBAL_STYLES;

/// How many spawned particles the field keeps on screen at once.
const PARTICLE_RING: usize = 48;

/// Application routes.
///
/// - `/` - Welcome screen with "Enter Portfolio" and the two persona cards
/// - `/portfolio` - The revealed portfolio content
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Welcome {},
    #[route("/portfolio")]
    Portfolio {},
}

/// Root application component.
///
/// Provides global styles, the theme manager context, and routing.
#[component]
pub fn App() -> Element {
    // Shared state the whole tree reads
    let manager: Signal<SharedManager> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut manager_ready: Signal<bool> = use_signal(|| false);
    let model: Signal<DocumentModel> = use_signal(DocumentModel::new);
    let mut generation: Signal<u64> = use_signal(|| 0);
    let typing: Signal<TypingGuard> = use_signal(TypingGuard::default);
    let gate: Signal<Arc<EntryGate>> = use_signal(|| Arc::new(EntryGate::new()));
    let mut chat: Signal<Option<ChatSession>> = use_signal(|| None);
    let particles: Signal<Vec<ParticleView>> = use_signal(Vec::new);

    use_context_provider(|| manager);
    use_context_provider(|| manager_ready);
    use_context_provider(|| model);
    use_context_provider(|| generation);
    use_context_provider(|| typing);
    use_context_provider(|| gate);
    use_context_provider(|| chat);
    use_context_provider(|| particles);

    // Initialize the manager on mount
    use_effect(move || {
        spawn(async move {
            let data_dir = get_data_dir();
            let (prefs, transcripts): (Arc<dyn PreferenceStore>, Arc<dyn TranscriptStore>) =
                match Storage::new(data_dir.join("portfolio.redb")) {
                    Ok(storage) => {
                        let storage = Arc::new(storage);
                        (storage.clone(), storage)
                    }
                    Err(e) => {
                        // Degraded but functional: in-memory only.
                        tracing::error!("Failed to open preference storage: {}", e);
                        let store = Arc::new(MemoryStore::new());
                        (store.clone(), store)
                    }
                };

            let port = Arc::new(model());
            let (mut mgr, mut spawn_rx) = ThemeManager::new(prefs, port);
            mgr.initialize();

            chat.set(Some(ChatSession::new(transcripts, mgr.current())));

            // Drain particle spawns into the display ring.
            let mut particles = particles;
            spawn(async move {
                let mut seq: u64 = 0;
                while let Some(request) = spawn_rx.recv().await {
                    seq += 1;
                    particles.with_mut(|ring| {
                        ring.push(ParticleView::new(seq, request));
                        if ring.len() > PARTICLE_RING {
                            let excess = ring.len() - PARTICLE_RING;
                            ring.drain(..excess);
                        }
                    });
                }
            });

            let shared = manager();
            {
                let mut guard = shared.write().await;
                *guard = Some(mgr);
            }
            manager_ready.set(true);
            tracing::info!("ThemeManager initialized");
        });
    });

    // Bump the render generation on every theme event
    use_effect(move || {
        if manager_ready() {
            spawn(async move {
                let shared = manager();
                let events = {
                    let guard = shared.read().await;
                    guard.as_ref().map(|mgr| mgr.subscribe())
                };
                let Some(mut events) = events else { return };
                while events.recv().await.is_ok() {
                    generation += 1;
                }
            });
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
