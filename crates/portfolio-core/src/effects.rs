//! Ambient effect registry - cancellable recurring particle generators
//!
//! The decorative particle system runs on recurring timers. Every
//! generator is owned by the [`EffectRegistry`] as a named, individually
//! cancellable task, and a persona change cancels and reissues the whole
//! set as one step so no generator keeps emitting with a stale palette.
//!
//! Generators are fire-and-forget: each reads the persona from the watch
//! channel at the moment it fires, not the moment it was scheduled, so a
//! mid-flight persona change shows up in the next tick. Spawn requests go
//! to a bounded channel the shell drains; when the shell falls behind,
//! requests are dropped (cosmetic only).

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::persona::{profile, Persona};

/// Default capacity for the particle spawn channel
const SPAWN_CHANNEL_CAPACITY: usize = 64;

/// Kind of particle to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleKind {
    /// Regular floating particle
    Normal,
    /// Tiny ambience particle
    Micro,
    /// Burst particle (spawned in groups)
    Burst,
    /// Large floating orb
    Orb,
    /// AI signature: circuit particle
    Circuit,
    /// Cybersecurity signature: falling terminal glyph
    MatrixDrop,
}

/// A request to spawn one decorative particle.
///
/// Carries the persona observed when the generator fired, so the shell
/// styles the particle with the palette that was active at emission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleSpawn {
    pub kind: ParticleKind,
    pub persona: Persona,
}

struct EffectHandle {
    name: &'static str,
    task: JoinHandle<()>,
}

/// Owns the recurring ambient effect generators.
pub struct EffectRegistry {
    handles: Vec<EffectHandle>,
    persona_rx: watch::Receiver<Persona>,
    spawn_tx: mpsc::Sender<ParticleSpawn>,
}

impl EffectRegistry {
    /// Create a registry reading the persona from `persona_rx`.
    ///
    /// Returns the registry and the receiving end of the spawn channel.
    /// No generators run until [`restart`](Self::restart) is called.
    pub fn new(persona_rx: watch::Receiver<Persona>) -> (Self, mpsc::Receiver<ParticleSpawn>) {
        let (spawn_tx, spawn_rx) = mpsc::channel(SPAWN_CHANNEL_CAPACITY);
        (
            Self {
                handles: Vec::new(),
                persona_rx,
                spawn_tx,
            },
            spawn_rx,
        )
    }

    /// Cancel every generator and reissue the set for `persona`.
    pub fn restart(&mut self, persona: Persona) {
        self.cancel_all();

        let cadence = profile(persona).cadence;
        self.spawn_recurring("particle-normal", cadence.normal_ms, |_, _| {
            Some(ParticleKind::Normal)
        });
        self.spawn_recurring("particle-micro", cadence.micro_ms, |_, _| {
            Some(ParticleKind::Micro)
        });
        self.spawn_recurring("particle-orb", cadence.orb_ms, |_, _| Some(ParticleKind::Orb));
        // Signature generator picks its kind from the persona observed at
        // fire time, like every other generator reads its palette.
        self.spawn_recurring("particle-signature", cadence.signature_ms, |persona, _| {
            Some(match persona {
                Persona::Ai => ParticleKind::Circuit,
                Persona::Cyber => ParticleKind::MatrixDrop,
            })
        });
        self.spawn_burst_generator(cadence.burst_ms);

        tracing::debug!(persona = %persona, effects = self.handles.len(), "ambient effects restarted");
    }

    /// Cancel every generator.
    pub fn cancel_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.task.abort();
        }
    }

    /// Names of the currently running generators.
    pub fn active_effects(&self) -> Vec<&'static str> {
        self.handles.iter().map(|h| h.name).collect()
    }

    /// Whether any generator is running.
    pub fn is_running(&self) -> bool {
        !self.handles.is_empty()
    }

    fn spawn_recurring<F>(&mut self, name: &'static str, period_ms: u64, pick: F)
    where
        F: Fn(Persona, u64) -> Option<ParticleKind> + Send + 'static,
    {
        let tx = self.spawn_tx.clone();
        let rx = self.persona_rx.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(period_ms));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            // The first tick of a tokio interval completes immediately;
            // generators wait a full period before emitting.
            interval.tick().await;

            let mut ticks: u64 = 0;
            loop {
                interval.tick().await;
                ticks += 1;
                let persona = *rx.borrow();
                if let Some(kind) = pick(persona, ticks) {
                    // Dropped when the shell falls behind.
                    let _ = tx.try_send(ParticleSpawn { kind, persona });
                }
            }
        });
        self.handles.push(EffectHandle { name, task });
    }

    /// Burst generator: on roughly a third of its ticks it emits a group
    /// of 3-8 burst particles. The original gated bursts on a random
    /// roll; a tick-counter cycle keeps the same density deterministic.
    fn spawn_burst_generator(&mut self, period_ms: u64) {
        let tx = self.spawn_tx.clone();
        let rx = self.persona_rx.clone();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_millis(period_ms));
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            interval.tick().await;

            let mut ticks: u64 = 0;
            loop {
                interval.tick().await;
                ticks += 1;
                if ticks % 10 >= 3 {
                    continue;
                }
                let persona = *rx.borrow();
                let burst_size = 3 + (ticks % 6);
                for _ in 0..burst_size {
                    let _ = tx.try_send(ParticleSpawn {
                        kind: ParticleKind::Burst,
                        persona,
                    });
                }
            }
        });
        self.handles.push(EffectHandle {
            name: "particle-burst",
            task,
        });
    }
}

impl Drop for EffectRegistry {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(rx: &mut mpsc::Receiver<ParticleSpawn>) -> Vec<ParticleSpawn> {
        let mut spawns = Vec::new();
        while let Ok(spawn) = rx.try_recv() {
            spawns.push(spawn);
        }
        spawns
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_runs_all_generators() {
        let (_tx, persona_rx) = watch_pair(Persona::Ai);
        let (mut registry, _spawn_rx) = EffectRegistry::new(persona_rx);

        assert!(!registry.is_running());
        registry.restart(Persona::Ai);

        let names = registry.active_effects();
        assert_eq!(names.len(), 5);
        for expected in [
            "particle-normal",
            "particle-micro",
            "particle-orb",
            "particle-signature",
            "particle-burst",
        ] {
            assert!(names.contains(&expected), "missing generator {expected}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_generators_emit_on_cadence() {
        let (_tx, persona_rx) = watch_pair(Persona::Ai);
        let (mut registry, mut spawn_rx) = EffectRegistry::new(persona_rx);
        registry.restart(Persona::Ai);

        // Two normal periods plus slack: normal fires twice, micro many
        // times, signature (2500ms for AI) once.
        tokio::time::sleep(Duration::from_millis(3100)).await;

        let spawns = drain(&mut spawn_rx);
        let count = |kind| spawns.iter().filter(|s| s.kind == kind).count();
        assert_eq!(count(ParticleKind::Normal), 2);
        assert_eq!(count(ParticleKind::Circuit), 1);
        assert_eq!(count(ParticleKind::MatrixDrop), 0);
        assert!(count(ParticleKind::Micro) > 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_cancels_previous_generators() {
        let (persona_tx, persona_rx) = watch_pair(Persona::Ai);
        let (mut registry, mut spawn_rx) = EffectRegistry::new(persona_rx);
        registry.restart(Persona::Ai);

        tokio::time::sleep(Duration::from_millis(1600)).await;
        drain(&mut spawn_rx);

        persona_tx.send_replace(Persona::Cyber);
        registry.restart(Persona::Cyber);
        assert_eq!(registry.active_effects().len(), 5);

        tokio::time::sleep(Duration::from_millis(2100)).await;
        let spawns = drain(&mut spawn_rx);

        // Everything emitted after the restart observes the new persona,
        // and the cyber signature (matrix drops, 2000ms) has replaced the
        // AI one.
        assert!(!spawns.is_empty());
        assert!(spawns.iter().all(|s| s.persona == Persona::Cyber));
        assert!(spawns.iter().any(|s| s.kind == ParticleKind::MatrixDrop));
        assert!(spawns.iter().all(|s| s.kind != ParticleKind::Circuit));
    }

    #[tokio::test(start_paused = true)]
    async fn test_generators_read_persona_at_fire_time() {
        let (persona_tx, persona_rx) = watch_pair(Persona::Ai);
        let (mut registry, mut spawn_rx) = EffectRegistry::new(persona_rx);
        registry.restart(Persona::Ai);

        // Flip the watch value without restarting: the next ticks must
        // already carry the new persona.
        persona_tx.send_replace(Persona::Cyber);
        tokio::time::sleep(Duration::from_millis(1600)).await;

        let spawns = drain(&mut spawn_rx);
        assert!(!spawns.is_empty());
        assert!(spawns.iter().all(|s| s.persona == Persona::Cyber));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_stops_emission() {
        let (_tx, persona_rx) = watch_pair(Persona::Ai);
        let (mut registry, mut spawn_rx) = EffectRegistry::new(persona_rx);
        registry.restart(Persona::Ai);

        tokio::time::sleep(Duration::from_millis(500)).await;
        registry.cancel_all();
        drain(&mut spawn_rx);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert!(drain(&mut spawn_rx).is_empty());
        assert!(!registry.is_running());
    }

    fn watch_pair(persona: Persona) -> (watch::Sender<Persona>, watch::Receiver<Persona>) {
        watch::channel(persona)
    }
}
