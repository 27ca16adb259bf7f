//! Entry gate - the one-time reveal between welcome screen and portfolio
//!
//! Content starts hidden behind a welcome screen. Entering moves the gate
//! `Gated -> Transitioning -> Revealed`, one way, once per session. Two
//! entry paths exist: a generic enter that keeps whatever persona is
//! active, and a theme-specific enter that switches the persona first.
//! Re-entering while already transitioning or revealed is a no-op.

use std::time::Duration;

use parking_lot::Mutex;

use crate::manager::ThemeManager;
use crate::persona::Persona;

/// How long the enter transition animates before content is revealed.
pub const REVEAL_TRANSITION: Duration = Duration::from_millis(800);

/// Visibility state of the portfolio content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Welcome screen visible, content hidden
    Gated,
    /// Enter action taken, reveal animation running
    Transitioning,
    /// Content visible (terminal for the session)
    Revealed,
}

/// The one-time reveal gate.
pub struct EntryGate {
    state: Mutex<GateState>,
}

impl EntryGate {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(GateState::Gated),
        }
    }

    /// Current gate state.
    pub fn state(&self) -> GateState {
        *self.state.lock()
    }

    /// Generic entry: start the reveal transition, keeping the active
    /// persona. Returns whether the transition started (false when the
    /// gate was already past `Gated`).
    pub fn enter(&self) -> bool {
        let mut state = self.state.lock();
        if *state != GateState::Gated {
            tracing::debug!(state = ?*state, "entry ignored, gate already passed");
            return false;
        }
        *state = GateState::Transitioning;
        true
    }

    /// Theme-specific entry: switch to `persona`, then start the reveal.
    ///
    /// The persona switch only happens when the gate actually opens, so a
    /// second click on a welcome-screen theme card cannot re-fire the
    /// switch or its notification.
    pub fn enter_with(&self, persona: Persona, manager: &mut ThemeManager) -> bool {
        {
            let state = self.state.lock();
            if *state != GateState::Gated {
                tracing::debug!(state = ?*state, "themed entry ignored, gate already passed");
                return false;
            }
        }
        manager.set_persona(persona);
        self.enter()
    }

    /// Complete the reveal transition. Returns whether the gate moved to
    /// `Revealed` (false unless it was `Transitioning`).
    pub fn reveal(&self) -> bool {
        let mut state = self.state.lock();
        if *state != GateState::Transitioning {
            return false;
        }
        *state = GateState::Revealed;
        true
    }

    /// Wait out the reveal transition, then complete it.
    pub async fn finish_transition(&self) -> bool {
        tokio::time::sleep(REVEAL_TRANSITION).await;
        self.reveal()
    }
}

impl Default for EntryGate {
    fn default() -> Self {
        Self::new()
    }
}
