//! Transient persona-switch notifications
//!
//! One confirmation toast per completed persona switch. At most one
//! notification is on screen: presenting a new one replaces any still
//! visible predecessor and cancels its dismiss timer. Every notification
//! auto-dismisses after its profile's display duration without user
//! action.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::manager::ThemeEvent;
use crate::persona::{profile, Persona};

/// A persona-styled confirmation toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeNotification {
    /// Monotonic sequence number, distinguishes replacements
    pub seq: u64,
    /// The persona this notification announces
    pub persona: Persona,
    /// Headline ("SYSTEM SECURED" / "SYSTEM COMPROMISED")
    pub main_text: &'static str,
    /// Subline ("... Mode Active")
    pub sub_text: &'static str,
    /// Display duration before auto-dismiss
    pub duration: Duration,
}

/// Renders one transient confirmation per completed persona switch.
pub struct NotificationPresenter {
    active: Arc<Mutex<Option<ThemeNotification>>>,
    dismiss_task: Option<JoinHandle<()>>,
    next_seq: u64,
}

impl NotificationPresenter {
    pub fn new() -> Self {
        Self {
            active: Arc::new(Mutex::new(None)),
            dismiss_task: None,
            next_seq: 0,
        }
    }

    /// Show the confirmation for a switch to `persona`.
    ///
    /// Replaces any still-visible notification and schedules the
    /// auto-dismiss. Must be called within a tokio runtime.
    pub fn present(&mut self, persona: Persona, events: &broadcast::Sender<ThemeEvent>) {
        // A replacement cancels the predecessor's dismiss timer.
        if let Some(task) = self.dismiss_task.take() {
            task.abort();
        }

        let p = profile(persona);
        self.next_seq += 1;
        let notification = ThemeNotification {
            seq: self.next_seq,
            persona,
            main_text: p.notification_main,
            sub_text: p.notification_sub,
            duration: Duration::from_millis(p.notification_ms),
        };

        *self.active.lock() = Some(notification.clone());
        let _ = events.send(ThemeEvent::NotificationShown { persona });

        let active = Arc::clone(&self.active);
        let events = events.clone();
        let seq = notification.seq;
        let duration = notification.duration;
        self.dismiss_task = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut guard = active.lock();
            // Only dismiss if we were not replaced in the meantime.
            if guard.as_ref().is_some_and(|n| n.seq == seq) {
                *guard = None;
                drop(guard);
                let _ = events.send(ThemeEvent::NotificationDismissed);
            }
        }));
    }

    /// The notification currently on screen, if any.
    pub fn current(&self) -> Option<ThemeNotification> {
        self.active.lock().clone()
    }

    /// Cancel the dismiss timer and clear any visible notification.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.dismiss_task.take() {
            task.abort();
        }
        *self.active.lock() = None;
    }
}

impl Default for NotificationPresenter {
    fn default() -> Self {
        Self::new()
    }
}
