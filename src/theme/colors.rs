//! Color constants for the two persona themes.
//!
//! AI Engineer: deep blues over a dark field.
//! Cybersecurity: terminal reds over near-black.

#![allow(dead_code)]

// === BASE (Backgrounds) ===
pub const BASE_BLACK: &str = "#05060a";
pub const BASE_PANEL: &str = "#0b0e16";
pub const BASE_BORDER: &str = "#1a2030";

// === AI (Technology, Links, Accents) ===
pub const AI_PRIMARY: &str = "#0080ff";
pub const AI_DEEP: &str = "#0040ff";
pub const AI_GLOW: &str = "rgba(0, 128, 255, 0.4)";
pub const AI_INDICATOR: &str = "#00ff7f";

// === CYBER (Alert, Terminal) ===
pub const CYBER_PRIMARY: &str = "#ff0000";
pub const CYBER_DEEP: &str = "#cc1414";
pub const CYBER_GLOW: &str = "rgba(255, 0, 0, 0.4)";
pub const CYBER_TERMINAL: &str = "#00ff00";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f5f5f5";
pub const TEXT_SECONDARY: &str = "rgba(245, 245, 245, 0.7)";
pub const TEXT_MUTED: &str = "rgba(245, 245, 245, 0.5)";
