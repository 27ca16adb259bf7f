//! Decorative particle field
//!
//! Renders the spawn requests emitted by the effect registry. Placement
//! and color pick are derived from the spawn sequence number, so the
//! field is deterministic for a given spawn stream; the palette comes
//! from the document model, which the palette updater keeps in sync
//! with the active persona.

use dioxus::prelude::*;
use portfolio_core::{targets, ParticleKind, ParticleSpawn, Persona};

use crate::context::{use_document_model, use_generation};

/// Glyphs used by the cybersecurity matrix-drop signature effect.
const MATRIX_GLYPHS: &[&str] = &["0", "1", "ｱ", "ｲ", "ｳ", "ｴ", "ｵ", "ｶ", "ｷ", "ｸ"];

/// One particle currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleView {
    pub seq: u64,
    pub kind: ParticleKind,
    pub persona: Persona,
}

impl ParticleView {
    pub fn new(seq: u64, spawn: ParticleSpawn) -> Self {
        Self {
            seq,
            kind: spawn.kind,
            persona: spawn.persona,
        }
    }

    fn class(&self) -> &'static str {
        match self.kind {
            ParticleKind::Normal => "particle normal",
            ParticleKind::Micro => "particle micro",
            ParticleKind::Burst => "particle burst",
            ParticleKind::Orb => "particle orb",
            ParticleKind::Circuit => "particle circuit",
            ParticleKind::MatrixDrop => "particle matrix-drop",
        }
    }

    /// Horizontal lane in percent, derived from the sequence number.
    fn lane(&self) -> u64 {
        (self.seq * 37) % 100
    }

    /// Glyph size in px for matrix drops.
    fn glyph_size(&self) -> u64 {
        12 + self.seq % 8
    }
}

/// Particle field component.
#[component]
pub fn ParticleField() -> Element {
    let particles = use_context::<Signal<Vec<ParticleView>>>();
    let model = use_document_model();
    let generation = use_generation();

    let _generation = generation();
    let palette = model().colors(targets::PARTICLE_FIELD);

    let views: Vec<(ParticleView, &'static str)> = particles()
        .into_iter()
        .map(|particle| (particle, pick_color(&palette, particle.seq)))
        .collect();

    rsx! {
        div { class: "particle-field",
            for (particle, color) in views {
                if particle.kind == ParticleKind::MatrixDrop {
                    span {
                        key: "{particle.seq}",
                        class: "{particle.class()}",
                        style: "left: {particle.lane()}%; font-size: {particle.glyph_size()}px;",
                        "{glyph_for(particle.seq)}"
                    }
                } else {
                    span {
                        key: "{particle.seq}",
                        class: "{particle.class()}",
                        style: "left: {particle.lane()}%; background: {color}; box-shadow: 0 0 12px {color};",
                    }
                }
            }
        }
    }
}

fn glyph_for(seq: u64) -> &'static str {
    MATRIX_GLYPHS[(seq as usize) % MATRIX_GLYPHS.len()]
}

fn pick_color(palette: &[&'static str], seq: u64) -> &'static str {
    if palette.is_empty() {
        return "rgba(255, 255, 255, 0.2)";
    }
    palette[(seq as usize) % palette.len()]
}
