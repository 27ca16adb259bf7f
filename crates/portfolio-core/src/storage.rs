//! Persistent storage using redb.
//!
//! This module provides durable storage for:
//! - The selected persona (single-key preference record)
//! - The chat transcript
//!
//! The theme manager talks to persistence through the [`PreferenceStore`]
//! trait and the chat session through [`TranscriptStore`]; both are
//! implemented by the redb-backed [`Storage`] and by the in-memory
//! [`MemoryStore`] used in tests and headless runs. Loads never propagate
//! faults: a broken database reads as "no preference", and saves are
//! best-effort from the caller's point of view.

use std::path::Path;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use redb::{Database, ReadableTable, TableDefinition};

use crate::chat::ChatMessage;
use crate::error::{PortfolioError, PortfolioResult};
use crate::persona::Persona;

// Table definitions
const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");
const CHAT_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("chat_history");

/// Durable round-trip of the selected persona.
pub trait PreferenceStore: Send + Sync {
    /// Load the persisted persona.
    ///
    /// Never fails outward: any underlying fault is logged and reads as
    /// `None` (no preference).
    fn load(&self) -> Option<Persona>;

    /// Persist the persona. Best-effort; callers log and continue on error.
    fn save(&self, persona: Persona) -> PortfolioResult<()>;
}

/// Durable round-trip of the chat transcript.
pub trait TranscriptStore: Send + Sync {
    /// Load the persisted transcript. Faults read as an empty history.
    fn load_transcript(&self) -> Vec<ChatMessage>;

    /// Persist the transcript. Best-effort.
    fn save_transcript(&self, messages: &[ChatMessage]) -> PortfolioResult<()>;
}

/// Storage layer using redb for durable persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Preference key for the persona record (there is exactly one)
    const PERSONA_KEY: &'static str = "persona";

    /// Chat key for the transcript record (there is exactly one)
    const TRANSCRIPT_KEY: &'static str = "transcript";

    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create all required tables
    pub fn new(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Open/create database
        let db = Database::create(path)?;

        // Initialize all tables
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
            let _ = write_txn.open_table(CHAT_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    fn load_persona(&self) -> PortfolioResult<Option<Persona>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        match table.get(Self::PERSONA_KEY)? {
            Some(v) => Ok(Some(Persona::parse(v.value())?)),
            None => Ok(None),
        }
    }

    fn save_persona(&self, persona: Persona) -> PortfolioResult<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(Self::PERSONA_KEY, persona.as_str())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn load_chat(&self) -> PortfolioResult<Vec<ChatMessage>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(CHAT_TABLE)?;

        match table.get(Self::TRANSCRIPT_KEY)? {
            Some(v) => serde_json::from_slice(v.value())
                .map_err(|e| PortfolioError::Serialization(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    fn save_chat(&self, messages: &[ChatMessage]) -> PortfolioResult<()> {
        let data = serde_json::to_vec(messages)
            .map_err(|e| PortfolioError::Serialization(e.to_string()))?;

        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(CHAT_TABLE)?;
            table.insert(Self::TRANSCRIPT_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl PreferenceStore for Storage {
    fn load(&self) -> Option<Persona> {
        match self.load_persona() {
            Ok(persona) => persona,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load persona preference, using default");
                None
            }
        }
    }

    fn save(&self, persona: Persona) -> PortfolioResult<()> {
        self.save_persona(persona)
    }
}

impl TranscriptStore for Storage {
    fn load_transcript(&self) -> Vec<ChatMessage> {
        match self.load_chat() {
            Ok(messages) => messages,
            Err(e) => {
                tracing::warn!(error = %e, "failed to load chat transcript, starting empty");
                Vec::new()
            }
        }
    }

    fn save_transcript(&self, messages: &[ChatMessage]) -> PortfolioResult<()> {
        self.save_chat(messages)
    }
}

/// In-memory store for tests and headless runs.
#[derive(Default)]
pub struct MemoryStore {
    persona: Mutex<Option<Persona>>,
    transcript: Mutex<Vec<ChatMessage>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<Persona> {
        *self.persona.lock()
    }

    fn save(&self, persona: Persona) -> PortfolioResult<()> {
        *self.persona.lock() = Some(persona);
        Ok(())
    }
}

impl TranscriptStore for MemoryStore {
    fn load_transcript(&self) -> Vec<ChatMessage> {
        self.transcript.lock().clone()
    }

    fn save_transcript(&self, messages: &[ChatMessage]) -> PortfolioResult<()> {
        *self.transcript.lock() = messages.to_vec();
        Ok(())
    }
}
