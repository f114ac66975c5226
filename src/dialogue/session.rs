// src/dialogue/session.rs — Per-chat conversational state

use std::collections::HashMap;

use crate::engine::Intent;

/// Transient state for one chat's in-progress dialogue.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Set when the user picks an intent; present means the controller is
    /// waiting for an amount.
    pub intent: Option<Intent>,
}

/// All live sessions, keyed by chat id.
///
/// Entries are created on first reference and removed when a verdict goes
/// out. There is no expiry: a user who abandons mid-dialogue leaves their
/// entry behind until the process restarts.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<i64, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The session for a chat, created if absent.
    pub fn entry(&mut self, chat_id: i64) -> &mut Session {
        self.sessions.entry(chat_id).or_default()
    }

    /// The stored intent for a chat, if any.
    pub fn intent(&self, chat_id: i64) -> Option<Intent> {
        self.sessions.get(&chat_id).and_then(|s| s.intent)
    }

    /// Drop a chat's session entirely.
    pub fn clear(&mut self, chat_id: i64) {
        self.sessions.remove(&chat_id);
    }

    /// Number of live sessions, abandoned ones included.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
