//! Observations for the presentation layer.
//!
//! The core never touches UI; each operation and tick returns the events
//! it produced, and the controller keeps a bounded queue of player-facing
//! notifications derived from them.

use crate::combat::engine::CombatEvent;
use crate::quests::tracker::QuestEvent;
use serde::{Deserialize, Serialize};

/// Severity of a player-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// A message for the player, rendered by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
        }
    }
}

/// A dialogue exchange produced by `interact`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueEvent {
    pub npc_name: String,
    pub line: String,
    /// Quest the NPC is offering, if any.
    pub quest_offered: Option<String>,
    /// Merchant NPCs open their shop alongside the dialogue.
    pub opens_shop: bool,
}

/// Everything the core can report to the outside, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Combat(CombatEvent),
    Quest(QuestEvent),
    Dialogue(DialogueEvent),
    ZoneChanged { zone_id: u32, name: String },
    ZoneDiscovered { zone_id: u32, name: String, xp: u64 },
    EnemyRespawned { spawn_id: String },
    BattleStarted { enemy_name: String, ambush: bool },
    Regenerated { amount: u32 },
    Paused(bool),
    ItemPurchased { item_id: String, price: u64 },
    ItemSold { item_id: String, price: u64 },
}
