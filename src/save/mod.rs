//! Persistence: the save document, the checksummed binary save file, and
//! a pretty-JSON export helper.

pub mod manager;
pub mod persistence;

use crate::core::constants::SAVE_VERSION;
use crate::core::controller::GameController;
use crate::core::game_state::GameState;
use crate::quests::tracker::QuestTracker;
use serde::{Deserialize, Serialize};

/// The flat save document. Everything needed to restore a game: character
/// (stats, level, xp, gold, talents, inventory), world position, elapsed
/// time, discovery and despawn bookkeeping, and per-quest progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub version: u32,
    pub saved_at: i64,
    pub state: GameState,
    pub quests: QuestTracker,
}

impl SaveData {
    /// Captures a controller's persistent state.
    pub fn capture(controller: &GameController) -> Self {
        Self {
            version: SAVE_VERSION,
            saved_at: chrono::Utc::now().timestamp(),
            state: controller.state().clone(),
            quests: controller.quests().clone(),
        }
    }

    /// Restores a controller, re-establishing every invariant the data
    /// may have lost (clamped hp/mp, capped objective counts). Any active
    /// battle was transient and is not restored.
    pub fn restore(mut self) -> GameController {
        self.state.character.sanitize();
        self.quests.sanitize();
        GameController::from_parts(self.state, self.quests)
    }
}
