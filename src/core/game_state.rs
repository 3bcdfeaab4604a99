//! Persistent world aggregate.

use crate::character::progression::Character;
use crate::core::constants::{RESPAWN_POSITION_X, STARTING_ZONE_ID};
use crate::world::npcs::ShopStock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything about a running game that outlives a battle. The battle
/// session itself is transient and owned by the combat engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub character: Character,
    pub current_zone: u32,
    pub player_x: f64,
    /// Elapsed logical play time in seconds.
    pub game_time: f64,
    #[serde(skip)]
    pub paused: bool,
    /// Zones the player has set foot in.
    pub discovered_zones: BTreeSet<u32>,
    /// Spawn ids of world enemies currently despawned.
    pub defeated_spawns: BTreeSet<String>,
    #[serde(default)]
    pub shop_stock: ShopStock,
    /// Countdown to the next passive regeneration tick.
    #[serde(skip)]
    pub regen_timer: f64,
}

impl GameState {
    pub fn new(player_name: impl Into<String>) -> Self {
        let mut discovered_zones = BTreeSet::new();
        discovered_zones.insert(STARTING_ZONE_ID);
        Self {
            character: Character::new(player_name),
            current_zone: STARTING_ZONE_ID,
            player_x: RESPAWN_POSITION_X,
            game_time: 0.0,
            paused: false,
            discovered_zones,
            defeated_spawns: BTreeSet::new(),
            shop_stock: ShopStock::new(),
            regen_timer: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_state() {
        let state = GameState::new("Artemis");
        assert_eq!(state.current_zone, 0);
        assert_eq!(state.player_x, 100.0);
        assert_eq!(state.game_time, 0.0);
        assert!(!state.paused);
        assert!(state.discovered_zones.contains(&0));
        assert_eq!(state.discovered_zones.len(), 1);
        assert!(state.defeated_spawns.is_empty());
    }

    #[test]
    fn test_serde_skips_transient_fields() {
        let mut state = GameState::new("Artemis");
        state.paused = true;
        state.regen_timer = 0.7;

        let json = serde_json::to_string(&state).unwrap();
        let loaded: GameState = serde_json::from_str(&json).unwrap();
        assert!(!loaded.paused);
        assert_eq!(loaded.regen_timer, 0.0);
        assert_eq!(loaded.character, state.character);
    }
}
