//! Base character stats and per-level growth.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// Permanent base stats, before talent and equipment bonuses.
///
/// Talent bonuses are never folded into these values; they are derived
/// from talent ranks on every query (see `character::talents`) so that
/// repeated spend/respec cannot drift the base numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    pub max_hp: u32,
    pub max_mp: u32,
    pub attack: u32,
    pub defense: u32,
    pub crit_chance: f64,
    pub crit_multiplier: f64,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self::new()
    }
}

impl BaseStats {
    pub fn new() -> Self {
        Self {
            max_hp: BASE_MAX_HP,
            max_mp: BASE_MAX_MP,
            attack: BASE_ATTACK,
            defense: BASE_DEFENSE,
            crit_chance: BASE_CRIT_CHANCE,
            crit_multiplier: BASE_CRIT_MULTIPLIER,
        }
    }

    /// Applies one level worth of stat growth.
    pub fn apply_level_growth(&mut self) {
        self.max_hp += LEVEL_MAX_HP_GAIN;
        self.max_mp += LEVEL_MAX_MP_GAIN;
        self.attack += LEVEL_ATTACK_GAIN;
        self.defense += LEVEL_DEFENSE_GAIN;
    }
}

/// Lifetime combat bookkeeping, kept for the stats panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatRecord {
    pub kills: u64,
    pub deaths: u64,
    pub damage_dealt: u64,
    pub damage_taken: u64,
}
