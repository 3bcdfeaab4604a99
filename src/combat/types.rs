//! Battle-scoped enemy types and the battle session.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A world enemy placement: the template a battle enemy is built from.
///
/// Combat stats and rewards derive from base HP so a single number tunes
/// the whole encounter. `spawn_id` is unique per placement and is the
/// back-reference used for defeat/respawn bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyTemplate {
    pub spawn_id: String,
    pub name: &'static str,
    /// World x position of this placement.
    pub x: f64,
    pub base_max_hp: u32,
    /// Chance to respawn on each zone re-entry after being defeated.
    pub respawn_chance: f64,
}

impl EnemyTemplate {
    pub fn new(name: &'static str, zone_id: u32, x: u32, base_max_hp: u32) -> Self {
        Self {
            spawn_id: format!("{}_{}_{}", name, zone_id, x),
            name,
            x: x as f64,
            base_max_hp,
            respawn_chance: DEFAULT_RESPAWN_CHANCE,
        }
    }

    pub fn with_respawn_chance(mut self, chance: f64) -> Self {
        self.respawn_chance = chance;
        self
    }

    pub fn base_attack(&self) -> u32 {
        self.base_max_hp / ENEMY_ATTACK_HP_DIVISOR + ENEMY_ATTACK_FLAT
    }

    pub fn base_defense(&self) -> u32 {
        self.base_max_hp / ENEMY_DEFENSE_HP_DIVISOR + ENEMY_DEFENSE_FLAT
    }

    pub fn base_xp_reward(&self) -> u32 {
        self.base_max_hp / ENEMY_XP_HP_DIVISOR
    }

    pub fn base_gold_reward(&self) -> u32 {
        self.base_max_hp / ENEMY_GOLD_HP_DIVISOR + ENEMY_GOLD_FLAT
    }
}

/// A live battle enemy, built from a template scaled to its zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub max_hp: u32,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub experience_reward: u32,
    pub gold_reward: u32,
    /// Spawn id of the world placement this enemy came from, if any.
    #[serde(default)]
    pub source_id: Option<String>,
}

impl Enemy {
    /// Builds a battle enemy by scaling every template quantity by the
    /// zone-level multiplier `1 + (zone_min_level - 1) * 0.1`, floored.
    pub fn from_template(template: &EnemyTemplate, zone_min_level: u32) -> Self {
        let mult = 1.0 + (zone_min_level.saturating_sub(1) as f64) * ZONE_LEVEL_SCALING_STEP;
        let scale = |v: u32| (v as f64 * mult).floor() as u32;

        let max_hp = scale(template.base_max_hp).max(1);
        Self {
            name: template.name.to_string(),
            max_hp,
            hp: max_hp,
            attack: scale(template.base_attack()),
            defense: scale(template.base_defense()),
            experience_reward: scale(template.base_xp_reward()),
            gold_reward: scale(template.base_gold_reward()),
            source_id: Some(template.spawn_id.clone()),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Applies damage (already reduced by this enemy's defense), floored
    /// at zero HP.
    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}

/// Phases of an active battle. `Idle` is represented by the absence of a
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Waiting for the player to act.
    PlayerTurn,
    /// The enemy's counter-attack is pending on the retaliation timer.
    EnemyRetaliation,
}

/// How a battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    Victory,
    Defeat,
    Fled,
}

/// Transient state of one player-vs-enemy encounter. Exactly one session
/// may exist at a time; dropping it cancels any pending retaliation.
#[derive(Debug, Clone)]
pub struct BattleSession {
    pub id: Uuid,
    pub enemy: Enemy,
    pub phase: BattlePhase,
    /// Seconds until the pending retaliation fires.
    pub retaliation_timer: Option<f64>,
}

impl BattleSession {
    pub fn new(enemy: Enemy) -> Self {
        Self {
            id: Uuid::new_v4(),
            enemy,
            phase: BattlePhase::PlayerTurn,
            retaliation_timer: None,
        }
    }
}
