//! Turn-based battle resolution.
//!
//! State machine: no session (idle) -> PlayerTurn -> EnemyRetaliation ->
//! back to PlayerTurn, until victory, defeat or flight destroys the
//! session. Enemy death is always checked before a retaliation is
//! scheduled, and the retaliation is a timer carried on the session, so a
//! battle that ends can never be struck by a stale counter-attack.

use crate::character::progression::Character;
use crate::combat::types::{
    BattleOutcome, BattlePhase, BattleSession, Enemy, EnemyTemplate,
};
use crate::core::constants::*;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BattleError {
    #[error("a battle is already in progress")]
    AlreadyInBattle,
    #[error("no battle is in progress")]
    NotInBattle,
    #[error("waiting for the enemy to retaliate")]
    NotPlayerTurn,
}

/// One observable combat occurrence, in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    /// The player's strike landed.
    PlayerStruck {
        damage: u32,
        was_crit: bool,
        lifesteal_healed: u32,
        enemy_hp: u32,
    },
    /// The enemy's counter-attack landed.
    EnemyStruck {
        raw: u32,
        effective: u32,
        player_hp: u32,
    },
    /// The enemy died; rewards have been granted.
    BattleWon {
        enemy_name: String,
        xp_gained: u64,
        gold_gained: u64,
        source_id: Option<String>,
    },
    /// The player leveled up while collecting victory rewards.
    LeveledUp { new_level: u32 },
    /// The player's HP reached zero; the defeat penalty has been applied
    /// to HP and the caller must relocate the player to the starting zone.
    BattleLost,
    /// The player fled; no rewards, no penalty.
    Fled,
}

/// Result of one player attack roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrikeRoll {
    pub damage: u32,
    pub was_crit: bool,
}

/// Rolls one strike: crit multiplies the attack value before the target's
/// defense is subtracted. Pure aside from the rng.
pub fn roll_strike(
    attack: u32,
    crit_chance: f64,
    crit_multiplier: f64,
    rng: &mut impl Rng,
) -> StrikeRoll {
    let was_crit = rng.gen::<f64>() < crit_chance;
    let damage = if was_crit {
        (attack as f64 * crit_multiplier).floor() as u32
    } else {
        attack
    };
    StrikeRoll { damage, was_crit }
}

/// Rolls the enemy's retaliation damage before player mitigation.
pub fn roll_retaliation(enemy_attack: u32, rng: &mut impl Rng) -> u32 {
    let variance = rng.gen_range(ENEMY_DAMAGE_VARIANCE_MIN..ENEMY_DAMAGE_VARIANCE_MAX);
    (enemy_attack as f64 * variance).floor() as u32
}

/// Owns the single battle session and resolves its turns against the
/// character. Zone bookkeeping (despawn, relocation) is reported through
/// events for the controller to apply.
#[derive(Debug, Default)]
pub struct CombatEngine {
    session: Option<BattleSession>,
}

impl CombatEngine {
    pub fn new() -> Self {
        Self { session: None }
    }

    pub fn in_battle(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_enemy(&self) -> Option<&Enemy> {
        self.session.as_ref().map(|s| &s.enemy)
    }

    pub fn session(&self) -> Option<&BattleSession> {
        self.session.as_ref()
    }

    /// Starts a battle against the given enemy. Rejected (not queued) if a
    /// session is already active.
    pub fn start_battle_with(&mut self, enemy: Enemy) -> Result<&Enemy, BattleError> {
        if self.session.is_some() {
            return Err(BattleError::AlreadyInBattle);
        }
        self.session = Some(BattleSession::new(enemy));
        Ok(self.current_enemy().expect("session just created"))
    }

    /// Starts a battle by scaling a template to the zone's level context.
    pub fn start_battle(
        &mut self,
        template: &EnemyTemplate,
        zone_min_level: u32,
    ) -> Result<&Enemy, BattleError> {
        self.start_battle_with(Enemy::from_template(template, zone_min_level))
    }

    /// Executes the player's attack. On a kill the battle resolves as
    /// Victory in the same call (rewards granted through the character);
    /// otherwise the enemy's retaliation is scheduled on the session timer.
    pub fn attack(
        &mut self,
        character: &mut Character,
        rng: &mut impl Rng,
    ) -> Result<Vec<CombatEvent>, BattleError> {
        let session = self.session.as_mut().ok_or(BattleError::NotInBattle)?;
        if session.phase != BattlePhase::PlayerTurn {
            return Err(BattleError::NotPlayerTurn);
        }

        let bonuses = character.talent_bonuses();
        let mut events = Vec::new();

        let strikes = if rng.gen::<f64>() < bonuses.double_strike_chance {
            2
        } else {
            1
        };

        for _ in 0..strikes {
            if !session.enemy.is_alive() {
                break;
            }
            let roll = roll_strike(
                character.attack_total(),
                character.crit_chance(),
                character.crit_multiplier(),
                rng,
            );
            let effective = roll.damage.saturating_sub(session.enemy.defense);
            session.enemy.take_damage(effective);
            character.combat_record.damage_dealt += effective as u64;

            let lifesteal_healed = if bonuses.lifesteal > 0.0 {
                character.heal((effective as f64 * bonuses.lifesteal).floor() as u32)
            } else {
                0
            };

            events.push(CombatEvent::PlayerStruck {
                damage: effective,
                was_crit: roll.was_crit,
                lifesteal_healed,
                enemy_hp: session.enemy.hp,
            });
        }

        // Death is checked before the enemy is allowed to retaliate.
        if !session.enemy.is_alive() {
            events.extend(self.resolve_victory(character));
        } else {
            session.phase = BattlePhase::EnemyRetaliation;
            session.retaliation_timer = Some(RETALIATION_DELAY_SECONDS);
        }
        Ok(events)
    }

    /// Flees the battle. Always succeeds: no rewards, no death penalty,
    /// the enemy is not marked defeated, and any pending retaliation is
    /// cancelled with the session.
    pub fn flee(&mut self) -> Result<CombatEvent, BattleError> {
        if self.session.is_none() {
            return Err(BattleError::NotInBattle);
        }
        self.session = None;
        Ok(CombatEvent::Fled)
    }

    /// Advances pending battle timers. When the retaliation delay elapses
    /// the enemy strikes; a killing blow resolves the battle as Defeat.
    pub fn update(
        &mut self,
        delta_seconds: f64,
        character: &mut Character,
        rng: &mut impl Rng,
    ) -> Vec<CombatEvent> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let Some(timer) = session.retaliation_timer.as_mut() else {
            return Vec::new();
        };

        *timer -= delta_seconds;
        if *timer > 0.0 {
            return Vec::new();
        }
        session.retaliation_timer = None;

        let raw = roll_retaliation(session.enemy.attack, rng);
        let outcome = character.take_damage(raw);
        let mut events = vec![CombatEvent::EnemyStruck {
            raw,
            effective: outcome.effective,
            player_hp: character.hp,
        }];

        if character.hp == 0 {
            events.push(self.resolve_defeat(character));
        } else {
            session.phase = BattlePhase::PlayerTurn;
        }
        events
    }

    /// Phase of the active session, if any.
    pub fn phase(&self) -> Option<BattlePhase> {
        self.session.as_ref().map(|s| s.phase)
    }

    fn resolve_victory(&mut self, character: &mut Character) -> Vec<CombatEvent> {
        let session = self.session.take().expect("victory without session");
        let enemy = session.enemy;
        let bonuses = character.talent_bonuses();

        let xp = (enemy.experience_reward as f64 * bonuses.xp_multiplier()).floor() as u64;
        let gold = (enemy.gold_reward as f64 * bonuses.gold_multiplier()).floor() as u64;

        let gain = character.add_experience(xp);
        character.add_gold(gold);
        character.combat_record.kills += 1;

        let mut events = vec![CombatEvent::BattleWon {
            enemy_name: enemy.name,
            xp_gained: xp,
            gold_gained: gold,
            source_id: enemy.source_id,
        }];
        for level in gain.levels_reached {
            events.push(CombatEvent::LeveledUp { new_level: level });
        }
        events
    }

    fn resolve_defeat(&mut self, character: &mut Character) -> CombatEvent {
        self.session = None;
        // The death penalty applies only to an actual death; an imposed
        // defeat with hp remaining (driver-forced) keeps current hp.
        if character.hp == 0 {
            character.combat_record.deaths += 1;
            character.hp = (character.max_hp() as f64 * DEFEAT_HP_FRACTION).floor() as u32;
        }
        CombatEvent::BattleLost
    }

    /// Resolves the battle with an explicit outcome. `Fled` and `Defeat`
    /// drop the session; `Victory` grants rewards as if the enemy died.
    pub fn end_battle(
        &mut self,
        outcome: BattleOutcome,
        character: &mut Character,
    ) -> Result<Vec<CombatEvent>, BattleError> {
        if self.session.is_none() {
            return Err(BattleError::NotInBattle);
        }
        match outcome {
            BattleOutcome::Victory => Ok(self.resolve_victory(character)),
            BattleOutcome::Defeat => Ok(vec![self.resolve_defeat(character)]),
            BattleOutcome::Fled => Ok(vec![self.flee()?]),
        }
    }
}
