//! The player character: experience, leveling, talents, damage and gold.
//!
//! Derived totals (attack, defense, max HP, crit) always combine base
//! stats, talent bonuses and equipment at query time. `take_damage` and
//! `heal` keep `0 <= hp <= max_hp` for every input.

use crate::character::stats::{BaseStats, CombatRecord};
use crate::character::talents::{check_learnable, TalentBonuses, TalentError};
use crate::core::constants::*;
use crate::items::inventory::Inventory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoldError {
    #[error("not enough gold: need {needed}, have {have}")]
    InsufficientGold { needed: u64, have: u64 },
}

/// What happened when experience was added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XpGain {
    /// Amount actually credited (0 at max level).
    pub gained: u64,
    /// Each level reached, in order.
    pub levels_reached: Vec<u32>,
    /// Talent points granted by those level-ups.
    pub talent_points_granted: u32,
}

/// Outcome of one `take_damage` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DamageOutcome {
    /// Damage applied after defense and damage reduction.
    pub effective: u32,
    /// HP went from positive to exactly zero on this hit.
    pub fatal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: Uuid,
    pub name: String,
    pub level: u32,
    pub experience: u64,
    pub experience_to_next: u64,
    base: BaseStats,
    pub hp: u32,
    pub mp: u32,
    pub gold: u64,
    pub talent_points: u32,
    talent_ranks: BTreeMap<String, u32>,
    pub inventory: Inventory,
    #[serde(default)]
    pub combat_record: CombatRecord,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        let base = BaseStats::new();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            level: 1,
            experience: 0,
            experience_to_next: STARTING_XP_TO_NEXT,
            hp: base.max_hp,
            mp: base.max_mp,
            base,
            gold: STARTING_GOLD,
            talent_points: 0,
            talent_ranks: BTreeMap::new(),
            inventory: Inventory::new(),
            combat_record: CombatRecord::default(),
        }
    }

    // ── Derived totals ──────────────────────────────────────────────

    /// Bonuses recomputed from talent ranks on every call.
    pub fn talent_bonuses(&self) -> TalentBonuses {
        TalentBonuses::from_ranks(&self.talent_ranks)
    }

    pub fn max_hp(&self) -> u32 {
        self.base.max_hp + self.talent_bonuses().flat_max_hp + self.inventory.max_hp_bonus()
    }

    pub fn max_mp(&self) -> u32 {
        self.base.max_mp + self.talent_bonuses().flat_max_mp
    }

    /// Attack including talent and equipped-weapon bonuses.
    pub fn attack_total(&self) -> u32 {
        self.base.attack + self.talent_bonuses().flat_attack + self.inventory.attack_bonus()
    }

    /// Defense including equipped-armor bonuses.
    pub fn defense_total(&self) -> u32 {
        self.base.defense + self.inventory.defense_bonus()
    }

    pub fn crit_chance(&self) -> f64 {
        self.base.crit_chance + self.talent_bonuses().crit_chance + self.inventory.crit_chance_bonus()
    }

    pub fn crit_multiplier(&self) -> f64 {
        self.base.crit_multiplier
    }

    pub fn talent_rank(&self, id: &str) -> u32 {
        self.talent_ranks.get(id).copied().unwrap_or(0)
    }

    pub fn talent_ranks(&self) -> &BTreeMap<String, u32> {
        &self.talent_ranks
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn at_max_level(&self) -> bool {
        self.level >= MAX_LEVEL
    }

    // ── Experience and leveling ─────────────────────────────────────

    /// Adds experience, processing any number of level-ups. No-op at max
    /// level. Applying the same total in one call or split across calls
    /// yields the same level and remainder.
    pub fn add_experience(&mut self, amount: u64) -> XpGain {
        if self.at_max_level() {
            return XpGain::default();
        }

        self.experience += amount;
        let mut gain = XpGain {
            gained: amount,
            ..XpGain::default()
        };

        while self.experience >= self.experience_to_next && self.level < MAX_LEVEL {
            self.experience -= self.experience_to_next;
            self.level_up(&mut gain);
        }
        gain
    }

    fn level_up(&mut self, gain: &mut XpGain) {
        self.level += 1;
        self.experience_to_next =
            (self.experience_to_next as f64 * XP_GROWTH_FACTOR).floor() as u64;
        self.base.apply_level_growth();

        // Full restore against the new maxima.
        self.hp = self.max_hp();
        self.mp = self.max_mp();

        if self.level % TALENT_POINT_LEVEL_INTERVAL == 0 {
            self.talent_points += 1;
            gain.talent_points_granted += 1;
        }
        gain.levels_reached.push(self.level);
    }

    // ── Talents ─────────────────────────────────────────────────────

    /// Spends one talent point on the given talent. Returns the new rank.
    /// Every failure leaves points and ranks untouched.
    pub fn learn_talent(&mut self, id: &str) -> Result<u32, TalentError> {
        check_learnable(id, &self.talent_ranks, self.talent_points)?;
        self.talent_points -= 1;
        let rank = self.talent_ranks.entry(id.to_string()).or_insert(0);
        *rank += 1;
        let new_rank = *rank;
        // Max HP may have grown; current hp is preserved, not scaled.
        self.hp = self.hp.min(self.max_hp());
        Ok(new_rank)
    }

    // ── Health, mana, damage ────────────────────────────────────────

    /// Applies incoming damage: defense is subtracted first, then the
    /// damage-reduction talent is applied multiplicatively, floored.
    pub fn take_damage(&mut self, raw: u32) -> DamageOutcome {
        let was_alive = self.hp > 0;
        let after_defense = raw.saturating_sub(self.defense_total());
        let reduction = self.talent_bonuses().damage_reduction;
        let effective = if reduction > 0.0 {
            (after_defense as f64 * (1.0 - reduction)).floor() as u32
        } else {
            after_defense
        };

        self.hp = self.hp.saturating_sub(effective);
        self.combat_record.damage_taken += effective as u64;

        DamageOutcome {
            effective,
            fatal: was_alive && self.hp == 0 && effective > 0,
        }
    }

    /// Heals up to max HP; returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let max = self.max_hp();
        let healed = amount.min(max.saturating_sub(self.hp));
        self.hp += healed;
        healed
    }

    /// Restores mana up to max MP; returns the amount actually restored.
    pub fn restore_mana(&mut self, amount: u32) -> u32 {
        let max = self.max_mp();
        let restored = amount.min(max.saturating_sub(self.mp));
        self.mp += restored;
        restored
    }

    // ── Gold ────────────────────────────────────────────────────────

    pub fn add_gold(&mut self, amount: u64) {
        self.gold += amount;
    }

    pub fn spend_gold(&mut self, amount: u64) -> Result<(), GoldError> {
        if amount > self.gold {
            return Err(GoldError::InsufficientGold {
                needed: amount,
                have: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    // ── Load sanitation ─────────────────────────────────────────────

    /// Re-establishes invariants after deserializing untrusted data.
    pub fn sanitize(&mut self) {
        self.level = self.level.clamp(1, MAX_LEVEL);
        self.experience_to_next = self.experience_to_next.max(1);
        self.hp = self.hp.min(self.max_hp());
        self.mp = self.mp.min(self.max_mp());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_character() {
        let hero = Character::new("Artemis");
        assert_eq!(hero.level, 1);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.experience_to_next, 100);
        assert_eq!(hero.hp, 200);
        assert_eq!(hero.max_hp(), 200);
        assert_eq!(hero.gold, 10);
        assert_eq!(hero.talent_points, 0);
        assert!(hero.is_alive());
    }

    #[test]
    fn test_level_up_growth_and_restore() {
        let mut hero = Character::new("Artemis");
        hero.hp = 50;
        let gain = hero.add_experience(100);

        assert_eq!(hero.level, 2);
        assert_eq!(gain.levels_reached, vec![2]);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.experience_to_next, 115); // floor(100 * 1.15)
        assert_eq!(hero.max_hp(), 220);
        assert_eq!(hero.hp, 220); // full restore
        assert_eq!(hero.attack_total(), 23);
        assert_eq!(hero.defense_total(), 12);
    }

    #[test]
    fn test_talent_point_every_second_level() {
        let mut hero = Character::new("Artemis");
        let gain = hero.add_experience(1_000_000);
        assert!(hero.level > 10);
        let expected = hero.level / TALENT_POINT_LEVEL_INTERVAL;
        assert_eq!(hero.talent_points, expected);
        assert_eq!(gain.talent_points_granted, expected);
    }

    #[test]
    fn test_xp_additivity() {
        let mut one_shot = Character::new("A");
        one_shot.add_experience(7_777);

        let mut split = Character::new("B");
        for _ in 0..7 {
            split.add_experience(1_000);
        }
        split.add_experience(777);

        assert_eq!(one_shot.level, split.level);
        assert_eq!(one_shot.experience, split.experience);
        assert_eq!(one_shot.experience_to_next, split.experience_to_next);
    }

    #[test]
    fn test_max_level_caps_experience() {
        let mut hero = Character::new("Artemis");
        hero.add_experience(u64::MAX / 4);
        assert_eq!(hero.level, MAX_LEVEL);

        let xp_before = hero.experience;
        let gain = hero.add_experience(500);
        assert_eq!(gain, XpGain::default());
        assert_eq!(hero.experience, xp_before);
        assert_eq!(hero.level, MAX_LEVEL);
    }

    #[test]
    fn test_take_damage_subtracts_defense() {
        // Scenario B: hp 10/200, raw 15 against defense 10 -> 5 damage.
        let mut hero = Character::new("Artemis");
        hero.hp = 10;
        let outcome = hero.take_damage(15);
        assert_eq!(outcome.effective, 5);
        assert_eq!(hero.hp, 5);
        assert!(!outcome.fatal);
    }

    #[test]
    fn test_take_damage_never_negative() {
        let mut hero = Character::new("Artemis");
        let outcome = hero.take_damage(3); // below defense 10
        assert_eq!(outcome.effective, 0);
        assert_eq!(hero.hp, 200);
    }

    #[test]
    fn test_take_damage_floors_at_zero_and_reports_fatal() {
        let mut hero = Character::new("Artemis");
        hero.hp = 5;
        let outcome = hero.take_damage(500);
        assert_eq!(hero.hp, 0);
        assert!(outcome.fatal);

        // Hitting an already-dead character is not a second death.
        let again = hero.take_damage(500);
        assert!(!again.fatal);
        assert_eq!(hero.hp, 0);
    }

    #[test]
    fn test_damage_reduction_applied_after_defense() {
        let mut hero = Character::new("Artemis");
        hero.talent_points = 5;
        for _ in 0..5 {
            hero.learn_talent("iron-skin").unwrap();
        }
        // raw 110 - defense 10 = 100, then x(1 - 0.10) = 90
        let outcome = hero.take_damage(110);
        assert_eq!(outcome.effective, 90);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut hero = Character::new("Artemis");
        hero.hp = 190;
        assert_eq!(hero.heal(50), 10);
        assert_eq!(hero.hp, 200);
        assert_eq!(hero.heal(50), 0);
    }

    #[test]
    fn test_gold_spend() {
        let mut hero = Character::new("Artemis");
        hero.add_gold(90);
        assert_eq!(hero.gold, 100);
        hero.spend_gold(30).unwrap();
        assert_eq!(hero.gold, 70);

        let err = hero.spend_gold(1000).unwrap_err();
        assert_eq!(
            err,
            GoldError::InsufficientGold {
                needed: 1000,
                have: 70
            }
        );
        assert_eq!(hero.gold, 70);
    }

    #[test]
    fn test_learn_talent_spends_point() {
        let mut hero = Character::new("Artemis");
        hero.talent_points = 2;
        assert_eq!(hero.learn_talent("attack-training").unwrap(), 1);
        assert_eq!(hero.talent_points, 1);
        assert_eq!(hero.attack_total(), 25);
        assert_eq!(hero.learn_talent("attack-training").unwrap(), 2);
        assert_eq!(hero.attack_total(), 30);
    }

    #[test]
    fn test_learn_talent_without_points() {
        // Scenario E: no points -> InsufficientPoints, stats unchanged.
        let mut hero = Character::new("Artemis");
        let attack_before = hero.attack_total();
        let err = hero.learn_talent("attack-training").unwrap_err();
        assert_eq!(err, TalentError::InsufficientPoints);
        assert_eq!(hero.attack_total(), attack_before);
        assert_eq!(hero.talent_rank("attack-training"), 0);
    }

    #[test]
    fn test_learn_talent_max_rank_idempotent() {
        let mut hero = Character::new("Artemis");
        hero.talent_points = 10;
        for _ in 0..5 {
            hero.learn_talent("vitality").unwrap();
        }
        let points_before = hero.talent_points;
        let err = hero.learn_talent("vitality").unwrap_err();
        assert_eq!(err, TalentError::MaxRankReached("vitality".to_string()));
        assert_eq!(hero.talent_points, points_before);
        assert_eq!(hero.talent_rank("vitality"), 5);
    }

    #[test]
    fn test_vitality_raises_max_without_healing() {
        let mut hero = Character::new("Artemis");
        hero.talent_points = 1;
        hero.hp = 100;
        hero.learn_talent("vitality").unwrap();
        assert_eq!(hero.max_hp(), 220);
        assert_eq!(hero.hp, 100);
    }

    #[test]
    fn test_equipment_contributes_to_totals() {
        let mut hero = Character::new("Artemis");
        hero.inventory.add("iron-sword", 1).unwrap();
        hero.inventory.add("chainmail", 1).unwrap();
        hero.inventory.equip("iron-sword").unwrap();
        hero.inventory.equip("chainmail").unwrap();

        assert_eq!(hero.attack_total(), 30); // 20 + 10 weapon
        assert_eq!(hero.defense_total(), 20); // 10 + 10 armor
        assert_eq!(hero.max_hp(), 220); // 200 + 20 armor hp
    }

    #[test]
    fn test_sanitize_clamps_hp() {
        let mut hero = Character::new("Artemis");
        hero.hp = 9999;
        hero.mp = 9999;
        hero.sanitize();
        assert_eq!(hero.hp, hero.max_hp());
        assert_eq!(hero.mp, hero.max_mp());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut hero = Character::new("Artemis");
        hero.talent_points = 3;
        hero.learn_talent("critical-strike").unwrap();
        hero.add_experience(450);
        hero.add_gold(120);
        hero.inventory.add("health-potion", 4).unwrap();

        let json = serde_json::to_string(&hero).unwrap();
        let loaded: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, hero);
    }
}
