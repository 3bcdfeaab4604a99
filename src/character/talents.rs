//! Talent catalog and derived talent bonuses.
//!
//! Talents are permanent, point-bought upgrades capped at a per-talent max
//! rank. Some talents require another talent at max rank first. All bonuses
//! are recomputed from the rank map on every query; nothing is ever folded
//! into the character's base stats.

use std::collections::BTreeMap;
use thiserror::Error;

/// Per-rank effect of a talent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TalentEffect {
    /// Flat attack per rank.
    FlatAttack(u32),
    /// Flat max HP per rank.
    FlatMaxHp(u32),
    /// Flat max MP per rank.
    FlatMaxMp(u32),
    /// Additional crit chance per rank (fraction, e.g. 0.03 = +3%).
    CritChance(f64),
    /// Attack speed bonus per rank (fraction).
    AttackSpeed(f64),
    /// Incoming damage reduction per rank (fraction).
    DamageReduction(f64),
    /// Fraction of dealt damage returned as healing, per rank.
    Lifesteal(f64),
    /// Bonus experience multiplier per rank (fraction).
    XpBonus(f64),
    /// Bonus gold multiplier per rank (fraction).
    GoldBonus(f64),
    /// Chance to strike twice (fixed, rank 1 only).
    DoubleStrike(f64),
}

/// Static definition of one talent.
#[derive(Debug, Clone, Copy)]
pub struct TalentDef {
    pub id: &'static str,
    pub name: &'static str,
    pub max_rank: u32,
    pub effect: TalentEffect,
    /// Talent id that must be at max rank before this one can be learned.
    pub requires: Option<&'static str>,
}

/// All talents in the game.
pub const TALENT_CATALOG: &[TalentDef] = &[
    TalentDef {
        id: "attack-training",
        name: "Attack Training",
        max_rank: 5,
        effect: TalentEffect::FlatAttack(5),
        requires: None,
    },
    TalentDef {
        id: "vitality",
        name: "Vitality",
        max_rank: 5,
        effect: TalentEffect::FlatMaxHp(20),
        requires: None,
    },
    TalentDef {
        id: "mana-pool",
        name: "Mana Pool",
        max_rank: 5,
        effect: TalentEffect::FlatMaxMp(10),
        requires: None,
    },
    TalentDef {
        id: "critical-strike",
        name: "Critical Strike",
        max_rank: 5,
        effect: TalentEffect::CritChance(0.03),
        requires: None,
    },
    TalentDef {
        id: "blade-flurry",
        name: "Blade Flurry",
        max_rank: 5,
        effect: TalentEffect::AttackSpeed(0.02),
        requires: None,
    },
    TalentDef {
        id: "iron-skin",
        name: "Iron Skin",
        max_rank: 5,
        effect: TalentEffect::DamageReduction(0.02),
        requires: None,
    },
    TalentDef {
        id: "bloodthirst",
        name: "Bloodthirst",
        max_rank: 5,
        effect: TalentEffect::Lifesteal(0.02),
        requires: None,
    },
    TalentDef {
        id: "keen-mind",
        name: "Keen Mind",
        max_rank: 5,
        effect: TalentEffect::XpBonus(0.05),
        requires: None,
    },
    TalentDef {
        id: "golden-touch",
        name: "Golden Touch",
        max_rank: 5,
        effect: TalentEffect::GoldBonus(0.10),
        requires: None,
    },
    TalentDef {
        id: "double-strike",
        name: "Double Strike",
        max_rank: 1,
        effect: TalentEffect::DoubleStrike(0.20),
        requires: Some("critical-strike"),
    },
];

/// Looks up a talent definition by id.
pub fn get_talent(id: &str) -> Option<&'static TalentDef> {
    TALENT_CATALOG.iter().find(|t| t.id == id)
}

/// Aggregate bonuses derived from a rank map.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TalentBonuses {
    pub flat_attack: u32,
    pub flat_max_hp: u32,
    pub flat_max_mp: u32,
    pub crit_chance: f64,
    pub attack_speed: f64,
    pub damage_reduction: f64,
    pub lifesteal: f64,
    pub xp_bonus: f64,
    pub gold_bonus: f64,
    pub double_strike_chance: f64,
}

impl TalentBonuses {
    /// Derives all bonuses from the given rank map. Unknown ids are ignored
    /// (a save written by a newer build may carry talents we don't know).
    pub fn from_ranks(ranks: &BTreeMap<String, u32>) -> Self {
        let mut bonuses = TalentBonuses::default();
        for (id, &rank) in ranks {
            let Some(def) = get_talent(id) else { continue };
            let rank = rank.min(def.max_rank);
            match def.effect {
                TalentEffect::FlatAttack(per) => bonuses.flat_attack += per * rank,
                TalentEffect::FlatMaxHp(per) => bonuses.flat_max_hp += per * rank,
                TalentEffect::FlatMaxMp(per) => bonuses.flat_max_mp += per * rank,
                TalentEffect::CritChance(per) => bonuses.crit_chance += per * rank as f64,
                TalentEffect::AttackSpeed(per) => bonuses.attack_speed += per * rank as f64,
                TalentEffect::DamageReduction(per) => {
                    bonuses.damage_reduction += per * rank as f64
                }
                TalentEffect::Lifesteal(per) => bonuses.lifesteal += per * rank as f64,
                TalentEffect::XpBonus(per) => bonuses.xp_bonus += per * rank as f64,
                TalentEffect::GoldBonus(per) => bonuses.gold_bonus += per * rank as f64,
                TalentEffect::DoubleStrike(chance) => {
                    if rank > 0 {
                        bonuses.double_strike_chance = chance;
                    }
                }
            }
        }
        bonuses
    }

    /// Experience multiplier (1.0 with no ranks).
    pub fn xp_multiplier(&self) -> f64 {
        1.0 + self.xp_bonus
    }

    /// Gold multiplier (1.0 with no ranks).
    pub fn gold_multiplier(&self) -> f64 {
        1.0 + self.gold_bonus
    }

    /// Attack speed multiplier (1.0 with no ranks). Consumed by the
    /// presentation layer for attack pacing.
    pub fn attack_speed_multiplier(&self) -> f64 {
        1.0 + self.attack_speed
    }
}

/// Why a talent spend was rejected. None of these change any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TalentError {
    #[error("no talent points available")]
    InsufficientPoints,
    #[error("talent `{0}` is already at max rank")]
    MaxRankReached(String),
    #[error("unknown talent `{0}`")]
    UnknownTalent(String),
    #[error("talent `{id}` requires `{requires}` at max rank")]
    PrerequisiteNotMet {
        id: String,
        requires: &'static str,
    },
}

/// Validates a talent spend against the catalog and the current rank map.
/// Returns the definition on success so the caller can apply the spend.
pub fn check_learnable(
    id: &str,
    ranks: &BTreeMap<String, u32>,
    talent_points: u32,
) -> Result<&'static TalentDef, TalentError> {
    let def = get_talent(id).ok_or_else(|| TalentError::UnknownTalent(id.to_string()))?;

    if talent_points == 0 {
        return Err(TalentError::InsufficientPoints);
    }

    let current = ranks.get(id).copied().unwrap_or(0);
    if current >= def.max_rank {
        return Err(TalentError::MaxRankReached(id.to_string()));
    }

    if let Some(req) = def.requires {
        let req_def = get_talent(req).expect("catalog prerequisite must exist");
        let req_rank = ranks.get(req).copied().unwrap_or(0);
        if req_rank < req_def.max_rank {
            return Err(TalentError::PrerequisiteNotMet {
                id: id.to_string(),
                requires: req,
            });
        }
    }

    Ok(def)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks_of(pairs: &[(&str, u32)]) -> BTreeMap<String, u32> {
        pairs
            .iter()
            .map(|(id, r)| (id.to_string(), *r))
            .collect()
    }

    #[test]
    fn test_catalog_ids_unique() {
        for (i, a) in TALENT_CATALOG.iter().enumerate() {
            for b in &TALENT_CATALOG[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate talent id {}", a.id);
            }
        }
    }

    #[test]
    fn test_catalog_prerequisites_exist() {
        for def in TALENT_CATALOG {
            if let Some(req) = def.requires {
                assert!(get_talent(req).is_some(), "{} requires unknown {}", def.id, req);
            }
        }
    }

    #[test]
    fn test_bonuses_from_empty_ranks() {
        let bonuses = TalentBonuses::from_ranks(&BTreeMap::new());
        assert_eq!(bonuses, TalentBonuses::default());
        assert!((bonuses.xp_multiplier() - 1.0).abs() < f64::EPSILON);
        assert!((bonuses.gold_multiplier() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_flat_bonuses_scale_with_rank() {
        let bonuses = TalentBonuses::from_ranks(&ranks_of(&[
            ("attack-training", 3),
            ("vitality", 2),
        ]));
        assert_eq!(bonuses.flat_attack, 15);
        assert_eq!(bonuses.flat_max_hp, 40);
    }

    #[test]
    fn test_fractional_bonuses() {
        let bonuses = TalentBonuses::from_ranks(&ranks_of(&[
            ("iron-skin", 5),
            ("bloodthirst", 2),
            ("keen-mind", 1),
        ]));
        assert!((bonuses.damage_reduction - 0.10).abs() < 1e-9);
        assert!((bonuses.lifesteal - 0.04).abs() < 1e-9);
        assert!((bonuses.xp_multiplier() - 1.05).abs() < 1e-9);
    }

    #[test]
    fn test_ranks_clamped_to_max() {
        // A tampered save with rank 99 must not produce runaway bonuses.
        let bonuses = TalentBonuses::from_ranks(&ranks_of(&[("attack-training", 99)]));
        assert_eq!(bonuses.flat_attack, 25);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let bonuses = TalentBonuses::from_ranks(&ranks_of(&[("future-talent", 3)]));
        assert_eq!(bonuses, TalentBonuses::default());
    }

    #[test]
    fn test_check_learnable_no_points() {
        let err = check_learnable("attack-training", &BTreeMap::new(), 0).unwrap_err();
        assert_eq!(err, TalentError::InsufficientPoints);
    }

    #[test]
    fn test_check_learnable_max_rank() {
        let ranks = ranks_of(&[("attack-training", 5)]);
        let err = check_learnable("attack-training", &ranks, 3).unwrap_err();
        assert_eq!(err, TalentError::MaxRankReached("attack-training".to_string()));
    }

    #[test]
    fn test_check_learnable_unknown() {
        let err = check_learnable("nope", &BTreeMap::new(), 1).unwrap_err();
        assert_eq!(err, TalentError::UnknownTalent("nope".to_string()));
    }

    #[test]
    fn test_check_learnable_prerequisite() {
        // double-strike requires critical-strike at max rank (5)
        let err = check_learnable("double-strike", &ranks_of(&[("critical-strike", 4)]), 1)
            .unwrap_err();
        assert!(matches!(err, TalentError::PrerequisiteNotMet { .. }));

        let ok = check_learnable("double-strike", &ranks_of(&[("critical-strike", 5)]), 1);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_double_strike_chance() {
        let bonuses = TalentBonuses::from_ranks(&ranks_of(&[
            ("critical-strike", 5),
            ("double-strike", 1),
        ]));
        assert!((bonuses.double_strike_chance - 0.20).abs() < 1e-9);
        assert!((bonuses.crit_chance - 0.15).abs() < 1e-9);
    }
}
