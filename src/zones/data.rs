//! The world map: ten zones from Aldenhaven Village to the Forgotten
//! Realm, with their enemy rosters, connections and entry requirements.

use crate::combat::types::EnemyTemplate;
use crate::core::constants::{BOSS_RESPAWN_CHANCE, DEFAULT_RESPAWN_CHANCE};

/// Broad danger classification; dangerous and hostile zones roll random
/// encounters while the player moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneType {
    Safe,
    Neutral,
    Magical,
    Dangerous,
    Dungeon,
    Hostile,
    Boss,
    Special,
}

impl ZoneType {
    pub fn rolls_random_encounters(&self) -> bool {
        matches!(self, ZoneType::Dangerous | ZoneType::Hostile)
    }
}

/// Gate on entering a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoneRequirement {
    MinLevel(u32),
    QuestCompleted(&'static str),
    /// The quest must at least be unlocked (available or active).
    QuestUnlocked(&'static str),
    HasItem(&'static str),
}

/// One enemy placement in a zone: name, x position, base max HP, and an
/// optional respawn-chance override for boss-grade spawns.
#[derive(Clone, Copy)]
struct SpawnSpec(&'static str, u32, u32, Option<f64>);

/// Static definition of one zone.
#[derive(Debug, Clone)]
pub struct Zone {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub zone_type: ZoneType,
    pub level_range: (u32, u32),
    pub connections: &'static [u32],
    pub discovery_xp: u64,
    pub requirement: Option<ZoneRequirement>,
    pub enemies: Vec<EnemyTemplate>,
}

impl Zone {
    pub fn min_level(&self) -> u32 {
        self.level_range.0
    }
}

fn build_zone(
    id: u32,
    name: &'static str,
    description: &'static str,
    zone_type: ZoneType,
    level_range: (u32, u32),
    connections: &'static [u32],
    discovery_xp: u64,
    requirement: Option<ZoneRequirement>,
    spawns: &[SpawnSpec],
) -> Zone {
    Zone {
        id,
        name,
        description,
        zone_type,
        level_range,
        connections,
        discovery_xp,
        requirement,
        enemies: spawns
            .iter()
            .map(|&SpawnSpec(enemy_name, x, hp, respawn)| {
                EnemyTemplate::new(enemy_name, id, x, hp)
                    .with_respawn_chance(respawn.unwrap_or(DEFAULT_RESPAWN_CHANCE))
            })
            .collect(),
    }
}

/// Returns all zones in the game (ids 0-9).
pub fn get_all_zones() -> Vec<Zone> {
    vec![
        build_zone(
            0,
            "Aldenhaven Village",
            "A peaceful farming village where your journey begins.",
            ZoneType::Safe,
            (1, 5),
            &[1],
            0,
            None,
            &[],
        ),
        build_zone(
            1,
            "Greenwood Plains",
            "Rolling hills dotted with peaceful wildlife and the occasional bandit.",
            ZoneType::Safe,
            (3, 8),
            &[0, 2],
            50,
            None,
            &[
                SpawnSpec("Wolf", 200, 80, None),
                SpawnSpec("Wolf", 400, 85, None),
                SpawnSpec("Wolf", 650, 75, None),
                SpawnSpec("Bandit Scout", 500, 120, None),
            ],
        ),
        build_zone(
            2,
            "Merchant's Crossroads",
            "A busy trading post where merchants gather and bandits lurk.",
            ZoneType::Neutral,
            (5, 12),
            &[1, 3, 4],
            75,
            None,
            &[
                SpawnSpec("Bandit", 300, 150, None),
                SpawnSpec("Highway Robber", 700, 160, None),
            ],
        ),
        build_zone(
            3,
            "Whispering Woods",
            "Ancient woods filled with magical creatures and hidden secrets.",
            ZoneType::Magical,
            (8, 15),
            &[2, 5],
            100,
            None,
            &[
                SpawnSpec("Forest Spider", 250, 100, None),
                SpawnSpec("Wild Boar", 500, 140, None),
            ],
        ),
        build_zone(
            4,
            "Dark Forest",
            "A corrupted woodland where shadows move and evil dwells.",
            ZoneType::Dangerous,
            (12, 20),
            &[2, 6],
            150,
            Some(ZoneRequirement::QuestCompleted("the-merchant-problem")),
            &[
                SpawnSpec("Corrupted Wolf", 200, 180, None),
                SpawnSpec("Dark Sprite", 450, 160, None),
                SpawnSpec("Corrupted Treant", 650, 220, Some(BOSS_RESPAWN_CHANCE)),
            ],
        ),
        build_zone(
            5,
            "Crystal Caverns",
            "Glittering caves filled with precious gems and dangerous creatures.",
            ZoneType::Dungeon,
            (15, 22),
            &[3, 7],
            200,
            None,
            &[
                SpawnSpec("Crystal Spider", 200, 200, None),
                SpawnSpec("Cave Troll", 500, 350, None),
            ],
        ),
        build_zone(
            6,
            "Shadowlands",
            "A realm between worlds where reality bends and nightmares roam.",
            ZoneType::Dangerous,
            (18, 25),
            &[4, 8],
            250,
            Some(ZoneRequirement::MinLevel(18)),
            &[
                SpawnSpec("Shadow Wraith", 300, 250, None),
                SpawnSpec("Nightmare Beast", 600, 280, None),
            ],
        ),
        build_zone(
            7,
            "Orc Stronghold",
            "A fortified orcish settlement built into the mountainside.",
            ZoneType::Hostile,
            (20, 28),
            &[5, 9],
            300,
            None,
            &[
                SpawnSpec("Orc Warrior", 300, 300, None),
                SpawnSpec("Orc Chieftain", 700, 500, Some(BOSS_RESPAWN_CHANCE)),
            ],
        ),
        build_zone(
            8,
            "Dragon's Peak",
            "The highest mountain peak, lair of the ancient dragon.",
            ZoneType::Boss,
            (25, 35),
            &[6, 9],
            500,
            Some(ZoneRequirement::QuestUnlocked("dragon-awakening")),
            &[
                SpawnSpec("Dragon Whelp", 200, 400, None),
                SpawnSpec("Ancient Dragon", 600, 1000, Some(BOSS_RESPAWN_CHANCE)),
            ],
        ),
        build_zone(
            9,
            "The Forgotten Realm",
            "A mysterious dimension beyond mortal understanding.",
            ZoneType::Special,
            (30, 50),
            &[7, 8],
            1000,
            Some(ZoneRequirement::HasItem("ancient-key")),
            &[
                SpawnSpec("Cosmic Horror", 300, 600, None),
                SpawnSpec("Ancient Guardian", 600, 700, None),
            ],
        ),
    ]
}

/// Gets a zone by its id.
pub fn get_zone(zone_id: u32) -> Option<Zone> {
    get_all_zones().into_iter().find(|z| z.id == zone_id)
}
