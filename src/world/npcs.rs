//! World NPC roster: villagers, quest givers and merchants, placed per
//! zone alongside the enemy spawns from `zones::data`.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One line of stock per merchant.
#[derive(Debug, Clone, Copy)]
pub struct ShopEntry {
    pub item_id: &'static str,
    pub price: u64,
    pub stock: u32,
}

/// What kind of NPC this is. Enemies live in the zone rosters instead;
/// everything here can be talked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NpcKind {
    Friendly,
    QuestGiver,
    Merchant,
}

/// Static definition of one friendly NPC.
#[derive(Debug, Clone, Copy)]
pub struct NpcDef {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: NpcKind,
    pub zone: u32,
    pub x: f64,
    pub greeting: &'static [&'static str],
    pub shop: &'static [ShopEntry],
}

impl NpcDef {
    /// A random greeting line.
    pub fn random_greeting(&self, rng: &mut impl Rng) -> &'static str {
        if self.greeting.is_empty() {
            return "Hello there!";
        }
        self.greeting[rng.gen_range(0..self.greeting.len())]
    }

    pub fn sells(&self) -> bool {
        !self.shop.is_empty()
    }
}

/// Everyone who will talk to the player.
pub const NPC_CATALOG: &[NpcDef] = &[
    // Zone 0 - Aldenhaven Village
    NpcDef {
        id: "elder-marcus",
        name: "Elder Marcus",
        kind: NpcKind::QuestGiver,
        zone: 0,
        x: 300.0,
        greeting: &[
            "Welcome to Aldenhaven, young traveler!",
            "Our village has been peaceful for generations.",
            "But lately, strange things have been happening...",
        ],
        shop: &[],
    },
    NpcDef {
        id: "healer-maya",
        name: "Healer Maya",
        kind: NpcKind::Merchant,
        zone: 0,
        x: 500.0,
        greeting: &[
            "Blessings upon you, child.",
            "Nature provides all the medicine we need.",
            "The herbs in Whispering Woods are especially potent.",
        ],
        shop: &[
            ShopEntry {
                item_id: "health-potion",
                price: 25,
                stock: 20,
            },
            ShopEntry {
                item_id: "mana-potion",
                price: 30,
                stock: 15,
            },
        ],
    },
    NpcDef {
        id: "blacksmith-thorin",
        name: "Blacksmith Thorin",
        kind: NpcKind::Merchant,
        zone: 0,
        x: 600.0,
        greeting: &[
            "Welcome to my forge!",
            "I craft the finest weapons and armor in the land.",
            "Good steel requires patience and skill.",
        ],
        shop: &[
            ShopEntry {
                item_id: "iron-sword",
                price: 100,
                stock: 5,
            },
            ShopEntry {
                item_id: "steel-armor",
                price: 200,
                stock: 3,
            },
            ShopEntry {
                item_id: "leather-armor",
                price: 30,
                stock: 8,
            },
        ],
    },
    NpcDef {
        id: "king-aldric",
        name: "King Aldric",
        kind: NpcKind::QuestGiver,
        zone: 0,
        x: 800.0,
        greeting: &[
            "The realm needs heroes now more than ever.",
            "The mountain trembles. The dragon stirs.",
        ],
        shop: &[],
    },
    // Zone 1 - Greenwood Plains
    NpcDef {
        id: "farmer-bran",
        name: "Farmer Bran",
        kind: NpcKind::Friendly,
        zone: 1,
        x: 200.0,
        greeting: &[
            "Oh my! Another traveler!",
            "These wolves have been terrible for my livestock.",
            "The road to the crossroads can be dangerous.",
        ],
        shop: &[],
    },
    // Zone 2 - Merchant's Crossroads
    NpcDef {
        id: "merchant-gareth",
        name: "Merchant Gareth",
        kind: NpcKind::QuestGiver,
        zone: 2,
        x: 400.0,
        greeting: &[
            "Greetings, traveler! Care to see my wares?",
            "I have goods from across the realm!",
            "Business has been... challenging lately.",
        ],
        shop: &[
            ShopEntry {
                item_id: "health-potion",
                price: 28,
                stock: 10,
            },
            ShopEntry {
                item_id: "rusty-sword",
                price: 12,
                stock: 3,
            },
        ],
    },
    NpcDef {
        id: "tavern-keeper-mira",
        name: "Tavern Keeper Mira",
        kind: NpcKind::Friendly,
        zone: 2,
        x: 600.0,
        greeting: &[
            "Welcome to the Crossroads Tavern!",
            "What'll it be? Ale or information?",
            "They say there's treasure in the Crystal Caverns.",
            "I wouldn't go to the Shadowlands without protection.",
        ],
        shop: &[],
    },
    // Zone 3 - Whispering Woods
    NpcDef {
        id: "sage-elara",
        name: "Sage Elara",
        kind: NpcKind::QuestGiver,
        zone: 3,
        x: 350.0,
        greeting: &[
            "The forest spirits whisper of your coming.",
            "You carry the scent of destiny, young one.",
            "The balance of nature is in peril.",
        ],
        shop: &[],
    },
    // Zone 5 - Crystal Caverns
    NpcDef {
        id: "scholar-theron",
        name: "Scholar Theron",
        kind: NpcKind::QuestGiver,
        zone: 5,
        x: 300.0,
        greeting: &[
            "Fascinating! Another explorer of the depths!",
            "These crystal formations are truly remarkable.",
            "I'm researching the ancient civilizations.",
        ],
        shop: &[],
    },
    // Zone 7 - Orc Stronghold
    NpcDef {
        id: "captain-rhodes",
        name: "Captain Rhodes",
        kind: NpcKind::QuestGiver,
        zone: 7,
        x: 150.0,
        greeting: &[
            "Soldier! What brings you to this war zone?",
            "The orcs have been more aggressive lately.",
            "We need all the help we can get!",
        ],
        shop: &[],
    },
];

/// Looks up an NPC by id.
pub fn get_npc(id: &str) -> Option<&'static NpcDef> {
    NPC_CATALOG.iter().find(|n| n.id == id)
}

/// All friendly NPCs placed in a zone.
pub fn npcs_in_zone(zone_id: u32) -> Vec<&'static NpcDef> {
    NPC_CATALOG.iter().filter(|n| n.zone == zone_id).collect()
}

/// Mutable merchant stock, tracked per save so shelves actually empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopStock {
    /// (npc id, item id) -> remaining stock; absent means untouched.
    sold: std::collections::BTreeMap<String, u32>,
}

impl ShopStock {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(npc_id: &str, item_id: &str) -> String {
        format!("{npc_id}/{item_id}")
    }

    /// Remaining stock of an item at a merchant.
    pub fn remaining(&self, npc: &NpcDef, item_id: &str) -> u32 {
        let initial = npc
            .shop
            .iter()
            .find(|e| e.item_id == item_id)
            .map(|e| e.stock)
            .unwrap_or(0);
        self.sold
            .get(&Self::key(npc.id, item_id))
            .copied()
            .unwrap_or(initial)
    }

    /// Records one unit sold. Returns false if out of stock.
    pub fn take_one(&mut self, npc: &NpcDef, item_id: &str) -> bool {
        let remaining = self.remaining(npc, item_id);
        if remaining == 0 {
            return false;
        }
        self.sold.insert(Self::key(npc.id, item_id), remaining - 1);
        true
    }
}
