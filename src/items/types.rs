//! Static item catalog.

/// Which equipment slot an item occupies, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipSlot {
    Weapon,
    Armor,
    Accessory,
}

/// What an item is and what it does when equipped or used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemKind {
    Weapon { attack: u32, crit_chance: f64 },
    Armor { defense: u32, max_hp: u32 },
    Accessory { crit_chance: f64 },
    Consumable { heal: u32, mana: u32 },
    Material,
    QuestItem,
}

impl ItemKind {
    pub fn slot(&self) -> Option<EquipSlot> {
        match self {
            ItemKind::Weapon { .. } => Some(EquipSlot::Weapon),
            ItemKind::Armor { .. } => Some(EquipSlot::Armor),
            ItemKind::Accessory { .. } => Some(EquipSlot::Accessory),
            _ => None,
        }
    }
}

/// Static definition of one item.
#[derive(Debug, Clone, Copy)]
pub struct ItemDef {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ItemKind,
    pub value: u64,
    /// 1 for unstackable items.
    pub max_stack: u32,
    pub description: &'static str,
}

impl ItemDef {
    pub fn stackable(&self) -> bool {
        self.max_stack > 1
    }
}

/// Every item in the game.
pub const ITEM_CATALOG: &[ItemDef] = &[
    // Weapons
    ItemDef {
        id: "rusty-sword",
        name: "Rusty Sword",
        kind: ItemKind::Weapon { attack: 5, crit_chance: 0.0 },
        value: 10,
        max_stack: 1,
        description: "A worn blade that has seen better days.",
    },
    ItemDef {
        id: "iron-sword",
        name: "Iron Sword",
        kind: ItemKind::Weapon { attack: 10, crit_chance: 0.02 },
        value: 50,
        max_stack: 1,
        description: "A sturdy iron blade.",
    },
    ItemDef {
        id: "enchanted-blade",
        name: "Enchanted Blade",
        kind: ItemKind::Weapon { attack: 20, crit_chance: 0.05 },
        value: 200,
        max_stack: 1,
        description: "A blade humming with magical energy.",
    },
    ItemDef {
        id: "nature-staff",
        name: "Nature Staff",
        kind: ItemKind::Weapon { attack: 15, crit_chance: 0.03 },
        value: 150,
        max_stack: 1,
        description: "A living branch that bends to its wielder's will.",
    },
    ItemDef {
        id: "dragon-slayer-blade",
        name: "Dragon Slayer Blade",
        kind: ItemKind::Weapon { attack: 40, crit_chance: 0.08 },
        value: 1000,
        max_stack: 1,
        description: "Forged for one purpose, and that purpose is done.",
    },
    // Armor
    ItemDef {
        id: "leather-armor",
        name: "Leather Armor",
        kind: ItemKind::Armor { defense: 5, max_hp: 0 },
        value: 15,
        max_stack: 1,
        description: "Basic leather protection.",
    },
    ItemDef {
        id: "leather-boots",
        name: "Leather Boots",
        kind: ItemKind::Armor { defense: 2, max_hp: 0 },
        value: 8,
        max_stack: 1,
        description: "Sturdy boots for long roads.",
    },
    ItemDef {
        id: "chainmail",
        name: "Chainmail",
        kind: ItemKind::Armor { defense: 10, max_hp: 20 },
        value: 75,
        max_stack: 1,
        description: "Interlocking metal rings provide solid defense.",
    },
    ItemDef {
        id: "steel-armor",
        name: "Steel Armor",
        kind: ItemKind::Armor { defense: 15, max_hp: 30 },
        value: 200,
        max_stack: 1,
        description: "Heavy plate from Thorin's forge.",
    },
    ItemDef {
        id: "bounty-hunter-cloak",
        name: "Bounty Hunter Cloak",
        kind: ItemKind::Armor { defense: 8, max_hp: 40 },
        value: 250,
        max_stack: 1,
        description: "Worn by those who collect what others owe.",
    },
    // Accessories
    ItemDef {
        id: "mystic-amulet",
        name: "Mystic Amulet",
        kind: ItemKind::Accessory { crit_chance: 0.05 },
        value: 300,
        max_stack: 1,
        description: "It hums faintly near old magic.",
    },
    // Consumables
    ItemDef {
        id: "health-potion",
        name: "Health Potion",
        kind: ItemKind::Consumable { heal: 50, mana: 0 },
        value: 20,
        max_stack: 20,
        description: "Restores 50 health points.",
    },
    ItemDef {
        id: "mana-potion",
        name: "Mana Potion",
        kind: ItemKind::Consumable { heal: 0, mana: 30 },
        value: 25,
        max_stack: 20,
        description: "Restores 30 mana points.",
    },
    // Materials
    ItemDef {
        id: "wolf-pelt",
        name: "Wolf Pelt",
        kind: ItemKind::Material,
        value: 5,
        max_stack: 50,
        description: "A coarse wolf pelt. Used in crafting.",
    },
    ItemDef {
        id: "iron-ore",
        name: "Iron Ore",
        kind: ItemKind::Material,
        value: 3,
        max_stack: 100,
        description: "Raw iron ore. Can be smelted into bars.",
    },
    ItemDef {
        id: "healing-herb",
        name: "Healing Herb",
        kind: ItemKind::Material,
        value: 4,
        max_stack: 50,
        description: "A fragrant herb prized by healers.",
    },
    ItemDef {
        id: "dragon-scale",
        name: "Dragon Scale",
        kind: ItemKind::Material,
        value: 500,
        max_stack: 10,
        description: "A scale from an ancient dragon. Extremely rare.",
    },
    // Quest items
    ItemDef {
        id: "ancient-key",
        name: "Ancient Key",
        kind: ItemKind::QuestItem,
        value: 0,
        max_stack: 1,
        description: "An ornate key that radiates ancient power.",
    },
    ItemDef {
        id: "ancient-artifact",
        name: "Ancient Artifact",
        kind: ItemKind::QuestItem,
        value: 0,
        max_stack: 1,
        description: "Knowledge from a civilization long gone.",
    },
];

/// Looks up an item definition by id.
pub fn get_item(id: &str) -> Option<&'static ItemDef> {
    ITEM_CATALOG.iter().find(|i| i.id == id)
}
