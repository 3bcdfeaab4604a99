//! Static quest catalog: the story chain and side quests.

/// What an objective measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveKind {
    Kill,
    Collect,
    Talk,
    Location,
    Interact,
}

/// One measurable sub-goal of a quest.
#[derive(Debug, Clone, Copy)]
pub struct ObjectiveDef {
    pub id: &'static str,
    pub kind: ObjectiveKind,
    pub target: &'static str,
    pub required_count: u32,
}

/// Rewards granted exactly once, on quest completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestRewards {
    pub xp: u64,
    pub gold: u64,
    pub item: Option<&'static str>,
}

/// Static definition of one quest.
#[derive(Debug, Clone, Copy)]
pub struct QuestDef {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub giver: &'static str,
    pub zone: u32,
    pub objectives: &'static [ObjectiveDef],
    pub rewards: QuestRewards,
    /// Quest made available when this one completes.
    pub next_quest: Option<&'static str>,
    pub level_requirement: Option<u32>,
    /// Story quests cannot be abandoned.
    pub is_story_quest: bool,
    pub repeatable: bool,
}

/// Every quest in the game. The tutorial chain runs Aldenhaven's main
/// story; the rest are side work picked up from NPCs along the way.
pub const QUEST_CATALOG: &[QuestDef] = &[
    QuestDef {
        id: "welcome-to-town",
        title: "Welcome to Aldenhaven",
        description: "Talk to Elder Marcus to learn about the village.",
        giver: "Elder Marcus",
        zone: 0,
        objectives: &[ObjectiveDef {
            id: "talk-marcus",
            kind: ObjectiveKind::Talk,
            target: "Elder Marcus",
            required_count: 1,
        }],
        rewards: QuestRewards {
            xp: 50,
            gold: 10,
            item: None,
        },
        next_quest: Some("first-steps"),
        level_requirement: None,
        is_story_quest: true,
        repeatable: false,
    },
    QuestDef {
        id: "first-steps",
        title: "First Steps",
        description: "Kill 3 wolves to prove your combat skills.",
        giver: "Elder Marcus",
        zone: 1,
        objectives: &[ObjectiveDef {
            id: "kill-wolves",
            kind: ObjectiveKind::Kill,
            target: "Wolf",
            required_count: 3,
        }],
        rewards: QuestRewards {
            xp: 100,
            gold: 25,
            item: Some("leather-boots"),
        },
        next_quest: Some("the-merchant-problem"),
        level_requirement: None,
        is_story_quest: true,
        repeatable: false,
    },
    QuestDef {
        id: "the-merchant-problem",
        title: "The Merchant Problem",
        description: "Investigate the bandit attacks on trade routes.",
        giver: "Merchant Gareth",
        zone: 2,
        objectives: &[
            ObjectiveDef {
                id: "find-clues",
                kind: ObjectiveKind::Interact,
                target: "Bandit Camp",
                required_count: 1,
            },
            ObjectiveDef {
                id: "kill-bandits",
                kind: ObjectiveKind::Kill,
                target: "Bandit",
                required_count: 5,
            },
        ],
        rewards: QuestRewards {
            xp: 200,
            gold: 75,
            item: Some("iron-sword"),
        },
        next_quest: Some("the-dark-forest"),
        level_requirement: None,
        is_story_quest: true,
        repeatable: false,
    },
    QuestDef {
        id: "the-dark-forest",
        title: "Into the Dark Forest",
        description: "Explore the Dark Forest and find the source of corruption.",
        giver: "Sage Elara",
        zone: 4,
        objectives: &[
            ObjectiveDef {
                id: "reach-center",
                kind: ObjectiveKind::Location,
                target: "Forest Heart",
                required_count: 1,
            },
            ObjectiveDef {
                id: "defeat-corruption",
                kind: ObjectiveKind::Kill,
                target: "Corrupted Treant",
                required_count: 1,
            },
        ],
        rewards: QuestRewards {
            xp: 500,
            gold: 150,
            item: Some("nature-staff"),
        },
        next_quest: Some("dragon-awakening"),
        level_requirement: None,
        is_story_quest: true,
        repeatable: false,
    },
    QuestDef {
        id: "dragon-awakening",
        title: "The Dragon Awakens",
        description: "Face the ancient dragon that threatens the realm.",
        giver: "King Aldric",
        zone: 8,
        objectives: &[ObjectiveDef {
            id: "defeat-dragon",
            kind: ObjectiveKind::Kill,
            target: "Ancient Dragon",
            required_count: 1,
        }],
        rewards: QuestRewards {
            xp: 1000,
            gold: 500,
            item: Some("dragon-slayer-blade"),
        },
        next_quest: None,
        level_requirement: None,
        is_story_quest: true,
        repeatable: false,
    },
    // Side quests
    QuestDef {
        id: "herb-gathering",
        title: "Herb Gathering",
        description: "Collect healing herbs for the village healer.",
        giver: "Healer Maya",
        zone: 3,
        objectives: &[ObjectiveDef {
            id: "collect-herbs",
            kind: ObjectiveKind::Collect,
            target: "Healing Herb",
            required_count: 10,
        }],
        rewards: QuestRewards {
            xp: 75,
            gold: 30,
            item: Some("health-potion"),
        },
        next_quest: None,
        level_requirement: None,
        is_story_quest: false,
        repeatable: true,
    },
    QuestDef {
        id: "lost-artifact",
        title: "The Lost Artifact",
        description: "Find the ancient artifact hidden in the Crystal Caverns.",
        giver: "Scholar Theron",
        zone: 5,
        objectives: &[ObjectiveDef {
            id: "find-artifact",
            kind: ObjectiveKind::Collect,
            target: "Ancient Artifact",
            required_count: 1,
        }],
        rewards: QuestRewards {
            xp: 300,
            gold: 100,
            item: Some("mystic-amulet"),
        },
        next_quest: None,
        level_requirement: Some(15),
        is_story_quest: false,
        repeatable: false,
    },
    QuestDef {
        id: "bounty-hunter",
        title: "Bounty: Orc Chieftain",
        description: "Eliminate the Orc Chieftain terrorizing travelers.",
        giver: "Captain Rhodes",
        zone: 7,
        objectives: &[ObjectiveDef {
            id: "kill-chieftain",
            kind: ObjectiveKind::Kill,
            target: "Orc Chieftain",
            required_count: 1,
        }],
        rewards: QuestRewards {
            xp: 400,
            gold: 200,
            item: Some("bounty-hunter-cloak"),
        },
        next_quest: None,
        level_requirement: Some(20),
        is_story_quest: false,
        repeatable: false,
    },
];

/// Looks up a quest definition by id.
pub fn get_quest(id: &str) -> Option<&'static QuestDef> {
    QUEST_CATALOG.iter().find(|q| q.id == id)
}

/// Quest ids made available at the start of a new game.
pub const INITIAL_AVAILABLE_QUESTS: &[&str] = &["welcome-to-town", "herb-gathering", "lost-artifact", "bounty-hunter"];
