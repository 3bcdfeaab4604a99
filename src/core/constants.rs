// Tick and timing
pub const FIXED_TIMESTEP_SECONDS: f64 = 1.0 / 60.0;
pub const MAX_FRAME_SECONDS: f64 = 0.1;
pub const RETALIATION_DELAY_SECONDS: f64 = 0.6;
pub const REGEN_INTERVAL_SECONDS: f64 = 1.0;

// Passive regeneration: 2% of max HP per interval, outside battle only
pub const REGEN_FRACTION: f64 = 0.02;

// XP and leveling
pub const STARTING_XP_TO_NEXT: u64 = 100;
pub const XP_GROWTH_FACTOR: f64 = 1.15;
pub const MAX_LEVEL: u32 = 110;
pub const TALENT_POINT_LEVEL_INTERVAL: u32 = 2;

// Per-level stat growth
pub const LEVEL_MAX_HP_GAIN: u32 = 20;
pub const LEVEL_MAX_MP_GAIN: u32 = 5;
pub const LEVEL_ATTACK_GAIN: u32 = 3;
pub const LEVEL_DEFENSE_GAIN: u32 = 2;

// Starting character stats
pub const BASE_MAX_HP: u32 = 200;
pub const BASE_MAX_MP: u32 = 50;
pub const BASE_ATTACK: u32 = 20;
pub const BASE_DEFENSE: u32 = 10;
pub const BASE_CRIT_CHANCE: f64 = 0.10;
pub const BASE_CRIT_MULTIPLIER: f64 = 1.5;
pub const STARTING_GOLD: u64 = 10;

// Enemy stat derivation from base HP
pub const ENEMY_ATTACK_HP_DIVISOR: u32 = 20;
pub const ENEMY_ATTACK_FLAT: u32 = 10;
pub const ENEMY_DEFENSE_HP_DIVISOR: u32 = 40;
pub const ENEMY_DEFENSE_FLAT: u32 = 5;
pub const ENEMY_XP_HP_DIVISOR: u32 = 4;
pub const ENEMY_GOLD_HP_DIVISOR: u32 = 10;
pub const ENEMY_GOLD_FLAT: u32 = 5;

// Zone-level scaling applied to enemy templates on battle start
pub const ZONE_LEVEL_SCALING_STEP: f64 = 0.1;

// Enemy retaliation variance
pub const ENEMY_DAMAGE_VARIANCE_MIN: f64 = 0.8;
pub const ENEMY_DAMAGE_VARIANCE_MAX: f64 = 1.2;

// Defeat penalty
pub const DEFEAT_HP_FRACTION: f64 = 0.5;
pub const STARTING_ZONE_ID: u32 = 0;
pub const RESPAWN_POSITION_X: f64 = 100.0;

// Enemy respawn on zone re-entry
pub const DEFAULT_RESPAWN_CHANCE: f64 = 0.5;
pub const BOSS_RESPAWN_CHANCE: f64 = 0.01;

// Movement and interaction
pub const MOVE_SPEED: f64 = 480.0;
pub const AREA_WIDTH: f64 = 950.0;
pub const SPRITE_WIDTH: f64 = 165.0;
pub const INTERACT_RANGE: f64 = 80.0;
pub const RANDOM_ENCOUNTER_CHANCE: f64 = 0.005;

// Inventory and economy
pub const INVENTORY_SLOTS: usize = 24;
pub const SELL_VALUE_DIVISOR: u64 = 2;
pub const FAST_TRAVEL_COST_PER_ZONE: u64 = 10;

// Presentation queues
pub const NOTIFICATION_CAPACITY: usize = 16;

// Save file
pub const SAVE_VERSION: u32 = 1;
pub const SAVE_MAGIC: u64 = 0x414C_4448_4156_4E01; // "ALDHAVN" + version tag
