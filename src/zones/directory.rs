//! Read-only zone lookups and entry gating.

use crate::combat::types::EnemyTemplate;
use crate::core::constants::FAST_TRAVEL_COST_PER_ZONE;
use crate::items::inventory::Inventory;
use crate::quests::tracker::{QuestState, QuestTracker};
use crate::zones::data::{get_all_zones, get_zone, Zone, ZoneRequirement};
use thiserror::Error;

/// Why zone entry was denied; the message is shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryDenied {
    #[error("there is no such place")]
    UnknownZone,
    #[error("an otherworldly barrier blocks your path. You need to be level {required}")]
    LevelTooLow { required: u32 },
    #[error("the path ahead is too dangerous until `{quest}` is finished")]
    QuestNotCompleted { quest: &'static str },
    #[error("the way is sealed until `{quest}` calls you")]
    QuestNotUnlocked { quest: &'static str },
    #[error("this realm is sealed. You need the {item} to enter")]
    MissingItem { item: &'static str },
}

/// What `can_enter` needs to know about the player.
#[derive(Clone, Copy)]
pub struct EntryContext<'a> {
    pub level: u32,
    pub quests: &'a QuestTracker,
    pub inventory: &'a Inventory,
}

/// Static world lookup consulted by the combat engine (enemy rosters,
/// level context) and the controller (travel, discovery).
#[derive(Debug, Default)]
pub struct ZoneDirectory;

impl ZoneDirectory {
    pub fn new() -> Self {
        Self
    }

    pub fn get_zone(&self, zone_id: u32) -> Option<Zone> {
        get_zone(zone_id)
    }

    pub fn zone_count(&self) -> u32 {
        get_all_zones().len() as u32
    }

    /// The enemy roster of a zone; empty for unknown zones.
    pub fn enemy_roster(&self, zone_id: u32) -> Vec<EnemyTemplate> {
        get_zone(zone_id).map(|z| z.enemies).unwrap_or_default()
    }

    /// Evaluates the zone's entry requirement. `Ok(())` means the player
    /// may enter; the error carries the reason for the warning message.
    pub fn can_enter(&self, zone_id: u32, ctx: EntryContext) -> Result<(), EntryDenied> {
        let zone = get_zone(zone_id).ok_or(EntryDenied::UnknownZone)?;
        let Some(requirement) = zone.requirement else {
            return Ok(());
        };
        match requirement {
            ZoneRequirement::MinLevel(required) => {
                if ctx.level < required {
                    return Err(EntryDenied::LevelTooLow { required });
                }
            }
            ZoneRequirement::QuestCompleted(quest) => {
                if ctx.quests.state(quest) != Some(QuestState::Completed) {
                    return Err(EntryDenied::QuestNotCompleted { quest });
                }
            }
            ZoneRequirement::QuestUnlocked(quest) => {
                let state = ctx.quests.state(quest);
                if state != Some(QuestState::Available) && state != Some(QuestState::Active) {
                    return Err(EntryDenied::QuestNotUnlocked { quest });
                }
            }
            ZoneRequirement::HasItem(item) => {
                if !ctx.inventory.has(item) {
                    return Err(EntryDenied::MissingItem { item });
                }
            }
        }
        Ok(())
    }

    /// Gold cost to fast travel between two zones. Adjacent zones are
    /// free; otherwise 10 gold per zone of distance.
    pub fn fast_travel_cost(&self, from: u32, to: u32) -> u64 {
        let Some(origin) = get_zone(from) else {
            return 0;
        };
        if origin.connections.contains(&to) {
            return 0;
        }
        (from.abs_diff(to) as u64) * FAST_TRAVEL_COST_PER_ZONE
    }
}
