//! The game controller: thin composition root over the progression
//! model, combat engine, quest tracker and zone directory.
//!
//! Every driver operation mutates core state and returns the events it
//! produced. Player-facing messages derived from those events accumulate
//! in a bounded notification queue that the presentation layer drains.

use crate::character::progression::{Character, GoldError};
use crate::character::talents::TalentError;
use crate::combat::engine::{BattleError, CombatEngine, CombatEvent};
use crate::combat::types::{BattlePhase, EnemyTemplate};
use crate::core::constants::*;
use crate::core::events::{DialogueEvent, GameEvent, Notification};
use crate::core::game_state::GameState;
use crate::items::inventory::InventoryError;
use crate::items::types::{get_item, ItemKind};
use crate::quests::data::get_quest;
use crate::quests::tracker::{QuestError, QuestEvent, QuestLogEntry, QuestTracker};
use crate::world::npcs::{get_npc, npcs_in_zone};
use crate::zones::directory::{EntryContext, EntryDenied, ZoneDirectory};
use rand::Rng;
use std::collections::VecDeque;
use thiserror::Error;

/// Horizontal movement input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TravelError {
    #[error("cannot travel during combat")]
    InBattle,
    #[error("you haven't discovered that place yet")]
    Undiscovered,
    #[error(transparent)]
    Denied(#[from] EntryDenied),
    #[error(transparent)]
    Gold(#[from] GoldError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("there is no such merchant")]
    UnknownMerchant,
    #[error("{0} does not sell that")]
    NotSold(String),
    #[error("that item is out of stock")]
    OutOfStock,
    #[error(transparent)]
    Gold(#[from] GoldError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

/// Read-only HUD snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudSnapshot {
    pub name: String,
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub mp: u32,
    pub max_mp: u32,
    pub experience: u64,
    pub experience_to_next: u64,
    pub gold: u64,
    pub talent_points: u32,
}

/// Read-only view of the active battle.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleSnapshot {
    pub enemy_name: String,
    pub enemy_hp: u32,
    pub enemy_max_hp: u32,
    pub phase: BattlePhase,
    pub player_hp: u32,
    pub player_max_hp: u32,
}

/// Debug overlay data.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugInfo {
    pub fps: u32,
    pub zone_id: u32,
    pub zone_name: String,
    pub player_x: f64,
    pub player_level: u32,
    pub game_time_seconds: u64,
    pub talent_points: u32,
    pub build_commit: &'static str,
}

pub struct GameController {
    state: GameState,
    engine: CombatEngine,
    quests: QuestTracker,
    zones: ZoneDirectory,
    notifications: VecDeque<Notification>,
}

impl GameController {
    pub fn new(player_name: impl Into<String>) -> Self {
        Self::from_parts(GameState::new(player_name), QuestTracker::new())
    }

    pub(crate) fn from_parts(state: GameState, quests: QuestTracker) -> Self {
        Self {
            state,
            engine: CombatEngine::new(),
            quests,
            zones: ZoneDirectory::new(),
            notifications: VecDeque::with_capacity(NOTIFICATION_CAPACITY),
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn character(&self) -> &Character {
        &self.state.character
    }

    pub fn quests(&self) -> &QuestTracker {
        &self.quests
    }

    pub fn zones(&self) -> &ZoneDirectory {
        &self.zones
    }

    pub fn in_battle(&self) -> bool {
        self.engine.in_battle()
    }

    pub fn paused(&self) -> bool {
        self.state.paused
    }

    /// Drains queued player-facing notifications, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    pub fn hud(&self) -> HudSnapshot {
        let c = &self.state.character;
        HudSnapshot {
            name: c.name.clone(),
            level: c.level,
            hp: c.hp,
            max_hp: c.max_hp(),
            mp: c.mp,
            max_mp: c.max_mp(),
            experience: c.experience,
            experience_to_next: c.experience_to_next,
            gold: c.gold,
            talent_points: c.talent_points,
        }
    }

    pub fn battle(&self) -> Option<BattleSnapshot> {
        let session = self.engine.session()?;
        Some(BattleSnapshot {
            enemy_name: session.enemy.name.clone(),
            enemy_hp: session.enemy.hp,
            enemy_max_hp: session.enemy.max_hp,
            phase: session.phase,
            player_hp: self.state.character.hp,
            player_max_hp: self.state.character.max_hp(),
        })
    }

    pub fn quest_log(&self) -> Vec<QuestLogEntry> {
        self.quests.quest_log()
    }

    pub fn debug_info(&self, fps: u32) -> DebugInfo {
        DebugInfo {
            fps,
            zone_id: self.state.current_zone,
            zone_name: self
                .zones
                .get_zone(self.state.current_zone)
                .map(|z| z.name.to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            player_x: self.state.player_x,
            player_level: self.state.character.level,
            game_time_seconds: self.state.game_time as u64,
            talent_points: self.state.character.talent_points,
            build_commit: crate::build_info::BUILD_COMMIT,
        }
    }

    // ── Tick ────────────────────────────────────────────────────────

    /// Advances one logic step: play time, pending battle continuations,
    /// passive regeneration. No-op while paused.
    pub fn update(&mut self, delta_seconds: f64, rng: &mut impl Rng) -> Vec<GameEvent> {
        if self.state.paused {
            return Vec::new();
        }
        self.state.game_time += delta_seconds;

        let mut events = Vec::new();
        let combat = self
            .engine
            .update(delta_seconds, &mut self.state.character, rng);
        for event in combat {
            self.apply_combat_event(&event, &mut events);
        }

        // Passive regeneration runs only outside battle.
        if self.engine.in_battle() {
            self.state.regen_timer = 0.0;
        } else {
            self.state.regen_timer += delta_seconds;
            while self.state.regen_timer >= REGEN_INTERVAL_SECONDS {
                self.state.regen_timer -= REGEN_INTERVAL_SECONDS;
                let max = self.state.character.max_hp();
                if self.state.character.hp < max {
                    let amount = ((max as f64) * REGEN_FRACTION).ceil() as u32;
                    let healed = self.state.character.heal(amount);
                    if healed > 0 {
                        events.push(GameEvent::Regenerated { amount: healed });
                    }
                }
            }
        }
        events
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.state.paused = !self.state.paused;
        self.push(if self.state.paused {
            Notification::info("Game paused")
        } else {
            Notification::info("Game resumed")
        });
        self.state.paused
    }

    // ── Movement and travel ─────────────────────────────────────────

    /// Moves the player horizontally. Crossing a zone edge attempts the
    /// adjacent zone; a denied transition pins the player at the edge.
    /// Dangerous zones roll a random ambush while moving.
    pub fn move_player(
        &mut self,
        direction: Direction,
        delta_seconds: f64,
        rng: &mut impl Rng,
    ) -> Vec<GameEvent> {
        if self.engine.in_battle() || self.state.paused {
            return Vec::new();
        }

        let dx = match direction {
            Direction::Left => -MOVE_SPEED * delta_seconds,
            Direction::Right => MOVE_SPEED * delta_seconds,
        };
        let mut events = Vec::new();
        let new_x = self.state.player_x + dx;

        if new_x < 0.0 {
            if self.state.current_zone > 0 {
                let target = self.state.current_zone - 1;
                match self.change_zone(target, rng) {
                    Ok(mut zone_events) => {
                        events.append(&mut zone_events);
                        self.state.player_x = AREA_WIDTH - SPRITE_WIDTH;
                    }
                    Err(_) => self.state.player_x = 0.0,
                }
            } else {
                self.state.player_x = 0.0;
            }
        } else if new_x + SPRITE_WIDTH > AREA_WIDTH {
            let last_zone = self.zones.zone_count() - 1;
            if self.state.current_zone < last_zone {
                let target = self.state.current_zone + 1;
                match self.change_zone(target, rng) {
                    Ok(mut zone_events) => {
                        events.append(&mut zone_events);
                        self.state.player_x = 0.0;
                    }
                    Err(_) => self.state.player_x = AREA_WIDTH - SPRITE_WIDTH,
                }
            } else {
                self.state.player_x = AREA_WIDTH - SPRITE_WIDTH;
            }
        } else {
            self.state.player_x = new_x;
        }

        // Ambush roll while moving through dangerous ground.
        if !self.engine.in_battle() {
            if let Some(zone) = self.zones.get_zone(self.state.current_zone) {
                if zone.zone_type.rolls_random_encounters()
                    && rng.gen::<f64>() < RANDOM_ENCOUNTER_CHANCE
                {
                    let roster = self.living_roster();
                    if !roster.is_empty() {
                        let template = roster[rng.gen_range(0..roster.len())].clone();
                        events.extend(self.begin_battle(&template, true));
                    }
                }
            }
        }
        events
    }

    /// Changes zone directly (adjacent travel). Denied entry queues a
    /// warning and leaves the player where they were.
    pub fn change_zone(
        &mut self,
        zone_id: u32,
        rng: &mut impl Rng,
    ) -> Result<Vec<GameEvent>, EntryDenied> {
        let ctx = EntryContext {
            level: self.state.character.level,
            quests: &self.quests,
            inventory: &self.state.character.inventory,
        };
        if let Err(denied) = self.zones.can_enter(zone_id, ctx) {
            self.push(Notification::warning(denied.to_string()));
            return Err(denied);
        }
        let zone = self.zones.get_zone(zone_id).ok_or(EntryDenied::UnknownZone)?;

        self.state.current_zone = zone_id;
        let mut events = vec![GameEvent::ZoneChanged {
            zone_id,
            name: zone.name.to_string(),
        }];
        self.push(Notification::info(format!("Entered: {}", zone.name)));

        if self.state.discovered_zones.insert(zone_id) {
            self.state.character.add_experience(zone.discovery_xp);
            events.push(GameEvent::ZoneDiscovered {
                zone_id,
                name: zone.name.to_string(),
                xp: zone.discovery_xp,
            });
            self.push(Notification::success(format!(
                "Discovered: {} (+{} XP)",
                zone.name, zone.discovery_xp
            )));
            let quest_events = self
                .quests
                .on_location_reached(zone.name, &mut self.state.character);
            self.ingest_quest_events(quest_events, &mut events);
        }

        // Defeated spawns roll their comeback on each re-entry.
        for template in &zone.enemies {
            if self.state.defeated_spawns.contains(&template.spawn_id)
                && rng.gen::<f64>() < template.respawn_chance
            {
                self.state.defeated_spawns.remove(&template.spawn_id);
                events.push(GameEvent::EnemyRespawned {
                    spawn_id: template.spawn_id.clone(),
                });
            }
        }
        log::debug!("zone change -> {} ({})", zone_id, zone.name);
        Ok(events)
    }

    /// Fast travel from the map. Free to adjacent zones, otherwise costs
    /// gold by distance; only discovered zones are valid destinations.
    pub fn fast_travel(
        &mut self,
        zone_id: u32,
        rng: &mut impl Rng,
    ) -> Result<Vec<GameEvent>, TravelError> {
        if self.engine.in_battle() {
            self.push(Notification::warning("Cannot fast travel during combat!"));
            return Err(TravelError::InBattle);
        }
        if !self.state.discovered_zones.contains(&zone_id) {
            self.push(Notification::warning(
                "You haven't discovered that place yet.",
            ));
            return Err(TravelError::Undiscovered);
        }

        // Gate before gold: a denied destination must not charge the fare.
        let ctx = EntryContext {
            level: self.state.character.level,
            quests: &self.quests,
            inventory: &self.state.character.inventory,
        };
        if let Err(denied) = self.zones.can_enter(zone_id, ctx) {
            self.push(Notification::warning(denied.to_string()));
            return Err(denied.into());
        }

        let cost = self.zones.fast_travel_cost(self.state.current_zone, zone_id);
        if cost > 0 {
            if let Err(e) = self.state.character.spend_gold(cost) {
                self.push(Notification::warning(format!("Fast travel costs {cost} gold!")));
                return Err(e.into());
            }
            self.push(Notification::info(format!("Fast traveled (-{cost} gold)")));
        }
        let events = self.change_zone(zone_id, rng)?;
        self.state.player_x = RESPAWN_POSITION_X;
        Ok(events)
    }

    // ── Interaction ─────────────────────────────────────────────────

    /// Interacts with the nearest NPC in range: enemies start a battle,
    /// friendly NPCs talk (and progress talk objectives).
    pub fn interact(&mut self, rng: &mut impl Rng) -> Vec<GameEvent> {
        if self.engine.in_battle() || self.state.paused {
            return Vec::new();
        }
        let x = self.state.player_x;

        if let Some(template) = self
            .living_roster()
            .into_iter()
            .filter(|t| (t.x - x).abs() < INTERACT_RANGE)
            .min_by(|a, b| {
                (a.x - x)
                    .abs()
                    .partial_cmp(&(b.x - x).abs())
                    .expect("positions are finite")
            })
        {
            return self.begin_battle(&template, false);
        }

        let npc = npcs_in_zone(self.state.current_zone)
            .into_iter()
            .filter(|n| (n.x - x).abs() < INTERACT_RANGE)
            .min_by(|a, b| {
                (a.x - x)
                    .abs()
                    .partial_cmp(&(b.x - x).abs())
                    .expect("positions are finite")
            });
        let Some(npc) = npc else {
            self.push(Notification::info(
                "No one nearby to interact with. Get closer.",
            ));
            return Vec::new();
        };

        let mut events = Vec::new();
        let quest_events = self
            .quests
            .on_npc_talk(npc.name, &mut self.state.character);
        self.ingest_quest_events(quest_events, &mut events);

        let offered = self
            .quests
            .available_quests_for(npc.name)
            .first()
            .map(|q| q.id.to_string());

        events.push(GameEvent::Dialogue(DialogueEvent {
            npc_name: npc.name.to_string(),
            line: npc.random_greeting(rng).to_string(),
            quest_offered: offered,
            opens_shop: npc.sells(),
        }));
        events
    }

    // ── Battle operations ───────────────────────────────────────────

    /// Starts a battle against a world spawn. Rejected while one is
    /// already running.
    pub fn start_battle(
        &mut self,
        template: &EnemyTemplate,
    ) -> Result<Vec<GameEvent>, BattleError> {
        if self.engine.in_battle() {
            return Err(BattleError::AlreadyInBattle);
        }
        Ok(self.begin_battle(template, false))
    }

    pub fn attack(&mut self, rng: &mut impl Rng) -> Result<Vec<GameEvent>, BattleError> {
        let combat = self.engine.attack(&mut self.state.character, rng)?;
        let mut events = Vec::new();
        for event in combat {
            self.apply_combat_event(&event, &mut events);
        }
        Ok(events)
    }

    pub fn flee(&mut self) -> Result<Vec<GameEvent>, BattleError> {
        let fled = self.engine.flee()?;
        self.push(Notification::warning("You fled from battle!"));
        Ok(vec![GameEvent::Combat(fled)])
    }

    // ── Quest operations ────────────────────────────────────────────

    pub fn accept_quest(&mut self, quest_id: &str) -> Result<(), QuestError> {
        match self
            .quests
            .start_quest(quest_id, self.state.character.level)
        {
            Ok(()) => {
                let title = get_quest(quest_id).map(|q| q.title).unwrap_or(quest_id);
                self.push(Notification::success(format!("Quest Started: {title}")));
                Ok(())
            }
            Err(e) => {
                self.push(Notification::warning(e.to_string()));
                Err(e)
            }
        }
    }

    /// Turns in a quest whose objectives are complete.
    pub fn turn_in_quest(&mut self, quest_id: &str) -> Result<Vec<GameEvent>, QuestError> {
        match self.quests.complete_quest(quest_id, &mut self.state.character) {
            Ok(quest_events) => {
                let mut events = Vec::new();
                self.ingest_quest_events(quest_events, &mut events);
                Ok(events)
            }
            Err(e) => {
                self.push(Notification::warning(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn abandon_quest(&mut self, quest_id: &str) -> Result<(), QuestError> {
        match self.quests.abandon_quest(quest_id) {
            Ok(event) => {
                let title = get_quest(quest_id).map(|q| q.title).unwrap_or(quest_id);
                self.push(Notification::warning(format!("Quest Abandoned: {title}")));
                let mut sink = Vec::new();
                self.ingest_quest_events(vec![event], &mut sink);
                Ok(())
            }
            Err(e) => {
                self.push(Notification::warning(e.to_string()));
                Err(e)
            }
        }
    }

    // ── Character operations ────────────────────────────────────────

    pub fn learn_talent(&mut self, talent_id: &str) -> Result<u32, TalentError> {
        match self.state.character.learn_talent(talent_id) {
            Ok(rank) => {
                let name = crate::character::talents::get_talent(talent_id)
                    .map(|t| t.name)
                    .unwrap_or(talent_id);
                self.push(Notification::success(format!(
                    "{name} improved to rank {rank}!"
                )));
                Ok(rank)
            }
            Err(e) => {
                self.push(Notification::warning(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn equip_item(&mut self, item_id: &str) -> Result<(), InventoryError> {
        match self.state.character.inventory.equip(item_id) {
            Ok(()) => {
                let name = get_item(item_id).map(|i| i.name).unwrap_or(item_id);
                self.push(Notification::success(format!("Equipped {name}")));
                Ok(())
            }
            Err(e) => {
                self.push(Notification::warning(e.to_string()));
                Err(e)
            }
        }
    }

    /// Drinks or applies a consumable from the bag.
    pub fn use_item(&mut self, item_id: &str) -> Result<(), InventoryError> {
        let def = get_item(item_id)
            .ok_or_else(|| InventoryError::UnknownItem(item_id.to_string()))?;
        let ItemKind::Consumable { heal, mana } = def.kind else {
            let err = InventoryError::NotUsable(item_id.to_string());
            self.push(Notification::warning("You can't use that."));
            return Err(err);
        };
        self.state.character.inventory.remove(item_id, 1)?;
        let healed = self.state.character.heal(heal);
        let restored = self.state.character.restore_mana(mana);
        self.push(Notification::success(format!(
            "Used {} (+{} HP, +{} MP)",
            def.name, healed, restored
        )));
        Ok(())
    }

    /// Picks up items from the world (herb patches, chests); drives
    /// collect objectives.
    pub fn collect_item(&mut self, item_id: &str, amount: u32) -> Result<Vec<GameEvent>, InventoryError> {
        let def = get_item(item_id)
            .ok_or_else(|| InventoryError::UnknownItem(item_id.to_string()))?;
        self.state.character.inventory.add(item_id, amount)?;
        let mut events = Vec::new();
        let quest_events =
            self.quests
                .on_item_collected(def.name, amount, &mut self.state.character);
        self.ingest_quest_events(quest_events, &mut events);
        Ok(events)
    }

    // ── Merchant economy ────────────────────────────────────────────

    pub fn buy_item(&mut self, npc_id: &str, item_id: &str) -> Result<Vec<GameEvent>, ShopError> {
        let npc = get_npc(npc_id).ok_or(ShopError::UnknownMerchant)?;
        let entry = npc
            .shop
            .iter()
            .find(|e| e.item_id == item_id)
            .ok_or_else(|| ShopError::NotSold(npc.name.to_string()))?;

        if self.state.shop_stock.remaining(npc, item_id) == 0 {
            self.push(Notification::warning("That item is out of stock."));
            return Err(ShopError::OutOfStock);
        }
        if let Err(e) = self.state.character.spend_gold(entry.price) {
            self.push(Notification::warning(e.to_string()));
            return Err(e.into());
        }
        if let Err(e) = self.state.character.inventory.add(item_id, 1) {
            // Refund: the purchase never happened.
            self.state.character.add_gold(entry.price);
            self.push(Notification::warning(e.to_string()));
            return Err(e.into());
        }
        self.state.shop_stock.take_one(npc, item_id);

        let def = get_item(item_id).ok_or_else(|| ShopError::NotSold(npc.name.to_string()))?;
        self.push(Notification::success(format!(
            "Bought {} for {} gold",
            def.name, entry.price
        )));

        let mut events = vec![GameEvent::ItemPurchased {
            item_id: item_id.to_string(),
            price: entry.price,
        }];
        let quest_events = self
            .quests
            .on_item_collected(def.name, 1, &mut self.state.character);
        self.ingest_quest_events(quest_events, &mut events);
        Ok(events)
    }

    /// Sells one carried item at half its value.
    pub fn sell_item(&mut self, item_id: &str) -> Result<u64, ShopError> {
        let def = get_item(item_id)
            .ok_or_else(|| ShopError::Inventory(InventoryError::UnknownItem(item_id.to_string())))?;
        self.state.character.inventory.remove(item_id, 1)?;
        let price = def.value / SELL_VALUE_DIVISOR;
        self.state.character.add_gold(price);
        self.push(Notification::info(format!(
            "Sold {} for {} gold",
            def.name, price
        )));
        Ok(price)
    }

    // ── Internals ───────────────────────────────────────────────────

    /// Roster of the current zone minus despawned enemies.
    fn living_roster(&self) -> Vec<EnemyTemplate> {
        self.zones
            .enemy_roster(self.state.current_zone)
            .into_iter()
            .filter(|t| !self.state.defeated_spawns.contains(&t.spawn_id))
            .collect()
    }

    fn begin_battle(&mut self, template: &EnemyTemplate, ambush: bool) -> Vec<GameEvent> {
        let zone_min_level = self
            .zones
            .get_zone(self.state.current_zone)
            .map(|z| z.min_level())
            .unwrap_or(1);
        match self.engine.start_battle(template, zone_min_level) {
            Ok(enemy) => {
                let name = enemy.name.clone();
                self.push(Notification::warning(format!(
                    "Battle started against: {name}!"
                )));
                vec![GameEvent::BattleStarted {
                    enemy_name: name,
                    ambush,
                }]
            }
            Err(_) => Vec::new(),
        }
    }

    /// Applies one combat event's side effects (despawn bookkeeping,
    /// quest fan-out, defeat relocation) and queues its notifications.
    fn apply_combat_event(&mut self, event: &CombatEvent, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::Combat(event.clone()));
        match event {
            CombatEvent::BattleWon {
                enemy_name,
                xp_gained,
                gold_gained,
                source_id,
            } => {
                self.push(Notification::success(format!(
                    "Victory! +{xp_gained} XP, +{gold_gained} Gold"
                )));
                if let Some(spawn_id) = source_id {
                    self.state.defeated_spawns.insert(spawn_id.clone());
                }
                let quest_events = self
                    .quests
                    .on_enemy_killed(enemy_name, &mut self.state.character);
                self.ingest_quest_events(quest_events, events);
            }
            CombatEvent::LeveledUp { new_level } => {
                self.push(Notification::success(format!(
                    "Level Up! You are now level {new_level}!"
                )));
                if new_level % TALENT_POINT_LEVEL_INTERVAL == 0 {
                    self.push(Notification::success("You gained a talent point!"));
                }
            }
            CombatEvent::BattleLost => {
                self.push(Notification::warning(
                    "You have been defeated! Returning to the village...",
                ));
                self.state.current_zone = STARTING_ZONE_ID;
                self.state.player_x = RESPAWN_POSITION_X;
            }
            _ => {}
        }
    }

    /// Folds quest events into the outgoing event list and notifies.
    fn ingest_quest_events(&mut self, quest_events: Vec<QuestEvent>, events: &mut Vec<GameEvent>) {
        for event in quest_events {
            match &event {
                QuestEvent::ObjectiveCompleted { quest_id, .. } => {
                    let title = get_quest(quest_id).map(|q| q.title).unwrap_or("quest");
                    self.push(Notification::success(format!(
                        "Objective complete ({title})"
                    )));
                }
                QuestEvent::ObjectiveProgressed {
                    quest_id,
                    current,
                    required,
                    ..
                } => {
                    if current < required {
                        let title = get_quest(quest_id).map(|q| q.title).unwrap_or("quest");
                        self.push(Notification::info(format!("{title}: {current}/{required}")));
                    }
                }
                QuestEvent::Completed {
                    quest_id, xp, gold, ..
                } => {
                    let title = get_quest(quest_id).map(|q| q.title).unwrap_or("quest");
                    self.push(Notification::success(format!(
                        "Quest Completed: {title}! +{xp} XP, +{gold} Gold"
                    )));
                }
                QuestEvent::Unlocked { quest_id } => {
                    let title = get_quest(quest_id).map(|q| q.title).unwrap_or("quest");
                    self.push(Notification::info(format!("New Quest Available: {title}")));
                }
                _ => {}
            }
            events.push(GameEvent::Quest(event));
        }
    }

    fn push(&mut self, notification: Notification) {
        if self.notifications.len() >= NOTIFICATION_CAPACITY {
            self.notifications.pop_front();
        }
        self.notifications.push_back(notification);
    }
}
