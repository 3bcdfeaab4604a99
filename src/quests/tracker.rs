//! Per-quest state machines and objective tracking.
//!
//! Quest state only ever moves inactive -> available -> active ->
//! completed, except that abandoning a non-story quest returns it to
//! available with its progress wiped. Objective counts never decrease
//! except through that explicit abandon.

use crate::character::progression::Character;
use crate::quests::data::{get_quest, ObjectiveKind, QuestDef, QUEST_CATALOG};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestState {
    Inactive,
    Available,
    Active,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveProgress {
    pub current_count: u32,
    pub completed: bool,
}

/// Runtime record for one quest; the definition stays in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRecord {
    pub state: QuestState,
    pub objectives: Vec<ObjectiveProgress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestError {
    #[error("unknown quest `{0}`")]
    UnknownQuest(String),
    #[error("quest is not available")]
    NotAvailable,
    #[error("requires level {required}")]
    RequirementNotMet { required: u32 },
    #[error("not all objectives are complete")]
    ObjectivesIncomplete,
    #[error("story quests cannot be abandoned")]
    StoryQuest,
    #[error("quest is not active")]
    NotActive,
}

/// Something a quest did that the presentation layer should surface.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestEvent {
    Started { quest_id: String },
    ObjectiveProgressed {
        quest_id: String,
        objective_id: String,
        current: u32,
        required: u32,
    },
    ObjectiveCompleted {
        quest_id: String,
        objective_id: String,
    },
    Completed {
        quest_id: String,
        xp: u64,
        gold: u64,
        item: Option<&'static str>,
    },
    Unlocked { quest_id: String },
    Abandoned { quest_id: String },
}

/// A presentation-ready view of one active quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestLogEntry {
    pub quest_id: String,
    pub title: String,
    pub description: String,
    pub objectives: Vec<String>,
    pub completed_objectives: usize,
    pub total_objectives: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestTracker {
    records: BTreeMap<String, QuestRecord>,
}

impl Default for QuestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestTracker {
    /// Creates the tracker with every catalog quest inactive, then opens
    /// the quests that have no chain prerequisite.
    pub fn new() -> Self {
        let mut records = BTreeMap::new();
        for def in QUEST_CATALOG {
            records.insert(
                def.id.to_string(),
                QuestRecord {
                    state: QuestState::Inactive,
                    objectives: vec![ObjectiveProgress::default(); def.objectives.len()],
                },
            );
        }
        for id in crate::quests::data::INITIAL_AVAILABLE_QUESTS {
            if let Some(record) = records.get_mut(*id) {
                record.state = QuestState::Available;
            }
        }
        Self { records }
    }

    pub fn state(&self, quest_id: &str) -> Option<QuestState> {
        self.records.get(quest_id).map(|r| r.state)
    }

    pub fn record(&self, quest_id: &str) -> Option<&QuestRecord> {
        self.records.get(quest_id)
    }

    /// Starts an available quest. Level requirements gate here, not at
    /// unlock time, so an underleveled player sees the quest but cannot
    /// take it.
    pub fn start_quest(&mut self, quest_id: &str, character_level: u32) -> Result<(), QuestError> {
        let def = get_quest(quest_id)
            .ok_or_else(|| QuestError::UnknownQuest(quest_id.to_string()))?;
        let record = self
            .records
            .get_mut(quest_id)
            .ok_or_else(|| QuestError::UnknownQuest(quest_id.to_string()))?;

        if record.state != QuestState::Available {
            return Err(QuestError::NotAvailable);
        }
        if let Some(required) = def.level_requirement {
            if character_level < required {
                return Err(QuestError::RequirementNotMet { required });
            }
        }
        record.state = QuestState::Active;
        Ok(())
    }

    /// Advances an objective by `delta`, capped at its required count.
    /// No-op unless the quest is active and the objective incomplete.
    /// Completing the last objective completes the quest and grants its
    /// rewards in the same call.
    pub fn update_objective(
        &mut self,
        quest_id: &str,
        objective_id: &str,
        delta: u32,
        character: &mut Character,
    ) -> Vec<QuestEvent> {
        let Some(def) = get_quest(quest_id) else {
            return Vec::new();
        };
        let Some(record) = self.records.get_mut(quest_id) else {
            return Vec::new();
        };
        if record.state != QuestState::Active {
            return Vec::new();
        }
        let Some(index) = def.objectives.iter().position(|o| o.id == objective_id) else {
            return Vec::new();
        };
        let objective = &def.objectives[index];
        let progress = &mut record.objectives[index];
        if progress.completed {
            return Vec::new();
        }

        progress.current_count = (progress.current_count + delta).min(objective.required_count);
        let mut events = vec![QuestEvent::ObjectiveProgressed {
            quest_id: quest_id.to_string(),
            objective_id: objective_id.to_string(),
            current: progress.current_count,
            required: objective.required_count,
        }];

        if progress.current_count >= objective.required_count {
            progress.completed = true;
            events.push(QuestEvent::ObjectiveCompleted {
                quest_id: quest_id.to_string(),
                objective_id: objective_id.to_string(),
            });
        }

        if record.objectives.iter().all(|o| o.completed) {
            if let Ok(mut completion) = self.complete_quest(quest_id, character) {
                events.append(&mut completion);
            }
        }
        events
    }

    /// Completes an active quest whose objectives are all done: grants
    /// rewards exactly once, moves the state to Completed, and unlocks
    /// the next quest in the chain. Repeatable quests return to Available
    /// with fresh objectives instead.
    pub fn complete_quest(
        &mut self,
        quest_id: &str,
        character: &mut Character,
    ) -> Result<Vec<QuestEvent>, QuestError> {
        let def = get_quest(quest_id)
            .ok_or_else(|| QuestError::UnknownQuest(quest_id.to_string()))?;
        let record = self
            .records
            .get_mut(quest_id)
            .ok_or_else(|| QuestError::UnknownQuest(quest_id.to_string()))?;

        if record.state != QuestState::Active {
            return Err(QuestError::NotActive);
        }
        if !record.objectives.iter().all(|o| o.completed) {
            return Err(QuestError::ObjectivesIncomplete);
        }

        // State moves before rewards are visible anywhere, so a re-entrant
        // completion attempt cannot double-grant.
        if def.repeatable {
            record.state = QuestState::Available;
            for progress in &mut record.objectives {
                *progress = ObjectiveProgress::default();
            }
        } else {
            record.state = QuestState::Completed;
        }

        character.add_experience(def.rewards.xp);
        character.add_gold(def.rewards.gold);
        if let Some(item) = def.rewards.item {
            // A full bag forfeits the item; xp and gold still land.
            let _ = character.inventory.add(item, 1);
        }

        let mut events = vec![QuestEvent::Completed {
            quest_id: quest_id.to_string(),
            xp: def.rewards.xp,
            gold: def.rewards.gold,
            item: def.rewards.item,
        }];

        if let Some(next_id) = def.next_quest {
            if let Some(next) = self.records.get_mut(next_id) {
                if next.state == QuestState::Inactive {
                    next.state = QuestState::Available;
                    events.push(QuestEvent::Unlocked {
                        quest_id: next_id.to_string(),
                    });
                }
            }
        }
        Ok(events)
    }

    /// Abandons a non-story active quest: all progress is reset and the
    /// quest returns to Available.
    pub fn abandon_quest(&mut self, quest_id: &str) -> Result<QuestEvent, QuestError> {
        let def = get_quest(quest_id)
            .ok_or_else(|| QuestError::UnknownQuest(quest_id.to_string()))?;
        if def.is_story_quest {
            return Err(QuestError::StoryQuest);
        }
        let record = self
            .records
            .get_mut(quest_id)
            .ok_or_else(|| QuestError::UnknownQuest(quest_id.to_string()))?;
        if record.state != QuestState::Active {
            return Err(QuestError::NotActive);
        }

        record.state = QuestState::Available;
        for progress in &mut record.objectives {
            *progress = ObjectiveProgress::default();
        }
        Ok(QuestEvent::Abandoned {
            quest_id: quest_id.to_string(),
        })
    }

    // ── Domain event reactions ──────────────────────────────────────
    // Each fans out to every active quest with a matching objective.

    pub fn on_enemy_killed(&mut self, name: &str, character: &mut Character) -> Vec<QuestEvent> {
        self.react(ObjectiveKind::Kill, name, 1, character)
    }

    pub fn on_npc_talk(&mut self, name: &str, character: &mut Character) -> Vec<QuestEvent> {
        self.react(ObjectiveKind::Talk, name, 1, character)
    }

    pub fn on_item_collected(
        &mut self,
        item_name: &str,
        amount: u32,
        character: &mut Character,
    ) -> Vec<QuestEvent> {
        self.react(ObjectiveKind::Collect, item_name, amount, character)
    }

    pub fn on_location_reached(&mut self, name: &str, character: &mut Character) -> Vec<QuestEvent> {
        self.react(ObjectiveKind::Location, name, 1, character)
    }

    pub fn on_interact(&mut self, target: &str, character: &mut Character) -> Vec<QuestEvent> {
        self.react(ObjectiveKind::Interact, target, 1, character)
    }

    fn react(
        &mut self,
        kind: ObjectiveKind,
        target: &str,
        amount: u32,
        character: &mut Character,
    ) -> Vec<QuestEvent> {
        let mut matches: Vec<(&'static str, &'static str)> = Vec::new();
        for def in QUEST_CATALOG {
            if self.state(def.id) != Some(QuestState::Active) {
                continue;
            }
            for objective in def.objectives {
                if objective.kind == kind && objective.target == target {
                    matches.push((def.id, objective.id));
                }
            }
        }

        let mut events = Vec::new();
        for (quest_id, objective_id) in matches {
            events.extend(self.update_objective(quest_id, objective_id, amount, character));
        }
        events
    }

    // ── Presentation views ──────────────────────────────────────────

    /// Active quests with human-readable objective lines.
    pub fn quest_log(&self) -> Vec<QuestLogEntry> {
        QUEST_CATALOG
            .iter()
            .filter(|def| self.state(def.id) == Some(QuestState::Active))
            .map(|def| {
                let record = &self.records[def.id];
                QuestLogEntry {
                    quest_id: def.id.to_string(),
                    title: def.title.to_string(),
                    description: def.description.to_string(),
                    objectives: def
                        .objectives
                        .iter()
                        .zip(&record.objectives)
                        .map(|(o, p)| format_objective(o, p))
                        .collect(),
                    completed_objectives: record.objectives.iter().filter(|o| o.completed).count(),
                    total_objectives: record.objectives.len(),
                }
            })
            .collect()
    }

    /// Quests the given NPC currently offers.
    pub fn available_quests_for(&self, npc_name: &str) -> Vec<&'static QuestDef> {
        QUEST_CATALOG
            .iter()
            .filter(|def| def.giver == npc_name && self.state(def.id) == Some(QuestState::Available))
            .collect()
    }

    /// Re-establishes invariants after deserializing untrusted data, and
    /// reconciles records against the current catalog.
    pub fn sanitize(&mut self) {
        self.records.retain(|id, _| get_quest(id).is_some());
        for def in QUEST_CATALOG {
            let record = self
                .records
                .entry(def.id.to_string())
                .or_insert_with(|| QuestRecord {
                    state: QuestState::Inactive,
                    objectives: vec![ObjectiveProgress::default(); def.objectives.len()],
                });
            record
                .objectives
                .resize(def.objectives.len(), ObjectiveProgress::default());
            for (objective, progress) in def.objectives.iter().zip(&mut record.objectives) {
                progress.current_count = progress.current_count.min(objective.required_count);
                if progress.completed {
                    progress.current_count = objective.required_count;
                }
            }
        }
    }
}

fn format_objective(def: &crate::quests::data::ObjectiveDef, progress: &ObjectiveProgress) -> String {
    match def.kind {
        ObjectiveKind::Kill => format!(
            "Kill {}: {}/{}",
            def.target, progress.current_count, def.required_count
        ),
        ObjectiveKind::Collect => format!(
            "Collect {}: {}/{}",
            def.target, progress.current_count, def.required_count
        ),
        ObjectiveKind::Talk => format!("Talk to {}", def.target),
        ObjectiveKind::Location => format!("Reach {}", def.target),
        ObjectiveKind::Interact => format!("Interact with {}", def.target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tracker_initial_states() {
        let tracker = QuestTracker::new();
        assert_eq!(tracker.state("welcome-to-town"), Some(QuestState::Available));
        assert_eq!(tracker.state("first-steps"), Some(QuestState::Inactive));
        assert_eq!(tracker.state("herb-gathering"), Some(QuestState::Available));
        assert_eq!(tracker.state("nonsense"), None);
    }

    #[test]
    fn test_start_quest() {
        let mut tracker = QuestTracker::new();
        tracker.start_quest("welcome-to-town", 1).unwrap();
        assert_eq!(tracker.state("welcome-to-town"), Some(QuestState::Active));

        // Starting again fails; it is no longer available.
        assert_eq!(
            tracker.start_quest("welcome-to-town", 1),
            Err(QuestError::NotAvailable)
        );
    }

    #[test]
    fn test_start_quest_not_available() {
        let mut tracker = QuestTracker::new();
        assert_eq!(
            tracker.start_quest("first-steps", 1),
            Err(QuestError::NotAvailable)
        );
    }

    #[test]
    fn test_start_quest_level_requirement() {
        let mut tracker = QuestTracker::new();
        assert_eq!(
            tracker.start_quest("lost-artifact", 10),
            Err(QuestError::RequirementNotMet { required: 15 })
        );
        tracker.start_quest("lost-artifact", 15).unwrap();
    }

    #[test]
    fn test_kill_objective_progress_and_auto_complete() {
        // Scenario D: "kill 3 Wolves" completes on the third kill and
        // rewards land exactly once.
        let mut tracker = QuestTracker::new();
        let mut hero = Character::new("Artemis");
        let gold_before = hero.gold;

        // Walk the chain to first-steps.
        tracker.start_quest("welcome-to-town", 1).unwrap();
        tracker.on_npc_talk("Elder Marcus", &mut hero);
        assert_eq!(tracker.state("first-steps"), Some(QuestState::Available));
        tracker.start_quest("first-steps", 1).unwrap();

        tracker.on_enemy_killed("Wolf", &mut hero);
        tracker.on_enemy_killed("Wolf", &mut hero);
        assert_eq!(tracker.state("first-steps"), Some(QuestState::Active));

        let events = tracker.on_enemy_killed("Wolf", &mut hero);
        assert!(events
            .iter()
            .any(|e| matches!(e, QuestEvent::Completed { quest_id, .. } if quest_id == "first-steps")));
        assert_eq!(tracker.state("first-steps"), Some(QuestState::Completed));

        // welcome-to-town rewards (50xp/10g) + first-steps (100xp/25g), once.
        assert_eq!(hero.gold, gold_before + 10 + 25);
        assert_eq!(hero.inventory.count("leather-boots"), 1);

        // A fourth wolf changes nothing.
        let extra = tracker.on_enemy_killed("Wolf", &mut hero);
        assert!(extra.is_empty());
        assert_eq!(hero.gold, gold_before + 35);
    }

    #[test]
    fn test_objective_count_caps_at_required() {
        let mut tracker = QuestTracker::new();
        let mut hero = Character::new("Artemis");
        tracker.start_quest("herb-gathering", 1).unwrap();

        tracker.on_item_collected("Healing Herb", 25, &mut hero);
        // Over-collection capped at 10 and the quest completed.
        assert_eq!(tracker.state("herb-gathering"), Some(QuestState::Available)); // repeatable
    }

    #[test]
    fn test_events_ignored_when_not_active() {
        let mut tracker = QuestTracker::new();
        let mut hero = Character::new("Artemis");
        // first-steps is inactive; wolf kills must not count.
        let events = tracker.on_enemy_killed("Wolf", &mut hero);
        assert!(events.is_empty());
        assert_eq!(
            tracker.record("first-steps").unwrap().objectives[0].current_count,
            0
        );
    }

    #[test]
    fn test_complete_quest_rejects_incomplete_objectives() {
        let mut tracker = QuestTracker::new();
        let mut hero = Character::new("Artemis");
        tracker.start_quest("welcome-to-town", 1).unwrap();
        // Talk objective untouched.
        let manual = tracker.complete_quest("welcome-to-town", &mut hero);
        assert_eq!(manual, Err(QuestError::ObjectivesIncomplete));
    }

    #[test]
    fn test_chain_unlock_only_from_inactive() {
        let mut tracker = QuestTracker::new();
        let mut hero = Character::new("Artemis");
        tracker.start_quest("welcome-to-town", 1).unwrap();
        let events = tracker.on_npc_talk("Elder Marcus", &mut hero);
        assert!(events
            .iter()
            .any(|e| matches!(e, QuestEvent::Unlocked { quest_id } if quest_id == "first-steps")));
    }

    #[test]
    fn test_abandon_resets_progress() {
        let mut tracker = QuestTracker::new();
        let mut hero = Character::new("Artemis");
        tracker.start_quest("herb-gathering", 1).unwrap();
        tracker.on_item_collected("Healing Herb", 4, &mut hero);
        assert_eq!(
            tracker.record("herb-gathering").unwrap().objectives[0].current_count,
            4
        );

        tracker.abandon_quest("herb-gathering").unwrap();
        assert_eq!(tracker.state("herb-gathering"), Some(QuestState::Available));
        assert_eq!(
            tracker.record("herb-gathering").unwrap().objectives[0].current_count,
            0
        );
    }

    #[test]
    fn test_abandon_rejects_story_quests() {
        let mut tracker = QuestTracker::new();
        tracker.start_quest("welcome-to-town", 1).unwrap();
        assert_eq!(
            tracker.abandon_quest("welcome-to-town"),
            Err(QuestError::StoryQuest)
        );
        assert_eq!(tracker.state("welcome-to-town"), Some(QuestState::Active));
    }

    #[test]
    fn test_repeatable_quest_cycles() {
        let mut tracker = QuestTracker::new();
        let mut hero = Character::new("Artemis");

        for round in 0..2 {
            tracker.start_quest("herb-gathering", 1).unwrap();
            tracker.on_item_collected("Healing Herb", 10, &mut hero);
            assert_eq!(
                tracker.state("herb-gathering"),
                Some(QuestState::Available),
                "round {round}"
            );
        }
        assert_eq!(hero.inventory.count("health-potion"), 2);
    }

    #[test]
    fn test_quest_log_formats_progress() {
        let mut tracker = QuestTracker::new();
        let mut hero = Character::new("Artemis");
        tracker.start_quest("welcome-to-town", 1).unwrap();
        tracker.on_npc_talk("Elder Marcus", &mut hero);
        tracker.start_quest("first-steps", 1).unwrap();
        tracker.on_enemy_killed("Wolf", &mut hero);

        let log = tracker.quest_log();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].title, "First Steps");
        assert_eq!(log[0].objectives, vec!["Kill Wolf: 1/3".to_string()]);
        assert_eq!(log[0].completed_objectives, 0);
    }

    #[test]
    fn test_available_quests_for_npc() {
        let tracker = QuestTracker::new();
        let offered = tracker.available_quests_for("Elder Marcus");
        assert_eq!(offered.len(), 1);
        assert_eq!(offered[0].id, "welcome-to-town");
        assert!(tracker.available_quests_for("Blacksmith Thorin").is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let mut tracker = QuestTracker::new();
        let mut hero = Character::new("Artemis");
        tracker.start_quest("welcome-to-town", 1).unwrap();
        tracker.on_npc_talk("Elder Marcus", &mut hero);
        tracker.start_quest("first-steps", 1).unwrap();
        tracker.on_enemy_killed("Wolf", &mut hero);

        let json = serde_json::to_string(&tracker).unwrap();
        let loaded: QuestTracker = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, tracker);
    }

    #[test]
    fn test_sanitize_caps_counts() {
        let mut tracker = QuestTracker::new();
        tracker
            .records
            .get_mut("first-steps")
            .unwrap()
            .objectives[0]
            .current_count = 99;
        tracker.sanitize();
        assert_eq!(
            tracker.record("first-steps").unwrap().objectives[0].current_count,
            3
        );
    }
}
