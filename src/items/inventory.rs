//! Player inventory: slotted item storage plus equipment.

use crate::core::constants::INVENTORY_SLOTS;
use crate::items::types::{get_item, EquipSlot, ItemKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One occupied inventory slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    pub item_id: String,
    pub quantity: u32,
}

/// Currently equipped item ids, one per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub accessory: Option<String>,
}

impl Equipment {
    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<String> {
        match slot {
            EquipSlot::Weapon => &mut self.weapon,
            EquipSlot::Armor => &mut self.armor,
            EquipSlot::Accessory => &mut self.accessory,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("inventory is full")]
    Full,
    #[error("unknown item `{0}`")]
    UnknownItem(String),
    #[error("item `{0}` is not carried")]
    NotCarried(String),
    #[error("item `{0}` cannot be equipped")]
    NotEquippable(String),
    #[error("item `{0}` cannot be used")]
    NotUsable(String),
}

/// Slotted item storage. Stackable items merge up to their max stack;
/// each stack (or single item) occupies one of the fixed slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub items: Vec<ItemStack>,
    pub equipment: Equipment,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            equipment: Equipment::default(),
        }
    }

    /// Adds `quantity` of an item, merging into existing stacks first.
    /// Fails with `Full` if a new slot would be needed and none is free;
    /// partial merges are kept (the overflow is what fails).
    pub fn add(&mut self, item_id: &str, quantity: u32) -> Result<(), InventoryError> {
        let def = get_item(item_id).ok_or_else(|| InventoryError::UnknownItem(item_id.to_string()))?;
        let mut remaining = quantity;

        if def.stackable() {
            for stack in self.items.iter_mut().filter(|s| s.item_id == item_id) {
                let space = def.max_stack.saturating_sub(stack.quantity);
                let moved = space.min(remaining);
                stack.quantity += moved;
                remaining -= moved;
                if remaining == 0 {
                    return Ok(());
                }
            }
        }

        while remaining > 0 {
            if self.items.len() >= INVENTORY_SLOTS {
                return Err(InventoryError::Full);
            }
            let moved = remaining.min(def.max_stack);
            self.items.push(ItemStack {
                item_id: item_id.to_string(),
                quantity: moved,
            });
            remaining -= moved;
        }
        Ok(())
    }

    /// Removes `quantity` of an item across stacks.
    pub fn remove(&mut self, item_id: &str, quantity: u32) -> Result<(), InventoryError> {
        if self.count(item_id) < quantity {
            return Err(InventoryError::NotCarried(item_id.to_string()));
        }
        let mut remaining = quantity;
        for stack in self.items.iter_mut().filter(|s| s.item_id == item_id) {
            let taken = stack.quantity.min(remaining);
            stack.quantity -= taken;
            remaining -= taken;
            if remaining == 0 {
                break;
            }
        }
        self.items.retain(|s| s.quantity > 0);
        Ok(())
    }

    /// Total quantity carried (not counting equipped items).
    pub fn count(&self, item_id: &str) -> u32 {
        self.items
            .iter()
            .filter(|s| s.item_id == item_id)
            .map(|s| s.quantity)
            .sum()
    }

    /// True if the item is carried or equipped. Zone entry requirements
    /// accept a key that is worn as much as one in the bag.
    pub fn has(&self, item_id: &str) -> bool {
        self.count(item_id) > 0
            || [
                &self.equipment.weapon,
                &self.equipment.armor,
                &self.equipment.accessory,
            ]
            .iter()
            .any(|slot| slot.as_deref() == Some(item_id))
    }

    /// Equips a carried item, returning the previously equipped item (if
    /// any) to the bag.
    pub fn equip(&mut self, item_id: &str) -> Result<(), InventoryError> {
        let def = get_item(item_id).ok_or_else(|| InventoryError::UnknownItem(item_id.to_string()))?;
        let slot = def
            .kind
            .slot()
            .ok_or_else(|| InventoryError::NotEquippable(item_id.to_string()))?;
        if self.count(item_id) == 0 {
            return Err(InventoryError::NotCarried(item_id.to_string()));
        }

        self.remove(item_id, 1)?;
        let previous = self.equipment.slot_mut(slot).replace(item_id.to_string());
        if let Some(prev) = previous {
            // Equipment never stacks, so the slot freed by `remove` above
            // guarantees room for the swapped-out item.
            self.add(&prev, 1)?;
        }
        Ok(())
    }

    /// Total attack contributed by equipped items.
    pub fn attack_bonus(&self) -> u32 {
        self.equipped_kinds()
            .map(|kind| match kind {
                ItemKind::Weapon { attack, .. } => attack,
                _ => 0,
            })
            .sum()
    }

    /// Total defense contributed by equipped items.
    pub fn defense_bonus(&self) -> u32 {
        self.equipped_kinds()
            .map(|kind| match kind {
                ItemKind::Armor { defense, .. } => defense,
                _ => 0,
            })
            .sum()
    }

    /// Total max-HP contributed by equipped items.
    pub fn max_hp_bonus(&self) -> u32 {
        self.equipped_kinds()
            .map(|kind| match kind {
                ItemKind::Armor { max_hp, .. } => max_hp,
                _ => 0,
            })
            .sum()
    }

    /// Total crit chance contributed by equipped items.
    pub fn crit_chance_bonus(&self) -> f64 {
        self.equipped_kinds()
            .map(|kind| match kind {
                ItemKind::Weapon { crit_chance, .. } => crit_chance,
                ItemKind::Accessory { crit_chance } => crit_chance,
                _ => 0.0,
            })
            .sum()
    }

    fn equipped_kinds(&self) -> impl Iterator<Item = ItemKind> + '_ {
        [
            self.equipment.weapon.as_deref(),
            self.equipment.armor.as_deref(),
            self.equipment.accessory.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter_map(|id| get_item(id).map(|def| def.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_count() {
        let mut inv = Inventory::new();
        inv.add("health-potion", 3).unwrap();
        inv.add("health-potion", 2).unwrap();
        assert_eq!(inv.count("health-potion"), 5);
        assert_eq!(inv.items.len(), 1); // merged into one stack
    }

    #[test]
    fn test_stack_overflow_opens_new_slot() {
        let mut inv = Inventory::new();
        inv.add("health-potion", 20).unwrap(); // max stack
        inv.add("health-potion", 1).unwrap();
        assert_eq!(inv.items.len(), 2);
        assert_eq!(inv.count("health-potion"), 21);
    }

    #[test]
    fn test_unstackable_items_take_one_slot_each() {
        let mut inv = Inventory::new();
        inv.add("rusty-sword", 1).unwrap();
        inv.add("rusty-sword", 1).unwrap();
        assert_eq!(inv.items.len(), 2);
    }

    #[test]
    fn test_full_inventory_rejected() {
        let mut inv = Inventory::new();
        for _ in 0..INVENTORY_SLOTS {
            inv.add("rusty-sword", 1).unwrap();
        }
        assert_eq!(inv.add("iron-sword", 1), Err(InventoryError::Full));
        assert_eq!(inv.items.len(), INVENTORY_SLOTS);
    }

    #[test]
    fn test_remove() {
        let mut inv = Inventory::new();
        inv.add("wolf-pelt", 10).unwrap();
        inv.remove("wolf-pelt", 4).unwrap();
        assert_eq!(inv.count("wolf-pelt"), 6);

        assert_eq!(
            inv.remove("wolf-pelt", 99),
            Err(InventoryError::NotCarried("wolf-pelt".to_string()))
        );
        assert_eq!(inv.count("wolf-pelt"), 6); // unchanged on failure
    }

    #[test]
    fn test_equip_weapon() {
        let mut inv = Inventory::new();
        inv.add("iron-sword", 1).unwrap();
        inv.equip("iron-sword").unwrap();
        assert_eq!(inv.equipment.weapon.as_deref(), Some("iron-sword"));
        assert_eq!(inv.count("iron-sword"), 0);
        assert_eq!(inv.attack_bonus(), 10);
    }

    #[test]
    fn test_equip_swaps_previous_to_bag() {
        let mut inv = Inventory::new();
        inv.add("rusty-sword", 1).unwrap();
        inv.add("iron-sword", 1).unwrap();
        inv.equip("rusty-sword").unwrap();
        inv.equip("iron-sword").unwrap();
        assert_eq!(inv.equipment.weapon.as_deref(), Some("iron-sword"));
        assert_eq!(inv.count("rusty-sword"), 1);
    }

    #[test]
    fn test_equip_rejects_non_equipment() {
        let mut inv = Inventory::new();
        inv.add("wolf-pelt", 1).unwrap();
        assert_eq!(
            inv.equip("wolf-pelt"),
            Err(InventoryError::NotEquippable("wolf-pelt".to_string()))
        );
    }

    #[test]
    fn test_equip_rejects_uncarried() {
        let mut inv = Inventory::new();
        assert_eq!(
            inv.equip("iron-sword"),
            Err(InventoryError::NotCarried("iron-sword".to_string()))
        );
    }

    #[test]
    fn test_has_counts_equipped_items() {
        let mut inv = Inventory::new();
        inv.add("mystic-amulet", 1).unwrap();
        inv.equip("mystic-amulet").unwrap();
        assert!(inv.has("mystic-amulet"));
        assert_eq!(inv.count("mystic-amulet"), 0);
    }

    #[test]
    fn test_armor_bonuses() {
        let mut inv = Inventory::new();
        inv.add("chainmail", 1).unwrap();
        inv.equip("chainmail").unwrap();
        assert_eq!(inv.defense_bonus(), 10);
        assert_eq!(inv.max_hp_bonus(), 20);
    }

    #[test]
    fn test_crit_bonus_sums_weapon_and_accessory() {
        let mut inv = Inventory::new();
        inv.add("iron-sword", 1).unwrap();
        inv.add("mystic-amulet", 1).unwrap();
        inv.equip("iron-sword").unwrap();
        inv.equip("mystic-amulet").unwrap();
        assert!((inv.crit_chance_bonus() - 0.07).abs() < 1e-9);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut inv = Inventory::new();
        inv.add("iron-sword", 1).unwrap();
        inv.add("health-potion", 7).unwrap();
        inv.equip("iron-sword").unwrap();

        let json = serde_json::to_string(&inv).unwrap();
        let loaded: Inventory = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, inv);
    }
}
