use std::collections::HashMap;

use super::menu::ItemId;

/// The order in progress: item id mapped to a positive quantity.
///
/// This is the only mutable core state. Invariant: no entry is ever stored
/// with a quantity of zero; decrementing to zero deletes the entry. Entry
/// iteration order carries no meaning - display order comes from catalog
/// traversal when the summary is computed.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    entries: HashMap<ItemId, u32>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit, creating the entry at 1 if absent.
    pub fn increment(&mut self, id: &ItemId) {
        *self.entries.entry(id.clone()).or_insert(0) += 1;
    }

    /// Remove one unit. No-op when the item is not in the cart; deletes the
    /// entry when the quantity reaches zero.
    pub fn decrement(&mut self, id: &ItemId) {
        if let Some(quantity) = self.entries.get_mut(id) {
            *quantity -= 1;
            if *quantity == 0 {
                self.entries.remove(id);
            }
        }
    }

    /// Delete the entry regardless of quantity. Idempotent.
    pub fn remove(&mut self, id: &ItemId) {
        self.entries.remove(id);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Current quantity for an item, 0 when absent.
    pub fn quantity(&self, id: &ItemId) -> u32 {
        self.entries.get(id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&ItemId, u32)> {
        self.entries.iter().map(|(id, &quantity)| (id, quantity))
    }
}
