use std::collections::BTreeMap;

use super::entity::Entity;

/// Records of one kind, keyed and iterated by id.
///
/// Ids come from a strictly increasing sequence, so id order is also
/// creation order.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: BTreeMap<T::Id, T>,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }
}

impl<T: Entity> Collection<T> {
    /// Inserts a fully built record, replacing any record with the same id.
    pub fn insert(&mut self, item: T) -> Option<T> {
        self.items.insert(item.id(), item)
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.get(&id)
    }

    /// Applies `patch` and returns the updated record, or `None` if absent.
    pub fn update(&mut self, id: T::Id, patch: T::Patch) -> Option<&T> {
        let item = self.items.get_mut(&id)?;
        item.on_update(patch);
        Some(&*item)
    }

    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        self.items.remove(&id)
    }

    /// Removes every record for which `pred` holds and returns them in id order.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
        let ids: Vec<T::Id> = self
            .items
            .values()
            .filter(|item| pred(item))
            .map(|item| item.id())
            .collect();

        ids.into_iter().filter_map(|id| self.items.remove(&id)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
