//! Append-only slot table for graph records.
//!
//! Identifiers are handed out densely from zero and never reused. Removal
//! empties the slot in place, so "is this handle still alive" is a bounds
//! check and a discriminant load, and the slot is the only record of it.

/// Outcome of [`PresenceTable::take_if`].
pub(crate) enum Take<'a, T> {
    /// Nothing is stored under the identifier.
    Absent,
    /// The entry was refused and stays in place.
    Kept(&'a T),
    /// The entry was removed.
    Taken(T),
}

/// Per-identifier slots that only grow. An empty slot is a retired id.
#[derive(Debug, Clone)]
pub(crate) struct PresenceTable<T> {
    slots: Vec<Option<T>>,
    live: usize,
}

impl<T> PresenceTable<T> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            live: 0,
        }
    }

    /// Stores `value` under the next identifier.
    pub(crate) fn insert(&mut self, value: T) -> usize {
        let id = self.slots.len();
        self.slots.push(Some(value));
        self.live += 1;
        id
    }

    #[inline(always)]
    pub(crate) fn contains(&self, id: usize) -> bool {
        self.get(id).is_some()
    }

    #[inline]
    pub(crate) fn get(&self, id: usize) -> Option<&T> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: usize) -> Option<&mut T> {
        self.slots.get_mut(id).and_then(Option::as_mut)
    }

    /// Retires `id` and returns its entry. `None` if it was not present.
    pub(crate) fn take(&mut self, id: usize) -> Option<T> {
        let value = self.slots.get_mut(id)?.take()?;
        self.live -= 1;
        Some(value)
    }

    /// Retires `id` only if `accept` approves its entry.
    pub(crate) fn take_if(&mut self, id: usize, accept: impl FnOnce(&T) -> bool) -> Take<'_, T> {
        let accepted = match self.get(id) {
            Some(value) => accept(value),
            None => return Take::Absent,
        };
        if accepted {
            self.take(id).map_or(Take::Absent, Take::Taken)
        } else {
            self.get(id).map_or(Take::Absent, Take::Kept)
        }
    }

    /// Number of identifiers ever issued.
    #[inline(always)]
    pub(crate) fn issued(&self) -> usize {
        self.slots.len()
    }

    /// Number of identifiers still present.
    #[inline(always)]
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    /// Present entries in allocation order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|value| (id, value)))
    }
}

impl<T> Default for PresenceTable<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
