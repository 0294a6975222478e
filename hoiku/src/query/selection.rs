//! Selection tracker for bulk actions.

use std::collections::BTreeSet;

use crate::reservation::{Reservation, ReservationId};

/// Set of selected reservation ids.
///
/// # Examples
///
/// ```
/// use hoiku::query::Selection;
/// use hoiku::ReservationId;
///
/// let id = ReservationId::new("r-001").unwrap();
/// let mut selection = Selection::new();
///
/// assert!(selection.toggle(&id));
/// assert!(selection.contains(&id));
/// assert!(!selection.toggle(&id));
/// assert!(selection.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<ReservationId>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` if absent, removes it if present.
    ///
    /// Returns true if the id is selected afterwards.
    pub fn toggle(&mut self, id: &ReservationId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Replaces the selection with the ids of `visible`.
    ///
    /// Only the records passed in are selected; callers pass the current
    /// filtered view, not the whole store.
    pub fn select_all<'a, I>(&mut self, visible: I)
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        self.ids = visible.into_iter().map(|r| r.id().clone()).collect();
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Returns true if `id` is selected.
    #[must_use]
    pub fn contains(&self, id: &ReservationId) -> bool {
        self.ids.contains(id)
    }

    /// Returns the number of selected ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the selected ids in id order.
    #[must_use]
    pub fn ids(&self) -> Vec<ReservationId> {
        self.ids.iter().cloned().collect()
    }

    /// Iterates over the selected ids in id order.
    pub fn iter(&self) -> impl Iterator<Item = &ReservationId> {
        self.ids.iter()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a ReservationId;
    type IntoIter = std::collections::btree_set::Iter<'a, ReservationId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
