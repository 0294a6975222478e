//! Dashboard view: filter, sort, stats and selection over one snapshot.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::query::{sort_reservations, ReservationFilter, ReservationStats, Selection, SortSpec};
use crate::repository::ReservationRepository;
use crate::reservation::{Reservation, ReservationId};

/// Behaviour switches for [`ReservationView`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Drop the selection whenever the filter changes.
    #[serde(default)]
    pub clear_selection_on_filter_change: bool,
    /// Ordering used until the caller picks another.
    #[serde(default)]
    pub default_sort: SortSpec,
}

/// Query state over an owned snapshot of reservations.
///
/// # Examples
///
/// ```
/// use hoiku::query::{ReservationFilter, ReservationView};
/// use hoiku::sample::sample_reservations;
/// use hoiku::ReservationStatus;
///
/// let mut view = ReservationView::new(sample_reservations());
/// view.set_filter(ReservationFilter::new().with_statuses([ReservationStatus::Confirmed]));
/// view.select_all();
///
/// assert_eq!(view.visible().len(), 2);
/// assert_eq!(view.selection().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct ReservationView {
    records: Vec<Reservation>,
    filter: ReservationFilter,
    sort: SortSpec,
    selection: Selection,
    config: ViewConfig,
}

impl ReservationView {
    /// Creates a view with default settings.
    #[must_use]
    pub fn new(records: Vec<Reservation>) -> Self {
        Self::with_config(records, ViewConfig::default())
    }

    /// Creates a view with explicit settings.
    #[must_use]
    pub fn with_config(records: Vec<Reservation>, config: ViewConfig) -> Self {
        Self {
            records,
            filter: ReservationFilter::default(),
            sort: config.default_sort,
            selection: Selection::new(),
            config,
        }
    }

    /// Loads a snapshot from `repository`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn from_repository<R>(repository: &R, config: ViewConfig) -> Result<Self>
    where
        R: ReservationRepository + ?Sized,
    {
        Ok(Self::with_config(repository.list()?, config))
    }

    /// Replaces the filter.
    pub fn set_filter(&mut self, filter: ReservationFilter) {
        if self.config.clear_selection_on_filter_change && filter != self.filter {
            self.selection.clear();
        }
        self.filter = filter;
    }

    /// Replaces the sort order.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> &ReservationFilter {
        &self.filter
    }

    /// Returns the active sort order.
    #[must_use]
    pub const fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Returns every record in the snapshot, unfiltered.
    #[must_use]
    pub fn records(&self) -> &[Reservation] {
        &self.records
    }

    /// Returns the filtered, sorted records.
    #[must_use]
    pub fn visible(&self) -> Vec<&Reservation> {
        compute_visible(&self.records, &self.filter, self.sort)
    }

    /// Counts over the filtered records.
    #[must_use]
    pub fn stats(&self) -> ReservationStats {
        ReservationStats::from_records(self.filter.apply(&self.records))
    }

    /// Toggles one id in the selection.
    pub fn toggle_selection(&mut self, id: &ReservationId) -> bool {
        self.selection.toggle(id)
    }

    /// Selects exactly the visible records.
    pub fn select_all(&mut self) {
        let visible = compute_visible(&self.records, &self.filter, self.sort);
        self.selection.select_all(visible);
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Returns the raw selection, including ids hidden by the filter.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns selected ids that are currently visible, in view order.
    #[must_use]
    pub fn visible_selection(&self) -> Vec<ReservationId> {
        self.visible()
            .into_iter()
            .filter(|r| self.selection.contains(r.id()))
            .map(|r| r.id().clone())
            .collect()
    }

    /// Swaps in a fresh snapshot, keeping filter, sort and selection.
    pub fn replace_records(&mut self, records: Vec<Reservation>) {
        self.records = records;
    }
}

fn compute_visible<'a>(
    records: &'a [Reservation],
    filter: &ReservationFilter,
    sort: SortSpec,
) -> Vec<&'a Reservation> {
    sort_reservations(&filter.apply(records), sort)
}
