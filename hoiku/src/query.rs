//! Reservation query layer.
//!
//! Records flow through a filter stage, then a sort stage, to produce the
//! list a dashboard displays. Stats and the selection set hang off the same
//! view. Every stage is pure over borrowed records; [`ReservationView`]
//! bundles the state a screen keeps between interactions.

mod filter;
mod selection;
mod sort;
mod stats;
mod view;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use filter::{filter_reservations, DateRange, ReservationFilter};
pub use selection::Selection;
pub use sort::{locale_compare, sort_reservations, SortDirection, SortKey, SortSpec};
pub use stats::{DashboardStats, ReservationStats};
pub use view::{ReservationView, ViewConfig};
