#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # hoiku
//!
//! A library for finding childcare facilities and managing their
//! reservations.
//!
//! ## Core Types
//!
//! - [`Reservation`] and [`ReservationStatus`]: a booking and its lifecycle
//! - [`query::ReservationView`]: filter, sort, selection and stats for the
//!   staff dashboard
//! - [`service::ReservationService`]: status changes written through a
//!   [`repository::ReservationRepository`]
//! - [`facility::Facility`]: discovery listings and contact links
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use hoiku::query::{ReservationFilter, SortKey, SortSpec, sort_reservations};
//! use hoiku::sample::sample_reservations;
//! use hoiku::{ReservationStatus, ReservationType};
//!
//! let records = sample_reservations();
//! let filter = ReservationFilter::new()
//!     .with_kinds([ReservationType::TemporaryCare])
//!     .with_statuses([ReservationStatus::Confirmed]);
//!
//! let matching = filter.apply(&records);
//! let sorted = sort_reservations(&matching, SortSpec::desc(SortKey::ChildName));
//! assert_eq!(sorted.len(), 2);
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod facility;
pub mod forms;
pub mod logging;
pub mod query;
pub mod repository;
pub mod reservation;
pub mod sample;
pub mod service;
pub mod template;

pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{
    ChildRef, ParentRef, Reservation, ReservationBuilder, ReservationId, ReservationStatus,
    ReservationType, TimeSlot, ValidationError,
};
